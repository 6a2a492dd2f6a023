//! End-to-end report assembly: narrative in, authoritative report out.
//!
//! Order is fixed: compute facts (failing fast on a bad birth date), parse
//! the narrative, splice the facts in, then persist.

use cipher_base::{ComputedFacts, ReferenceDate};
use tracing::info;

use crate::briefing::{DailyBriefing, merge_briefing};
use crate::dossier::StrategicDossier;
use crate::error::ReportError;
use crate::narrative::parse_narrative;
use crate::profile::{NarrativeProfile, ProfileReport, UserInputs, merge_authoritative};
use crate::store::{ReportKind, ReportStore};

/// Assemble and persist a profile from the generator's raw output.
pub fn assemble_profile<S: ReportStore + ?Sized>(
    store: &S,
    user_id: &str,
    inputs: &UserInputs,
    narrative_text: &str,
    reference: &ReferenceDate,
    timestamp_ms: i64,
) -> Result<ProfileReport, ReportError> {
    let facts = ComputedFacts::from_dob(&inputs.dob, reference)?;
    let narrative: NarrativeProfile = parse_narrative(narrative_text)?;
    let report = merge_authoritative(narrative, &facts, timestamp_ms);
    store.save_profile(user_id, inputs, &report)?;
    info!(user_id, life_path = facts.life_path.value(), "assembled profile");
    Ok(report)
}

/// Assemble and persist a daily briefing from the generator's raw output.
pub fn assemble_briefing<S: ReportStore + ?Sized>(
    store: &S,
    user_id: &str,
    dob: &str,
    narrative_text: &str,
    reference: &ReferenceDate,
) -> Result<DailyBriefing, ReportError> {
    let facts = ComputedFacts::from_dob(dob, reference)?;
    let narrative: DailyBriefing = parse_narrative(narrative_text)?;
    let briefing = merge_briefing(narrative, &facts);
    store.save_report(user_id, ReportKind::Briefing, &serde_json::to_value(&briefing)?)?;
    info!(
        user_id,
        personal_day = facts.cycles.personal_day.value(),
        "assembled briefing"
    );
    Ok(briefing)
}

/// Parse and persist a strategic dossier; it has no computed fields to splice.
pub fn assemble_dossier<S: ReportStore + ?Sized>(
    store: &S,
    user_id: &str,
    narrative_text: &str,
) -> Result<StrategicDossier, ReportError> {
    let dossier: StrategicDossier = parse_narrative(narrative_text)?;
    store.save_report(user_id, ReportKind::Dossier, &serde_json::to_value(&dossier)?)?;
    info!(user_id, "assembled dossier");
    Ok(dossier)
}
