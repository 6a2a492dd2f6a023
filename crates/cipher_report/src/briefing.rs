//! Daily briefing narrative and its personal-day splice.

use cipher_base::ComputedFacts;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DayIdentity {
    pub date: String,
    #[serde(deserialize_with = "crate::narrative::overwritten_number")]
    pub personal_day_number: u32,
    pub moon_phase: String,
    pub astro_transits: String,
    pub energy_quality: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreeArrows {
    pub head: String,
    pub hands: String,
    pub heart: String,
}

/// One day's briefing as returned by the narrative generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyBriefing {
    pub day_identity: DayIdentity,
    pub narrator_bullets: Vec<String>,
    pub one_line_compass: String,
    pub three_arrows: ThreeArrows,
    pub opportunity_window: String,
    pub money_signal: String,
    pub power_move: String,
    pub shadow_warning: String,
    pub relationship_lens: String,
    pub mind_body_reset: String,
    pub signature_ritual: String,
    pub lesson: String,
    pub night_reflection: Vec<String>,
}

/// Replace the briefing's personal day number with the computed one.
pub fn merge_briefing(briefing: DailyBriefing, facts: &ComputedFacts) -> DailyBriefing {
    let personal_day = u32::from(facts.cycles.personal_day.value());
    let mut merged = briefing;
    if merged.day_identity.personal_day_number != personal_day {
        warn!(
            narrative = merged.day_identity.personal_day_number,
            computed = personal_day,
            "briefing personal day drifted, overwriting"
        );
    }
    merged.day_identity.personal_day_number = personal_day;
    merged
}
