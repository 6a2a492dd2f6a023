//! Report assembly on top of the calendar-cipher engine.
//!
//! Narrative text from an external generator is parsed, the engine's
//! computed facts are spliced over it, and the result is persisted through
//! [`ReportStore`]. Journaling logs share the same store.

pub mod assemble;
pub mod briefing;
pub mod dossier;
pub mod error;
pub mod journal;
pub mod narrative;
pub mod profile;
pub mod store;

pub use assemble::{assemble_briefing, assemble_dossier, assemble_profile};
pub use briefing::{DailyBriefing, DayIdentity, ThreeArrows, merge_briefing};
pub use dossier::StrategicDossier;
pub use error::ReportError;
pub use journal::{
    ClarityLog, FearLog, ImpactKind, ImpactLog, JournalLogs, LieLog, LogEntry, PATTERN_WINDOW,
    net_syntropy, recent_patterns,
};
pub use narrative::{parse_narrative, strip_code_fences};
pub use profile::{
    FieldDrift, NarrativeProfile, ProfileReport, UserInputs, find_drift, merge_authoritative,
};
pub use store::{JsonFileStore, ReportKind, ReportStore, StoredProfile, validate_user_id};
