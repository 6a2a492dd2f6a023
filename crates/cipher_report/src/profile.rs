//! Identity profile reports and the authoritative merge.
//!
//! A profile is assembled as: generate narrative, splice in the computed
//! facts, then persist or display. The merge takes the narrative by value
//! and returns a new report, so concurrent assemblies never share state.

use cipher_base::ComputedFacts;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// What the user supplied when requesting a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInputs {
    pub full_name: String,
    /// Birth date as `YYYY-MM-DD`.
    pub dob: String,
    pub birth_time: String,
    pub birth_location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumerologySection {
    #[serde(deserialize_with = "crate::narrative::overwritten_number")]
    pub life_path_number: u32,
    pub expression_number: u32,
    pub soul_urge_number: u32,
    pub personality_number: u32,
    #[serde(deserialize_with = "crate::narrative::overwritten_number")]
    pub personal_year: u32,
    #[serde(deserialize_with = "crate::narrative::overwritten_number")]
    pub personal_month: u32,
    #[serde(deserialize_with = "crate::narrative::overwritten_number")]
    pub personal_day: u32,
    pub archetype_title: String,
    pub expression_description: String,
    pub pinnacles: Vec<String>,
    pub challenges: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AstrologySection {
    pub sun_sign: String,
    pub moon_sign: String,
    pub rising_sign: String,
    pub element: String,
    pub modality: String,
    pub current_transit: String,
    pub upcoming_transit: String,
}

/// Can Chi section. `nup_am_element` (the Na-Yin "deep" element) comes from
/// the collaborator and is kept; the other cipher fields are overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZodiacSection {
    pub stem: String,
    pub branch: String,
    pub animal: String,
    pub stem_element: String,
    pub nup_am_element: String,
    pub attributes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineEvent {
    pub phase: String,
    pub description: String,
    pub years: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitKind {
    #[default]
    Strength,
    Challenge,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrengthChallenge {
    #[serde(rename = "type")]
    pub kind: TraitKind,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryHooks {
    pub hero: String,
    pub numerology: String,
    pub astrology: String,
    pub vietnamese: String,
    pub timeline: String,
    pub tools: String,
    pub daily: String,
}

/// Profile text as returned by the narrative generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NarrativeProfile {
    pub numerology: NumerologySection,
    pub astrology: AstrologySection,
    pub vietnamese_zodiac: ZodiacSection,
    pub timeline: Vec<TimelineEvent>,
    pub strengths_and_challenges: Vec<StrengthChallenge>,
    pub narrator_bullets: Vec<String>,
    pub story_hooks: StoryHooks,
}

/// A narrative profile with computed facts spliced in, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileReport {
    /// Assembly time in milliseconds since the Unix epoch.
    pub timestamp: i64,
    #[serde(flatten)]
    pub profile: NarrativeProfile,
}

/// A narrative field that disagreed with the computed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDrift {
    pub field: &'static str,
    pub narrative: String,
    pub computed: String,
}

/// Computed values in the form they take inside a profile.
struct Authoritative {
    life_path: u32,
    personal_year: u32,
    personal_month: u32,
    personal_day: u32,
    stem: &'static str,
    branch: &'static str,
    animal: &'static str,
    stem_element: &'static str,
}

impl Authoritative {
    fn from_facts(facts: &ComputedFacts) -> Self {
        Self {
            life_path: facts.life_path.value().into(),
            personal_year: facts.cycles.personal_year.value().into(),
            personal_month: facts.cycles.personal_month.value().into(),
            personal_day: facts.cycles.personal_day.value().into(),
            stem: facts.zodiac.stem.name(),
            branch: facts.zodiac.branch.name(),
            animal: facts.zodiac.animal(),
            stem_element: facts.zodiac.element.name(),
        }
    }
}

/// List narrative fields whose values differ from the computed facts.
pub fn find_drift(narrative: &NarrativeProfile, facts: &ComputedFacts) -> Vec<FieldDrift> {
    let auth = Authoritative::from_facts(facts);
    let num = &narrative.numerology;
    let zod = &narrative.vietnamese_zodiac;

    let numbers = [
        ("numerology.lifePathNumber", num.life_path_number, auth.life_path),
        ("numerology.personalYear", num.personal_year, auth.personal_year),
        ("numerology.personalMonth", num.personal_month, auth.personal_month),
        ("numerology.personalDay", num.personal_day, auth.personal_day),
    ];
    let names = [
        ("vietnameseZodiac.stem", zod.stem.as_str(), auth.stem),
        ("vietnameseZodiac.branch", zod.branch.as_str(), auth.branch),
        ("vietnameseZodiac.animal", zod.animal.as_str(), auth.animal),
        ("vietnameseZodiac.stemElement", zod.stem_element.as_str(), auth.stem_element),
    ];

    let mut drift = Vec::new();
    for (field, got, want) in numbers {
        if got != want {
            drift.push(FieldDrift {
                field,
                narrative: got.to_string(),
                computed: want.to_string(),
            });
        }
    }
    for (field, got, want) in names {
        if got != want {
            drift.push(FieldDrift {
                field,
                narrative: got.to_string(),
                computed: want.to_string(),
            });
        }
    }
    drift
}

/// Splice the computed facts into a narrative profile.
///
/// Life path, personal cycles, stem, branch, animal and stem element always
/// come from `facts`. Descriptive fields, including the Na-Yin element, are
/// kept from the narrative.
pub fn merge_authoritative(
    narrative: NarrativeProfile,
    facts: &ComputedFacts,
    timestamp_ms: i64,
) -> ProfileReport {
    for d in find_drift(&narrative, facts) {
        warn!(
            field = d.field,
            narrative = %d.narrative,
            computed = %d.computed,
            "narrative drifted from computed value, overwriting"
        );
    }

    let auth = Authoritative::from_facts(facts);
    let mut profile = narrative;

    profile.numerology.life_path_number = auth.life_path;
    profile.numerology.personal_year = auth.personal_year;
    profile.numerology.personal_month = auth.personal_month;
    profile.numerology.personal_day = auth.personal_day;

    profile.vietnamese_zodiac.stem = auth.stem.to_string();
    profile.vietnamese_zodiac.branch = auth.branch.to_string();
    profile.vietnamese_zodiac.animal = auth.animal.to_string();
    profile.vietnamese_zodiac.stem_element = auth.stem_element.to_string();

    debug!(birth = %facts.birth, reference = %facts.reference, "merged profile");
    ProfileReport {
        timestamp: timestamp_ms,
        profile,
    }
}
