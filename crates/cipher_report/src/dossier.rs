//! Strategic dossier narrative.
//!
//! The dossier carries no numeric or cipher fields of its own, so it is
//! stored exactly as parsed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Avatar {
    pub name: String,
    pub archetype: String,
    pub aura_color: String,
    pub aura_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Psychology {
    pub life_path_story: String,
    pub moon_story: String,
    pub expression_behavior: String,
    pub attachment_style: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowActivated {
    pub shadow: String,
    pub activated: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnergeticWeather {
    pub personal_cycle: String,
    pub major_transits: String,
    pub messaging_tone: String,
    pub shadow_activated: ShadowActivated,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoAndDoNot {
    #[serde(rename = "do")]
    pub dos: Vec<String>,
    #[serde(rename = "doNot")]
    pub donts: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CrmStrategy {
    pub opportunity_level: String,
    pub influence_tactics: String,
    pub relationship_growth_path: String,
    pub do_and_do_not: DoAndDoNot,
    pub timing_recommendations: String,
}

/// Relationship-strategy report as returned by the narrative generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StrategicDossier {
    pub avatar: Avatar,
    pub narrator_bullets: Vec<String>,
    pub psychology: Psychology,
    pub energetic_weather: EnergeticWeather,
    pub crm_strategy: CrmStrategy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn do_and_do_not_keys() {
        let d: StrategicDossier = serde_json::from_str(
            r#"{"crmStrategy": {"opportunityLevel": "High",
                "doAndDoNot": {"do": ["Lead with data"], "doNot": ["Rush"]}}}"#,
        )
        .unwrap();
        assert_eq!(d.crm_strategy.opportunity_level, "High");
        assert_eq!(d.crm_strategy.do_and_do_not.dos, ["Lead with data"]);
        assert_eq!(d.crm_strategy.do_and_do_not.donts, ["Rush"]);
    }
}
