//! Journaling logs: lies, fears, clarity reframes and impact events.

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// How many recent lie logs feed the behavioral pattern scan.
pub const PATTERN_WINDOW: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LieLog {
    pub id: String,
    pub text: String,
    pub category: String,
    pub driver: String,
    pub method: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FearLog {
    pub id: String,
    pub fear: String,
    pub worst_case: String,
    pub prevention: String,
    pub repair: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClarityLog {
    pub id: String,
    pub distorted_thought: String,
    pub cognitive_bias: String,
    pub rational_truth: String,
    pub timestamp: i64,
}

/// Direction of an impact event: order created or chaos caused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImpactKind {
    Syntropy,
    Entropy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactLog {
    pub id: String,
    pub action: String,
    #[serde(rename = "type")]
    pub kind: ImpactKind,
    /// 1..=5
    pub magnitude: u8,
    pub timestamp: i64,
}

impl ImpactLog {
    pub fn new(
        id: impl Into<String>,
        action: impl Into<String>,
        kind: ImpactKind,
        magnitude: u8,
        timestamp: i64,
    ) -> Result<Self, ReportError> {
        let log = Self {
            id: id.into(),
            action: action.into(),
            kind,
            magnitude,
            timestamp,
        };
        log.validate()?;
        Ok(log)
    }

    pub fn validate(&self) -> Result<(), ReportError> {
        if (1..=5).contains(&self.magnitude) {
            Ok(())
        } else {
            Err(ReportError::InvalidMagnitude(self.magnitude))
        }
    }

    /// Signed contribution to the syntropy score.
    pub fn signed_magnitude(&self) -> i64 {
        match self.kind {
            ImpactKind::Syntropy => i64::from(self.magnitude),
            ImpactKind::Entropy => -i64::from(self.magnitude),
        }
    }
}

/// A single journal entry, tagged by log type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "logType", rename_all = "UPPERCASE")]
pub enum LogEntry {
    Lie(LieLog),
    Fear(FearLog),
    Clarity(ClarityLog),
    Impact(ImpactLog),
}

impl LogEntry {
    pub fn id(&self) -> &str {
        match self {
            Self::Lie(l) => &l.id,
            Self::Fear(l) => &l.id,
            Self::Clarity(l) => &l.id,
            Self::Impact(l) => &l.id,
        }
    }

    pub fn timestamp(&self) -> i64 {
        match self {
            Self::Lie(l) => l.timestamp,
            Self::Fear(l) => l.timestamp,
            Self::Clarity(l) => l.timestamp,
            Self::Impact(l) => l.timestamp,
        }
    }

    /// Reject entries that could not have been recorded through the UI.
    pub fn validate(&self) -> Result<(), ReportError> {
        match self {
            Self::Impact(l) => l.validate(),
            _ => Ok(()),
        }
    }
}

/// Journal entries grouped by type, each group in recording order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalLogs {
    pub lie_logs: Vec<LieLog>,
    pub fear_logs: Vec<FearLog>,
    pub clarity_logs: Vec<ClarityLog>,
    pub impact_logs: Vec<ImpactLog>,
}

impl JournalLogs {
    pub fn from_entries(entries: impl IntoIterator<Item = LogEntry>) -> Self {
        let mut logs = Self::default();
        for entry in entries {
            match entry {
                LogEntry::Lie(l) => logs.lie_logs.push(l),
                LogEntry::Fear(l) => logs.fear_logs.push(l),
                LogEntry::Clarity(l) => logs.clarity_logs.push(l),
                LogEntry::Impact(l) => logs.impact_logs.push(l),
            }
        }
        logs
    }

    pub fn len(&self) -> usize {
        self.lie_logs.len() + self.fear_logs.len() + self.clarity_logs.len() + self.impact_logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Net syntropy: magnitudes of order-creating events minus chaos-causing ones.
pub fn net_syntropy(logs: &[ImpactLog]) -> i64 {
    logs.iter().map(ImpactLog::signed_magnitude).sum()
}

/// Behavioral pattern lines from the most recent lie logs.
pub fn recent_patterns(lies: &[LieLog]) -> String {
    if lies.is_empty() {
        return "No recent behavioral anomalies logged. Proceed with standard optimization."
            .to_string();
    }
    let start = lies.len().saturating_sub(PATTERN_WINDOW);
    let lines: Vec<String> = lies[start..]
        .iter()
        .map(|l| format!("- Category: {} | Driver: {}", l.category, l.driver))
        .collect();
    format!(
        "DETECTED BEHAVIORAL PATTERNS (Recent Logs): \n{}",
        lines.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lie(n: i64) -> LieLog {
        LieLog {
            id: format!("lie-{n}"),
            text: "I'm fine".into(),
            category: format!("cat{n}"),
            driver: "Fear".into(),
            method: "Omission".into(),
            timestamp: n,
        }
    }

    #[test]
    fn magnitude_bounds() {
        assert!(ImpactLog::new("a", "helped", ImpactKind::Syntropy, 0, 0).is_err());
        assert!(ImpactLog::new("a", "helped", ImpactKind::Syntropy, 6, 0).is_err());
        assert!(ImpactLog::new("a", "helped", ImpactKind::Syntropy, 5, 0).is_ok());
    }

    #[test]
    fn net_score() {
        let logs = [
            ImpactLog::new("1", "shipped", ImpactKind::Syntropy, 4, 1).unwrap(),
            ImpactLog::new("2", "snapped", ImpactKind::Entropy, 3, 2).unwrap(),
            ImpactLog::new("3", "mentored", ImpactKind::Syntropy, 2, 3).unwrap(),
        ];
        assert_eq!(net_syntropy(&logs), 3);
        assert_eq!(net_syntropy(&[]), 0);
    }

    #[test]
    fn patterns_use_last_five() {
        let lies: Vec<LieLog> = (1..=7).map(lie).collect();
        let text = recent_patterns(&lies);
        assert!(!text.contains("Category: cat1 |"));
        assert!(!text.contains("Category: cat2 |"));
        assert!(text.contains("- Category: cat3 | Driver: Fear"));
        assert!(text.contains("- Category: cat7 | Driver: Fear"));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn patterns_empty() {
        assert!(recent_patterns(&[]).starts_with("No recent behavioral anomalies"));
    }

    #[test]
    fn entry_tagging() {
        let entry = LogEntry::Impact(
            ImpactLog::new("i1", "cleaned up", ImpactKind::Entropy, 2, 10).unwrap(),
        );
        let v = serde_json::to_value(&entry).unwrap();
        assert_eq!(v["logType"], "IMPACT");
        assert_eq!(v["type"], "ENTROPY");
        let back: LogEntry = serde_json::from_value(v).unwrap();
        assert_eq!(back, entry);
        assert_eq!(back.id(), "i1");
        assert_eq!(back.timestamp(), 10);
    }

    #[test]
    fn fear_log_camel_case() {
        let entry: LogEntry = serde_json::from_str(
            r#"{"logType":"FEAR","id":"f1","fear":"layoff","worstCase":"no income",
                "prevention":"savings","repair":"freelance","timestamp":5}"#,
        )
        .unwrap();
        let LogEntry::Fear(f) = entry else {
            panic!("expected fear log");
        };
        assert_eq!(f.worst_case, "no income");
    }

    #[test]
    fn grouping_preserves_order() {
        let logs = JournalLogs::from_entries([
            LogEntry::Lie(lie(1)),
            LogEntry::Impact(ImpactLog::new("i", "x", ImpactKind::Syntropy, 1, 2).unwrap()),
            LogEntry::Lie(lie(3)),
        ]);
        assert_eq!(logs.len(), 3);
        assert_eq!(logs.lie_logs[0].id, "lie-1");
        assert_eq!(logs.lie_logs[1].id, "lie-3");
        assert_eq!(logs.impact_logs.len(), 1);
    }
}
