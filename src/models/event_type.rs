use serde::{Deserialize, Serialize};

/// Clock action carried by a raw event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EventType {
    #[serde(rename = "clock_in", alias = "in")]
    In,
    #[serde(rename = "clock_out", alias = "out")]
    Out,
}

impl EventType {
    /// Lenient parser used at ingestion: accepts `in`, `clock_in`,
    /// `clockin`, `clock-in` (and the `out` counterparts) in any case.
    pub fn et_from_str(s: &str) -> Option<Self> {
        let norm: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect();

        match norm.as_str() {
            "in" | "clockin" => Some(Self::In),
            "out" | "clockout" => Some(Self::Out),
            _ => None,
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, EventType::In)
    }
}
