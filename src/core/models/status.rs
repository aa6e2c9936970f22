//! Wellness status labels
//!
//! The label assigned to an entry by the classifier.

use serde::{Deserialize, Serialize};

/// Status assigned to a logged entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Enough screen-free time and both activities present
    Healthy,
    /// Below the screen-free threshold or an activity missing
    #[serde(rename = "Needs More Me-Time")]
    NeedsMoreMeTime,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Healthy => write!(f, "Healthy"),
            Self::NeedsMoreMeTime => write!(f, "Needs More Me-Time"),
        }
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Healthy" => Ok(Self::Healthy),
            "Needs More Me-Time" => Ok(Self::NeedsMoreMeTime),
            _ => Err(format!("Invalid status: {s}. Use: Healthy, Needs More Me-Time")),
        }
    }
}
