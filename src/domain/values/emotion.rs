use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Emotional state tagged onto a trade. The trade field itself stays a free
/// string so rows written by older versions of the sheet still parse; this
/// enum is the canonical set the CLI accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Confident,
    Neutral,
    Anxious,
    Excited,
    Fearful,
    Greedy,
    Disciplined,
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Emotion::Confident => write!(f, "confident"),
            Emotion::Neutral => write!(f, "neutral"),
            Emotion::Anxious => write!(f, "anxious"),
            Emotion::Excited => write!(f, "excited"),
            Emotion::Fearful => write!(f, "fearful"),
            Emotion::Greedy => write!(f, "greedy"),
            Emotion::Disciplined => write!(f, "disciplined"),
        }
    }
}

impl FromStr for Emotion {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "confident" => Ok(Emotion::Confident),
            "neutral" => Ok(Emotion::Neutral),
            "anxious" => Ok(Emotion::Anxious),
            "excited" => Ok(Emotion::Excited),
            "fearful" => Ok(Emotion::Fearful),
            "greedy" => Ok(Emotion::Greedy),
            "disciplined" => Ok(Emotion::Disciplined),
            _ => Err(format!("Unknown emotion: {s}")),
        }
    }
}
