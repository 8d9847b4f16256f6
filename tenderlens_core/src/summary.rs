//! Structured summary output shared by every summarizer backend.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse reliability label attached to a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    #[default]
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Map the number of relevance categories that fired to a label.
    ///
    /// Three or more is `High`, at least one is `Medium`, none is `Low`.
    #[must_use]
    pub const fn from_signal_count(count: usize) -> Self {
        match count {
            0 => Self::Low,
            1 | 2 => Self::Medium,
            _ => Self::High,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown confidence level: {other}")),
        }
    }
}

// Remote models are not consistent about casing, so accept "High" as well as "high".
impl<'de> Deserialize<'de> for Confidence {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Result of summarizing a whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// First few sentences of the source, or a fallback literal.
    pub short_summary: String,
    /// One line per relevance category that fired, in scan order.
    #[serde(default)]
    pub relevance_to_officials: Vec<String>,
    /// Suggested follow-ups, parallel to the relevance lines.
    #[serde(default)]
    pub action_items: Vec<String>,
    pub confidence_estimate: Confidence,
}

/// Which summarizer backend handles full-summary requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SummarizerMode {
    /// In-process pattern extraction.
    #[default]
    Local,
    /// Hosted chat-completion model.
    Remote,
}

impl SummarizerMode {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
        }
    }
}

impl fmt::Display for SummarizerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummarizerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" | "mock" => Ok(Self::Local),
            "remote" | "api" => Ok(Self::Remote),
            other => Err(format!("unknown summarizer mode: {other} (expected local or remote)")),
        }
    }
}
