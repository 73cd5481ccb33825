// src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of scoring a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub score: u8,
    pub suggestions: Vec<String>,
}

impl StrengthReport {
    pub fn level(&self) -> StrengthLevel {
        StrengthLevel::from_score(self.score)
    }

    pub fn is_excellent(&self) -> bool {
        self.score == StrengthLevel::MAX_SCORE
    }

    /// Fraction of the meter to fill, in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        f32::from(self.score) / f32::from(StrengthLevel::MAX_SCORE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
    Excellent,
}

impl StrengthLevel {
    pub const MAX_SCORE: u8 = 5;

    pub fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthLevel::VeryWeak,
            1 => StrengthLevel::Weak,
            2 => StrengthLevel::Moderate,
            3 => StrengthLevel::Strong,
            4 => StrengthLevel::VeryStrong,
            _ => StrengthLevel::Excellent,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Moderate => "Moderate",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
            StrengthLevel::Excellent => "Excellent!",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "😱",
            StrengthLevel::Weak => "😟",
            StrengthLevel::Moderate => "😐",
            StrengthLevel::Strong => "😊",
            StrengthLevel::VeryStrong => "😎",
            StrengthLevel::Excellent => "🔥",
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.label(), self.emoji())
    }
}

/// Output of the `generate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub report: StrengthReport,
}

// Password generation options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    /// Regenerate until every strength rule passes.
    pub strong: bool,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            strong: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub password: String,
    pub entered_at: DateTime<Utc>,
}
