//! Display sentiments and their colors

use sentiscope_core::LabelCode;
use serde::Serialize;
use std::fmt;

/// Sentiment shown for a label code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
    /// Any code outside the known set
    Unknown,
}

impl Sentiment {
    /// Label code for negative text
    pub const NEGATIVE_CODE: LabelCode = 0;
    /// Label code for neutral text
    pub const NEUTRAL_CODE: LabelCode = 2;
    /// Label code for positive text
    pub const POSITIVE_CODE: LabelCode = 4;

    /// Map a predictor's label code to a sentiment
    pub fn from_code(code: LabelCode) -> Self {
        match code {
            Self::NEGATIVE_CODE => Self::Negative,
            Self::NEUTRAL_CODE => Self::Neutral,
            Self::POSITIVE_CODE => Self::Positive,
            _ => Self::Unknown,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
            Self::Positive => "Positive",
            Self::Unknown => "Unknown",
        }
    }

    /// Hex color used when rendering this sentiment
    pub fn color(&self) -> &'static str {
        match self {
            Self::Negative => "#F44336",
            Self::Neutral => "#FF9800",
            Self::Positive => "#4CAF50",
            Self::Unknown => "#000000",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
