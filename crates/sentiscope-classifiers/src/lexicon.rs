//! Word-list sentiment model
//!
//! Counts whole-word, case-insensitive hits against a positive and a negative
//! lexicon and emits the code of whichever side has more hits.

use crate::classifier::Predictor;
use crate::sentiment::Sentiment;
use aho_corasick::{AhoCorasick, MatchKind};
use sentiscope_core::{Error, LabelCode, Result};
use serde::{Deserialize, Serialize};

/// Serialized form of a lexicon model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconSpec {
    /// Model name
    #[serde(default)]
    pub name: Option<String>,

    /// Model version
    #[serde(default)]
    pub version: Option<String>,

    /// Words indicating positive sentiment
    #[serde(default)]
    pub positive: Vec<String>,

    /// Words indicating negative sentiment
    #[serde(default)]
    pub negative: Vec<String>,

    /// Codes emitted for each outcome
    #[serde(default)]
    pub codes: LexiconCodes,
}

/// Label codes emitted by a lexicon model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconCodes {
    pub negative: LabelCode,
    pub neutral: LabelCode,
    pub positive: LabelCode,
}

impl Default for LexiconCodes {
    fn default() -> Self {
        Self {
            negative: Sentiment::NEGATIVE_CODE,
            neutral: Sentiment::NEUTRAL_CODE,
            positive: Sentiment::POSITIVE_CODE,
        }
    }
}

pub struct LexiconModel {
    name: String,
    positive: AhoCorasick,
    negative: AhoCorasick,
    codes: LexiconCodes,
}

impl LexiconModel {
    pub fn from_spec(spec: LexiconSpec) -> Result<Self> {
        if spec.positive.is_empty() && spec.negative.is_empty() {
            return Err(Error::model("lexicon model has no words"));
        }
        if let Some(word) = spec
            .positive
            .iter()
            .chain(&spec.negative)
            .find(|word| word.trim().is_empty())
        {
            return Err(Error::model(format!(
                "lexicon contains a blank word: {:?}",
                word
            )));
        }

        let positive = build_matcher(&spec.positive)
            .map_err(|e| Error::model(format!("Failed to build positive matcher: {e}")))?;
        let negative = build_matcher(&spec.negative)
            .map_err(|e| Error::model(format!("Failed to build negative matcher: {e}")))?;

        Ok(Self {
            name: spec.name.unwrap_or_else(|| "lexicon".to_string()),
            positive,
            negative,
            codes: spec.codes,
        })
    }

    /// Label code for one text
    pub fn predict_one(&self, text: &str) -> LabelCode {
        let text = text.to_lowercase();
        let positive_hits = count_words(&self.positive, &text);
        let negative_hits = count_words(&self.negative, &text);

        match positive_hits.cmp(&negative_hits) {
            std::cmp::Ordering::Greater => self.codes.positive,
            std::cmp::Ordering::Less => self.codes.negative,
            std::cmp::Ordering::Equal => self.codes.neutral,
        }
    }
}

impl std::fmt::Debug for LexiconModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexiconModel")
            .field("name", &self.name)
            .field("positive_words", &self.positive.patterns_len())
            .field("negative_words", &self.negative.patterns_len())
            .field("codes", &self.codes)
            .finish()
    }
}

impl Predictor for LexiconModel {
    fn predict(&self, texts: &[String]) -> Result<Vec<LabelCode>> {
        Ok(texts.iter().map(|text| self.predict_one(text)).collect())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Matcher over the lowercased words; callers lowercase the text to match
fn build_matcher(words: &[String]) -> std::result::Result<AhoCorasick, aho_corasick::BuildError> {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(words.iter().map(|word| word.to_lowercase()))
}

fn count_words(matcher: &AhoCorasick, text: &str) -> usize {
    matcher
        .find_iter(text)
        .filter(|m| {
            let (Some(head), Some(tail)) = (text.get(..m.start()), text.get(m.end()..)) else {
                return false;
            };
            let before = head.chars().next_back();
            let after = tail.chars().next();
            !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
        })
        .count()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
