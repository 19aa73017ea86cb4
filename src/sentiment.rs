// Sentiment scoring via the VADER lexicon (vader_sentiment crate).
//
// VADER produces four component scores per text: positive, negative, and
// neutral proportions, plus a normalized compound score in [-1, 1]. The
// polarity label is a strict three-way partition on the compound sign —
// exactly zero means Neutral, there is no epsilon band.

use serde::Serialize;
use thiserror::Error;

/// Polarity label derived from the compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// compound > 0 → Positive, compound < 0 → Negative, == 0 → Neutral.
    pub fn from_compound(compound: f64) -> Self {
        if compound > 0.0 {
            SentimentLabel::Positive
        } else if compound < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        };
        f.write_str(s)
    }
}

/// The full sentiment result for one text.
#[derive(Debug, Clone, Serialize)]
pub struct SentimentReport {
    pub label: SentimentLabel,
    pub compound: f64,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

#[derive(Debug, Error)]
pub enum SentimentError {
    /// Empty input — no score is computed, the analyzer is never invoked.
    #[error("No content available to score")]
    NoContent,
}

/// VADER-backed sentiment scorer.
///
/// The lexicon itself lives in static data inside the vader_sentiment
/// crate, so the analyzer handle is cheap to build per call and the scorer
/// carries no mutable state — safe to share across requests.
pub struct VaderScorer;

impl VaderScorer {
    pub fn new() -> Self {
        VaderScorer
    }

    /// Score a text. Whitespace-only input counts as empty.
    pub fn score(&self, text: &str) -> Result<SentimentReport, SentimentError> {
        if text.trim().is_empty() {
            return Err(SentimentError::NoContent);
        }

        let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();
        let scores = analyzer.polarity_scores(text);

        let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);
        let compound = get("compound");

        Ok(SentimentReport {
            label: SentimentLabel::from_compound(compound),
            compound,
            positive: get("pos"),
            negative: get("neg"),
            neutral: get("neu"),
        })
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_partition_is_exhaustive() {
        assert_eq!(SentimentLabel::from_compound(0.001), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_compound(-0.001), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_compound(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_compound(1.0), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_compound(-1.0), SentimentLabel::Negative);
    }

    #[test]
    fn empty_text_is_no_content() {
        let scorer = VaderScorer::new();
        assert!(matches!(scorer.score(""), Err(SentimentError::NoContent)));
        assert!(matches!(scorer.score("   \n\t"), Err(SentimentError::NoContent)));
    }
}
