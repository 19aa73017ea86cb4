// Analysis pipeline — runs the three analyses over one extracted text.
//
// The analyzers are loaded once at startup and shared read-only across
// requests. A failed initialization does not crash the process; it leaves
// that analyzer in a degraded state that surfaces as a server fault when a
// request actually needs it, and as a `false` flag on the health check.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use crate::entities::EntityExtractor;
use crate::sentiment::{SentimentError, SentimentReport, VaderScorer};
use crate::topics::{Topic, TopicError, TopicModel};

/// The aggregated result of one document analysis.
#[derive(Debug, Serialize)]
pub struct AnalysisResult {
    pub sentiment: SentimentReport,
    pub entities: BTreeMap<String, Vec<String>>,
    pub topics: Vec<Topic>,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Sentiment analyzer is not initialized")]
    SentimentUnavailable,
    #[error("Entity model is not initialized")]
    EntityModelUnavailable,
    #[error("No content available to analyze")]
    NoContent,
}

/// Process-wide analyzer state, loaded once at startup.
pub struct Analyzers {
    pub sentiment: Option<VaderScorer>,
    pub entities: Option<EntityExtractor>,
    pub topics: TopicModel,
}

impl Analyzers {
    /// Load every analyzer, downgrading failures to a missing analyzer
    /// instead of aborting startup.
    pub fn initialize(topics: TopicModel) -> Self {
        let entities = match EntityExtractor::new() {
            Ok(extractor) => Some(extractor),
            Err(e) => {
                error!(error = %e, "Entity model failed to initialize — entity extraction disabled");
                None
            }
        };

        let analyzers = Self {
            sentiment: Some(VaderScorer::new()),
            entities,
            topics,
        };
        info!(
            sentiment = analyzers.sentiment.is_some(),
            entities = analyzers.entities.is_some(),
            "Analyzers initialized"
        );
        analyzers
    }
}

/// Run sentiment, entity, and topic analysis over one extracted text.
///
/// The three analyses are independent, but a failure in any one aborts the
/// whole call — there are no partial results. A topic vocabulary that is
/// empty after filtering is not a failure; it yields an empty topic list.
pub fn analyze_document(analyzers: &Analyzers, text: &str) -> Result<AnalysisResult, AnalysisError> {
    let scorer = analyzers
        .sentiment
        .as_ref()
        .ok_or(AnalysisError::SentimentUnavailable)?;
    let extractor = analyzers
        .entities
        .as_ref()
        .ok_or(AnalysisError::EntityModelUnavailable)?;

    let sentiment = scorer.score(text).map_err(|e| match e {
        SentimentError::NoContent => AnalysisError::NoContent,
    })?;

    let entities = extractor.extract(text);

    let topics = match analyzers.topics.extract(text) {
        Ok(topics) => topics,
        Err(TopicError::NotEnoughData) => Vec::new(),
    };

    Ok(AnalysisResult {
        sentiment,
        entities,
        topics,
    })
}
