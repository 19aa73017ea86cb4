// Topic extraction — term-frequency modeling over a single document.

use serde::Serialize;
use thiserror::Error;

pub mod extractor;

pub use extractor::TopicModel;

/// One extracted topic: its top terms in descending weight order, plus a
/// normalized weight for how much of the document the topic covers.
#[derive(Debug, Clone, Serialize)]
pub struct Topic {
    pub terms: Vec<String>,
    pub weight: f64,
}

#[derive(Debug, Error)]
pub enum TopicError {
    /// The vocabulary is empty after stop-word and document-frequency
    /// filtering — fitting topics over zero terms is a guaranteed failure,
    /// so it is short-circuited here.
    #[error("Not enough data for topic extraction")]
    NotEnoughData,
}
