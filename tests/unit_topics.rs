// Unit tests for topic extraction.
//
// Invariants under test: exactly num_topics topics with min(num_words,
// vocabulary) terms each, no stop words in the output, descending term
// weight within a topic, and identical output across runs.

use docsense::topics::{TopicError, TopicModel};

const DOCUMENT: &str = "The spacecraft engine burns liquid hydrogen fuel during launch. \
    Engineers tested the rocket engine thrust at the desert facility. \
    The mission crew trained for orbital docking procedures. \
    Ground control monitors telemetry data from the launch site.";

// ============================================================
// Shape invariants
// ============================================================

#[test]
fn produces_exactly_the_configured_topic_count() {
    let model = TopicModel::default();
    let topics = model.extract(DOCUMENT).unwrap();
    assert_eq!(topics.len(), 2);
    for topic in &topics {
        assert_eq!(topic.terms.len(), 5, "terms: {:?}", topic.terms);
    }
}

#[test]
fn small_vocabulary_caps_terms_per_topic() {
    let model = TopicModel::default();
    // Three content words after stop-word removal.
    let topics = model.extract("love product amazing").unwrap();
    assert_eq!(topics.len(), 2);
    for topic in &topics {
        assert_eq!(topic.terms.len(), 3);
        for term in &topic.terms {
            assert!(["love", "product", "amazing"].contains(&term.as_str()));
        }
    }
}

#[test]
fn terms_are_lowercased_content_words() {
    let model = TopicModel::default();
    let topics = model.extract(DOCUMENT).unwrap();
    for topic in &topics {
        for term in &topic.terms {
            assert_eq!(term, &term.to_lowercase());
            assert!(!["the", "at", "for", "from", "during"].contains(&term.as_str()));
        }
    }
}

#[test]
fn weights_are_normalized() {
    let model = TopicModel::default();
    let topics = model.extract(DOCUMENT).unwrap();
    let total: f64 = topics.iter().map(|t| t.weight).sum();
    assert!((total - 1.0).abs() < 0.01, "weights sum to {total}");
    // Ordered by weight, descending
    assert!(topics[0].weight >= topics[1].weight);
}

// ============================================================
// Determinism
// ============================================================

#[test]
fn identical_input_gives_identical_topics() {
    let model = TopicModel::default();
    let a = model.extract(DOCUMENT).unwrap();
    let b = model.extract(DOCUMENT).unwrap();
    assert_eq!(a.len(), b.len());
    for (ta, tb) in a.iter().zip(&b) {
        assert_eq!(ta.terms, tb.terms);
        assert!((ta.weight - tb.weight).abs() < f64::EPSILON);
    }
}

// ============================================================
// Degenerate input
// ============================================================

#[test]
fn stop_words_only_is_not_enough_data() {
    let model = TopicModel::default();
    assert!(matches!(
        model.extract("the and of to with or"),
        Err(TopicError::NotEnoughData)
    ));
}

#[test]
fn empty_text_is_not_enough_data() {
    let model = TopicModel::default();
    assert!(matches!(model.extract(""), Err(TopicError::NotEnoughData)));
    assert!(matches!(model.extract("   "), Err(TopicError::NotEnoughData)));
}

#[test]
fn custom_topic_and_word_counts_are_honored() {
    let model = TopicModel {
        num_topics: 3,
        num_words: 2,
        ..TopicModel::default()
    };
    let topics = model.extract(DOCUMENT).unwrap();
    assert_eq!(topics.len(), 3);
    for topic in &topics {
        assert_eq!(topic.terms.len(), 2);
    }
}
