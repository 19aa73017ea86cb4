// Unit tests for sentiment scoring.
//
// The label partition is the contract worth guarding: strictly positive
// compound → Positive, strictly negative → Negative, exactly zero →
// Neutral. Component scores come from the VADER lexicon.

use docsense::sentiment::{SentimentError, SentimentLabel, VaderScorer};

// ============================================================
// Label derivation
// ============================================================

#[test]
fn positive_text_is_positive() {
    let scorer = VaderScorer::new();
    let report = scorer.score("I love this product, it is amazing!").unwrap();
    assert_eq!(report.label, SentimentLabel::Positive);
    assert!(report.compound > 0.0, "compound was {}", report.compound);
}

#[test]
fn negative_text_is_negative() {
    let scorer = VaderScorer::new();
    let report = scorer
        .score("I hate this, it is terrible and completely awful.")
        .unwrap();
    assert_eq!(report.label, SentimentLabel::Negative);
    assert!(report.compound < 0.0, "compound was {}", report.compound);
}

#[test]
fn lexicon_free_text_is_neutral() {
    let scorer = VaderScorer::new();
    // No lexicon words at all — compound stays exactly zero.
    let report = scorer.score("The table is in the kitchen.").unwrap();
    assert_eq!(report.label, SentimentLabel::Neutral);
    assert_eq!(report.compound, 0.0);
}

#[test]
fn label_matches_compound_sign() {
    let scorer = VaderScorer::new();
    for text in [
        "What a wonderful day!",
        "This is a disaster.",
        "The meeting starts at noon.",
    ] {
        let report = scorer.score(text).unwrap();
        let expected = SentimentLabel::from_compound(report.compound);
        assert_eq!(report.label, expected, "mismatch for {text:?}");
    }
}

// ============================================================
// Score ranges
// ============================================================

#[test]
fn scores_are_within_bounds() {
    let scorer = VaderScorer::new();
    let report = scorer.score("Good food, bad service, average price.").unwrap();
    assert!((-1.0..=1.0).contains(&report.compound));
    for component in [report.positive, report.negative, report.neutral] {
        assert!((0.0..=1.0).contains(&component), "component {component}");
    }
}

// ============================================================
// Empty input
// ============================================================

#[test]
fn empty_input_never_reaches_the_analyzer() {
    let scorer = VaderScorer::new();
    assert!(matches!(scorer.score(""), Err(SentimentError::NoContent)));
    assert!(matches!(
        scorer.score(" \t\n "),
        Err(SentimentError::NoContent)
    ));
}
