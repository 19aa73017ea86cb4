// Named-entity extraction — deterministic rule-based recognition.
//
// Spans are found in two passes: rigid-form patterns first (MONEY, PERCENT,
// DATE, TIME), then capitalized spans classified into PERSON / ORG / GPE
// using word lists. Earlier passes claim their byte ranges; later matches
// overlapping a claimed range are dropped, so "January 5, 2020" stays one
// DATE instead of also producing a stray capitalized span.
//
// The output groups surface strings by label in document order, duplicates
// retained — every occurrence counts.

use std::collections::BTreeMap;

use anyhow::Result;
use tracing::debug;

pub mod rules;

use rules::PatternRules;

/// One recognized span, positioned by byte offset in the source text.
#[derive(Debug, Clone)]
struct EntitySpan {
    start: usize,
    end: usize,
    label: &'static str,
    text: String,
}

/// Rule-based entity extractor. Patterns are compiled once at startup;
/// extraction itself is pure and shares no mutable state.
pub struct EntityExtractor {
    rules: PatternRules,
}

impl EntityExtractor {
    pub fn new() -> Result<Self> {
        let rules = PatternRules::compile()?;
        Ok(Self { rules })
    }

    /// Extract entities from a text, grouped by label.
    ///
    /// Each label maps to its surface strings in encounter order; the same
    /// string appearing twice is listed twice.
    pub fn extract(&self, text: &str) -> BTreeMap<String, Vec<String>> {
        let mut spans = self.collect_spans(text);
        spans.sort_by_key(|s| s.start);

        let mut entities: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for span in spans {
            entities
                .entry(span.label.to_string())
                .or_default()
                .push(span.text);
        }

        debug!(labels = entities.len(), "Extracted entities");
        entities
    }

    fn collect_spans(&self, text: &str) -> Vec<EntitySpan> {
        let mut spans: Vec<EntitySpan> = Vec::new();
        let mut claimed: Vec<(usize, usize)> = Vec::new();

        // Pattern passes in priority order. A full date claims its range
        // before the bare-year pattern gets a chance at the year inside it.
        let patterns: [(&regex_lite::Regex, &'static str); 6] = [
            (&self.rules.money, "MONEY"),
            (&self.rules.percent, "PERCENT"),
            (&self.rules.date, "DATE"),
            (&self.rules.date_iso, "DATE"),
            (&self.rules.time, "TIME"),
            (&self.rules.year, "DATE"),
        ];

        for (pattern, label) in patterns {
            for m in pattern.find_iter(text) {
                if overlaps(&claimed, m.start(), m.end()) {
                    continue;
                }
                claimed.push((m.start(), m.end()));
                spans.push(EntitySpan {
                    start: m.start(),
                    end: m.end(),
                    label,
                    text: m.as_str().to_string(),
                });
            }
        }

        // Capitalized spans: segment at sentence-ending periods, strip
        // leading non-entity words, then classify what remains.
        for m in self.rules.capitalized.find_iter(text) {
            if overlaps(&claimed, m.start(), m.end()) {
                continue;
            }
            for segment in segment_span(m.as_str()) {
                if let Some(span) = classify_segment(m.as_str(), &segment, m.start()) {
                    claimed.push((span.start, span.end));
                    spans.push(span);
                }
            }
        }

        spans
    }
}

/// Does [start, end) intersect any claimed range?
fn overlaps(claimed: &[(usize, usize)], start: usize, end: usize) -> bool {
    claimed.iter().any(|&(s, e)| start < e && end > s)
}

/// A token within a capitalized span: byte offset and the period-stripped
/// form used for classification.
type Token<'a> = (usize, &'a str);

/// Break a capitalized span at tokens ending in a period, unless the token
/// is an honorific ("Dr.") or a single-letter initial ("J.") — those keep
/// the run going. "NASA. The Senate" becomes ["NASA"], ["The", "Senate"].
fn segment_span(span: &str) -> Vec<Vec<Token<'_>>> {
    let mut segments = Vec::new();
    let mut current: Vec<Token<'_>> = Vec::new();

    for (offset, raw) in tokens_with_offsets(span) {
        let bare = raw.trim_end_matches('.');
        if bare.is_empty() {
            continue;
        }
        current.push((offset, bare));
        let sentence_end = raw.ends_with('.') && !rules::is_honorific(bare) && bare.len() > 1;
        if sentence_end {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Classify one segment of a capitalized span, or reject it.
fn classify_segment(span: &str, tokens: &[Token<'_>], span_start: usize) -> Option<EntitySpan> {
    // Strip leading sentence-openers, months, and honorifics. An honorific
    // marks whatever follows as a PERSON.
    let mut first = 0;
    let mut saw_honorific = false;
    while first < tokens.len() {
        let tok = tokens[first].1;
        if rules::is_honorific(tok) {
            saw_honorific = true;
            first += 1;
        } else if rules::is_skip_word(tok) {
            saw_honorific = false;
            first += 1;
        } else {
            break;
        }
    }

    // Trailing capitalized function words ("Paris In" from title-case text)
    // carry no entity signal either.
    let mut last_idx = tokens.len();
    while last_idx > first && rules::is_skip_word(tokens[last_idx - 1].1) {
        last_idx -= 1;
    }

    let kept_tokens = &tokens[first..last_idx];
    let (&(start_offset, _), &(end_offset, end_token)) =
        (kept_tokens.first()?, kept_tokens.last()?);
    let start = span_start + start_offset;
    let end = span_start + end_offset + end_token.len();
    let text = &span[start_offset..end_offset + end_token.len()];

    let make = |label: &'static str| {
        Some(EntitySpan {
            start,
            end,
            label,
            text: text.to_string(),
        })
    };

    let last = kept_tokens.last()?.1;
    if rules::is_org_suffix(last) {
        return make("ORG");
    }
    if rules::is_gpe(text) {
        return make("GPE");
    }
    if saw_honorific {
        return make("PERSON");
    }
    if kept_tokens.len() == 1 {
        // A lone capitalized word carries no signal unless it reads as an
        // acronym — most are just sentence openers.
        if rules::is_acronym(last) {
            return make("ORG");
        }
        return None;
    }
    if kept_tokens.len() <= 3 && kept_tokens.iter().all(|&(_, t)| !rules::is_acronym(t)) {
        return make("PERSON");
    }
    None
}

/// Split on whitespace, keeping each token's byte offset within the span.
fn tokens_with_offsets(s: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut idx = 0;
    for tok in s.split_whitespace() {
        // split_whitespace yields tokens in order, so scan from the cursor
        let pos = s[idx..].find(tok).unwrap_or(0) + idx;
        out.push((pos, tok));
        idx = pos + tok.len();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_sentence_has_no_entities() {
        let extractor = EntityExtractor::new().unwrap();
        let entities = extractor.extract("I love this product, it is amazing!");
        assert!(entities.is_empty());
    }

    #[test]
    fn full_date_is_not_double_counted_as_year() {
        let extractor = EntityExtractor::new().unwrap();
        let entities = extractor.extract("The report is due January 5, 2020.");
        assert_eq!(entities["DATE"], vec!["January 5, 2020"]);
        assert_eq!(entities.len(), 1);
    }

    #[test]
    fn honorific_marks_a_person() {
        let extractor = EntityExtractor::new().unwrap();
        let entities = extractor.extract("We spoke with Dr. Smith yesterday.");
        assert_eq!(entities["PERSON"], vec!["Smith"]);
    }

    #[test]
    fn sentence_boundary_does_not_merge_spans() {
        let extractor = EntityExtractor::new().unwrap();
        let entities = extractor.extract("She works at NASA. The offices are large.");
        assert_eq!(entities["ORG"], vec!["NASA"]);
        assert!(!entities.contains_key("PERSON"));
    }
}
