// Topic model — TF-IDF term weighting plus greedy co-occurrence grouping.
//
// The document is split into sentences, and each sentence is treated as a
// separate document for IDF computation: terms that appear in every
// sentence get downweighted, terms distinctive to some sentences get
// boosted. Terms are then grouped into a fixed number of topics by seeding
// each topic with the highest-weighted unused term and pulling in the terms
// that co-occur with it most often.
//
// Every step is deterministic — ties are broken by raw count and then
// lexicographically — so identical input always produces identical topics.

use std::collections::{HashMap, HashSet};

use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};
use stop_words::{get, LANGUAGE};
use tracing::debug;

use super::{Topic, TopicError};

/// How many TF-IDF scores to pull from the ranking. Terms past this cutoff
/// fall back to their raw-frequency score.
const SCORE_POOL: usize = 4096;

/// Topic extractor configuration. Stateless — safe to share across requests.
pub struct TopicModel {
    /// Number of topics to produce
    pub num_topics: usize,
    /// Terms per topic
    pub num_words: usize,
    /// Drop terms appearing in more than this fraction of sentences.
    /// Vacuous for single-sentence input, kept as a corpus-level knob.
    pub max_df: f64,
}

impl Default for TopicModel {
    fn default() -> Self {
        Self {
            num_topics: 2,
            num_words: 5,
            max_df: 0.85,
        }
    }
}

impl TopicModel {
    /// Extract `num_topics` topics from a text.
    ///
    /// Each topic carries up to `num_words` terms (fewer only when the whole
    /// vocabulary is smaller than `num_words`). Returns NotEnoughData when
    /// no terms survive filtering.
    pub fn extract(&self, text: &str) -> Result<Vec<Topic>, TopicError> {
        let sentences = split_sentences(text);
        if sentences.is_empty() {
            return Err(TopicError::NotEnoughData);
        }

        let stop_words: Vec<String> = get(LANGUAGE::English);
        let stop_set: HashSet<&str> = stop_words.iter().map(|s| s.as_str()).collect();

        // Bag of words per sentence, minus stop words.
        let sentence_terms: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| {
                tokenize(s)
                    .into_iter()
                    .filter(|t| !stop_set.contains(t.as_str()))
                    .collect()
            })
            .collect();

        // Raw counts and document frequency over the sentence corpus.
        let mut counts: HashMap<&str, u32> = HashMap::new();
        let mut doc_freq: HashMap<&str, u32> = HashMap::new();
        for terms in &sentence_terms {
            let mut seen: HashSet<&str> = HashSet::new();
            for term in terms {
                *counts.entry(term).or_insert(0) += 1;
                if seen.insert(term) {
                    *doc_freq.entry(term).or_insert(0) += 1;
                }
            }
        }

        // max_df filter — only meaningful once there is more than one
        // sentence to compute a document frequency over.
        let n_docs = sentences.len() as f64;
        let mut vocab: Vec<&str> = counts
            .keys()
            .copied()
            .filter(|t| {
                sentences.len() < 2 || (doc_freq[t] as f64) / n_docs <= self.max_df
            })
            .collect();
        vocab.sort_unstable();

        if vocab.is_empty() {
            return Err(TopicError::NotEnoughData);
        }

        // TF-IDF scores with each sentence as a document.
        let params = TfIdfParams::UnprocessedDocuments(sentences.as_slice(), &stop_words, None);
        let tfidf = TfIdf::new(params);
        let scored: HashMap<String, f32> = tfidf
            .get_ranked_word_scores(SCORE_POOL)
            .into_iter()
            .collect();

        let total_count: u32 = vocab.iter().map(|t| counts[t]).sum();

        // Candidates ranked by TF-IDF weight, then raw count, then term.
        // Terms the TF-IDF tokenizer missed score by frequency alone.
        let mut candidates: Vec<Candidate> = vocab
            .iter()
            .map(|&term| {
                let count = counts[term];
                let score = scored
                    .get(term)
                    .copied()
                    .map(f64::from)
                    .unwrap_or(f64::from(count) / f64::from(total_count.max(1)));
                Candidate {
                    term: term.to_string(),
                    score,
                    count,
                }
            })
            .collect();
        candidates.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(b.count.cmp(&a.count))
                .then(a.term.cmp(&b.term))
        });

        let topics = self.group_into_topics(&candidates, &sentence_terms);

        debug!(
            vocabulary = candidates.len(),
            topics = topics.len(),
            "Extracted topics"
        );
        Ok(topics)
    }

    /// Greedily group ranked candidates into exactly `num_topics` topics.
    fn group_into_topics(
        &self,
        candidates: &[Candidate],
        sentence_terms: &[Vec<String>],
    ) -> Vec<Topic> {
        let n = candidates.len();
        let cooccurrence = cooccurrence_matrix(candidates, sentence_terms);

        let mut assigned = vec![false; n];
        let mut topics: Vec<Topic> = Vec::with_capacity(self.num_topics);
        let mut raw_weights: Vec<f64> = Vec::with_capacity(self.num_topics);

        for t in 0..self.num_topics {
            // Seed with the highest-ranked unused term; once the vocabulary
            // is exhausted, reuse top terms so the topic count stays fixed.
            let seed = (0..n).find(|&i| !assigned[i]).unwrap_or(t % n);
            assigned[seed] = true;
            let mut members = vec![seed];

            // Pull in the seed's strongest co-occurring unused terms.
            let mut related: Vec<(usize, u32)> = (0..n)
                .filter(|&i| !assigned[i] && cooccurrence[seed][i] > 0)
                .map(|i| (i, cooccurrence[seed][i]))
                .collect();
            related.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
            for (i, _) in related {
                if members.len() >= self.num_words {
                    break;
                }
                assigned[i] = true;
                members.push(i);
            }

            // Top up from the global ranking: unused terms first, then
            // reuse across topics if the vocabulary is still too small.
            for i in 0..n {
                if members.len() >= self.num_words {
                    break;
                }
                if !assigned[i] {
                    assigned[i] = true;
                    members.push(i);
                }
            }
            for i in 0..n {
                if members.len() >= self.num_words {
                    break;
                }
                if !members.contains(&i) {
                    members.push(i);
                }
            }

            // Candidate order is weight order, so sorting member indices
            // yields terms in descending weight.
            members.sort_unstable();
            raw_weights.push(members.iter().map(|&i| candidates[i].score).sum());
            topics.push(Topic {
                terms: members.iter().map(|&i| candidates[i].term.clone()).collect(),
                weight: 0.0,
            });
        }

        // Normalize weights so they sum to 1.0 across topics.
        let total: f64 = raw_weights.iter().sum();
        for (topic, raw) in topics.iter_mut().zip(raw_weights) {
            topic.weight = if total > 0.0 {
                raw / total
            } else {
                1.0 / self.num_topics.max(1) as f64
            };
        }

        topics.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        topics
    }
}

struct Candidate {
    term: String,
    score: f64,
    count: u32,
}

/// Count, for each candidate pair, how many sentences contain both terms.
fn cooccurrence_matrix(candidates: &[Candidate], sentence_terms: &[Vec<String>]) -> Vec<Vec<u32>> {
    let index: HashMap<&str, usize> = candidates
        .iter()
        .enumerate()
        .map(|(i, c)| (c.term.as_str(), i))
        .collect();

    let n = candidates.len();
    let mut matrix = vec![vec![0u32; n]; n];
    for terms in sentence_terms {
        let present: Vec<usize> = {
            let mut ids: Vec<usize> = terms
                .iter()
                .filter_map(|t| index.get(t.as_str()).copied())
                .collect();
            ids.sort_unstable();
            ids.dedup();
            ids
        };
        for &i in &present {
            for &j in &present {
                if i != j {
                    matrix[i][j] += 1;
                }
            }
        }
    }
    matrix
}

/// Split a text into sentence pseudo-documents.
fn split_sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?', ';', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lowercased alphanumeric tokens of two characters or more.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.chars().count() >= 2)
        .map(|w| w.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentences_split_on_terminators() {
        let s = split_sentences("One two. Three four! Five?\nSix");
        assert_eq!(s, vec!["One two", "Three four", "Five", "Six"]);
    }

    #[test]
    fn tokenize_drops_short_and_lowercases() {
        let tokens = tokenize("A Big, bright-red balloon");
        assert_eq!(tokens, vec!["big", "bright", "red", "balloon"]);
    }

    #[test]
    fn stopword_only_text_is_not_enough_data() {
        let model = TopicModel::default();
        let result = model.extract("the and of to with");
        assert!(matches!(result, Err(TopicError::NotEnoughData)));
    }
}
