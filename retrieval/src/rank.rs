use serde::Serialize;

use crate::similarity::{cmp_descending, cosine};
use crate::vector::align;
use crate::{DocIndex, DocumentRecord};

/// One candidate's position in a query's ranked listing.
#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry {
    /// Corpus index of the candidate record.
    pub candidate_index: DocIndex,
    pub similarity: f64,
    /// Dense 1-based rank; 1 is the highest similarity.
    pub rank: usize,
}

/// Score every candidate against the query and assign dense ranks.
///
/// The sort is stable and descending by similarity: equal similarities keep
/// their relative input order, and NaN entries sink below every real value,
/// ordered among themselves by input order. An empty candidate list yields an
/// empty ranking.
pub fn rank(query: &DocumentRecord, candidates: &[&DocumentRecord]) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = candidates
        .iter()
        .map(|candidate| {
            let (qv, cv) = align(&query.term_frequency, &candidate.term_frequency);
            RankedEntry {
                candidate_index: candidate.index,
                similarity: cosine(&qv, &cv),
                rank: 0,
            }
        })
        .collect();
    entries.sort_by(|x, y| cmp_descending(x.similarity, y.similarity));
    for (position, entry) in entries.iter_mut().enumerate() {
        entry.rank = position + 1;
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Corpus, Relevance};

    fn corpus_with(query: &str, candidates: &[&str]) -> Corpus {
        let mut corpus = Corpus::new();
        corpus.append(1, Relevance::Query, query);
        for text in candidates {
            corpus.append(1, Relevance::Irrelevant, *text);
        }
        corpus
    }

    fn ranked(corpus: &Corpus) -> Vec<RankedEntry> {
        let query = corpus.get(0).unwrap();
        let candidates: Vec<&DocumentRecord> = corpus.records()[1..].iter().collect();
        rank(query, &candidates)
    }

    #[test]
    fn ranks_are_dense_and_one_based() {
        let corpus = corpus_with("a b c", &["a b c", "a b", "a", "z"]);
        let entries = ranked(&corpus);
        let ranks: Vec<usize> = entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn higher_similarity_ranks_first() {
        let corpus = corpus_with("a b", &["a", "a b"]);
        let entries = ranked(&corpus);
        assert_eq!(entries[0].candidate_index, 2);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[1].candidate_index, 1);
        assert_eq!(entries[1].rank, 2);
    }

    #[test]
    fn ties_keep_input_order() {
        // duplicate texts score identically; the earlier record must win
        let corpus = corpus_with("a b", &["a b", "a b", "a b"]);
        let entries = ranked(&corpus);
        let order: Vec<DocIndex> = entries.iter().map(|e| e.candidate_index).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn degenerate_candidates_rank_last() {
        // the empty text comes first in input order but must sink below both
        // real similarities, including an orthogonal 0.0
        let corpus = corpus_with("a b", &["", "z", "a"]);
        let entries = ranked(&corpus);
        assert_eq!(entries[0].candidate_index, 3);
        assert_eq!(entries[1].candidate_index, 2);
        assert_eq!(entries[1].similarity, 0.0);
        assert_eq!(entries[2].candidate_index, 1);
        assert!(entries[2].similarity.is_nan());
        assert_eq!(entries[2].rank, 3);
    }

    #[test]
    fn nan_entries_keep_input_order_among_themselves() {
        let corpus = corpus_with("a", &["", "", "a"]);
        let entries = ranked(&corpus);
        let order: Vec<DocIndex> = entries.iter().map(|e| e.candidate_index).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn empty_candidate_list_yields_empty_ranking() {
        let corpus = corpus_with("a", &[]);
        assert!(ranked(&corpus).is_empty());
    }
}
