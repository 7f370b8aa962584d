use std::collections::HashMap;

use thiserror::Error;

pub type QueryId = i64;
/// Position in the corpus sequence, assigned on insertion.
pub type DocIndex = usize;
/// Token string to its occurrence count within one text.
pub type TermFrequency = HashMap<String, u32>;

/// A relevance label outside the 0/1/99 ingestion convention.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid relevance label {0}: expected 0 (irrelevant), 1 (relevant) or 99 (query)")]
pub struct InvalidLabel(pub i64);

/// Judgment attached to a record: either the query itself (sentinel 99) or a
/// judged candidate document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relevance {
    Query,
    Relevant,
    Irrelevant,
}

impl Relevance {
    pub fn as_label(self) -> i64 {
        match self {
            Relevance::Query => 99,
            Relevance::Relevant => 1,
            Relevance::Irrelevant => 0,
        }
    }
}

impl TryFrom<i64> for Relevance {
    type Error = InvalidLabel;

    fn try_from(label: i64) -> Result<Self, InvalidLabel> {
        match label {
            99 => Ok(Relevance::Query),
            1 => Ok(Relevance::Relevant),
            0 => Ok(Relevance::Irrelevant),
            other => Err(InvalidLabel(other)),
        }
    }
}

/// One judged record: a query or a candidate document for a query.
#[derive(Debug, Clone)]
pub struct DocumentRecord {
    /// Corpus position. The sole stable identity used to cross-reference
    /// ranked entries back to records.
    pub index: DocIndex,
    pub query_id: QueryId,
    pub relevance: Relevance,
    pub text: String,
    /// Built once at ingestion, never mutated afterward.
    pub term_frequency: TermFrequency,
}
