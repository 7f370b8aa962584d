//! Ranking-quality evaluation over judged query/document corpora.
//!
//! Records arrive as `(query id, relevance label, text)` triples. Each text is
//! folded into a term-frequency vector; for every query, its judged candidates
//! are ranked by cosine similarity to the query vector; ranks are aggregated
//! into a single reciprocal-rank score.
//!
//! Note on the metric: the score sums `1/rank` over *every* relevant candidate
//! in a query group (not only the first hit) and divides by the number of
//! query groups. This deliberately diverges from textbook single-hit Mean
//! Reciprocal Rank and is kept for compatibility with the historical results.

pub mod corpus;
pub mod evaluate;
pub mod rank;
pub mod report;
pub mod similarity;
pub mod tokenizer;
pub mod vector;

mod record;

pub use corpus::Corpus;
pub use evaluate::{evaluate, AggregateResult, QueryReport};
pub use rank::RankedEntry;
pub use record::{DocIndex, DocumentRecord, InvalidLabel, QueryId, Relevance, TermFrequency};
