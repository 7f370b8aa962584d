use serde::Serialize;

use crate::rank::{rank, RankedEntry};
use crate::{Corpus, DocIndex, DocumentRecord, QueryId, Relevance};

/// Ranked listing for one query group.
#[derive(Debug, Clone, Serialize)]
pub struct QueryReport {
    pub query_id: QueryId,
    /// Corpus index of the group's query record.
    pub query_index: DocIndex,
    pub entries: Vec<RankedEntry>,
}

/// Final score plus everything an external writer needs for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateResult {
    /// Reciprocal-rank score over all query groups. NaN when the corpus
    /// holds no query group at all.
    pub score: f64,
    pub reports: Vec<QueryReport>,
    /// Structural-inconsistency warnings. Never fatal; the evaluation ran to
    /// completion on a best-effort basis whenever these are present.
    pub diagnostics: Vec<String>,
}

/// Rank every query group and aggregate the reciprocal-rank score.
///
/// Every relevant candidate contributes `1/rank`; the total is divided by the
/// number of query groups processed, never by the number of relevant
/// candidates. Groups are visited in the order their query records appear in
/// the corpus, so the floating-point sum is reproducible run to run.
pub fn evaluate(corpus: &Corpus) -> AggregateResult {
    let mut reports = Vec::new();
    let mut diagnostics = Vec::new();
    let mut seen_queries: Vec<QueryId> = Vec::new();

    for record in corpus.records() {
        if record.relevance != Relevance::Query {
            continue;
        }
        if seen_queries.contains(&record.query_id) {
            let message = format!(
                "duplicate query record at index {} for query {}; keeping the first",
                record.index, record.query_id
            );
            tracing::warn!("{message}");
            diagnostics.push(message);
            continue;
        }
        seen_queries.push(record.query_id);

        let candidates: Vec<&DocumentRecord> = corpus
            .records()
            .iter()
            .filter(|r| r.query_id == record.query_id && r.relevance != Relevance::Query)
            .collect();
        reports.push(QueryReport {
            query_id: record.query_id,
            query_index: record.index,
            entries: rank(record, &candidates),
        });
    }

    // Candidates whose query id never saw a query record are skipped and do
    // not count toward the divisor; surface them so a truncated corpus does
    // not pass silently.
    let mut orphaned: Vec<QueryId> = Vec::new();
    for record in corpus.records() {
        if record.relevance != Relevance::Query
            && !seen_queries.contains(&record.query_id)
            && !orphaned.contains(&record.query_id)
        {
            orphaned.push(record.query_id);
        }
    }
    for query_id in orphaned {
        let message = format!("no query record for query {query_id}; skipping its candidates");
        tracing::warn!("{message}");
        diagnostics.push(message);
    }

    let mut total = 0.0;
    for report in &reports {
        for entry in &report.entries {
            match corpus.get(entry.candidate_index) {
                Some(candidate) if candidate.relevance == Relevance::Relevant => {
                    total += 1.0 / entry.rank as f64;
                }
                Some(_) => {}
                None => {
                    let message = format!(
                        "stale candidate index {} in query {} ranking",
                        entry.candidate_index, report.query_id
                    );
                    tracing::warn!("{message}");
                    diagnostics.push(message);
                }
            }
        }
    }

    let score = if reports.is_empty() {
        let message = "no query groups in corpus; score is undefined".to_string();
        tracing::warn!("{message}");
        diagnostics.push(message);
        f64::NAN
    } else {
        total / reports.len() as f64
    };

    tracing::info!(groups = reports.len(), score, "evaluation complete");
    AggregateResult {
        score,
        reports,
        diagnostics,
    }
}
