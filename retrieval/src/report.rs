use std::fmt::Write;

use crate::{AggregateResult, Corpus, QueryReport, RankedEntry};

/// One listing line: `cosine=<sim>\trank=<r>\tqid=<q>\trel=<label>\t<text>`.
///
/// The cosine is rounded to four decimal places; that rounding and the field
/// layout are a compatibility contract with the historical results file.
/// Returns `None` if the entry's candidate index no longer resolves.
pub fn format_entry(
    corpus: &Corpus,
    report: &QueryReport,
    entry: &RankedEntry,
) -> Option<String> {
    let candidate = corpus.get(entry.candidate_index)?;
    Some(format!(
        "cosine={:.4}\trank={}\tqid={}\trel={}\t{}",
        entry.similarity,
        entry.rank,
        report.query_id,
        candidate.relevance.as_label(),
        candidate.text,
    ))
}

/// Render the full report: every query group's ranked listing in group order,
/// then the trailing aggregate line.
pub fn render(corpus: &Corpus, result: &AggregateResult) -> String {
    let mut out = String::new();
    for report in &result.reports {
        for entry in &report.entries {
            if let Some(line) = format_entry(corpus, report, entry) {
                let _ = writeln!(out, "{line}");
            }
        }
    }
    let _ = writeln!(out, "MRR={}", result.score);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{evaluate, Relevance};

    #[test]
    fn lines_round_cosine_to_four_places() {
        let mut corpus = Corpus::new();
        corpus.append(3, Relevance::Query, "apple banana");
        corpus.append(3, Relevance::Relevant, "apple banana");
        corpus.append(3, Relevance::Irrelevant, "apple");

        let result = evaluate(&corpus);
        let report = &result.reports[0];
        let first = format_entry(&corpus, report, &report.entries[0]).unwrap();
        let second = format_entry(&corpus, report, &report.entries[1]).unwrap();
        assert_eq!(first, "cosine=1.0000\trank=1\tqid=3\trel=1\tapple banana");
        assert_eq!(second, "cosine=0.7071\trank=2\tqid=3\trel=0\tapple");
    }

    #[test]
    fn render_ends_with_aggregate_line() {
        let mut corpus = Corpus::new();
        corpus.append(1, Relevance::Query, "a");
        corpus.append(1, Relevance::Relevant, "a");

        let result = evaluate(&corpus);
        let out = render(&corpus, &result);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(*lines.last().unwrap(), "MRR=1");
    }

    #[test]
    fn degenerate_similarity_renders_as_nan() {
        let mut corpus = Corpus::new();
        corpus.append(1, Relevance::Query, "a");
        corpus.append(1, Relevance::Irrelevant, "");

        let result = evaluate(&corpus);
        let report = &result.reports[0];
        let line = format_entry(&corpus, report, &report.entries[0]).unwrap();
        assert_eq!(line, "cosine=NaN\trank=1\tqid=1\trel=0\t");
    }
}
