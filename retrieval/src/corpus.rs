use crate::tokenizer::tokenize;
use crate::{DocIndex, DocumentRecord, QueryId, Relevance};

/// Append-only store of judged records for one evaluation run.
///
/// A record's position is its identity: indices are assigned sequentially on
/// insertion and stay valid for the lifetime of the corpus. Single-producer
/// ingestion only; nothing here is shared across threads while appending.
#[derive(Debug, Default)]
pub struct Corpus {
    records: Vec<DocumentRecord>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize `text` and store the record at the next sequential index.
    /// Returns that index.
    pub fn append(
        &mut self,
        query_id: QueryId,
        relevance: Relevance,
        text: impl Into<String>,
    ) -> DocIndex {
        let index = self.records.len();
        let text = text.into();
        let term_frequency = tokenize(&text);
        self.records.push(DocumentRecord {
            index,
            query_id,
            relevance,
            text,
            term_frequency,
        });
        index
    }

    pub fn get(&self, index: DocIndex) -> Option<&DocumentRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[DocumentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
