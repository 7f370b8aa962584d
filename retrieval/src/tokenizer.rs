use crate::TermFrequency;

/// Fold whitespace-delimited tokens into a term-frequency map.
///
/// Deliberately dumb: no punctuation stripping, no case folding, no stemming.
/// Empty input yields an empty map.
pub fn tokenize(text: &str) -> TermFrequency {
    let mut tf = TermFrequency::new();
    for token in text.split_whitespace() {
        *tf.entry(token.to_string()).or_insert(0) += 1;
    }
    tf
}
