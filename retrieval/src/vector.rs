use crate::TermFrequency;

/// Align two term-frequency maps onto their vocabulary union.
///
/// The vocabulary is `a`'s terms followed by any of `b`'s terms not already
/// present. Each output vector has one slot per vocabulary term, zero where
/// the term is absent from that map, so both vectors always come back the
/// same length. An empty union yields two empty vectors.
pub fn align(a: &TermFrequency, b: &TermFrequency) -> (Vec<f64>, Vec<f64>) {
    let mut vocabulary: Vec<&str> = Vec::with_capacity(a.len() + b.len());
    for term in a.keys() {
        vocabulary.push(term);
    }
    for term in b.keys() {
        if !a.contains_key(term.as_str()) {
            vocabulary.push(term);
        }
    }

    let mut vec_a = Vec::with_capacity(vocabulary.len());
    let mut vec_b = Vec::with_capacity(vocabulary.len());
    for term in vocabulary {
        vec_a.push(f64::from(a.get(term).copied().unwrap_or(0)));
        vec_b.push(f64::from(b.get(term).copied().unwrap_or(0)));
    }
    (vec_a, vec_b)
}
