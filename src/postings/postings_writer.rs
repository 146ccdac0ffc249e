use std::ops::Range;

use rustc_hash::FxHashMap;

use super::term_vector::{TermPostings, TermVector, TokenPosition};

/// A token as it was pushed by the caller, before serialization.
struct RecordedToken {
    field: String,
    term: Vec<u8>,
    position: u32,
    payload: Option<Box<[u8]>>,
}

/// Splits a slice sorted by `key` into the ranges of consecutive items
/// sharing the same key.
fn partition_sorted<'a, T, K: PartialEq>(
    items: &'a [T],
    key: impl Fn(&'a T) -> K,
) -> Vec<Range<usize>> {
    let len = items.len();
    if len == 0 {
        return Vec::new();
    }
    // items are already sorted by key, so we can scan once.
    let mut ranges: Vec<Range<usize>> = Vec::new();
    let mut start_idx = 0usize;
    let mut current_key = key(&items[0]);
    for (i, item) in items.iter().enumerate().skip(1) {
        let item_key = key(item);
        if item_key != current_key {
            ranges.push(start_idx..i);
            current_key = item_key;
            start_idx = i;
        }
    }
    ranges.push(start_idx..len);
    ranges
}

fn make_field_partition(tokens: &[RecordedToken]) -> Vec<(&str, Range<usize>)> {
    partition_sorted(tokens, |token| token.field.as_str())
        .into_iter()
        .map(|range| (tokens[range.start].field.as_str(), range))
        .collect()
}

/// Records the tokens of a single document and serializes them into
/// one term vector per field.
#[derive(Default)]
pub(crate) struct TermVectorWriter {
    tokens: Vec<RecordedToken>,
}

impl TermVectorWriter {
    /// Records a token occurrence.
    pub fn record(&mut self, field: &str, term: &[u8], position: u32, payload: Option<&[u8]>) {
        self.tokens.push(RecordedToken {
            field: field.to_string(),
            term: term.to_vec(),
            position,
            payload: payload.map(Box::from),
        });
    }

    pub fn num_tokens(&self) -> usize {
        self.tokens.len()
    }

    /// Serialize the term vectors of the document.
    ///
    /// Terms end up sorted by bytes within each field, and positions sorted
    /// within each term. Tokens recorded twice at the same position keep
    /// their insertion order.
    pub fn serialize(mut self) -> FxHashMap<String, TermVector> {
        // 1) Sort by (field, term, position). The sort is stable.
        self.tokens.sort_by(|left, right| {
            left.field
                .cmp(&right.field)
                .then_with(|| left.term.cmp(&right.term))
                .then_with(|| left.position.cmp(&right.position))
        });

        // 2) Partition by field, then by term within the field.
        let mut term_vectors: FxHashMap<String, TermVector> = FxHashMap::default();
        for (field, field_range) in make_field_partition(&self.tokens) {
            let field_tokens = &self.tokens[field_range];
            let terms: Vec<TermPostings> = partition_sorted(field_tokens, |token| &token.term[..])
                .into_iter()
                .map(|term_range| {
                    let term_tokens = &field_tokens[term_range];
                    TermPostings {
                        term: term_tokens[0].term.clone(),
                        positions: term_tokens
                            .iter()
                            .map(|token| TokenPosition {
                                position: token.position,
                                payload: token.payload.clone(),
                            })
                            .collect(),
                    }
                })
                .collect();
            term_vectors.insert(field.to_string(), TermVector::new(terms));
        }
        term_vectors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_sorted() {
        let items = [1, 1, 2, 3, 3, 3];
        assert_eq!(partition_sorted(&items, |v| *v), vec![0..2, 2..3, 3..6]);
        assert!(partition_sorted(&[] as &[u32], |v| *v).is_empty());
    }

    #[test]
    fn test_serialize_sorts_terms_and_positions() {
        let mut writer = TermVectorWriter::default();
        writer.record("body", b"zeta", 3, None);
        writer.record("body", b"alpha", 7, Some(&[1, 2, 3, 4]));
        writer.record("title", b"alpha", 0, None);
        writer.record("body", b"alpha", 2, None);
        assert_eq!(writer.num_tokens(), 4);
        let term_vectors = writer.serialize();
        assert_eq!(term_vectors.len(), 2);
        let body = &term_vectors["body"];
        let terms: Vec<&[u8]> = body.terms().iter().map(|t| &t.term[..]).collect();
        assert_eq!(terms, vec![&b"alpha"[..], &b"zeta"[..]]);
        let alpha_positions: Vec<u32> = body.terms()[0]
            .positions
            .iter()
            .map(|p| p.position)
            .collect();
        assert_eq!(alpha_positions, vec![2, 7]);
        assert!(body.terms()[0].positions[0].payload.is_none());
        assert_eq!(
            body.terms()[0].positions[1].payload.as_deref(),
            Some(&[1u8, 2, 3, 4][..])
        );
        assert_eq!(term_vectors["title"].terms().len(), 1);
    }
}
