use crate::schema::Term;

/// Collection-wide statistics of a field, as gathered by query compilation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionStatistics {
    field: String,
    max_doc: u64,
    doc_count: u64,
    sum_total_term_freq: u64,
    sum_doc_freq: u64,
}

impl CollectionStatistics {
    /// Creates the statistics of a field.
    pub fn new(
        field: impl Into<String>,
        max_doc: u64,
        doc_count: u64,
        sum_total_term_freq: u64,
        sum_doc_freq: u64,
    ) -> CollectionStatistics {
        CollectionStatistics {
            field: field.into(),
            max_doc,
            doc_count,
            sum_total_term_freq,
            sum_doc_freq,
        }
    }

    /// Creates statistics only naming a field, with all of the counts at 0.
    pub fn for_field(field: impl Into<String>) -> CollectionStatistics {
        CollectionStatistics::new(field, 0, 0, 0, 0)
    }

    /// Returns the name of the field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the total number of documents, deleted documents included.
    pub fn max_doc(&self) -> u64 {
        self.max_doc
    }

    /// Returns the number of documents having at least one term for the field.
    pub fn doc_count(&self) -> u64 {
        self.doc_count
    }

    /// Returns the total number of tokens of the field.
    pub fn sum_total_term_freq(&self) -> u64 {
        self.sum_total_term_freq
    }

    /// Returns the sum of the document frequencies of every term of the field.
    pub fn sum_doc_freq(&self) -> u64 {
        self.sum_doc_freq
    }
}

/// Statistics of one query term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermStatistics {
    term: Term,
    doc_freq: u64,
    total_term_freq: u64,
}

impl TermStatistics {
    /// Creates the statistics of a term.
    pub fn new(term: Term, doc_freq: u64, total_term_freq: u64) -> TermStatistics {
        TermStatistics {
            term,
            doc_freq,
            total_term_freq,
        }
    }

    /// Creates statistics only naming a term.
    pub fn for_term(term: Term) -> TermStatistics {
        TermStatistics::new(term, 0, 0)
    }

    /// Returns the term.
    pub fn term(&self) -> &Term {
        &self.term
    }

    /// Returns the number of documents containing the term.
    pub fn doc_freq(&self) -> u64 {
        self.doc_freq
    }

    /// Returns the number of occurrences of the term across all documents.
    pub fn total_term_freq(&self) -> u64 {
        self.total_term_freq
    }
}

/// Statistics gathered while inverting the field of a document,
/// used to compute its norm.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldInvertState {
    /// Name of the field.
    pub field: String,
    /// Number of tokens of the field in the document.
    pub num_tokens: u32,
    /// Number of distinct terms of the field in the document.
    pub num_unique_tokens: u32,
    /// Last position seen.
    pub position: u32,
}
