use std::{fmt, str};

/// Term represents the value that a token can take.
///
/// It wraps the raw bytes emitted by the analyzer for a given token.
/// The field a term belongs to is not part of the term: the scoring
/// context carries the field separately.
///
/// Terms are ordered by their bytes, which is the order of the
/// terms within a term vector.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term(Vec<u8>);

impl Term {
    /// Builds a term given a text value.
    pub fn from_text(text: &str) -> Term {
        Term::from_bytes(text.as_bytes())
    }

    /// Builds a term from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Term {
        Term(bytes.to_vec())
    }

    /// Returns the raw bytes of the term.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns the term as a string, if it is valid utf-8.
    pub fn as_str(&self) -> Option<&str> {
        str::from_utf8(self.as_slice()).ok()
    }
}

impl From<&str> for Term {
    fn from(text: &str) -> Term {
        Term::from_text(text)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.as_str() {
            Some(text) => write!(f, "{text}"),
            None => write!(f, "{:?}", self.as_slice()),
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.as_str() {
            Some(text) => write!(f, "Term(str={text:?})"),
            None => write!(f, "Term(bytes={:?})", self.as_slice()),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::Term;

    #[test]
    pub fn test_term_str() {
        let term = Term::from_text("test");
        assert_eq!(term.as_str(), Some("test"));
        assert_eq!(term.as_slice(), b"test");
        assert_eq!(format!("{term:?}"), "Term(str=\"test\")");
        assert_eq!(term.to_string(), "test");
        assert_eq!(Term::from("test"), term);
    }

    #[test]
    pub fn test_term_bytes() {
        let term = Term::from_bytes(&[0xff, 0x00]);
        assert_eq!(term.as_str(), None);
        assert_eq!(format!("{term:?}"), "Term(bytes=[255, 0])");
        assert_eq!(term.to_string(), "[255, 0]");
    }

    #[test]
    pub fn test_term_order_is_byte_order() {
        let mut terms = vec![
            Term::from_text("rust"),
            Term::from_text("lucene"),
            Term::from_text("rusty"),
            Term::from_bytes(&[0xff]),
        ];
        terms.sort();
        let texts: Vec<&str> = terms.iter().filter_map(Term::as_str).collect();
        assert_eq!(texts, vec!["lucene", "rust", "rusty"]);
        assert_eq!(terms[3], Term::from_bytes(&[0xff]));
    }
}
