use std::fmt;

use serde::{Serialize, Serializer};

use crate::Score;

/// Object describing the score of a given document.
/// It is organized in trees.
///
/// `.to_pretty_json()` can be useful to print out a human readable
/// representation of this tree when debugging a given score.
#[derive(Clone, Serialize, PartialEq)]
pub struct Explanation {
    #[serde(serialize_with = "serialize_score")]
    value: Score,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<Explanation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<Vec<String>>,
}

/// JSON has no representation for NaN and infinities: they are written as
/// the strings `"NaN"`, `"inf"` and `"-inf"`.
fn serialize_score<S: Serializer>(value: &Score, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f32(*value)
    } else {
        serializer.collect_str(value)
    }
}

impl fmt::Debug for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Explanation({})", self.to_pretty_json())
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

impl Explanation {
    /// Creates a new explanation object.
    pub fn new<T: ToString>(description: T, value: Score) -> Explanation {
        Explanation {
            value,
            description: description.to_string(),
            details: None,
            context: None,
        }
    }

    /// Returns the value associated with the current node.
    pub fn value(&self) -> Score {
        self.value
    }

    /// Returns the description of the current node.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the children of the current node.
    pub fn details(&self) -> &[Explanation] {
        self.details.as_deref().unwrap_or(&[])
    }

    /// Returns the context lines attached to the current node.
    pub fn context(&self) -> &[String] {
        self.context.as_deref().unwrap_or(&[])
    }

    /// Add some detail, explaining some part of the current node formula.
    ///
    /// Details are treated as children of the current node.
    pub fn add_detail(&mut self, child_explanation: Explanation) {
        self.details
            .get_or_insert_with(Vec::new)
            .push(child_explanation);
    }

    /// Adds some extra context to the explanation.
    pub fn add_context(&mut self, context: String) {
        self.context.get_or_insert_with(Vec::new).push(context);
    }

    /// Shortcut for `self.details.push(Explanation::new(name, value));`
    pub fn add_const<T: ToString>(&mut self, name: T, value: Score) {
        self.add_detail(Explanation::new(name, value));
    }

    /// Returns an indented json representation of the explanation tree for debug usage.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    fn write_indented(&self, f: &mut fmt::Formatter, depth: usize) -> fmt::Result {
        writeln!(f, "{:indent$}{} = {}", "", self.value, self.description, indent = depth * 2)?;
        for context in self.context() {
            writeln!(f, "{:indent$}  ({context})", "", indent = depth * 2)?;
        }
        for detail in self.details() {
            detail.write_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Explanation;
    use crate::Score;

    #[test]
    fn test_explanation_details() {
        let mut explanation = Explanation::new("sum of:", 3.0);
        assert!(explanation.details().is_empty());
        explanation.add_const("left", 1.0);
        explanation.add_const("right", 2.0);
        assert_eq!(explanation.details().len(), 2);
        assert_eq!(explanation.details()[1].description(), "right");
        assert_eq!(explanation.details()[1].value(), 2.0);
    }

    #[test]
    fn test_explanation_to_pretty_json() {
        let mut explanation = Explanation::new("sum of:", 3.0);
        explanation.add_const("left", 3.0);
        explanation.add_context("context line".to_string());
        let json: serde_json::Value =
            serde_json::from_str(&explanation.to_pretty_json()).expect("valid json");
        assert_eq!(json["description"], "sum of:");
        assert_eq!(json["value"], 3.0);
        assert_eq!(json["details"][0]["description"], "left");
        assert_eq!(json["context"][0], "context line");
        assert!(json["details"][0].get("details").is_none());
    }

    #[test]
    fn test_explanation_json_non_finite_values() {
        let mut explanation = Explanation::new("sum of:", Score::NAN);
        explanation.add_const("big", Score::INFINITY);
        explanation.add_const("small", Score::NEG_INFINITY);
        let json: serde_json::Value =
            serde_json::from_str(&explanation.to_pretty_json()).expect("valid json");
        assert_eq!(json["value"], "NaN");
        assert_eq!(json["details"][0]["value"], "inf");
        assert_eq!(json["details"][1]["value"], "-inf");
    }

    #[test]
    fn test_explanation_display() {
        let mut explanation = Explanation::new("sum of:", 3.0);
        let mut child = Explanation::new("left", 3.0);
        child.add_context("why".to_string());
        explanation.add_detail(child);
        assert_eq!(explanation.to_string(), "3 = sum of:\n  3 = left\n    (why)\n");
    }
}
