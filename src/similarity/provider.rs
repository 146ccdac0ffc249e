use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Similarity, TermPayloadSimilarity};
use crate::SimilarityError;

/// Type name selecting [`TermPayloadSimilarity`] in the settings.
pub const TERM_PAYLOAD_SIMILARITY: &str = "term_payload";

const SIMILARITY_TYPE_KEY: &str = "type";

/// Settings of a similarity, as found in the index configuration.
///
/// Settings are an opaque JSON object. The `type` key names the similarity;
/// other keys are left to the similarity itself.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings(Map<String, Value>);

impl Settings {
    /// Parses settings from a JSON object.
    pub fn from_json(json: &str) -> crate::Result<Settings> {
        let settings = serde_json::from_str(json)?;
        Ok(settings)
    }

    /// Returns the settings of a given type, without any other key.
    pub fn for_type(similarity_type: &str) -> Settings {
        let mut settings = Map::new();
        settings.insert(
            SIMILARITY_TYPE_KEY.to_string(),
            Value::String(similarity_type.to_string()),
        );
        Settings(settings)
    }

    /// Returns the raw value associated with `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the value associated with `key`, if it is a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Returns the value associated with `key`, if it is a number.
    pub fn get_f32(&self, key: &str) -> Option<f32> {
        self.get(key).and_then(Value::as_f64).map(|value| value as f32)
    }

    /// Returns true if no key is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Named factory of a similarity.
pub trait SimilarityProvider: Send + Sync {
    /// Returns the name the similarity was registered under.
    fn name(&self) -> &str;

    /// Returns the similarity. Every call returns the same instance.
    fn get(&self) -> Arc<dyn Similarity>;
}

/// Provider of [`TermPayloadSimilarity`].
///
/// The similarity has no parameter: the settings are accepted and ignored.
pub struct TermPayloadSimilarityProvider {
    name: String,
    similarity: Arc<TermPayloadSimilarity>,
}

impl TermPayloadSimilarityProvider {
    /// Creates the provider.
    pub fn new(
        name: &str,
        _settings: &Settings,
        _index_settings: &Settings,
    ) -> TermPayloadSimilarityProvider {
        TermPayloadSimilarityProvider::with_similarity(name, TermPayloadSimilarity::default())
    }

    /// Creates a provider serving the given similarity.
    pub fn with_similarity(
        name: &str,
        similarity: TermPayloadSimilarity,
    ) -> TermPayloadSimilarityProvider {
        TermPayloadSimilarityProvider {
            name: name.to_string(),
            similarity: Arc::new(similarity),
        }
    }

    /// Returns the specialized similarity.
    pub fn similarity(&self) -> &TermPayloadSimilarity {
        &self.similarity
    }
}

impl SimilarityProvider for TermPayloadSimilarityProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self) -> Arc<dyn Similarity> {
        self.similarity.clone()
    }
}

/// Creates the provider of the similarity named `name`, from the `type` key
/// of its settings.
pub fn similarity_provider(
    name: &str,
    settings: &Settings,
    index_settings: &Settings,
) -> crate::Result<Box<dyn SimilarityProvider>> {
    match settings.get_str(SIMILARITY_TYPE_KEY) {
        Some(TERM_PAYLOAD_SIMILARITY) => {
            debug!("similarity [{name}] uses {TERM_PAYLOAD_SIMILARITY}");
            Ok(Box::new(TermPayloadSimilarityProvider::new(
                name,
                settings,
                index_settings,
            )))
        }
        Some(unknown_type) => Err(SimilarityError::UnknownSimilarity(unknown_type.to_string())),
        None => Err(SimilarityError::InvalidSettings(format!(
            "similarity [{name}] must have an associated type"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldInvertState;

    #[test]
    fn test_settings_from_json() -> crate::Result<()> {
        let settings = Settings::from_json(r#"{"type": "term_payload", "factor": 0.5}"#)?;
        assert_eq!(settings.get_str("type"), Some("term_payload"));
        assert_eq!(settings.get_f32("factor"), Some(0.5));
        assert_eq!(settings.get_str("factor"), None);
        assert_eq!(settings.get("missing"), None);
        assert!(!settings.is_empty());
        assert!(Settings::default().is_empty());
        Ok(())
    }

    #[test]
    fn test_settings_from_invalid_json() {
        assert!(matches!(
            Settings::from_json("[1, 2]"),
            Err(SimilarityError::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_provider_returns_the_same_similarity() {
        let provider = TermPayloadSimilarityProvider::new(
            "my_payload",
            &Settings::default(),
            &Settings::default(),
        );
        assert_eq!(provider.name(), "my_payload");
        assert!(Arc::ptr_eq(&provider.get(), &provider.get()));
        assert_eq!(provider.get().compute_norm(&FieldInvertState::default()), 1);
    }

    #[test]
    fn test_similarity_provider_from_type() -> crate::Result<()> {
        let settings = Settings::for_type(TERM_PAYLOAD_SIMILARITY);
        let provider = similarity_provider("weighted", &settings, &Settings::default())?;
        assert_eq!(provider.name(), "weighted");
        Ok(())
    }

    #[test]
    fn test_similarity_provider_unknown_type() {
        let settings = Settings::for_type("BM25");
        let err = similarity_provider("weighted", &settings, &Settings::default()).err();
        assert!(matches!(err, Some(SimilarityError::UnknownSimilarity(ref t)) if t == "BM25"));
    }

    #[test]
    fn test_similarity_provider_missing_type() {
        let err = similarity_provider("weighted", &Settings::default(), &Settings::default()).err();
        assert!(matches!(err, Some(SimilarityError::InvalidSettings(_))));
    }
}
