use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Score a concept must exceed to be used in title suggestions.
pub const INTEREST_THRESHOLD: f64 = 0.615;

/// Parsed body of an `annotate_text` response.
///
/// Only `annotations[].concept.label` and `annotations[].score` are read.
/// Every other field is kept in `extra` and written back out untouched.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ProfileResult {
    pub annotations: Vec<Annotation>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Annotation {
    pub concept: Concept,
    pub score: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Concept {
    pub label: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A profile with generated titles attached, as returned to the browser.
#[derive(Clone, Debug, Serialize)]
pub struct TitledProfile {
    #[serde(flatten)]
    pub profile: ProfileResult,
    pub titles: Vec<String>,
}

impl TitledProfile {
    pub fn new(mut profile: ProfileResult, titles: Vec<String>) -> Self {
        // The generated list wins over anything the remote side sent.
        profile.extra.remove("titles");
        Self { profile, titles }
    }
}

impl Annotation {
    pub fn new(label: &str, score: f64) -> Self {
        Self {
            concept: Concept {
                label: label.to_string(),
                extra: Map::new(),
            },
            score,
            extra: Map::new(),
        }
    }

    pub fn is_interesting(&self) -> bool {
        self.score > INTEREST_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let raw = json!({
            "annotations": [
                {
                    "concept": {"label": "Ice cream", "id": "/graphs/wikipedia/en-20120601/concepts/Ice_cream"},
                    "score": 0.93,
                    "text_index": [0, 9]
                }
            ],
            "text": "Ice cream in summer"
        });

        let profile: ProfileResult = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(profile.annotations[0].concept.label, "Ice cream");
        assert_eq!(serde_json::to_value(&profile).unwrap(), raw);
    }

    #[test]
    fn test_missing_annotations_is_rejected() {
        let result: Result<ProfileResult, _> = serde_json::from_value(json!({"code": 401}));
        assert!(result.is_err());
    }

    #[test]
    fn test_titled_profile_replaces_remote_titles() {
        let profile: ProfileResult = serde_json::from_value(json!({
            "annotations": [],
            "titles": "stale"
        }))
        .unwrap();

        let titled = TitledProfile::new(profile, vec!["a and b".to_string()]);
        let value = serde_json::to_value(&titled).unwrap();
        assert_eq!(value["titles"], json!(["a and b"]));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(!Annotation::new("edge", INTEREST_THRESHOLD).is_interesting());
        assert!(Annotation::new("above", 0.616).is_interesting());
    }
}
