use tracing::{info, warn};

use crate::error::Result;
use crate::providers::AnnotationProvider;
use crate::titles::{generate_titles, interesting_concepts};
use crate::types::{ProfileResult, TitledProfile};

/// Annotate `text`, attach title suggestions and serialize the result.
pub async fn submit_text(
    provider: &dyn AnnotationProvider,
    text: Option<String>,
) -> Result<String> {
    let text = text.unwrap_or_else(|| {
        warn!("no text submitted, sending an empty body");
        String::new()
    });

    let profile = provider.annotate(&text).await?;
    let titled = attach_titles(profile);

    info!(
        provider = provider.provider_name(),
        annotations = titled.profile.annotations.len(),
        titles = titled.titles.len(),
        "profile ready"
    );

    Ok(serde_json::to_string(&titled)?)
}

pub fn attach_titles(profile: ProfileResult) -> TitledProfile {
    let concepts = interesting_concepts(&profile.annotations);
    if concepts.is_empty() {
        warn!("no concept scored above the threshold, no titles generated");
    }

    let titles = generate_titles(&concepts, &mut rand::thread_rng());
    TitledProfile::new(profile, titles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockProvider;
    use crate::types::Annotation;
    use serde_json::{Map, Value};

    fn profile(annotations: Vec<Annotation>) -> ProfileResult {
        ProfileResult {
            annotations,
            extra: Map::new(),
        }
    }

    #[tokio::test]
    async fn test_submit_returns_titles() {
        let provider = MockProvider::new("test").with_profile(
            "ice cream in summer",
            profile(vec![
                Annotation::new("ice cream", 0.9),
                Annotation::new("summer", 0.7),
                Annotation::new("rain", 0.3),
            ]),
        );

        let body = submit_text(&provider, Some("ice cream in summer".to_string()))
            .await
            .unwrap();
        let value: Value = serde_json::from_str(&body).unwrap();

        let titles = value["titles"].as_array().unwrap();
        assert!((100..=200).contains(&titles.len()));
        for title in titles {
            let title = title.as_str().unwrap();
            assert!(!title.contains("rain"), "rain leaked into {}", title);
            assert!(title.contains("ice cream") || title.contains("summer"));
        }
        assert_eq!(value["annotations"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_submit_failure_is_plain_message() {
        let provider = MockProvider::new("test").with_failure("boom", 500);

        let err = submit_text(&provider, Some("boom".to_string())).await.unwrap_err();
        let message = err.to_string();
        assert_eq!(message, "Error processing the request, HTTP: 500");
        assert!(serde_json::from_str::<Value>(&message).is_err());
    }

    #[tokio::test]
    async fn test_missing_text_is_sent_empty() {
        let provider = MockProvider::new("test").with_default_profile(profile(vec![]));

        let body = submit_text(&provider, None).await.unwrap();
        let value: Value = serde_json::from_str(&body).unwrap();

        assert_eq!(provider.received(), vec![String::new()]);
        assert_eq!(value["titles"], Value::Array(vec![]));
    }
}
