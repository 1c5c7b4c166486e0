use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use super::{AnnotationProvider, RequestError};
use crate::config::ServiceConfig;
use crate::types::ProfileResult;

const ANNOTATE_PATH: &str = "/v2/graphs/wikipedia/en-20120601/annotate_text";

/// Client for the Concept Insights `annotate_text` endpoint.
pub struct ConceptInsightsProvider {
    config: ServiceConfig,
    annotate_url: String,
    client: reqwest::Client,
}

impl ConceptInsightsProvider {
    pub fn new(config: ServiceConfig) -> Self {
        let annotate_url = format!("{}{}", config.endpoint, ANNOTATE_PATH);
        Self {
            config,
            annotate_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn annotate_url(&self) -> &str {
        &self.annotate_url
    }
}

#[async_trait]
impl AnnotationProvider for ConceptInsightsProvider {
    fn provider_name(&self) -> &str {
        "concept_insights"
    }

    async fn annotate(&self, text: &str) -> Result<ProfileResult, RequestError> {
        let response = self
            .client
            .post(&self.annotate_url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .header(CONTENT_TYPE, "text/plain")
            .body(text.to_owned())
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, bytes = body.len(), "annotate_text response");

        serde_json::from_str(&body).map_err(|e| {
            debug!("annotate_text body rejected: {}", e);
            RequestError::Unprocessable { status }
        })
    }
}
