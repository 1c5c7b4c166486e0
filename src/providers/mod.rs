// src/providers/mod.rs

use async_trait::async_trait;
use thiserror::Error;
use crate::types::ProfileResult;

#[derive(Debug, Error)]
pub enum RequestError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// A response arrived but its body is not an annotation profile.
    #[error("Error processing the request, HTTP: {status}")]
    Unprocessable { status: u16 },
}

#[async_trait]
pub trait AnnotationProvider: Send + Sync {
    fn provider_name(&self) -> &str;

    async fn annotate(&self, text: &str) -> Result<ProfileResult, RequestError>;
}

// Module declarations
pub mod mocks;
pub mod concept_insights;

// Re-export for testing
pub use mocks::MockProvider;
pub use concept_insights::ConceptInsightsProvider;
