use std::path::PathBuf;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::providers::RequestError;

#[derive(Debug, Error)]
pub enum AppError {
    /// The credential blob did not describe the annotation service.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Request(#[from] RequestError),

    /// A POST body was sent but is not a readable `text` form.
    #[error("couldn't read the submitted form: {0}")]
    Form(String),

    /// Serializing the titled profile failed.
    #[error("couldn't encode the profile: {0}")]
    Encode(#[from] serde_json::Error),

    /// The default sample text could not be read at startup.
    #[error("couldn't read {}: {source}", .path.display())]
    StartupIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Errors reach the browser as a bare message with status 200. The page
/// script tells success from failure by whether the body parses as JSON.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("{}", self);
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}
