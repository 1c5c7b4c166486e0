// src/lib.rs

pub mod types;
pub mod error;
pub mod config;
pub mod providers;
pub mod titles;
pub mod api;
pub mod server;

// Re-export commonly used types
pub use types::*;
pub use error::AppError;
pub use config::{ServiceConfig, Settings};
pub use providers::{AnnotationProvider, RequestError};
pub use titles::{generate_titles, interesting_concepts};
pub use api::{submit_text, IndexPage};
