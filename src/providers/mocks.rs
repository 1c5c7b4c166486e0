use async_trait::async_trait;
use crate::types::*;
use super::{AnnotationProvider, RequestError};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory provider keyed by submitted text. Unknown text gets
/// `default_profile`, or an HTTP 404 style failure when none is set.
pub struct MockProvider {
    pub name: String,
    pub profiles: HashMap<String, ProfileResult>,
    pub failures: HashMap<String, u16>,
    pub default_profile: Option<ProfileResult>,
    received: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            profiles: HashMap::new(),
            failures: HashMap::new(),
            default_profile: None,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn with_profile(mut self, text: &str, profile: ProfileResult) -> Self {
        self.profiles.insert(text.to_string(), profile);
        self
    }

    pub fn with_default_profile(mut self, profile: ProfileResult) -> Self {
        self.default_profile = Some(profile);
        self
    }

    /// Answer `text` as if the remote side returned `status` with a
    /// non-JSON body.
    pub fn with_failure(mut self, text: &str, status: u16) -> Self {
        self.failures.insert(text.to_string(), status);
        self
    }

    /// Texts passed to `annotate`, in call order.
    pub fn received(&self) -> Vec<String> {
        self.received.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl AnnotationProvider for MockProvider {
    fn provider_name(&self) -> &str {
        &self.name
    }

    async fn annotate(&self, text: &str) -> Result<ProfileResult, RequestError> {
        if let Ok(mut received) = self.received.lock() {
            received.push(text.to_string());
        }

        if let Some(status) = self.failures.get(text) {
            return Err(RequestError::Unprocessable { status: *status });
        }

        self.profiles.get(text)
            .or(self.default_profile.as_ref())
            .cloned()
            .ok_or(RequestError::Unprocessable { status: 404 })
    }
}
