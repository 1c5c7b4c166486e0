use std::path::Path;

use crate::error::{AppError, Result};

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
const CONTENT_SLOT: &str = "{{ content }}";

/// The landing page with its sample text baked in at startup.
#[derive(Clone, Debug, Default)]
pub struct IndexPage {
    default_content: Option<String>,
}

impl IndexPage {
    pub fn new(default_content: Option<String>) -> Self {
        Self { default_content }
    }

    pub fn render(&self) -> String {
        let content = self.default_content.as_deref().map(escape_html).unwrap_or_default();
        INDEX_TEMPLATE.replace(CONTENT_SLOT, &content)
    }
}

pub fn load_default_content(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| AppError::StartupIo {
        path: path.to_path_buf(),
        source,
    })
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
