use serde::Deserialize;

/// Body of `POST /`. The page always sends `text`, but a bare POST is
/// still accepted and forwarded as empty text.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub text: Option<String>,
}
