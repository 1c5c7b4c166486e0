use axum::{
    extract::{rejection::FormRejection, DefaultBodyLimit, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::api::{load_default_content, submit_text, IndexPage, SubmitForm};
use crate::config::Settings;
use crate::error::AppError;
use crate::providers::{AnnotationProvider, ConceptInsightsProvider};

/// Largest accepted POST body. Whole essays and book chapters fit.
pub const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

pub struct AppState {
    pub provider: Arc<dyn AnnotationProvider>,
    pub page: IndexPage,
}

impl AppState {
    pub fn new(provider: Arc<dyn AnnotationProvider>, page: IndexPage) -> Self {
        Self { provider, page }
    }

    /// Builds the production state. A missing sample file is logged and the
    /// page is served without sample text.
    pub fn from_settings(settings: &Settings) -> Self {
        let default_content = match load_default_content(&settings.default_content_path) {
            Ok(content) => Some(content),
            Err(e) => {
                error!("{}", e);
                None
            }
        };

        let provider = ConceptInsightsProvider::new(settings.service.clone());
        Self::new(Arc::new(provider), IndexPage::new(default_content))
    }
}

pub async fn index_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.page.render())
}

pub async fn submit_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    form: Result<Form<SubmitForm>, FormRejection>,
) -> Result<Response, AppError> {
    // Only a bare POST counts as "no text". A body that was sent but could
    // not be read as a form is reported back to the caller.
    let text = match form {
        Ok(Form(form)) => form.text,
        Err(FormRejection::InvalidFormContentType(_))
            if !headers.contains_key(header::CONTENT_TYPE) =>
        {
            None
        }
        Err(rejection) => return Err(AppError::Form(rejection.body_text())),
    };
    info!(chars = text.as_ref().map_or(0, |t| t.chars().count()), "Received text");

    let body = submit_text(state.provider.as_ref(), text).await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

pub fn router(state: Arc<AppState>, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index_handler).post(submit_handler))
        .nest_service("/public", ServeDir::new(static_dir))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(settings: Settings) -> anyhow::Result<()> {
    let state = Arc::new(AppState::from_settings(&settings));
    let app = router(state, &settings.static_dir);

    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
