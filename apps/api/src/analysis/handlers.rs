//! Axum route handlers for the analysis page and JSON API.

use askama::Template;
use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        State,
    },
    response::Html,
    Form, Json,
};
use serde::Deserialize;
use tracing::info;

use crate::analysis::page::IndexPage;
use crate::analysis::scorer::AnalysisResult;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub username: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Fetch then score. A fetch failure or an empty history ends the request
/// with an error; no partial result is produced.
async fn run_analysis(state: &AppState, username: &str) -> Result<AnalysisResult, AppError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AppError::Validation("username cannot be empty".to_string()));
    }

    let items = state.fetcher.fetch(username).await?;
    let result = state.analyzer.analyze(&items)?;

    info!(
        "Analyzed {} items for {}: top traits {:?}",
        result.item_count, username, result.top_traits
    );

    Ok(result)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_index() -> Result<Html<String>, AppError> {
    Ok(Html(IndexPage::empty().render()?))
}

/// POST /
///
/// Form submission. Errors, including a malformed form body, are rendered into
/// the page rather than returned as an error status, so the user always gets
/// the form back.
pub async fn handle_form_submit(
    State(state): State<AppState>,
    form: Result<Form<AnalyzeRequest>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let request = match form {
        Ok(Form(request)) => request,
        Err(rejection) => {
            let message = AppError::Validation(rejection.body_text()).public_message();
            return Ok(Html(IndexPage::with_error(String::new(), message).render()?));
        }
    };

    let page = match run_analysis(&state, &request.username).await {
        Ok(result) => IndexPage::with_result(request.username, &result),
        Err(e) => {
            let message = e.public_message();
            IndexPage::with_error(request.username, message)
        }
    };

    Ok(Html(page.render()?))
}

/// POST /api/v1/analyze
///
/// Returns the full `AnalysisResult`, or `{ "error": message }`. Body
/// rejections are reported in the same shape.
pub async fn handle_analyze(
    State(state): State<AppState>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let Json(request) = body.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let result = run_analysis(&state, &request.username).await?;
    Ok(Json(result))
}
