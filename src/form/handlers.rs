use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use super::export::{render_document, EXPORT_CONTENT_TYPE, EXPORT_FILENAME};
use super::state::{FormState, GeneratedPost};
use super::submission::DealsForm;

static FORM_HTML: &str = include_str!("../web/deals_form.html");

pub fn router(state: Arc<FormState>) -> Router {
    Router::new()
        .route("/", get(form_page))
        .route("/api/defaults", get(form_defaults))
        .route("/api/deals", post(submit_deals))
        .route("/api/post", get(current_post))
        .route("/export", get(export_post))
        .with_state(state)
}

pub async fn form_page() -> Html<&'static str> {
    Html(FORM_HTML)
}

pub async fn form_defaults() -> Json<DealsForm> {
    Json(DealsForm::default())
}

#[derive(Serialize)]
pub struct PostView {
    post: Option<String>,
    generated_at: Option<String>,
}

impl From<Option<GeneratedPost>> for PostView {
    fn from(post: Option<GeneratedPost>) -> Self {
        Self {
            generated_at: post.as_ref().map(|p| p.created_at.to_rfc3339()),
            post: post.map(|p| p.text),
        }
    }
}

// POST /api/deals
// Failures become the post text so the page always has something to show.
pub async fn submit_deals(
    State(state): State<Arc<FormState>>,
    Json(form): Json<DealsForm>,
) -> Json<PostView> {
    let text = match state.api.fetch_post(&form).await {
        Ok(post) => {
            tracing::info!(chars = post.len(), "deals post generated");
            post
        }
        Err(e) => {
            tracing::warn!(error = %e, "deals request failed");
            format!("Error contacting backend for deals: {e:#}")
        }
    };

    Json(Some(state.store(text)).into())
}

// GET /api/post
pub async fn current_post(State(state): State<Arc<FormState>>) -> Json<PostView> {
    Json(state.current().into())
}

// GET /export
pub async fn export_post(State(state): State<Arc<FormState>>) -> Response {
    let Some(post) = state.current() else {
        return (StatusCode::NOT_FOUND, "No post generated yet").into_response();
    };

    let document = match render_document(&post.text) {
        Ok(document) => document,
        Err(e) => {
            tracing::error!(error = %e, "document export failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to build document").into_response();
        }
    };

    (
        [
            (header::CONTENT_TYPE, EXPORT_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        document,
    )
        .into_response()
}
