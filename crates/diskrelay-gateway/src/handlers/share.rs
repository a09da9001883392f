use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use diskrelay_core::{ShareKind, ShareReference, ShareToken};
use diskrelay_resolver::Resolution;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::pages;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ShareQuery {
    /// Provider resource key for shares that require one.
    pub resource_key: Option<String>,
    /// Path of a single entry inside a shared folder.
    pub path: Option<String>,
    /// Full public-share URL override, used verbatim when supplied.
    pub public_url: Option<String>,
}

pub async fn share_handler(
    State(state): State<AppState>,
    Path((kind, token)): Path<(String, String)>,
    Query(query): Query<ShareQuery>,
) -> Response {
    handle_share(&state, &kind, token, None, query).await
}

pub async fn share_sub_path_handler(
    State(state): State<AppState>,
    Path((kind, token, sub_path)): Path<(String, String, String)>,
    Query(query): Query<ShareQuery>,
) -> Response {
    handle_share(&state, &kind, token, Some(sub_path), query).await
}

/// Requests outside the relay surface go back to the site root.
pub async fn home_handler() -> Response {
    redirect_to("/")
}

async fn handle_share(
    state: &AppState,
    kind: &str,
    token: String,
    sub_path: Option<String>,
    query: ShareQuery,
) -> Response {
    let Some(kind) = ShareKind::from_flag(kind) else {
        return redirect_to("/");
    };
    let Ok(token) = ShareToken::new(token) else {
        return redirect_to("/");
    };

    // An explicit `path` query parameter wins over the route sub-path.
    let sub_path = query
        .path
        .or_else(|| sub_path.map(|p| format!("/{}", p)));
    let share = ShareReference::new(kind, token)
        .with_resource_key(query.resource_key)
        .with_sub_path(sub_path);

    let public_url = match query.public_url {
        Some(raw) => match Url::parse(&raw) {
            Ok(url) => url,
            Err(_) => return redirect_to("/"),
        },
        None => share.public_url(state.public_base()),
    };

    match state.resolver().resolve(&public_url).await {
        Ok(Resolution::Direct { href }) => match share.kind() {
            ShareKind::Preview => redirect_to(&href),
            ShareKind::Download => Html(pages::download_page(&href)).into_response(),
        },
        Ok(Resolution::Fallback { reason }) => {
            debug!(share = %public_url, reason = %reason, "serving manual fallback page");
            Html(pages::fallback_page(&public_url)).into_response()
        }
        Err(err) => {
            warn!(share = %public_url, error = %err, "share resolution failed");
            redirect_to("/")
        }
    }
}

fn redirect_to(location: &str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}
