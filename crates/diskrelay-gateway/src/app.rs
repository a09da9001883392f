use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{home_handler, ping_handler, share_handler, share_sub_path_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    /// Builds the relay router.
    ///
    /// Requests that match no route, or a route with the wrong method,
    /// are redirected to the site root.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/ping", get(ping_handler).fallback(home_handler))
            .route(
                "/{kind}/{token}",
                get(share_handler).fallback(home_handler),
            )
            .route(
                "/{kind}/{token}/{*sub_path}",
                get(share_sub_path_handler).fallback(home_handler),
            )
            .fallback(home_handler)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
