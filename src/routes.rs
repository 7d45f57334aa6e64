use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new().route("/translate-voice", post(handlers::translate_voice))
}
