//! Plain-text greeting at the service root.

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

async fn greeting() -> &'static str {
    "API de Los Simpson funcionando. ¡D'oh!"
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(greeting))
}
