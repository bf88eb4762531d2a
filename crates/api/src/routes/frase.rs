//! Routes for the `/frases` resource.
//!
//! ```text
//! POST   /frases        -> create
//! GET    /frases        -> list_all
//! GET    /frases/{id}   -> get_by_id
//! PUT    /frases/{id}   -> update
//! DELETE /frases/{id}   -> delete
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::frase;
use crate::state::AppState;

/// Routes mounted at `/frases`. Unmapped paths and methods fall through
/// to axum's defaults.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(frase::list_all).post(frase::create))
        .route(
            "/{id}",
            get(frase::get_by_id)
                .put(frase::update)
                .delete(frase::delete),
        )
}
