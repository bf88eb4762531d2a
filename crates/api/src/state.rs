/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// The pool is internally reference-counted, so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, shared by every concurrent handler.
    pub pool: frases_db::DbPool,
}
