use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use frases_api::router::build_app_router;
use frases_api::state::AppState;

/// Build the full application router, using the given database pool.
///
/// This goes through `build_app_router` so integration tests exercise the
/// same middleware stack (CORS, tracing) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool })
}

async fn send(app: Router, method: Method, uri: &str, body: Body, json: bool) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if json {
        builder = builder.header(CONTENT_TYPE, "application/json");
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty(), false).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Body::from(body.to_string()), true).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Body::from(body.to_string()), true).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, Body::empty(), false).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Insert a personaje directly; the API itself only reads them.
pub async fn seed_personaje(pool: &PgPool, nombre: &str, apellido: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO personajes (nombre, apellido) VALUES ($1, $2) RETURNING id")
        .bind(nombre)
        .bind(apellido)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_frases(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM frases")
        .fetch_one(pool)
        .await
        .unwrap()
}
