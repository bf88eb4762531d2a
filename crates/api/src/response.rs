//! Mutation response envelope.
//!
//! Create, update and delete all answer with `{ "message": ... }`, create
//! additionally carries the generated `id`. Use [`MessageResponse`] instead
//! of ad-hoc `serde_json::json!` so the envelope stays consistent.

use frases_core::types::DbId;
use serde::Serialize;

/// Standard `{ "message": string, "id"?: number }` envelope.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message, id: None }
    }

    pub fn with_id(message: &'static str, id: DbId) -> Self {
        Self {
            message,
            id: Some(id),
        }
    }
}
