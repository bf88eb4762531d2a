//! Handlers for the `/frases` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use frases_core::error::CoreError;
use frases_core::types::DbId;
use frases_db::models::frase::{CreateFrase, Frase};
use frases_db::repositories::FraseRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

const REQUIRED_FIELDS: &str = "Los campos texto y personaje_id son obligatorios.";

/// Raw request body for create and update.
///
/// Every field is optional so that a missing required field becomes a 400
/// with a message body from [`FraseBody::validate`], not a deserialization
/// rejection from the extractor.
#[derive(Debug, Deserialize)]
pub struct FraseBody {
    pub texto: Option<String>,
    pub marca_tiempo: Option<String>,
    pub descripcion: Option<String>,
    pub personaje_id: Option<DbId>,
    pub capitulo_id: Option<DbId>,
}

impl FraseBody {
    /// Check required fields and convert into the repository DTO.
    ///
    /// An empty `texto` counts as missing. Runs before any store access;
    /// a validation failure never touches the pool.
    fn validate(self) -> Result<CreateFrase, AppError> {
        let texto = match self.texto {
            Some(t) if !t.is_empty() => t,
            _ => return Err(CoreError::Validation(REQUIRED_FIELDS.into()).into()),
        };
        let personaje_id = self
            .personaje_id
            .ok_or_else(|| CoreError::Validation(REQUIRED_FIELDS.into()))?;
        Ok(CreateFrase {
            texto,
            marca_tiempo: self.marca_tiempo,
            descripcion: self.descripcion,
            personaje_id,
            capitulo_id: self.capitulo_id,
        })
    }
}

/// POST /frases
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<FraseBody>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let input = body.validate()?;
    let id = FraseRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_id("Frase insertada correctamente", id)),
    ))
}

/// GET /frases
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Frase>>> {
    let frases = FraseRepo::list_all(&state.pool).await?;
    Ok(Json(frases))
}

/// GET /frases/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Frase>> {
    let frase = FraseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Frase", id }))?;
    Ok(Json(frase))
}

/// PUT /frases/{id}
///
/// Full replacement: every mutable column is written from the body, so a
/// field omitted here becomes NULL rather than keeping its old value.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<FraseBody>,
) -> AppResult<Json<MessageResponse>> {
    let input = body.validate()?;
    let updated = FraseRepo::update(&state.pool, id, &input).await?;
    if updated {
        Ok(Json(MessageResponse::new("Frase actualizada correctamente")))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Frase", id }))
    }
}

/// DELETE /frases/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = FraseRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(MessageResponse::new("Frase eliminada correctamente")))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Frase", id }))
    }
}
