//! Frase entity model and DTOs.
//!
//! Field names stay in Spanish to match both the database columns and the
//! JSON wire format, so no serde renames or SQL aliases are needed beyond
//! the join prefixes.

use frases_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The speaker of a frase. Read-only from this service's perspective.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Personaje {
    pub id: DbId,
    pub nombre: String,
    pub apellido: String,
}

/// The episode a frase belongs to. Read-only, optional on a frase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Capitulo {
    pub id: DbId,
    pub titulo: String,
}

/// A frase as served to clients: nested personaje, nullable capitulo.
#[derive(Debug, Clone, Serialize)]
pub struct Frase {
    pub id: DbId,
    pub texto: String,
    pub marca_tiempo: Option<String>,
    pub descripcion: Option<String>,
    pub personaje: Personaje,
    /// `None` exactly when the row's `capitulo_id` is NULL; serializes as
    /// `null`, never as an empty object.
    pub capitulo: Option<Capitulo>,
}

/// Validated input for create and update.
///
/// Required fields are non-optional on the type: the handler validates the
/// raw payload before building one of these, so the repository never sees
/// an invalid input. Update is full-replacement — every mutable column is
/// written from this struct.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFrase {
    pub texto: String,
    pub marca_tiempo: Option<String>,
    pub descripcion: Option<String>,
    pub personaje_id: DbId,
    pub capitulo_id: Option<DbId>,
}

/// Flat joined row as produced by the SELECT queries in the repository.
#[derive(Debug, FromRow)]
pub struct FraseRow {
    pub id: DbId,
    pub texto: String,
    pub marca_tiempo: Option<String>,
    pub descripcion: Option<String>,
    pub personaje_id: DbId,
    pub personaje_nombre: String,
    pub personaje_apellido: String,
    pub capitulo_id: Option<DbId>,
    pub capitulo_titulo: Option<String>,
}

impl From<FraseRow> for Frase {
    fn from(row: FraseRow) -> Self {
        // LEFT JOIN: both capitulo columns are NULL together or not at all.
        let capitulo = match (row.capitulo_id, row.capitulo_titulo) {
            (Some(id), Some(titulo)) => Some(Capitulo { id, titulo }),
            _ => None,
        };
        Frase {
            id: row.id,
            texto: row.texto,
            marca_tiempo: row.marca_tiempo,
            descripcion: row.descripcion,
            personaje: Personaje {
                id: row.personaje_id,
                nombre: row.personaje_nombre,
                apellido: row.personaje_apellido,
            },
            capitulo,
        }
    }
}
