//! Repository for the `frases` table.

use frases_core::types::DbId;
use sqlx::PgPool;

use crate::models::frase::{CreateFrase, Frase, FraseRow};

/// Column list shared by the joined SELECTs.
const JOINED_COLUMNS: &str = "f.id, f.texto, f.marca_tiempo, f.descripcion, \
     p.id AS personaje_id, p.nombre AS personaje_nombre, p.apellido AS personaje_apellido, \
     c.id AS capitulo_id, c.titulo AS capitulo_titulo";

/// INNER JOIN on personajes: a frase whose personaje no longer exists is
/// never served. LEFT JOIN on capitulos: frases without a capitulo are kept.
const JOINS: &str = "FROM frases f \
     JOIN personajes p ON f.personaje_id = p.id \
     LEFT JOIN capitulos c ON f.capitulo_id = c.id";

/// Provides CRUD operations for frases.
pub struct FraseRepo;

impl FraseRepo {
    /// Insert a new frase, returning the generated id.
    pub async fn create(pool: &PgPool, input: &CreateFrase) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO frases (texto, marca_tiempo, descripcion, personaje_id, capitulo_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&input.texto)
        .bind(&input.marca_tiempo)
        .bind(&input.descripcion)
        .bind(input.personaje_id)
        .bind(input.capitulo_id)
        .fetch_one(pool)
        .await
    }

    /// List every frase joined with its personaje and capitulo.
    ///
    /// No ORDER BY: ordering is database-default and callers must not
    /// depend on it.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Frase>, sqlx::Error> {
        let query = format!("SELECT {JOINED_COLUMNS} {JOINS}");
        let rows = sqlx::query_as::<_, FraseRow>(&query).fetch_all(pool).await?;
        Ok(rows.into_iter().map(Frase::from).collect())
    }

    /// Find one frase by id, with the same join policy as [`Self::list_all`].
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Frase>, sqlx::Error> {
        let query = format!("SELECT {JOINED_COLUMNS} {JOINS} WHERE f.id = $1");
        let row = sqlx::query_as::<_, FraseRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Frase::from))
    }

    /// Overwrite all mutable columns of the frase with the given id.
    ///
    /// Full-replacement semantics: a field the caller left unset in `input`
    /// is written as NULL. Returns `false` if no row matched.
    pub async fn update(pool: &PgPool, id: DbId, input: &CreateFrase) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE frases
             SET texto = $2, marca_tiempo = $3, descripcion = $4,
                 personaje_id = $5, capitulo_id = $6
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.texto)
        .bind(&input.marca_tiempo)
        .bind(&input.descripcion)
        .bind(input.personaje_id)
        .bind(input.capitulo_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete the frase with the given id. Returns `false` if no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM frases WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
