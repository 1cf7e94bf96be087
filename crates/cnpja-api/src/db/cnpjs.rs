//! Persistence operations for generated identifiers.
//!
//! All functions take a `&PgPool` and operate on the `cnpjs` table, keyed
//! by the canonical 14-character string. The UNIQUE constraint on `cnpj`
//! is the authoritative uniqueness guarantee; the `exists` pre-check only
//! shortens the common path.

use sqlx::PgPool;

/// Whether a canonical identifier is already recorded.
pub async fn exists(pool: &PgPool, cnpj: &str) -> Result<bool, sqlx::Error> {
    let (found,): (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM cnpjs WHERE cnpj = $1)")
            .bind(cnpj)
            .fetch_one(pool)
            .await?;
    Ok(found)
}

/// Record a canonical identifier.
///
/// Fails with a unique-violation database error if the value was inserted
/// concurrently; callers treat that as a collision and draw again.
pub async fn insert(pool: &PgPool, cnpj: &str) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO cnpjs (cnpj) VALUES ($1)")
        .bind(cnpj)
        .execute(pool)
        .await?;
    Ok(())
}
