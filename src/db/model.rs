use serde::{Deserialize, Serialize};

/// Projection of the `movies` table used by the listing endpoints.
///
/// The schema is owned elsewhere, so every column is nullable here.
/// `budget` is selected as `CAST(budget AS REAL)` so integer and real
/// storage classes decode the same way.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MovieRow {
    pub imdb_id: Option<String>,
    pub title: Option<String>,
    pub genres: Option<String>,
    pub release_date: Option<String>,
    pub budget: Option<f64>,
}

/// One entry of the serialized genre list stored in `movies.genres`.
///
/// Only `name` is interpreted; other keys (usually `id`) are carried through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Decode the text of a `genres` column.
pub fn parse_genres(text: &str) -> Result<Vec<Genre>, serde_json::Error> {
    serde_json::from_str(text)
}

/// A row of a table whose schema this service does not interpret,
/// as column name to value in select order.
pub type RawRow = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Database unavailable: {0}")]
    Unavailable(String),
}

pub type DbResult<T> = Result<T, DbError>;
