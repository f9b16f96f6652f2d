use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::{Column, Row, TypeInfo, ValueRef};
use tracing::{error, info};

use super::model::*;
use super::repo::*;

const MOVIE_COLUMNS: &str =
    "imdb_id, title, genres, release_date, CAST(budget AS REAL) AS budget";

enum Connection {
    Open(SqlitePool),
    Failed(String),
}

/// A read-only SQLite file.
///
/// Opening never fails hard: if the file cannot be opened the store stays
/// in a failed state and every query reports the open error.
pub struct SqliteStore {
    name: &'static str,
    conn: Connection,
}

impl SqliteStore {
    pub async fn open_readonly(name: &'static str, db_path: impl AsRef<Path>) -> Self {
        let db_path = db_path.as_ref();
        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .read_only(true)
            .create_if_missing(false);

        let conn = match SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
        {
            Ok(pool) => {
                info!("Opened {} database at {}", name, db_path.display());
                Connection::Open(pool)
            }
            Err(e) => {
                error!("Error opening {} database at {}: {}", name, db_path.display(), e);
                Connection::Failed(e.to_string())
            }
        };

        Self { name, conn }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.conn, Connection::Open(_))
    }

    fn pool(&self) -> DbResult<&SqlitePool> {
        match &self.conn {
            Connection::Open(pool) => Ok(pool),
            Connection::Failed(reason) => Err(DbError::Unavailable(reason.clone())),
        }
    }

    pub async fn close(&self) {
        if let Connection::Open(pool) = &self.conn {
            pool.close().await;
            info!("Closed {} database", self.name);
        }
    }
}

#[async_trait]
impl MovieRepo for SqliteStore {
    async fn list_movies(&self, limit: i64, offset: i64) -> DbResult<Vec<MovieRow>> {
        let sql = format!("SELECT {} FROM movies LIMIT ? OFFSET ?", MOVIE_COLUMNS);
        let rows = sqlx::query_as::<_, MovieRow>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool()?)
            .await?;
        Ok(rows)
    }

    async fn all_movies(&self) -> DbResult<Vec<MovieRow>> {
        let sql = format!("SELECT {} FROM movies", MOVIE_COLUMNS);
        let rows = sqlx::query_as::<_, MovieRow>(&sql)
            .fetch_all(self.pool()?)
            .await?;
        Ok(rows)
    }

    async fn movies_by_year(
        &self,
        year: &str,
        descending: bool,
        limit: i64,
        offset: i64,
    ) -> DbResult<Vec<MovieRow>> {
        let order = if descending { "DESC" } else { "ASC" };
        let sql = format!(
            "SELECT {} FROM movies
             WHERE strftime('%Y', release_date) = ?
             ORDER BY release_date {}
             LIMIT ? OFFSET ?",
            MOVIE_COLUMNS, order
        );
        let rows = sqlx::query_as::<_, MovieRow>(&sql)
            .bind(year)
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool()?)
            .await?;
        Ok(rows)
    }

    async fn get_movie(&self, movie_id: &str) -> DbResult<Vec<RawRow>> {
        let rows = sqlx::query("SELECT * FROM movies WHERE movieId = ?")
            .bind(movie_id)
            .fetch_all(self.pool()?)
            .await?;
        Ok(rows.iter().map(raw_row).collect())
    }

    async fn genre_texts(&self) -> DbResult<Vec<Option<String>>> {
        let texts = sqlx::query_scalar::<_, Option<String>>("SELECT genres FROM movies")
            .fetch_all(self.pool()?)
            .await?;
        Ok(texts)
    }
}

#[async_trait]
impl RatingRepo for SqliteStore {
    async fn get_ratings(&self, movie_id: &str) -> DbResult<Vec<RawRow>> {
        let rows = sqlx::query("SELECT * FROM ratings WHERE movieId = ?")
            .bind(movie_id)
            .fetch_all(self.pool()?)
            .await?;
        Ok(rows.iter().map(raw_row).collect())
    }
}

fn raw_row(row: &SqliteRow) -> RawRow {
    row.columns()
        .iter()
        .map(|col| (col.name().to_string(), column_value(row, col.ordinal())))
        .collect()
}

/// Map a column to JSON by its storage class.
fn column_value(row: &SqliteRow, index: usize) -> Value {
    let class = match row.try_get_raw(index) {
        Ok(raw) if !raw.is_null() => raw.type_info().name().to_string(),
        _ => return Value::Null,
    };

    let value = match class.as_str() {
        "INTEGER" => row.try_get::<i64, _>(index).map(Value::from),
        "REAL" => row.try_get::<f64, _>(index).map(Value::from),
        "BLOB" => row.try_get::<Vec<u8>, _>(index).map(Value::from),
        _ => row.try_get::<String, _>(index).map(Value::String),
    };

    value.unwrap_or(Value::Null)
}
