pub mod model;
pub mod repo;
pub mod sqlite;

pub use model::*;
pub use repo::*;
pub use sqlite::SqliteStore;

use std::sync::Arc;

use crate::config::DatabaseConfig;

/// The process-wide set of store handles, opened once at startup and
/// closed once after the server stops.
#[derive(Clone)]
pub struct Stores {
    pub movies: Arc<SqliteStore>,
    pub ratings: Arc<SqliteStore>,
}

impl Stores {
    pub async fn open(config: &DatabaseConfig) -> Self {
        let movies = SqliteStore::open_readonly("movies", &config.movies).await;
        let ratings = SqliteStore::open_readonly("ratings", &config.ratings).await;
        Self {
            movies: Arc::new(movies),
            ratings: Arc::new(ratings),
        }
    }

    pub async fn close(&self) {
        self.movies.close().await;
        self.ratings.close().await;
    }
}
