use async_trait::async_trait;

use super::model::*;

#[async_trait]
pub trait MovieRepo: Send + Sync {
    /// One page of the catalog in storage order.
    async fn list_movies(&self, limit: i64, offset: i64) -> DbResult<Vec<MovieRow>>;
    /// The whole catalog in storage order.
    async fn all_movies(&self) -> DbResult<Vec<MovieRow>>;
    /// Movies whose release date falls in `year`, ordered by release date.
    async fn movies_by_year(
        &self,
        year: &str,
        descending: bool,
        limit: i64,
        offset: i64,
    ) -> DbResult<Vec<MovieRow>>;
    /// Every column of the rows with the given internal id.
    async fn get_movie(&self, movie_id: &str) -> DbResult<Vec<RawRow>>;
    /// The raw `genres` text of every movie.
    async fn genre_texts(&self) -> DbResult<Vec<Option<String>>>;
}

#[async_trait]
pub trait RatingRepo: Send + Sync {
    async fn get_ratings(&self, movie_id: &str) -> DbResult<Vec<RawRow>>;
}
