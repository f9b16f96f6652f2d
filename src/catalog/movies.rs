use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::{debug, warn};

use super::error::{ApiError, ApiResult};
use super::pagination::Page;
use super::types::{MoviePage, MovieSummary, MovieYearEntry};
use crate::db::{parse_genres, Genre, MovieRepo, MovieRow, RawRow};
use crate::server::AppState;
use crate::util::QueryParams;

/// GET /movies/all?page=N
pub async fn get_all_movies(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> ApiResult<Json<MoviePage>> {
    let page = Page::new(params.page());
    let rows = state
        .stores
        .movies
        .list_movies(page.limit(), page.offset())
        .await?;

    if rows.is_empty() {
        return Err(ApiError::NoResults("No movies found"));
    }

    let results = rows
        .into_iter()
        .map(|row| {
            let genres = decode_genres(&row).unwrap_or_else(|e| {
                warn!(imdb_id = ?row.imdb_id, "Unreadable genres column: {}", e);
                Vec::new()
            });
            MovieSummary::new(row, genres)
        })
        .collect();

    Ok(Json(MoviePage::new(page.number, results)))
}

/// GET /movies/year/:year?order=asc|desc&page=N
pub async fn get_movies_by_year(
    State(state): State<AppState>,
    Path(year): Path<String>,
    Query(params): Query<QueryParams>,
) -> ApiResult<Json<Vec<MovieYearEntry>>> {
    let page = Page::new(params.page());
    let rows = state
        .stores
        .movies
        .movies_by_year(&year, params.descending(), page.limit(), page.offset())
        .await?;

    if rows.is_empty() {
        return Err(ApiError::NotFound("No movies found for the specified year"));
    }

    Ok(Json(rows.into_iter().map(MovieYearEntry::from).collect()))
}

/// GET /movies/genre?genre=X&page=N
///
/// Genres are stored as serialized text, so the whole catalog is fetched
/// and filtered here before the page is cut.
pub async fn get_movies_by_genre(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> ApiResult<Json<MoviePage>> {
    let genre = params
        .non_empty("genre")
        .ok_or(ApiError::BadRequest("Genre query parameter is required"))?;
    let page = Page::new(params.page());

    let rows = state.stores.movies.all_movies().await?;
    let results: Vec<MovieSummary> = page
        .apply(filter_by_genre(rows, genre))
        .into_iter()
        .map(|(row, genres)| MovieSummary::new(row, genres))
        .collect();

    if results.is_empty() {
        return Err(ApiError::NoResults("No movies found for the specified genre"));
    }

    Ok(Json(MoviePage::new(page.number, results)))
}

/// GET /movies/:movieId
pub async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> ApiResult<Json<Vec<RawRow>>> {
    let rows = state.stores.movies.get_movie(&movie_id).await?;

    if rows.is_empty() {
        return Err(ApiError::NotFound("Movie not found"));
    }

    Ok(Json(rows))
}

/// Decode a row's genre text. A NULL column is an empty list.
fn decode_genres(row: &MovieRow) -> Result<Vec<Genre>, serde_json::Error> {
    row.genres
        .as_deref()
        .map(parse_genres)
        .transpose()
        .map(Option::unwrap_or_default)
}

/// Keep the rows carrying `genre` (compared case-insensitively), paired
/// with their decoded genre lists. Rows whose genre text does not decode
/// never match.
pub fn filter_by_genre(rows: Vec<MovieRow>, genre: &str) -> Vec<(MovieRow, Vec<Genre>)> {
    let wanted = genre.to_lowercase();
    rows.into_iter()
        .filter_map(|row| {
            let genres = match decode_genres(&row) {
                Ok(genres) => genres,
                Err(e) => {
                    debug!(imdb_id = ?row.imdb_id, "Skipping row with unreadable genres: {}", e);
                    return None;
                }
            };
            let matched = genres.iter().any(|g| g.name.to_lowercase() == wanted);
            matched.then_some((row, genres))
        })
        .collect()
}
