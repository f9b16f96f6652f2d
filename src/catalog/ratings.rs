use axum::{
    extract::{Path, State},
    Json,
};

use super::error::{ApiError, ApiResult};
use crate::db::{RatingRepo, RawRow};
use crate::server::AppState;

/// GET /ratings/:movieId
pub async fn get_ratings(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> ApiResult<Json<Vec<RawRow>>> {
    let rows = state.stores.ratings.get_ratings(&movie_id).await?;

    if rows.is_empty() {
        return Err(ApiError::NotFound("No ratings found for the specified movie"));
    }

    Ok(Json(rows))
}
