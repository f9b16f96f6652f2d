use std::collections::BTreeSet;

use axum::{extract::State, Json};
use tracing::debug;

use super::error::ApiResult;
use crate::db::{parse_genres, MovieRepo};
use crate::server::AppState;

/// GET /genres/all
///
/// Distinct genre names across the catalog, sorted. Rows whose genre text
/// does not decode contribute nothing.
pub async fn get_genre_list(State(state): State<AppState>) -> ApiResult<Json<Vec<String>>> {
    let texts = state.stores.movies.genre_texts().await?;
    Ok(Json(distinct_genres(texts.iter().flatten())))
}

fn distinct_genres<'a>(texts: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut names = BTreeSet::new();
    for text in texts {
        match parse_genres(text) {
            Ok(genres) => names.extend(genres.into_iter().map(|g| g.name)),
            Err(e) => debug!("Skipping unreadable genres {:?}: {}", text, e),
        }
    }
    names.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_genres() {
        let texts = vec![
            r#"[{"id": 18, "name": "Drama"}, {"id": 35, "name": "Comedy"}]"#.to_string(),
            r#"[{"id": 18, "name": "Drama"}]"#.to_string(),
            "garbage".to_string(),
            "[]".to_string(),
        ];
        assert_eq!(distinct_genres(texts.iter()), vec!["Comedy", "Drama"]);
    }
}
