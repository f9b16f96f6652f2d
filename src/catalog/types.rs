use serde::{Deserialize, Serialize};

use crate::db::{Genre, MovieRow};
use crate::util::format_currency;

/// A movie as shown by `/movies/all` and `/movies/genre`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieSummary {
    pub imdb_id: Option<String>,
    pub title: Option<String>,
    pub genres: Vec<Genre>,
    pub release_date: Option<String>,
    pub budget: String,
}

impl MovieSummary {
    pub fn new(row: MovieRow, genres: Vec<Genre>) -> Self {
        Self {
            imdb_id: row.imdb_id,
            title: row.title,
            genres,
            release_date: row.release_date,
            budget: format_budget(row.budget),
        }
    }
}

/// A movie as shown by `/movies/year/:year`. Genres stay in their stored
/// text form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieYearEntry {
    pub imdb_id: Option<String>,
    pub title: Option<String>,
    pub genres: Option<String>,
    pub release_date: Option<String>,
    pub budget: String,
}

impl From<MovieRow> for MovieYearEntry {
    fn from(row: MovieRow) -> Self {
        Self {
            imdb_id: row.imdb_id,
            title: row.title,
            genres: row.genres,
            release_date: row.release_date,
            budget: format_budget(row.budget),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoviePage {
    pub page: i64,
    pub count: usize,
    pub results: Vec<MovieSummary>,
}

impl MoviePage {
    pub fn new(page: i64, results: Vec<MovieSummary>) -> Self {
        Self {
            page,
            count: results.len(),
            results,
        }
    }
}

fn format_budget(budget: Option<f64>) -> String {
    format_currency(budget.unwrap_or(0.0))
}
