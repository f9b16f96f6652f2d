use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub tlscert: Option<String>,
    #[serde(default)]
    pub tlskey: Option<String>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: None,
            port: default_port(),
            tlscert: None,
            tlskey: None,
        }
    }
}

/// Locations of the two read-only SQLite files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_movies_db")]
    pub movies: String,
    #[serde(default = "default_ratings_db")]
    pub ratings: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            movies: default_movies_db(),
            ratings: default_ratings_db(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_movies_db() -> String {
    "./movies_api/db/movies.db".to_string()
}

fn default_ratings_db() -> String {
    "./movies_api/db/ratings.db".to_string()
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_string(), e))?;

        Ok(config)
    }

    /// Load from `path` when given, otherwise start from defaults. The
    /// `PORT` environment variable always wins over the configured port.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_port(std::env::var("PORT").ok().as_deref())?;
        Ok(config)
    }

    fn apply_port(&mut self, port: Option<&str>) -> Result<(), ConfigError> {
        if let Some(port) = port.map(str::trim).filter(|p| !p.is_empty()) {
            self.listen.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidEnv("PORT", port.to_string()))?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
    #[error("Invalid value for environment variable {0}: {1:?}")]
    InvalidEnv(&'static str, String),
}
