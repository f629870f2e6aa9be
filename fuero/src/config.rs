use serde::Deserialize;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub embeddings: EmbeddingsConfig,
    pub portal: PortalConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingsConfig {
    pub model: String,
    pub dimensions: usize,
    pub batch_size: usize,
}

/// Public jurisprudence portal the scraper targets.
#[derive(Debug, Clone, Deserialize)]
pub struct PortalConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("FUERO_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("FUERO_PORT", 3000),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| "file:fuero.db".to_string()),
            },
            embeddings: EmbeddingsConfig {
                model: env::var("EMBEDDING_MODEL")
                    .unwrap_or_else(|_| "multilingual-e5-small".to_string()),
                dimensions: parse_env_or("EMBEDDING_DIMENSIONS", 384),
                batch_size: parse_env_or("EMBEDDING_BATCH_SIZE", 32),
            },
            portal: PortalConfig {
                base_url: env::var("PORTAL_BASE_URL")
                    .unwrap_or_else(|_| "http://juriscivil.jusneuquen.gov.ar/".to_string()),
                user_agent: env::var("PORTAL_USER_AGENT")
                    .unwrap_or_else(|_| "Mozilla/5.0".to_string()),
                timeout_secs: parse_env_or("PORTAL_TIMEOUT_SECS", 10),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
