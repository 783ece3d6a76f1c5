use anyhow::Result;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub llm: LLMConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LLMConfig {
    pub google_api_key: String,
    pub model: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl LLMConfig {
    /// The configured Gemini key, or None when unset/blank.
    pub fn api_key(&self) -> Option<&str> {
        let key = self.google_api_key.trim();
        if key.is_empty() {
            None
        } else {
            Some(key)
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                cors_allowed_origins: env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:3000,http://localhost:5173".to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .collect(),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?,
                max_connections: env::var("DB_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()?,
                min_connections: env::var("DB_MIN_CONNECTIONS")
                    .unwrap_or_else(|_| "1".to_string())
                    .parse()?,
            },
            llm: LLMConfig {
                google_api_key: env::var("GEMINI_API_KEY")
                    .or_else(|_| env::var("GOOGLE_API_KEY"))
                    .unwrap_or_default(),
                model: env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
                max_output_tokens: env::var("GEMINI_MAX_OUTPUT_TOKENS")
                    .unwrap_or_else(|_| "2048".to_string())
                    .parse()?,
                temperature: env::var("GEMINI_TEMPERATURE")
                    .unwrap_or_else(|_| "0.2".to_string())
                    .parse()?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_llm_config(key: &str) -> LLMConfig {
        LLMConfig {
            google_api_key: key.to_string(),
            model: "gemini-1.5-flash".to_string(),
            max_output_tokens: 2048,
            temperature: 0.2,
        }
    }

    #[test]
    fn api_key_none_when_blank() {
        assert_eq!(test_llm_config("").api_key(), None);
        assert_eq!(test_llm_config("   ").api_key(), None);
    }

    #[test]
    fn api_key_trims_whitespace() {
        assert_eq!(test_llm_config(" secret ").api_key(), Some("secret"));
    }
}
