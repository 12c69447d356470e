/// Configuration for the publish-flow client core
///
/// Loads configuration from environment variables with sensible defaults.
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub publish: PublishDefaults,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// Bounds every request, the binary upload included
    pub timeout_secs: u64,
}

/// Wire-level defaults applied when the flow has not collected a value
#[derive(Clone, Debug, Deserialize)]
pub struct PublishDefaults {
    pub language: String,
    /// Category used when no genre has been picked yet
    pub fallback_genre: String,
}

impl Default for PublishDefaults {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            fallback_genre: "Other".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Config {
            api: ApiConfig {
                base_url: std::env::var("VIDORA_API_URL")
                    .unwrap_or_else(|_| "https://api.vidora.dev".to_string()),
                timeout_secs: std::env::var("VIDORA_API_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "120".to_string())
                    .parse()
                    .unwrap_or(120),
            },
            publish: PublishDefaults {
                language: std::env::var("VIDORA_DEFAULT_LANGUAGE")
                    .unwrap_or_else(|_| "en".to_string()),
                fallback_genre: std::env::var("VIDORA_FALLBACK_GENRE")
                    .unwrap_or_else(|_| "Other".to_string()),
            },
        })
    }
}
