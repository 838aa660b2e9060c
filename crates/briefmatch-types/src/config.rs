//! Global configuration types for briefmatch.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls the
//! embedding provider and the API server bind address.

use serde::{Deserialize, Serialize};

/// Embedding dimensionality of the reference model (bge-small-en-v1.5).
pub const DEFAULT_EMBEDDING_DIMENSION: usize = 384;

/// Top-level configuration.
///
/// Loaded from `~/.briefmatch/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub embedding: EmbeddingConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

/// Remote embedding provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Base URL of the inference API. The model id is appended as a path.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Vector length every stored and computed embedding must have.
    #[serde(default = "default_dimension")]
    pub dimension: usize,

    /// Single-attempt request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Name of the environment variable holding the API token.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_endpoint() -> String {
    "https://api-inference.huggingface.co/models".to_string()
}

fn default_model() -> String {
    "BAAI/bge-small-en-v1.5".to_string()
}

fn default_dimension() -> usize {
    DEFAULT_EMBEDDING_DIMENSION
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_api_key_env() -> String {
    "HUGGINGFACE_API_KEY".to_string()
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            dimension: default_dimension(),
            timeout_secs: default_timeout_secs(),
            api_key_env: default_api_key_env(),
        }
    }
}

/// REST API bind address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}
