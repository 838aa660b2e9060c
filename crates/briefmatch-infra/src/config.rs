//! Global configuration loader for briefmatch.
//!
//! Reads `config.toml` from the data directory (`~/.briefmatch/` in production)
//! and deserializes it into [`GlobalConfig`]. Falls back to sensible defaults
//! when the file is missing or malformed.

use std::path::{Path, PathBuf};

use briefmatch_types::config::{EmbeddingConfig, GlobalConfig};
use secrecy::SecretString;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "BRIEFMATCH_DATA_DIR";

/// Resolve the data directory.
///
/// `BRIEFMATCH_DATA_DIR` wins; otherwise `~/.briefmatch`, or `./.briefmatch`
/// when no home directory is known.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".briefmatch");
    }

    PathBuf::from(".briefmatch")
}

/// Load global configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GlobalConfig::default()
        }
    }
}

/// Read the provider token from the environment variable named in config.
///
/// An unset or blank variable yields `None`; the provider is then called
/// without an `Authorization` header.
pub fn resolve_api_key(config: &EmbeddingConfig) -> Option<SecretString> {
    match std::env::var(&config.api_key_env) {
        Ok(val) if !val.trim().is_empty() => Some(SecretString::from(val)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_global_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.embedding.dimension, 384);
        assert_eq!(config.embedding.model, "BAAI/bge-small-en-v1.5");
        assert_eq!(config.server.port, 3000);
    }

    #[tokio::test]
    async fn load_global_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(
            &config_path,
            r#"
[embedding]
endpoint = "http://localhost:9000/models"
timeout_secs = 3

[server]
port = 8080
"#,
        )
        .await
        .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.embedding.endpoint, "http://localhost:9000/models");
        assert_eq!(config.embedding.timeout_secs, 3);
        assert_eq!(config.embedding.dimension, 384);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[tokio::test]
    async fn load_global_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.embedding.timeout_secs, 10);
    }

    #[test]
    fn resolve_api_key_reads_named_variable() {
        let config = EmbeddingConfig {
            api_key_env: "BRIEFMATCH_TEST_KEY_PRESENT".to_string(),
            ..Default::default()
        };
        // SAFETY: the variable name is unique to this test.
        unsafe {
            std::env::set_var("BRIEFMATCH_TEST_KEY_PRESENT", "hf_secret");
        }
        let key = resolve_api_key(&config).unwrap();
        assert_eq!(key.expose_secret(), "hf_secret");
        unsafe {
            std::env::remove_var("BRIEFMATCH_TEST_KEY_PRESENT");
        }
    }

    #[test]
    fn resolve_api_key_blank_or_unset_is_none() {
        let config = EmbeddingConfig {
            api_key_env: "BRIEFMATCH_TEST_KEY_BLANK".to_string(),
            ..Default::default()
        };
        assert!(resolve_api_key(&config).is_none());
        // SAFETY: the variable name is unique to this test.
        unsafe {
            std::env::set_var("BRIEFMATCH_TEST_KEY_BLANK", "  ");
        }
        assert!(resolve_api_key(&config).is_none());
        unsafe {
            std::env::remove_var("BRIEFMATCH_TEST_KEY_BLANK");
        }
    }
}
