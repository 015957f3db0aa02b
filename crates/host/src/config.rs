//! Configuration system for slide-deck
//!
//! Reads config from ~/.config/slide-deck/config.toml, then applies
//! `SLIDE_DECK_*` environment overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Where the page, the wasm bundle and the deck files live
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Served as-is at `/`
    pub root: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("site"),
        }
    }
}

/// Full application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
}

impl Config {
    /// Load configuration from default path, falling back to defaults,
    /// then apply environment overrides
    pub fn load() -> Self {
        let path = Self::default_config_path();
        let mut config = match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                if path.exists() {
                    tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable config");
                }
                Self::default()
            }
        };
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Get default config path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("slide-deck")
            .join("config.toml")
    }

    /// Load from specific path
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Apply `SLIDE_DECK_BIND`, `SLIDE_DECK_PORT` and `SLIDE_DECK_ROOT`
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(bind) = var("SLIDE_DECK_BIND") {
            self.server.bind = bind;
        }
        if let Some(port) = var("SLIDE_DECK_PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!(value = %port, "SLIDE_DECK_PORT is not a port number"),
            }
        }
        if let Some(root) = var("SLIDE_DECK_ROOT") {
            self.site.root = PathBuf::from(root);
        }
    }

    /// Create default config file if it doesn't exist
    pub fn create_default_if_missing() {
        let path = Self::default_config_path();
        if !path.exists() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let default_config = r#"# slide-deck Configuration

[server]
bind = "127.0.0.1"
port = 8080

[site]
root = "site"
"#;
            let _ = std::fs::write(&path, default_config);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.site.root, PathBuf::from("site"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 9090\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.site.root, PathBuf::from("site"));
    }

    #[test]
    fn test_bad_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();
        assert!(Config::load_from_path(&path).is_err());
    }

    #[test]
    fn test_stale_decks_dir_key_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[site]\nroot = \"talks\"\ndecks_dir = \"decks\"\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.site.root, PathBuf::from("talks"));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_env(|key| match key {
            "SLIDE_DECK_PORT" => Some("3000".into()),
            "SLIDE_DECK_ROOT" => Some("/srv/talks".into()),
            _ => None,
        });
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.site.root, PathBuf::from("/srv/talks"));
    }

    #[test]
    fn test_env_bad_port_ignored() {
        let mut config = Config::default();
        config.apply_env(|key| (key == "SLIDE_DECK_PORT").then(|| "http".to_string()));
        assert_eq!(config.server.port, 8080);
    }
}
