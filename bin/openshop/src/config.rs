//! Client-side context management.
//!
//! Reads/writes `~/.openshop/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A single context — connection to an OpenShop server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    /// Context name (e.g. "staging").
    pub name: String,

    /// Server URL (e.g. "https://shop.example.com").
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub server: String,

    /// Access token sent as `Authorization: Bearer`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token: String,

    /// Refresh token used by `openshop account refresh`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub refresh_token: String,
}

/// Client configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Name of the currently active context.
    #[serde(rename = "current-context", default)]
    pub current_context: String,

    /// List of configured contexts.
    #[serde(default)]
    pub contexts: Vec<Context>,
}

impl ClientConfig {
    /// Default config file path: ~/.openshop/config.toml.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// Load config from disk, or return default if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to disk.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the currently active context, if any.
    pub fn current(&self) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == self.current_context)
    }

    /// Get a mutable reference to a context by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Context> {
        self.contexts.iter_mut().find(|c| c.name == name)
    }

    /// Add or update a context.
    pub fn upsert_context(&mut self, ctx: Context) {
        if let Some(existing) = self.get_mut(&ctx.name) {
            *existing = ctx;
        } else {
            self.contexts.push(ctx);
        }
    }

    /// Remove a context by name. Returns true if it was found.
    pub fn remove_context(&mut self, name: &str) -> bool {
        let len = self.contexts.len();
        self.contexts.retain(|c| c.name != name);
        if self.current_context == name {
            self.current_context = String::new();
        }
        self.contexts.len() < len
    }
}

/// Return the OpenShop config directory (~/.openshop).
fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".openshop")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staging_context() -> Context {
        Context {
            name: "staging".to_string(),
            server: "https://staging.shop.example.com".to_string(),
            token: String::new(),
            refresh_token: String::new(),
        }
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.current_context.is_empty());
        assert!(config.contexts.is_empty());
        assert!(config.current().is_none());
    }

    #[test]
    fn test_roundtrip() {
        let mut config = ClientConfig::default();
        config.current_context = "staging".to_string();
        config.contexts.push(staging_context());

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let back: ClientConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(back.current_context, "staging");
        assert_eq!(back.contexts.len(), 1);
        assert_eq!(back.contexts[0].server, "https://staging.shop.example.com");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = ClientConfig::default();
        config.current_context = "staging".to_string();
        config.contexts.push(Context {
            token: "acc".to_string(),
            refresh_token: "ref".to_string(),
            ..staging_context()
        });
        config.save(&path).unwrap();

        let back = ClientConfig::load(&path).unwrap();
        assert_eq!(back.current().unwrap().token, "acc");
        assert_eq!(back.current().unwrap().refresh_token, "ref");
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert!(config.contexts.is_empty());
    }

    #[test]
    fn test_upsert_and_remove() {
        let mut config = ClientConfig::default();
        config.upsert_context(staging_context());
        config.current_context = "staging".to_string();

        // Upsert with the same name replaces.
        config.upsert_context(Context {
            server: "https://shop.example.com".to_string(),
            ..staging_context()
        });
        assert_eq!(config.contexts.len(), 1);
        assert_eq!(config.contexts[0].server, "https://shop.example.com");

        assert!(config.remove_context("staging"));
        assert!(config.current_context.is_empty());
        assert!(!config.remove_context("staging"));
    }
}
