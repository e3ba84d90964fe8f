use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Directory of `<sheet-id>.md` files replacing the built-in content. `None` uses built-ins only.
    pub content_dir: Option<String>,
    /// Address to serve MCP over TCP (e.g. "127.0.0.1:7300"). `None` serves on stdio.
    pub tcp_listen_addr: Option<String>,
}

impl Config {
    /// Optional:
    /// - `CHEATSHEETS_CONTENT_DIR`: directory with cheatsheet markdown overrides
    /// - `MCP_TCP_LISTEN_ADDR`: serve on TCP instead of stdio
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let content_dir = lookup("CHEATSHEETS_CONTENT_DIR").filter(|v| !v.trim().is_empty());

        if let Some(dir) = &content_dir {
            if !Path::new(dir).is_dir() {
                return Err(AppError::Config(format!(
                    "CHEATSHEETS_CONTENT_DIR is not a directory: {dir}"
                )));
            }
        }

        Ok(Self {
            content_dir,
            tcp_listen_addr: lookup("MCP_TCP_LISTEN_ADDR").filter(|v| !v.trim().is_empty()),
        })
    }

    pub fn content_dir(&self) -> Option<PathBuf> {
        self.content_dir.as_deref().map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_to_builtin_content_on_stdio() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.content_dir().is_none());
        assert!(config.tcp_listen_addr.is_none());
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = Config::from_lookup(lookup_from(&[
            ("CHEATSHEETS_CONTENT_DIR", "  "),
            ("MCP_TCP_LISTEN_ADDR", ""),
        ]))
        .unwrap();
        assert!(config.content_dir.is_none());
        assert!(config.tcp_listen_addr.is_none());
    }

    #[test]
    fn content_dir_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().to_string_lossy().to_string();
        let config = Config::from_lookup(lookup_from(&[
            ("CHEATSHEETS_CONTENT_DIR", existing.as_str()),
            ("MCP_TCP_LISTEN_ADDR", "127.0.0.1:7300"),
        ]))
        .unwrap();
        assert_eq!(config.content_dir(), Some(dir.path().to_path_buf()));
        assert_eq!(config.tcp_listen_addr.as_deref(), Some("127.0.0.1:7300"));

        let missing = dir.path().join("missing").to_string_lossy().to_string();
        let err = Config::from_lookup(lookup_from(&[("CHEATSHEETS_CONTENT_DIR", missing.as_str())]))
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
