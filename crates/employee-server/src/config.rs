// File: src/config.rs
// Purpose: Configuration parsing from employee.toml with environment overrides

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub cors: CorsConfig,

    #[serde(default)]
    pub client: ClientConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// `sqlite:...` or `postgres://...`
    #[serde(default = "default_database_url")]
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// Cross-origin configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CorsConfig {
    /// Allowed origins; empty (or "*") allows any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Form page configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Directory served under /static (holds the wasm-pack output in pkg/)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// URL of the JS glue module for the contract WASM build
    #[serde(default = "default_wasm_module")]
    pub wasm_module: String,
}

// Default values
fn default_port() -> u16 {
    5000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_database_url() -> String {
    "sqlite:employees.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_wasm_module() -> String {
    "/static/pkg/employee_contract_wasm.js".to_string()
}

// Default implementations
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            static_dir: default_static_dir(),
            wasm_module: default_wasm_module(),
        }
    }
}

impl ServerConfig {
    /// `host:port` for binding
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./employee.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("employee.toml")
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`.
    ///
    /// Recognised keys: `DATABASE_URL`, `HOST`, `PORT`, `CORS_ORIGINS`
    /// (comma-separated) and `STATIC_DIR`. Unparseable values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        if let Some(origins) = lookup("CORS_ORIGINS") {
            self.cors.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            self.client.static_dir = dir;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.database.url, "sqlite:employees.db?mode=rwc");
        assert!(config.cors.allowed_origins.is_empty());
        assert_eq!(config.client.static_dir, "static");
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [server]
            port = 8080

            [cors]
            allowed_origins = ["http://localhost:5173"]
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.database.url, "sqlite:employees.db?mode=rwc");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load("does-not-exist.toml").unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("DATABASE_URL", "postgres://localhost/hr"),
            ("PORT", "9000"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
        ]);

        let config = Config::default().with_overrides(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.database.url, "postgres://localhost/hr");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.address(), "127.0.0.1:9000");
        assert_eq!(
            config.cors.allowed_origins,
            vec!["http://a.test", "http://b.test"]
        );
    }

    #[test]
    fn test_bad_port_override_ignored() {
        let config = Config::default().with_overrides(|k| (k == "PORT").then(|| "nope".to_string()));
        assert_eq!(config.server.port, 5000);
    }
}
