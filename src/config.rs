use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Server configuration, loaded from an optional YAML file.
///
/// Every field has a default matching the deployment this server was built
/// for: listen on `0.0.0.0:8080`, serve the `WWWROOT` directory, append to
/// `server.log`. A missing config file therefore means "run with defaults";
/// only a file that exists but does not parse is an error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    pub access_log: AccessLogConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address, e.g. "0.0.0.0:8080".
    pub listen_addr: String,
    /// Maximum number of connections handled at once; further peers wait in
    /// the OS accept backlog.
    pub max_connections: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            max_connections: 1024,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Directory scanned once at startup for servable files.
    pub root: PathBuf,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("WWWROOT"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AccessLogConfig {
    /// File the per-request log lines are appended to.
    pub path: PathBuf,
}

impl Default for AccessLogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("server.log"),
        }
    }
}

impl Config {
    /// Loads the config file named by `ATTIC_CONFIG` (default `attic.yaml`).
    pub fn load() -> anyhow::Result<Self> {
        let path =
            std::env::var("ATTIC_CONFIG").unwrap_or_else(|_| "attic.yaml".to_string());
        Self::load_from(Path::new(&path))
    }

    /// Loads configuration from `path`, falling back to the defaults when
    /// the file does not exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(raw) => serde_yaml::from_str(&raw)
                .with_context(|| format!("invalid config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => {
                Err(e).with_context(|| format!("failed to read config file {}", path.display()))
            }
        }
    }
}
