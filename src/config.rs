use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

use crate::http::parser::HeaderPolicy;
use crate::http::responder::{DEFAULT_SERVER_NAME, TransferMode};

/// Environment variable naming a YAML configuration file.
pub const CONFIG_ENV: &str = "LANTERN_CONFIG";

/// Environment variable overriding `server.listen_addr`.
pub const LISTEN_ENV: &str = "LISTEN";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub http: HttpConfig,
    pub files: FilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Largest request (head plus body) a connection will buffer.
    pub recv_buffer_size: usize,
    /// Read/write timeout applied to each accepted connection.
    pub io_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            recv_buffer_size: 8192,
            io_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Ordinary clients send headers outside the HTTP/1.0 catalog, so the
    /// server skips them unless told otherwise.
    pub unknown_headers: HeaderPolicy,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            unknown_headers: HeaderPolicy::SkipUnknown,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Document root requests are resolved against.
    pub root: PathBuf,
    /// File served for paths ending in `/`.
    pub index: String,
    pub transfer: TransferMode,
    pub server_name: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./public"),
            index: "index.html".to_string(),
            transfer: TransferMode::Buffered,
            server_name: DEFAULT_SERVER_NAME.to_string(),
        }
    }
}

impl Config {
    /// Loads the file named by `LANTERN_CONFIG` (defaults when unset), then
    /// applies the `LISTEN` override.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file {}", path))?;
                Self::from_yaml_str(&text)
                    .with_context(|| format!("Invalid config file {}", path))?
            }
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var(LISTEN_ENV) {
            cfg.server.listen_addr = addr;
        }

        Ok(cfg)
    }

    pub fn from_yaml_str(text: &str) -> anyhow::Result<Self> {
        let cfg: Config = serde_yaml::from_str(text)?;
        if cfg.server.recv_buffer_size == 0 {
            anyhow::bail!("server.recv_buffer_size must be greater than zero");
        }
        Ok(cfg)
    }
}
