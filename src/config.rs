//! Server configuration.
//!
//! Values are layered, later sources winning:
//!
//! 1. built-in defaults
//! 2. a YAML file (`--config` or `STATICA_CONFIG`)
//! 3. environment: `LISTEN=host:port`, `DOC_ROOT`
//! 4. command line: `statica [PORT] [DOC_ROOT] [--host HOST]`

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Listen backlog, never below 5
    pub backlog: u32,
    /// Per-read deadline while framing a request
    pub read_timeout_ms: u64,
    pub max_request_bytes: usize,
    pub read_chunk_bytes: usize,
    /// Value of the `Server` response header
    pub server_name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct StaticFilesConfig {
    pub root: PathBuf,
}

/// Command line arguments.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "statica")]
#[command(about = "Minimal HTTP/1.0 static file server")]
pub struct Cli {
    /// Port to listen on
    pub port: Option<u16>,

    /// Directory to serve files from
    pub doc_root: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// YAML configuration file
    #[arg(long, env = "STATICA_CONFIG")]
    pub config: Option<PathBuf>,
}

pub const MIN_BACKLOG: u32 = 5;

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            backlog: MIN_BACKLOG,
            read_timeout_ms: 2000,
            max_request_bytes: 65536,
            read_chunk_bytes: 4096,
            server_name: "SimpleHTTP10/1.0".to_string(),
        }
    }
}

impl ServerConfig {
    /// `host:port`, with IPv6 literals bracketed.
    pub fn listen_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./www"),
        }
    }
}

impl Config {
    /// Loads the full layered configuration for the binary.
    pub fn load(cli: &Cli) -> Result<Self> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        let cfg = base
            .with_env(|key| std::env::var(key).ok())?
            .with_cli(cli);

        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        Ok(cfg.clamped())
    }

    /// Applies `LISTEN` and `DOC_ROOT` as returned by `lookup`.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(listen) = lookup("LISTEN") {
            let (host, port) = split_listen_addr(&listen)
                .with_context(|| format!("invalid LISTEN address {:?}", listen))?;
            self.server.host = host;
            self.server.port = port;
        }

        if let Some(root) = lookup("DOC_ROOT") {
            self.static_files.root = PathBuf::from(root);
        }

        Ok(self)
    }

    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(root) = &cli.doc_root {
            self.static_files.root = root.clone();
        }
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        self
    }

    pub fn listen_addr(&self) -> String {
        self.server.listen_addr()
    }

    fn clamped(mut self) -> Self {
        self.server.backlog = self.server.backlog.max(MIN_BACKLOG);
        self
    }
}

fn split_listen_addr(addr: &str) -> Result<(String, u16)> {
    let (host, port) = addr
        .rsplit_once(':')
        .context("expected host:port")?;
    let port = port.parse::<u16>().context("invalid port")?;
    let host = host.trim_start_matches('[').trim_end_matches(']');
    Ok((host.to_string(), port))
}
