//! HTTP listener and CORS configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Overwrite `slot` when the overlay value differs from the field default
fn overlay<T: PartialEq>(slot: &mut T, value: T, default: T) {
    if value != default {
        *slot = value;
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Actix worker threads (CPU count when unset)
    pub workers: Option<usize>,
    /// Client request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Largest accepted JSON body in bytes
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            timeout: default_timeout(),
            max_body_size: default_max_body_size(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Merge with an overlay; overlay fields left at their defaults are ignored
    pub fn merge(mut self, other: Self) -> Self {
        overlay(&mut self.host, other.host, default_host());
        overlay(&mut self.port, other.port, default_port());
        overlay(&mut self.timeout, other.timeout, default_timeout());
        overlay(
            &mut self.max_body_size,
            other.max_body_size,
            default_max_body_size(),
        );
        self.workers = other.workers.or(self.workers);
        self.cors = self.cors.merge(other.cors);
        self
    }

    /// `host:port` string passed to `bind`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }
}

/// Cross-origin policy for browser clients
///
/// The defaults admit a frontend dev server on `http://localhost:3000` with
/// cookies allowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Origins admitted; `*` or an empty list admits any origin
    #[serde(default = "default_cors_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_cors_methods")]
    pub allowed_methods: Vec<String>,
    #[serde(default = "default_cors_headers")]
    pub allowed_headers: Vec<String>,
    /// Preflight cache lifetime in seconds
    #[serde(default = "default_cors_max_age")]
    pub max_age: u32,
    #[serde(default = "default_true")]
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: default_cors_origins(),
            allowed_methods: default_cors_methods(),
            allowed_headers: default_cors_headers(),
            max_age: default_cors_max_age(),
            allow_credentials: true,
        }
    }
}

impl CorsConfig {
    /// Merge with an overlay. Switches can only be turned off by an overlay.
    pub fn merge(mut self, other: Self) -> Self {
        self.enabled &= other.enabled;
        self.allow_credentials &= other.allow_credentials;
        overlay(
            &mut self.allowed_origins,
            other.allowed_origins,
            default_cors_origins(),
        );
        overlay(
            &mut self.allowed_methods,
            other.allowed_methods,
            default_cors_methods(),
        );
        overlay(
            &mut self.allowed_headers,
            other.allowed_headers,
            default_cors_headers(),
        );
        overlay(&mut self.max_age, other.max_age, default_cors_max_age());
        self
    }

    pub fn allows_all_origins(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

fn default_true() -> bool {
    true
}

fn default_cors_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

fn default_cors_methods() -> Vec<String> {
    ["GET", "POST", "PUT", "DELETE", "OPTIONS"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_cors_headers() -> Vec<String> {
    ["Origin", "Content-Type", "Accept"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_cors_max_age() -> u32 {
    3600
}
