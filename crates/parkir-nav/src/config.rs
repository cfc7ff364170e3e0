// File: src/config.rs
// Purpose: Configuration parsing from parkir.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::defaults::default_route_map;
use crate::error::RouteMapError;
use crate::route_map::{RouteEntry, RouteMap};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub navigation: NavigationConfig,
}

/// Project metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_version")]
    pub version: String,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

/// Breadcrumb navigation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Normalize incoming paths before lookup (default: true)
    #[serde(default = "default_true")]
    pub normalize_paths: bool,

    /// Start from the built-in dashboard table (default: true)
    #[serde(default = "default_true")]
    pub use_default_routes: bool,

    /// Extra or replacement routes, keyed by path
    #[serde(default)]
    pub routes: BTreeMap<String, RouteEntry>,
}

// Default values
fn default_name() -> String {
    "parkir".to_string()
}

fn default_version() -> String {
    "0.1.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            normalize_paths: true,
            use_default_routes: true,
            routes: BTreeMap::new(),
        }
    }
}

impl NavigationConfig {
    /// Builds the route table this configuration describes
    ///
    /// Configured routes replace built-in ones with the same path. The
    /// merged table is validated here, so a misconfigured parent cycle
    /// surfaces at startup.
    pub fn route_map(&self) -> Result<RouteMap, RouteMapError> {
        let base = if self.use_default_routes {
            default_route_map()
        } else {
            RouteMap::default()
        };

        base.with_overrides(self.routes.clone())
    }
}

impl Config {
    /// Load configuration from parkir.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

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

    /// Load configuration from a path the operator named explicitly
    ///
    /// Unlike [`Config::load`], a missing file is an error here.
    pub fn load_required(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            anyhow::bail!("Config file not found: {:?}", path);
        }

        Self::load(path)
    }

    /// Load configuration from default path (./parkir.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("parkir.toml")
    }
}
