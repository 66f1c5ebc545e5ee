//! Configuration resolution
//!
//! Each setting resolves by priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! Missing config files never abort startup; defaults apply with a log
//! line.

use clap::Parser;
use serde::Deserialize;
use std::env;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

/// Command-line arguments
#[derive(Debug, Default, Parser)]
#[command(name = "vibemap-api", about = "Vibemap venue discovery API", version)]
pub struct CliArgs {
    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,

    /// Bind address
    #[arg(long)]
    pub bind: Option<String>,

    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Places provider API key (falls back to FOURSQUARE_API_KEY)
    #[arg(long = "api-key")]
    pub api_key: Option<String>,

    /// Scoring policy name (classic-coffee or nightlife)
    #[arg(long)]
    pub policy: Option<String>,
}

/// Resolved service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub bind: String,
    pub api_key: Option<String>,
    pub policy_name: String,
    /// Default search reference point (downtown Hamilton)
    pub latitude: f64,
    pub longitude: f64,
    /// Provider search radius in meters
    pub radius_m: u32,
    /// Provider result limit per search
    pub limit: u32,
    /// Fetch cache window in seconds
    pub cache_ttl_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5740,
            bind: "127.0.0.1".to_string(),
            api_key: None,
            policy_name: "classic-coffee".to_string(),
            latitude: 43.2557,
            longitude: -79.8711,
            radius_m: 10_000,
            limit: 50,
            cache_ttl_secs: 3600,
        }
    }
}

/// Optional overrides loaded from the TOML config file
#[derive(Debug, Default, Deserialize)]
pub struct TomlConfig {
    pub port: Option<u16>,
    pub bind: Option<String>,
    pub api_key: Option<String>,
    pub policy: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub radius_m: Option<u32>,
    pub limit: Option<u32>,
    pub cache_ttl_secs: Option<u64>,
}

impl Config {
    /// Resolve the full configuration from CLI, environment, TOML file,
    /// and compiled defaults
    pub fn resolve(args: &CliArgs) -> Self {
        let file = load_toml(args.config.as_deref());
        let defaults = Config::default();

        let api_key = args
            .api_key
            .clone()
            .or_else(|| env::var("FOURSQUARE_API_KEY").ok().filter(|v| !v.is_empty()))
            .or(file.api_key);
        if api_key.is_none() {
            info!("No places API key configured; serving seed data only");
        }

        Self {
            port: args
                .port
                .or_else(|| env_parsed("VIBEMAP_PORT"))
                .or(file.port)
                .unwrap_or(defaults.port),
            bind: args
                .bind
                .clone()
                .or_else(|| env::var("VIBEMAP_BIND").ok().filter(|v| !v.is_empty()))
                .or(file.bind)
                .unwrap_or(defaults.bind),
            api_key,
            policy_name: args
                .policy
                .clone()
                .or_else(|| env::var("VIBEMAP_POLICY").ok().filter(|v| !v.is_empty()))
                .or(file.policy)
                .unwrap_or(defaults.policy_name),
            latitude: file.latitude.unwrap_or(defaults.latitude),
            longitude: file.longitude.unwrap_or(defaults.longitude),
            radius_m: file.radius_m.unwrap_or(defaults.radius_m),
            limit: file.limit.unwrap_or(defaults.limit),
            cache_ttl_secs: env_parsed("VIBEMAP_CACHE_TTL_SECS")
                .or(file.cache_ttl_secs)
                .unwrap_or(defaults.cache_ttl_secs),
        }
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

/// Read an environment variable, discarding unparseable values with a
/// warning rather than failing startup
fn env_parsed<T: FromStr>(key: &str) -> Option<T>
where
    T::Err: Display,
{
    let raw = env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Invalid {} value {:?}: {}; ignoring", key, raw, e);
            None
        }
    }
}

/// Load TOML overrides from an explicit path or the platform default
/// location; missing or malformed files yield empty overrides
fn load_toml(explicit: Option<&Path>) -> TomlConfig {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) => path,
            None => return TomlConfig::default(),
        },
    };

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => {
            info!("No config file at {}; using defaults", path.display());
            return TomlConfig::default();
        }
    };

    match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to parse {}: {}; using defaults", path.display(), e);
            TomlConfig::default()
        }
    }
}

/// Platform config file location: `<config dir>/vibemap/config.toml`
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("vibemap").join("config.toml"))
}
