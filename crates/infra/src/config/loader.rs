//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Loads a `.env` file from the working directory if one exists
//! 2. Attempts to load from environment variables
//! 3. If credentials are missing there, falls back to loading from file
//! 4. Probes multiple paths for config files
//! 5. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `S21_LOGIN`, `S21_PASSWORD`: Platform credentials (required)
//! - `S21_BASE_URL`: Platform base URL
//! - `S21_AUTH_URL`: Auth server base URL
//! - `S21_SCHOOL_ID`: `schoolid` context header
//! - `S21_USER_ROLE`: `userrole` context header
//! - `S21_EDU_PRODUCT_ID`: `x-edu-product-id` context header
//! - `S21_EDU_ORG_UNIT_ID`: `x-edu-org-unit-id` context header
//! - `S21_TIMEOUT_SECS`: Request timeout in seconds
//! - `S21_DEBUG` (or legacy `DEBUG`): Request/response body tracing
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./s21.toml` or `./s21.json` (current working directory)
//! 2. `./config.toml` or `./config.json` (current working directory)
//! 3. Relative to executable location

use std::path::{Path, PathBuf};

use s21_domain::{ClientConfig, ClientError, Result};

const CONFIG_FILE_NAMES: [&str; 4] = ["s21.toml", "s21.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// Seeds the environment from `.env`, then attempts environment variables.
/// If the credentials are missing there, falls back to a config file.
///
/// # Errors
/// Returns `ClientError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - `timeout_secs` is zero
pub fn load() -> Result<ClientConfig> {
    load_dotenv();

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load `.env` from the working directory (or a parent) if present
///
/// Variables already set in the process environment win.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "Ignoring unreadable .env file"),
    }
}

/// Load configuration from environment variables
///
/// `S21_LOGIN` and `S21_PASSWORD` must be set and non-empty; every other
/// variable falls back to its default.
///
/// # Errors
/// Returns `ClientError::Config` if credentials are missing or a numeric
/// variable does not parse. A zero timeout is rejected.
pub fn load_from_env() -> Result<ClientConfig> {
    let login = env_var("S21_LOGIN")?;
    let password = env_var("S21_PASSWORD")?;

    let defaults = ClientConfig::default();

    let timeout_secs = match env_opt("S21_TIMEOUT_SECS") {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|e| ClientError::Config(format!("Invalid S21_TIMEOUT_SECS: {e}")))?,
        None => defaults.timeout_secs,
    };
    check_timeout(timeout_secs)?;

    Ok(ClientConfig {
        base_url: env_opt("S21_BASE_URL").unwrap_or(defaults.base_url),
        auth_url: env_opt("S21_AUTH_URL").unwrap_or(defaults.auth_url),
        login: Some(login),
        password: Some(password),
        school_id: env_opt("S21_SCHOOL_ID"),
        user_role: env_opt("S21_USER_ROLE"),
        edu_product_id: env_opt("S21_EDU_PRODUCT_ID"),
        edu_org_unit_id: env_opt("S21_EDU_ORG_UNIT_ID"),
        timeout_secs,
        debug_tracing: env_bool("S21_DEBUG", false) || env_opt("DEBUG").is_some(),
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `ClientError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - `timeout_secs` is zero
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ClientError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ClientError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ClientError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let config: ClientConfig = match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ClientError::Config(format!("Invalid TOML format: {e}")))?,
        "json" => serde_json::from_str(contents)
            .map_err(|e| ClientError::Config(format!("Invalid JSON format: {e}")))?,
        _ => return Err(ClientError::Config(format!("Unsupported config format: {extension}"))),
    };
    check_timeout(config.timeout_secs)?;

    Ok(config)
}

/// A zero request timeout would fail every call
fn check_timeout(timeout_secs: u64) -> Result<()> {
    if timeout_secs == 0 {
        return Err(ClientError::Config("Request timeout must be at least 1 second".to_string()));
    }
    Ok(())
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory first, then the directory of the
/// running executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Get a required, non-empty environment variable
///
/// # Errors
/// Returns `ClientError::Config` if the variable is unset or empty.
fn env_var(key: &str) -> Result<String> {
    env_opt(key).ok_or_else(|| {
        ClientError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Optional environment variable; empty values count as unset
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
