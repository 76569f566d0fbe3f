// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Besides the UI language, the configuration carries the `[camera]` section
//! that drives the simulated capture backend: whether capture is reported as
//! supported, an optional forced failure kind, the requested stream geometry,
//! and the simulated request latency.

pub mod defaults;

use crate::error::{CameraError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedEntry";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub camera: CameraConfig,
}

/// Settings for the simulated capture backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Whether the platform reports a capture capability. Defaults to true.
    pub supported: Option<bool>,
    /// Forced failure for the device access request: one of
    /// `permission-denied`, `not-found`, `busy`, or free-form text that is
    /// classified like a raw backend message. Absent means the request
    /// succeeds.
    pub failure: Option<String>,
    /// Facing preference for the requested stream: `user` or `environment`.
    pub facing: Option<String>,
    pub ideal_width: Option<u32>,
    pub ideal_height: Option<u32>,
    pub request_latency_ms: Option<u64>,
}

impl CameraConfig {
    /// The failure the simulated backend should produce, if any.
    pub fn forced_failure(&self) -> Option<CameraError> {
        self.failure.as_deref().map(parse_failure)
    }
}

/// Maps a failure token from the config or CLI to an error kind.
pub fn parse_failure(token: &str) -> CameraError {
    match token {
        "permission-denied" => CameraError::PermissionDenied,
        "not-found" => CameraError::NotFound,
        "busy" => CameraError::Busy,
        other => CameraError::from_message(other),
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
