use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::cue::sheet::DEFAULT_PERFORMER;
use crate::silence::{
    DEFAULT_MIN_SILENCE_MS, DEFAULT_MIN_TAIL_GAP_SECS, DEFAULT_STEP_MS, DEFAULT_THRESHOLD_DB,
};

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub detection: DetectionConfig,
    #[serde(default)]
    pub cue: CueConfig,
}

#[derive(Debug, Deserialize)]
pub struct DetectionConfig {
    #[serde(default = "default_silence_thresh")]
    pub silence_thresh: f64,
    #[serde(default = "default_min_silence_len")]
    pub min_silence_len: u64,
    #[serde(default = "default_step_ms")]
    pub step_ms: u64,
    #[serde(default = "default_min_tail_gap")]
    pub min_tail_gap: u64,
}

#[derive(Debug, Deserialize)]
pub struct CueConfig {
    #[serde(default = "default_performer")]
    pub performer: String,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            silence_thresh: default_silence_thresh(),
            min_silence_len: default_min_silence_len(),
            step_ms: default_step_ms(),
            min_tail_gap: default_min_tail_gap(),
        }
    }
}

impl Default for CueConfig {
    fn default() -> Self {
        Self {
            performer: default_performer(),
        }
    }
}

fn default_silence_thresh() -> f64 { DEFAULT_THRESHOLD_DB }
fn default_min_silence_len() -> u64 { DEFAULT_MIN_SILENCE_MS }
fn default_step_ms() -> u64 { DEFAULT_STEP_MS }
fn default_min_tail_gap() -> u64 { DEFAULT_MIN_TAIL_GAP_SECS as u64 }
fn default_performer() -> String { DEFAULT_PERFORMER.into() }

pub fn load_config(path: &Path) -> Option<Config> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Explicit path first, then `./cuesplit.toml`, then the per-user config.
pub fn find_config(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let local = PathBuf::from("cuesplit.toml");
    if local.exists() {
        return Some(local);
    }
    if let Some(home) = dirs::home_dir() {
        let xdg = home.join(".config").join("cuesplit").join("config.toml");
        if xdg.exists() {
            return Some(xdg);
        }
    }
    if let Some(config_dir) = dirs::config_dir() {
        let platform = config_dir.join("cuesplit").join("config.toml");
        if platform.exists() {
            return Some(platform);
        }
    }
    None
}
