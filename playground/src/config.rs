//! Runner configuration: a JSON file in the data directory plus one env override.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use boostlab::animation::{clamp_speed, DEFAULT_MAX_STEPS, DEFAULT_SPEED_MS};
use boostlab::schema::Algorithm;
use boostlab::ui_model::{Dataset, TaskType};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const API_URL_ENV: &str = "BOOSTLAB_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    pub api_base: String,
    pub algorithm: Algorithm,
    pub task: TaskType,
    pub dataset: Dataset,
    pub max_steps: u32,
    pub speed_ms: u32,
    pub preview_timeout_ms: u64,
    pub fallback_seed: u64,
    pub log_level: String,
    /// Parameter edits applied as text after the baseline is captured, so the
    /// runner shows their effect as metric deltas.
    pub parameters: BTreeMap<String, String>,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_URL.to_string(),
            algorithm: Algorithm::XGBoost,
            task: TaskType::Classification,
            dataset: Dataset::Simulated,
            max_steps: DEFAULT_MAX_STEPS,
            speed_ms: DEFAULT_SPEED_MS,
            preview_timeout_ms: 5_000,
            fallback_seed: 42,
            log_level: "info".to_string(),
            parameters: BTreeMap::new(),
        }
    }
}

impl PlaygroundConfig {
    /// Read `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default().normalized());
        }
        let text = fs::read_to_string(path)?;
        let cfg: Self = serde_json::from_str(&text)?;
        Ok(cfg.normalized())
    }

    /// [`load`](Self::load) followed by the `BOOSTLAB_API_URL` override.
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let cfg = Self::load(path)?;
        Ok(cfg.with_api_override(std::env::var(API_URL_ENV).ok()))
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    pub fn with_api_override(mut self, api_base: Option<String>) -> Self {
        if let Some(url) = api_base.filter(|u| !u.trim().is_empty()) {
            self.api_base = url.trim().to_string();
        }
        self
    }

    pub fn preview_timeout(&self) -> Duration {
        Duration::from_millis(self.preview_timeout_ms)
    }

    fn normalized(mut self) -> Self {
        self.max_steps = self.max_steps.max(1);
        self.speed_ms = clamp_speed(self.speed_ms);
        self.api_base = self.api_base.trim_end_matches('/').to_string();
        if !self.task.datasets().contains(&self.dataset) {
            self.dataset = self.task.default_dataset();
        }
        self
    }
}
