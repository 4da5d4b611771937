use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::chart::ChartKind;
use crate::color::PaletteKind;

/// Environment variable holding the path of an optional JSON config file.
pub const CONFIG_ENV: &str = "CHARTPAD_CONFIG";

// ---------------------------------------------------------------------------
// Startup configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Dataset selected at startup.
    pub dataset: String,
    pub chart: ChartKind,
    pub palette: PaletteKind,
    /// Makes the `random` example dataset reproducible.
    pub random_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_size: [800.0, 600.0],
            min_window_size: [640.0, 480.0],
            dataset: "quadratic".to_string(),
            chart: ChartKind::Line,
            palette: PaletteKind::Rainbow,
            random_seed: None,
        }
    }
}

impl AppConfig {
    /// Load from the file named by `CHARTPAD_CONFIG`, or defaults when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("in config {}", path.display()))
    }

    fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing config JSON")
    }
}
