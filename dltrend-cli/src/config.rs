//! Configuration file loading for dltrend.
//!
//! Discovers and loads `dltrend.toml` from the working directory, or the file
//! named by `--config`. Merges config file settings with CLI arguments (CLI
//! takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use dltrend_core::settings::{DEFAULT_OUT_PATH, RenderSettings};
use dltrend_core::{AxisPadding, ChartStyle, LabelPlacement};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "dltrend.toml";

/// Top-level configuration from dltrend.toml.
///
/// Every table is optional. A `[labels.overrides]` table replaces the built-in
/// overrides as a whole.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DltrendConfig {
    /// Output settings.
    pub output: OutputConfig,

    /// Axis headroom and date padding.
    pub axes: AxisPadding,

    /// Figure size, resolution, fonts and colors.
    pub style: ChartStyle,

    /// Version annotation offsets.
    pub labels: LabelPlacement,
}

/// Output section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the PNG is written.
    pub path: Option<Utf8PathBuf>,
}

/// Discover the dltrend.toml config file.
///
/// Searches for `dltrend.toml` in `dir`. Returns `None` if no config file is found.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a dltrend.toml config file.
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<DltrendConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<DltrendConfig> {
    let config: DltrendConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load the explicit config if given (it must exist), else the one discovered
/// in `dir`, else defaults.
pub fn load_or_default(
    dir: &Utf8Path,
    explicit: Option<&Utf8Path>,
) -> anyhow::Result<DltrendConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(DltrendConfig::default()),
    }
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: DltrendConfig,
}

impl ConfigMerger {
    /// Create a new merger from a loaded config.
    pub fn new(config: DltrendConfig) -> Self {
        Self { config }
    }

    /// Merge with render command CLI arguments.
    ///
    /// `--out` and `--dpi` override the config file when given.
    pub fn merge_render_args(self, cli_out: Option<&Utf8Path>, cli_dpi: Option<u32>) -> RenderSettings {
        let out_path = cli_out
            .map(Utf8Path::to_path_buf)
            .or(self.config.output.path)
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUT_PATH));

        let mut style = self.config.style;
        if let Some(dpi) = cli_dpi {
            style.dpi = dpi;
        }

        RenderSettings {
            out_path,
            padding: self.config.axes,
            labels: self.config.labels,
            style,
        }
    }

    /// Merge with table command CLI arguments.
    pub fn merge_table_args(self) -> AxisPadding {
        self.config.axes
    }
}
