//! Clap-free settings for the render pipeline.

use camino::Utf8PathBuf;
use dltrend_domain::{AxisPadding, LabelPlacement};
use dltrend_render::ChartStyle;

/// Where the chart lands when nothing overrides it, relative to the working directory.
pub const DEFAULT_OUT_PATH: &str = "miscellaneous/cumulative_downloads_trend.png";

/// Settings for the render pipeline.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub out_path: Utf8PathBuf,

    // Layout
    pub padding: AxisPadding,
    pub labels: LabelPlacement,

    // Drawing
    pub style: ChartStyle,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            out_path: Utf8PathBuf::from(DEFAULT_OUT_PATH),
            padding: AxisPadding::default(),
            labels: LabelPlacement::default(),
            style: ChartStyle::default(),
        }
    }
}
