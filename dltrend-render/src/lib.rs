//! Renderers for the trend chart (PNG) and the series table (text, markdown, JSON).

mod chart;
mod encode;
mod error;
mod raster;
mod style;
mod table;

pub use chart::{ChartRenderer, PlotFrame};
pub use encode::{dots_per_meter, encode_png};
pub use error::RenderError;
pub use raster::{PixelRect, RgbImage};
pub use style::{ChartStyle, parse_hex_color};
pub use table::{render_series_json, render_series_md, render_series_text};
