use crate::RenderError;
use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

const MAX_SIDE_PX: f64 = 20_000.0;

/// Figure-wide drawing settings, handed to [`crate::ChartRenderer::new`].
///
/// Sizes ending in `_pt` are typographic points and scale with `dpi`;
/// `width_in`/`height_in` are inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
    pub font_family: String,

    pub title: String,
    pub title_size_pt: f64,
    pub y_label: String,
    pub axis_label_size_pt: f64,
    pub tick_label_size_pt: f64,

    pub background: String,
    pub plot_background: String,
    pub grid_color: String,
    pub grid_alpha: f64,

    pub line_color: String,
    pub line_width_pt: f64,
    pub fill_alpha: f64,

    pub marker_color: String,
    /// Marker diameter.
    pub marker_size_pt: f64,

    pub annotation_color: String,
    pub annotation_size_pt: f64,

    /// Blank border kept around the content after cropping.
    pub crop_pad_in: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width_in: 14.0,
            height_in: 8.0,
            dpi: 150,
            font_family: "sans-serif".to_string(),
            title: "Total downloads trend".to_string(),
            title_size_pt: 18.0,
            y_label: "total downloads".to_string(),
            axis_label_size_pt: 14.0,
            tick_label_size_pt: 10.0,
            background: "#FFFFFF".to_string(),
            plot_background: "#EAEAF2".to_string(),
            grid_color: "#FFFFFF".to_string(),
            grid_alpha: 0.6,
            line_color: "#2E86AB".to_string(),
            line_width_pt: 2.0,
            fill_alpha: 0.2,
            marker_color: "#000000".to_string(),
            marker_size_pt: 5.0,
            annotation_color: "#333333".to_string(),
            annotation_size_pt: 10.0,
            crop_pad_in: 0.1,
        }
    }
}

impl ChartStyle {
    /// Canvas size in pixels before cropping.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.width_in * f64::from(self.dpi)).round() as u32,
            (self.height_in * f64::from(self.dpi)).round() as u32,
        )
    }

    /// Points to pixels at this style's resolution.
    pub fn px(&self, pt: f64) -> f64 {
        pt * f64::from(self.dpi) / 72.0
    }

    pub(crate) fn px_u32(&self, pt: f64) -> u32 {
        self.px(pt).round().max(1.0) as u32
    }

    pub(crate) fn px_i32(&self, pt: f64) -> i32 {
        self.px(pt).round() as i32
    }

    pub fn crop_pad_px(&self) -> u32 {
        (self.crop_pad_in * f64::from(self.dpi)).round().max(0.0) as u32
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        if self.dpi == 0 {
            return Err(RenderError::InvalidStyle("dpi must be positive".to_string()));
        }
        for (name, inches) in [("width_in", self.width_in), ("height_in", self.height_in)] {
            if !inches.is_finite() || inches <= 0.0 {
                return Err(RenderError::InvalidStyle(format!("{name} must be positive")));
            }
            if inches * f64::from(self.dpi) > MAX_SIDE_PX {
                return Err(RenderError::InvalidStyle(format!(
                    "{name} at {} dpi exceeds {MAX_SIDE_PX} pixels",
                    self.dpi
                )));
            }
        }
        for (name, pt) in [
            ("title_size_pt", self.title_size_pt),
            ("axis_label_size_pt", self.axis_label_size_pt),
            ("tick_label_size_pt", self.tick_label_size_pt),
            ("annotation_size_pt", self.annotation_size_pt),
            ("line_width_pt", self.line_width_pt),
            ("marker_size_pt", self.marker_size_pt),
        ] {
            if !pt.is_finite() || pt <= 0.0 {
                return Err(RenderError::InvalidStyle(format!("{name} must be positive")));
            }
        }
        for (name, alpha) in [("fill_alpha", self.fill_alpha), ("grid_alpha", self.grid_alpha)] {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(RenderError::InvalidStyle(format!(
                    "{name} must be within 0..=1"
                )));
            }
        }
        if !self.crop_pad_in.is_finite() || self.crop_pad_in < 0.0 {
            return Err(RenderError::InvalidStyle(
                "crop_pad_in must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parses `#RRGGBB` (the leading `#` is optional).
pub fn parse_hex_color(value: &str) -> Result<RGBColor, RenderError> {
    let invalid = || RenderError::InvalidColor {
        value: value.to_string(),
    };
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

/// Colors resolved once so drawing never re-parses strings.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolvedColors {
    pub background: RGBColor,
    pub plot_background: RGBColor,
    pub grid: RGBColor,
    pub line: RGBColor,
    pub marker: RGBColor,
    pub annotation: RGBColor,
}

impl ResolvedColors {
    pub(crate) fn from_style(style: &ChartStyle) -> Result<Self, RenderError> {
        Ok(Self {
            background: parse_hex_color(&style.background)?,
            plot_background: parse_hex_color(&style.plot_background)?,
            grid: parse_hex_color(&style.grid_color)?,
            line: parse_hex_color(&style.line_color)?,
            marker: parse_hex_color(&style.marker_color)?,
            annotation: parse_hex_color(&style.annotation_color)?,
        })
    }
}
