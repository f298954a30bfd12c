use crate::error::drawing_err;
use crate::style::ResolvedColors;
use crate::{ChartStyle, RenderError, RgbImage, encode_png};
use chrono::{Datelike, NaiveDate};
use dltrend_domain::{LabelPlacement, Trend};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use tracing::debug;

const MONTH_FORMAT: &str = "%Y-%m";

/// Where the plotting area landed on the canvas, and the data ranges it spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotFrame {
    pub x_pixels: Range<i32>,
    pub y_pixels: Range<i32>,
    x_days: Range<i32>,
    y_values: Range<u64>,
}

impl PlotFrame {
    /// Canvas pixel for a data point. Larger values sit higher (smaller y).
    pub fn pixel_at(&self, date: NaiveDate, value: u64) -> (i32, i32) {
        let x = lerp(
            f64::from(day_number(date) - self.x_days.start),
            f64::from(self.x_days.end - self.x_days.start),
            &self.x_pixels,
        );
        let y_span = self.y_values.end.saturating_sub(self.y_values.start) as f64;
        let y_up = lerp(
            value.saturating_sub(self.y_values.start) as f64,
            y_span,
            &(0..self.y_pixels.end - self.y_pixels.start),
        );
        (x, self.y_pixels.end - y_up)
    }
}

fn lerp(offset: f64, span: f64, pixels: &Range<i32>) -> i32 {
    if span <= 0.0 {
        return pixels.start;
    }
    let width = f64::from(pixels.end - pixels.start);
    pixels.start + (offset / span * width).round() as i32
}

/// Draws a [`Trend`] as a filled line chart with annotated major releases.
///
/// All figure-wide state (size, resolution, fonts, colors, label offsets) is
/// fixed at construction; rendering is a pure function of the trend.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    style: ChartStyle,
    labels: LabelPlacement,
    colors: ResolvedColors,
}

impl ChartRenderer {
    pub fn new(style: ChartStyle, labels: LabelPlacement) -> Result<Self, RenderError> {
        style.validate()?;
        let colors = ResolvedColors::from_style(&style)?;
        Ok(Self {
            style,
            labels,
            colors,
        })
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Full, uncropped canvas.
    pub fn render(&self, trend: &Trend) -> Result<RgbImage, RenderError> {
        self.render_framed(trend).map(|(image, _)| image)
    }

    /// Full, uncropped canvas plus the position of its plotting area.
    pub fn render_framed(&self, trend: &Trend) -> Result<(RgbImage, PlotFrame), RenderError> {
        let (width, height) = self.style.pixel_size();
        let mut pixels = vec![0u8; width as usize * height as usize * 3];
        let frame = {
            let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
            let frame = self.draw(&root, trend)?;
            root.present().map_err(drawing_err)?;
            frame
        };
        Ok((RgbImage::from_raw(width, height, pixels)?, frame))
    }

    /// Pixel offset of a version annotation from its marker, y pointing down.
    pub fn annotation_offset_px(&self, label: &str) -> (i32, i32) {
        let offset = self.labels.offset_for(label);
        (self.style.px_i32(offset.dx), -self.style.px_i32(offset.dy))
    }

    /// Rendered, cropped to the content bounding box and encoded as PNG.
    pub fn render_png(&self, trend: &Trend) -> Result<Vec<u8>, RenderError> {
        let full = self.render(trend)?;
        let bg = self.colors.background;
        let cropped = full.crop_to_content([bg.0, bg.1, bg.2], self.style.crop_pad_px());
        debug!(
            width = cropped.width(),
            height = cropped.height(),
            dpi = self.style.dpi,
            "cropped chart"
        );
        encode_png(&cropped, self.style.dpi)
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        trend: &Trend,
    ) -> Result<PlotFrame, RenderError> {
        let style = &self.style;
        let colors = &self.colors;
        let family = style.font_family.as_str();

        root.fill(&colors.background).map_err(drawing_err)?;

        let x_range = day_number(trend.bounds.x_start)..day_number(trend.bounds.x_end);
        let ticks: Vec<i32> = trend.month_ticks.iter().copied().map(day_number).collect();
        let tick_count = ticks.len().max(1);

        let title_font = (family, style.px(style.title_size_pt))
            .into_font()
            .style(FontStyle::Bold);
        let mut chart = ChartBuilder::on(root)
            .margin(style.px_u32(12.0))
            .caption(style.title.as_str(), title_font)
            .x_label_area_size(style.px_u32(48.0))
            .y_label_area_size(style.px_u32(64.0))
            .build_cartesian_2d(
                x_range.clone().with_key_points(ticks),
                trend.bounds.y_min..trend.bounds.y_max,
            )
            .map_err(drawing_err)?;

        let (x_pixels, y_pixels) = chart.plotting_area().get_pixel_range();
        let frame = PlotFrame {
            x_pixels,
            y_pixels,
            x_days: x_range.clone(),
            y_values: trend.bounds.y_min..trend.bounds.y_max,
        };

        chart
            .plotting_area()
            .fill(&colors.plot_background)
            .map_err(drawing_err)?;

        let tick_font = (family, style.px(style.tick_label_size_pt)).into_font();
        let axis_font = (family, style.px(style.axis_label_size_pt)).into_font();
        let month_label = |day: &i32| {
            date_from_day_number(*day)
                .map(|d| d.format(MONTH_FORMAT).to_string())
                .unwrap_or_default()
        };

        chart
            .configure_mesh()
            .light_line_style(TRANSPARENT)
            .bold_line_style(colors.grid.mix(style.grid_alpha))
            .x_labels(tick_count)
            .x_label_formatter(&month_label)
            // Rotated labels sit one em to the right of their tick.
            .x_label_offset(style.px_i32(style.tick_label_size_pt))
            .x_label_style(tick_font.clone().transform(FontTransform::Rotate90))
            .y_label_style(tick_font)
            .y_desc(style.y_label.as_str())
            .axis_desc_style(axis_font)
            .draw()
            .map_err(drawing_err)?;

        // Every point, sentinel included, so the line runs flat out to today.
        let series: Vec<(i32, u64)> = trend
            .points
            .iter()
            .map(|p| (day_number(p.date), p.cumulative_total))
            .collect();

        chart
            .draw_series(AreaSeries::new(
                series.iter().copied(),
                trend.bounds.y_min,
                colors.line.mix(style.fill_alpha),
            ))
            .map_err(drawing_err)?;
        chart
            .draw_series(LineSeries::new(
                series.iter().copied(),
                colors.line.stroke_width(style.px_u32(style.line_width_pt)),
            ))
            .map_err(drawing_err)?;

        let radius = (style.px(style.marker_size_pt) / 2.0).round().max(1.0) as u32;
        chart
            .draw_series(trend.majors.iter().map(|m| {
                Circle::new(
                    (day_number(m.date), m.cumulative_total),
                    radius,
                    colors.marker.filled(),
                )
            }))
            .map_err(drawing_err)?;

        let annotation_style = (family, style.px(style.annotation_size_pt))
            .into_font()
            .transform(FontTransform::Rotate270)
            .color(&colors.annotation);
        chart
            .draw_series(trend.majors.iter().map(|m| {
                EmptyElement::at((day_number(m.date), m.cumulative_total))
                    + Text::new(
                        m.label.clone(),
                        self.annotation_offset_px(&m.label),
                        annotation_style.clone(),
                    )
            }))
            .map_err(drawing_err)?;

        debug!(
            points = series.len(),
            majors = trend.majors.len(),
            "drew trend"
        );
        Ok(frame)
    }
}

fn day_number(date: NaiveDate) -> i32 {
    date.num_days_from_ce()
}

fn date_from_day_number(day: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(day)
}
