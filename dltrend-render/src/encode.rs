use crate::{RenderError, RgbImage};

const METERS_PER_INCH: f64 = 0.0254;

/// Pixels per meter for the PNG `pHYs` chunk.
pub fn dots_per_meter(dpi: u32) -> u32 {
    (f64::from(dpi) / METERS_PER_INCH).round() as u32
}

/// Encodes `image` as an 8-bit RGB PNG tagged with `dpi`.
pub fn encode_png(image: &RgbImage, dpi: u32) -> Result<Vec<u8>, RenderError> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let ppm = dots_per_meter(dpi);
        encoder.set_pixel_dims(Some(png::PixelDimensions {
            xppu: ppm,
            yppu: ppm,
            unit: png::Unit::Meter,
        }));
        let mut writer = encoder.write_header()?;
        writer.write_image_data(image.pixels())?;
        writer.finish()?;
    }
    Ok(out)
}
