//! Owned RGB pixel buffer and tight-bbox cropping.

use crate::RenderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// 8-bit RGB image, rows top to bottom, no padding between rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RgbImage {
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, RenderError> {
        let expected = width as usize * height as usize * 3;
        if pixels.len() != expected {
            return Err(RenderError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let pixels = rgb
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 3)
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = self.offset(x, y);
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let i = self.offset(x, y);
        self.pixels[i..i + 3].copy_from_slice(&rgb);
    }

    /// Smallest rectangle holding every pixel that differs from `background`.
    pub fn content_bounds(&self, background: [u8; 3]) -> Option<PixelRect> {
        let mut min_x = u32::MAX;
        let mut min_y = u32::MAX;
        let mut max_x = 0;
        let mut max_y = 0;
        let mut found = false;

        for (i, px) in self.pixels.chunks_exact(3).enumerate() {
            if px == background {
                continue;
            }
            let x = (i % self.width as usize) as u32;
            let y = (i / self.width as usize) as u32;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
            found = true;
        }

        found.then(|| PixelRect {
            x: min_x,
            y: min_y,
            width: max_x - min_x + 1,
            height: max_y - min_y + 1,
        })
    }

    /// Copies `rect`, clamped to the image.
    pub fn crop(&self, rect: PixelRect) -> RgbImage {
        let x0 = rect.x.min(self.width);
        let y0 = rect.y.min(self.height);
        let x1 = rect.x.saturating_add(rect.width).min(self.width);
        let y1 = rect.y.saturating_add(rect.height).min(self.height);
        let row_bytes = (x1 - x0) as usize * 3;

        let mut pixels = Vec::with_capacity(row_bytes * (y1 - y0) as usize);
        for y in y0..y1 {
            let start = self.offset(x0, y);
            pixels.extend_from_slice(&self.pixels[start..start + row_bytes]);
        }

        RgbImage {
            width: x1 - x0,
            height: y1 - y0,
            pixels,
        }
    }

    /// Trims uniform `background` margins, keeping `pad` pixels around the content.
    ///
    /// An image with no content is returned unchanged.
    pub fn crop_to_content(&self, background: [u8; 3], pad: u32) -> RgbImage {
        let Some(bounds) = self.content_bounds(background) else {
            return self.clone();
        };
        let x = bounds.x.saturating_sub(pad);
        let y = bounds.y.saturating_sub(pad);
        self.crop(PixelRect {
            x,
            y,
            width: bounds.x + bounds.width + pad - x,
            height: bounds.y + bounds.height + pad - y,
        })
    }
}
