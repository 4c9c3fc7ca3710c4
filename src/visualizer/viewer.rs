// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Window for displaying annotated results.

use std::time::{Duration, Instant};

use image::RgbaImage;
use minifb::{Key, Window, WindowOptions};

use crate::error::{AnalyzerError, Result};

/// A simple image viewer using minifb.
pub struct Viewer {
    window: Window,
    pub width: usize,
    pub height: usize,
    buffer: Vec<u32>,
}

impl Viewer {
    /// Create a new viewer window.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::VisualizerError`] if the window cannot be opened.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let mut window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                resize: true,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| AnalyzerError::VisualizerError(format!("Failed to create window: {e}")))?;

        // Limit update rate
        window.set_target_fps(60);

        Ok(Self {
            window,
            width,
            height,
            buffer: Vec::new(),
        })
    }

    fn is_closed(&self) -> bool {
        !self.window.is_open()
            || self.window.is_key_down(Key::Escape)
            || self.window.is_key_down(Key::Q)
    }

    /// Show `image` in the window. Returns `false` once the user closed it.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::VisualizerError`] if the window cannot be redrawn.
    pub fn update(&mut self, image: &RgbaImage) -> Result<bool> {
        if self.is_closed() {
            return Ok(false);
        }

        self.buffer = pack_pixels(image);
        self.width = image.width() as usize;
        self.height = image.height() as usize;

        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)
            .map_err(|e| AnalyzerError::VisualizerError(format!("Failed to update window: {e}")))?;

        Ok(true)
    }

    /// Keep the window responsive until it is closed or `timeout` elapses.
    ///
    /// A `None` timeout waits until the user closes the window.
    pub fn wait(&mut self, timeout: Option<Duration>) {
        if self.buffer.is_empty() {
            return;
        }

        let start = Instant::now();
        while !self.is_closed() && timeout.is_none_or(|t| start.elapsed() < t) {
            // minifb paces this loop via the target fps.
            let _ = self
                .window
                .update_with_buffer(&self.buffer, self.width, self.height);
        }
    }
}

/// Pack RGBA pixels as `0x00RRGGBB`, compositing alpha over black.
fn pack_pixels(image: &RgbaImage) -> Vec<u32> {
    image
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            let blend = |c: u8| u32::from(c) * u32::from(a) / 255;
            (blend(r) << 16) | (blend(g) << 8) | blend(b)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_pack_pixels() {
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([0x12, 0x34, 0x56, 255]));
        img.put_pixel(1, 0, Rgba([255, 255, 255, 0]));
        assert_eq!(pack_pixels(&img), vec![0x0012_3456, 0]);
    }
}
