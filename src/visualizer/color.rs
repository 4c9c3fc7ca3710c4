// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Pixel colors and color averaging.

use std::fmt;

use image::Rgba;
use serde::{Serialize, Serializer};

use crate::error::{AnalyzerError, Result};

/// RGBA pixel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    /// Red color.
    pub const RED: Color = Color(255, 0, 0, 255);
    /// Green color.
    pub const GREEN: Color = Color(0, 255, 0, 255);
    /// Blue color.
    pub const BLUE: Color = Color(0, 0, 255, 255);
    /// White color.
    pub const WHITE: Color = Color(255, 255, 255, 255);
    /// Black color.
    pub const BLACK: Color = Color(0, 0, 0, 255);

    /// Create an opaque color from RGB values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b, 255)
    }

    /// Create a color from RGBA values.
    #[must_use]
    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(r, g, b, a)
    }

    /// Unpack a `0xAARRGGBB` integer.
    #[must_use]
    pub const fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self(r, g, b, a)
    }

    /// Pack into a `0xAARRGGBB` integer.
    #[must_use]
    pub const fn to_argb(self) -> u32 {
        u32::from_be_bytes([self.3, self.0, self.1, self.2])
    }

    /// `#rrggbbaa` hex notation.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.0, self.1, self.2, self.3)
    }
}

impl From<Rgba<u8>> for Color {
    fn from(Rgba([r, g, b, a]): Rgba<u8>) -> Self {
        Self(r, g, b, a)
    }
}

impl From<Color> for Rgba<u8> {
    fn from(c: Color) -> Self {
        Rgba([c.0, c.1, c.2, c.3])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.0, self.1, self.2, self.3)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Per-channel mean of `samples`, rounded to the nearest integer (halves round up).
///
/// # Errors
///
/// Returns [`AnalyzerError::InvalidArgument`] if `samples` is empty.
pub fn average_color(samples: &[Color]) -> Result<Color> {
    if samples.is_empty() {
        return Err(AnalyzerError::InvalidArgument(
            "cannot average an empty color sequence".to_string(),
        ));
    }

    let mut sums = [0u64; 4];
    for c in samples {
        sums[0] += u64::from(c.0);
        sums[1] += u64::from(c.1);
        sums[2] += u64::from(c.2);
        sums[3] += u64::from(c.3);
    }

    let n = samples.len() as u64;
    // Mean of u8 values never exceeds 255.
    #[allow(clippy::cast_possible_truncation)]
    let channel = |sum: u64| ((sum + n / 2) / n) as u8;

    Ok(Color(
        channel(sums[0]),
        channel(sums[1]),
        channel(sums[2]),
        channel(sums[3]),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_uniform() {
        let c = Color::with_alpha(12, 200, 77, 9);
        assert_eq!(average_color(&[c; 7]).unwrap(), c);
    }

    #[test]
    fn test_average_rounds_half_up() {
        let avg = average_color(&[Color::BLACK, Color::WHITE]).unwrap();
        assert_eq!(avg, Color(128, 128, 128, 255));
    }

    #[test]
    fn test_average_rounds_to_nearest() {
        // 10 / 3 = 3.33 -> 3, 11 / 3 = 3.67 -> 4
        let avg = average_color(&[
            Color::new(10, 11, 0),
            Color::new(0, 0, 0),
            Color::new(0, 0, 0),
        ])
        .unwrap();
        assert_eq!(avg, Color::new(3, 4, 0));
    }

    #[test]
    fn test_average_empty() {
        assert!(matches!(
            average_color(&[]),
            Err(AnalyzerError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_argb_packing() {
        let c = Color::from_argb(0x80FF_2010);
        assert_eq!(c, Color::with_alpha(0xFF, 0x20, 0x10, 0x80));
        assert_eq!(c.to_argb(), 0x80FF_2010);
        assert_eq!(c.to_hex(), "#ff201080");
    }

    #[test]
    fn test_rgba_conversion() {
        let px: Rgba<u8> = Color::BLUE.into();
        assert_eq!(px, Rgba([0, 0, 255, 255]));
        assert_eq!(Color::from(px), Color::BLUE);
    }
}
