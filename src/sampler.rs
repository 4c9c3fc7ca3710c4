// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Pixel sampling at landmark positions.
//!
//! Garment colors are estimated by reading the pixels under a few landmarks and
//! averaging them: shoulders and hips for the shirt, knees and ankles for the trousers.

use image::RgbaImage;
use serde::Serialize;

use crate::error::{AnalyzerError, Result};
use crate::landmark::{Landmark, LandmarkSet, Point2D};
use crate::visualizer::color::{Color, average_color};

/// Body region whose color is estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Shoulders and hips ("shirt").
    Torso,
    /// Knees and ankles ("trousers").
    Legs,
}

impl Region {
    /// Landmarks sampled for this region, in sampling order.
    #[must_use]
    pub const fn landmarks(&self) -> [Landmark; 4] {
        match self {
            Self::Torso => [
                Landmark::RightShoulder,
                Landmark::RightHip,
                Landmark::LeftHip,
                Landmark::LeftShoulder,
            ],
            Self::Legs => [
                Landmark::RightKnee,
                Landmark::RightAnkle,
                Landmark::LeftKnee,
                Landmark::LeftAnkle,
            ],
        }
    }
}

/// Read the pixel under `point`.
///
/// Coordinates are truncated toward zero before lookup.
///
/// # Errors
///
/// Returns [`AnalyzerError::OutOfRange`] if the truncated point lies outside the
/// image, or a coordinate is non-finite. `-0.5` truncates to column 0; `-1.0` does not.
pub fn sample_pixel(image: &RgbaImage, point: Point2D) -> Result<Color> {
    let (width, height) = image.dimensions();
    let out_of_range = || AnalyzerError::OutOfRange {
        x: point.x,
        y: point.y,
        width,
        height,
    };

    let x = pixel_index(point.x).ok_or_else(out_of_range)?;
    let y = pixel_index(point.y).ok_or_else(out_of_range)?;

    image
        .get_pixel_checked(x, y)
        .map(|px| Color::from(*px))
        .ok_or_else(out_of_range)
}

/// Truncate a coordinate to a pixel index; `None` for non-finite values or
/// ones that truncate below zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixel_index(v: f32) -> Option<u32> {
    if !v.is_finite() {
        return None;
    }
    let t = v.trunc();
    if t < 0.0 || t >= u32::MAX as f32 {
        return None;
    }
    Some(t as u32)
}

/// Sample the pixel under each of `landmarks`, in order.
///
/// # Errors
///
/// Returns [`AnalyzerError::MissingLandmark`] for an absent landmark, or
/// [`AnalyzerError::OutOfRange`] for a landmark outside the image.
pub fn sample_landmarks(
    image: &RgbaImage,
    landmarks: &LandmarkSet,
    which: &[Landmark],
) -> Result<Vec<Color>> {
    which
        .iter()
        .map(|&l| sample_pixel(image, landmarks.require(l)?))
        .collect()
}

/// Average color of the pixels under the landmarks of `region`.
///
/// # Errors
///
/// See [`sample_landmarks`].
pub fn region_color(image: &RgbaImage, landmarks: &LandmarkSet, region: Region) -> Result<Color> {
    let samples = sample_landmarks(image, landmarks, &region.landmarks())?;
    average_color(&samples)
}
