// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! End-to-end pose analysis.
//!
//! [`PoseAnalyzer`] ties the pieces together: given a photo and the landmarks an
//! external detector found in it, it computes the arm angles, estimates the
//! garment colors and draws the skeleton overlay.

use image::RgbaImage;
use serde::Serialize;

use crate::config::AnalyzerConfig;
use crate::detector::PoseDetector;
use crate::error::Result;
use crate::geometry::ArmAngles;
use crate::landmark::LandmarkSet;
use crate::sampler::{Region, region_color};
use crate::verbose;
use crate::visualizer::color::Color;
use crate::visualizer::skeleton;

/// Output of one analysis.
#[derive(Debug, Clone)]
pub struct AnnotatedResult {
    /// Copy of the source image with the skeleton drawn on it.
    pub image: RgbaImage,
    /// `"Left angle:<L>\nRight angle:<R>"`.
    pub angle_label: String,
    /// Unrounded arm angles behind the label.
    pub angles: ArmAngles,
    /// Average color under the shoulders and hips.
    pub torso_color: Color,
    /// Average color under the knees and ankles.
    pub leg_color: Color,
}

impl AnnotatedResult {
    /// Image-free summary suitable for JSON output.
    #[must_use]
    pub fn summary(&self) -> AnalysisSummary {
        let (width, height) = self.image.dimensions();
        AnalysisSummary {
            width,
            height,
            angles: self.angles,
            angle_label: self.angle_label.clone(),
            torso_color: self.torso_color,
            leg_color: self.leg_color,
        }
    }
}

/// Serializable view of an [`AnnotatedResult`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary {
    pub width: u32,
    pub height: u32,
    pub angles: ArmAngles,
    pub angle_label: String,
    pub torso_color: Color,
    pub leg_color: Color,
}

/// Computes angles, garment colors and the skeleton overlay for detected poses.
#[derive(Debug, Clone, Default)]
pub struct PoseAnalyzer {
    config: AnalyzerConfig,
}

impl PoseAnalyzer {
    /// Create an analyzer with the given settings.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AnalyzerError::ConfigError`] if the settings are invalid.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze `image` using landmarks already produced by a detector.
    ///
    /// # Errors
    ///
    /// * [`crate::AnalyzerError::MissingLandmark`] if a landmark needed for the
    ///   angles, the color samples or the skeleton is absent.
    /// * [`crate::AnalyzerError::OutOfRange`] if a sampled landmark lies outside the image.
    pub fn analyze(&self, image: &RgbaImage, landmarks: &LandmarkSet) -> Result<AnnotatedResult> {
        let angles = ArmAngles::from_landmarks(landmarks)?;
        let angle_label = angles.label(self.config.angle_precision);

        let torso_color = region_color(image, landmarks, Region::Torso)?;
        let leg_color = region_color(image, landmarks, Region::Legs)?;

        verbose!("All points successfully detected");

        let (torso_stroke, leg_stroke) = if self.config.swap_region_colors {
            (leg_color, torso_color)
        } else {
            (torso_color, leg_color)
        };
        let annotated = skeleton::render(
            image,
            landmarks,
            torso_stroke,
            leg_stroke,
            self.config.stroke_width,
        )?;

        Ok(AnnotatedResult {
            image: annotated,
            angle_label,
            angles,
            torso_color,
            leg_color,
        })
    }

    /// Run `detector` on `image`, then [`analyze`](Self::analyze) the result.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::AnalyzerError::DetectionFailed`] from the detector
    /// without running the analysis, and any error from [`analyze`](Self::analyze).
    pub fn detect_and_analyze<D: PoseDetector + ?Sized>(
        &self,
        detector: &mut D,
        image: &RgbaImage,
    ) -> Result<AnnotatedResult> {
        let landmarks = detector.detect(image)?;
        self.analyze(image, &landmarks)
    }
}
