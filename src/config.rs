// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Analyzer configuration.
//!
//! This module defines the [`AnalyzerConfig`] struct, which controls how the
//! skeleton overlay is drawn and how the angle label is formatted.

use crate::error::{AnalyzerError, Result};

/// Default line thickness in pixels.
pub const DEFAULT_STROKE_WIDTH: f32 = 3.0;

/// Default number of decimals in the angle label.
pub const DEFAULT_ANGLE_PRECISION: usize = 1;

/// Configuration for pose analysis.
///
/// It uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use pose_estimator::AnalyzerConfig;
///
/// let config = AnalyzerConfig::new()
///     .with_stroke_width(5.0)
///     .with_angle_precision(2)
///     .with_swapped_colors(true);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Skeleton line thickness in pixels.
    pub stroke_width: f32,
    /// Decimal places used when formatting angles in the label.
    pub angle_precision: usize,
    /// Draw torso segments in the leg color and leg segments in the torso color.
    /// Lines then contrast with the garment they cross.
    pub swap_region_colors: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
            angle_precision: DEFAULT_ANGLE_PRECISION,
            swap_region_colors: false,
        }
    }
}

impl AnalyzerConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the skeleton line thickness.
    ///
    /// # Arguments
    ///
    /// * `width` - Stroke width in pixels. Must be positive.
    #[must_use]
    pub const fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set the number of decimals shown for each angle.
    #[must_use]
    pub const fn with_angle_precision(mut self, precision: usize) -> Self {
        self.angle_precision = precision;
        self
    }

    /// Swap the torso and leg line colors.
    #[must_use]
    pub const fn with_swapped_colors(mut self, swap: bool) -> Self {
        self.swap_region_colors = swap;
        self
    }

    /// Check that the settings are usable.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::ConfigError`] if the stroke width is not a positive
    /// finite number.
    pub fn validate(&self) -> Result<()> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(AnalyzerError::ConfigError(format!(
                "stroke_width must be a positive number, got {}",
                self.stroke_width
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = AnalyzerConfig::default();
        assert!((config.stroke_width - 3.0).abs() < f32::EPSILON);
        assert_eq!(config.angle_precision, 1);
        assert!(!config.swap_region_colors);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = AnalyzerConfig::new()
            .with_stroke_width(1.5)
            .with_angle_precision(3)
            .with_swapped_colors(true);

        assert!((config.stroke_width - 1.5).abs() < f32::EPSILON);
        assert_eq!(config.angle_precision, 3);
        assert!(config.swap_region_colors);
    }

    #[test]
    fn test_config_validate() {
        assert!(AnalyzerConfig::new().with_stroke_width(0.0).validate().is_err());
        assert!(
            AnalyzerConfig::new()
                .with_stroke_width(f32::INFINITY)
                .validate()
                .is_err()
        );
    }
}
