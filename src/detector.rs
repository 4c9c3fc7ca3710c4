// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Pose detector seam.
//!
//! Landmark extraction is done by an external pose-estimation model. This module
//! defines the [`PoseDetector`] trait the analyzer consumes, plus two simple
//! implementations: [`LandmarkFile`], which reads landmarks exported by a model as
//! JSON, and [`StaticDetector`], which returns a fixed set.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::{AnalyzerError, Result};
use crate::landmark::{Landmark, LandmarkSet, Point2D};
use crate::verbose;

/// Source of body landmarks for an image.
pub trait PoseDetector {
    /// Detect landmarks in `image`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::DetectionFailed`] if no pose could be extracted.
    fn detect(&mut self, image: &RgbaImage) -> Result<LandmarkSet>;
}

/// Detector that returns the same landmarks for every image.
#[derive(Debug, Clone, Default)]
pub struct StaticDetector {
    landmarks: LandmarkSet,
}

impl StaticDetector {
    #[must_use]
    pub const fn new(landmarks: LandmarkSet) -> Self {
        Self { landmarks }
    }
}

impl PoseDetector for StaticDetector {
    fn detect(&mut self, _image: &RgbaImage) -> Result<LandmarkSet> {
        if self.landmarks.is_empty() {
            return Err(AnalyzerError::DetectionFailed(
                "no landmarks available".to_string(),
            ));
        }
        Ok(self.landmarks.clone())
    }
}

/// Detector backed by a JSON file of landmark positions.
///
/// The file holds one object mapping landmark names to pixel positions:
///
/// ```json
/// {
///   "left_shoulder": { "x": 120.5, "y": 88.0 },
///   "RIGHT_SHOULDER": { "x": 190.0, "y": 90.25 },
///   "nose": { "x": 150.0, "y": 40.0 }
/// }
/// ```
///
/// Names are matched case-insensitively; names the analyzer does not use
/// (such as `nose` above) are skipped.
#[derive(Debug, Clone)]
pub struct LandmarkFile {
    path: PathBuf,
}

impl LandmarkFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the landmark file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse landmark JSON.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::DetectionFailed`] for malformed JSON, when two keys
    /// name the same landmark (e.g. `left_shoulder` and `LEFT_SHOULDER`), or when no
    /// recognized landmark is present.
    pub fn parse(json: &str) -> Result<LandmarkSet> {
        let raw: BTreeMap<String, Point2D> = serde_json::from_str(json)
            .map_err(|e| AnalyzerError::DetectionFailed(format!("invalid landmark JSON: {e}")))?;

        let mut landmarks = LandmarkSet::new();
        for (name, point) in raw {
            match name.parse::<Landmark>() {
                Ok(landmark) if landmarks.contains(landmark) => {
                    return Err(AnalyzerError::DetectionFailed(format!(
                        "landmark {landmark} given more than once (\"{name}\")"
                    )));
                }
                Ok(landmark) => landmarks.insert(landmark, point),
                Err(e) => verbose!("Skipping {e}"),
            }
        }

        if landmarks.is_empty() {
            return Err(AnalyzerError::DetectionFailed(
                "no recognized landmarks in input".to_string(),
            ));
        }
        Ok(landmarks)
    }
}

impl PoseDetector for LandmarkFile {
    fn detect(&mut self, _image: &RgbaImage) -> Result<LandmarkSet> {
        let json = fs::read_to_string(&self.path).map_err(|e| {
            AnalyzerError::DetectionFailed(format!(
                "cannot read landmarks from {}: {e}",
                self.path.display()
            ))
        })?;
        Self::parse(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_aliases_and_skips_unknown() {
        let json = r#"{
            "left_shoulder": {"x": 1.0, "y": 2.0},
            "RIGHT_ANKLE": {"x": 3.5, "y": 4.5},
            "nose": {"x": 0.0, "y": 0.0}
        }"#;
        let set = LandmarkFile::parse(json).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(Landmark::LeftShoulder), Some(Point2D::new(1.0, 2.0)));
        assert_eq!(set.get(Landmark::RightAnkle), Some(Point2D::new(3.5, 4.5)));
    }

    #[test]
    fn test_parse_failures() {
        assert!(matches!(
            LandmarkFile::parse("not json"),
            Err(AnalyzerError::DetectionFailed(_))
        ));
        assert!(matches!(
            LandmarkFile::parse(r#"{"nose": {"x": 1, "y": 1}}"#),
            Err(AnalyzerError::DetectionFailed(_))
        ));
    }

    #[test]
    fn test_parse_rejects_duplicate_spellings() {
        let json = r#"{
            "left_shoulder": {"x": 1.0, "y": 2.0},
            "LEFT_SHOULDER": {"x": 9.0, "y": 9.0}
        }"#;
        match LandmarkFile::parse(json) {
            Err(AnalyzerError::DetectionFailed(msg)) => assert!(msg.contains("left_shoulder")),
            other => panic!("expected duplicate landmark failure, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_detection_failure() {
        let mut detector = LandmarkFile::new("/nonexistent/pose-estimator/landmarks.json");
        let img = RgbaImage::new(1, 1);
        assert!(matches!(
            detector.detect(&img),
            Err(AnalyzerError::DetectionFailed(_))
        ));
    }

    #[test]
    fn test_static_detector() {
        let img = RgbaImage::new(1, 1);
        let set = LandmarkSet::new().with(Landmark::LeftHip, (0.0, 0.0));
        assert_eq!(StaticDetector::new(set.clone()).detect(&img).unwrap(), set);
        assert!(StaticDetector::default().detect(&img).is_err());
    }
}
