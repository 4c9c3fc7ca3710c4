// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Body landmark definitions.
//!
//! A [`LandmarkSet`] is what an external pose detector hands to this crate: a
//! mapping from the named body parts the analyzer cares about to their pixel
//! positions in the source image. Any entry may be absent.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AnalyzerError, Result};

/// A landmark position in image pixel coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point2D {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<Point2D> for (f32, f32) {
    fn from(p: Point2D) -> Self {
        (p.x, p.y)
    }
}

/// Named body parts used by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Landmark {
    LeftShoulder,
    RightShoulder,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
    LeftWrist,
    RightWrist,
}

impl Landmark {
    /// Every landmark, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
        Self::LeftWrist,
        Self::RightWrist,
    ];

    /// Returns the `snake_case` name used in landmark files and messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
        }
    }
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Landmark {
    type Err = LandmarkParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        // Accepts `left_shoulder`, `LEFT_SHOULDER` and `left-shoulder`.
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|landmark| landmark.as_str() == normalized)
            .ok_or_else(|| LandmarkParseError(s.to_string()))
    }
}

/// Error returned when parsing an unknown landmark name.
#[derive(Debug, Clone)]
pub struct LandmarkParseError(String);

impl fmt::Display for LandmarkParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown landmark '{}'", self.0)
    }
}

impl std::error::Error for LandmarkParseError {}

/// Landmark positions produced by one detection call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkSet {
    points: BTreeMap<Landmark, Point2D>,
}

impl LandmarkSet {
    /// Create an empty landmark set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, landmark: Landmark, point: impl Into<Point2D>) -> Self {
        self.insert(landmark, point);
        self
    }

    /// Insert or replace a landmark position.
    pub fn insert(&mut self, landmark: Landmark, point: impl Into<Point2D>) {
        self.points.insert(landmark, point.into());
    }

    /// Position of `landmark`, if it was detected.
    #[must_use]
    pub fn get(&self, landmark: Landmark) -> Option<Point2D> {
        self.points.get(&landmark).copied()
    }

    /// Position of `landmark`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::MissingLandmark`] if it was not detected.
    pub fn require(&self, landmark: Landmark) -> Result<Point2D> {
        self.get(landmark)
            .ok_or(AnalyzerError::MissingLandmark(landmark))
    }

    /// Whether `landmark` was detected.
    #[must_use]
    pub fn contains(&self, landmark: Landmark) -> bool {
        self.points.contains_key(&landmark)
    }

    /// The first landmark of `required` that is absent from this set.
    #[must_use]
    pub fn first_missing(&self, required: impl IntoIterator<Item = Landmark>) -> Option<Landmark> {
        required.into_iter().find(|l| !self.contains(*l))
    }

    /// Number of detected landmarks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over detected landmarks in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Landmark, Point2D)> + '_ {
        self.points.iter().map(|(l, p)| (*l, *p))
    }
}

impl FromIterator<(Landmark, Point2D)> for LandmarkSet {
    fn from_iter<I: IntoIterator<Item = (Landmark, Point2D)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
