// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Joint angle computation.

use serde::Serialize;

use crate::error::Result;
use crate::landmark::{Landmark, LandmarkSet, Point2D};

/// Non-reflex angle at `vertex` between the rays towards `start` and `end`, in degrees.
///
/// The directed angle of each vector is taken with `atan2(dy, dx)` in image
/// coordinates, and the absolute difference is folded into `[0, 180]`.
///
/// A zero-length vector (`start == vertex` or `end == vertex`) has `atan2(0, 0) == 0`,
/// so the result is then the angle of the other vector alone.
///
/// # Examples
///
/// ```
/// use pose_estimator::{Point2D, angle_between};
///
/// let angle = angle_between(
///     Point2D::new(1.0, 0.0),
///     Point2D::new(0.0, 0.0),
///     Point2D::new(0.0, 1.0),
/// );
/// assert!((angle - 90.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn angle_between(start: Point2D, vertex: Point2D, end: Point2D) -> f64 {
    let end_angle = f64::from(end.y - vertex.y).atan2(f64::from(end.x - vertex.x));
    let start_angle = f64::from(start.y - vertex.y).atan2(f64::from(start.x - vertex.x));

    let angle = (end_angle - start_angle).to_degrees().abs();
    if angle > 180.0 { 360.0 - angle } else { angle }
}

/// Arm-raise angles (hip, shoulder, wrist) for both sides of the body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArmAngles {
    /// Left hip, shoulder, wrist angle in degrees.
    pub left: f64,
    /// Right hip, shoulder, wrist angle in degrees.
    pub right: f64,
}

impl ArmAngles {
    /// Compute both arm angles from a landmark set.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AnalyzerError::MissingLandmark`] for the first absent
    /// hip, shoulder or wrist (left side first).
    pub fn from_landmarks(landmarks: &LandmarkSet) -> Result<Self> {
        let left = angle_between(
            landmarks.require(Landmark::LeftHip)?,
            landmarks.require(Landmark::LeftShoulder)?,
            landmarks.require(Landmark::LeftWrist)?,
        );
        let right = angle_between(
            landmarks.require(Landmark::RightHip)?,
            landmarks.require(Landmark::RightShoulder)?,
            landmarks.require(Landmark::RightWrist)?,
        );
        Ok(Self { left, right })
    }

    /// Two-line display label, see [`angle_label`].
    #[must_use]
    pub fn label(&self, precision: usize) -> String {
        angle_label(self, precision)
    }
}

/// Format arm angles as `"Left angle:<L>\nRight angle:<R>"` with `precision` decimals.
#[must_use]
pub fn angle_label(angles: &ArmAngles, precision: usize) -> String {
    format!(
        "Left angle:{:.precision$}\nRight angle:{:.precision$}",
        angles.left, angles.right
    )
}
