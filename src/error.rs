// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the pose analysis library.

use std::fmt;

use crate::landmark::Landmark;

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Main error type for the pose analysis library.
#[derive(Debug)]
pub enum AnalyzerError {
    /// A landmark required by the operation was not detected.
    MissingLandmark(Landmark),
    /// A sampling coordinate fell outside the image.
    OutOfRange {
        /// Requested x coordinate.
        x: f32,
        /// Requested y coordinate.
        y: f32,
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
    },
    /// An argument violated a precondition (e.g. empty color sequence).
    InvalidArgument(String),
    /// The external pose detector did not produce landmarks.
    DetectionFailed(String),
    /// Error decoding or encoding images.
    ImageError(String),
    /// Invalid configuration provided.
    ConfigError(String),
    /// Visualizer error.
    VisualizerError(String),
    /// Wrapped `std::io::Error`
    Io(std::io::Error),
}

impl fmt::Display for AnalyzerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLandmark(landmark) => write!(f, "Missing landmark: {landmark}"),
            Self::OutOfRange {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "Out of range: ({x}, {y}) is outside the {width}x{height} image"
            ),
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            Self::DetectionFailed(msg) => write!(f, "Detection failed: {msg}"),
            Self::ImageError(msg) => write!(f, "Image error: {msg}"),
            Self::ConfigError(msg) => write!(f, "Config error: {msg}"),
            Self::VisualizerError(msg) => write!(f, "Visualizer error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for AnalyzerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AnalyzerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<image::ImageError> for AnalyzerError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalyzerError::MissingLandmark(Landmark::LeftKnee);
        assert_eq!(err.to_string(), "Missing landmark: left_knee");

        let err = AnalyzerError::InvalidArgument("test".to_string());
        assert_eq!(err.to_string(), "Invalid argument: test");

        let err = AnalyzerError::OutOfRange {
            x: 120.5,
            y: 3.0,
            width: 100,
            height: 50,
        };
        assert_eq!(
            err.to_string(),
            "Out of range: (120.5, 3) is outside the 100x50 image"
        );
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error;

        let err = AnalyzerError::from(std::io::Error::other("disk"));
        assert!(err.source().is_some());
        assert!(AnalyzerError::DetectionFailed("x".into()).source().is_none());
    }
}
