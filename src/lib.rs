// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]

//! # Pose Estimator
//!
//! Arm angles, garment colors and skeleton overlays from body landmarks.
//!
//! Landmark extraction is left to an external pose-estimation model. Given a
//! photo and the landmarks found in it, this crate:
//!
//! - computes the arm-raise angle (hip, shoulder, wrist) on each side,
//! - estimates the shirt and trouser colors by averaging the pixels under the
//!   shoulders/hips and knees/ankles,
//! - draws a skeleton of straight lines between the landmarks onto a copy of the photo.
//!
//! ## Quick Start (Library)
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use pose_estimator::{Landmark, LandmarkSet, PoseAnalyzer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let photo = RgbaImage::from_pixel(100, 100, Rgba([90, 60, 30, 255]));
//! let landmarks = LandmarkSet::new()
//!     .with(Landmark::LeftShoulder, (30.0, 30.0))
//!     .with(Landmark::RightShoulder, (70.0, 30.0))
//!     .with(Landmark::LeftHip, (30.0, 60.0))
//!     .with(Landmark::RightHip, (70.0, 60.0))
//!     .with(Landmark::LeftKnee, (30.0, 80.0))
//!     .with(Landmark::RightKnee, (70.0, 80.0))
//!     .with(Landmark::LeftAnkle, (30.0, 95.0))
//!     .with(Landmark::RightAnkle, (70.0, 95.0))
//!     .with(Landmark::LeftWrist, (10.0, 30.0))
//!     .with(Landmark::RightWrist, (70.0, 10.0));
//!
//! let result = PoseAnalyzer::default().analyze(&photo, &landmarks)?;
//! assert_eq!(result.angle_label, "Left angle:90.0\nRight angle:180.0");
//! # Ok(())
//! # }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Print angles and colors
//! pose-estimator analyze --image photo.jpg --landmarks pose.json
//!
//! # Save the annotated image to runs/pose/analyze
//! pose-estimator analyze -i photo.jpg -l pose.json --save
//!
//! # JSON summary, explicit output path
//! pose-estimator analyze -i photo.jpg -l pose.json -o annotated.png --json
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`analyzer`] | [`PoseAnalyzer`] running the full analysis |
//! | [`geometry`] | [`angle_between`] and [`ArmAngles`] |
//! | [`sampler`] | Pixel sampling at landmarks, region colors |
//! | [`visualizer`] | [`Color`], averaging, skeleton rendering, viewer window |
//! | [`landmark`] | [`Landmark`], [`LandmarkSet`], [`Point2D`] |
//! | [`detector`] | [`PoseDetector`] seam and [`LandmarkFile`] |
//! | [`config`] | [`AnalyzerConfig`] |
//! | [`annotate`] | Image loading and saving |
//! | [`error`] | Error types ([`AnalyzerError`], [`Result`]) |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `visualize` | Window display of annotated results (default) |

// Modules
pub mod analyzer;
pub mod annotate;
pub mod cli;
pub mod config;
pub mod detector;
pub mod error;
pub mod geometry;
pub mod landmark;
pub mod sampler;
pub mod visualizer;

// Re-export main types for convenience
pub use analyzer::{AnalysisSummary, AnnotatedResult, PoseAnalyzer};
pub use config::AnalyzerConfig;
pub use detector::{LandmarkFile, PoseDetector, StaticDetector};
pub use error::{AnalyzerError, Result};
pub use geometry::{ArmAngles, angle_between, angle_label};
pub use landmark::{Landmark, LandmarkSet, Point2D};
pub use sampler::{Region, region_color, sample_pixel};
pub use visualizer::{Color, average_color};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
