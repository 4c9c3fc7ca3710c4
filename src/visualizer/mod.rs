// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Colors, skeleton rendering and result display.

/// Color type and averaging.
pub mod color;

/// Skeleton topology and rendering.
pub mod skeleton;

#[cfg(feature = "visualize")]
pub mod viewer;

pub use color::{Color, average_color};
pub use skeleton::{SKELETON, render};

#[cfg(feature = "visualize")]
pub use viewer::Viewer;
