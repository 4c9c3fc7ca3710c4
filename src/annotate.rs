// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Loading source photos and saving annotated results.

use std::fs;
use std::path::Path;

use image::RgbaImage;

use crate::error::Result;

/// Find the next available run directory (analyze, analyze2, analyze3, etc.)
pub fn find_next_run_dir(base: &str, prefix: &str) -> String {
    let base_path = Path::new(base);

    // First try without number
    let first = base_path.join(prefix);
    if !first.exists() {
        return first.to_string_lossy().to_string();
    }

    for i in 2.. {
        let numbered = base_path.join(format!("{prefix}{i}"));
        if !numbered.exists() {
            return numbered.to_string_lossy().to_string();
        }
    }

    // Fallback (should never reach here)
    base_path.join(prefix).to_string_lossy().to_string()
}

/// Decode an image file into 8-bit RGBA.
///
/// # Errors
///
/// Returns [`crate::AnalyzerError::ImageError`] if the file cannot be opened or decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    Ok(image::open(path)?.to_rgba8())
}

/// Encode `image` to `path`, creating parent directories as needed.
///
/// The format is chosen from the file extension. Formats without an alpha
/// channel (JPEG, BMP) receive the RGB channels only.
///
/// # Errors
///
/// Returns an IO error if the directory cannot be created, or an image error if
/// encoding fails.
pub fn save_image<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let is_rgb_only = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .is_some_and(|ext| matches!(ext.as_str(), "jpg" | "jpeg" | "bmp"));

    if is_rgb_only {
        image::DynamicImage::ImageRgba8(image.clone())
            .to_rgb8()
            .save(path)?;
    } else {
        image.save(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "pose-estimator-{name}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_find_next_run_dir() {
        let base = scratch_dir("runs");
        let base_str = base.to_string_lossy().to_string();

        let first = find_next_run_dir(&base_str, "analyze");
        assert!(first.ends_with("analyze"));

        fs::create_dir_all(&first).unwrap();
        let second = find_next_run_dir(&base_str, "analyze");
        assert!(second.ends_with("analyze2"));

        fs::remove_dir_all(&base).unwrap();
    }

    #[test]
    fn test_save_and_load_png() {
        let dir = scratch_dir("png");
        let path = dir.join("nested").join("out.png");

        let img = RgbaImage::from_pixel(3, 2, Rgba([1, 2, 3, 200]));
        save_image(&img, &path).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded, img);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_image("/nonexistent/pose-estimator/photo.png"),
            Err(crate::AnalyzerError::ImageError(_))
        ));
    }
}
