// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use crate::analyzer::{AnnotatedResult, PoseAnalyzer};
use crate::annotate::{find_next_run_dir, load_image, save_image};
use crate::cli::args::AnalyzeArgs;
use crate::config::AnalyzerConfig;
use crate::detector::LandmarkFile;
use crate::error::Result;
use crate::{VERSION, error, info, section, success, verbose, warn};

#[cfg(feature = "visualize")]
use crate::visualizer::Viewer;

/// Run the analyze command, exiting the process on failure.
pub fn run_analysis(args: &AnalyzeArgs) {
    crate::cli::logging::set_verbose(args.verbose && !args.json);

    verbose!("Pose Estimator {VERSION} 🚀 image={} landmarks={}", args.image, args.landmarks);

    let result = match analyze(args) {
        Ok(result) => result,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&result.summary()) {
            Ok(json) => info!("{json}"),
            Err(e) => {
                error!("Failed to serialize summary: {e}");
                process::exit(1);
            }
        }
    } else {
        section!("Results");
        info!("{}", result.angle_label);
        info!("Shirt color: {}", result.torso_color.to_hex());
        info!("Trouser color: {}", result.leg_color.to_hex());
    }

    for path in output_paths(args) {
        if let Err(e) = save_image(&result.image, &path) {
            error!("Failed to save {}: {e}", path.display());
            process::exit(1);
        }
        if !args.json {
            success!("Saved annotated image to {}", path.display());
        }
    }

    if args.show {
        show(&result);
    }
}

/// Load the image, read the landmarks and analyze.
fn analyze(args: &AnalyzeArgs) -> Result<AnnotatedResult> {
    let config = AnalyzerConfig::new()
        .with_stroke_width(args.stroke_width)
        .with_angle_precision(args.precision)
        .with_swapped_colors(args.swap_colors);
    let analyzer = PoseAnalyzer::new(config)?;

    let start = Instant::now();
    let image = load_image(&args.image)?;
    let (width, height) = image.dimensions();
    verbose!("image {}: {width}x{height}", args.image);

    let mut detector = LandmarkFile::new(&args.landmarks);
    let result = analyzer.detect_and_analyze(&mut detector, &image)?;
    verbose!("Analysis done in {:.1}ms", start.elapsed().as_secs_f64() * 1000.0);

    Ok(result)
}

/// Destinations requested through `--output` and `--save`.
fn output_paths(args: &AnalyzeArgs) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = args.output.iter().map(PathBuf::from).collect();

    if args.save {
        let dir = PathBuf::from(find_next_run_dir("runs/pose", "analyze"));
        let file_name = PathBuf::from(&args.image)
            .file_stem()
            .map_or_else(|| "image".to_string(), |s| s.to_string_lossy().to_string());
        paths.push(dir.join(format!("{file_name}.png")));
    }
    paths
}

#[cfg(feature = "visualize")]
fn show(result: &AnnotatedResult) {
    let (width, height) = result.image.dimensions();
    let mut viewer = match Viewer::new("Pose Estimator", width as usize, height as usize) {
        Ok(v) => v,
        Err(e) => {
            warn!("{e}");
            return;
        }
    };
    match viewer.update(&result.image) {
        Ok(true) => viewer.wait(None),
        Ok(false) => {}
        Err(e) => warn!("{e}"),
    }
}

#[cfg(not(feature = "visualize"))]
fn show(_result: &AnnotatedResult) {
    warn!("--show requires the 'visualize' feature. Compile with --features visualize to enable it.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{Cli, Commands};
    use clap::Parser;

    fn parse(extra: &[&str]) -> AnalyzeArgs {
        let mut argv = vec!["app", "analyze", "-i", "dir/photo.jpg", "-l", "pose.json"];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Commands::Analyze(args) => args,
        }
    }

    #[test]
    fn test_output_paths() {
        assert!(output_paths(&parse(&[])).is_empty());

        let paths = output_paths(&parse(&["-o", "out.png"]));
        assert_eq!(paths, vec![PathBuf::from("out.png")]);

        let paths = output_paths(&parse(&["--save"]));
        assert_eq!(paths.len(), 1);
        assert!(paths[0].ends_with("photo.png"));
        assert!(paths[0].starts_with("runs/pose"));
    }

    #[test]
    fn test_analyze_reports_missing_image() {
        let err = analyze(&parse(&[])).unwrap_err();
        assert!(matches!(err, crate::AnalyzerError::ImageError(_)));
    }
}
