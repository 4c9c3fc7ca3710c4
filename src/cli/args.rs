// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use crate::config::{DEFAULT_ANGLE_PRECISION, DEFAULT_STROKE_WIDTH};
use clap::{Args, Parser, Subcommand};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Analyze Options:
    --image, -i <IMAGE>          Photo to annotate
    --landmarks, -l <LANDMARKS>  JSON file with detected landmark positions
    --stroke-width <WIDTH>       Skeleton line thickness in pixels [default: 3]
    --precision <DIGITS>         Decimals in the angle label [default: 1]
    --swap-colors                Draw torso lines in the trouser color and leg lines in the shirt color
    --save                       Save the annotated image to runs/pose/analyze
    --output, -o <PATH>          Save the annotated image to an explicit path
    --show                       Display the result in a window
    --json                       Print a JSON summary instead of text
    --verbose                    Show verbose output

Examples:
    pose-estimator analyze --image photo.jpg --landmarks pose.json
    pose-estimator analyze -i photo.jpg -l pose.json --save --stroke-width 5
    pose-estimator analyze -i photo.jpg -l pose.json -o annotated.png --json
    pose-estimator analyze -i photo.jpg -l pose.json --show --swap-colors"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Measure arm angles and garment colors, and draw the skeleton
    Analyze(AnalyzeArgs),
}

/// Arguments for the analyze command.
#[derive(Args, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct AnalyzeArgs {
    /// Photo to annotate
    #[arg(short, long)]
    pub image: String,

    /// JSON file with landmark positions produced by a pose detector
    #[arg(short, long)]
    pub landmarks: String,

    /// Skeleton line thickness in pixels
    #[arg(long, default_value_t = DEFAULT_STROKE_WIDTH)]
    pub stroke_width: f32,

    /// Decimals in the angle label
    #[arg(long, default_value_t = DEFAULT_ANGLE_PRECISION)]
    pub precision: usize,

    /// Draw torso lines in the trouser color and leg lines in the shirt color
    #[arg(long, default_value_t = false)]
    pub swap_colors: bool,

    /// Save the annotated image to runs/pose/analyze
    #[arg(long, default_value_t = false)]
    pub save: bool,

    /// Save the annotated image to this path
    #[arg(short, long)]
    pub output: Option<String>,

    /// Display the result in a window
    #[arg(long, default_value_t = false)]
    pub show: bool,

    /// Print a JSON summary instead of text
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}
