mod layout;
mod recenter;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::layout::ScaleRatio;
use crate::recenter::{recenter_in_place, RecenterError};

/// Where the icon export step writes the asset; a plain `icon-recenter`
/// run rewrites it in place.
const DEFAULT_ICON_PATH: &str = "assets/images/adaptive-icon.png";

#[derive(Debug, Parser)]
#[command(
    name = "icon-recenter",
    version,
    about = "Shrink an icon's content and re-center it on a transparent canvas so it survives adaptive-icon masking"
)]
struct Cli {
    /// Image file to rewrite in place
    #[arg(default_value = DEFAULT_ICON_PATH)]
    path: PathBuf,

    /// Fraction of the canvas the content should occupy, in (0, 1]
    #[arg(
        long,
        value_parser = parse_scale,
        default_value_t = ScaleRatio::DEFAULT,
        conflicts_with = "padding"
    )]
    scale: ScaleRatio,

    /// Fraction to free up around the content instead, in [0, 1)
    #[arg(long, value_parser = parse_padding)]
    padding: Option<ScaleRatio>,
}

fn parse_scale(s: &str) -> Result<ScaleRatio, String> {
    let value: f64 = s.parse().map_err(|_| format!("not a number: {s}"))?;
    ScaleRatio::new(value).map_err(|e| e.to_string())
}

fn parse_padding(s: &str) -> Result<ScaleRatio, String> {
    let value: f64 = s.parse().map_err(|_| format!("not a number: {s}"))?;
    if !(0.0..1.0).contains(&value) {
        return Err(format!("padding must be in [0, 1), got {value}"));
    }
    ScaleRatio::from_padding(value).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    env_logger::init(); // Initialize logger

    let cli = Cli::parse();
    let scale = cli.padding.unwrap_or(cli.scale);

    println!("Processing {} with scale {}...", cli.path.display(), scale);
    match recenter_in_place(&cli.path, scale) {
        Ok(()) => println!(
            "Success! Scaled content to {}% of original size.",
            scale.percent()
        ),
        Err(err @ RecenterError::FileNotFound(_)) => println!("{err}"),
        Err(err) => println!("Error: {err}"),
    }

    // Failures were already reported; the process always exits cleanly.
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn default_path_and_scale() {
        let cli = Cli::parse_from(["icon-recenter"]);
        assert_eq!(cli.path, PathBuf::from("assets/images/adaptive-icon.png"));
        assert_eq!(cli.scale.percent(), 65);
        assert!(cli.padding.is_none());
    }

    #[test]
    fn padding_resolves_to_the_complement_scale() {
        let cli = Cli::parse_from(["icon-recenter", "--padding", "0.35"]);
        let scale = cli.padding.unwrap_or(cli.scale);
        assert!((scale.get() - 0.65).abs() < 1e-12);
        assert_eq!(scale.percent(), 65);
    }

    #[test]
    fn scale_and_padding_conflict() {
        let result = Cli::try_parse_from(["icon-recenter", "--scale", "0.5", "--padding", "0.5"]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(Cli::try_parse_from(["icon-recenter", "--scale", "0"]).is_err());
        assert!(Cli::try_parse_from(["icon-recenter", "--scale", "1.5"]).is_err());
        assert!(Cli::try_parse_from(["icon-recenter", "--padding", "1"]).is_err());
        assert!(Cli::try_parse_from(["icon-recenter", "--padding=-0.1"]).is_err());
        assert!(Cli::try_parse_from(["icon-recenter", "--scale", "0.5"]).is_ok());
    }

    #[test]
    fn accepts_an_explicit_path() {
        let cli = Cli::parse_from(["icon-recenter", "build/icon.png", "--scale", "0.5"]);
        assert_eq!(cli.path, PathBuf::from("build/icon.png"));
        assert_eq!(cli.scale.percent(), 50);
    }
}
