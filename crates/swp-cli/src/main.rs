//! Evaluate a curve from the command line.
//!
//! ```bash
//! # Summary of a two-segment Bezier curve
//! swp bezier -p 0,0,0 -p 1,1,0 -p 2,1,0 -p 3,0,0 -p 4,-1,0 -p 5,-1,0 -p 6,0,0
//!
//! # Samples of a circle as JSON
//! swp --format json --steps 4 circle --radius 2
//!
//! # Line-strip and frame-gizmo vertices for a curve description file
//! swp --format lines file curve.json
//! ```

use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use serde::Serialize;
use swp_core::{Tolerance, Validate};
use swp_curve::{Curve, CurveSource};
use swp_math::{dvec3, Point3};
use swp_viewer::{curve_line_strip, frame_gizmos, LineVertex, ViewerConfig};

#[derive(Debug, Parser)]
#[command(name = "swp", version, about = "Evaluate Bezier, B-spline and circle curves")]
struct Cli {
    /// Samples per segment
    #[arg(short, long, default_value_t = 16, global = true)]
    steps: u32,

    #[arg(short, long, value_enum, default_value_t = Format::Summary, global = true)]
    format: Format,

    /// Viewer config (JSON) supplying the gizmo size for `--format lines`
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    curve: CurveArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Sample count, bounds and frame check
    Summary,
    /// Every sample as JSON
    Json,
    /// Line-strip and frame-gizmo vertices as JSON
    Lines,
}

#[derive(Debug, Subcommand)]
enum CurveArg {
    /// Piecewise cubic Bezier curve through 3n+1 control points
    Bezier(PointArgs),
    /// Uniform cubic B-spline over at least 4 control points
    Bspline(PointArgs),
    /// Circle about the origin in the XY plane
    Circle {
        #[arg(short, long, default_value_t = 1.0)]
        radius: f64,
    },
    /// Curve description file, e.g. {"kind": "bezier", "points": [[0,0,0], ...]}
    File { path: PathBuf },
}

#[derive(Debug, Args)]
struct PointArgs {
    /// Control point as x,y,z; repeat in curve order
    #[arg(short = 'p', long = "point", value_parser = parse_point, allow_hyphen_values = true)]
    points: Vec<Point3>,
}

fn parse_point(text: &str) -> Result<Point3, String> {
    let coords = text
        .split(',')
        .map(|c| c.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid coordinate in '{}': {}", text, e))?;
    match coords[..] {
        [x, y, z] => Ok(dvec3(x, y, z)),
        _ => Err(format!("expected x,y,z but got '{}'", text)),
    }
}

fn source(curve: CurveArg) -> Result<CurveSource, Box<dyn Error>> {
    Ok(match curve {
        CurveArg::Bezier(args) => CurveSource::Bezier { points: args.points },
        CurveArg::Bspline(args) => CurveSource::Bspline { points: args.points },
        CurveArg::Circle { radius } => CurveSource::Circle { radius },
        CurveArg::File { path } => {
            info!("reading curve description from {}", path.display());
            let text = std::fs::read_to_string(&path)?;
            serde_json::from_str(&text)
                .map_err(|e| format!("{}: invalid curve description: {}", path.display(), e))?
        }
    })
}

#[derive(Serialize)]
struct Lines {
    strip: Vec<LineVertex>,
    gizmos: Vec<LineVertex>,
}

fn print_summary(name: &str, steps: u32, curve: &Curve) {
    let per_segment = steps as usize + 1;
    println!(
        "{}: {} samples ({} x {})",
        name,
        curve.len(),
        curve.len() / per_segment,
        per_segment
    );
    if let Some(bounds) = curve.bounds() {
        println!("bounds: min {} max {}", bounds.min, bounds.max);
    }
    let closed = curve.is_closed(Tolerance::loose());
    println!("closed: {}", if closed { "yes" } else { "no" });
    match curve.validate(Tolerance::loose()) {
        Ok(()) => println!("frames: orthonormal"),
        Err(e) => println!("frames: {}", e),
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };
    let source = source(cli.curve)?;
    let name = match &source {
        CurveSource::Bezier { .. } => "bezier",
        CurveSource::Bspline { .. } => "bspline",
        CurveSource::Circle { .. } => "circle",
    };
    let curve = source.evaluate(cli.steps)?;

    match cli.format {
        Format::Summary => print_summary(name, cli.steps, &curve),
        Format::Json => println!("{}", serde_json::to_string_pretty(&curve)?),
        Format::Lines => {
            let lines = Lines {
                strip: curve_line_strip(&curve),
                gizmos: frame_gizmos(&curve, config.frame_size),
            };
            println!("{}", serde_json::to_string(&lines)?);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("1, -2.5,3").unwrap(), dvec3(1.0, -2.5, 3.0));
        assert!(parse_point("1,2").is_err());
        assert!(parse_point("1,2,x").is_err());
    }

    #[test]
    fn test_cli_parses_bezier_points() {
        let cli = Cli::try_parse_from([
            "swp", "--steps", "4", "bezier", "-p", "0,0,0", "-p", "1,1,0", "-p", "2,1,0", "-p",
            "3,-1,0",
        ])
        .unwrap();
        assert_eq!(cli.steps, 4);
        match cli.curve {
            CurveArg::Bezier(args) => assert_eq!(args.points.len(), 4),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_invalid_count_fails_run() {
        let cli = Cli::try_parse_from([
            "swp", "bezier", "-p", "0,0,0", "-p", "1,1,0", "-p", "2,1,0", "-p", "3,0,0", "-p",
            "4,0,0",
        ])
        .unwrap();
        let err = run(cli).unwrap_err();
        assert!(err.to_string().contains("5 control points"), "{}", err);
    }

    #[test]
    fn test_circle_runs() {
        let cli = Cli::try_parse_from(["swp", "circle", "--radius", "2", "--steps", "4"]).unwrap();
        assert_eq!(cli.format, Format::Summary);
        run(cli).unwrap();
    }
}
