use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use parabolic_throw::core::report::{frame_status, summary_lines};
use parabolic_throw::{
    HitDetection, Playback, SolverConfig, TargetSpec, ThrowParameters, compute_trajectory_with,
};

mod plot;

const LOG_FILTER: &str = "info";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Detection {
    /// First contained sample, landing sample excluded
    Sampled,
    /// First contained sample, landing sample included
    Landing,
    /// Segment clipping between samples
    Swept,
}

impl From<Detection> for HitDetection {
    fn from(value: Detection) -> Self {
        match value {
            Detection::Sampled => Self::Sampled,
            Detection::Landing => Self::SampledWithLanding,
            Detection::Swept => Self::Swept,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Rock throw trajectory calculator", long_about = None)]
struct Args {
    /// Throwing speed (m/s)
    #[arg(short = 'v', long, default_value_t = 20.0)]
    speed: f64,

    /// Throwing angle (degrees)
    #[arg(short = 'a', long, default_value_t = 45.0, allow_negative_numbers = true)]
    angle: f64,

    /// Release height (m)
    #[arg(long, default_value_t = 1.5, allow_negative_numbers = true)]
    height: f64,

    /// Gravity (m/s^2)
    #[arg(short = 'g', long, default_value_t = 9.8, allow_negative_numbers = true)]
    gravity: f64,

    /// Rock radius (m)
    #[arg(long, default_value_t = 0.2)]
    radius: f64,

    /// Enable the target with default geometry
    #[arg(long)]
    target: bool,

    /// Target near-edge distance (m); enables the target
    #[arg(long)]
    target_distance: Option<f64>,

    /// Target width (m); enables the target
    #[arg(long)]
    target_width: Option<f64>,

    /// Target height (m); enables the target
    #[arg(long)]
    target_height: Option<f64>,

    /// Number of trajectory samples
    #[arg(short = 'n', long, default_value_t = parabolic_throw::core::target::DEFAULT_SAMPLE_COUNT)]
    samples: usize,

    /// Target hit detection
    #[arg(long, value_enum, default_value_t = Detection::Sampled)]
    detection: Detection,

    /// Replay this many frames to stdout
    #[arg(long)]
    replay: Option<usize>,

    /// Pace the replay at the frame interval instead of printing at once
    #[arg(long, requires = "replay")]
    realtime: bool,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,

    /// Write a PNG plot into this directory (current directory if omitted)
    #[arg(long, num_args = 0..=1, default_missing_value = ".")]
    plot: Option<PathBuf>,

    /// Ask for speed, angle and height on stdin
    #[arg(long)]
    prompt: bool,
}

impl Args {
    fn throw_parameters(&self) -> ThrowParameters {
        ThrowParameters {
            speed_mps: self.speed,
            angle_deg: self.angle,
            release_height_m: self.height,
            gravity_mps2: self.gravity,
            projectile_radius_m: self.radius,
        }
    }

    fn target_spec(&self) -> TargetSpec {
        let defaults = TargetSpec::default();
        TargetSpec {
            enabled: self.target
                || self.target_distance.is_some()
                || self.target_width.is_some()
                || self.target_height.is_some(),
            distance_m: self.target_distance.unwrap_or(defaults.distance_m),
            width_m: self.target_width.unwrap_or(defaults.width_m),
            height_m: self.target_height.unwrap_or(defaults.height_m),
        }
    }

    fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            sample_count: self.samples,
            hit_detection: self.detection.into(),
        }
    }
}

fn read_f64(prompt: &str) -> Result<f64> {
    loop {
        print!("{prompt}");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let bytes = io::stdin()
            .read_line(&mut line)
            .context("Could not read input")?;

        if bytes == 0 {
            bail!("Input ended unexpectedly (EOF).");
        }

        match line.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 45 or 12.5)."),
        }
    }
}

fn prompt_throw(params: &mut ThrowParameters) -> Result<()> {
    params.angle_deg = read_f64("Angle (degrees): ")?;
    params.speed_mps = read_f64("Velocity (m/s): ")?;
    params.release_height_m = read_f64("Height (m): ")?;
    Ok(())
}

fn replay(playback: &mut Playback, frames: usize, realtime: bool) {
    let interval = playback.frame_interval();
    for _ in 0..frames {
        let Some(frame) = playback.advance_frame() else {
            break;
        };
        println!("[{:>4}] {}", frame.index, frame_status(&frame.sample, frame.status));
        if let Some(interval) = interval.filter(|_| realtime) {
            thread::sleep(interval);
        }
    }
    playback.stop();
}

fn run() -> Result<()> {
    let args = Args::parse();

    let mut params = args.throw_parameters();
    if args.prompt {
        prompt_throw(&mut params)?;
    }
    let target = args.target_spec();

    let result = compute_trajectory_with(params, target, &args.solver_config())
        .context("Could not compute the throw")?;
    info!(
        samples = result.samples().len(),
        hit = result.hit(),
        "throw computed"
    );

    if args.json {
        let json = serde_json::to_string_pretty(&result).context("Failed to encode result")?;
        println!("{json}");
    } else {
        println!();
        for line in summary_lines(&result) {
            println!("{line}");
        }
    }

    if let Some(dir) = &args.plot {
        let path = plot::write_png(&result, dir)
            .map_err(|err| anyhow!("Failed to draw plot: {err}"))?;
        println!("Plot written to {}", path.display());
    }

    if let Some(frames) = args.replay {
        let mut playback = Playback::new();
        playback
            .start(Some(result))
            .context("Could not start the replay")?;
        replay(&mut playback, frames, args.realtime);
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Args;
    use parabolic_throw::HitDetection;

    #[test]
    fn defaults_match_the_simulator_defaults() {
        let args = Args::try_parse_from(["parabolic_throw"]).expect("defaults parse");
        let params = args.throw_parameters();
        assert_eq!(params.speed_mps, 20.0);
        assert_eq!(params.angle_deg, 45.0);
        assert_eq!(params.release_height_m, 1.5);
        assert!(!args.target_spec().enabled);
        assert_eq!(args.solver_config().sample_count, 200);
        assert_eq!(args.solver_config().hit_detection, HitDetection::Sampled);
    }

    #[test]
    fn any_target_flag_enables_the_target() {
        let args = Args::try_parse_from(["parabolic_throw", "--target-distance", "12"])
            .expect("target flag parses");
        let target = args.target_spec();
        assert!(target.enabled);
        assert_eq!(target.distance_m, 12.0);
        assert_eq!(target.width_m, 1.0);
    }

    #[test]
    fn detection_and_negative_angle_parse() {
        let args = Args::try_parse_from([
            "parabolic_throw",
            "--detection",
            "swept",
            "--angle",
            "-10",
        ])
        .expect("flags parse");
        assert_eq!(args.solver_config().hit_detection, HitDetection::Swept);
        assert_eq!(args.throw_parameters().angle_deg, -10.0);
    }

    #[test]
    fn realtime_requires_replay() {
        assert!(Args::try_parse_from(["parabolic_throw", "--realtime"]).is_err());
    }
}
