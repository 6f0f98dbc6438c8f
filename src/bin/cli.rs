//! runtracker CLI - Debug tool for the run tracking core
//!
//! Usage:
//!   runtracker-cli replay <file.gpx> [--chart-csv <path>] [--every <n>]
//!   runtracker-cli simulate [--distance-km <km>] [--pace <min/km>] [--noise <m>]
//!
//! Feeds a recorded or synthetic run through the session exactly as the
//! app would, printing the text the UI would show and the final summary.

use clap::{Parser, Subcommand};
use gpx::{read, Gpx};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use runtracker::{
    display::{format_average, format_distance_km, format_elapsed, format_speed_kmh},
    geo_utils::track_distance,
    replay::{replay_with, ReplayEvent, ReplayResult},
    synthetic::{RunPattern, SyntheticRun},
    LocationSample, SpeedPoint, TrackingConfig,
};

#[derive(Parser)]
#[command(name = "runtracker-cli")]
#[command(about = "Debug tool for run tracking", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with tracking configuration overrides
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded GPX track
    Replay {
        /// GPX file to replay
        file: PathBuf,

        /// Write the speed chart as CSV
        #[arg(long)]
        chart_csv: Option<PathBuf>,

        /// Print a status line every N samples
        #[arg(long, default_value = "10")]
        every: usize,
    },

    /// Run a synthetic run through the session
    Simulate {
        /// Run distance in kilometers
        #[arg(long, default_value = "5")]
        distance_km: f64,

        /// Pace in minutes per kilometer
        #[arg(long, default_value = "6")]
        pace: f64,

        /// GPS noise standard deviation in meters
        #[arg(long, default_value = "0")]
        noise: f64,

        /// Run in a loop instead of a straight line
        #[arg(long = "loop")]
        looped: bool,

        /// RNG seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Write the speed chart as CSV
        #[arg(long)]
        chart_csv: Option<PathBuf>,
    },
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Replay {
            file,
            chart_csv,
            every,
        } => {
            let samples = parse_gpx_file(&file)?;
            println!(
                "Loaded {} samples from {} ({:.2} km)",
                samples.len(),
                file.display(),
                track_distance(&samples) / 1000.0
            );
            let result = replay(&samples, &config, every.max(1), cli.verbose)?;
            finish(&result, chart_csv.as_deref())
        }
        Commands::Simulate {
            distance_km,
            pace,
            noise,
            looped,
            seed,
            chart_csv,
        } => {
            let scenario = SyntheticRun {
                origin: LocationSample::new(47.37, 8.55),
                distance_meters: distance_km * 1000.0,
                pace_min_per_km: pace,
                sample_interval_ms: config.location_interval_ms,
                pattern: if looped {
                    RunPattern::Loop
                } else {
                    RunPattern::Straight
                },
                gps_noise_sigma_meters: noise,
                seed,
            };
            let samples = scenario.generate();
            println!(
                "Simulating {:.1} km at {:.1} min/km ({} samples, expected {})",
                distance_km,
                pace,
                samples.len(),
                format_elapsed(scenario.duration_seconds())
            );
            let result = replay(&samples, &config, 10, cli.verbose)?;
            finish(&result, chart_csv.as_deref())
        }
    }
}

/// Load configuration from a JSON file, or use defaults
fn load_config(path: Option<&Path>) -> Result<TrackingConfig, String> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
            TrackingConfig::from_json(&json).map_err(|e| e.to_string())
        }
        None => Ok(TrackingConfig::default()),
    }
}

/// Parse a GPX file into location samples
fn parse_gpx_file(path: &Path) -> Result<Vec<LocationSample>, String> {
    let file = File::open(path).map_err(|e| e.to_string())?;
    let reader = BufReader::new(file);
    let gpx: Gpx = read(reader).map_err(|e| e.to_string())?;

    let mut samples = Vec::new();
    for track in &gpx.tracks {
        for segment in &track.segments {
            for pt in &segment.points {
                let point = pt.point();
                let timestamp_ms = pt.time.clone().map(|t| {
                    let dt: OffsetDateTime = t.into();
                    (dt.unix_timestamp_nanos() / 1_000_000).max(0) as u64
                });
                samples.push(LocationSample {
                    latitude: point.y(),
                    longitude: point.x(),
                    speed_mps: None,
                    timestamp_ms,
                    accuracy_m: pt.hdop,
                });
            }
        }
    }

    if samples.is_empty() {
        return Err("No track points found".to_string());
    }
    Ok(samples)
}

/// Replay samples, printing the UI text every `every` samples
fn replay(
    samples: &[LocationSample],
    config: &TrackingConfig,
    every: usize,
    verbose: bool,
) -> Result<ReplayResult, String> {
    println!("\n{}", "=".repeat(60));
    println!("REPLAY");
    println!("{}", "=".repeat(60));

    let mut elapsed = 0;
    let mut count = 0;
    let result = replay_with(samples, config, |event| match event {
        ReplayEvent::Tick(seconds) => elapsed = *seconds,
        ReplayEvent::Sample(update) => {
            count += 1;
            if verbose || count % every == 0 {
                println!(
                    "  [{}] speed {:>10}  distance {:>8}{}",
                    format_elapsed(elapsed),
                    format_speed_kmh(update.speed_kmh),
                    format_distance_km(update.total_distance_m),
                    update
                        .chart_point
                        .map(|p| format!("  chart +({}, {:.1})", p.elapsed_seconds, p.speed_kmh))
                        .unwrap_or_default()
                );
            }
        }
    })
    .map_err(|e| e.to_string())?;

    Ok(result)
}

/// Print the summary and optionally export the chart
fn finish(result: &ReplayResult, chart_csv: Option<&Path>) -> Result<(), String> {
    println!("\n{}", "-".repeat(60));
    println!("SUMMARY");
    println!("{}", "-".repeat(60));
    println!("  Time:      {}", format_elapsed(result.summary.elapsed_seconds));
    println!(
        "  Distance:  {}",
        format_distance_km(result.summary.total_distance_m)
    );
    println!("  {}", format_average(&result.summary));
    println!(
        "  Samples:   {} accepted, {} rejected",
        result.samples_accepted, result.samples_rejected
    );
    println!("  Chart:     {} points", result.chart.len());

    if let Some(path) = chart_csv {
        write_chart_csv(path, &result.chart)?;
        println!("\nChart written to {}", path.display());
    }
    Ok(())
}

/// Write chart points as `elapsed_seconds,speed_kmh` rows
fn write_chart_csv(path: &Path, points: &[SpeedPoint]) -> Result<(), String> {
    let file = File::create(path).map_err(|e| e.to_string())?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "elapsed_seconds,speed_kmh").map_err(|e| e.to_string())?;
    for point in points {
        writeln!(writer, "{},{:.2}", point.elapsed_seconds, point.speed_kmh)
            .map_err(|e| e.to_string())?;
    }
    writer.flush().map_err(|e| e.to_string())
}
