use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::{Parser, Subcommand};
use lapsight::{
    LapsightError,
    config::AppConfig,
    input,
    records::order_by_position,
    series::{DriverRaceSummary, EnrichedLapRecord, compare_field, driver_laps, enrich_laps, summarize_driver},
    telemetry::{summarize_channel, summarize_lap_channels},
    weather::summarize_weather,
};
use log::{error, info, warn};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    /// Emit compact single-line JSON
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// One driver's laps with deltas to their best and to the previous lap
    Laps {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        race: String,

        #[arg(short, long)]
        driver: String,

        /// Ignore pit and non-green laps in averages and spread
        #[arg(long)]
        clean_laps_only: bool,
    },
    /// Every driver on one lap number against the best of the field
    Field {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        race: String,

        #[arg(short, long)]
        lap: u32,
    },
    /// Weather averages and rain state for a race
    Weather {
        #[arg(short, long)]
        input: PathBuf,

        /// Keep full precision instead of rounding averages to one decimal
        #[arg(long)]
        raw: bool,
    },
    /// Min, max and average of telemetry channels over one driver's lap
    Telemetry {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        race: String,

        #[arg(short, long)]
        driver: String,

        #[arg(short, long)]
        lap: u32,

        /// Only summarize this channel; all channels when omitted
        #[arg(short, long)]
        channel: Option<String>,
    },
    /// Race results ordered by position with normalized gaps
    Results {
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(Serialize)]
struct DriverLapsReport {
    laps: Vec<EnrichedLapRecord>,
    summary: DriverRaceSummary,
}

fn write_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), LapsightError> {
    write_json_to(io::stdout().lock(), value, pretty)
}

fn write_json_to<W: Write, T: Serialize>(
    mut writer: W,
    value: &T,
    pretty: bool,
) -> Result<(), LapsightError> {
    let written = if pretty {
        serde_json::to_writer_pretty(&mut writer, value)
    } else {
        serde_json::to_writer(&mut writer, value)
    };
    written.map_err(|e| LapsightError::OutputError { source: e })?;
    writeln!(writer).map_err(|e| LapsightError::OutputWriteError { source: e })?;
    writer
        .flush()
        .map_err(|e| LapsightError::OutputWriteError { source: e })
}

fn run(args: &Args, config: &AppConfig) -> Result<(), LapsightError> {
    let pretty = config.pretty_output && !args.compact;
    match &args.command {
        Commands::Laps {
            input,
            race,
            driver,
            clean_laps_only,
        } => {
            let records = input::load_laps(input)?;
            let laps = driver_laps(&records, race, driver);
            if laps.is_empty() {
                warn!("No laps found for driver {} in race {}", driver, race);
            }
            let mut options = config.summary_options();
            options.clean_laps_only |= *clean_laps_only;

            let report = DriverLapsReport {
                laps: enrich_laps(&laps)?,
                summary: summarize_driver(&laps, &options),
            };
            info!("Enriched {} laps for driver {}", report.laps.len(), driver);
            write_json(&report, pretty)
        }
        Commands::Field { input, race, lap } => {
            let records = input::load_laps(input)?;
            let view = compare_field(&records, race, *lap);
            info!("Compared {} drivers on lap {}", view.rows.len(), lap);
            write_json(&view, pretty)
        }
        Commands::Weather { input, raw } => {
            let samples = input::load_weather(input)?;
            let summary = summarize_weather(&samples);
            match &summary {
                Some(summary) if !raw => write_json(&summary.rounded(), pretty),
                _ => write_json(&summary, pretty),
            }
        }
        Commands::Telemetry {
            input,
            race,
            driver,
            lap,
            channel,
        } => {
            let samples = input::load_telemetry(input)?;
            match channel {
                Some(name) => {
                    let summary = summarize_channel(&samples, race, driver, *lap, name);
                    if summary.is_none() {
                        warn!("No {} readings for driver {} on lap {}", name, driver, lap);
                    }
                    write_json(&summary, pretty)
                }
                None => {
                    let channels = summarize_lap_channels(&samples, race, driver, *lap);
                    info!("Summarized {} channels for driver {} on lap {}", channels.len(), driver, lap);
                    write_json(&channels, pretty)
                }
            }
        }
        Commands::Results { input } => {
            let results = input::load_results(input)?
                .into_iter()
                .map(|result| result.with_normalized_gaps())
                .collect();
            write_json(&order_by_position(results), pretty)
        }
    }
}

fn main() {
    #[cfg(debug_assertions)]
    colog::init();

    let args = Args::parse();
    let config = AppConfig::from_local_file()
        .unwrap_or_else(|e| {
            warn!("Could not read config file, using defaults: {}", e);
            None
        })
        .unwrap_or_default();

    if let Err(e) = run(&args, &config) {
        error!("lapsight failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
