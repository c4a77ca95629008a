use std::{fs::File, io::BufWriter, path::PathBuf};

use clap::Args;
use hermes_instructions::{distance_calc::HaversineDistanceCalc, trace::TraceSample};
use indicatif::ProgressBar;
use jiff::Timestamp;
use serde::Serialize;
use tracing::info;

use crate::{
    file_utils::{collect_routes, load_route},
    parsers::{self, duration_from_millis},
};

#[derive(Args)]
pub struct TraceArgs {
    /// Route file, or folder of route files
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Output file, or output folder when the input is a folder. Prints to stdout otherwise
    #[arg(short = 'o', long)]
    out: Option<PathBuf>,

    /// Departure time (e.g., "2025-06-10T08:00:00+02:00" or epoch milliseconds)
    #[arg(short, long, value_parser = parsers::parse_timestamp)]
    start: Option<Timestamp>,
}

#[derive(Serialize)]
struct JsonTraceSample {
    lat: f64,
    lon: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    ele: Option<f64>,
    /// Milliseconds since departure
    time: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<Timestamp>,
}

/// Trace of one file of a folder, printed together with the others.
#[derive(Serialize)]
struct JsonRouteTrace {
    route: PathBuf,
    samples: Vec<JsonTraceSample>,
}

impl JsonTraceSample {
    fn from_sample(sample: &TraceSample, start: Option<Timestamp>) -> anyhow::Result<Self> {
        let timestamp = match start {
            Some(start) => Some(start.checked_add(duration_from_millis(sample.time)?)?),
            None => None,
        };

        Ok(JsonTraceSample {
            lat: sample.lat,
            lon: sample.lon,
            ele: sample.ele,
            time: sample.time,
            timestamp,
        })
    }
}

fn trace_route(path: &PathBuf, start: Option<Timestamp>) -> anyhow::Result<Vec<JsonTraceSample>> {
    let route = load_route(path)?;
    let samples = route.create_trace(&HaversineDistanceCalc)?;

    info!(
        "{:?}: {} samples over {:.0} m in {}",
        path,
        samples.len(),
        route.total_distance().value(),
        duration_from_millis(route.total_time()?)?
    );

    samples
        .iter()
        .map(|sample| JsonTraceSample::from_sample(sample, start))
        .collect()
}

fn write_json<T: Serialize>(value: &T, out: Option<&PathBuf>) -> anyhow::Result<()> {
    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }
            serde_json::to_writer_pretty(BufWriter::new(File::create(out)?), value)?;
        }
        None => {
            serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
            println!();
        }
    }

    Ok(())
}

/// Traces every route of `paths`. With `out`, each trace is written to its own
/// file in that folder and nothing is returned.
fn trace_folder(
    paths: &[PathBuf],
    out: Option<&PathBuf>,
    start: Option<Timestamp>,
) -> anyhow::Result<Vec<JsonRouteTrace>> {
    let loading_bar = ProgressBar::new(paths.len() as u64);
    let mut traces = Vec::new();

    for path in paths {
        let samples = trace_route(path, start)?;

        match (out, path.file_name()) {
            (Some(out), Some(file_name)) => write_json(&samples, Some(&out.join(file_name)))?,
            _ => traces.push(JsonRouteTrace {
                route: path.clone(),
                samples,
            }),
        }

        loading_bar.inc(1);
    }

    loading_bar.finish_and_clear();

    Ok(traces)
}

pub fn run(args: TraceArgs) -> anyhow::Result<()> {
    if args.input.is_file() {
        let samples = trace_route(&args.input, args.start)?;
        return write_json(&samples, args.out.as_ref());
    }

    let paths = collect_routes(&args.input)?;
    let traces = trace_folder(&paths, args.out.as_ref(), args.start)?;

    if args.out.is_none() {
        write_json(&traces, None)?;
    }

    info!("Traced {} routes", paths.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    #[test]
    fn test_trace_folder_is_one_document() {
        let folder = env::current_dir().unwrap().join("tests/fixtures/routes");
        let paths = collect_routes(&folder).unwrap();

        let traces = trace_folder(&paths, None, None).unwrap();
        let json = serde_json::to_value(&traces).unwrap();

        let routes = json.as_array().unwrap();
        assert_eq!(routes.len(), 2);
        assert!(routes[0]["route"].as_str().unwrap().ends_with("loop.json"));
        assert!(routes[1]["route"].as_str().unwrap().ends_with("straight.json"));
        assert!(routes.iter().all(|route| route["samples"].is_array()));
    }

    #[test]
    fn test_samples_with_departure_time() {
        let start = parsers::parse_timestamp("2025-06-10T08:00:00Z").unwrap();
        let sample = TraceSample {
            lat: 50.85,
            lon: 4.35,
            ele: None,
            time: 90_000,
        };

        let json_sample = JsonTraceSample::from_sample(&sample, Some(start)).unwrap();

        assert_eq!(
            json_sample.timestamp,
            Some(parsers::parse_timestamp("2025-06-10T08:01:30Z").unwrap())
        );
    }
}
