// dust-convert entry point
// Converts an aggregated air-quality CSV into hex-rendered telemetry frames

use dust_telemetry::convert::errlog::{ErrorLog, RunError};
use dust_telemetry::convert::{convert_file, ConvertError};
use dust_telemetry::formats::csv::CsvError;
use dust_telemetry::FrameAssembler;
use std::env;
use std::fs::OpenOptions;
use std::path::Path;
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

const LOG_FILE: &str = "dust_convert.log";

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    let format_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .init();

    // Refuse to run when errors cannot be recorded
    let log = match ErrorLog::open(LOG_FILE) {
        Ok(log) => log,
        Err(_) => {
            eprintln!("Cannot access {} to record error.", LOG_FILE);
            std::process::exit(1);
        }
    };

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <input.csv> <output.txt>", args[0]);
        log.record(&RunError::InvalidCommand)?;
        std::process::exit(1);
    }

    let input = Path::new(&args[1]);
    let output = Path::new(&args[2]);

    // The output file must be writable before conversion starts
    if OpenOptions::new()
        .create(true)
        .append(true)
        .open(output)
        .is_err()
    {
        log.record(&RunError::AccessDenied(args[2].clone()))?;
        std::process::exit(1);
    }

    let assembler = FrameAssembler::local();
    match convert_file(input, output, &assembler) {
        Ok(frames) => {
            tracing::info!(frames, "conversion finished");
            println!("Conversion completed successfully.");
            Ok(())
        }
        Err(err) => {
            let run_err = match &err {
                ConvertError::Csv(CsvError::Io(_)) => RunError::AccessDenied(args[1].clone()),
                ConvertError::Csv(_) => RunError::InvalidCsvFormat,
                ConvertError::Io(_) => RunError::AccessDenied(args[2].clone()),
                ConvertError::DataMissing { line, .. } => RunError::DataMissing(*line),
            };
            tracing::error!(%err, "conversion aborted");
            log.record(&run_err)?;
            std::process::exit(1);
        }
    }
}
