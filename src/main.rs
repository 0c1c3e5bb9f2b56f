use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ogp::config::{Config, LogFormat, DEFAULT_LOG_FILTER};
use ogp::{OgpError, OgpResult};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// HTML document to read; stdin when omitted or `-`
    file: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Only accept the `og:determiner` spelling
    #[arg(long)]
    strict_determiner: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(config.log_format);

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "extraction failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

// Logs go to stderr; stdout carries only the JSON record.
fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init(),
    }
}

fn run(args: &Args, config: &Config) -> OgpResult<()> {
    let document = read_document(args.file.as_ref())?;
    info!(bytes = document.len(), "document loaded");

    let mut options = config.assembler_options();
    if args.strict_determiner {
        options.legacy_determiner = false;
    }

    let og = ogp::parse_with(&document, options)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&og)?
    } else {
        serde_json::to_string(&og)?
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

fn read_document(file: Option<&PathBuf>) -> OgpResult<Vec<u8>> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read(path).map_err(|e| {
            tracing::warn!(error = ?e, path = %path.display(), "failed to read document");
            OgpError::Io(e)
        }),
        _ => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}
