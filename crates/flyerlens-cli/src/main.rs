mod display;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use flyerlens_client::{
    AnalyzeClient, AnalyzeErrorKind, BASE_URL_ENV, ClientConfig, DEFAULT_BASE_URL,
};
use flyerlens_core::{FlyerFile, UploadError, ZoneRecommendation, upload};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "flyerlens",
    version,
    about = "Extract event details from flyers and review zone recommendations"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Send a flyer (JPG, PNG or PDF) to the analysis backend.
    Analyze {
        file: PathBuf,

        #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// Give up after this many seconds (default: wait indefinitely).
        #[arg(long)]
        timeout: Option<u64>,

        /// Print the extraction as JSON instead of a card.
        #[arg(long)]
        json: bool,

        /// Send the file without checking its type and size first.
        #[arg(long)]
        skip_validation: bool,
    },
    /// Print ranked cards from a JSON array of zone recommendations.
    Cards { file: PathBuf },
}

/// Exit codes for `analyze` failures.
const EXIT_INVALID_UPLOAD: u8 = 2;
const EXIT_SERVER_FAILURE: u8 = 3;
const EXIT_UNSUCCESSFUL: u8 = 4;
const EXIT_TRANSPORT: u8 = 5;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::info!("flyerlens v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze {
            file,
            base_url,
            timeout,
            json,
            skip_validation,
        } => {
            let mut config = ClientConfig::new(base_url);
            if let Some(secs) = timeout {
                config = config.with_timeout(Duration::from_secs(secs));
            }
            let code = run_analyze(&file, config, json, skip_validation).await?;
            Ok(ExitCode::from(code))
        }
        Command::Cards { file } => {
            run_cards(&file)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn exit_code(kind: AnalyzeErrorKind) -> u8 {
    match kind {
        AnalyzeErrorKind::ServerFailure => EXIT_SERVER_FAILURE,
        AnalyzeErrorKind::UnsuccessfulExtraction => EXIT_UNSUCCESSFUL,
        AnalyzeErrorKind::TransportFailure => EXIT_TRANSPORT,
    }
}

/// Read a flyer from disk.
///
/// Unless `skip_validation` is set, type and size are checked from the path
/// and file metadata before any contents are read.
fn load_flyer(
    path: &Path,
    skip_validation: bool,
) -> anyhow::Result<Result<FlyerFile, UploadError>> {
    if !skip_validation {
        let len = std::fs::metadata(path)
            .with_context(|| format!("reading {}", path.display()))?
            .len();
        let checked = upload::validate_content_type(upload::content_type_for(path))
            .and_then(|()| upload::validate_len(len));
        if let Err(e) = checked {
            return Ok(Err(e));
        }
    }
    let flyer =
        FlyerFile::from_path(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(Ok(flyer))
}

/// Returns the process exit code.
async fn run_analyze(
    path: &Path,
    config: ClientConfig,
    json: bool,
    skip_validation: bool,
) -> anyhow::Result<u8> {
    let flyer = match load_flyer(path, skip_validation)? {
        Ok(flyer) => flyer,
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "upload rejected");
            eprintln!("{e}");
            return Ok(EXIT_INVALID_UPLOAD);
        }
    };

    let client = AnalyzeClient::new(config)?;
    match client.analyze_flyer(&flyer).await {
        Ok(extraction) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&extraction)?);
            } else {
                display::print_extraction(&extraction);
            }
            Ok(0)
        }
        Err(e) => {
            eprintln!("{}", e.message());
            Ok(exit_code(e.kind()))
        }
    }
}

fn run_cards(path: &Path) -> anyhow::Result<()> {
    let raw =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let recs: Vec<ZoneRecommendation> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    tracing::info!(count = recs.len(), "loaded recommendations");
    display::print_recommendations(&recs);
    Ok(())
}
