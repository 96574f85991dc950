mod error;
mod model;
mod parser;
mod pdf;
mod settings;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use serde::Serialize;
use tracing::{info, warn};

use error::ExtractError;
use model::ExtractionResult;
use pdf::PdfDocument;
use settings::{effective_limit, Settings};

#[derive(Parser)]
#[command(
    name = "magazine_extractor",
    about = "Extract product candidates (code, name, price, page) from a magazine PDF"
)]
struct Cli {
    /// Path to the PDF file
    #[arg(long)]
    pdf: PathBuf,

    /// Max items to return (values below 1 count as 1) [default: 10000]
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    limit: Option<i64>,

    /// Show a page progress bar on stderr
    #[arg(long)]
    progress: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::load().unwrap_or_else(|e| {
        warn!(
            "unreadable MAGAZINE_* settings, using defaults for all of them: {:#}",
            e
        );
        Settings::default()
    });
    let (limit, progress) = resolve(&cli, &settings);

    let t0 = Instant::now();
    match run(&cli.pdf, limit, progress) {
        Ok(result) => {
            info!(
                "Returned {} of {} codes in {:.1}s",
                result.meta.returned,
                result.meta.unique_codes,
                t0.elapsed().as_secs_f64()
            );
            emit(&result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            warn!(kind = e.kind(), "extraction failed: {}", e);
            emit(&e.payload());
            ExitCode::from(e.exit_code())
        }
    }
}

/// Flags win over `MAGAZINE_*` settings; `--progress` can only switch the bar on.
fn resolve(cli: &Cli, settings: &Settings) -> (usize, bool) {
    let limit = effective_limit(cli.limit.unwrap_or(settings.limit));
    (limit, cli.progress || settings.progress)
}

fn run(path: &Path, limit: usize, progress: bool) -> Result<ExtractionResult, ExtractError> {
    let doc = PdfDocument::open(path)?;
    info!("Extracting from {} (limit {})", path.display(), limit);

    if !progress {
        return Ok(parser::extract_products(&doc, limit)?);
    }

    let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} pages")
            .map_err(anyhow::Error::from)?
            .progress_chars("=> "),
    );
    Ok(parser::extract_with_progress(&doc, limit, &pb)?)
}

/// One JSON line on stdout.
fn emit<T: Serialize>(value: &T) {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let written = serde_json::to_writer(&mut out, value)
        .map_err(std::io::Error::from)
        .and_then(|()| writeln!(out))
        .and_then(|()| out.flush());
    if let Err(e) = written {
        warn!("failed to write output: {}", e);
    }
}
