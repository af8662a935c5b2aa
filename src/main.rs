// qna-import - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation (debug mode support)
// 3. Run settings resolution (CLI > env > config > defaults)
// 4. Transcript loading, then either a dry-run preview or a live import
//
// Exit status: 0 when every question was published (or previewed),
// 1 on any fatal setup error or when at least one row failed.

use clap::Parser;
use qna_import::app::import::{self, ImportOptions};
use qna_import::app::preview::DryRunPublisher;
use qna_import::app::settings::{self, CliOverrides, RunMode};
use qna_import::core::filter;
use qna_import::core::transcript;
use qna_import::platform::config::{self, PlatformPaths};
use qna_import::platform::github::GitHubDiscussions;
use qna_import::util;
use qna_import::util::error::{ImportError, Result};
use std::path::PathBuf;
use std::process::ExitCode;

/// qna-import - publish attendee questions from a Q&A transcript as GitHub Discussions.
///
/// Emails are redacted and signature blocks removed before anything leaves
/// this machine. Use --dry-run to preview without a token.
#[derive(Parser, Debug)]
#[command(name = "qna-import", version, about)]
struct Cli {
    /// Transcript CSV with Source, Type and Content columns.
    csv: Option<PathBuf>,

    /// Repository owner (user or organisation).
    #[arg(long)]
    owner: Option<String>,

    /// Repository name.
    #[arg(long)]
    repo: Option<String>,

    /// Discussion category to file questions under.
    #[arg(long)]
    category: Option<String>,

    /// Show the discussions that would be created without creating them.
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,

    /// Config file to use instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config first so its [logging] level can feed the subscriber. An
    // explicitly named config file must load; the default one may be absent.
    let loaded = match cli.config {
        Some(ref path) => config::read_config(path),
        None => Ok(config::load_config(&PlatformPaths::resolve().config_file())),
    };

    let (app_config, config_warnings) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            util::logging::init(cli.debug, None);
            tracing::error!(error = %e, "Failed to load configuration");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    util::logging::init(cli.debug, app_config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        dry_run = cli.dry_run,
        "qna-import starting"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    match run(&cli, &app_config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "Import aborted");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns Ok(true) when the run finished with no failed rows.
fn run(cli: &Cli, app_config: &config::AppConfig) -> Result<bool> {
    let overrides = CliOverrides {
        csv_path: cli.csv.clone(),
        owner: cli.owner.clone(),
        repo: cli.repo.clone(),
        category: cli.category.clone(),
        dry_run: cli.dry_run,
    };
    let run_settings = settings::resolve(&overrides, app_config, |name| std::env::var(name).ok())?;

    let rows = transcript::read_transcript_file(&run_settings.csv_path)?;
    let options = ImportOptions {
        category: run_settings.category.clone(),
        title_max_chars: run_settings.title_max_chars,
    };

    let github = match run_settings.mode {
        RunMode::Live(ref github) => github,
        RunMode::DryRun => {
            let stdout = std::io::stdout();
            let mut preview = DryRunPublisher::new(stdout.lock());
            let io_err = |source| ImportError::Io {
                path: PathBuf::from("<stdout>"),
                operation: "write preview",
                source,
            };
            preview
                .write_header(&run_settings.csv_path.display().to_string())
                .map_err(io_err)?;
            let summary = import::run_import(&rows, &mut preview, &options);
            preview.write_summary(&summary).map_err(io_err)?;
            return Ok(summary.is_success());
        }
    };

    if filter::filter_questions(&rows).is_empty() {
        println!("No attendee questions to import.");
        return Ok(true);
    }

    let mut publisher = GitHubDiscussions::connect(github)?;
    let summary = import::run_import(&rows, &mut publisher, &options);

    println!("Summary:");
    println!("  Attendee questions:   {}", summary.qualifying);
    println!("  Successfully created: {}", summary.created);
    println!("  Failed:               {}", summary.failed);

    Ok(summary.is_success())
}
