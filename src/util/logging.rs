// qna-import - util/logging.rs
//
// Structured logging to stderr; stdout is reserved for the dry-run preview
// and the final summary.
//
// Level selection, highest priority first:
//   1. RUST_LOG, taken verbatim
//   2. --debug on the command line
//   3. [logging] level in config.toml
//   4. info
//
// For 2-4 the level applies to this crate only; the HTTP stack stays at
// warn so --debug does not dump request internals.
//
// Never logs the API token, raw transcript content, or email addresses.

use tracing_subscriber::EnvFilter;

/// Where the active log level came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelSource {
    Environment,
    DebugFlag,
    ConfigFile,
    Default,
}

/// Build the filter directive for a level that was not given via RUST_LOG.
fn crate_directive(level: &str) -> String {
    format!("warn,qna_import={level}")
}

/// Pick the filter directive and report which input supplied it.
pub fn select_directive(
    rust_log: Option<&str>,
    debug_flag: bool,
    config_level: Option<&str>,
) -> (String, LevelSource) {
    match (rust_log, debug_flag, config_level) {
        (Some(directive), _, _) => (directive.to_string(), LevelSource::Environment),
        (None, true, _) => (crate_directive("debug"), LevelSource::DebugFlag),
        (None, false, Some(level)) => (crate_directive(level), LevelSource::ConfigFile),
        (None, false, None) => (
            crate_directive(super::constants::DEFAULT_LOG_LEVEL),
            LevelSource::Default,
        ),
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let (directive, source) = select_directive(rust_log.as_deref(), debug_flag, config_level);

    let filter = EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| EnvFilter::new(crate_directive(super::constants::DEFAULT_LOG_LEVEL)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(true)
        .compact()
        .try_init();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        directive = %directive,
        source = ?source,
        "Logging initialised"
    );
}
