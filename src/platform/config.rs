// qna-import - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for importer configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/qna-import/ or %APPDATA%\qna-import\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[github]` section.
    pub github: GithubSection,
    /// `[import]` section.
    pub import: ImportSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[github]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct GithubSection {
    pub owner: Option<String>,
    pub repo: Option<String>,
    /// Discussion category name.
    pub category: Option<String>,
    /// GraphQL endpoint (GitHub Enterprise Server installs differ).
    pub api_url: Option<String>,
}

/// `[import]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ImportSection {
    /// Transcript CSV path.
    pub csv_path: Option<String>,
    /// Number of body characters used in titles.
    pub title_max_chars: Option<usize>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated configuration derived from `config.toml`.
///
/// Values the file leaves out stay `None` so callers can layer CLI and
/// environment values on top; only bounded numeric values carry defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub category: Option<String>,
    pub api_url: Option<String>,
    pub csv_path: Option<PathBuf>,
    pub title_max_chars: usize,
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            owner: None,
            repo: None,
            category: None,
            api_url: None,
            csv_path: None,
            title_max_chars: constants::DEFAULT_TITLE_MAX_CHARS,
            log_level: None,
        }
    }
}

/// Load and validate a config file from its default location.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults with a warning
/// so the run can still proceed on CLI and environment settings.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    match read_config(config_path) {
        Ok(loaded) => loaded,
        Err(e) => (AppConfig::default(), vec![format!("{e}. Using defaults.")]),
    }
}

/// Load a config file the user named explicitly. A missing or broken file
/// is an error here rather than a warning.
pub fn read_config(config_path: &Path) -> Result<(AppConfig, Vec<String>), ConfigError> {
    let content = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Io {
        path: config_path.to_path_buf(),
        source,
    })?;

    let (config, warnings) = parse_config(&content).map_err(|source| ConfigError::TomlParse {
        path: config_path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %config_path.display(), "Loaded config.toml");
    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }
    Ok((config, warnings))
}

/// Parse and validate config.toml text, accumulating per-field warnings.
pub fn parse_config(content: &str) -> Result<(AppConfig, Vec<String>), toml::de::Error> {
    let raw: RawConfig = toml::from_str(content)?;
    let mut warnings = Vec::new();
    let mut config = AppConfig::default();

    config.owner = non_empty(raw.github.owner, "[github] owner", &mut warnings);
    config.repo = non_empty(raw.github.repo, "[github] repo", &mut warnings);
    config.category = non_empty(raw.github.category, "[github] category", &mut warnings);
    config.api_url = non_empty(raw.github.api_url, "[github] api_url", &mut warnings);
    config.csv_path =
        non_empty(raw.import.csv_path, "[import] csv_path", &mut warnings).map(PathBuf::from);

    // -- Import: title_max_chars --
    if let Some(chars) = raw.import.title_max_chars {
        if (constants::MIN_TITLE_MAX_CHARS..=constants::MAX_TITLE_MAX_CHARS).contains(&chars) {
            config.title_max_chars = chars;
        } else {
            warnings.push(format!(
                "[import] title_max_chars = {chars} is out of range ({}-{}). Using default ({}).",
                constants::MIN_TITLE_MAX_CHARS,
                constants::MAX_TITLE_MAX_CHARS,
                constants::DEFAULT_TITLE_MAX_CHARS,
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    Ok((config, warnings))
}

fn non_empty(value: Option<String>, field: &str, warnings: &mut Vec<String>) -> Option<String> {
    match value {
        Some(v) if v.trim().is_empty() => {
            warnings.push(format!("{field} is empty; ignoring it."));
            None
        }
        Some(v) => Some(v.trim().to_string()),
        None => None,
    }
}
