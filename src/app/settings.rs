// qna-import - app/settings.rs
//
// Layers the run settings: CLI > environment > config.toml > built-in
// constants. Environment lookup is injected so resolution is testable
// without touching the process environment.

use crate::platform::config::AppConfig;
use crate::platform::github::GitHubSettings;
use crate::util::constants;
use crate::util::error::ConfigError;
use std::path::PathBuf;

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub csv_path: Option<PathBuf>,
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub category: Option<String>,
    pub dry_run: bool,
}

/// Where drafts go.
#[derive(Debug, Clone)]
pub enum RunMode {
    /// Preview on stdout; no token, no network.
    DryRun,
    /// Create discussions in this repository.
    Live(GitHubSettings),
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub csv_path: PathBuf,
    pub category: String,
    pub title_max_chars: usize,
    pub mode: RunMode,
}

/// Resolve run settings. A live run without a token is an error.
pub fn resolve<F>(cli: &CliOverrides, config: &AppConfig, env: F) -> Result<RunSettings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let env_value = |name: &str| env(name).filter(|v| !v.trim().is_empty());

    let csv_path = cli
        .csv_path
        .clone()
        .or_else(|| config.csv_path.clone())
        .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_CSV_PATH));

    let category = pick(
        cli.category.clone(),
        None,
        config.category.clone(),
        constants::DEFAULT_CATEGORY,
        "category",
    )?;

    let owner = pick(
        cli.owner.clone(),
        env_value(constants::ENV_REPO_OWNER),
        config.owner.clone(),
        constants::DEFAULT_REPO_OWNER,
        "owner",
    )?;

    let repo = pick(
        cli.repo.clone(),
        env_value(constants::ENV_REPO_NAME),
        config.repo.clone(),
        constants::DEFAULT_REPO_NAME,
        "repo",
    )?;

    let mode = if cli.dry_run {
        RunMode::DryRun
    } else {
        let token = env_value(constants::ENV_GITHUB_TOKEN).ok_or(ConfigError::MissingToken {
            variable: constants::ENV_GITHUB_TOKEN,
        })?;
        RunMode::Live(GitHubSettings {
            api_url: config
                .api_url
                .clone()
                .unwrap_or_else(|| constants::DEFAULT_GITHUB_API_URL.to_string()),
            token,
            owner,
            repo,
            category: category.clone(),
        })
    };

    Ok(RunSettings {
        csv_path,
        category,
        title_max_chars: config.title_max_chars,
        mode,
    })
}

fn pick(
    cli: Option<String>,
    env: Option<String>,
    config: Option<String>,
    default: &str,
    field: &'static str,
) -> Result<String, ConfigError> {
    let value = cli
        .or(env)
        .or(config)
        .unwrap_or_else(|| default.to_string());
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::MissingValue { field });
    }
    Ok(value.to_string())
}
