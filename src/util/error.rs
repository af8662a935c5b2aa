// qna-import - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation: every failure carries the path,
// column, or remote operation it relates to, and keeps its cause for
// diagnostic logging.
//
// The Row Filter and Content Sanitizer are total and have no error type.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all importer operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum ImportError {
    /// Reading the transcript CSV failed.
    Transcript(TranscriptError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// Talking to the discussion platform failed.
    Publish(PublishError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transcript(e) => write!(f, "Transcript error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Publish(e) => write!(f, "Publish error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transcript(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Publish(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Transcript errors
// ---------------------------------------------------------------------------

/// Errors related to reading the transcript CSV.
#[derive(Debug)]
pub enum TranscriptError {
    /// The transcript file could not be opened or read.
    Io { path: PathBuf, source: io::Error },

    /// The transcript file exceeds the maximum accepted size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// The CSV reader rejected the input (bad quoting, invalid UTF-8, ...).
    Csv { source: csv::Error },

    /// One or more required header columns are absent.
    MissingColumns {
        missing: Vec<&'static str>,
        found: Vec<String>,
    },
}

impl fmt::Display for TranscriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot read transcript '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Transcript '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::Csv { source } => write!(f, "Malformed CSV: {source}"),
            Self::MissingColumns { missing, found } => write!(
                f,
                "CSV is missing required column(s) {}; found [{}]",
                missing.join(", "),
                found.join(", ")
            ),
        }
    }
}

impl std::error::Error for TranscriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source } => Some(source),
            _ => None,
        }
    }
}

impl From<csv::Error> for TranscriptError {
    fn from(source: csv::Error) -> Self {
        Self::Csv { source }
    }
}

impl From<TranscriptError> for ImportError {
    fn from(e: TranscriptError) -> Self {
        Self::Transcript(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading and run settings.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },

    /// The API token environment variable is unset or empty.
    MissingToken { variable: &'static str },

    /// A required setting resolved to an empty value.
    MissingValue { field: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
            Self::MissingToken { variable } => write!(
                f,
                "{variable} environment variable not set. \
                 Use a token with 'repo' and 'write:discussion' scopes, or pass --dry-run."
            ),
            Self::MissingValue { field } => {
                write!(f, "Setting '{field}' must not be empty")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for ImportError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Publish errors
// ---------------------------------------------------------------------------

/// Errors raised while creating discussions on the remote platform.
///
/// `RepositoryNotFound` and `CategoryNotFound` are fatal for a run; every
/// other variant is reported against a single row.
#[derive(Debug)]
pub enum PublishError {
    /// Transport failure or non-success HTTP status.
    Http {
        operation: &'static str,
        source: ureq::Error,
    },

    /// The response body was not the JSON shape expected.
    Decode {
        operation: &'static str,
        source: serde_json::Error,
    },

    /// The GraphQL endpoint answered with an `errors` array.
    GraphQl {
        operation: &'static str,
        messages: Vec<String>,
    },

    /// The target repository does not exist or the token cannot see it.
    RepositoryNotFound { owner: String, repo: String },

    /// The repository has no discussion category with this name.
    CategoryNotFound {
        category: String,
        available: Vec<String>,
    },

    /// `createDiscussion` succeeded at the HTTP level but returned no discussion.
    MissingDiscussion,

    /// A dry-run preview could not be written.
    Output { source: io::Error },
}

impl fmt::Display for PublishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http { operation, source } => {
                write!(f, "HTTP request for {operation} failed: {source}")
            }
            Self::Decode { operation, source } => {
                write!(f, "Unexpected response for {operation}: {source}")
            }
            Self::GraphQl {
                operation,
                messages,
            } => write!(
                f,
                "GraphQL errors during {operation}: {}",
                messages.join("; ")
            ),
            Self::RepositoryNotFound { owner, repo } => write!(
                f,
                "Repository '{owner}/{repo}' not found or not accessible with this token"
            ),
            Self::CategoryNotFound {
                category,
                available,
            } => write!(
                f,
                "Discussion category '{category}' not found (available: [{}]). \
                 Create it in the repository's Discussions settings.",
                available.join(", ")
            ),
            Self::MissingDiscussion => {
                write!(f, "createDiscussion returned no discussion")
            }
            Self::Output { source } => write!(f, "Cannot write preview: {source}"),
        }
    }
}

impl std::error::Error for PublishError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Output { source } => Some(source),
            _ => None,
        }
    }
}

impl From<PublishError> for ImportError {
    fn from(e: PublishError) -> Self {
        Self::Publish(e)
    }
}

/// Convenience type alias for importer results.
pub type Result<T> = std::result::Result<T, ImportError>;
