// qna-import - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.
// Every tunable value used by the importer lives here so the rule set and
// the GitHub client can be reasoned about in one place.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "qna-import";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "qna-import";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Transcript input
// =============================================================================

/// Transcript path used when neither the CLI nor config.toml names one.
pub const DEFAULT_CSV_PATH: &str = "data/Q&A ReportClean.csv";

/// Header of the column holding the row author label.
pub const COLUMN_SOURCE: &str = "Source";

/// Header of the column holding the row kind label.
pub const COLUMN_TYPE: &str = "Type";

/// Header of the column holding the raw message text.
pub const COLUMN_CONTENT: &str = "Content";

/// Optional column carried through but never consulted.
pub const COLUMN_REACTIONS: &str = "Reactions";

/// `Source` value marking a row written by a session participant.
pub const SOURCE_ATTENDEE: &str = "ATTENDEE";

/// `Type` value marking a row as a question.
pub const TYPE_QUESTION: &str = "QUESTION";

/// Largest transcript file accepted. Session exports are a few hundred KB;
/// anything far beyond that is almost certainly the wrong file.
pub const MAX_TRANSCRIPT_FILE_SIZE: u64 = 50 * 1024 * 1024; // 50 MiB

// =============================================================================
// Redaction rules
// =============================================================================

/// Placeholder substituted for every email-shaped token.
pub const REDACTED_EMAIL: &str = "[redacted-email]";

/// Email token shape: local part, `@`, dotted domain, TLD of at least two
/// letters. The local part is any run of non-space characters other than
/// brackets, quotes and separators; an apostrophe is allowed inside it but
/// never at either end. Labels may be any Unicode letters or digits. The
/// TLD ends on a letter, so trailing punctuation stays outside the span.
pub const EMAIL_PATTERN: &str = concat!(
    r#"[^\s@<>()\[\]{},;:"'`]"#,
    r#"(?:[^\s@<>()\[\]{},;:"`]*[^\s@<>()\[\]{},;:"'`])?"#,
    r"@(?:[\p{L}\p{N}-]+\.)+\p{L}{2,}",
);

/// Line prefixes (case-insensitive, after trimming) that open a signature
/// block. The matching line and everything below it is discarded.
pub const SIGNATURE_PREFIXES: &[&str] = &[
    "Thanks",
    "Thank you",
    "Regards",
    "Best regards",
    "Cheers",
    "Sincerely",
    "From:",
    "Sent:",
    "To:",
    "Cc:",
    "Bcc:",
    "Subject:",
];

/// Sign-off glued onto the end of the last line after sentence punctuation
/// or a comma, e.g. `"... work? Thanks, Jane"`. At most three words may
/// follow the sign-off and none may contain `?`, so a question that merely
/// starts with "thanks" is left alone. Group 1 is the punctuation that is
/// kept.
pub const INLINE_SIGNOFF_PATTERN: &str = concat!(
    r"(?i)([.!?,])\s+(?:thank you|thanks|best regards|regards|cheers|sincerely)",
    r"(?:[\s,]+[^\s?]+){0,3}[\s,.!]*$",
);

// =============================================================================
// Title synthesis
// =============================================================================

/// Literal label prepended to every discussion title.
pub const TITLE_PREFIX: &str = "Q&A: ";

/// Marker appended when the body had to be shortened for the title.
pub const TITLE_ELLIPSIS: &str = "...";

/// Default number of body characters used in a title.
pub const DEFAULT_TITLE_MAX_CHARS: usize = 60;

/// Smallest configurable title length.
pub const MIN_TITLE_MAX_CHARS: usize = 10;

/// Largest configurable title length. GitHub rejects titles above 256 chars.
pub const MAX_TITLE_MAX_CHARS: usize = 200;

/// A truncated title is cut back to the last word boundary only when that
/// boundary keeps at least this fraction of the character budget.
pub const TITLE_WORD_BOUNDARY_THRESHOLD: f64 = 0.7;

// =============================================================================
// GitHub publishing
// =============================================================================

/// Discussion category every imported question is filed under.
pub const DEFAULT_CATEGORY: &str = "Session Questions";

/// GitHub GraphQL endpoint.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com/graphql";

/// Repository owner used when nothing else names one.
pub const DEFAULT_REPO_OWNER: &str = "brendacampbelldev";

/// Repository name used when nothing else names one.
pub const DEFAULT_REPO_NAME: &str = "github-copilot-training-qna";

/// Environment variable holding the API token.
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";

/// Environment variable overriding the repository owner.
pub const ENV_REPO_OWNER: &str = "GITHUB_REPOSITORY_OWNER";

/// Environment variable overriding the repository name.
pub const ENV_REPO_NAME: &str = "GITHUB_REPOSITORY_NAME";

/// Number of discussion categories fetched when resolving the category ID.
/// GitHub caps repositories at 25 categories.
pub const CATEGORY_PAGE_SIZE: u32 = 25;

/// Global timeout for a single GraphQL request.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
