//! Error types for sratools.

/// Result type alias for sratools operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for sratools.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invocation basename is none of the impersonated tools.
    #[error("'{basename}' is not a recognized tool name")]
    UnrecognizedIdentity {
        /// Basename derived from `argv[0]`.
        basename: String,
    },

    /// Version pinned in the invocation name differs from the toolkit.
    #[error("requested version '{requested}' does not match toolkit version '{compiled}'")]
    VersionMismatch {
        /// Version suffix from the invocation name.
        requested: String,
        /// Compiled toolkit version.
        compiled: String,
    },

    /// Post-parse semantic check failed.
    #[error("invalid options: {message}")]
    Validation {
        /// Description of the validation failure.
        message: String,
    },

    /// Command-line grammar error raised by the parser.
    #[error(transparent)]
    Parse(#[from] clap::Error),

    /// Command-line argument is not valid UTF-8.
    #[error("argument {index} is not valid UTF-8: {lossy}")]
    NonUtf8Argument {
        /// Position in the argument vector.
        index: usize,
        /// Lossy rendering of the argument.
        lossy: String,
    },

    /// A token cannot be handed to process execution.
    #[error("argument '{token}' contains an interior NUL byte")]
    InteriorNul {
        /// Offending token (lossy).
        token: String,
        /// Underlying conversion error.
        #[source]
        source: std::ffi::NulError,
    },

    /// Handing the argument vector to the tool failed.
    #[error("failed to execute tool: {message}")]
    Execution {
        /// Description of the failure.
        message: String,
    },

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Build a validation error from any displayable message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
