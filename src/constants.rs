//! Application-wide constants.
//!
//! Fixed tokens shared by the identity detector, the option schemas and the
//! dispatcher live here so the CLI surface stays in one place.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "sratools";

/// Environment variable that switches the driver into test impersonation.
pub const IMPERSONATE_ENV: &str = "SRATOOLS_IMPERSONATE";

/// Packed toolkit version used when none is injected at build time.
///
/// Layout: top 8 bits major, next 8 bits minor, low 16 bits patch.
pub const DEFAULT_TOOLKIT_VERS: u32 = 0x0300_0000;

/// Build-time override for the packed toolkit version (decimal or `0x` hex).
pub const TOOLKIT_VERS_OVERRIDE: Option<&str> = option_env!("SRATOOLS_TOOLKIT_VERS");

/// Process exit codes.
pub mod exit_code {
    /// Run completed (also reported when the parser raised, see dispatcher).
    pub const SUCCESS: i32 = 0;
    /// Startup failure: identity, version, config or execution.
    pub const FAILURE: i32 = 1;
    /// Post-parse validation of either schema failed.
    pub const VALIDATION: i32 = 3;
}

/// Limits on the common option surface.
pub mod limits {
    /// Maximum number of positional accessions.
    pub const MAX_ACCESSIONS: usize = 256;
    /// Maximum number of debug module entries.
    pub const MAX_DEBUG_MODULES: usize = 255;
}

/// Accepted values for `-L/--log-level`, matched case-sensitively.
pub const LOG_LEVELS: &[&str] = &[
    "fatal", "sys", "int", "err", "warn", "info", "debug", "0", "1", "2", "3", "4", "5", "6",
];

/// Delimiter for list-valued options such as `--debug`.
pub const LIST_DELIMITER: char = ',';

/// Default tracing filter when neither `RUST_LOG` nor config supplies one.
pub const DEFAULT_LOG_FILTER: &str = "warn";
