//! sratools - multi-identity driver for the SRA toolkit command-line tools.
//!
//! One binary, installed under the names of several tools, works out from
//! `argv[0]` which tool it stands in for, validates the command line against
//! that tool's options plus the shared options, and rebuilds a sanitized
//! argument vector for the real tool.

pub mod args;
pub mod argv;
pub mod cmdline;
pub mod config;
pub mod constants;
pub mod dispatch;
pub mod error;
pub mod identity;
pub mod options;

use args::Args;
use config::{LoggingConfig, load_default_config, validate_config};
use constants::IMPERSONATE_ENV;
use dispatch::{Dispatcher, DryRun};
use identity::Identity;
use tracing::debug;

pub use error::{Error, Result};

/// Main entry point for the sratools driver.
///
/// Returns the exit status of the dispatched invocation.
pub fn run() -> Result<i32> {
    let argv = collect_args()?;

    let config = load_default_config()?;
    validate_config(&config)?;
    init_logging(&config.logging);

    let test_imp = config.impersonation(std::env::var(IMPERSONATE_ENV).ok());
    let args = Args::new(&argv, test_imp.as_deref());
    if args.testing() {
        debug!("{}", args.dump());
    }

    let identity = check_identity(Identity::detect(args.program()))?;

    let mut dispatcher = Dispatcher::new(&args, &identity)?;
    let mut executor = DryRun::stdout();
    Ok(dispatcher.run(&mut executor))
}

/// Reject identities the driver cannot dispatch.
pub fn check_identity(identity: Identity) -> Result<Identity> {
    debug!(%identity, "detected identity");

    if identity.invalid() {
        return Err(Error::UnrecognizedIdentity {
            basename: identity.basename().to_string(),
        });
    }
    if identity.invalid_version() {
        return Err(Error::VersionMismatch {
            requested: identity.requested_version().to_string(),
            compiled: identity.toolkit_version().to_string(),
        });
    }
    Ok(identity)
}

fn collect_args() -> Result<Vec<String>> {
    std::env::args_os()
        .enumerate()
        .map(|(index, arg)| {
            arg.into_string().map_err(|arg| Error::NonUtf8Argument {
                index,
                lossy: arg.to_string_lossy().into_owned(),
            })
        })
        .collect()
}

fn init_logging(logging: &LoggingConfig) {
    use tracing_subscriber::{EnvFilter, fmt};

    // stdout belongs to the impersonated tool
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use identity::ToolkitVersion;

    const V3_0_0: ToolkitVersion = ToolkitVersion::from_packed(0x0300_0000);

    #[test]
    fn test_check_identity_accepts_known_tool() {
        let identity = Identity::detect_with("fasterq-dump", V3_0_0);
        assert!(check_identity(identity).is_ok());
    }

    #[test]
    fn test_check_identity_rejects_unknown_tool() {
        let identity = Identity::detect_with("/bin/vdb-dump", V3_0_0);
        assert!(matches!(
            check_identity(identity),
            Err(Error::UnrecognizedIdentity { ref basename }) if basename == "vdb-dump"
        ));
    }

    #[test]
    fn test_check_identity_rejects_pinned_mismatch() {
        let identity = Identity::detect_with("prefetch.9.9.9", V3_0_0);
        assert!(matches!(
            check_identity(identity),
            Err(Error::VersionMismatch { ref requested, ref compiled })
                if requested == "9.9.9" && compiled == "3.0.0"
        ));
    }

    #[test]
    fn test_check_identity_accepts_pinned_match() {
        let identity = Identity::detect_with("prefetch.3.0.0", V3_0_0);
        assert!(check_identity(identity).is_ok());
    }
}
