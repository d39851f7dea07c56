//! Configuration loading from command-line arguments and environment variables
//!
//! clap resolves each setting as flag, then environment variable, then default.
//! This module turns the resolved arguments into a validated [`Config`].

use super::ConfigError;
use super::defaults;
use super::types::{Config, Mode};
use crate::args::ServerArgs;
use crate::types::{ClaimToken, HostName, ThreadCount};

/// Build the configuration record from parsed arguments
///
/// # Errors
/// Returns [`ConfigError::InvalidMode`] for a mode other than `count`/`log`,
/// or a validation error for an empty bind host.
pub fn load_config(args: &ServerArgs) -> Result<Config, ConfigError> {
    let mode: Mode = args.mode.parse()?;
    let host = HostName::new(args.host.clone())?;

    let config = Config {
        host,
        port: args.port,
        print_delay: args.delay,
        mode,
        claim_token: ClaimToken::from_optional(&args.sct_token),
        shutdown_grace: defaults::grace_from_secs(args.shutdown_grace),
        threads: ThreadCount::new(args.threads),
    };

    config.validate()?;
    Ok(config)
}
