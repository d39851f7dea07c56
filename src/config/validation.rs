//! Configuration validation
//!
//! Most validations are enforced by the type system (NonZero port and delay,
//! non-empty host, closed `Mode` enum). This checks the remaining semantic
//! constraints and warns about settings that are legal but risky.

use super::ConfigError;
use super::types::{Config, Mode};
use crate::constants::shutdown::DEFAULT_GRACE_SECS;

impl Config {
    /// Validate configuration for correctness
    ///
    /// Nothing left to reject today; risky but legal settings are logged.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shutdown_grace.is_none() {
            tracing::warn!(
                "Shutdown grace period disabled: a stalled request can delay exit indefinitely \
                 (default is {}s)",
                DEFAULT_GRACE_SECS
            );
        }

        if self.mode == Mode::Log && self.print_delay.get() > 1 {
            tracing::debug!(
                "Print delay {}s ignored in log mode (no periodic summaries)",
                self.print_delay
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ClaimToken;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_unbounded_grace_is_valid() {
        let config = Config {
            shutdown_grace: None,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_mode_with_delay_is_valid() {
        let config = Config {
            mode: Mode::Log,
            print_delay: crate::types::PrintDelay::new(10).unwrap(),
            claim_token: Some(ClaimToken::new("abc123".to_string()).unwrap()),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }
}
