//! Default values for configuration fields

use crate::constants::{defaults, shutdown};
use crate::types::HostName;
use std::time::Duration;

/// Default bind host (all interfaces)
#[inline]
pub fn host() -> HostName {
    HostName::new(defaults::HOST.to_string()).expect("default host is non-empty")
}

/// Default shutdown grace period
#[inline]
pub fn shutdown_grace() -> Option<Duration> {
    grace_from_secs(shutdown::DEFAULT_GRACE_SECS)
}

/// Map a grace period in seconds to a bound, 0 meaning "no bound"
#[inline]
pub fn grace_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}
