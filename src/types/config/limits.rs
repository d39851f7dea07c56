//! Timing and thread limit configuration types

use std::num::{NonZeroU64, NonZeroUsize};
use std::str::FromStr;
use std::time::Duration;

use crate::types::ValidationError;

nonzero_newtype! {
    /// Seconds between two periodic traffic summaries
    ///
    /// Zero is rejected: a zero-length period would spin the reporter.
    ///
    /// # Examples
    /// ```
    /// use scale_echo::types::PrintDelay;
    /// use std::time::Duration;
    ///
    /// let delay = PrintDelay::new(5).unwrap();
    /// assert_eq!(delay.as_duration(), Duration::from_secs(5));
    /// assert!(PrintDelay::new(0).is_none());
    /// ```
    #[doc(alias = "print_interval")]
    pub struct PrintDelay(NonZeroU64: u64);
}

impl PrintDelay {
    /// Default summary period (1 second)
    pub const DEFAULT: Self = Self(NonZeroU64::new(1).unwrap());

    /// Period as a `Duration`
    #[must_use]
    #[inline]
    pub const fn as_duration(&self) -> Duration {
        Duration::from_secs(self.get())
    }
}

impl Default for PrintDelay {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for PrintDelay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let secs = s
            .trim()
            .parse::<u64>()
            .map_err(|_| ValidationError::InvalidPrintDelay(s.to_string()))?;
        Self::new(secs).ok_or(ValidationError::ZeroPrintDelay)
    }
}

nonzero_newtype! {
    /// A non-zero thread count
    ///
    /// Ensures the runtime always has at least 1 worker thread.
    pub struct ThreadCount(NonZeroUsize: usize);
}

impl ThreadCount {
    /// Single worker thread
    pub const SINGLE: Self = Self(NonZeroUsize::new(1).unwrap());

    /// One worker per available CPU core
    #[must_use]
    pub fn available_parallelism() -> Self {
        std::thread::available_parallelism()
            .map(Self)
            .unwrap_or(Self::SINGLE)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_delay_default() {
        assert_eq!(PrintDelay::default().get(), 1);
        assert_eq!(PrintDelay::DEFAULT.as_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_print_delay_zero_rejected() {
        assert!(PrintDelay::new(0).is_none());
        assert!(matches!(
            "0".parse::<PrintDelay>(),
            Err(ValidationError::ZeroPrintDelay)
        ));
    }

    #[test]
    fn test_print_delay_from_str() {
        let delay: PrintDelay = "10".parse().unwrap();
        assert_eq!(delay.as_duration(), Duration::from_secs(10));
        assert!(matches!(
            "soon".parse::<PrintDelay>(),
            Err(ValidationError::InvalidPrintDelay(_))
        ));
    }

    #[test]
    fn test_thread_count_available_parallelism_nonzero() {
        assert!(ThreadCount::available_parallelism().get() >= 1);
    }

    #[test]
    fn test_thread_count_zero_rejected() {
        assert!(ThreadCount::new(0).is_none());
        assert_eq!(ThreadCount::new(8).unwrap().get(), 8);
    }
}
