//! Network-related configuration types

use std::num::NonZeroU16;
use std::str::FromStr;

use crate::types::ValidationError;

nonzero_newtype! {
    /// A validated listen port that cannot be zero
    ///
    /// # Examples
    /// ```
    /// use scale_echo::types::Port;
    ///
    /// let port = Port::new(8080).unwrap();
    /// assert_eq!(port.get(), 8080);
    ///
    /// // Port 0 is invalid
    /// assert!(Port::new(0).is_none());
    ///
    /// assert_eq!(Port::HTTP.get(), 80);
    /// ```
    #[doc(alias = "tcp_port")]
    pub struct Port(NonZeroU16: u16);
}

impl Port {
    /// Plain HTTP port (80)
    pub const HTTP: Self = Self(NonZeroU16::new(80).unwrap());

    /// Default listen port
    pub const DEFAULT: Self = Self::HTTP;
}

impl Default for Port {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for Port {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let port = s
            .trim()
            .parse::<u16>()
            .map_err(|_| ValidationError::InvalidPortNumber(s.to_string()))?;
        Self::new(port).ok_or(ValidationError::InvalidPort)
    }
}

impl TryFrom<u16> for Port {
    type Error = ValidationError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ValidationError::InvalidPort)
    }
}
