//! Validated string types that enforce invariants at construction time

use std::fmt;
use thiserror::Error;

/// Validation errors for configuration values
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("hostname cannot be empty or whitespace")]
    EmptyHostName,

    #[error("port cannot be 0")]
    InvalidPort,

    #[error("invalid port number: {0}")]
    InvalidPortNumber(String),

    #[error("print delay must be at least 1 second")]
    ZeroPrintDelay,

    #[error("invalid print delay: {0}")]
    InvalidPrintDelay(String),

    #[error("claim token cannot be empty")]
    EmptyClaimToken,
}

/// Macro to generate validated string newtypes.
///
/// Each type gets:
/// - A `new()` constructor that validates
/// - `as_str()` getter
/// - `AsRef<str>`, `Deref`, `Display`, `TryFrom<String>` impls
macro_rules! validated_string {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident(String) {
            validation: |$s_param:ident| $validation:expr,
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis struct $name(String);

        impl $name {
            #[doc = concat!("Create a new ", stringify!($name), " after validation")]
            pub fn new($s_param: String) -> Result<Self, ValidationError> {
                let validate = || $validation;
                validate()?;
                Ok(Self($s_param))
            }

            #[doc = concat!("Get the ", stringify!($name), " as a string slice")]
            #[must_use]
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            #[inline]
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from($s_param: String) -> Result<Self, Self::Error> {
                Self::new($s_param)
            }
        }
    };
}

validated_string! {
    /// A bind host that cannot be empty or whitespace-only
    ///
    /// # Examples
    /// ```
    /// use scale_echo::types::HostName;
    ///
    /// let host = HostName::new("0.0.0.0".to_string()).unwrap();
    /// assert_eq!(host.as_str(), "0.0.0.0");
    /// assert!(HostName::new("  ".to_string()).is_err());
    /// ```
    #[doc(alias = "bind_address")]
    pub struct HostName(String) {
        validation: |s| {
            if s.trim().is_empty() {
                Err(ValidationError::EmptyHostName)
            } else {
                Ok(())
            }
        },
    }
}

validated_string! {
    /// Token served at the scale-test claim endpoint
    ///
    /// The token is served byte-for-byte, so surrounding whitespace is kept.
    /// An unset token is modelled as `Option::None`, never as an empty string.
    pub struct ClaimToken(String) {
        validation: |s| {
            if s.is_empty() {
                Err(ValidationError::EmptyClaimToken)
            } else {
                Ok(())
            }
        },
    }
}

impl ClaimToken {
    /// Build an optional token, treating an empty string as "not configured"
    #[must_use]
    pub fn from_optional(raw: &str) -> Option<Self> {
        Self::new(raw.to_string()).ok()
    }
}
