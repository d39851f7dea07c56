//! Core value types shared across the server
//!
//! Configuration newtypes live here so that invalid values (port 0, a zero
//! print delay, an empty bind host) are rejected when the configuration is
//! built, not when the listener starts.

pub mod config;
pub mod validated;

pub use config::{Port, PrintDelay, ThreadCount};
pub use validated::{ClaimToken, HostName, ValidationError};
