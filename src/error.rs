//! Error types for bus load estimation.
//!
//! This module defines the [`Error`] enum covering the validation policy
//! applied before bus load is computed, plus configuration persistence
//! failures. The frame-level operations themselves are total: every
//! integer/enum-valid input produces a result, so none of them return
//! `Result`.
//!
//! # Example
//!
//! ```
//! use canload_rs::{bus_load, Error, FrameVariant, Message};
//!
//! let messages = [
//!     Message::new(1000.0, 8, 1, FrameVariant::ClassicStandard),
//!     Message::new(500.0, 16, 1, FrameVariant::FdStandard),
//! ];
//!
//! // Classic and FD frames never share a bus.
//! match bus_load(&messages, 1_000_000) {
//!     Err(Error::MixedFrameFamilies) => {}
//!     other => panic!("expected MixedFrameFamilies, got {other:?}"),
//! }
//! ```

use core::fmt;

use crate::frame::FrameVariant;

/// Errors that can occur when computing bus load or persisting a
/// configuration.
///
/// All variants except the persistence ones correspond to caller-input
/// validation; when any of them fires, no frame arithmetic is performed.
#[derive(Debug)]
pub enum Error {
    /// The configured baud rate is zero or exceeds the supported maximum.
    InvalidBaudRate {
        /// The rejected baud rate in bit/s
        baud_rate: u32,
        /// The highest supported baud rate in bit/s
        max: u32,
    },

    /// The message set mixes classic CAN and CAN FD frames.
    ///
    /// A physical bus runs one family; load figures for a mixed set would
    /// be meaningless.
    MixedFrameFamilies,

    /// A message's payload exceeds what its frame variant can carry
    /// (8 bytes for classic CAN, 64 for CAN FD).
    PayloadTooLong {
        /// The rejected payload size in bytes
        payload_bytes: usize,
        /// The variant's payload limit in bytes
        max: usize,
        /// The frame variant of the offending message
        variant: FrameVariant,
    },

    /// An I/O error occurred while reading or writing a configuration file.
    #[cfg(feature = "serde")]
    IOError(std::io::Error),

    /// A configuration could not be serialized to or deserialized from JSON.
    #[cfg(feature = "serde")]
    ConfigSerializationError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidBaudRate { baud_rate, max } => {
                write!(
                    f,
                    "Invalid baud rate: {baud_rate} bit/s (supported range is 1..={max})"
                )
            }
            Error::MixedFrameFamilies => {
                write!(f, "Message set mixes classic CAN and CAN FD frames")
            }
            Error::PayloadTooLong {
                payload_bytes,
                max,
                variant,
            } => write!(
                f,
                "Payload of {payload_bytes} bytes exceeds the {max}-byte limit of {variant:?}"
            ),
            #[cfg(feature = "serde")]
            Error::IOError(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "serde")]
            Error::ConfigSerializationError(s) => {
                write!(f, "Configuration serialization error: {s}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "serde")]
            Error::IOError(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "serde")]
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IOError(err)
    }
}

/// A specialized Result type for bus load operations.
pub type Result<T> = core::result::Result<T, Error>;
