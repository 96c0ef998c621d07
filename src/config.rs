//! Persisted calculator configuration.
//!
//! A [`BusConfig`] is the unit the surrounding application saves and
//! restores: the baud rate plus the message table. The JSON shape is
//! wire-compatible with the message lists earlier versions of this tool
//! kept in browser storage, including the legacy `"FDCAN"` frame-type
//! spelling, which deserializes as `FDCAN_STANDARD`.
//!
//! ```no_run
//! use canload_rs::{bus_load, BusConfig, Result};
//!
//! fn restore_and_compute() -> Result<()> {
//!     let config = BusConfig::load_from_file("messages.json")?;
//!     let load = bus_load(&config.messages, config.baud_rate)?;
//!     println!("bus load {:.2}%", load.avg_percent());
//!     config.save_to_file("messages.json")?;
//!     Ok(())
//! }
//! ```

use crate::busload::{DEFAULT_BAUD_RATE, Message};
use crate::error::{Error, Result};
use crate::frame::FrameVariant;

/// The persistable calculator state: baud rate and message table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BusConfig {
    /// Bus baud rate in bit/s.
    #[cfg_attr(feature = "serde", serde(rename = "baudRate"))]
    pub baud_rate: u32,
    /// The configured periodic messages.
    pub messages: Vec<Message>,
}

impl Default for BusConfig {
    /// A small classic-CAN starter configuration at 1 Mbit/s.
    fn default() -> Self {
        BusConfig {
            baud_rate: DEFAULT_BAUD_RATE,
            messages: vec![
                Message::new(1000.0, 8, 7, FrameVariant::ClassicStandard),
                Message::new(500.0, 8, 1, FrameVariant::ClassicExtended),
            ],
        }
    }
}

#[cfg(feature = "serde")]
impl BusConfig {
    /// Save the configuration as pretty-printed JSON.
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            Error::ConfigSerializationError(format!("Failed to serialize configuration: {e}"))
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a configuration from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: BusConfig = serde_json::from_str(&json).map_err(|e| {
            Error::ConfigSerializationError(format!("Failed to parse configuration: {e}"))
        })?;
        Ok(config)
    }

    /// Load a configuration, falling back to [`BusConfig::default`] when
    /// the file is missing, unreadable, or holds no messages.
    pub fn load_or_default(path: &str) -> Self {
        match Self::load_from_file(path) {
            Ok(config) if !config.messages.is_empty() => config,
            _ => BusConfig::default(),
        }
    }
}
