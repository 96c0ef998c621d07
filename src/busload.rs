//! Bus utilization from a set of periodic messages.
//!
//! Each message contributes `frame length × frequency × frames per period`
//! bits per second; the total over all messages, divided by the baud rate,
//! is the bus load. Because frame lengths are only bounded (stuffing is
//! data-dependent), the result is a min/max pair bracketing the true
//! utilization.
//!
//! # Example
//!
//! ```
//! use canload_rs::{bus_load, FrameVariant, Message, DEFAULT_BAUD_RATE};
//!
//! let messages = [
//!     Message::new(1000.0, 8, 7, FrameVariant::ClassicStandard),
//!     Message::new(500.0, 8, 1, FrameVariant::ClassicExtended),
//! ];
//!
//! let load = bus_load(&messages, DEFAULT_BAUD_RATE)?;
//! assert!(load.max_percent >= load.min_percent);
//! println!("{:.2}% .. {:.2}%", load.min_percent, load.max_percent);
//! # Ok::<(), canload_rs::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::frame::{FrameFamily, FrameLength, FrameVariant};

/// Baud rate assumed when a configuration does not specify one, in bit/s.
pub const DEFAULT_BAUD_RATE: u32 = 1_000_000;

/// Highest supported baud rate in bit/s.
pub const MAX_BAUD_RATE: u32 = 5_000_000;

/// One periodic message on the bus.
///
/// The serialized field names (`frequency`, `dataLength`, `frameCount`,
/// `frameType`) match the configuration JSON produced by earlier versions
/// of this tool, so saved message lists keep loading.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// Transmission cycle frequency in Hz. Fractional rates are allowed.
    #[cfg_attr(feature = "serde", serde(rename = "frequency"))]
    pub frequency_hz: f64,
    /// Payload size in bytes.
    #[cfg_attr(feature = "serde", serde(rename = "dataLength"))]
    pub payload_bytes: usize,
    /// Frames sent per transmission cycle.
    #[cfg_attr(feature = "serde", serde(rename = "frameCount"))]
    pub frames_per_period: u32,
    /// Frame format used by this message.
    #[cfg_attr(feature = "serde", serde(rename = "frameType"))]
    pub variant: FrameVariant,
}

impl Message {
    /// Create a periodic message entry.
    pub const fn new(
        frequency_hz: f64,
        payload_bytes: usize,
        frames_per_period: u32,
        variant: FrameVariant,
    ) -> Self {
        Message {
            frequency_hz,
            payload_bytes,
            frames_per_period,
            variant,
        }
    }

    /// Bits per second this message contributes, as a min/max pair.
    pub fn bits_per_second(&self) -> (f64, f64) {
        let len = FrameLength::compute(self.variant, self.payload_bytes);
        let frames_per_second = self.frequency_hz * f64::from(self.frames_per_period);
        (
            f64::from(len.min_bits) * frames_per_second,
            f64::from(len.max_bits) * frames_per_second,
        )
    }
}

// ============================================================================
// embedded_can integration (requires `can` feature)
// ============================================================================

#[cfg(feature = "can")]
impl Message {
    /// Build a periodic-message entry from an observed classic CAN frame.
    ///
    /// Useful when estimating load from captured traffic: classify each
    /// unique frame once, attach the observed cycle frequency.
    pub fn for_frame(frame: &impl embedded_can::Frame, frequency_hz: f64) -> Self {
        Message::new(
            frequency_hz,
            frame.dlc(),
            1,
            FrameVariant::classic_for_id(&frame.id()),
        )
    }
}

/// Aggregate bus utilization as a percentage of the baud rate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BusLoad {
    /// Utilization assuming no stuff bits in any frame.
    pub min_percent: f64,
    /// Utilization assuming worst-case stuffing in every frame.
    pub max_percent: f64,
}

impl BusLoad {
    /// Midpoint of the min/max bounds, the usual single display figure.
    #[inline]
    pub fn avg_percent(&self) -> f64 {
        (self.min_percent + self.max_percent) / 2.0
    }
}

fn validate(messages: &[Message], baud_rate: u32) -> Result<()> {
    if baud_rate == 0 || baud_rate > MAX_BAUD_RATE {
        return Err(Error::InvalidBaudRate {
            baud_rate,
            max: MAX_BAUD_RATE,
        });
    }

    let has_classic = messages
        .iter()
        .any(|m| m.variant.family() == FrameFamily::Classic);
    let has_fd = messages.iter().any(|m| m.variant.family() == FrameFamily::Fd);
    if has_classic && has_fd {
        return Err(Error::MixedFrameFamilies);
    }

    for message in messages {
        let max = message.variant.max_payload();
        if message.payload_bytes > max {
            return Err(Error::PayloadTooLong {
                payload_bytes: message.payload_bytes,
                max,
                variant: message.variant,
            });
        }
    }
    Ok(())
}

/// Compute the aggregate bus load of a message set.
///
/// Validates the inputs first (baud rate range, single frame family,
/// per-variant payload limits); no frame arithmetic runs when validation
/// fails. An empty message set is valid and loads the bus at 0%.
pub fn bus_load(messages: &[Message], baud_rate: u32) -> Result<BusLoad> {
    validate(messages, baud_rate)?;

    let mut min_bps = 0.0;
    let mut max_bps = 0.0;
    for message in messages {
        let (min, max) = message.bits_per_second();
        min_bps += min;
        max_bps += max;
    }

    let baud = f64::from(baud_rate);
    Ok(BusLoad {
        min_percent: min_bps / baud * 100.0,
        max_percent: max_bps / baud * 100.0,
    })
}
