#![forbid(unsafe_code)]

//! # canload-rs
//!
//! A Rust library for estimating CAN / CAN FD bus utilization and
//! simulating frame bit streams.
//!
//! Given a set of periodic messages, the crate computes how much of the
//! bus bandwidth they consume. Because bit-stuffing makes the on-wire
//! length of a frame data-dependent, every figure is a min/max pair: the
//! minimum assumes no stuffing, the maximum one stuff bit per five
//! stuffable bits. For display purposes the crate can also render one
//! concrete frame as an ordered list of labeled bits, stuffing included.
//!
//! ## Features
//!
//! - **Frame length bounds**: min/max on-wire bits for all four frame
//!   formats (classic/FD × standard/extended identifier), including the
//!   non-linear CAN FD DLC length table
//! - **Bus load aggregation**: utilization percentage over a message set,
//!   validated for baud-rate range, payload limits, and single-family use
//! - **Bit-stream simulation**: labeled bit sequences with the stuffing
//!   transform applied, driven by an injectable random-bit source
//! - **Configuration persistence**: JSON save/load of the message table
//!   (`serde` feature)
//! - **embedded-can interop**: classify observed frames into message
//!   entries (`can` feature)
//!
//! ## Quick Start
//!
//! ### Estimating bus load
//!
//! ```
//! use canload_rs::{bus_load, FrameVariant, Message, Result};
//!
//! fn main() -> Result<()> {
//!     let messages = [
//!         Message::new(1000.0, 8, 7, FrameVariant::ClassicStandard),
//!         Message::new(500.0, 8, 1, FrameVariant::ClassicExtended),
//!     ];
//!
//!     let load = bus_load(&messages, 1_000_000)?;
//!     println!(
//!         "{:.2}% .. {:.2}% (avg {:.2}%)",
//!         load.min_percent,
//!         load.max_percent,
//!         load.avg_percent()
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ### Simulating one frame
//!
//! ```
//! use canload_rs::{build_frame, FieldKind, FrameVariant};
//!
//! let bits = build_frame(FrameVariant::FdStandard, 16);
//! for bit in &bits {
//!     print!("{}", bit.symbol());
//! }
//! println!();
//!
//! let stuff_bits = bits.iter().filter(|b| b.kind == FieldKind::Stuff).count();
//! println!("{} bits on the wire, {} of them stuffed", bits.len(), stuff_bits);
//! ```
//!
//! Tests inject a seeded source instead of `thread_rng()`:
//!
//! ```
//! use canload_rs::{build_frame_with, FrameVariant, RngBitSource};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let frame = |seed| {
//!     let mut source = RngBitSource(StdRng::seed_from_u64(seed));
//!     build_frame_with(FrameVariant::ClassicStandard, 8, &mut source)
//! };
//! assert_eq!(frame(42), frame(42));
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`frame`] | Frame variants, the DLC table, length bounds, bit streams |
//! | [`busload`] | Message model and load aggregation |
//! | [`config`] | JSON persistence of the calculator state |
//! | [`error`] | Error types and [`Result`] alias |
//!
//! ## Error Handling
//!
//! The frame-level operations are total functions: out-of-range payloads
//! saturate through the DLC table instead of failing. Only the validation
//! and persistence layers return [`Result<T>`], with [`Error`] covering
//! the discrete rejection reasons.

pub mod busload;
pub mod config;
pub mod error;
pub mod frame;

// Re-export commonly used types at the crate root
pub use busload::{BusLoad, DEFAULT_BAUD_RATE, MAX_BAUD_RATE, Message, bus_load};
pub use config::BusConfig;
pub use error::{Error, Result};
pub use frame::{
    Bit, BitSource, DLC_TO_LENGTH, FieldKind, FrameFamily, FrameLength, FrameVariant,
    MAX_CLASSIC_DATA_LEN, MAX_FD_DATA_LEN, apply_bit_stuffing, build_frame_with, dlc_to_len,
    len_to_dlc,
};

#[cfg(feature = "rand")]
pub use frame::{RngBitSource, build_frame};
