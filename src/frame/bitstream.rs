//! Simulated bit-level frame encoding.
//!
//! [`build_frame_with`] produces the ordered sequence of labeled bits that
//! one concrete frame would put on the wire: field layout and stuffing are
//! exact, while identifier, payload and CRC bit values are drawn from an
//! injected [`BitSource`]. They are placeholders for display, not real
//! protocol content; no CRC is computed.
//!
//! # Example
//!
//! ```
//! use canload_rs::{build_frame, FieldKind, FrameVariant};
//!
//! let bits = build_frame(FrameVariant::ClassicStandard, 2);
//! assert_eq!(bits[0].label, "SOF");
//! // 13 fixed tail bits: CRC delimiter, ACK slot + delimiter, EOF, IFS
//! assert_eq!(bits.last().unwrap().kind, FieldKind::Ifs);
//! ```

use super::FrameVariant;

/// The frame field a bit belongs to.
///
/// Used by renderers to color bit cells; `Stuff` marks bits inserted by the
/// stuffing transform rather than emitted by a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldKind {
    /// Start-of-frame bit.
    Sof,
    /// Identifier and associated flag bits.
    Arbitration,
    /// Control flags and the DLC field.
    Control,
    /// Payload bits.
    Data,
    /// Stuff count and CRC value bits, plus the CRC delimiter.
    Crc,
    /// Acknowledge slot and delimiter.
    Ack,
    /// End-of-frame bits.
    Eof,
    /// Inter-frame spacing bits.
    Ifs,
    /// A bit inserted by the stuffing transform.
    Stuff,
}

/// One labeled bit of a simulated frame.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bit {
    /// Wire level, `true` for '1'.
    pub value: bool,
    /// Short field-position label, e.g. `ID10`, `D7`, `CRC16`.
    pub label: String,
    /// The field this bit belongs to.
    pub kind: FieldKind,
    /// Toggles per payload byte so renderers can alternate data-byte
    /// shading; always `false` outside the data field.
    pub alt: bool,
}

impl Bit {
    fn new(value: bool, label: impl Into<String>, kind: FieldKind) -> Self {
        Bit {
            value,
            label: label.into(),
            kind,
            alt: false,
        }
    }

    /// The bit value as a display character, '0' or '1'.
    #[inline]
    pub fn symbol(&self) -> char {
        if self.value { '1' } else { '0' }
    }
}

/// A source of uniformly random bits for the simulated frame content.
///
/// Injectable so tests can drive the builder deterministically. With the
/// `rand` feature, [`RngBitSource`] adapts any [`rand::RngCore`], e.g. a
/// seeded `StdRng` or `thread_rng()`.
pub trait BitSource {
    /// Draw the next bit.
    fn next_bit(&mut self) -> bool;
}

/// Adapter turning any [`rand::RngCore`] into a [`BitSource`].
#[cfg(feature = "rand")]
pub struct RngBitSource<R>(pub R);

#[cfg(feature = "rand")]
impl<R: rand::RngCore> BitSource for RngBitSource<R> {
    #[inline]
    fn next_bit(&mut self) -> bool {
        self.0.next_u32() & 1 == 1
    }
}

/// Insert stuff bits into a frame's stuffable region.
///
/// Scans the bits in order and inserts one complementary bit after every
/// run of five identical values. After an insertion the run counter
/// restarts empty: the inserted bit does not seed a new run.
pub fn apply_bit_stuffing(bits: Vec<Bit>) -> Vec<Bit> {
    let mut stuffed = Vec::with_capacity(bits.len() + bits.len() / 5);
    let mut run = 0u32;
    let mut last: Option<bool> = None;

    for bit in bits {
        let value = bit.value;
        stuffed.push(bit);
        if last == Some(value) {
            run += 1;
        } else {
            run = 1;
            last = Some(value);
        }
        if run == 5 {
            stuffed.push(Bit::new(!value, "Stuff", FieldKind::Stuff));
            run = 0;
            last = None;
        }
    }
    stuffed
}

/// Build the full bit stream of one simulated frame.
///
/// The output is `SOF ++ stuffed(arbitration..CRC) ++ fixed tail`, so its
/// length is the stuffed-region length plus 14. Payload sizes beyond the
/// variant's maximum saturate through the DLC table exactly as in
/// [`FrameLength::compute`](crate::FrameLength::compute).
pub fn build_frame_with<S: BitSource>(
    variant: FrameVariant,
    payload_bytes: usize,
    source: &mut S,
) -> Vec<Bit> {
    let mut stuffable: Vec<Bit> = Vec::new();

    // Arbitration field
    for i in (0..11).rev() {
        stuffable.push(Bit::new(
            source.next_bit(),
            format!("ID{i}"),
            FieldKind::Arbitration,
        ));
    }
    if variant.is_extended() {
        stuffable.push(Bit::new(true, "SRR", FieldKind::Arbitration));
        stuffable.push(Bit::new(true, "IDE", FieldKind::Arbitration));
        for i in (0..18).rev() {
            stuffable.push(Bit::new(
                source.next_bit(),
                format!("ExtID{i}"),
                FieldKind::Arbitration,
            ));
        }
    } else {
        // RRS is recessive in FD frames, RTR dominant for a data frame
        if variant.is_fd() {
            stuffable.push(Bit::new(true, "RRS", FieldKind::Arbitration));
        } else {
            stuffable.push(Bit::new(false, "RTR", FieldKind::Arbitration));
        }
        stuffable.push(Bit::new(false, "IDE", FieldKind::Arbitration));
    }

    // Control field
    if variant.is_fd() {
        stuffable.push(Bit::new(true, "FDF", FieldKind::Control));
        stuffable.push(Bit::new(false, "r", FieldKind::Control));
        stuffable.push(Bit::new(true, "BRS", FieldKind::Control));
        stuffable.push(Bit::new(false, "ESI", FieldKind::Control));
    } else if variant.is_extended() {
        stuffable.push(Bit::new(false, "RTR", FieldKind::Control));
        stuffable.push(Bit::new(false, "r1", FieldKind::Control));
        stuffable.push(Bit::new(false, "r0", FieldKind::Control));
    } else {
        stuffable.push(Bit::new(false, "r0", FieldKind::Control));
    }

    let dlc = variant.dlc_value(payload_bytes);
    for i in (0..4).rev() {
        stuffable.push(Bit::new(
            dlc >> i & 1 == 1,
            format!("DLC{i}"),
            FieldKind::Control,
        ));
    }

    // Data field
    let wire_len = variant.wire_payload_len(payload_bytes);
    for byte in 0..wire_len {
        for i in (0..8).rev() {
            let mut bit = Bit::new(source.next_bit(), format!("D{i}"), FieldKind::Data);
            bit.alt = byte % 2 == 1;
            stuffable.push(bit);
        }
    }

    // CRC field; FD frames lead with the stuff count
    if variant.is_fd() {
        for i in (0..4).rev() {
            stuffable.push(Bit::new(
                source.next_bit(),
                format!("SC{i}"),
                FieldKind::Crc,
            ));
        }
    }
    for i in (0..variant.crc_bit_count(dlc)).rev() {
        stuffable.push(Bit::new(
            source.next_bit(),
            format!("CRC{i}"),
            FieldKind::Crc,
        ));
    }

    let mut frame = Vec::with_capacity(stuffable.len() + stuffable.len() / 5 + 14);
    frame.push(Bit::new(false, "SOF", FieldKind::Sof));
    frame.extend(apply_bit_stuffing(stuffable));

    // Fixed tail, not subject to stuffing
    frame.push(Bit::new(true, "Del", FieldKind::Crc));
    frame.push(Bit::new(false, "Slot", FieldKind::Ack));
    frame.push(Bit::new(true, "Del", FieldKind::Ack));
    for _ in 0..7 {
        frame.push(Bit::new(true, "EOF", FieldKind::Eof));
    }
    for _ in 0..3 {
        frame.push(Bit::new(true, "IFS", FieldKind::Ifs));
    }
    frame
}

/// Build a simulated frame using the thread-local RNG.
///
/// Convenience wrapper around [`build_frame_with`].
#[cfg(feature = "rand")]
pub fn build_frame(variant: FrameVariant, payload_bytes: usize) -> Vec<Bit> {
    build_frame_with(variant, payload_bytes, &mut RngBitSource(rand::thread_rng()))
}
