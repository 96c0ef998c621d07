//! On-wire frame length bounds.
//!
//! The length of a CAN frame on the bus is not fully determined by its
//! fields: the stuffable region (arbitration through CRC) grows by one bit
//! for every run of five identical bits the transmitter happens to produce.
//! [`FrameLength::compute`] therefore returns a pair of bounds:
//!
//! - `min_bits` assumes no stuffing at all (the theoretical lower bound),
//! - `max_bits` assumes one stuff bit per five stuffable bits (the worst
//!   case).
//!
//! Real frames land in between, depending on the data; bus load derived
//! from these bounds brackets the true utilization.

use super::FrameVariant;

/// Non-stuffable form bits present in every frame:
/// SOF, CRC delimiter, ACK slot + delimiter, EOF, IFS.
pub(crate) const FIXED_FORM_BITS: u32 = 1 + 1 + 2 + 7 + 3;

/// Min/max on-wire bit length of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameLength {
    /// Frame length with no stuff bits inserted.
    pub min_bits: u32,
    /// Frame length with worst-case stuffing.
    pub max_bits: u32,
}

/// Stuffable bits besides payload and CRC value bits.
///
/// The breakdown per variant (CRC value bits included via
/// [`FrameVariant::crc_bit_count`] since their count depends on the DLC):
///
/// - ClassicStandard: ID(11), RTR, IDE, r0, DLC(4), CRC(15)
/// - ClassicExtended: BaseID(11), SRR, IDE, ExtID(18), RTR, r1, r0, DLC(4), CRC(15)
/// - FdStandard: ID(11), RRS, IDE, FDF, r, BRS, ESI, DLC(4), StuffCount(4), CRC(17/21)
/// - FdExtended: BaseID(11), SRR, IDE, ExtID(18), FDF, r, BRS, ESI, DLC(4), StuffCount(4), CRC(21/25)
const fn stuffable_overhead(variant: FrameVariant, dlc: u8) -> u32 {
    let crc = variant.crc_bit_count(dlc);
    match variant {
        FrameVariant::ClassicStandard => 11 + 1 + 1 + 1 + 4 + crc,
        FrameVariant::ClassicExtended => 11 + 1 + 1 + 18 + 1 + 1 + 1 + 4 + crc,
        FrameVariant::FdStandard => 11 + 1 + 1 + 1 + 1 + 1 + 1 + 4 + 4 + crc,
        FrameVariant::FdExtended => 11 + 1 + 1 + 18 + 1 + 1 + 1 + 1 + 4 + 4 + crc,
    }
}

impl FrameLength {
    /// Compute the length bounds for one frame.
    ///
    /// `payload_bytes` beyond the variant's maximum does not fail: FD
    /// lengths saturate to the largest DLC bucket (64 bytes). Range
    /// enforcement is the caller's policy, applied before aggregation.
    pub const fn compute(variant: FrameVariant, payload_bytes: usize) -> Self {
        let dlc = variant.dlc_value(payload_bytes);
        let payload_bits = variant.wire_payload_len(payload_bytes) as u32 * 8;
        let stuffable_bits = stuffable_overhead(variant, dlc) + payload_bits;

        let min_bits = stuffable_bits + FIXED_FORM_BITS;
        // Worst case inserts one stuff bit per five stuffable bits.
        let max_bits = min_bits + stuffable_bits / 5;

        FrameLength { min_bits, max_bits }
    }
}

// ============================================================================
// embedded_can integration (requires `can` feature)
// ============================================================================

#[cfg(feature = "can")]
impl FrameLength {
    /// Length bounds of an observed classic CAN frame.
    pub fn of_frame(frame: &impl embedded_can::Frame) -> Self {
        let variant = FrameVariant::classic_for_id(&frame.id());
        Self::compute(variant, frame.dlc())
    }
}
