//! CAN frame variants and the CAN FD DLC length table.
//!
//! Classic CAN carries up to 8 data bytes and encodes the byte count
//! directly in the 4-bit DLC field. CAN FD carries up to 64 bytes and maps
//! DLC values above 8 through a non-linear table:
//!
//! - DLC 0-8: data length = DLC
//! - DLC 9: 12 bytes
//! - DLC 10: 16 bytes
//! - DLC 11: 20 bytes
//! - DLC 12: 24 bytes
//! - DLC 13: 32 bytes
//! - DLC 14: 48 bytes
//! - DLC 15: 64 bytes
//!
//! A requested FD payload that falls between table entries is quantized up
//! to the next entry; a request beyond 64 bytes saturates to DLC 15. Both
//! the length calculator and the bit-stream builder resolve payload sizes
//! through [`FrameVariant::wire_payload_len`], so the two always agree on
//! the number of data bits in a frame.

pub mod bitstream;
pub mod length;

pub use bitstream::{Bit, BitSource, FieldKind, apply_bit_stuffing, build_frame_with};
pub use length::FrameLength;

#[cfg(feature = "rand")]
pub use bitstream::{RngBitSource, build_frame};

/// Maximum classic CAN data length in bytes.
pub const MAX_CLASSIC_DATA_LEN: usize = 8;

/// Maximum CAN FD data length in bytes.
pub const MAX_FD_DATA_LEN: usize = 64;

/// CAN FD DLC to data length mapping.
pub const DLC_TO_LENGTH: [usize; 16] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 12, 16, 20, 24, 32, 48, 64];

/// Data length to CAN FD DLC mapping.
///
/// Returns the smallest DLC whose table entry holds `len` bytes, or 15 when
/// `len` exceeds the largest entry.
#[inline]
pub const fn len_to_dlc(len: usize) -> u8 {
    let mut dlc = 0;
    while dlc < DLC_TO_LENGTH.len() {
        if DLC_TO_LENGTH[dlc] >= len {
            return dlc as u8;
        }
        dlc += 1;
    }
    15
}

/// CAN FD DLC to data length mapping.
///
/// Returns the actual data length for a given DLC value. Invalid DLC values
/// (above 15) saturate to 64 bytes.
#[inline]
pub const fn dlc_to_len(dlc: u8) -> usize {
    if (dlc as usize) < DLC_TO_LENGTH.len() {
        DLC_TO_LENGTH[dlc as usize]
    } else {
        MAX_FD_DATA_LEN
    }
}

/// The CAN protocol family a frame variant belongs to.
///
/// A physical bus runs a single family; mixing classic CAN and CAN FD
/// messages in one load calculation is rejected at the validation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameFamily {
    /// Classic CAN (ISO 11898-1, up to 8 data bytes).
    Classic,
    /// CAN FD (flexible data-rate, up to 64 data bytes).
    Fd,
}

/// The four supported frame formats.
///
/// Serialized names match the configuration strings used on the wire
/// (`CAN_STANDARD`, `CAN_EXTENDED`, `FDCAN_STANDARD`, `FDCAN_EXTENDED`);
/// the legacy `FDCAN` spelling is accepted on input and treated as
/// `FDCAN_STANDARD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameVariant {
    /// Classic CAN with an 11-bit identifier.
    #[cfg_attr(feature = "serde", serde(rename = "CAN_STANDARD"))]
    ClassicStandard,
    /// Classic CAN with a 29-bit identifier.
    #[cfg_attr(feature = "serde", serde(rename = "CAN_EXTENDED"))]
    ClassicExtended,
    /// CAN FD with an 11-bit identifier.
    #[cfg_attr(feature = "serde", serde(rename = "FDCAN_STANDARD", alias = "FDCAN"))]
    FdStandard,
    /// CAN FD with a 29-bit identifier.
    #[cfg_attr(feature = "serde", serde(rename = "FDCAN_EXTENDED"))]
    FdExtended,
}

impl FrameVariant {
    /// Returns true for CAN FD variants.
    #[inline]
    pub const fn is_fd(self) -> bool {
        matches!(self, FrameVariant::FdStandard | FrameVariant::FdExtended)
    }

    /// Returns true for 29-bit identifier variants.
    #[inline]
    pub const fn is_extended(self) -> bool {
        matches!(
            self,
            FrameVariant::ClassicExtended | FrameVariant::FdExtended
        )
    }

    /// The protocol family of this variant.
    #[inline]
    pub const fn family(self) -> FrameFamily {
        if self.is_fd() {
            FrameFamily::Fd
        } else {
            FrameFamily::Classic
        }
    }

    /// Maximum payload this variant can carry, in bytes.
    #[inline]
    pub const fn max_payload(self) -> usize {
        if self.is_fd() {
            MAX_FD_DATA_LEN
        } else {
            MAX_CLASSIC_DATA_LEN
        }
    }

    /// The DLC field value encoding `payload_bytes`.
    ///
    /// Classic frames encode the byte count directly; FD frames use the
    /// table index of the quantized length, saturating at 15.
    #[inline]
    pub const fn dlc_value(self, payload_bytes: usize) -> u8 {
        if self.is_fd() {
            len_to_dlc(payload_bytes)
        } else {
            payload_bytes as u8
        }
    }

    /// The payload byte count actually encoded on the wire.
    ///
    /// FD payloads are quantized up to the next DLC table entry; classic
    /// payloads go out exactly as requested.
    #[inline]
    pub const fn wire_payload_len(self, payload_bytes: usize) -> usize {
        if self.is_fd() {
            dlc_to_len(len_to_dlc(payload_bytes))
        } else {
            payload_bytes
        }
    }

    /// Number of CRC value bits for this variant at the given DLC.
    ///
    /// Classic CAN always uses CRC-15. CAN FD switches from CRC-17 to
    /// CRC-21 above 16 data bytes (DLC 10), and extended FD frames carry
    /// four further bits.
    #[inline]
    pub const fn crc_bit_count(self, dlc: u8) -> u32 {
        match self {
            FrameVariant::ClassicStandard | FrameVariant::ClassicExtended => 15,
            FrameVariant::FdStandard => {
                if dlc <= 10 {
                    17
                } else {
                    21
                }
            }
            FrameVariant::FdExtended => {
                if dlc <= 10 {
                    21
                } else {
                    25
                }
            }
        }
    }
}

// ============================================================================
// embedded_can integration (requires `can` feature)
// ============================================================================

#[cfg(feature = "can")]
impl FrameVariant {
    /// Classify a classic CAN frame variant from an identifier.
    #[inline]
    pub const fn classic_for_id(id: &embedded_can::Id) -> Self {
        match id {
            embedded_can::Id::Standard(_) => FrameVariant::ClassicStandard,
            embedded_can::Id::Extended(_) => FrameVariant::ClassicExtended,
        }
    }

    /// Classify a CAN FD frame variant from an identifier.
    #[inline]
    pub const fn fd_for_id(id: &embedded_can::Id) -> Self {
        match id {
            embedded_can::Id::Standard(_) => FrameVariant::FdStandard,
            embedded_can::Id::Extended(_) => FrameVariant::FdExtended,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dlc_to_len() {
        assert_eq!(dlc_to_len(0), 0);
        assert_eq!(dlc_to_len(8), 8);
        assert_eq!(dlc_to_len(9), 12);
        assert_eq!(dlc_to_len(10), 16);
        assert_eq!(dlc_to_len(13), 32);
        assert_eq!(dlc_to_len(15), 64);
        // Saturation for out-of-range DLC values
        assert_eq!(dlc_to_len(16), 64);
    }

    #[test]
    fn test_len_to_dlc() {
        assert_eq!(len_to_dlc(0), 0);
        assert_eq!(len_to_dlc(8), 8);
        assert_eq!(len_to_dlc(12), 9);
        assert_eq!(len_to_dlc(16), 10);
        assert_eq!(len_to_dlc(64), 15);
        // In-between values quantize up
        assert_eq!(len_to_dlc(10), 9);
        assert_eq!(len_to_dlc(50), 15);
        // Beyond the table, saturate to the last bucket
        assert_eq!(len_to_dlc(65), 15);
        assert_eq!(len_to_dlc(1000), 15);
    }

    #[test]
    fn test_variant_properties() {
        assert!(!FrameVariant::ClassicStandard.is_fd());
        assert!(!FrameVariant::ClassicStandard.is_extended());
        assert!(FrameVariant::ClassicExtended.is_extended());
        assert!(FrameVariant::FdStandard.is_fd());
        assert!(FrameVariant::FdExtended.is_fd());
        assert!(FrameVariant::FdExtended.is_extended());

        assert_eq!(FrameVariant::ClassicExtended.family(), FrameFamily::Classic);
        assert_eq!(FrameVariant::FdStandard.family(), FrameFamily::Fd);

        assert_eq!(FrameVariant::ClassicStandard.max_payload(), 8);
        assert_eq!(FrameVariant::FdStandard.max_payload(), 64);
    }

    #[test]
    fn test_wire_payload_len() {
        // Classic payloads pass through untouched
        assert_eq!(FrameVariant::ClassicStandard.wire_payload_len(5), 5);
        assert_eq!(FrameVariant::ClassicExtended.wire_payload_len(8), 8);
        // FD payloads quantize up to the next DLC bucket
        assert_eq!(FrameVariant::FdStandard.wire_payload_len(9), 12);
        assert_eq!(FrameVariant::FdStandard.wire_payload_len(16), 16);
        assert_eq!(FrameVariant::FdExtended.wire_payload_len(33), 48);
        assert_eq!(FrameVariant::FdExtended.wire_payload_len(100), 64);
    }

    #[test]
    fn test_crc_bit_count() {
        assert_eq!(FrameVariant::ClassicStandard.crc_bit_count(8), 15);
        assert_eq!(FrameVariant::ClassicExtended.crc_bit_count(0), 15);
        assert_eq!(FrameVariant::FdStandard.crc_bit_count(10), 17);
        assert_eq!(FrameVariant::FdStandard.crc_bit_count(11), 21);
        assert_eq!(FrameVariant::FdExtended.crc_bit_count(10), 21);
        assert_eq!(FrameVariant::FdExtended.crc_bit_count(15), 25);
    }

    #[cfg(feature = "can")]
    #[test]
    fn test_variant_from_id() {
        use embedded_can::{ExtendedId, Id, StandardId};

        let std_id = Id::Standard(StandardId::new(0x100).unwrap());
        let ext_id = Id::Extended(ExtendedId::new(0x18FF_0100).unwrap());

        assert_eq!(
            FrameVariant::classic_for_id(&std_id),
            FrameVariant::ClassicStandard
        );
        assert_eq!(
            FrameVariant::classic_for_id(&ext_id),
            FrameVariant::ClassicExtended
        );
        assert_eq!(FrameVariant::fd_for_id(&std_id), FrameVariant::FdStandard);
        assert_eq!(FrameVariant::fd_for_id(&ext_id), FrameVariant::FdExtended);
    }
}
