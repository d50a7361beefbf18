//! Field widths supported by the codec.
//!
//! Partial widths (24, 40, 48 and 56 bits) travel in the next larger native
//! carrier: `u32` for 24 bits and `u64` for the others.

use std::fmt;

use crate::error::AmiError;

/// Bit width of an integer field on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    /// Two bytes, carried in `u16`.
    Bits16,
    /// Three bytes, carried in `u32`.
    Bits24,
    /// Four bytes, carried in `u32`.
    Bits32,
    /// Five bytes, carried in `u64`.
    Bits40,
    /// Six bytes, carried in `u64`.
    Bits48,
    /// Seven bytes, carried in `u64`.
    Bits56,
    /// Eight bytes, carried in `u64`.
    Bits64,
}

impl Width {
    /// Every supported width, narrowest first.
    pub const ALL: [Width; 7] = [
        Width::Bits16,
        Width::Bits24,
        Width::Bits32,
        Width::Bits40,
        Width::Bits48,
        Width::Bits56,
        Width::Bits64,
    ];

    /// Number of bits in the field.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Width::Bits16 => 16,
            Width::Bits24 => 24,
            Width::Bits32 => 32,
            Width::Bits40 => 40,
            Width::Bits48 => 48,
            Width::Bits56 => 56,
            Width::Bits64 => 64,
        }
    }

    /// Number of bytes the field occupies in a buffer.
    #[must_use]
    pub const fn bytes(self) -> usize {
        match self {
            Width::Bits16 => 2,
            Width::Bits24 => 3,
            Width::Bits32 => 4,
            Width::Bits40 => 5,
            Width::Bits48 => 6,
            Width::Bits56 => 7,
            Width::Bits64 => 8,
        }
    }

    /// Size in bytes of the native integer carrying the value.
    #[must_use]
    pub const fn carrier_bytes(self) -> usize {
        match self {
            Width::Bits16 => 2,
            Width::Bits24 | Width::Bits32 => 4,
            Width::Bits40 | Width::Bits48 | Width::Bits56 | Width::Bits64 => 8,
        }
    }

    /// All-ones mask covering the field's bits.
    ///
    /// ```
    /// use ami::width::Width;
    ///
    /// assert_eq!(Width::Bits24.mask(), 0x00FF_FFFF);
    /// assert_eq!(Width::Bits64.mask(), u64::MAX);
    /// ```
    #[must_use]
    pub const fn mask(self) -> u64 {
        match self {
            Width::Bits64 => u64::MAX,
            _ => (1u64 << self.bits()) - 1,
        }
    }

    /// Whether the width is narrower than its carrier.
    #[must_use]
    pub const fn is_partial(self) -> bool { self.bytes() != self.carrier_bytes() }
}

impl TryFrom<u32> for Width {
    type Error = AmiError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Width::ALL
            .into_iter()
            .find(|width| width.bits() == bits)
            .ok_or(AmiError::UnsupportedWidth(bits))
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}-bit", self.bits()) }
}
