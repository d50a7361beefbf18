//! Runtime-selected field formats.
//!
//! [`FieldFormat`] pairs a [`Width`] with an [`Endianness`] and dispatches to
//! the matching accessor in [`crate::byte_order`]. Protocol tables that
//! describe their fields as data use this instead of naming the accessor
//! directly.

use std::{fmt, str::FromStr};

use log::debug;

use crate::{
    byte_order::{
        read_u16_be,
        read_u16_le,
        read_u24_be,
        read_u24_le,
        read_u32_be,
        read_u32_le,
        read_u40_be,
        read_u40_le,
        read_u48_be,
        read_u48_le,
        read_u56_be,
        read_u56_le,
        read_u64_be,
        read_u64_le,
        write_u16_be,
        write_u16_le,
        write_u24_be,
        write_u24_le,
        write_u32_be,
        write_u32_le,
        write_u40_be,
        write_u40_le,
        write_u48_be,
        write_u48_le,
        write_u56_be,
        write_u56_le,
        write_u64_be,
        write_u64_le,
    },
    error::{AmiError, SizeError},
    width::Width,
};

/// Byte order of a field on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endianness::Big => "big-endian",
            Endianness::Little => "little-endian",
        })
    }
}

impl FromStr for Endianness {
    type Err = AmiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "big" | "be" | "big-endian" => Ok(Endianness::Big),
            "little" | "le" | "little-endian" => Ok(Endianness::Little),
            _ => Err(AmiError::InvalidOrder(s.to_owned())),
        }
    }
}

/// Width and byte order of an integer field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldFormat {
    pub width: Width,
    pub endianness: Endianness,
}

impl FieldFormat {
    /// Creates a new `FieldFormat`.
    #[must_use]
    pub const fn new(width: Width, endianness: Endianness) -> Self { Self { width, endianness } }

    /// Fallible constructor taking the width as a bit count.
    ///
    /// # Errors
    ///
    /// Returns [`AmiError::UnsupportedWidth`] if `bits` is not one of 16, 24,
    /// 32, 40, 48, 56 or 64.
    pub fn try_new(bits: u32, endianness: Endianness) -> Result<Self, AmiError> {
        Ok(Self::new(Width::try_from(bits)?, endianness))
    }

    /// 16-bit big-endian field.
    #[must_use]
    pub const fn u16_be() -> Self { Self::new(Width::Bits16, Endianness::Big) }

    /// 16-bit little-endian field.
    #[must_use]
    pub const fn u16_le() -> Self { Self::new(Width::Bits16, Endianness::Little) }

    /// 24-bit big-endian field.
    #[must_use]
    pub const fn u24_be() -> Self { Self::new(Width::Bits24, Endianness::Big) }

    /// 24-bit little-endian field.
    #[must_use]
    pub const fn u24_le() -> Self { Self::new(Width::Bits24, Endianness::Little) }

    /// 32-bit big-endian field.
    #[must_use]
    pub const fn u32_be() -> Self { Self::new(Width::Bits32, Endianness::Big) }

    /// 32-bit little-endian field.
    #[must_use]
    pub const fn u32_le() -> Self { Self::new(Width::Bits32, Endianness::Little) }

    /// 40-bit big-endian field.
    #[must_use]
    pub const fn u40_be() -> Self { Self::new(Width::Bits40, Endianness::Big) }

    /// 40-bit little-endian field.
    #[must_use]
    pub const fn u40_le() -> Self { Self::new(Width::Bits40, Endianness::Little) }

    /// 48-bit big-endian field.
    #[must_use]
    pub const fn u48_be() -> Self { Self::new(Width::Bits48, Endianness::Big) }

    /// 48-bit little-endian field.
    #[must_use]
    pub const fn u48_le() -> Self { Self::new(Width::Bits48, Endianness::Little) }

    /// 56-bit big-endian field.
    #[must_use]
    pub const fn u56_be() -> Self { Self::new(Width::Bits56, Endianness::Big) }

    /// 56-bit little-endian field.
    #[must_use]
    pub const fn u56_le() -> Self { Self::new(Width::Bits56, Endianness::Little) }

    /// 64-bit big-endian field.
    #[must_use]
    pub const fn u64_be() -> Self { Self::new(Width::Bits64, Endianness::Big) }

    /// 64-bit little-endian field.
    #[must_use]
    pub const fn u64_le() -> Self { Self::new(Width::Bits64, Endianness::Little) }

    /// Number of bytes the field occupies.
    #[must_use]
    pub const fn encoded_len(self) -> usize { self.width.bytes() }

    /// Read the field from the start of `src`.
    ///
    /// The result is zero-extended; bits above the field width are clear.
    ///
    /// # Panics
    ///
    /// Panics if `src` is shorter than [`Self::encoded_len`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ami::field::FieldFormat;
    ///
    /// assert_eq!(FieldFormat::u24_le().read(&[0x56, 0x34, 0x12, 0xFF]), 0x12_3456);
    /// ```
    #[must_use]
    pub fn read(self, src: &[u8]) -> u64 {
        match (self.width, self.endianness) {
            (Width::Bits16, Endianness::Big) => u64::from(read_u16_be(src)),
            (Width::Bits16, Endianness::Little) => u64::from(read_u16_le(src)),
            (Width::Bits24, Endianness::Big) => u64::from(read_u24_be(src)),
            (Width::Bits24, Endianness::Little) => u64::from(read_u24_le(src)),
            (Width::Bits32, Endianness::Big) => u64::from(read_u32_be(src)),
            (Width::Bits32, Endianness::Little) => u64::from(read_u32_le(src)),
            (Width::Bits40, Endianness::Big) => read_u40_be(src),
            (Width::Bits40, Endianness::Little) => read_u40_le(src),
            (Width::Bits48, Endianness::Big) => read_u48_be(src),
            (Width::Bits48, Endianness::Little) => read_u48_le(src),
            (Width::Bits56, Endianness::Big) => read_u56_be(src),
            (Width::Bits56, Endianness::Little) => read_u56_le(src),
            (Width::Bits64, Endianness::Big) => read_u64_be(src),
            (Width::Bits64, Endianness::Little) => read_u64_le(src),
        }
    }

    /// Write the low bits of `value` to the start of `dest`.
    ///
    /// Exactly [`Self::encoded_len`] bytes are written; bits of `value` above
    /// the field width are discarded.
    ///
    /// # Panics
    ///
    /// Panics if `dest` is shorter than [`Self::encoded_len`].
    #[expect(
        clippy::cast_possible_truncation,
        reason = "bits above the field width are discarded by definition"
    )]
    pub fn write(self, dest: &mut [u8], value: u64) {
        match (self.width, self.endianness) {
            (Width::Bits16, Endianness::Big) => write_u16_be(dest, value as u16),
            (Width::Bits16, Endianness::Little) => write_u16_le(dest, value as u16),
            (Width::Bits24, Endianness::Big) => write_u24_be(dest, value as u32),
            (Width::Bits24, Endianness::Little) => write_u24_le(dest, value as u32),
            (Width::Bits32, Endianness::Big) => write_u32_be(dest, value as u32),
            (Width::Bits32, Endianness::Little) => write_u32_le(dest, value as u32),
            (Width::Bits40, Endianness::Big) => write_u40_be(dest, value),
            (Width::Bits40, Endianness::Little) => write_u40_le(dest, value),
            (Width::Bits48, Endianness::Big) => write_u48_be(dest, value),
            (Width::Bits48, Endianness::Little) => write_u48_le(dest, value),
            (Width::Bits56, Endianness::Big) => write_u56_be(dest, value),
            (Width::Bits56, Endianness::Little) => write_u56_le(dest, value),
            (Width::Bits64, Endianness::Big) => write_u64_be(dest, value),
            (Width::Bits64, Endianness::Little) => write_u64_le(dest, value),
        }
    }

    /// Bounds-checked [`Self::read`].
    ///
    /// # Errors
    ///
    /// Returns a [`SizeError`] if `src` is shorter than the field.
    pub fn try_read(self, src: &[u8]) -> Result<u64, SizeError> {
        self.check(src.len())?;
        Ok(self.read(src))
    }

    /// Bounds-checked [`Self::write`]. Nothing is written on failure.
    ///
    /// # Errors
    ///
    /// Returns a [`SizeError`] if `dest` is shorter than the field.
    pub fn try_write(self, dest: &mut [u8], value: u64) -> Result<(), SizeError> {
        self.check(dest.len())?;
        self.write(dest, value);
        Ok(())
    }

    fn check(self, available: usize) -> Result<(), SizeError> {
        SizeError::check(self.encoded_len(), available)
            .inspect_err(|err| debug!("rejected {self} field access: {err}"))
    }
}

impl Default for FieldFormat {
    fn default() -> Self { Self::u32_be() }
}

impl fmt::Display for FieldFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.width, self.endianness)
    }
}
