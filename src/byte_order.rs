//! Explicit byte-order accessors for integer fields in raw buffers.
//!
//! Each supported width has a `write_*`/`read_*` pair per byte order. Values
//! are exchanged in the host's native integer types; partial widths use the
//! next larger carrier (`u32` for 24 bits, `u64` for 40, 48 and 56 bits).
//!
//! Big-endian fields are placed and gathered one byte at a time. Little-endian
//! writes copy native-width segments that together cover exactly the field, so
//! a 24-bit write is a 16-bit segment followed by a single byte. Little-endian
//! reads of partial widths load the whole carrier that overlaps the field and
//! mask the result, since bytes following the field belong to someone else.
//!
//! All accessors panic if the region is shorter than the field. Use
//! [`crate::field::FieldFormat::try_read`] and
//! [`crate::field::FieldFormat::try_write`] when the length is not already
//! guaranteed by the surrounding protocol framing.

const MASK_24: u32 = 0x00FF_FFFF;
const MASK_40: u64 = 0x0000_00FF_FFFF_FFFF;
const MASK_48: u64 = 0x0000_FFFF_FFFF_FFFF;
const MASK_56: u64 = 0x00FF_FFFF_FFFF_FFFF;

/// Place `le_bytes` into `dest` in reverse order, most significant first.
#[inline]
fn place_be(dest: &mut [u8], le_bytes: &[u8]) {
    let dest = &mut dest[..le_bytes.len()];
    for (slot, byte) in dest.iter_mut().zip(le_bytes.iter().rev()) {
        *slot = *byte;
    }
}

/// Gather a big-endian field into a zeroed little-endian carrier.
#[inline]
fn gather_be<const N: usize>(src: &[u8], width: usize) -> [u8; N] {
    let mut carrier = [0u8; N];
    for (slot, byte) in carrier.iter_mut().zip(src[..width].iter().rev()) {
        *slot = *byte;
    }
    carrier
}

/// Load the native carrier overlapping a `width`-byte little-endian field.
///
/// Bytes of `src` past the field but inside the carrier are loaded as well;
/// callers with partial widths must mask them off. Panics if `src` is shorter
/// than `width`.
#[inline]
fn load_le_carrier<const N: usize>(src: &[u8], width: usize) -> [u8; N] {
    let span = src.len().clamp(width, N);
    let mut carrier = [0u8; N];
    carrier[..span].copy_from_slice(&src[..span]);
    carrier
}

/// Write a 16-bit value in big-endian order.
///
/// # Examples
///
/// ```
/// use ami::byte_order::write_u16_be;
///
/// let mut buf = [0u8; 2];
/// write_u16_be(&mut buf, 0x1234);
/// assert_eq!(buf, [0x12, 0x34]);
/// ```
#[inline]
pub fn write_u16_be(dest: &mut [u8], value: u16) { place_be(dest, &value.to_le_bytes()); }

/// Write a 16-bit value in little-endian order.
///
/// # Examples
///
/// ```
/// use ami::byte_order::write_u16_le;
///
/// let mut buf = [0u8; 2];
/// write_u16_le(&mut buf, 0x1234);
/// assert_eq!(buf, [0x34, 0x12]);
/// ```
#[inline]
pub fn write_u16_le(dest: &mut [u8], value: u16) {
    dest[..2].copy_from_slice(&value.to_le_bytes());
}

/// Read a big-endian 16-bit value.
#[inline]
#[must_use]
pub fn read_u16_be(src: &[u8]) -> u16 { u16::from_le_bytes(gather_be(src, 2)) }

/// Read a little-endian 16-bit value.
#[inline]
#[must_use]
pub fn read_u16_le(src: &[u8]) -> u16 { u16::from_le_bytes(load_le_carrier(src, 2)) }

/// Write the low 24 bits of `value` in big-endian order.
///
/// # Examples
///
/// ```
/// use ami::byte_order::{read_u24_be, write_u24_be};
///
/// let mut buf = [0u8; 3];
/// write_u24_be(&mut buf, 0x0012_3456);
/// assert_eq!(buf, [0x12, 0x34, 0x56]);
/// assert_eq!(read_u24_be(&buf), 0x0012_3456);
/// ```
#[inline]
pub fn write_u24_be(dest: &mut [u8], value: u32) { place_be(dest, &value.to_le_bytes()[..3]); }

/// Write the low 24 bits of `value` in little-endian order.
///
/// The field is written as a 16-bit segment followed by one byte; the byte
/// after the field is never touched.
///
/// # Examples
///
/// ```
/// use ami::byte_order::write_u24_le;
///
/// let mut buf = [0x55u8; 4];
/// write_u24_le(&mut buf, 0x00AB_CDEF);
/// assert_eq!(buf, [0xEF, 0xCD, 0xAB, 0x55]);
/// ```
#[inline]
pub fn write_u24_le(dest: &mut [u8], value: u32) {
    let dest = &mut dest[..3];
    let bytes = value.to_le_bytes();
    dest[..2].copy_from_slice(&bytes[..2]);
    dest[2] = bytes[2];
}

/// Read a big-endian 24-bit value; bits 24..32 of the result are zero.
#[inline]
#[must_use]
pub fn read_u24_be(src: &[u8]) -> u32 { u32::from_le_bytes(gather_be(src, 3)) }

/// Read a little-endian 24-bit value.
///
/// A fourth byte following the field in `src` is loaded with the carrier and
/// masked away.
///
/// # Examples
///
/// ```
/// use ami::byte_order::read_u24_le;
///
/// assert_eq!(read_u24_le(&[0xEF, 0xCD, 0xAB, 0xFF]), 0x00AB_CDEF);
/// ```
#[inline]
#[must_use]
pub fn read_u24_le(src: &[u8]) -> u32 { u32::from_le_bytes(load_le_carrier(src, 3)) & MASK_24 }

/// Write a 32-bit value in big-endian order.
#[inline]
pub fn write_u32_be(dest: &mut [u8], value: u32) { place_be(dest, &value.to_le_bytes()); }

/// Write a 32-bit value in little-endian order.
#[inline]
pub fn write_u32_le(dest: &mut [u8], value: u32) {
    dest[..4].copy_from_slice(&value.to_le_bytes());
}

/// Read a big-endian 32-bit value.
///
/// # Examples
///
/// ```
/// use ami::byte_order::read_u32_be;
///
/// assert_eq!(read_u32_be(&[0x12, 0x34, 0x56, 0x78]), 0x1234_5678);
/// ```
#[inline]
#[must_use]
pub fn read_u32_be(src: &[u8]) -> u32 { u32::from_le_bytes(gather_be(src, 4)) }

/// Read a little-endian 32-bit value.
#[inline]
#[must_use]
pub fn read_u32_le(src: &[u8]) -> u32 { u32::from_le_bytes(load_le_carrier(src, 4)) }

/// Write the low 40 bits of `value` in big-endian order.
#[inline]
pub fn write_u40_be(dest: &mut [u8], value: u64) { place_be(dest, &value.to_le_bytes()[..5]); }

/// Write the low 40 bits of `value` in little-endian order as a 32-bit
/// segment followed by one byte.
#[inline]
pub fn write_u40_le(dest: &mut [u8], value: u64) {
    let dest = &mut dest[..5];
    let bytes = value.to_le_bytes();
    dest[..4].copy_from_slice(&bytes[..4]);
    dest[4] = bytes[4];
}

/// Read a big-endian 40-bit value.
#[inline]
#[must_use]
pub fn read_u40_be(src: &[u8]) -> u64 { u64::from_le_bytes(gather_be(src, 5)) }

/// Read a little-endian 40-bit value, masking any carrier bytes past the
/// field.
#[inline]
#[must_use]
pub fn read_u40_le(src: &[u8]) -> u64 { u64::from_le_bytes(load_le_carrier(src, 5)) & MASK_40 }

/// Write the low 48 bits of `value` in big-endian order.
#[inline]
pub fn write_u48_be(dest: &mut [u8], value: u64) { place_be(dest, &value.to_le_bytes()[..6]); }

/// Write the low 48 bits of `value` in little-endian order as a 32-bit
/// segment followed by a 16-bit segment.
///
/// # Examples
///
/// ```
/// use ami::byte_order::write_u48_le;
///
/// let mut buf = [0u8; 8];
/// write_u48_le(&mut buf, 0xFFFF_0605_0403_0201);
/// assert_eq!(buf, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x00, 0x00]);
/// ```
#[inline]
pub fn write_u48_le(dest: &mut [u8], value: u64) {
    let dest = &mut dest[..6];
    let bytes = value.to_le_bytes();
    dest[..4].copy_from_slice(&bytes[..4]);
    dest[4..6].copy_from_slice(&bytes[4..6]);
}

/// Read a big-endian 48-bit value.
#[inline]
#[must_use]
pub fn read_u48_be(src: &[u8]) -> u64 { u64::from_le_bytes(gather_be(src, 6)) }

/// Read a little-endian 48-bit value, masking any carrier bytes past the
/// field.
#[inline]
#[must_use]
pub fn read_u48_le(src: &[u8]) -> u64 { u64::from_le_bytes(load_le_carrier(src, 6)) & MASK_48 }

/// Write the low 56 bits of `value` in big-endian order.
#[inline]
pub fn write_u56_be(dest: &mut [u8], value: u64) { place_be(dest, &value.to_le_bytes()[..7]); }

/// Write the low 56 bits of `value` in little-endian order as 32-bit, 16-bit
/// and 8-bit segments.
#[inline]
pub fn write_u56_le(dest: &mut [u8], value: u64) {
    let dest = &mut dest[..7];
    let bytes = value.to_le_bytes();
    dest[..4].copy_from_slice(&bytes[..4]);
    dest[4..6].copy_from_slice(&bytes[4..6]);
    dest[6] = bytes[6];
}

/// Read a big-endian 56-bit value.
#[inline]
#[must_use]
pub fn read_u56_be(src: &[u8]) -> u64 { u64::from_le_bytes(gather_be(src, 7)) }

/// Read a little-endian 56-bit value, masking the eighth carrier byte.
#[inline]
#[must_use]
pub fn read_u56_le(src: &[u8]) -> u64 { u64::from_le_bytes(load_le_carrier(src, 7)) & MASK_56 }

/// Write a 64-bit value in big-endian order.
///
/// # Examples
///
/// ```
/// use ami::byte_order::write_u64_be;
///
/// let mut buf = [0u8; 8];
/// write_u64_be(&mut buf, 0x1122_3344_5566_7788);
/// assert_eq!(buf, [0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]);
/// ```
#[inline]
pub fn write_u64_be(dest: &mut [u8], value: u64) { place_be(dest, &value.to_le_bytes()); }

/// Write a 64-bit value in little-endian order.
#[inline]
pub fn write_u64_le(dest: &mut [u8], value: u64) {
    dest[..8].copy_from_slice(&value.to_le_bytes());
}

/// Read a big-endian 64-bit value.
#[inline]
#[must_use]
pub fn read_u64_be(src: &[u8]) -> u64 { u64::from_le_bytes(gather_be(src, 8)) }

/// Read a little-endian 64-bit value.
#[inline]
#[must_use]
pub fn read_u64_le(src: &[u8]) -> u64 { u64::from_le_bytes(load_le_carrier(src, 8)) }
