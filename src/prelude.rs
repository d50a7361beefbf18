//! Convenience imports for protocol code.
//!
//! Pulls in the per-width accessors together with the field and timestamp
//! types. Prefer importing from the owning modules when only a few items are
//! needed.
//!
//! # Examples
//!
//! ```rust
//! use ami::prelude::*;
//!
//! let mut header = [0u8; 6];
//! write_u16_be(&mut header, 0x0102);
//! FieldFormat::u32_le().write(&mut header[2..], 0x0A0B_0C0D);
//! assert_eq!(read_u16_be(&header), 0x0102);
//! ```

pub use crate::{
    byte_order::*,
    error::{AmiError, Result, SizeError},
    field::{Endianness, FieldFormat},
    time_of_day::{TimeOfDay, read_time_of_day, write_time_of_day},
    width::Width,
};
