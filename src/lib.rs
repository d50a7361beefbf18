#![doc(html_root_url = "https://docs.rs/ami/latest")]
//! Public API for the `ami` library.
//!
//! `ami` is an abstract memory interface for fieldbus stacks: it reads and
//! writes 16- to 64-bit integer fields, including the 24, 40, 48 and 56-bit
//! widths, in explicit big- or little-endian order regardless of the host's
//! own byte order or alignment rules. It also encodes the six-byte
//! time-of-day timestamp.
//!
//! The per-width accessors in [`byte_order`] are the hot path and carry no
//! error channel. [`field::FieldFormat`] selects an accessor at runtime and
//! offers bounds-checked variants.

pub mod byte_order;
pub mod error;
pub mod field;
pub mod prelude;
pub mod time_of_day;
pub mod width;

pub use error::{AmiError, Result, SizeError};
pub use field::{Endianness, FieldFormat};
pub use time_of_day::TimeOfDay;
pub use width::Width;
