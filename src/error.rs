//! Canonical error and result types for the crate.
//!
//! The fast accessors in [`crate::byte_order`] have no error channel. The
//! types here back the checked entry points and field-format parsing.

use thiserror::Error;

/// Result alias defaulting to [`AmiError`].
pub type Result<T, E = AmiError> = std::result::Result<T, E>;

/// A buffer region is smaller than the field it should hold.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("buffer too small: need {needed} bytes, have {available}")]
pub struct SizeError {
    /// Bytes required by the field.
    pub needed: usize,
    /// Bytes actually supplied.
    pub available: usize,
}

impl SizeError {
    /// Check that `available` bytes can hold a `needed`-byte field.
    ///
    /// # Errors
    ///
    /// Returns a [`SizeError`] when `available < needed`.
    pub const fn check(needed: usize, available: usize) -> Result<(), SizeError> {
        if available < needed {
            Err(SizeError { needed, available })
        } else {
            Ok(())
        }
    }
}

/// Top-level error type exposed by `ami`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AmiError {
    /// Checked access on an undersized region.
    #[error(transparent)]
    Size(#[from] SizeError),

    /// Bit count that does not name a supported field width.
    #[error("unsupported field width: {0} bits")]
    UnsupportedWidth(u32),

    /// Unrecognised byte-order name.
    #[error("unknown byte order `{0}` (expected `big` or `little`)")]
    InvalidOrder(String),
}

#[cfg(test)]
mod tests {
    use super::{AmiError, SizeError};

    #[test]
    fn size_check_accepts_exact_and_larger_regions() {
        assert_eq!(SizeError::check(3, 3), Ok(()));
        assert_eq!(SizeError::check(3, 8), Ok(()));
    }

    #[test]
    fn size_check_rejects_short_region() {
        assert_eq!(
            SizeError::check(6, 4),
            Err(SizeError {
                needed: 6,
                available: 4
            })
        );
    }

    #[test]
    fn error_messages() {
        let size = SizeError {
            needed: 5,
            available: 2,
        };
        assert_eq!(size.to_string(), "buffer too small: need 5 bytes, have 2");
        assert_eq!(AmiError::from(size).to_string(), size.to_string());
        assert_eq!(
            AmiError::UnsupportedWidth(12).to_string(),
            "unsupported field width: 12 bits"
        );
        assert_eq!(
            AmiError::InvalidOrder("middle".into()).to_string(),
            "unknown byte order `middle` (expected `big` or `little`)"
        );
    }
}
