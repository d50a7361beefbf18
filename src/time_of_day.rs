//! Time-of-day timestamps.
//!
//! A [`TimeOfDay`] is the fieldbus `TIME_OF_DAY` record: milliseconds after
//! midnight in the low 28 bits of a 32-bit field, followed by a 16-bit count of
//! days since 1984-01-01. On the wire it is always six little-endian bytes,
//! milliseconds first.

use std::{fmt, time::Duration};

use log::debug;

use crate::{
    byte_order::{read_u16_le, read_u32_le, write_u16_le, write_u32_le},
    error::SizeError,
};

/// Milliseconds-of-day and day count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    /// Milliseconds after midnight. Only the low 28 bits are encoded.
    pub milliseconds: u32,
    /// Days since the epoch.
    pub days: u16,
}

impl TimeOfDay {
    /// Bits of [`TimeOfDay::milliseconds`] that survive encoding.
    pub const MILLISECONDS_MASK: u32 = 0x0FFF_FFFF;
    /// Size of the encoded record in bytes.
    pub const ENCODED_LEN: usize = 6;
    /// Milliseconds in one day.
    pub const MILLISECONDS_PER_DAY: u32 = 86_400_000;

    /// Creates a record, truncating `milliseconds` to 28 bits.
    #[must_use]
    pub const fn new(milliseconds: u32, days: u16) -> Self {
        Self {
            milliseconds: milliseconds & Self::MILLISECONDS_MASK,
            days,
        }
    }

    /// Split a duration since the epoch into days and milliseconds of day.
    ///
    /// Sub-millisecond precision is dropped. Returns `None` if the day count
    /// does not fit in 16 bits.
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use ami::time_of_day::TimeOfDay;
    ///
    /// let tod = TimeOfDay::from_duration_since_epoch(Duration::from_secs(86_400 + 1))
    ///     .expect("within range");
    /// assert_eq!(tod, TimeOfDay::new(1_000, 1));
    /// ```
    #[must_use]
    pub fn from_duration_since_epoch(since_epoch: Duration) -> Option<Self> {
        let total = since_epoch.as_millis();
        let per_day = u128::from(Self::MILLISECONDS_PER_DAY);
        let days = u16::try_from(total / per_day).ok()?;
        let milliseconds = u32::try_from(total % per_day).ok()?;
        Some(Self::new(milliseconds, days))
    }

    /// Duration since the epoch represented by this record.
    #[must_use]
    pub fn as_duration_since_epoch(self) -> Duration {
        let millis = u64::from(self.days) * u64::from(Self::MILLISECONDS_PER_DAY)
            + u64::from(self.milliseconds & Self::MILLISECONDS_MASK);
        Duration::from_millis(millis)
    }

    /// Encode this record at the start of `dest`. See [`write_time_of_day`].
    pub fn write_to(self, dest: &mut [u8]) { write_time_of_day(dest, self); }

    /// Decode a record from the start of `src`. See [`read_time_of_day`].
    #[must_use]
    pub fn read_from(src: &[u8]) -> Self { read_time_of_day(src) }

    /// Bounds-checked [`Self::write_to`]. Nothing is written on failure.
    ///
    /// # Errors
    ///
    /// Returns a [`SizeError`] if `dest` is shorter than six bytes.
    pub fn try_write_to(self, dest: &mut [u8]) -> Result<(), SizeError> {
        check_len(dest.len())?;
        self.write_to(dest);
        Ok(())
    }

    /// Bounds-checked [`Self::read_from`].
    ///
    /// # Errors
    ///
    /// Returns a [`SizeError`] if `src` is shorter than six bytes.
    pub fn try_read_from(src: &[u8]) -> Result<Self, SizeError> {
        check_len(src.len())?;
        Ok(Self::read_from(src))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {} +{}ms", self.days, self.milliseconds)
    }
}

fn check_len(available: usize) -> Result<(), SizeError> {
    SizeError::check(TimeOfDay::ENCODED_LEN, available)
        .inspect_err(|err| debug!("rejected time-of-day access: {err}"))
}

/// Write `record` as six little-endian bytes: 28-bit milliseconds in a 32-bit
/// field, then the 16-bit day count.
///
/// Milliseconds bits above bit 27 are silently dropped.
///
/// # Panics
///
/// Panics if `dest` is shorter than [`TimeOfDay::ENCODED_LEN`].
///
/// # Examples
///
/// ```
/// use ami::time_of_day::{TimeOfDay, write_time_of_day};
///
/// let mut buf = [0u8; 6];
/// write_time_of_day(&mut buf, TimeOfDay { milliseconds: 0x1FFF_FFFF, days: 100 });
/// assert_eq!(buf, [0xFF, 0xFF, 0xFF, 0x0F, 100, 0]);
/// ```
pub fn write_time_of_day(dest: &mut [u8], record: TimeOfDay) {
    let dest = &mut dest[..TimeOfDay::ENCODED_LEN];
    write_u32_le(dest, record.milliseconds & TimeOfDay::MILLISECONDS_MASK);
    write_u16_le(&mut dest[4..], record.days);
}

/// Read a six-byte little-endian time-of-day record.
///
/// # Panics
///
/// Panics if `src` is shorter than [`TimeOfDay::ENCODED_LEN`].
#[must_use]
pub fn read_time_of_day(src: &[u8]) -> TimeOfDay {
    let src = &src[..TimeOfDay::ENCODED_LEN];
    TimeOfDay {
        milliseconds: read_u32_le(src) & TimeOfDay::MILLISECONDS_MASK,
        days: read_u16_le(&src[4..]),
    }
}
