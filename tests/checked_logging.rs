//! Checked accessors report rejected regions through the `log` facade.

mod common;

use ami::{FieldFormat, SizeError, TimeOfDay};
use common::{LoggerHandle, logger};
use rstest::rstest;
use serial_test::serial;

#[rstest]
#[serial(logger)]
fn rejected_field_write_is_logged(mut logger: LoggerHandle) {
    let mut buf = [0u8; 2];
    let err = FieldFormat::u24_le()
        .try_write(&mut buf, 0x00AB_CDEF)
        .expect_err("two bytes cannot hold a 24-bit field");
    assert_eq!(
        err,
        SizeError {
            needed: 3,
            available: 2
        }
    );

    let records = logger.drain();
    assert!(
        records.iter().any(|(level, msg)| *level == log::Level::Debug
            && msg.contains("24-bit little-endian")
            && msg.contains("need 3 bytes, have 2")),
        "rejection not logged: {records:?}"
    );
}

#[rstest]
#[serial(logger)]
fn rejected_time_of_day_read_is_logged(mut logger: LoggerHandle) {
    assert!(TimeOfDay::try_read_from(&[0u8; 4]).is_err());

    let records = logger.drain();
    assert!(
        records
            .iter()
            .any(|(_, msg)| msg.contains("time-of-day") && msg.contains("need 6 bytes")),
        "rejection not logged: {records:?}"
    );
}

#[rstest]
#[serial(logger)]
fn successful_access_is_silent(mut logger: LoggerHandle) {
    let mut buf = [0u8; 8];
    FieldFormat::u56_be()
        .try_write(&mut buf, 0x01_0203_0405_0607)
        .expect("eight bytes hold a 56-bit field");
    assert_eq!(FieldFormat::u56_be().try_read(&buf), Ok(0x01_0203_0405_0607));

    assert!(logger.drain().is_empty());
}
