//! Command-line front end for the `ami` codec.
//!
//! Encodes and decodes single fields so wire captures can be checked by hand.

mod cli;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use ami::{
    error::AmiError,
    field::{Endianness, FieldFormat},
    time_of_day::TimeOfDay,
};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::fmt::MakeWriter;

use crate::cli::{Cli, Command, Order};

fn main() -> ExitCode {
    // Log to stderr so stdout carries only the result.
    if let Err(err) = init_logging(io::stderr) {
        eprintln!("failed to install logger: {err}");
    }

    let cli = Cli::parse();
    execute(cli.command, &mut io::stdout(), &mut io::stderr()).unwrap_or(ExitCode::FAILURE)
}

/// Install the global subscriber. It also bridges `log` records from the
/// library, so events must not be emitted through both facades.
fn init_logging<W>(make_writer: W) -> Result<(), tracing_subscriber::util::TryInitError>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::fmt()
        .with_writer(make_writer)
        .finish()
        .try_init()
}

fn execute(command: Command, out: &mut impl Write, err: &mut impl Write) -> io::Result<ExitCode> {
    match run(command) {
        Ok(output) => {
            writeln!(out, "{output}")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            writeln!(err, "error: {error}")?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn endianness(order: Order) -> Endianness {
    match order {
        Order::Big => Endianness::Big,
        Order::Little => Endianness::Little,
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn run(command: Command) -> Result<String, AmiError> {
    match command {
        Command::Encode {
            width,
            order,
            value,
        } => {
            let format = FieldFormat::try_new(width, endianness(order))?;
            if value & !format.width.mask() != 0 {
                warn!(value, %format, "value exceeds field width; high bits dropped");
            }
            let mut buf = [0u8; 8];
            format.try_write(&mut buf, value)?;
            debug!(%format, "encoded field");
            Ok(hex(&buf[..format.encoded_len()]))
        }
        Command::Decode {
            width,
            order,
            bytes,
        } => {
            let format = FieldFormat::try_new(width, endianness(order))?;
            if bytes.len() > format.encoded_len() {
                debug!(
                    extra = bytes.len() - format.encoded_len(),
                    %format,
                    "ignoring bytes past the field"
                );
            }
            let value = format.try_read(&bytes)?;
            Ok(format!("{value:#x} ({value})"))
        }
        Command::TodEncode { milliseconds, days } => {
            if milliseconds & !TimeOfDay::MILLISECONDS_MASK != 0 {
                warn!(milliseconds, "milliseconds exceed 28 bits; high bits dropped");
            }
            let mut buf = [0u8; TimeOfDay::ENCODED_LEN];
            TimeOfDay { milliseconds, days }.try_write_to(&mut buf)?;
            Ok(hex(&buf))
        }
        Command::TodDecode { bytes } => Ok(TimeOfDay::try_read_from(&bytes)?.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use ami::error::{AmiError, SizeError};
    use rstest::rstest;

    use std::{
        io::{self, Write},
        sync::{Arc, Mutex, PoisonError},
    };

    use super::{execute, init_logging, run};
    use crate::cli::{Command, Order};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            let buf = self.0.lock().unwrap_or_else(PoisonError::into_inner);
            String::from_utf8_lossy(&buf).into_owned()
        }
    }

    impl Write for Captured {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> { Ok(()) }
    }

    #[rstest]
    #[case(24, Order::Big, 0x12_3456, "12 34 56")]
    #[case(24, Order::Little, 0xAB_CDEF, "ef cd ab")]
    #[case(16, Order::Little, 0xFF_1234, "34 12")]
    #[case(64, Order::Big, 1, "00 00 00 00 00 00 00 01")]
    fn encodes_fields(
        #[case] width: u32,
        #[case] order: Order,
        #[case] value: u64,
        #[case] expected: &str,
    ) {
        let output = run(Command::Encode {
            width,
            order,
            value,
        })
        .expect("encode should succeed");
        assert_eq!(output, expected);
    }

    #[test]
    fn decode_masks_trailing_bytes() {
        let output = run(Command::Decode {
            width: 24,
            order: Order::Little,
            bytes: vec![0xEF, 0xCD, 0xAB, 0xFF],
        })
        .expect("decode should succeed");
        assert_eq!(output, "0xabcdef (11259375)");
    }

    #[test]
    fn decode_reports_short_input() {
        let err = run(Command::Decode {
            width: 48,
            order: Order::Big,
            bytes: vec![1, 2, 3],
        })
        .expect_err("three bytes cannot hold 48 bits");
        assert_eq!(
            err,
            AmiError::Size(SizeError {
                needed: 6,
                available: 3
            })
        );
    }

    #[test]
    fn rejects_unsupported_width() {
        let err = run(Command::Encode {
            width: 12,
            order: Order::Big,
            value: 0,
        })
        .expect_err("12 bits is not a field width");
        assert_eq!(err, AmiError::UnsupportedWidth(12));
    }

    #[test]
    fn time_of_day_round_trip() {
        let encoded = run(Command::TodEncode {
            milliseconds: 0x1FFF_FFFF,
            days: 100,
        })
        .expect("encode should succeed");
        assert_eq!(encoded, "ff ff ff 0f 64 00");

        let decoded = run(Command::TodDecode {
            bytes: vec![0xFF, 0xFF, 0xFF, 0x0F, 0x64, 0x00],
        })
        .expect("decode should succeed");
        assert_eq!(decoded, "day 100 +268435455ms");
    }

    #[test]
    fn failures_print_the_error_message() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        execute(
            Command::Decode {
                width: 48,
                order: Order::Big,
                bytes: vec![1, 2],
            },
            &mut out,
            &mut err,
        )
        .expect("in-memory writers do not fail");

        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err).expect("utf-8"),
            "error: buffer too small: need 6 bytes, have 2\n"
        );
    }

    // Only test in this binary that installs the global subscriber.
    #[test]
    fn truncation_warnings_are_logged_once() {
        let captured = Captured::default();
        let writer = captured.clone();
        init_logging(move || writer.clone()).expect("no subscriber installed yet");

        run(Command::Encode {
            width: 16,
            order: Order::Little,
            value: 0x1_0000,
        })
        .expect("encode should succeed");
        run(Command::TodEncode {
            milliseconds: 0x1000_0000,
            days: 1,
        })
        .expect("encode should succeed");

        // Other tests log concurrently; count only lines carrying these values.
        let logs = captured.contents();
        let count = |message: &str, value: &str| {
            logs.lines()
                .filter(|line| line.contains(message) && line.contains(value))
                .count()
        };
        assert_eq!(count("value exceeds field width", "65536"), 1, "{logs}");
        assert_eq!(count("milliseconds exceed 28 bits", "268435456"), 1, "{logs}");
    }
}
