//! Command line interface for the `ami` binary.
//!
//! Shared with `build.rs`, which renders the man page from these definitions,
//! so this file may only depend on `clap` and the standard library.

use std::{error::Error, num::ParseIntError};

use clap::{Parser, Subcommand, ValueEnum};

/// Command line arguments for the `ami` binary.
#[derive(Debug, Parser)]
#[command(
    name = "ami",
    version,
    about = "Encode and decode fixed-width integer fields in big- or little-endian order"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Byte order selected on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Order {
    /// Most significant byte first.
    #[value(alias = "be")]
    Big,
    /// Least significant byte first.
    #[value(alias = "le")]
    Little,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encode an integer and print the field bytes in hex.
    Encode {
        /// Field width in bits (16, 24, 32, 40, 48, 56 or 64).
        #[arg(short, long, default_value_t = 32)]
        width: u32,
        /// Byte order of the field.
        #[arg(short, long, value_enum, default_value_t = Order::Big)]
        order: Order,
        /// Value to encode, decimal or `0x`-prefixed hex.
        #[arg(value_parser = parse_int::<u64>)]
        value: u64,
    },
    /// Decode hex bytes into an integer.
    Decode {
        /// Field width in bits (16, 24, 32, 40, 48, 56 or 64).
        #[arg(short, long, default_value_t = 32)]
        width: u32,
        /// Byte order of the field.
        #[arg(short, long, value_enum, default_value_t = Order::Big)]
        order: Order,
        /// Field bytes in hex, first byte first.
        #[arg(required = true, value_parser = parse_byte)]
        bytes: Vec<u8>,
    },
    /// Encode a time-of-day record.
    TodEncode {
        /// Milliseconds after midnight; only the low 28 bits are kept.
        #[arg(long, value_parser = parse_int::<u32>)]
        milliseconds: u32,
        /// Days since the epoch.
        #[arg(long, value_parser = parse_int::<u16>)]
        days: u16,
    },
    /// Decode a six-byte time-of-day record.
    TodDecode {
        /// Record bytes in hex.
        #[arg(required = true, value_parser = parse_byte)]
        bytes: Vec<u8>,
    },
}

fn parse_u64(s: &str) -> Result<u64, ParseIntError> {
    let digits = s.replace('_', "");
    match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => digits.parse(),
    }
}

/// Parse a decimal or `0x`-prefixed integer that must fit in `T`.
fn parse_int<T>(s: &str) -> Result<T, Box<dyn Error + Send + Sync>>
where
    T: TryFrom<u64>,
    T::Error: Error + Send + Sync + 'static,
{
    Ok(T::try_from(parse_u64(s)?)?)
}

/// Parse one hex byte, with or without a `0x` prefix.
fn parse_byte(s: &str) -> Result<u8, ParseIntError> {
    let hex = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u8::from_str_radix(hex, 16)
}
