//! Shared utilities for integration tests.
//!
//! Provides a serialised log-capture fixture and deterministic proptest
//! runners and strategies for field values.

// Items in this shared module may not be used by all test binaries that import it.
#![allow(
    dead_code,
    reason = "shared test utilities are not used by all test binaries"
)]

use std::sync::{Mutex, MutexGuard, OnceLock};

use ami::{Endianness, FieldFormat, Width};
use logtest::Logger;
use proptest::{
    prelude::{Just, Strategy, prop_oneof},
    test_runner::{Config as ProptestConfig, RngAlgorithm, TestRng, TestRunner},
};
use rstest::fixture;

/// Handle to the global logger with exclusive access.
pub struct LoggerHandle {
    guard: MutexGuard<'static, Logger>,
}

impl LoggerHandle {
    /// Acquire the global [`Logger`] instance and discard stale records.
    #[expect(
        clippy::expect_used,
        reason = "a poisoned logger means an earlier test already failed"
    )]
    pub fn new() -> Self {
        static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

        let logger = LOGGER.get_or_init(|| Mutex::new(Logger::start()));
        let mut guard = logger.lock().expect("logger poisoned");
        while guard.pop().is_some() {}

        Self { guard }
    }

    /// Drain captured records, returning `(level, message)` pairs.
    pub fn drain(&mut self) -> Vec<(log::Level, String)> {
        std::iter::from_fn(|| self.guard.pop())
            .map(|record| (record.level(), record.args().to_owned()))
            .collect()
    }
}

#[allow(
    unused_braces,
    reason = "rustc false positive for single line rstest fixtures"
)]
#[fixture]
pub fn logger() -> LoggerHandle { LoggerHandle::new() }

pub fn deterministic_runner(cases: u32) -> TestRunner {
    let config = ProptestConfig {
        cases,
        ..ProptestConfig::default()
    };
    let rng = TestRng::deterministic_rng(RngAlgorithm::ChaCha);
    TestRunner::new_with_rng(config, rng)
}

/// Values representable in `width`, biased towards the edges.
pub fn field_value_strategy(width: Width) -> impl Strategy<Value = u64> {
    let mask = width.mask();
    prop_oneof![
        Just(0u64),
        Just(1u64),
        Just(mask),
        Just(1u64 << (width.bits() - 1)),
        0u64..=mask,
    ]
}

/// Every width paired with both byte orders.
pub fn all_formats() -> Vec<FieldFormat> {
    Width::ALL
        .into_iter()
        .flat_map(|width| {
            [Endianness::Big, Endianness::Little]
                .map(|endianness| FieldFormat::new(width, endianness))
        })
        .collect()
}
