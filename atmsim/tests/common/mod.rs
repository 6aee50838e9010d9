// Shared helpers for integration tests.
#![allow(dead_code)]


pub use atmsim::test_support::{instant_atm, scripted_console, transcript, visa_card};

/// Route library logs to the test harness; set RUST_LOG to see them.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
