//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_abs_diff_eq;

use esc_convert::ConversionInput;
use tracing_subscriber::EnvFilter;

/// Route library log events to the test harness; `RUST_LOG=esc_convert=debug`
/// shows the resolved transforms
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The worked example used throughout: OR 3.56 with standard error 0.91
pub fn reference_input() -> ConversionInput {
    ConversionInput::new(3.56).with_se(0.91)
}

/// A handful of studies as they might appear in a meta-analysis table
pub fn study_table() -> Vec<ConversionInput> {
    vec![
        ConversionInput::new(3.56).with_se(0.91).with_total_n(40.0).with_study("Adams 2011"),
        ConversionInput::new(0.62).with_variance(0.08).with_total_n(212.0).with_study("Baker 2014"),
        ConversionInput::new(1.20).with_se(0.35).with_study("Clark 2015"),
        ConversionInput::new(2.05).with_total_n(88.0).with_study("Davis 2017"),
        ConversionInput::new(1.75).with_se(0.22).with_total_n(f64::NAN).with_study("Evans 2020"),
    ]
}
