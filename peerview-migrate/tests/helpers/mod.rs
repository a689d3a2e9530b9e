//! Test helper utilities
//!
//! Shared fixtures and log capture for peerview-migrate integration tests

#![allow(dead_code)]

pub mod fixtures;
pub mod log_capture;

pub use fixtures::{write_sample_export, SnapshotDir};
pub use log_capture::{capture_logs, LogCapture};
