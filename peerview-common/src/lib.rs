//! # PeerView Common Library
//!
//! Shared code for the PeerView data tools including:
//! - Canonical enumerations of the target schema
//! - Configuration file resolution
//! - Civil timestamp conversion
//! - Common error type

pub mod config;
pub mod enums;
pub mod error;
pub mod time;

pub use error::{Error, Result};
pub use time::CivilZone;
