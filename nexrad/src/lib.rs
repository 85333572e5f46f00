#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::correctness)]

//! # NEXRAD
//!
//! Download and decode functions for NEXRAD radar data.
//!

pub mod result;
