//! NetCDF file format support for NEXRAD data.
//!
//! This crate provides functionality for converting NEXRAD data to NetCDF format.

pub mod result;
