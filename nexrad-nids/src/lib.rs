//!
//! # nexrad-nids
//! Codec for NIDS (NEXRAD Level III) products: the block-structured, optionally BZIP2-compressed
//! binary format used to distribute derived radar products (reflectivity, velocity, VIL, echo
//! tops, and so on) over NOAAPORT and the NWS FTP feeds.
//!
//! Products decode into the same [`nexrad_model::datatype::RadialSet`] used by the rest of this
//! workspace's data model, so a NIDS product and a decoded Archive II moment can flow through
//! the same projection and virtual-volume machinery.
//!

#![forbid(unsafe_code)]
#![warn(clippy::correctness)]

pub mod blocks;
pub mod colors;
pub(crate) mod cursor;
pub mod product_codes;
pub mod reader;
pub mod result;
pub mod threshold;
pub mod time;
pub mod writer;

pub use reader::{read_nids, NidsProduct};
pub use result::{Error, Result};
pub use writer::{write_nids, WriteOptions};
