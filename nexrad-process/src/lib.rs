//!
//! # nexrad-process
//! Polar virtual-volume processing algorithms for NEXRAD weather radar data: a subscription
//! runtime that accumulates same-radar, same-moment RadialSet tilts into an elevation volume and
//! dispatches a domain-specific callback over the merged column, plus the echo-top family of
//! algorithms built on it.
//!

#![forbid(unsafe_code)]
#![warn(clippy::correctness)]

pub mod callback;
pub mod echo_top;
pub mod elevation_volume;
pub mod polar_algorithm;
pub mod result;
pub mod terrain;
pub mod tilt;

pub use callback::EchoTopCallback;
pub use echo_top::{EchoTopAlgorithm, EchoTopVariant};
pub use elevation_volume::{ElevationVolume, TiltPointerCache};
pub use polar_algorithm::{AcceptedTilt, PolarAlgorithmState, DEFAULT_UPTO_DEGS};
pub use result::{Error, Result};
pub use terrain::TerrainBlockage;
pub use tilt::Tilt;
