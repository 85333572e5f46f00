//! [`EchoTopCallback`]: the per-gate visitor a polar algorithm's `processVolume` drives over its
//! output `RadialSet`, grounded in `PolarAlgorithm::ElevationVolumeCallback::handleGate`
//! (`rPolarAlgorithm.h`) and its three `rEchoTop.cc` specializations.
//!
//! Unlike the source's `handleGate(RadialSetIterator*)` taking an output-parameter-style iterator,
//! this returns the computed value directly, matching [`nexrad_model::datatype::RadialSetIterator`]'s
//! existing closure-based `iterate` (§4.5) rather than introducing a second callback object style.

use crate::elevation_volume::ElevationVolume;

/// Visits one (azimuth, gate) position of a polar algorithm's output RadialSet and returns the
/// value to write there, given the snapshot of the contributing elevation volume.
pub trait EchoTopCallback {
    fn handle_gate(&mut self, volume: &ElevationVolume, center_azimuth_deg: f64, gate: usize) -> f64;
}
