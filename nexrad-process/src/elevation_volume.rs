//! The pointer-cache-per-tilt structure an [`crate::callback::ElevationVolumeCallback`] walks,
//! grounded in `PolarAlgorithm::ElevationVolumeCallback::addVolume` (`rPolarAlgorithm.h`), which
//! copies each tilt's `DataTypePointerCache` (RadialSet pointer, projection pointer, beamwidth
//! array pointer) into a flat vector once per incoming volume rather than re-deriving it per gate.

use std::rc::Rc;

use nexrad_model::datatype::{Llh, RadialSet, RadialSetProjection, VolumeOfN, DEFAULT_ACCURACY};

use crate::tilt::Tilt;

/// One tilt's cached projection and geometry, built once per `processVolume` call.
pub struct TiltPointerCache {
    pub radial_set: Rc<RadialSet>,
    pub projection: RadialSetProjection<'static>,
    pub beam_widths_deg: Vec<f64>,
}

impl TiltPointerCache {
    fn build(tilt: &Rc<Tilt>, center: Llh) -> Self {
        let radial_set = tilt.radial_set.clone();
        let beam_widths_deg = (0..radial_set.num_radials()).map(|r| radial_set.beam_width_deg(r)).collect();
        let projection = RadialSetProjection::new("primary", &radial_set, center, DEFAULT_ACCURACY);
        Self { radial_set, projection, beam_widths_deg }
    }
}

/// A snapshot of a polar algorithm's elevation volume, ready for an
/// [`crate::callback::ElevationVolumeCallback`] to walk: one [`TiltPointerCache`] per tilt
/// (ascending elevation, per [`VolumeOfN`]'s ordering) plus the precomputed
/// `[tiltIndex][gate] -> slant range (km)` table the source's `getRanges()` supplies.
///
/// The source's own `getRanges()` is not present in the filtered `original_source/`; this models
/// it under `PolarAlgorithm`'s own class-level assumption ("This algorithm assumes all tilts have
/// the same number of azimuth and gates, which simplifies iteration"), so one row is computed
/// from the output geometry and shared by every tilt rather than re-derived per tilt.
pub struct ElevationVolume {
    tilts: Vec<TiltPointerCache>,
    ranges_km: Vec<f64>,
    center: Llh,
}

impl ElevationVolume {
    pub fn build(volume: &VolumeOfN<Tilt>, center: Llh, out_num_gates: usize, out_first_gate_m: f64, out_gate_width_m: f64) -> Self {
        let tilts = volume.entries().iter().map(|t| TiltPointerCache::build(t, center)).collect();
        let ranges_km = (0..out_num_gates)
            .map(|g| (out_first_gate_m + out_gate_width_m * (g as f64 + 0.5)) / 1000.0)
            .collect();
        Self { tilts, ranges_km, center }
    }

    pub fn len(&self) -> usize {
        self.tilts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tilts.is_empty()
    }

    pub fn tilt(&self, index: usize) -> &TiltPointerCache {
        &self.tilts[index]
    }

    /// Slant range (km) of `gate` along the beam, per tilt index (all rows equal, see struct docs).
    pub fn range_km(&self, _tilt_index: usize, gate: usize) -> f64 {
        self.ranges_km[gate]
    }

    pub fn center(&self) -> Llh {
        self.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexrad_model::datatype::Time;

    fn tilt(elevation_deg: f64) -> Rc<Tilt> {
        let rs = Rc::new(RadialSet::new("Reflectivity", 4, 4, elevation_deg, 1000.0));
        Rc::new(Tilt::new(rs, Time::from_epoch(0, 0.0)))
    }

    #[test]
    fn builds_one_pointer_cache_entry_per_tilt_in_ascending_order() {
        let mut volume: VolumeOfN<Tilt> = VolumeOfN::new("KTLX_Reflectivity");
        volume.add_data_type(tilt(1.5));
        volume.add_data_type(tilt(0.5));
        let center = Llh::new(35.3, -97.4, 0.417);
        let ev = ElevationVolume::build(&volume, center, 4, 1000.0, 250.0);
        assert_eq!(ev.len(), 2);
        assert_eq!(ev.tilt(0).radial_set.elevation_deg(), 0.5);
        assert_eq!(ev.tilt(1).radial_set.elevation_deg(), 1.5);
    }

    #[test]
    fn range_table_matches_output_gate_centers() {
        let volume: VolumeOfN<Tilt> = VolumeOfN::new("k");
        let center = Llh::new(35.3, -97.4, 0.417);
        let ev = ElevationVolume::build(&volume, center, 2, 1000.0, 250.0);
        assert_eq!(ev.range_km(0, 0), 1.125);
        assert_eq!(ev.range_km(0, 1), 1.375);
    }
}
