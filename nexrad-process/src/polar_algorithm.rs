//! [`PolarAlgorithmState`]: the subscription/latch/volume bookkeeping shared by every polar
//! algorithm, grounded in `PolarAlgorithm::processNewData`/`processRadialSet`/`firstDataSetup`
//! (`rPolarAlgorithm.cc`).

use std::rc::Rc;

use nexrad_model::datatype::{Llh, RadialSet, Time, VolumeOfN};

use crate::terrain::{TerrainBlockage, DEFAULT_RANGE_KM};
use crate::tilt::Tilt;

/// Default elevation-angle ceiling: the source's `upto` option defaults to "1000" degrees, i.e.
/// effectively unbounded.
pub const DEFAULT_UPTO_DEGS: f64 = 1000.0;

/// What a successfully-accepted RadialSet hands back to the caller so it can drive
/// `processVolume`, mirroring `processNewData`'s local `useSubtype`/`useElevDegs`/`useTime`.
#[derive(Debug, Clone)]
pub struct AcceptedTilt {
    pub use_subtype: String,
    pub use_elevation_deg: f64,
    pub use_time: Time,
}

/// Per-algorithm state: the elevation ceiling, the latched (radar, type) pair, the elevation
/// volume, and the (DEM-less) terrain blockage plugin.
pub struct PolarAlgorithmState {
    upto_degs: f64,
    radar_name: Option<String>,
    type_name: Option<String>,
    center: Option<Llh>,
    terrain_blockage: Option<TerrainBlockage>,
    volume: VolumeOfN<Tilt>,
}

impl PolarAlgorithmState {
    pub fn new(upto_degs: f64) -> Self {
        Self {
            upto_degs,
            radar_name: None,
            type_name: None,
            center: None,
            terrain_blockage: None,
            volume: VolumeOfN::new(""),
        }
    }

    pub fn volume(&self) -> &VolumeOfN<Tilt> {
        &self.volume
    }

    pub fn terrain_blockage(&self) -> Option<&TerrainBlockage> {
        self.terrain_blockage.as_ref()
    }

    pub fn center(&self) -> Option<Llh> {
        self.center
    }

    /// Equivalent of `processNewData`: accept a new RadialSet, add it to the volume if it passes
    /// the elevation ceiling and radar/type latch, and return the values the caller needs to
    /// invoke `processVolume`.
    pub fn process_new_data(&mut self, radar_name: &str, center: Llh, radial_set: Rc<RadialSet>, time: Time) -> Option<AcceptedTilt> {
        if !self.process_radial_set(radar_name, center, radial_set.clone(), time) {
            return None;
        }
        let subtype = format!("{:05.2}", radial_set.elevation_deg());
        Some(AcceptedTilt {
            use_subtype: format!("at{subtype}"),
            use_elevation_deg: radial_set.elevation_deg(),
            use_time: time,
        })
    }

    /// Equivalent of `processRadialSet`: elevation-ceiling clip, radar/type latch-on-first-data,
    /// append to the volume. Returns whether the tilt was added.
    fn process_radial_set(&mut self, radar_name: &str, center: Llh, radial_set: Rc<RadialSet>, time: Time) -> bool {
        if radial_set.elevation_deg() > self.upto_degs {
            log::info!(
                "ignoring tilt at {:.2} degrees, above configured ceiling {:.2}",
                radial_set.elevation_deg(),
                self.upto_degs
            );
            return false;
        }

        let type_name = radial_set.grid().type_name().to_string();

        self.first_data_setup(radar_name, &type_name, center);

        if self.radar_name.as_deref() != Some(radar_name) || self.type_name.as_deref() != Some(type_name.as_str()) {
            log::info!("ignoring radar/typename '{radar_name}-{type_name}'");
            return false;
        }

        self.volume.add_data_type(Rc::new(Tilt::new(radial_set, time)));
        true
    }

    /// Equivalent of `firstDataSetup`: one-time setup run on the very first accepted tilt,
    /// latching the radar/type this algorithm instance will handle from now on.
    fn first_data_setup(&mut self, radar_name: &str, type_name: &str, center: Llh) {
        if self.radar_name.is_some() {
            return;
        }

        log::info!("linking this algorithm to radar '{radar_name}' and typename '{type_name}' since first pass we only handle 1");
        self.radar_name = Some(radar_name.to_string());
        self.type_name = Some(type_name.to_string());
        self.center = Some(center);
        self.volume = VolumeOfN::new(format!("{radar_name}_{type_name}"));
        self.terrain_blockage = Some(TerrainBlockage::new(center, DEFAULT_RANGE_KM));
    }
}
