//! Terrain blockage plugin, grounded in `rPluginTerrainBlockage.h`/`.cc`.
//!
//! The source lazily builds a `TerrainBlockage` from a named algorithm plus a DEM directory
//! (`"lak,/DEMS"`) and returns `None` whenever no algorithm was requested on the command line,
//! which is the actual default production behavior. No DEM data ships with this crate, so
//! [`TerrainBlockage::is_blocked`] always reports no blockage; it exists so a polar algorithm can
//! hold the same `radarLocation`/`radarRangeKMs` bookkeeping `firstDataSetup` does and so a future
//! DEM-backed implementation has somewhere to plug in without changing the call sites.

use nexrad_model::datatype::Llh;

/// Fixed range (km) past which `firstDataSetup` considers the terrain-blockage lookup irrelevant,
/// matching the source's hardcoded `rangeKMs = 500`.
pub const DEFAULT_RANGE_KM: f64 = 500.0;

#[derive(Debug, Clone, Copy)]
pub struct TerrainBlockage {
    radar_location: Llh,
    range_km: f64,
    min_terrain_km: f64,
    min_angle_deg: f64,
}

impl TerrainBlockage {
    pub fn new(radar_location: Llh, range_km: f64) -> Self {
        Self {
            radar_location,
            range_km,
            min_terrain_km: 0.0,
            min_angle_deg: 0.1,
        }
    }

    pub fn with_thresholds(mut self, min_terrain_km: f64, min_angle_deg: f64) -> Self {
        self.min_terrain_km = min_terrain_km;
        self.min_angle_deg = min_angle_deg;
        self
    }

    pub fn radar_location(&self) -> Llh {
        self.radar_location
    }

    pub fn range_km(&self) -> f64 {
        self.range_km
    }

    /// Whether the beam at `elevation_deg` is blocked by terrain at `range_km` along `az_deg`.
    /// Always `false`: no DEM backend is bundled with this crate (see module docs).
    pub fn is_blocked(&self, _az_deg: f64, range_km: f64, elevation_deg: f64) -> bool {
        if range_km > self.range_km || elevation_deg < self.min_angle_deg {
            return false;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_blocks_without_a_dem_backend() {
        let tb = TerrainBlockage::new(Llh::new(35.3, -97.4, 0.417), DEFAULT_RANGE_KM);
        assert!(!tb.is_blocked(45.0, 10.0, 0.5));
    }
}
