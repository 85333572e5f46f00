//! [`LatLonHeightGridProjection`]: nearest-cell lookup with longitude wraparound (§4.3).

use super::array::DATA_UNAVAILABLE;
use super::lat_lon_height_grid::LatLonHeightGrid;
use super::projection::{Coverage, DataProjection};

/// A [`DataProjection`] bound to one height level of a [`LatLonHeightGrid`].
///
/// Value lookup rounds to the nearest cell; longitude is wrapped by plus-or-minus 360 degrees
/// when the query falls outside the grid but within one wrap of it (handles grids that straddle
/// the antimeridian or are addressed with an out-of-range longitude convention).
pub struct LatLonHeightGridProjection<'a> {
    grid: &'a LatLonHeightGrid,
    height_level: usize,
}

impl<'a> LatLonHeightGridProjection<'a> {
    pub fn new(grid: &'a LatLonHeightGrid, height_level: usize) -> Self {
        Self { grid, height_level }
    }

    fn nearest_lat_index(&self, lat_deg: f64) -> Option<usize> {
        let n = self.grid.num_lats();
        if n == 0 {
            return None;
        }
        let idx = ((self.grid.top_lat_deg() - lat_deg) / -self.grid.lat_spacing_deg()).round();
        if idx < 0.0 || idx as usize >= n {
            None
        } else {
            Some(idx as usize)
        }
    }

    fn nearest_lon_index(&self, mut lon_deg: f64) -> Option<usize> {
        let n = self.grid.num_lons();
        if n == 0 {
            return None;
        }
        for _ in 0..2 {
            let idx = ((lon_deg - self.grid.left_lon_deg()) / self.grid.lon_spacing_deg()).round();
            if idx >= 0.0 && (idx as usize) < n {
                return Some(idx as usize);
            }
            lon_deg += if lon_deg < self.grid.left_lon_deg() { 360.0 } else { -360.0 };
        }
        None
    }
}

impl<'a> DataProjection for LatLonHeightGridProjection<'a> {
    fn value_at(&self, lat_deg: f64, lon_deg: f64) -> f64 {
        match (self.nearest_lat_index(lat_deg), self.nearest_lon_index(lon_deg)) {
            (Some(lat_idx), Some(lon_idx)) => self.grid.value(self.height_level, lat_idx, lon_idx),
            _ => DATA_UNAVAILABLE,
        }
    }

    fn coverage_full(&self) -> Coverage {
        Coverage {
            rows: self.grid.num_lats(),
            cols: self.grid.num_lons(),
            top_lat_deg: self.grid.top_lat_deg(),
            left_lon_deg: self.grid.left_lon_deg(),
            delta_lat_deg: -self.grid.lat_spacing_deg(),
            delta_lon_deg: self.grid.lon_spacing_deg(),
        }
    }
}
