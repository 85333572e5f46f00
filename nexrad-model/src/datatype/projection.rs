//! [`DataProjection`]: a coordinate view bound to one named layer of a DataGrid-backed DataType,
//! plus the coverage-bbox calculations used by rendering and tile-serving callers (§4.3).

use super::array::DATA_UNAVAILABLE;
use super::geometry::destination_point;
use super::geometry::Llh;

/// Bounding box returned by the coverage calculations: row/column counts and the
/// top-left corner plus per-cell spacing needed to walk the grid in lat/lon space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coverage {
    pub rows: usize,
    pub cols: usize,
    pub top_lat_deg: f64,
    pub left_lon_deg: f64,
    pub delta_lat_deg: f64,
    pub delta_lon_deg: f64,
}

/// A coordinate view bound to one named array of a DataGrid-backed DataType.
pub trait DataProjection {
    /// Sample the bound layer at `(lat, lon)`; returns [`DATA_UNAVAILABLE`] out of bounds.
    fn value_at(&self, lat_deg: f64, lon_deg: f64) -> f64;

    /// The natural bounds of the underlying grid.
    fn coverage_full(&self) -> Coverage;

    /// A square grid of `rows` x `cols` cells centered on the data's natural center, spanning
    /// `half_width_deg` degrees in each direction from center.
    fn coverage_center_degree(&self, half_width_deg: f64, rows: usize, cols: usize) -> Coverage {
        let full = self.coverage_full();
        let center_lat = full.top_lat_deg + full.delta_lat_deg * (full.rows as f64) / 2.0;
        let center_lon = full.left_lon_deg + full.delta_lon_deg * (full.cols as f64) / 2.0;
        let delta_lon = (2.0 * half_width_deg) / cols as f64;
        let delta_lat = -delta_lon;
        Coverage {
            rows,
            cols,
            top_lat_deg: center_lat - delta_lat * (rows as f64) / 2.0,
            left_lon_deg: center_lon - delta_lon * (cols as f64) / 2.0,
            delta_lat_deg: delta_lat,
            delta_lon_deg: delta_lon,
        }
    }

    /// An OpenStreetMap-zoom-semantics tile bbox: `tileWidth = 360 * 2^-zoom`,
    /// `deltaLon = tileWidth / cols`, `deltaLat = -deltaLon` for square pixels.
    fn coverage_tile(&self, zoom: u32, rows: usize, cols: usize, center_lat_deg: f64, center_lon_deg: f64) -> Coverage {
        let tile_width_deg = 360.0 / 2f64.powi(zoom as i32);
        let delta_lon = tile_width_deg / cols as f64;
        let delta_lat = -delta_lon;
        Coverage {
            rows,
            cols,
            top_lat_deg: center_lat_deg - delta_lat * (rows as f64) / 2.0,
            left_lon_deg: center_lon_deg - delta_lon * (cols as f64) / 2.0,
            delta_lat_deg: delta_lat,
            delta_lon_deg: delta_lon,
        }
    }
}

/// Inverts azimuth/range addressing back to geographic coordinates, the operation a
/// [`super::radial_set_projection::RadialSetProjection`]'s lookup table does not itself need but
/// that coverage/export code built on top of it does. Not present under a dedicated name in the
/// upstream source (see DESIGN.md); built from [`destination_point`].
pub fn az_range_to_lat_lon(origin: Llh, azimuth_deg: f64, range_km: f64) -> Llh {
    destination_point(origin, azimuth_deg, range_km)
}

/// OpenStreetMap slippy-map tile-to-lon/lat conversion (§6.5).
pub fn tile_to_lon(x: u32, zoom: u32) -> f64 {
    x as f64 * 360.0 / 2f64.powi(zoom as i32) - 180.0
}

pub fn tile_to_lat(y: u32, zoom: u32) -> f64 {
    let n = std::f64::consts::PI - 2.0 * std::f64::consts::PI * y as f64 / 2f64.powi(zoom as i32);
    n.sinh().atan().to_degrees()
}

pub fn unavailable() -> f64 {
    DATA_UNAVAILABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_bbox_is_square_in_degrees() {
        struct Stub;
        impl DataProjection for Stub {
            fn value_at(&self, _lat_deg: f64, _lon_deg: f64) -> f64 {
                DATA_UNAVAILABLE
            }
            fn coverage_full(&self) -> Coverage {
                Coverage {
                    rows: 100,
                    cols: 100,
                    top_lat_deg: 45.0,
                    left_lon_deg: -100.0,
                    delta_lat_deg: -0.01,
                    delta_lon_deg: 0.01,
                }
            }
        }
        let cov = Stub.coverage_tile(4, 256, 256, 40.0, -95.0);
        assert!((cov.delta_lat_deg + cov.delta_lon_deg).abs() < 1e-12);
        assert_eq!(cov.rows, 256);
    }

    #[test]
    fn tile_origin_matches_osm_formula() {
        assert!((tile_to_lon(0, 0) - (-180.0)).abs() < 1e-9);
        assert!(tile_to_lat(0, 0) > 85.0);
    }
}
