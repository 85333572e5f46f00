//! [`LatLonHeightGrid`]: a Cartesian lat/lon/height [`DataGrid`].

use super::array::ElementType;
use super::data_grid::{DataGrid, DimensionEntry};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const HEIGHT_DIM: usize = 0;
pub const LAT_DIM: usize = 1;
pub const LON_DIM: usize = 2;

/// A [`DataGrid`] with dimensions `[height, lat, lon]`, plus lat/lon spacing and a 1-D Height
/// array giving the physical altitude of each height level.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLonHeightGrid {
    grid: DataGrid,
    top_lat_deg: f64,
    left_lon_deg: f64,
    lat_spacing_deg: f64,
    lon_spacing_deg: f64,
}

impl LatLonHeightGrid {
    pub fn new(
        type_name: impl Into<String>,
        num_heights: usize,
        num_lats: usize,
        num_lons: usize,
        top_lat_deg: f64,
        left_lon_deg: f64,
        lat_spacing_deg: f64,
        lon_spacing_deg: f64,
    ) -> Self {
        let dims = vec![
            DimensionEntry::new("height", num_heights),
            DimensionEntry::new("lat", num_lats),
            DimensionEntry::new("lon", num_lons),
        ];
        let mut grid = DataGrid::new(type_name, dims);
        grid.add_array(
            "primary",
            "dimensionless",
            ElementType::Float,
            vec![HEIGHT_DIM, LAT_DIM, LON_DIM],
            super::array::MISSING_DATA,
        )
        .expect("fixed dims");
        grid.add_array("Height", "Meters", ElementType::Float, vec![HEIGHT_DIM], 0.0).expect("fixed dims");
        Self {
            grid,
            top_lat_deg,
            left_lon_deg,
            lat_spacing_deg,
            lon_spacing_deg,
        }
    }

    pub fn grid(&self) -> &DataGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut DataGrid {
        &mut self.grid
    }

    pub fn num_heights(&self) -> usize {
        self.grid.dims()[HEIGHT_DIM].size
    }

    pub fn num_lats(&self) -> usize {
        self.grid.dims()[LAT_DIM].size
    }

    pub fn num_lons(&self) -> usize {
        self.grid.dims()[LON_DIM].size
    }

    pub fn top_lat_deg(&self) -> f64 {
        self.top_lat_deg
    }

    pub fn left_lon_deg(&self) -> f64 {
        self.left_lon_deg
    }

    pub fn lat_spacing_deg(&self) -> f64 {
        self.lat_spacing_deg
    }

    pub fn lon_spacing_deg(&self) -> f64 {
        self.lon_spacing_deg
    }

    pub fn height_m(&self, level: usize) -> f64 {
        self.grid.require("Height").expect("mandatory array").data().as_f64(level)
    }

    pub fn set_height_m(&mut self, level: usize, value: f64) {
        self.grid.require_mut("Height").expect("mandatory array").data_mut().set_f64(level, value);
    }

    pub fn value(&self, height: usize, lat: usize, lon: usize) -> f64 {
        let (nlat, nlon) = (self.num_lats(), self.num_lons());
        let flat = (height * nlat + lat) * nlon + lon;
        self.grid.require(super::data_grid::PRIMARY).expect("primary").data().as_f64(flat)
    }

    pub fn set_value(&mut self, height: usize, lat: usize, lon: usize, value: f64) {
        let (nlat, nlon) = (self.num_lats(), self.num_lons());
        let flat = (height * nlat + lat) * nlon + lon;
        self.grid.require_mut(super::data_grid::PRIMARY).expect("primary").data_mut().set_f64(flat, value);
    }
}
