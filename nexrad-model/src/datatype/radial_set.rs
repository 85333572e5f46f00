//! [`RadialSet`]: a polar-coordinate [`DataGrid`] of (radial, gate) moment data.

use super::array::ElementType;
use super::data_grid::{DataGrid, DimensionEntry};
use super::error::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const RADIAL_DIM: usize = 0;
pub const GATE_DIM: usize = 1;

/// A [`DataGrid`] with dimensions `[radial, gate]`, plus the polar geometry needed to place
/// each cell in space: elevation angle, first-gate range, and mandatory per-radial arrays.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RadialSet {
    grid: DataGrid,
    elevation_deg: f64,
    distance_to_first_gate_m: f64,
}

impl RadialSet {
    /// Create a RadialSet of `num_radials` x `num_gates`, with the mandatory per-radial
    /// Azimuth/BeamWidth/GateWidth arrays already attached (§3).
    pub fn new(
        type_name: impl Into<String>,
        num_radials: usize,
        num_gates: usize,
        elevation_deg: f64,
        distance_to_first_gate_m: f64,
    ) -> Self {
        let dims = vec![DimensionEntry::new("radial", num_radials), DimensionEntry::new("gate", num_gates)];
        let mut grid = DataGrid::new(type_name, dims);
        grid.add_array("primary", "dimensionless", ElementType::Float, vec![RADIAL_DIM, GATE_DIM], super::array::MISSING_DATA)
            .expect("fixed dims");
        grid.add_array("Azimuth", "Degrees", ElementType::Float, vec![RADIAL_DIM], 0.0).expect("fixed dims");
        grid.add_array("BeamWidth", "Degrees", ElementType::Float, vec![RADIAL_DIM], 1.0).expect("fixed dims");
        grid.add_array("GateWidth", "Meters", ElementType::Float, vec![RADIAL_DIM], 250.0).expect("fixed dims");
        Self {
            grid,
            elevation_deg,
            distance_to_first_gate_m,
        }
    }

    pub fn grid(&self) -> &DataGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut DataGrid {
        &mut self.grid
    }

    pub fn num_radials(&self) -> usize {
        self.grid.dims()[RADIAL_DIM].size
    }

    pub fn num_gates(&self) -> usize {
        self.grid.dims()[GATE_DIM].size
    }

    pub fn elevation_deg(&self) -> f64 {
        self.elevation_deg
    }

    pub fn elevation_cos(&self) -> f64 {
        self.elevation_deg.to_radians().cos()
    }

    pub fn elevation_tan(&self) -> f64 {
        self.elevation_deg.to_radians().tan()
    }

    pub fn distance_to_first_gate_m(&self) -> f64 {
        self.distance_to_first_gate_m
    }

    pub fn azimuth_deg(&self, radial: usize) -> f64 {
        self.grid.require("Azimuth").expect("mandatory array").data().as_f64(radial)
    }

    pub fn beam_width_deg(&self, radial: usize) -> f64 {
        self.grid.require("BeamWidth").expect("mandatory array").data().as_f64(radial)
    }

    pub fn gate_width_m(&self, radial: usize) -> f64 {
        self.grid.require("GateWidth").expect("mandatory array").data().as_f64(radial)
    }

    pub fn set_azimuth_deg(&mut self, radial: usize, value: f64) {
        self.grid.require_mut("Azimuth").expect("mandatory array").data_mut().set_f64(radial, value);
    }

    pub fn set_beam_width_deg(&mut self, radial: usize, value: f64) {
        self.grid.require_mut("BeamWidth").expect("mandatory array").data_mut().set_f64(radial, value);
    }

    pub fn set_gate_width_m(&mut self, radial: usize, value: f64) {
        self.grid.require_mut("GateWidth").expect("mandatory array").data_mut().set_f64(radial, value);
    }

    pub fn value(&self, radial: usize, gate: usize) -> f64 {
        let gates = self.num_gates();
        self.grid.require(super::data_grid::PRIMARY).expect("primary").data().as_f64(radial * gates + gate)
    }

    pub fn set_value(&mut self, radial: usize, gate: usize, value: f64) {
        let gates = self.num_gates();
        self.grid
            .require_mut(super::data_grid::PRIMARY)
            .expect("primary")
            .data_mut()
            .set_f64(radial * gates + gate, value);
    }

    /// Attach an optional terrain array (cumulative blockage, partial blockage, or
    /// beam-bottom-hit), stored as an ordinary (radial, gate) `DataArray` node per the
    /// supplemented-features note: terrain is not a distinct struct field in this model.
    pub fn add_terrain_array(&mut self, name: &str, fill: f64) -> Result<()> {
        self.grid
            .add_array(name, "dimensionless", ElementType::Float, vec![RADIAL_DIM, GATE_DIM], fill)
            .map(|_| ())
    }
}
