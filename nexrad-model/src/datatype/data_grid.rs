//! [`DataGrid`]: an ordered sequence of dimensions plus a name-keyed set of [`DataArray`] nodes,
//! with the sparse run-length encoding used to shrink the primary array for storage/wire transfer.

use std::collections::BTreeMap;

use super::array::{ArrayData, ElementType, MISSING_DATA};
use super::attribute::Attributes;
use super::data_array::DataArray;
use super::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const PRIMARY: &str = "primary";
const DISABLED_PRIMARY: &str = "DisabledPrimary";
const SPARSE_PREFIX: &str = "Sparse";
const PIXEL_DIM: &str = "pixel";

/// (name, size) — one axis of a [`DataGrid`]'s dimension-entry sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DimensionEntry {
    pub name: String,
    pub size: usize,
}

impl DimensionEntry {
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Self { name: name.into(), size }
    }
}

/// A DataType owning an ordered dimension-entry list and a name-keyed set of [`DataArray`] nodes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DataGrid {
    type_name: String,
    dims: Vec<DimensionEntry>,
    nodes: BTreeMap<String, DataArray>,
    attributes: Attributes,
}

impl DataGrid {
    pub fn new(type_name: impl Into<String>, dims: Vec<DimensionEntry>) -> Self {
        Self {
            type_name: type_name.into(),
            dims,
            nodes: BTreeMap::new(),
            attributes: Attributes::new(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn dims(&self) -> &[DimensionEntry] {
        &self.dims
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Units of the "primary" node, if present — the grid-level units double as the primary
    /// array's units per the one-primary-per-grid invariant.
    pub fn units(&self) -> Option<&str> {
        self.get(PRIMARY).map(|a| a.units())
    }

    pub fn set_units(&mut self, units: impl Into<String>) {
        let units = units.into();
        if let Some(primary) = self.nodes.get_mut(PRIMARY) {
            primary.set_units(units);
        } else {
            self.attributes.set("Units", units);
        }
    }

    /// Create (or replace in-place) a named array bound to the given dimension indices.
    ///
    /// Per §4.1: an index ≥ `dims.len()` fails with `DimensionIndexOutOfRange`; a name collision
    /// replaces the prior node.
    pub fn add_array(
        &mut self,
        name: impl Into<String>,
        units: impl Into<String>,
        element_type: ElementType,
        dim_indexes: Vec<usize>,
        fill: f64,
    ) -> Result<&mut DataArray> {
        let name = name.into();
        for &idx in &dim_indexes {
            if idx >= self.dims.len() {
                log::error!(
                    "add_array({name}): dimension index {idx} out of range (grid has {} dimensions)",
                    self.dims.len()
                );
                return Err(Error::DimensionIndexOutOfRange { index: idx, dims: self.dims.len() });
            }
        }
        let shape: Vec<usize> = dim_indexes.iter().map(|&i| self.dims[i].size).collect();
        let mut data = ArrayData::zeros(element_type, shape);
        data.fill(fill);
        let array = DataArray::new(name.clone(), units, data, dim_indexes);
        self.nodes.insert(name.clone(), array);
        Ok(self.nodes.get_mut(&name).expect("just inserted"))
    }

    pub fn get(&self, name: &str) -> Option<&DataArray> {
        self.nodes.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut DataArray> {
        self.nodes.get_mut(name)
    }

    pub fn require(&self, name: &str) -> Result<&DataArray> {
        self.get(name).ok_or_else(|| Error::ArrayRefMissing(name.to_string()))
    }

    pub fn require_mut(&mut self, name: &str) -> Result<&mut DataArray> {
        self.get_mut(name).ok_or_else(|| Error::ArrayRefMissing(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(|s| s.as_str())
    }

    /// Rename `old` to `new`. Fails (returns `false`) if `new` already exists, per §4.1.
    pub fn change_name(&mut self, old: &str, new: &str) -> bool {
        if self.nodes.contains_key(new) {
            log::warn!("change_name({old} -> {new}): name collision, leaving state unchanged");
            return false;
        }
        match self.nodes.remove(old) {
            Some(mut array) => {
                array.rename(new);
                self.nodes.insert(new.to_string(), array);
                true
            }
            None => false,
        }
    }

    /// Unordered swap-pop delete, O(1).
    pub fn delete(&mut self, name: &str) -> bool {
        self.nodes.remove(name).is_some()
    }

    pub fn hide(&mut self, name: &str) -> bool {
        match self.nodes.get_mut(name) {
            Some(array) => {
                array.set_hidden(true);
                true
            }
            None => false,
        }
    }

    /// Resize a dimension, resizing every array that references it (§3 invariant). Existing
    /// contents are undefined after a resize, matching `TypedArray::resize`.
    pub fn resize_dimension(&mut self, dim_index: usize, new_size: usize) -> Result<()> {
        if dim_index >= self.dims.len() {
            return Err(Error::DimensionIndexOutOfRange { index: dim_index, dims: self.dims.len() });
        }
        self.dims[dim_index].size = new_size;
        for array in self.nodes.values_mut() {
            if array.dim_indexes().contains(&dim_index) {
                let shape: Vec<usize> = array.dim_indexes().iter().map(|&i| self.dims[i].size).collect();
                array.data_mut().resize(shape, MISSING_DATA);
            }
        }
        Ok(())
    }

    fn is_sparse(&self) -> bool {
        self.nodes.contains_key("pixel_x")
    }

    /// Encode the dense primary array into the sparse run-length form (§4.2, preWrite).
    ///
    /// No-op if `pixel_x` already exists. Supports 2-D (x, y) and 3-D (z, x, y) primary shapes.
    pub fn sparse_encode(&mut self) -> Result<()> {
        if self.is_sparse() {
            return Ok(());
        }
        let primary = self.require(PRIMARY)?;
        let shape = primary.shape().to_vec();
        let rank = shape.len();
        if rank != 2 && rank != 3 {
            return Ok(());
        }

        let values = scan_order_values(primary.data(), &shape);
        let dense_len = values.len();

        let mut runs: Vec<(Vec<i32>, f32, i32)> = Vec::new();
        let mut i = 0usize;
        while i < dense_len {
            let v = values[i];
            if (v - MISSING_DATA as f32).abs() < f32::EPSILON {
                i += 1;
                continue;
            }
            let mut run = 1usize;
            while i + run < dense_len && values[i + run] == v {
                run += 1;
            }
            let coords = scan_order_coords(i, &shape);
            runs.push((coords, v, run as i32));
            i += run;
        }

        let num_pixels = runs.len();
        let dims_len = self.dims.len();
        self.dims.push(DimensionEntry::new(PIXEL_DIM, num_pixels));
        let pixel_dim = dims_len;

        let dense_bytes = dense_len * 4;
        let sparse_bytes = num_pixels * (2 * (rank - 1) + 2 + 4);
        let compression_ratio = if dense_bytes > 0 {
            sparse_bytes as f64 / dense_bytes as f64
        } else {
            1.0
        };

        let background = MISSING_DATA;
        let primary_mut = self.require_mut(PRIMARY)?;
        primary_mut.rename(DISABLED_PRIMARY);
        primary_mut.set_hidden(true);
        primary_mut.attributes_mut().set("BackgroundValue", background);
        primary_mut.attributes_mut().set("SparseGridCompression", compression_ratio);
        primary_mut.attributes_mut().set("NumValidRuns", num_pixels as i64);
        primary_mut.attributes_mut().set("MissingData", MISSING_DATA);

        let disabled = self.nodes.remove(DISABLED_PRIMARY).expect("just renamed");
        self.nodes.insert(DISABLED_PRIMARY.to_string(), disabled);

        let mut pixel_value = ArrayData::zeros(ElementType::Float, vec![num_pixels]);
        let mut pixel_count = ArrayData::zeros(ElementType::Int, vec![num_pixels]);
        let mut pixel_x = ArrayData::zeros(ElementType::Short, vec![num_pixels]);
        let mut pixel_y = ArrayData::zeros(ElementType::Short, vec![num_pixels]);
        let mut pixel_z = if rank == 3 { Some(ArrayData::zeros(ElementType::Short, vec![num_pixels])) } else { None };

        for (idx, (coords, value, count)) in runs.into_iter().enumerate() {
            pixel_value.set_f64(idx, value as f64);
            pixel_count.set_f64(idx, count as f64);
            if rank == 2 {
                pixel_x.set_f64(idx, coords[0] as f64);
                pixel_y.set_f64(idx, coords[1] as f64);
            } else {
                pixel_z.as_mut().unwrap().set_f64(idx, coords[0] as f64);
                pixel_x.set_f64(idx, coords[1] as f64);
                pixel_y.set_f64(idx, coords[2] as f64);
            }
        }

        self.nodes.insert(PRIMARY.to_string(), DataArray::new(PRIMARY, "dimensionless", pixel_value, vec![pixel_dim]));
        self.nodes.insert("pixel_count".to_string(), DataArray::new("pixel_count", "count", pixel_count, vec![pixel_dim]));
        self.nodes.insert("pixel_x".to_string(), DataArray::new("pixel_x", "index", pixel_x, vec![pixel_dim]));
        self.nodes.insert("pixel_y".to_string(), DataArray::new("pixel_y", "index", pixel_y, vec![pixel_dim]));
        if let Some(z) = pixel_z {
            self.nodes.insert("pixel_z".to_string(), DataArray::new("pixel_z", "index", z, vec![pixel_dim]));
        }

        self.type_name = format!("{SPARSE_PREFIX}{}", self.type_name);
        Ok(())
    }

    /// Undo [`Self::sparse_encode`] without expanding to dense: delete the sparse arrays and
    /// pixel dimension, restore the original primary (§4.2, postWrite/unsparseRestore).
    pub fn unsparse_restore(&mut self) -> Result<()> {
        if !self.is_sparse() {
            return Ok(());
        }
        self.nodes.remove(PRIMARY);
        self.nodes.remove("pixel_count");
        self.nodes.remove("pixel_x");
        self.nodes.remove("pixel_y");
        self.nodes.remove("pixel_z");
        self.change_name(DISABLED_PRIMARY, PRIMARY);
        if let Some(primary) = self.nodes.get_mut(PRIMARY) {
            primary.set_hidden(false);
        }
        self.drop_pixel_dimension();
        if let Some(stripped) = self.type_name.strip_prefix(SPARSE_PREFIX) {
            self.type_name = stripped.to_string();
        }
        Ok(())
    }

    /// Expand the sparse form into a dense primary array (§4.2, postRead unsparse).
    pub fn unsparse(&mut self, x_size: usize, y_size: usize, z_size: Option<usize>) -> Result<()> {
        if !self.is_sparse() {
            return Ok(());
        }
        let background = self
            .require(PRIMARY)?
            .attributes()
            .get("BackgroundValue")
            .and_then(|v| v.as_f64())
            .unwrap_or(MISSING_DATA);

        let shape: Vec<usize> = match z_size {
            Some(z) => vec![z, x_size, y_size],
            None => vec![x_size, y_size],
        };
        let capacity: usize = shape.iter().product();

        let pixel_value = self.require(PRIMARY)?.data().clone();
        let pixel_count = self.require("pixel_count")?.data().clone();
        let pixel_x = self.require("pixel_x")?.data().clone();
        let pixel_y = self.require("pixel_y")?.data().clone();
        let pixel_z = self.get("pixel_z").map(|a| a.data().clone());

        let num_pixels = pixel_value.len();
        if num_pixels > capacity {
            return Err(Error::CorruptSparseData { num_pixels, capacity });
        }

        let mut dense = ArrayData::zeros(ElementType::Float, shape.clone());
        dense.fill(background);

        for i in 0..num_pixels {
            let value = pixel_value.as_f64(i);
            let count = pixel_count.as_f64(i) as usize;
            let x0 = pixel_x.as_f64(i) as usize;
            let y0 = pixel_y.as_f64(i) as usize;
            let z0 = pixel_z.as_ref().map(|z| z.as_f64(i) as usize).unwrap_or(0);
            let mut coords = if z_size.is_some() { vec![z0, x0, y0] } else { vec![x0, y0] };
            for _ in 0..count {
                let flat = flat_index(&coords, &shape);
                dense.set_f64(flat, value);
                advance_scan_order(&mut coords, &shape);
            }
        }

        self.nodes.remove("pixel_count");
        self.nodes.remove("pixel_x");
        self.nodes.remove("pixel_y");
        self.nodes.remove("pixel_z");
        self.nodes.remove(PRIMARY);

        let dim_indexes: Vec<usize> = (0..shape.len()).collect();
        self.nodes.insert(PRIMARY.to_string(), DataArray::new(PRIMARY, "dimensionless", dense, dim_indexes));
        self.drop_pixel_dimension();
        if let Some(stripped) = self.type_name.strip_prefix(SPARSE_PREFIX) {
            self.type_name = stripped.to_string();
        }
        Ok(())
    }

    fn drop_pixel_dimension(&mut self) {
        if let Some(pos) = self.dims.iter().position(|d| d.name == PIXEL_DIM) {
            self.dims.remove(pos);
        }
    }
}

fn scan_order_values(data: &ArrayData, shape: &[usize]) -> Vec<f32> {
    let total: usize = shape.iter().product();
    let mut out = Vec::with_capacity(total);
    let mut coords = vec![0usize; shape.len()];
    for _ in 0..total {
        out.push(data.as_f64(flat_index(&coords, shape)) as f32);
        advance_scan_order(&mut coords, shape);
    }
    out
}

fn scan_order_coords(ordinal: usize, shape: &[usize]) -> Vec<i32> {
    let mut coords = vec![0usize; shape.len()];
    let mut remaining = ordinal;
    for axis in (0..shape.len()).rev() {
        coords[axis] = remaining % shape[axis];
        remaining /= shape[axis];
    }
    coords.into_iter().map(|c| c as i32).collect()
}

/// Row-major flat index: last axis varies fastest (inner), matching §4.2's scan order
/// (y innermost for 2-D; y innermost, x middle, z outer for 3-D).
fn flat_index(coords: &[usize], shape: &[usize]) -> usize {
    let mut idx = 0;
    for axis in 0..shape.len() {
        idx = idx * shape[axis] + coords[axis];
    }
    idx
}

fn advance_scan_order(coords: &mut [usize], shape: &[usize]) {
    for axis in (0..shape.len()).rev() {
        coords[axis] += 1;
        if coords[axis] < shape[axis] {
            return;
        }
        coords[axis] = 0;
    }
}
