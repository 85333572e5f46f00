//! [`DataArray`]: a named, typed array node living inside a [`super::data_grid::DataGrid`].

use super::array::{ArrayData, ElementType};
use super::attribute::Attributes;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named array of data, plus the attributes and dimension bindings that describe it.
///
/// `dim_indexes` gives, for each axis of `data`, the index into the owning grid's dimension
/// list that axis corresponds to — this is what lets a 2-D `RadialSet` moment and its 1-D
/// `AzimuthDegs` auxiliary array share a `DataGrid` without collision.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DataArray {
    name: String,
    units: String,
    data: ArrayData,
    dim_indexes: Vec<usize>,
    attributes: Attributes,
}

impl DataArray {
    pub fn new(name: impl Into<String>, units: impl Into<String>, data: ArrayData, dim_indexes: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            units: units.into(),
            data,
            dim_indexes,
            attributes: Attributes::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn units(&self) -> &str {
        &self.units
    }

    pub fn set_units(&mut self, units: impl Into<String>) {
        self.units = units.into();
    }

    pub fn element_type(&self) -> ElementType {
        self.data.element_type()
    }

    pub fn dim_indexes(&self) -> &[usize] {
        &self.dim_indexes
    }

    pub fn data(&self) -> &ArrayData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut ArrayData {
        &mut self.data
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Whether this array is a backup/reference copy not meant for output (e.g. a
    /// sparse-encoded `DataGrid`'s `DisabledPrimary`), per `RAPIO_HIDDEN` convention.
    pub fn is_hidden(&self) -> bool {
        self.attributes.is_hidden()
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.attributes.set_hidden(hidden);
    }
}
