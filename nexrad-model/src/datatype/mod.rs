//! The DataType hierarchy: multi-dimensional typed arrays, attribute carriers, geometric
//! projections, and the time-purged virtual volume collections built on top of them.
//!
//! This module is the core data model described by the project's DataGrid/RadialSet/
//! LatLonHeightGrid design: a named, dimension-table-backed collection of typed arrays with
//! sparse/dense run-length conversion, plus the polar and gridded projections and virtual-volume
//! bookkeeping built on top of it.

pub mod array;
pub mod attribute;
pub mod data_array;
pub mod data_grid;
pub mod error;
pub mod geometry;
pub mod lat_lon_height_grid;
pub mod lat_lon_height_grid_projection;
pub mod projection;
pub mod radial_set;
pub mod radial_set_iterator;
pub mod radial_set_projection;
pub mod time;
pub mod volume;

pub use array::{is_good, ArrayData, ElementType, DATA_UNAVAILABLE, MISSING_DATA, RANGE_FOLDED};
pub use attribute::{AttributeValue, Attributes};
pub use data_array::DataArray;
pub use data_grid::{DataGrid, DimensionEntry};
pub use error::{Error, Result};
pub use geometry::{attenuation_height_km, destination_point, great_circle_bearing_distance, Ijk, Llh, Xyz};
pub use lat_lon_height_grid::LatLonHeightGrid;
pub use lat_lon_height_grid_projection::LatLonHeightGridProjection;
pub use projection::{az_range_to_lat_lon, Coverage, DataProjection};
pub use radial_set::RadialSet;
pub use radial_set_iterator::{RadialGate, RadialSetIterator};
pub use radial_set_projection::{RadialSetLookup, RadialSetProjection, RadialSetProjectionView, DEFAULT_ACCURACY};
pub use time::{Time, TimeDuration};
pub use volume::{Spread, SubtypeValue, VolumeItem, VolumeOf1, VolumeOfN};
