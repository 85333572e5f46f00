//! Error types for the DataGrid/RadialSet data model and its projections.

use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the data model, projection, and virtual volume layers.
///
/// A number of failure modes described alongside these (`DimensionIndexOutOfRange`,
/// `NameCollision`) are modeled as `Option`/`bool` returns on the operations that can
/// produce them rather than as `Error` variants, matching the "return null/false, log"
/// policy those operations document on their own methods.
#[derive(ThisError, Debug, Clone, PartialEq)]
pub enum Error {
    /// Requested a typed reference to an array not present on the grid.
    #[error("array '{0}' not present on grid")]
    ArrayRefMissing(String),

    /// `unsparse` found `num_pixels` exceeding the advertised dense shape.
    #[error("corrupt sparse data: {num_pixels} pixels exceeds dense volume {capacity}")]
    CorruptSparseData { num_pixels: usize, capacity: usize },

    /// A dimension referenced by an array does not exist on the owning grid.
    #[error("dimension index {index} out of range (grid has {dims} dimensions)")]
    DimensionIndexOutOfRange { index: usize, dims: usize },
}
