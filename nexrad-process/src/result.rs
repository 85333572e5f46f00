//!
//! Contains the Result and Error types for polar algorithm processing.
//!

use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("data model error")]
    ModelError(#[from] nexrad_model::datatype::Error),
}
