//!
//! Contains the Result and Error types for NIDS codec operations.
//!

use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("NIDS data IO error")]
    IoError(#[from] std::io::Error),
    #[error("corrupt NIDS message: expected length {expected}, found {actual}")]
    CorruptMessageLength { expected: usize, actual: usize },
    #[error("invalid block divider {found} at offset {offset}, expected -1")]
    InvalidBlockDivider { found: i16, offset: usize },
    #[error("product code {code} is a null product and cannot be decoded")]
    NullProductUnsupported { code: i16 },
    #[error("packet code {code} (XDR/RPC compressed) is unsupported")]
    XdrPacketUnsupported { code: i16 },
    #[error("unsupported radial packet code {code}")]
    UnsupportedPacketCode { code: i16 },
    #[error("BZIP2 decompression failed: {0}")]
    Bzip2Error(String),
    #[error("unknown threshold decode method {method}")]
    ThresholdDecodeUnknown { method: i32 },
    #[error("unknown NIDS product code {code}")]
    ProductCodeUnknown { code: i16 },
}
