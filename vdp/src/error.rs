use thiserror::Error;

/// Everything the VDP layer can refuse to do.
///
/// None of these are fatal; the caller can retry with corrected input.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum VdpError {
    #[error("cell ({col}, {row}) is outside the text grid")]
    InvalidCoordinate { col: u16, row: u16 },

    #[error("asset is {actual} bytes, expected exactly {expected}")]
    AssetSizeMismatch { expected: usize, actual: usize },
}

pub type Result<T> = core::result::Result<T, VdpError>;
