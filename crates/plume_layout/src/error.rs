//! Layout error types

use thiserror::Error;

/// Invalid mask configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    #[error("mask pattern is empty")]
    EmptyPattern,

    #[error("mask pattern {0:?} has no input slots")]
    NoSlots(String),

    #[error("money precision {precision} exceeds the maximum of {max}")]
    PrecisionTooLarge { precision: u32, max: u32 },

    #[error("money separator and delimiter are both {0:?}")]
    AmbiguousSeparators(char),
}

/// Result type for mask operations
pub type Result<T> = std::result::Result<T, MaskError>;
