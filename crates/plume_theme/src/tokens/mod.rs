//! Design tokens for theming
//!
//! Only colors are tokenized; input geometry is fixed by the components.

mod color;

pub use color::*;
