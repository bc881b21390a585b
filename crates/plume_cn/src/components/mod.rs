//! Input components

pub mod field_ref;
pub mod material_input;
pub mod shared;
pub mod text_input;

pub use field_ref::FieldRef;
pub use material_input::{
    material_input, LabelGeometry, MaterialInput, MaterialInputBuilder, LABEL_SCALE_RANGE,
};
pub use shared::{capitalize_first, keys, sanitize, FieldMessage};
pub use text_input::{text_input, TextInput, TextInputBuilder};
