//! Plume Layout
//!
//! The element tree input components render into, and the seam between
//! components and the platform's native text fields.
//!
//! - [`Element`]: views, text, icons, spinners, pressables and text entries
//! - [`Style`]: mergeable visual properties with a transform list
//! - [`EntryBinding`]: a mounted native field, plain or behind a mask wrapper
//! - [`MaskSpec`]: input mask types and their formatting

pub mod element;
pub mod error;
pub mod mask;
pub mod style;
pub mod text_entry;

pub use element::{Element, ElementKind, LayoutHandler, PressHandler};
pub use error::{MaskError, Result};
pub use mask::{MaskSpec, MoneyOptions, PhoneFormat, MAX_MONEY_PRECISION};
pub use style::{Style, Transform, Transforms};
pub use text_entry::{
    AutoCapitalize, ChangeHandler, ClearButtonMode, EntryBinding, EntryHandlers, EntryProps,
    EventHandler, KeyboardType, MaskedTextEntry, NativeTextEntry, TextEntryElement,
};
