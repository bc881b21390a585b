//! Plume Component Library
//!
//! Themed text inputs for mobile apps, rendered into `plume_layout` element
//! trees:
//!
//! - [`text_input()`]: classic bordered field with a focus-animated border,
//!   leading icon, helper and error text
//! - [`material_input()`]: field with a floating label, start adornment,
//!   loading spinner and optional input sanitization
//!
//! Both support input masks, forward the mounted native field through a
//! [`FieldRef`], and blur themselves when the soft keyboard is dismissed.
//!
//! # Driving an input
//!
//! The host renders the tree, mounts native views for it and routes events
//! back. Animations advance only when ticked.
//!
//! ```rust
//! use plume_cn::prelude::*;
//!
//! let notifier = KeyboardNotifier::new();
//! let mut input = text_input()
//!     .placeholder("Search")
//!     .keyboard_notifier(notifier.clone())
//!     .build();
//! input.mount();
//!
//! let tree = input.render();
//! let entry = tree.find_text_entry().unwrap();
//! entry.dispatch_focus(&Event::focus(0));
//! while input.tick(16.0) {}
//! assert!(input.is_focused());
//!
//! notifier.emit(KeyboardEvent::DidHide);
//! assert!(!input.is_focused());
//! ```

pub mod components;

pub use components::*;

/// Everything needed to build and drive inputs
pub mod prelude {
    pub use crate::components::{
        capitalize_first, keys, material_input, sanitize, text_input, FieldMessage, FieldRef,
        LabelGeometry, MaterialInput, MaterialInputBuilder, TextInput, TextInputBuilder,
    };
    pub use plume_core::{Event, KeyboardEvent, KeyboardNotifier, Size};
    pub use plume_layout::{
        Element, ElementKind, EntryBinding, MaskSpec, MaskedTextEntry, NativeTextEntry, Style,
    };
    pub use plume_theme::{ColorToken, ThemeState};
}
