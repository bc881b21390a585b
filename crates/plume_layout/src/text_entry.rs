//! Native text-entry bindings
//!
//! Components never own the platform text field. The host mounts one for each
//! [`TextEntryElement`] and hands back an [`EntryBinding`], either the plain
//! native field or a masked wrapper around one. Both variants expose the same
//! capability set so components can focus or blur whichever is mounted.

use std::fmt;
use std::sync::Arc;

use plume_core::{Color, Event};

use crate::mask::MaskSpec;

/// Platform text field handle
pub trait NativeTextEntry: Send + Sync {
    fn focus(&self);
    fn blur(&self);
    fn clear(&self);
    fn value(&self) -> String;
    fn is_focused(&self) -> bool;
}

/// Masked text field wrapper
///
/// The wrapper holds the native field one level removed; [`element`] hands it
/// out once mounted.
///
/// [`element`]: MaskedTextEntry::element
pub trait MaskedTextEntry: Send + Sync {
    /// The wrapped native field, if mounted
    fn element(&self) -> Option<Arc<dyn NativeTextEntry>>;

    /// Current value with mask literals removed
    fn raw_value(&self) -> String;
}

/// A mounted text field, plain or masked
#[derive(Clone)]
pub enum EntryBinding {
    Plain(Arc<dyn NativeTextEntry>),
    Masked(Arc<dyn MaskedTextEntry>),
}

impl EntryBinding {
    /// The native field behind this binding
    pub fn resolve(&self) -> Option<Arc<dyn NativeTextEntry>> {
        match self {
            EntryBinding::Plain(entry) => Some(entry.clone()),
            EntryBinding::Masked(masked) => masked.element(),
        }
    }

    pub fn is_masked(&self) -> bool {
        matches!(self, EntryBinding::Masked(_))
    }

    pub fn focus(&self) {
        if let Some(entry) = self.resolve() {
            entry.focus();
        }
    }

    pub fn blur(&self) {
        if let Some(entry) = self.resolve() {
            entry.blur();
        }
    }

    pub fn clear(&self) {
        if let Some(entry) = self.resolve() {
            entry.clear();
        }
    }

    /// Displayed value, empty when the masked wrapper has no element yet
    pub fn value(&self) -> String {
        self.resolve().map(|entry| entry.value()).unwrap_or_default()
    }

    pub fn is_focused(&self) -> bool {
        self.resolve().is_some_and(|entry| entry.is_focused())
    }
}

impl fmt::Debug for EntryBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryBinding::Plain(_) => f.write_str("EntryBinding::Plain"),
            EntryBinding::Masked(_) => f.write_str("EntryBinding::Masked"),
        }
    }
}

/// Focus/blur/submit handler
pub type EventHandler = Arc<dyn Fn(&Event) + Send + Sync>;

/// Text change handler
pub type ChangeHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Soft keyboard layout requested from the platform
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeyboardType {
    #[default]
    Default,
    Numeric,
    Decimal,
    Email,
    Phone,
    Url,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AutoCapitalize {
    None,
    #[default]
    Sentences,
    Words,
    Characters,
}

/// Native clear button visibility (iOS)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClearButtonMode {
    #[default]
    Never,
    WhileEditing,
    UnlessEditing,
    Always,
}

/// Base text-entry configuration passed through to the native field
#[derive(Clone)]
pub struct EntryProps {
    pub value: Option<String>,
    pub placeholder: Option<String>,
    pub multiline: bool,
    pub editable: bool,
    pub max_length: Option<usize>,
    pub secure_text_entry: bool,
    pub keyboard_type: KeyboardType,
    pub auto_capitalize: AutoCapitalize,
    pub on_change_text: Option<ChangeHandler>,
    pub on_submit_editing: Option<EventHandler>,
}

impl EntryProps {
    /// Whether a non-empty value is present
    pub fn has_value(&self) -> bool {
        self.value.as_deref().is_some_and(|value| !value.is_empty())
    }

    /// Whether a non-empty placeholder is configured
    pub fn has_placeholder(&self) -> bool {
        self.placeholder
            .as_deref()
            .is_some_and(|placeholder| !placeholder.is_empty())
    }
}

impl Default for EntryProps {
    fn default() -> Self {
        Self {
            value: None,
            placeholder: None,
            multiline: false,
            editable: true,
            max_length: None,
            secure_text_entry: false,
            keyboard_type: KeyboardType::default(),
            auto_capitalize: AutoCapitalize::default(),
            on_change_text: None,
            on_submit_editing: None,
        }
    }
}

impl fmt::Debug for EntryProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryProps")
            .field("value", &self.value)
            .field("placeholder", &self.placeholder)
            .field("multiline", &self.multiline)
            .field("editable", &self.editable)
            .field("max_length", &self.max_length)
            .field("secure_text_entry", &self.secure_text_entry)
            .field("keyboard_type", &self.keyboard_type)
            .field("auto_capitalize", &self.auto_capitalize)
            .field("on_change_text", &self.on_change_text.is_some())
            .field("on_submit_editing", &self.on_submit_editing.is_some())
            .finish()
    }
}

/// Description of a native text field for the host to mount
#[derive(Clone, Debug)]
pub struct TextEntryElement {
    /// Pass-through configuration, change handler already wrapped by the component
    pub props: EntryProps,
    /// Mount a masked wrapper instead of the plain field
    pub mask: Option<MaskSpec>,
    pub text_color: Color,
    pub placeholder_color: Color,
    pub underline_color: Color,
    pub blur_on_submit: bool,
    pub clear_button_mode: ClearButtonMode,
    pub handlers: EntryHandlers,
}

impl TextEntryElement {
    pub fn new(props: EntryProps) -> Self {
        Self {
            props,
            mask: None,
            text_color: Color::BLACK,
            placeholder_color: Color::BLACK,
            underline_color: Color::TRANSPARENT,
            blur_on_submit: true,
            clear_button_mode: ClearButtonMode::Never,
            handlers: EntryHandlers::default(),
        }
    }

    pub fn is_masked(&self) -> bool {
        self.mask.is_some()
    }

    /// Deliver a native focus event
    pub fn dispatch_focus(&self, event: &Event) {
        if let Some(handler) = &self.handlers.on_focus {
            handler(event);
        }
    }

    /// Deliver a native blur event
    pub fn dispatch_blur(&self, event: &Event) {
        if let Some(handler) = &self.handlers.on_blur {
            handler(event);
        }
    }

    /// Deliver typed text
    pub fn dispatch_change_text(&self, text: &str) {
        if let Some(handler) = &self.props.on_change_text {
            handler(text);
        }
    }

    /// Deliver a mounted binding back to the owning component
    pub fn dispatch_bind(&self, binding: EntryBinding) {
        if let Some(handler) = &self.handlers.on_bind {
            handler(binding);
        }
    }
}

/// Callbacks the host invokes on the mounted field
#[derive(Clone, Default)]
pub struct EntryHandlers {
    pub on_focus: Option<EventHandler>,
    pub on_blur: Option<EventHandler>,
    /// Called once the native field (or masked wrapper) is mounted
    pub on_bind: Option<Arc<dyn Fn(EntryBinding) + Send + Sync>>,
}

impl fmt::Debug for EntryHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryHandlers")
            .field("on_focus", &self.on_focus.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .field("on_bind", &self.on_bind.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Default)]
    struct Field {
        focused: AtomicBool,
    }

    impl NativeTextEntry for Field {
        fn focus(&self) {
            self.focused.store(true, Ordering::SeqCst);
        }
        fn blur(&self) {
            self.focused.store(false, Ordering::SeqCst);
        }
        fn clear(&self) {}
        fn value(&self) -> String {
            "abc".to_string()
        }
        fn is_focused(&self) -> bool {
            self.focused.load(Ordering::SeqCst)
        }
    }

    struct Wrapper(Option<Arc<dyn NativeTextEntry>>);

    impl MaskedTextEntry for Wrapper {
        fn element(&self) -> Option<Arc<dyn NativeTextEntry>> {
            self.0.clone()
        }
        fn raw_value(&self) -> String {
            String::new()
        }
    }

    #[test]
    fn test_masked_binding_resolves_inner_element() {
        let field = Arc::new(Field::default());
        let binding = EntryBinding::Masked(Arc::new(Wrapper(Some(field.clone()))));

        binding.focus();
        assert!(field.is_focused());
        assert!(binding.is_focused());
        assert_eq!(binding.value(), "abc");

        binding.blur();
        assert!(!field.is_focused());
    }

    #[test]
    fn test_unmounted_masked_binding_is_inert() {
        let binding = EntryBinding::Masked(Arc::new(Wrapper(None)));
        assert!(binding.resolve().is_none());
        binding.focus();
        assert!(!binding.is_focused());
        assert_eq!(binding.value(), "");
    }

    #[test]
    fn test_value_presence() {
        let mut props = EntryProps::default();
        assert!(!props.has_value());
        props.value = Some(String::new());
        assert!(!props.has_value());
        props.value = Some("x".into());
        assert!(props.has_value());
        assert!(props.editable);
    }
}
