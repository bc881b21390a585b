//! Pieces shared by the input components

use std::sync::OnceLock;

use plume_core::{Color, KeyboardEvent, KeyboardNotifier, KeyboardSubscription};
use plume_layout::{Element, Style};
use regex::Regex;

/// Lookup keys of the elements components render
pub mod keys {
    /// The native text entry
    pub const INPUT: &str = "input";
    /// Floating label (material)
    pub const LABEL: &str = "label";
    /// Leading adornment wrapper (material)
    pub const START_ADORNMENT: &str = "start_adornment";
    /// Leading icon container (classic)
    pub const START_ICON: &str = "start_icon";
    /// Spinner or end component
    pub const TRAILING: &str = "trailing";
    pub const ERROR: &str = "error";
    pub const HELPER: &str = "helper";
}

/// Text or rich content shown by a field (error, helper, adornment)
#[derive(Clone, Debug)]
pub enum FieldMessage {
    Text(String),
    Element(Element),
}

impl FieldMessage {
    pub fn is_text(&self) -> bool {
        matches!(self, FieldMessage::Text(_))
    }

    /// Render as an error: strings get their first letter upper-cased
    pub(crate) fn render_error(&self, color: Color) -> Element {
        match self {
            FieldMessage::Text(text) => {
                Element::text(capitalize_first(text)).style(Style::new().text_color(color))
            }
            FieldMessage::Element(element) => element.clone(),
        }
    }

    /// Render unchanged, coloring plain text when a color is given
    pub(crate) fn render(&self, color: Option<Color>) -> Element {
        match self {
            FieldMessage::Text(text) => {
                let mut style = Style::new();
                style.text_color = color;
                Element::text(text.clone()).style(style)
            }
            FieldMessage::Element(element) => element.clone(),
        }
    }
}

impl From<&str> for FieldMessage {
    fn from(text: &str) -> Self {
        FieldMessage::Text(text.to_string())
    }
}

impl From<String> for FieldMessage {
    fn from(text: String) -> Self {
        FieldMessage::Text(text)
    }
}

impl From<Element> for FieldMessage {
    fn from(element: Element) -> Self {
        FieldMessage::Element(element)
    }
}

/// Upper-case the first character, leaving the rest as typed
///
/// ```rust
/// use plume_cn::capitalize_first;
///
/// assert_eq!(capitalize_first("required field"), "Required field");
/// assert_eq!(capitalize_first("iPhone"), "IPhone");
/// ```
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn markup_tag() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^<>\s]*>|[<>]").expect("Invalid regex pattern"))
}

fn whitespace_run() -> &'static Regex {
    static RUN: OnceLock<Regex> = OnceLock::new();
    RUN.get_or_init(|| Regex::new(r"\s\s+").expect("Invalid regex pattern"))
}

/// Clean typed text: strip angle-bracket markup, then leading whitespace,
/// then collapse whitespace runs to one space
///
/// Only tag-like tokens without inner whitespace are dropped whole; any other
/// `<` or `>` loses just the bracket.
///
/// Trailing whitespace is kept so the user can keep typing after a space.
///
/// ```rust
/// use plume_cn::sanitize;
///
/// assert_eq!(sanitize("  hello   <script>world"), "hello world");
/// assert_eq!(sanitize("hello "), "hello ");
/// ```
pub fn sanitize(text: &str) -> String {
    let stripped = markup_tag().replace_all(text, "");
    whitespace_run()
        .replace_all(stripped.trim_start(), " ")
        .into_owned()
}

/// Keyboard-hide listener owned by a mounted field
pub(crate) struct KeyboardDismiss {
    notifier: KeyboardNotifier,
    subscription: Option<KeyboardSubscription>,
}

impl KeyboardDismiss {
    pub(crate) fn new(notifier: KeyboardNotifier) -> Self {
        Self {
            notifier,
            subscription: None,
        }
    }

    /// Install the listener when `enabled`, remove it otherwise
    pub(crate) fn sync<F>(&mut self, enabled: bool, on_hide: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        if !enabled {
            self.release();
            return;
        }
        if self.subscription.is_some() {
            return;
        }
        tracing::debug!("installing keyboard-hide listener");
        self.subscription = Some(
            self.notifier
                .add_listener(KeyboardEvent::DidHide, move |_| on_hide()),
        );
    }

    pub(crate) fn release(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            tracing::debug!("removing keyboard-hide listener");
            subscription.remove();
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(KeyboardSubscription::is_active)
    }
}

/// Setters for the pass-through text-entry props of a builder whose config
/// has an `entry: EntryProps` field
macro_rules! entry_setters {
    ($builder:ty) => {
        impl $builder {
            /// Current text. Inputs are controlled: feed changes back here.
            pub fn value(mut self, value: impl Into<String>) -> Self {
                self.config.entry.value = Some(value.into());
                self
            }

            pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
                self.config.entry.placeholder = Some(placeholder.into());
                self
            }

            pub fn multiline(mut self) -> Self {
                self.config.entry.multiline = true;
                self
            }

            pub fn editable(mut self, editable: bool) -> Self {
                self.config.entry.editable = editable;
                self
            }

            pub fn max_length(mut self, max_length: usize) -> Self {
                self.config.entry.max_length = Some(max_length);
                self
            }

            pub fn secure_text_entry(mut self) -> Self {
                self.config.entry.secure_text_entry = true;
                self
            }

            pub fn keyboard_type(mut self, keyboard_type: plume_layout::KeyboardType) -> Self {
                self.config.entry.keyboard_type = keyboard_type;
                self
            }

            pub fn auto_capitalize(mut self, auto_capitalize: plume_layout::AutoCapitalize) -> Self {
                self.config.entry.auto_capitalize = auto_capitalize;
                self
            }

            pub fn on_change_text<F>(mut self, handler: F) -> Self
            where
                F: Fn(&str) + Send + Sync + 'static,
            {
                self.config.entry.on_change_text = Some(std::sync::Arc::new(handler));
                self
            }

            pub fn on_submit_editing<F>(mut self, handler: F) -> Self
            where
                F: Fn(&plume_core::Event) + Send + Sync + 'static,
            {
                self.config.entry.on_submit_editing = Some(std::sync::Arc::new(handler));
                self
            }

            pub fn on_focus<F>(mut self, handler: F) -> Self
            where
                F: Fn(&plume_core::Event) + Send + Sync + 'static,
            {
                self.config.on_focus = Some(std::sync::Arc::new(handler));
                self
            }

            pub fn on_blur<F>(mut self, handler: F) -> Self
            where
                F: Fn(&plume_core::Event) + Send + Sync + 'static,
            {
                self.config.on_blur = Some(std::sync::Arc::new(handler));
                self
            }

            /// Replace all pass-through props at once
            pub fn entry_props(mut self, props: plume_layout::EntryProps) -> Self {
                self.config.entry = props;
                self
            }

            pub fn error(mut self, error: impl Into<$crate::components::shared::FieldMessage>) -> Self {
                self.config.error = Some(error.into());
                self
            }

            /// Input mask; the host mounts a masked field
            pub fn mask(mut self, mask: plume_layout::MaskSpec) -> Self {
                self.config.mask = Some(mask);
                self
            }

            /// Blur when the soft keyboard is dismissed (on by default)
            pub fn hide_keyboard_on_blur(mut self, hide: bool) -> Self {
                self.config.hide_keyboard_on_blur = hide;
                self
            }

            pub fn end_component(mut self, element: plume_layout::Element) -> Self {
                self.config.end_component = Some(element);
                self
            }

            /// Style of the text entry itself
            pub fn style(mut self, style: plume_layout::Style) -> Self {
                self.config.style = Some(style);
                self
            }

            /// Forward the mounted field to `field_ref`
            pub fn field_ref(mut self, field_ref: &$crate::components::field_ref::FieldRef) -> Self {
                self.config.field_ref = Some(field_ref.clone());
                self
            }

            /// Keyboard notifier to listen on instead of the global one
            pub fn keyboard_notifier(mut self, notifier: plume_core::KeyboardNotifier) -> Self {
                self.config.notifier = Some(notifier);
                self
            }

            pub fn when(self, condition: bool, transform: impl FnOnce(Self) -> Self) -> Self {
                if condition {
                    transform(self)
                } else {
                    self
                }
            }
        }
    };
}

pub(crate) use entry_setters;

/// Lock a mutex, recovering the data if a panicking handler poisoned it
pub(crate) fn lock<T>(mutex: &std::sync::Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}
