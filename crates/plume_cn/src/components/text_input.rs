//! Classic text input - bordered field whose border color follows focus.
//!
//! ```rust
//! use plume_cn::prelude::*;
//!
//! let input = text_input()
//!     .placeholder("Email")
//!     .start_icon("mail")
//!     .error("required field")
//!     .keyboard_notifier(KeyboardNotifier::new())
//!     .build();
//!
//! let tree = input.render();
//! let error = tree.find_by_key(keys::ERROR).and_then(Element::find_text);
//! assert_eq!(error, Some("Required field"));
//! ```

use std::sync::{Arc, Mutex};

use plume_animation::{Extrapolate, Interpolation, SharedTween, Timing, Tween};
use plume_core::{
    event_types, Color, Event, EventType, FieldState, KeyboardNotifier, StateTransitions,
};
use plume_layout::{
    ClearButtonMode, Element, EntryBinding, EntryHandlers, EntryProps, EventHandler, MaskSpec,
    PressHandler, Style, TextEntryElement,
};
use plume_theme::{ColorToken, ThemeState};

use super::field_ref::{bind_refs, FieldRef};
use super::shared::{entry_setters, keys, lock, FieldMessage, KeyboardDismiss};

const FOCUS_DURATION_MS: f32 = 300.0;
const ICON_SIZE: f32 = 20.0;

#[derive(Clone)]
pub(crate) struct TextInputConfig {
    pub(crate) entry: EntryProps,
    pub(crate) error: Option<FieldMessage>,
    pub(crate) no_margin: bool,
    pub(crate) start_icon: Option<String>,
    pub(crate) on_start_icon_press: Option<PressHandler>,
    pub(crate) helper_text: Option<FieldMessage>,
    pub(crate) end_component: Option<Element>,
    pub(crate) compact: bool,
    pub(crate) mask: Option<MaskSpec>,
    pub(crate) hide_keyboard_on_blur: bool,
    pub(crate) text_wrapper_style: Option<Style>,
    pub(crate) style: Option<Style>,
    pub(crate) on_focus: Option<EventHandler>,
    pub(crate) on_blur: Option<EventHandler>,
    pub(crate) field_ref: Option<FieldRef>,
    pub(crate) notifier: Option<KeyboardNotifier>,
}

impl Default for TextInputConfig {
    fn default() -> Self {
        Self {
            entry: EntryProps::default(),
            error: None,
            no_margin: false,
            start_icon: None,
            on_start_icon_press: None,
            helper_text: None,
            end_component: None,
            compact: false,
            mask: None,
            hide_keyboard_on_blur: true,
            text_wrapper_style: None,
            style: None,
            on_focus: None,
            on_blur: None,
            field_ref: None,
            notifier: None,
        }
    }
}

/// Focus state plus everything the entry and keyboard callbacks touch
#[derive(Clone)]
struct FocusDriver {
    state: Arc<Mutex<FieldState>>,
    focus: SharedTween,
    local_ref: FieldRef,
    on_focus: Option<EventHandler>,
    on_blur: Option<EventHandler>,
}

impl FocusDriver {
    /// Apply `event` to the focus state; the border animation follows.
    fn transition(&self, event: EventType) -> bool {
        let next = {
            let mut state = lock(&self.state);
            match state.on_event(event) {
                Some(next) => {
                    *state = next;
                    next
                }
                None => return false,
            }
        };

        tracing::debug!(?next, event, "text input focus transition");
        let target = if next.is_focused() { 1.0 } else { 0.0 };
        lock(&self.focus).animate_to(target, Timing::new(FOCUS_DURATION_MS));
        true
    }

    fn focus(&self, event: &Event) {
        self.transition(event_types::FOCUS);
        if let Some(handler) = &self.on_focus {
            handler(event);
        }
    }

    fn blur(&self, event: &Event) {
        self.transition(event_types::BLUR);
        if let Some(handler) = &self.on_blur {
            handler(event);
        }
    }

    fn keyboard_hidden(&self) {
        self.transition(event_types::KEYBOARD_DID_HIDE);
        self.local_ref.blur();
    }
}

/// Mounted classic text input
pub struct TextInput {
    config: TextInputConfig,
    driver: FocusDriver,
    keyboard: KeyboardDismiss,
    mounted: bool,
}

impl TextInput {
    fn with_config(config: TextInputConfig) -> Self {
        let notifier = config
            .notifier
            .clone()
            .unwrap_or_else(|| KeyboardNotifier::global().clone());
        let driver = FocusDriver {
            state: Arc::default(),
            focus: Tween::shared(0.0),
            local_ref: FieldRef::new(),
            on_focus: config.on_focus.clone(),
            on_blur: config.on_blur.clone(),
        };

        Self {
            config,
            driver,
            keyboard: KeyboardDismiss::new(notifier),
            mounted: false,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Start listening for keyboard dismissal
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        if let Some(mask) = &self.config.mask {
            if let Err(err) = mask.validate() {
                tracing::warn!(%err, mask = mask.type_name(), "invalid mask options");
            }
        }
        self.mounted = true;
        self.sync_keyboard();
    }

    /// Release the keyboard listener and drop focus
    pub fn unmount(&mut self) {
        self.keyboard.release();
        self.driver.transition(event_types::UNMOUNT);
        self.driver.local_ref.unbind();
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn set_hide_keyboard_on_blur(&mut self, hide: bool) {
        self.config.hide_keyboard_on_blur = hide;
        if self.mounted {
            self.sync_keyboard();
        }
    }

    /// Whether a keyboard-hide listener is installed
    pub fn is_listening_for_keyboard(&self) -> bool {
        self.keyboard.is_active()
    }

    fn sync_keyboard(&mut self) {
        let driver = self.driver.clone();
        self.keyboard
            .sync(self.config.hide_keyboard_on_blur, move || driver.keyboard_hidden());
    }

    // =========================================================================
    // Host events
    // =========================================================================

    pub fn handle_focus(&self, event: &Event) {
        self.driver.focus(event);
    }

    pub fn handle_blur(&self, event: &Event) {
        self.driver.blur(event);
    }

    /// The host mounted the native field (or its mask wrapper)
    pub fn bind_entry(&self, binding: EntryBinding) {
        bind_refs(&self.driver.local_ref, self.config.field_ref.as_ref(), binding);
    }

    /// Advance the border animation. Returns true while animating.
    pub fn tick(&self, dt_ms: f32) -> bool {
        lock(&self.driver.focus).tick(dt_ms)
    }

    // =========================================================================
    // Props
    // =========================================================================

    pub fn set_value(&mut self, value: Option<String>) {
        self.config.entry.value = value;
    }

    pub fn set_error(&mut self, error: Option<FieldMessage>) {
        self.config.error = error;
    }

    pub fn set_helper_text(&mut self, helper_text: Option<FieldMessage>) {
        self.config.helper_text = helper_text;
    }

    // =========================================================================
    // State
    // =========================================================================

    /// The component's own reference to the mounted field
    pub fn field_ref(&self) -> &FieldRef {
        &self.driver.local_ref
    }

    pub fn is_focused(&self) -> bool {
        lock(&self.driver.state).is_focused()
    }

    /// Focus animation value in `[0, 1]`
    pub fn focus_value(&self) -> f32 {
        lock(&self.driver.focus).value()
    }

    /// Handle for registering with an [`AnimationScheduler`]
    ///
    /// [`AnimationScheduler`]: plume_animation::AnimationScheduler
    pub fn focus_tween(&self) -> SharedTween {
        self.driver.focus.clone()
    }

    /// Current border color. Masked fields keep the resting color.
    pub fn border_color(&self) -> Color {
        let theme = ThemeState::get_or_default();
        let rest = theme.color(ColorToken::Grey400);
        if self.config.mask.is_some() {
            return rest;
        }
        Interpolation::linear(rest, theme.color(ColorToken::Grey600))
            .extrapolate(Extrapolate::Clamp)
            .at(self.focus_value())
    }

    // =========================================================================
    // Render
    // =========================================================================

    fn entry_handlers(&self) -> EntryHandlers {
        let on_focus = self.driver.clone();
        let on_blur = self.driver.clone();
        let local = self.driver.local_ref.clone();
        let forwarded = self.config.field_ref.clone();

        EntryHandlers {
            on_focus: Some(Arc::new(move |event: &Event| on_focus.focus(event))),
            on_blur: Some(Arc::new(move |event: &Event| on_blur.blur(event))),
            on_bind: Some(Arc::new(move |binding: EntryBinding| {
                bind_refs(&local, forwarded.as_ref(), binding)
            })),
        }
    }

    pub fn render(&self) -> Element {
        let theme = ThemeState::get_or_default();
        let config = &self.config;
        let text_primary = theme.color(ColorToken::TextPrimary);

        let mut entry = TextEntryElement::new(config.entry.clone());
        entry.mask = config.mask.clone();
        entry.text_color = text_primary;
        entry.placeholder_color = theme.color(ColorToken::TextSecondary);
        entry.underline_color = Color::TRANSPARENT;
        entry.blur_on_submit = true;
        entry.clear_button_mode = ClearButtonMode::Never;
        entry.handlers = self.entry_handlers();

        let input_style = Style::new()
            .text_color(text_primary)
            .border_color(self.border_color())
            .merged(config.style.as_ref());

        let input = Element::text_entry(entry)
            .key(keys::INPUT)
            .role("input")
            .role_if(config.compact, "compact")
            .role_if(config.start_icon.is_some(), "inputWithIcon")
            .role_if(config.end_component.is_some(), "inputWithEnd")
            .role_if(config.entry.multiline, "multiline")
            .style(input_style);

        let input_wrapper = Element::view()
            .role("inputWrapper")
            .child(input)
            .child_opt(config.end_component.clone());

        let start_icon = config.start_icon.as_ref().map(|name| {
            let mut container = match &config.on_start_icon_press {
                Some(_) => Element::pressable(),
                None => Element::view(),
            };
            container.on_press = config.on_start_icon_press.clone();
            container
                .key(keys::START_ICON)
                .role("icon")
                .child(Element::icon(name.clone(), ICON_SIZE, text_primary))
        });

        let error = config.error.as_ref().map(|error| {
            Element::view()
                .key(keys::ERROR)
                .role("error")
                .child(error.render_error(theme.color(ColorToken::ErrorMain)))
        });

        let helper = config.helper_text.as_ref().map(|helper| {
            Element::view()
                .key(keys::HELPER)
                .role("helper")
                .child(helper.render(Some(theme.color(ColorToken::TextSecondary))))
        });

        Element::view()
            .role("wrapper")
            .role_if(!config.no_margin, "marginBottom")
            .style(Style::new().merged(config.text_wrapper_style.as_ref()))
            .child(input_wrapper)
            .child_opt(start_icon)
            .child_opt(error)
            .child_opt(helper)
    }
}

impl From<&TextInput> for Element {
    fn from(input: &TextInput) -> Self {
        input.render()
    }
}

/// Builder for [`TextInput`]
pub struct TextInputBuilder {
    pub(crate) config: TextInputConfig,
}

impl TextInputBuilder {
    pub fn new() -> Self {
        Self {
            config: TextInputConfig::default(),
        }
    }

    /// Drop the wrapper's bottom margin
    pub fn no_margin(mut self) -> Self {
        self.config.no_margin = true;
        self
    }

    /// Leading icon by name
    pub fn start_icon(mut self, name: impl Into<String>) -> Self {
        self.config.start_icon = Some(name.into());
        self
    }

    /// Make the leading icon tappable
    pub fn on_start_icon_press<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.config.on_start_icon_press = Some(Arc::new(handler));
        self
    }

    pub fn helper_text(mut self, helper_text: impl Into<FieldMessage>) -> Self {
        self.config.helper_text = Some(helper_text.into());
        self
    }

    pub fn compact(mut self) -> Self {
        self.config.compact = true;
        self
    }

    pub fn text_wrapper_style(mut self, style: Style) -> Self {
        self.config.text_wrapper_style = Some(style);
        self
    }

    pub fn build(self) -> TextInput {
        TextInput::with_config(self.config)
    }
}

entry_setters!(TextInputBuilder);

impl Default for TextInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a classic text input
pub fn text_input() -> TextInputBuilder {
    TextInputBuilder::new()
}
