//! Material input - bordered field with a floating label.
//!
//! The label rests centered over the empty field and floats to the top-left,
//! scaled down, while the field is focused, holds a value or shows a
//! placeholder. Resting offsets depend on measured sizes, so the host reports
//! the label and input layouts back through [`MaterialInput::on_label_layout`]
//! and [`MaterialInput::on_input_layout`] (or the element layout callbacks).
//!
//! ```rust
//! use plume_cn::prelude::*;
//!
//! let input = material_input()
//!     .label("Email")
//!     .keyboard_notifier(KeyboardNotifier::new())
//!     .build();
//! input.on_label_layout(Size::new(40.0, 20.0));
//! input.on_input_layout(40.0);
//!
//! assert!(!input.is_raised());
//! input.handle_focus(&Event::focus(0));
//! assert!(input.is_raised());
//! ```

use std::sync::{Arc, Mutex};

use plume_animation::{Interpolation, SharedTween, Timing, Tween};
use plume_core::{
    event_types, Color, Event, EventType, FieldState, KeyboardNotifier, Size, StateTransitions,
};
use plume_layout::{
    ChangeHandler, Element, EntryBinding, EntryHandlers, EntryProps, EventHandler, MaskSpec,
    Style, TextEntryElement, Transform, Transforms,
};
use plume_theme::{ColorToken, ThemeState};

use super::field_ref::{bind_refs, FieldRef};
use super::shared::{entry_setters, keys, lock, sanitize, FieldMessage, KeyboardDismiss};

/// Label scale at rest and raised
pub const LABEL_SCALE_RANGE: [f32; 2] = [1.0, 0.65];

const LABEL_DURATION_MS: f32 = 300.0;
const ADORNMENT_DURATION_MS: f32 = 200.0;
const ADORNMENT_DELAY_MS: f32 = 200.0;
const ADORNMENT_SLIDE: [f32; 2] = [-10.0, 0.0];
const SPINNER_SIZE: f32 = 20.0;

/// Floating-label offsets derived from measured sizes
///
/// Every range is `[resting, raised]`. All values are zero until the label
/// and input have been measured.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelGeometry {
    /// Pulled out of the input wrapper's top margin so the raised label
    /// overlaps the border
    pub top_spacing: f32,
    pub translate_y: [f32; 2],
    pub translate_x: [f32; 2],
    pub scale: [f32; 2],
}

impl LabelGeometry {
    pub fn new(label: Size, input_height: f32) -> Self {
        let [_, raised_scale] = LABEL_SCALE_RANGE;
        let top_spacing = label.height - label.height * raised_scale * 0.9;

        let y_rest = (label.height + input_height) / 2.0 - label.height / 2.0 - top_spacing / 2.0;
        let y_raised = -(label.height - label.height * raised_scale) / 2.0;
        let x_raised = -(label.width - label.width * raised_scale) / 2.0;

        Self {
            top_spacing,
            translate_y: [y_rest, y_raised],
            translate_x: [0.0, x_raised],
            scale: LABEL_SCALE_RANGE,
        }
    }

    /// Label transform at focus animation value `t`
    pub fn transform(&self, t: f32) -> Transforms {
        let at = |[from, to]: [f32; 2]| Interpolation::linear(from, to).at(t);
        Transforms::from_iter([
            Transform::TranslateY(at(self.translate_y)),
            Transform::TranslateX(at(self.translate_x)),
            Transform::Scale(at(self.scale)),
        ])
    }
}

impl Default for LabelGeometry {
    fn default() -> Self {
        Self::new(Size::ZERO, 0.0)
    }
}

#[derive(Clone)]
pub(crate) struct MaterialInputConfig {
    pub(crate) entry: EntryProps,
    pub(crate) label: Option<String>,
    pub(crate) error: Option<FieldMessage>,
    pub(crate) background_color: Option<ColorToken>,
    pub(crate) label_color: Option<ColorToken>,
    pub(crate) start_adornment: Option<FieldMessage>,
    pub(crate) loading: bool,
    pub(crate) end_component: Option<Element>,
    pub(crate) sanitized: bool,
    pub(crate) container_style: Option<Style>,
    pub(crate) wrapper_style: Option<Style>,
    pub(crate) input_style: Option<Style>,
    pub(crate) style: Option<Style>,
    pub(crate) mask: Option<MaskSpec>,
    pub(crate) hide_keyboard_on_blur: bool,
    pub(crate) on_focus: Option<EventHandler>,
    pub(crate) on_blur: Option<EventHandler>,
    pub(crate) field_ref: Option<FieldRef>,
    pub(crate) notifier: Option<KeyboardNotifier>,
}

impl Default for MaterialInputConfig {
    fn default() -> Self {
        Self {
            entry: EntryProps::default(),
            label: None,
            error: None,
            background_color: None,
            label_color: None,
            start_adornment: None,
            loading: false,
            end_component: None,
            sanitized: false,
            container_style: None,
            wrapper_style: None,
            input_style: None,
            style: None,
            mask: None,
            hide_keyboard_on_blur: true,
            on_focus: None,
            on_blur: None,
            field_ref: None,
            notifier: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct MaterialState {
    field: FieldState,
    has_value: bool,
    has_placeholder: bool,
    label_size: Size,
    input_height: f32,
}

impl MaterialState {
    fn is_raised(&self) -> bool {
        self.field.is_focused() || self.has_value || self.has_placeholder
    }
}

/// State plus everything the entry, label and keyboard callbacks touch
#[derive(Clone)]
struct LabelDriver {
    state: Arc<Mutex<MaterialState>>,
    focus: SharedTween,
    adornment: SharedTween,
    local_ref: FieldRef,
    on_focus: Option<EventHandler>,
    on_blur: Option<EventHandler>,
}

impl LabelDriver {
    fn snapshot(&self) -> MaterialState {
        *lock(&self.state)
    }

    /// Point the label animation at the current raised condition
    ///
    /// The label transform depends on measured sizes, so it stays off the
    /// compositor.
    fn sync_label(&self) {
        let target = if self.snapshot().is_raised() { 1.0 } else { 0.0 };
        lock(&self.focus).animate_to(
            target,
            Timing::new(LABEL_DURATION_MS).composited(false),
        );
    }

    fn transition(&self, event: EventType) -> bool {
        let next = {
            let mut state = lock(&self.state);
            match state.field.on_event(event) {
                Some(next) => {
                    state.field = next;
                    next
                }
                None => return false,
            }
        };
        tracing::debug!(?next, event, "material input focus transition");
        self.sync_label();
        true
    }

    fn focus(&self, event: &Event) {
        if !self.snapshot().has_value {
            lock(&self.adornment).animate_to(
                1.0,
                Timing::new(ADORNMENT_DURATION_MS)
                    .delay(ADORNMENT_DELAY_MS)
                    .composited(true),
            );
        }
        self.transition(event_types::FOCUS);
        if let Some(handler) = &self.on_focus {
            handler(event);
        }
    }

    fn blur(&self, event: &Event) {
        if !self.snapshot().has_value {
            lock(&self.adornment).animate_to(
                0.0,
                Timing::new(ADORNMENT_DURATION_MS).composited(true),
            );
        }
        self.transition(event_types::BLUR);
        if let Some(handler) = &self.on_blur {
            handler(event);
        }
    }

    fn keyboard_hidden(&self) {
        self.transition(event_types::KEYBOARD_DID_HIDE);
        self.local_ref.blur();
    }

    fn label_measured(&self, size: Size) {
        tracing::trace!(width = size.width, height = size.height, "label measured");
        lock(&self.state).label_size = size;
    }

    fn input_measured(&self, height: f32) {
        tracing::trace!(height, "input measured");
        lock(&self.state).input_height = height;
    }
}

/// Forward typed text, sanitized if requested
fn forward_change(sanitized: bool, handler: Option<&ChangeHandler>, text: &str) {
    let Some(handler) = handler else {
        return;
    };
    if sanitized {
        handler(&sanitize(text));
    } else {
        handler(text);
    }
}

/// Mounted material input
pub struct MaterialInput {
    config: MaterialInputConfig,
    driver: LabelDriver,
    keyboard: KeyboardDismiss,
    mounted: bool,
}

impl MaterialInput {
    fn with_config(config: MaterialInputConfig) -> Self {
        let notifier = config
            .notifier
            .clone()
            .unwrap_or_else(|| KeyboardNotifier::global().clone());
        let state = MaterialState {
            has_value: config.entry.has_value(),
            has_placeholder: config.entry.has_placeholder(),
            ..MaterialState::default()
        };
        let driver = LabelDriver {
            state: Arc::new(Mutex::new(state)),
            focus: Tween::shared(0.0),
            adornment: Tween::shared(if state.has_value { 1.0 } else { 0.0 }),
            local_ref: FieldRef::new(),
            on_focus: config.on_focus.clone(),
            on_blur: config.on_blur.clone(),
        };
        driver.sync_label();

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

    /// Typed text from the native field
    pub fn handle_change_text(&self, text: &str) {
        forward_change(
            self.config.sanitized,
            self.config.entry.on_change_text.as_ref(),
            text,
        );
    }

    /// Tapping the label focuses the field
    pub fn press_label(&self) {
        self.driver.local_ref.focus();
    }

    pub fn on_label_layout(&self, size: Size) {
        self.driver.label_measured(size);
    }

    pub fn on_input_layout(&self, height: f32) {
        self.driver.input_measured(height);
    }

    /// The host mounted the native field (or its mask wrapper)
    pub fn bind_entry(&self, binding: EntryBinding) {
        bind_refs(&self.driver.local_ref, self.config.field_ref.as_ref(), binding);
    }

    /// Advance label and adornment animations. Returns true while animating.
    pub fn tick(&self, dt_ms: f32) -> bool {
        let label = lock(&self.driver.focus).tick(dt_ms);
        let adornment = lock(&self.driver.adornment).tick(dt_ms);
        label || adornment
    }

    // =========================================================================
    // Props
    // =========================================================================

    pub fn set_value(&mut self, value: Option<String>) {
        self.config.entry.value = value;
        lock(&self.driver.state).has_value = self.config.entry.has_value();
        self.driver.sync_label();
    }

    pub fn set_placeholder(&mut self, placeholder: Option<String>) {
        self.config.entry.placeholder = placeholder;
        lock(&self.driver.state).has_placeholder = self.config.entry.has_placeholder();
        self.driver.sync_label();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.config.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<FieldMessage>) {
        self.config.error = error;
    }

    // =========================================================================
    // State
    // =========================================================================

    pub fn field_ref(&self) -> &FieldRef {
        &self.driver.local_ref
    }

    pub fn is_focused(&self) -> bool {
        self.driver.snapshot().field.is_focused()
    }

    /// Focused, holding a value, or showing a placeholder
    pub fn is_raised(&self) -> bool {
        self.driver.snapshot().is_raised()
    }

    /// Label animation value in `[0, 1]`
    pub fn focus_value(&self) -> f32 {
        lock(&self.driver.focus).value()
    }

    /// Adornment animation value in `[0, 1]`
    pub fn adornment_value(&self) -> f32 {
        lock(&self.driver.adornment).value()
    }

    pub fn focus_tween(&self) -> SharedTween {
        self.driver.focus.clone()
    }

    pub fn adornment_tween(&self) -> SharedTween {
        self.driver.adornment.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.config.loading
    }

    pub fn geometry(&self) -> LabelGeometry {
        let state = self.driver.snapshot();
        LabelGeometry::new(state.label_size, state.input_height)
    }

    /// Label color for the current raised condition
    pub fn label_color(&self) -> Color {
        let theme = ThemeState::get_or_default();
        if self.is_raised() {
            theme.color(self.config.label_color.unwrap_or(ColorToken::TextPrimary))
        } else {
            theme.color(ColorToken::Grey200)
        }
    }

    pub fn border_color(&self) -> Color {
        let theme = ThemeState::get_or_default();
        if self.config.error.is_some() {
            theme.color(ColorToken::ErrorMain)
        } else {
            theme.color(ColorToken::Grey300)
        }
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

    fn render_label(&self, label: &str, geometry: &LabelGeometry) -> Element {
        let press = self.driver.local_ref.clone();
        let measure = self.driver.clone();

        Element::text(label)
            .key(keys::LABEL)
            .role("label")
            .number_of_lines(1)
            .style(
                Style::new()
                    .text_color(self.label_color())
                    .transform(geometry.transform(self.focus_value())),
            )
            .on_press(move || press.focus())
            .on_layout(move |size| measure.label_measured(size))
    }

    fn render_adornment(&self, adornment: &FieldMessage) -> Element {
        let value = self.adornment_value();
        let [from, to] = ADORNMENT_SLIDE;
        let slide = Interpolation::linear(from, to).at(value);

        Element::view()
            .key(keys::START_ADORNMENT)
            .role("startAdornment")
            .style(
                Style::new()
                    .opacity(value)
                    .transform([Transform::TranslateX(slide)]),
            )
            .child(adornment.render(None))
    }

    fn render_entry(&self) -> Element {
        let theme = ThemeState::get_or_default();
        let config = &self.config;

        let mut props = config.entry.clone();
        props.editable = props.editable && !config.loading;
        let sanitized = config.sanitized;
        let user_change = config.entry.on_change_text.clone();
        props.on_change_text = Some(Arc::new(move |text: &str| {
            forward_change(sanitized, user_change.as_ref(), text)
        }));

        let mut entry = TextEntryElement::new(props);
        entry.mask = config.mask.clone();
        entry.text_color = theme.color(ColorToken::TextPrimary);
        entry.placeholder_color = theme.color(ColorToken::Grey200);
        entry.underline_color = theme.color(ColorToken::Transparent);
        entry.blur_on_submit = true;
        entry.handlers = self.entry_handlers();

        let focused = self.is_focused();
        let measure = self.driver.clone();
        let style = Style::new()
            .text_color(theme.color(ColorToken::TextPrimary))
            .merged(config.style.as_ref())
            .merged(config.input_style.as_ref());

        Element::text_entry(entry)
            .key(keys::INPUT)
            .role(if focused { "focusStyle" } else { "blurStyle" })
            .role("input")
            .role_if(config.entry.multiline, "multiline")
            .style(style)
            .on_layout(move |size| measure.input_measured(size.height))
    }

    fn render_trailing(&self) -> Option<Element> {
        if self.config.loading {
            let theme = ThemeState::get_or_default();
            return Some(
                Element::spinner(SPINNER_SIZE, theme.color(ColorToken::PrimaryMain))
                    .key(keys::TRAILING),
            );
        }
        self.config
            .end_component
            .clone()
            .map(|element| Element::view().key(keys::TRAILING).child(element))
    }

    pub fn render(&self) -> Element {
        let theme = ThemeState::get_or_default();
        let config = &self.config;
        let geometry = self.geometry();

        let mut input_container = Element::view()
            .role("container")
            .role(if config.entry.multiline {
                "multilineContainer"
            } else {
                "singlelineContainer"
            });
        if config.label.is_some() {
            input_container = input_container.style(Style::new().margin_top(-geometry.top_spacing));
        }
        let input_container = input_container.child(
            Element::view()
                .role("inputWrapper")
                .child_opt(
                    config
                        .start_adornment
                        .as_ref()
                        .map(|adornment| self.render_adornment(adornment)),
                )
                .child(self.render_entry()),
        );

        let content = Element::view()
            .role("inputContentWrapper")
            .child_opt(
                config
                    .label
                    .as_deref()
                    .map(|label| self.render_label(label, &geometry)),
            )
            .child(input_container);

        let background = theme.color(
            config
                .background_color
                .unwrap_or(ColorToken::BackgroundDefault),
        );
        let container = Element::view()
            .role("relativeContainer")
            .role_if(config.label.is_none(), "noLabelContainer")
            .style(
                Style::new()
                    .bg(background)
                    .border_color(self.border_color())
                    .merged(config.wrapper_style.as_ref()),
            )
            .child(content)
            .child_opt(self.render_trailing());

        let error = config.error.as_ref().map(|error| {
            Element::view()
                .key(keys::ERROR)
                .role("error")
                .child(error.render_error(theme.color(ColorToken::ErrorMain)))
        });

        Element::view()
            .role("wrapper")
            .style(Style::new().merged(config.container_style.as_ref()))
            .child(container)
            .child_opt(error)
    }
}

impl From<&MaterialInput> for Element {
    fn from(input: &MaterialInput) -> Self {
        input.render()
    }
}

/// Builder for [`MaterialInput`]
pub struct MaterialInputBuilder {
    pub(crate) config: MaterialInputConfig,
}

impl MaterialInputBuilder {
    pub fn new() -> Self {
        Self {
            config: MaterialInputConfig::default(),
        }
    }

    /// Floating label text
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config.label = Some(label.into());
        self
    }

    /// Container background, `background.default` when unset
    pub fn background_color(mut self, token: ColorToken) -> Self {
        self.config.background_color = Some(token);
        self
    }

    /// Raised label color, `text.primary` when unset
    pub fn label_color(mut self, token: ColorToken) -> Self {
        self.config.label_color = Some(token);
        self
    }

    pub fn start_adornment(mut self, adornment: impl Into<FieldMessage>) -> Self {
        self.config.start_adornment = Some(adornment.into());
        self
    }

    /// Show a spinner in the trailing slot and stop editing
    pub fn loading(mut self, loading: bool) -> Self {
        self.config.loading = loading;
        self
    }

    /// Clean typed text before it reaches `on_change_text`
    pub fn sanitized(mut self) -> Self {
        self.config.sanitized = true;
        self
    }

    /// Style of the outermost wrapper
    pub fn container_style(mut self, style: Style) -> Self {
        self.config.container_style = Some(style);
        self
    }

    /// Style of the bordered container
    pub fn wrapper_style(mut self, style: Style) -> Self {
        self.config.wrapper_style = Some(style);
        self
    }

    /// Style applied after [`style`](Self::style) on the text entry
    pub fn input_style(mut self, style: Style) -> Self {
        self.config.input_style = Some(style);
        self
    }

    pub fn build(self) -> MaterialInput {
        MaterialInput::with_config(self.config)
    }
}

entry_setters!(MaterialInputBuilder);

impl Default for MaterialInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a material input
pub fn material_input() -> MaterialInputBuilder {
    MaterialInputBuilder::new()
}
