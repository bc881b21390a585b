//! Signup form demo
//!
//! Drives a classic and a material input through a scripted host session:
//! focus, typing, a keyboard dismissal and unmount.
//!
//! Run with:
//! `RUST_LOG=plume_cn=debug cargo run -p plume_cn --example signup_form`

use std::sync::{Arc, Mutex};

use plume_animation::AnimationScheduler;
use plume_cn::prelude::*;
use plume_theme::ThemeConfig;
use tracing_subscriber::EnvFilter;

const THEME: &str = r##"
scheme = "light"

[light]
"primary.main" = "#0B57D0"
"grey.600" = "#3C4043"
"##;

/// Stand-in for the platform text field
#[derive(Default)]
struct HostField {
    focused: Mutex<bool>,
    text: Mutex<String>,
}

impl NativeTextEntry for HostField {
    fn focus(&self) {
        *self.focused.lock().unwrap() = true;
    }

    fn blur(&self) {
        *self.focused.lock().unwrap() = false;
    }

    fn clear(&self) {
        self.text.lock().unwrap().clear();
    }

    fn value(&self) -> String {
        self.text.lock().unwrap().clone()
    }

    fn is_focused(&self) -> bool {
        *self.focused.lock().unwrap()
    }
}

fn run_frames(scheduler: &mut AnimationScheduler) -> usize {
    let mut frames = 0;
    while scheduler.tick(16.0) {
        frames += 1;
    }
    frames
}

fn main() -> plume_theme::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    ThemeConfig::from_toml_str(THEME)?.init_global()?;

    let keyboard = KeyboardNotifier::new();
    let mut scheduler = AnimationScheduler::new();

    let typed = Arc::new(Mutex::new(String::new()));
    let sink = typed.clone();

    let mut email = text_input()
        .placeholder("Email")
        .start_icon("mail")
        .helper_text("We never share it")
        .keyboard_notifier(keyboard.clone())
        .build();

    let mut name = material_input()
        .label("Full name")
        .start_adornment("@")
        .sanitized()
        .on_change_text(move |text: &str| *sink.lock().unwrap() = text.to_string())
        .keyboard_notifier(keyboard.clone())
        .build();

    email.mount();
    name.mount();
    scheduler.add(&email.focus_tween());
    scheduler.add(&name.focus_tween());
    scheduler.add(&name.adornment_tween());

    let email_field = Arc::new(HostField::default());
    let name_field = Arc::new(HostField::default());

    let email_tree = email.render();
    let name_tree = name.render();
    if let Some(entry) = email_tree.find_text_entry() {
        entry.dispatch_bind(EntryBinding::Plain(email_field.clone()));
    }
    if let Some(entry) = name_tree.find_text_entry() {
        entry.dispatch_bind(EntryBinding::Plain(name_field.clone()));
        if let Some(input) = name_tree.find_by_key(keys::INPUT) {
            input.layout(Size::new(320.0, 44.0));
        }
        if let Some(label) = name_tree.find_by_key(keys::LABEL) {
            label.layout(Size::new(72.0, 18.0));
            // Tap the label, then type.
            label.press();
        }
        entry.dispatch_focus(&Event::focus(2));
        entry.dispatch_change_text("  Ada   <b>Lovelace</b>");
    }

    let frames = run_frames(&mut scheduler);
    tracing::info!(
        frames,
        raised = name.is_raised(),
        native_focused = name_field.is_focused(),
        typed = %typed.lock().unwrap(),
        "name field focused"
    );

    let geometry = name.geometry();
    tracing::info!(
        top_spacing = geometry.top_spacing,
        translate_y = geometry.translate_y[1],
        translate_x = geometry.translate_x[1],
        "label raised"
    );

    email.handle_focus(&Event::focus(1));
    run_frames(&mut scheduler);
    tracing::info!(border = ?email.border_color(), "email focused");

    let notified = keyboard.emit(KeyboardEvent::DidHide);
    run_frames(&mut scheduler);
    tracing::info!(
        notified,
        email_focused = email.is_focused(),
        name_focused = name.is_focused(),
        email_native = email_field.is_focused(),
        "keyboard dismissed"
    );

    email.unmount();
    name.unmount();
    tracing::info!(listeners = keyboard.listener_count(), "unmounted");

    Ok(())
}
