mod common;

use common::{masked, plain, settle, Calls, MockEntry, Texts};
use plume_cn::prelude::*;
use plume_layout::Transform;

fn color(token: ColorToken) -> plume_core::Color {
    ThemeState::get_or_default().color(token)
}

fn labeled(
    notifier: &KeyboardNotifier,
    configure: impl FnOnce(MaterialInputBuilder) -> MaterialInputBuilder,
) -> MaterialInput {
    configure(
        material_input()
            .label("Full name")
            .keyboard_notifier(notifier.clone()),
    )
    .build()
}

#[test]
fn label_rises_on_focus_value_or_placeholder() {
    let notifier = KeyboardNotifier::new();

    let empty = labeled(&notifier, |b| b);
    assert!(!empty.is_raised());
    empty.handle_focus(&Event::focus(1));
    assert!(empty.is_raised());
    empty.handle_blur(&Event::blur(1));
    assert!(!empty.is_raised());

    let with_value = labeled(&notifier, |b| b.value("Ada"));
    assert!(with_value.is_raised());

    let with_placeholder = labeled(&notifier, |b| b.placeholder("As on your ID"));
    assert!(with_placeholder.is_raised());

    let blank_value = labeled(&notifier, |b| b.value(""));
    assert!(!blank_value.is_raised());
}

#[test]
fn label_transform_reaches_endpoints() {
    let notifier = KeyboardNotifier::new();
    let input = labeled(&notifier, |b| b);

    let tree = input.render();
    assert!(tree.find_by_key(keys::LABEL).unwrap().layout(Size::new(80.0, 20.0)));
    assert!(tree.find_by_key(keys::INPUT).unwrap().layout(Size::new(300.0, 40.0)));

    let geometry = input.geometry();
    assert_eq!(geometry, LabelGeometry::new(Size::new(80.0, 20.0), 40.0));

    settle(|dt| input.tick(dt));
    let resting = input.render();
    let label = resting.find_by_key(keys::LABEL).unwrap();
    assert_eq!(label.style.transform[0], Transform::TranslateY(geometry.translate_y[0]));
    assert_eq!(label.style.scale(), Some(1.0));

    input.handle_focus(&Event::focus(1));
    settle(|dt| input.tick(dt));
    let raised = input.render();
    let label = raised.find_by_key(keys::LABEL).unwrap();
    assert_eq!(label.style.translate_y(), Some(geometry.translate_y[1]));
    assert_eq!(label.style.translate_x(), Some(geometry.translate_x[1]));
    assert_eq!(label.style.scale(), Some(0.65));

    let container = raised.find_by_role("container").unwrap();
    assert_eq!(container.style.margin_top, Some(-geometry.top_spacing));
}

#[test]
fn label_color_follows_raised_state() {
    let notifier = KeyboardNotifier::new();

    let plain_label = labeled(&notifier, |b| b);
    assert_eq!(plain_label.label_color(), color(ColorToken::Grey200));
    plain_label.handle_focus(&Event::focus(1));
    assert_eq!(plain_label.label_color(), color(ColorToken::TextPrimary));

    let custom = labeled(&notifier, |b| b.label_color(ColorToken::PrimaryMain).value("x"));
    assert_eq!(custom.label_color(), color(ColorToken::PrimaryMain));

    let tree = custom.render();
    let label = tree.find_by_key(keys::LABEL).unwrap();
    assert_eq!(label.style.text_color, Some(color(ColorToken::PrimaryMain)));
}

#[test]
fn pressing_label_focuses_native_field() {
    let notifier = KeyboardNotifier::new();
    let input = labeled(&notifier, |b| b);
    let native = MockEntry::new();
    input.bind_entry(plain(&native));

    let tree = input.render();
    assert!(tree.find_by_key(keys::LABEL).unwrap().press());
    assert_eq!(native.focuses(), 1);
    assert!(native.is_focused());
}

#[test]
fn sanitized_changes_are_cleaned() {
    let notifier = KeyboardNotifier::new();
    let texts = Texts::default();
    let input = labeled(&notifier, |b| b.sanitized().on_change_text(texts.handler()));

    let tree = input.render();
    let entry = tree.find_text_entry().unwrap();
    entry.dispatch_change_text("   John   <b>Smith</b>");
    entry.dispatch_change_text("a <script");

    assert_eq!(texts.all(), vec!["John Smith", "a script"]);
}

#[test]
fn unsanitized_changes_pass_through() {
    let notifier = KeyboardNotifier::new();
    let texts = Texts::default();
    let input = labeled(&notifier, |b| b.on_change_text(texts.handler()));

    input.handle_change_text("  <i>raw</i>  ");
    let tree = input.render();
    tree.find_text_entry().unwrap().dispatch_change_text(" x ");

    assert_eq!(texts.all(), vec!["  <i>raw</i>  ", " x "]);
}

#[test]
fn loading_shows_spinner_and_locks_field() {
    let notifier = KeyboardNotifier::new();
    let mut input = labeled(&notifier, |b| {
        b.loading(true).end_component(Element::text("kg").key("unit"))
    });

    let tree = input.render();
    let trailing = tree.find_by_key(keys::TRAILING).unwrap();
    match &trailing.kind {
        ElementKind::Spinner { size, color: spinner_color } => {
            assert_eq!(*size, 20.0);
            assert_eq!(*spinner_color, color(ColorToken::PrimaryMain));
        }
        other => panic!("expected spinner, got {other:?}"),
    }
    assert!(tree.find_by_key("unit").is_none());
    assert!(!tree.find_text_entry().unwrap().props.editable);

    input.set_loading(false);
    let tree = input.render();
    assert!(tree.find_by_key("unit").is_some());
    assert!(tree.find_text_entry().unwrap().props.editable);
}

#[test]
fn non_editable_stays_locked_after_loading() {
    let notifier = KeyboardNotifier::new();
    let input = labeled(&notifier, |b| b.editable(false));
    assert!(!input.render().find_text_entry().unwrap().props.editable);
}

#[test]
fn adornment_fades_in_after_delay() {
    let notifier = KeyboardNotifier::new();
    let input = labeled(&notifier, |b| b.start_adornment("R$"));
    assert_eq!(input.adornment_value(), 0.0);

    let tree = input.render();
    let adornment = tree.find_by_key(keys::START_ADORNMENT).unwrap();
    assert_eq!(adornment.style.opacity, Some(0.0));
    assert_eq!(adornment.style.translate_x(), Some(-10.0));
    assert_eq!(adornment.find_text(), Some("R$"));

    input.handle_focus(&Event::focus(1));
    // Still inside the delay window; only the label has moved.
    input.tick(150.0);
    assert_eq!(input.adornment_value(), 0.0);
    assert!(input.focus_value() > 0.0);

    settle(|dt| input.tick(dt));
    assert_eq!(input.adornment_value(), 1.0);
    let tree = input.render();
    let adornment = tree.find_by_key(keys::START_ADORNMENT).unwrap();
    assert_eq!(adornment.style.opacity, Some(1.0));
    assert_eq!(adornment.style.translate_x(), Some(0.0));

    input.handle_blur(&Event::blur(1));
    settle(|dt| input.tick(dt));
    assert_eq!(input.adornment_value(), 0.0);
}

#[test]
fn adornment_stays_visible_with_value() {
    let notifier = KeyboardNotifier::new();
    let input = labeled(&notifier, |b| b.start_adornment("R$").value("10,00"));
    assert_eq!(input.adornment_value(), 1.0);

    input.handle_focus(&Event::focus(1));
    input.handle_blur(&Event::blur(1));
    settle(|dt| input.tick(dt));
    assert_eq!(input.adornment_value(), 1.0);
}

#[test]
fn setting_value_moves_label_but_not_adornment() {
    let notifier = KeyboardNotifier::new();
    let mut input = labeled(&notifier, |b| b.start_adornment("R$"));
    settle(|dt| input.tick(dt));

    input.set_value(Some("12".into()));
    assert!(input.is_raised());
    settle(|dt| input.tick(dt));
    assert_eq!(input.focus_value(), 1.0);
    assert_eq!(input.adornment_value(), 0.0);

    input.set_value(None);
    assert!(!input.is_raised());
    settle(|dt| input.tick(dt));
    assert_eq!(input.focus_value(), 0.0);
}

#[test]
fn focus_handlers_run_through_entry() {
    let notifier = KeyboardNotifier::new();
    let focuses = Calls::default();
    let blurs = Calls::default();
    let input = labeled(&notifier, |b| {
        b.on_focus(focuses.handler()).on_blur(blurs.handler())
    });

    let tree = input.render();
    let entry = tree.find_text_entry().unwrap();
    entry.dispatch_focus(&Event::focus(1));
    assert!(input.is_focused());
    assert!(input.render().find_by_role("focusStyle").is_some());

    entry.dispatch_blur(&Event::blur(1));
    assert!(input.render().find_by_role("blurStyle").is_some());
    assert_eq!((focuses.count(), blurs.count()), (1, 1));
}

#[test]
fn keyboard_hide_drops_focus() {
    let notifier = KeyboardNotifier::new();
    let mut input = labeled(&notifier, |b| b);
    input.mount();

    let native = MockEntry::new();
    input.bind_entry(plain(&native));
    input.handle_focus(&Event::focus(1));

    notifier.emit(KeyboardEvent::DidHide);
    assert!(!input.is_focused());
    assert!(!input.is_raised());
    assert_eq!(native.blurs(), 1);

    input.unmount();
    assert_eq!(notifier.listener_count(), 0);
    assert!(!input.is_listening_for_keyboard());
}

#[test]
fn keyboard_hide_respects_flag() {
    let notifier = KeyboardNotifier::new();
    let mut input = labeled(&notifier, |b| b.hide_keyboard_on_blur(false));
    input.mount();
    input.handle_focus(&Event::focus(1));

    assert_eq!(notifier.emit(KeyboardEvent::DidHide), 0);
    assert!(input.is_focused());

    input.set_hide_keyboard_on_blur(true);
    assert_eq!(notifier.emit(KeyboardEvent::DidHide), 1);
    assert!(!input.is_focused());
}

#[test]
fn container_colors_follow_error_and_background() {
    let notifier = KeyboardNotifier::new();

    let ok = labeled(&notifier, |b| b).render();
    let container = ok.find_by_role("relativeContainer").unwrap();
    assert_eq!(container.style.border_color, Some(color(ColorToken::Grey300)));
    assert_eq!(container.style.background, Some(color(ColorToken::BackgroundDefault)));
    assert!(ok.find_by_key(keys::ERROR).is_none());

    let failing = labeled(&notifier, |b| {
        b.error("name is required")
            .background_color(ColorToken::BackgroundPaper)
    })
    .render();
    let container = failing.find_by_role("relativeContainer").unwrap();
    assert_eq!(container.style.border_color, Some(color(ColorToken::ErrorMain)));
    assert_eq!(container.style.background, Some(color(ColorToken::BackgroundPaper)));

    let error = failing.find_by_key(keys::ERROR).unwrap();
    assert_eq!(error.find_text(), Some("Name is required"));
}

#[test]
fn unlabeled_input_has_no_label_offset() {
    let notifier = KeyboardNotifier::new();
    let input = material_input()
        .placeholder("Search")
        .keyboard_notifier(notifier.clone())
        .build();

    let tree = input.render();
    assert!(tree.find_by_role("noLabelContainer").is_some());
    assert!(tree.find_by_key(keys::LABEL).is_none());
    let container = tree.find_by_role("container").unwrap();
    assert_eq!(container.style.margin_top, None);
}

#[test]
fn masked_field_binds_through_wrapper() {
    let notifier = KeyboardNotifier::new();
    let forwarded = FieldRef::new();
    let mask = MaskSpec::money(Default::default());
    let mut input = labeled(&notifier, |b| b.mask(mask.clone()).field_ref(&forwarded));
    input.mount();

    let native = MockEntry::new();
    native.set_value("R$1.234,50");
    input
        .render()
        .find_text_entry()
        .unwrap()
        .dispatch_bind(masked(&native, mask));

    assert!(input.field_ref().is_bound());
    input.press_label();
    assert!(native.is_focused());
    assert_eq!(forwarded.value().as_deref(), Some("R$1.234,50"));

    input.handle_focus(&Event::focus(1));
    notifier.emit(KeyboardEvent::DidHide);
    assert!(!native.is_focused());
}
