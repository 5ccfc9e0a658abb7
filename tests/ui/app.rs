use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::common::{Harness, Reply};
use mail_labels::label::{Label, LabelDraft};
use mail_labels::modal::{FormField, LabelModal, ModalParams};
use mail_labels::notification::{ToastLevel, ToastQueue};
use mail_labels::ui::App;

type Closed = Arc<Mutex<Vec<Option<Label>>>>;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

fn mount(harness: &Harness, draft: LabelDraft) -> (App, Closed) {
    let toasts = ToastQueue::new();
    let mut ctx = harness.ctx.clone();
    ctx.notifier = Arc::new(toasts.clone());

    let closed: Closed = Arc::default();
    let sink = Arc::clone(&closed);
    let params = ModalParams::new(draft, move |label| sink.lock().unwrap().push(label));
    let modal = LabelModal::open(ctx, params);
    (App::new(modal, toasts, Duration::from_secs(4)), closed)
}

#[tokio::test]
async fn test_name_field_is_focused_on_mount() {
    let harness = Harness::new(Reply::Saved);
    let (mut app, _) = mount(&harness, LabelDraft::new_label());

    assert_eq!(app.modal().form().focused(), Some(FormField::Name));
    type_text(&mut app, "Work");
    app.handle_key(key(KeyCode::Backspace));
    assert_eq!(app.modal().form().name, "Wor");
}

#[tokio::test]
async fn test_control_and_alt_chords_do_not_type() {
    let harness = Harness::new(Reply::Saved);
    let (mut app, _) = mount(&harness, LabelDraft::new_label());

    type_text(&mut app, "Work");
    app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
    app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
    app.handle_key(KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT));

    assert_eq!(app.modal().form().name, "WorkS");
    assert!(!app.should_quit());
}

#[tokio::test]
async fn test_delayed_focus_applies_on_tick() {
    let harness = Harness::new(Reply::Saved);
    let mut ctx = harness.ctx.clone();
    ctx.focus_delay = Duration::from_millis(20);
    let modal = LabelModal::open(ctx, ModalParams::new(LabelDraft::new_label(), |_| {}));
    let mut app = App::new(modal, ToastQueue::new(), Duration::from_secs(4));

    assert_eq!(app.modal().form().focused(), None);
    tokio::time::sleep(Duration::from_millis(30)).await;
    app.tick().await;
    assert_eq!(app.modal().form().focused(), Some(FormField::Name));
}

#[tokio::test]
async fn test_color_and_notify_fields() {
    let harness = Harness::new(Reply::Saved);
    let (mut app, _) = mount(&harness, LabelDraft::from(&crate::common::existing_label(0)));
    let palette = harness.ctx.palette.clone();

    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.modal().form().focused(), Some(FormField::Color));
    app.handle_key(key(KeyCode::Right));
    assert_eq!(app.modal().form().color, palette.step("#cf5858", 1));
    app.handle_key(key(KeyCode::Left));
    assert_eq!(app.modal().form().color, "#cf5858");

    app.handle_key(key(KeyCode::Tab));
    assert!(!app.modal().form().notify);
    app.handle_key(key(KeyCode::Char(' ')));
    assert!(app.modal().form().notify);
    // Typing outside the name field is ignored
    assert_eq!(app.modal().form().name, "Receipts");
}

#[tokio::test]
async fn test_enter_with_invalid_form_sends_nothing() {
    let harness = Harness::new(Reply::Saved);
    let (mut app, _) = mount(&harness, LabelDraft::new_label());

    app.handle_key(key(KeyCode::Enter));

    assert!(!app.has_pending_save());
    assert!(harness.labels.calls().is_empty());
    assert!(app.modal().is_open());
}

#[tokio::test]
async fn test_enter_saves_in_background_and_quits() {
    let harness = Harness::new(Reply::Saved);
    let (mut app, closed) = mount(&harness, LabelDraft::new_folder());
    type_text(&mut app, "Archive");

    app.handle_key(key(KeyCode::Enter));
    assert!(app.has_pending_save());
    assert!(app.modal().is_submitting());

    // Input is ignored while saving
    type_text(&mut app, "zzz");
    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.modal().form().name, "Archive");

    app.wait_for_save().await;

    assert!(app.should_quit());
    let closed = closed.lock().unwrap();
    assert_eq!(closed.len(), 1);
    assert_eq!(closed[0].as_ref().map(|l| l.name.as_str()), Some("Archive"));

    let toast = app.toasts().latest().unwrap();
    assert_eq!(toast.level, ToastLevel::Success);
    assert_eq!(toast.message, "Folder created");
}

#[tokio::test]
async fn test_failed_save_keeps_dialog_open() {
    let harness = Harness::new(Reply::Rejected(Some("Name taken".to_string())));
    let (mut app, closed) = mount(&harness, LabelDraft::new_label());
    type_text(&mut app, "Taken");

    app.handle_key(key(KeyCode::Enter));
    app.wait_for_save().await;

    assert!(!app.should_quit());
    assert!(app.modal().is_open());
    assert!(closed.lock().unwrap().is_empty());
    let toast = app.toasts().latest().unwrap();
    assert_eq!(toast.level, ToastLevel::Error);
    assert_eq!(toast.message, "Name taken");
}

#[tokio::test]
async fn test_escape_cancels() {
    let harness = Harness::new(Reply::Saved);
    let (mut app, closed) = mount(&harness, LabelDraft::new_label());

    app.handle_key(key(KeyCode::Esc));

    assert!(app.should_quit());
    let closed = closed.lock().unwrap();
    assert_eq!(closed.len(), 1);
    assert!(closed[0].is_none());
}
