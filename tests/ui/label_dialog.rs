use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;
use std::time::Duration;

use crate::common::{Harness, Reply};
use mail_labels::label::LabelDraft;
use mail_labels::modal::{LabelModal, ModalParams};
use mail_labels::notification::ToastQueue;
use mail_labels::ui::App;

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn mount(harness: &Harness, draft: LabelDraft) -> App {
    let toasts = ToastQueue::new();
    let mut ctx = harness.ctx.clone();
    ctx.notifier = Arc::new(toasts.clone());
    let modal = LabelModal::open(ctx, ModalParams::new(draft, |_| {}));
    App::new(modal, toasts, Duration::from_secs(4))
}

#[tokio::test]
async fn test_dialog_shows_title_and_fields() {
    let harness = Harness::new(Reply::Saved);
    let app = mount(&harness, LabelDraft::new_folder());

    let screen = screen(&app);
    assert!(screen.contains("Create new folder"));
    assert!(screen.contains("Name"));
    assert!(screen.contains("Color"));
    assert!(screen.contains("[x] Notify"));
    assert!(screen.contains("Esc"));
}

#[tokio::test]
async fn test_field_errors_appear_after_submit_attempt() {
    let harness = Harness::new(Reply::Saved);
    let mut app = mount(&harness, LabelDraft::new_label());
    assert!(!screen(&app).contains("Name is required"));

    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

    assert!(screen(&app).contains("Name is required"));
}

#[tokio::test]
async fn test_status_line_shows_error_toast() {
    let harness = Harness::new(Reply::Rejected(None));
    let mut app = mount(&harness, LabelDraft::new_label());
    for c in "Bills".chars() {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    app.wait_for_save().await;

    assert!(screen(&app).contains("Error when saving label"));
}

#[tokio::test]
async fn test_edit_dialog_shows_existing_name() {
    let harness = Harness::new(Reply::Saved);
    let app = mount(&harness, LabelDraft::from(&crate::common::existing_label(0)));

    let screen = screen(&app);
    assert!(screen.contains("Edit label"));
    assert!(screen.contains("Receipts"));
    assert!(screen.contains("[ ] Notify"));
}
