//! Dialog host state: routes keys into the modal, runs saves in the
//! background and applies their outcome on ticks.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;
use ratatui::{layout::Rect, Frame};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use super::components::{LabelDialog, StatusBar};
use super::layout::LayoutManager;
use crate::backend::ApiError;
use crate::label::Label;
use crate::modal::{FocusRequest, FormField, LabelModal};
use crate::notification::ToastQueue;

pub struct App {
    modal: LabelModal,
    toasts: ToastQueue,
    toast_ttl: Duration,
    pending: Option<JoinHandle<Result<Label, ApiError>>>,
    scheduled_focus: Option<(Instant, FormField)>,
    show_errors: bool,
    should_quit: bool,
}

impl App {
    /// Mount the dialog and apply its focus request.
    pub fn new(modal: LabelModal, toasts: ToastQueue, toast_ttl: Duration) -> Self {
        let mut app = Self {
            modal,
            toasts,
            toast_ttl,
            pending: None,
            scheduled_focus: None,
            show_errors: false,
            should_quit: false,
        };
        let request = app.modal.on_mount();
        app.request_focus(request);
        app
    }

    fn request_focus(&mut self, request: FocusRequest) {
        if request.delay.is_zero() {
            self.modal.form_mut().focus(request.target);
        } else {
            self.scheduled_focus = Some((Instant::now() + request.delay, request.target));
        }
    }

    pub fn modal(&self) -> &LabelModal {
        &self.modal
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn has_pending_save(&self) -> bool {
        self.pending.is_some()
    }

    /// Route a key press into the dialog. Input is ignored while saving.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        if key.code == KeyCode::Esc || ctrl_c {
            if self.modal.cancel() {
                self.should_quit = true;
            }
            return;
        }

        if !self.modal.is_open() {
            return;
        }

        let focused = self.modal.form().focused();
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Tab => self.modal.form_mut().focus_next(),
            KeyCode::BackTab => self.modal.form_mut().focus_previous(),
            KeyCode::Backspace => {
                self.modal.form_mut().backspace();
            }
            KeyCode::Left | KeyCode::Right if focused == Some(FormField::Color) => {
                let offset = if key.code == KeyCode::Left { -1 } else { 1 };
                let palette = self.modal.palette().clone();
                self.modal.form_mut().step_color(&palette, offset);
            }
            KeyCode::Char(' ') if focused == Some(FormField::Notify) => self.modal.form_mut().toggle_notify(),
            KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
            KeyCode::Char(c) => {
                self.modal.form_mut().insert_char(c);
            }
            _ => {}
        }
    }

    fn submit(&mut self) {
        self.show_errors = true;
        let valid = self.modal.form().is_valid();
        match self.modal.begin_submit(valid) {
            Ok(Some(pending)) => {
                self.pending = Some(tokio::spawn(pending.execute()));
            }
            Ok(None) => {}
            Err(e) => {
                debug!("App: submit rejected locally: {}", e);
                self.modal.form_mut().focus(FormField::Name);
            }
        }
    }

    /// Periodic housekeeping: finished saves, delayed focus, expired toasts.
    pub async fn tick(&mut self) {
        if self.pending.as_ref().is_some_and(JoinHandle::is_finished) {
            if let Some(handle) = self.pending.take() {
                self.apply_save_result(handle).await;
            }
        }

        if let Some((at, field)) = self.scheduled_focus {
            if Instant::now() >= at {
                self.scheduled_focus = None;
                if self.modal.is_open() {
                    self.modal.form_mut().focus(field);
                } else {
                    debug!("App: focus target gone, skipping");
                }
            }
        }

        self.toasts.prune(self.toast_ttl);
    }

    /// Wait for the in-flight save, if any, and apply it.
    pub async fn wait_for_save(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.apply_save_result(handle).await;
        }
    }

    async fn apply_save_result(&mut self, handle: JoinHandle<Result<Label, ApiError>>) {
        let result = handle
            .await
            .unwrap_or_else(|e| Err(ApiError::Task(e.to_string())));
        if self.modal.finish_submit(result).is_ok() {
            self.should_quit = true;
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let (dialog_area, status_area) = LayoutManager::main_layout(area);
        LabelDialog::render(f, dialog_area, &self.modal, self.show_errors);
        let toast = self.toasts.latest();
        StatusBar::render(f, status_area, toast.as_ref(), self.modal.is_busy());
    }
}
