//! Label / folder edit dialog controller.
//!
//! [`LabelModal`] owns the form state of one open dialog. It is opened with
//! [`ModalParams`] (the label to edit or an empty draft, an optional success
//! callback and the host's `close` callback) and a [`ModalContext`] carrying
//! every service it talks to.
//!
//! Lifecycle: `Open -> Submitting -> Closed(Some(label))` on a successful
//! save, `Submitting -> Open` when the save fails, `Open -> Closed(None)` on
//! cancel. `close` is called exactly once.

pub mod form;

use log::{debug, info, warn};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

use crate::activity::{ActivityGuard, NetworkActivityTracker};
use crate::backend::{ApiError, EventManager, LabelService};
use crate::i18n::ModalTexts;
use crate::label::{Label, LabelDraft, LabelKind, LabelPayload, ModalMode};
use crate::notification::Notifier;
use crate::palette::Palette;
use crate::sanitize::{HtmlSanitizer, Sanitizer};

pub use form::{FieldError, FormField, LabelForm};

pub type SuccessCallback = Box<dyn FnOnce(&Label) + Send>;
pub type CloseCallback = Box<dyn FnOnce(Option<Label>) + Send>;

/// What the dialog host passes when opening the dialog.
pub struct ModalParams {
    pub label: LabelDraft,
    pub on_success: Option<SuccessCallback>,
    pub close: CloseCallback,
}

impl ModalParams {
    pub fn new(label: LabelDraft, close: impl FnOnce(Option<Label>) + Send + 'static) -> Self {
        Self {
            label,
            on_success: None,
            close: Box::new(close),
        }
    }

    pub fn on_success(mut self, callback: impl FnOnce(&Label) + Send + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }
}

/// Services and settings the dialog depends on.
#[derive(Clone)]
pub struct ModalContext {
    pub labels: Arc<dyn LabelService>,
    pub events: Arc<dyn EventManager>,
    pub notifier: Arc<dyn Notifier>,
    pub tracker: NetworkActivityTracker,
    pub sanitizer: Arc<dyn Sanitizer>,
    pub texts: Arc<ModalTexts>,
    pub palette: Palette,
    /// Delay before the name field should take focus
    pub focus_delay: Duration,
}

impl ModalContext {
    /// Context with the HTML sanitizer, untranslated texts, the default
    /// palette and immediate focus.
    pub fn new(labels: Arc<dyn LabelService>, events: Arc<dyn EventManager>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            labels,
            events,
            notifier,
            tracker: NetworkActivityTracker::new(),
            sanitizer: Arc::new(HtmlSanitizer::new()),
            texts: Arc::new(ModalTexts::default()),
            palette: Palette::default(),
            focus_delay: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    Open,
    Submitting,
    Closed(Option<Label>),
}

/// Why a submit did not save.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelModalError {
    /// The name was empty once sanitized; nothing was sent.
    #[error("{0}")]
    InvalidName(String),

    /// The remote save failed; the dialog stays open.
    #[error("{0}")]
    Persistence(String),
}

/// Side effect requested when the dialog is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRequest {
    pub target: FormField,
    pub delay: Duration,
}

/// A validated save that has not been sent yet.
///
/// Counts as network activity from creation until it is executed or dropped.
pub struct PendingSave {
    payload: LabelPayload,
    labels: Arc<dyn LabelService>,
    events: Arc<dyn EventManager>,
    _activity: ActivityGuard,
}

impl PendingSave {
    pub fn payload(&self) -> &LabelPayload {
        &self.payload
    }

    /// Save the label, then refresh application state.
    ///
    /// The save only succeeds once the refresh has too.
    pub async fn execute(self) -> Result<Label, ApiError> {
        let label = self.labels.save(&self.payload).await?;
        info!("Label: saved {} '{}'", label.id, label.name);

        if let Err(e) = self.events.call().await {
            warn!("Label: refresh after save failed: {}", e);
            return Err(e);
        }

        Ok(label)
    }
}

/// Controller of one open label dialog
pub struct LabelModal {
    ctx: ModalContext,
    id: Option<String>,
    mode: ModalMode,
    kind: LabelKind,
    title: String,
    success_message: String,
    form: LabelForm,
    state: ModalState,
    on_success: Option<SuccessCallback>,
    close: Option<CloseCallback>,
}

impl LabelModal {
    pub fn open(ctx: ModalContext, params: ModalParams) -> Self {
        Self::open_with_rng(ctx, params, &mut rand::thread_rng())
    }

    /// Open with an explicit random source for the default color.
    pub fn open_with_rng<R: Rng + ?Sized>(ctx: ModalContext, params: ModalParams, rng: &mut R) -> Self {
        let ModalParams {
            label,
            on_success,
            close,
        } = params;

        let mode = label.mode();
        let kind = label.kind();
        let title = ctx.texts.title(mode, kind).to_string();
        let success_message = ctx.texts.success(mode, kind).to_string();
        let notify = label.default_notify();
        let color = match label.color {
            Some(ref color) if !color.is_empty() => color.clone(),
            _ => ctx.palette.random_color_with(rng),
        };
        let name = label.name.clone().unwrap_or_default();
        let id = label.id.filter(|id| !id.is_empty());

        debug!("Label modal: open {:?} {:?} (id={:?})", mode, kind, id);

        Self {
            ctx,
            id,
            mode,
            kind,
            title,
            success_message,
            form: LabelForm::new(name, color, notify),
            state: ModalState::Open,
            on_success,
            close: Some(close),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn mode(&self) -> ModalMode {
        self.mode
    }

    pub fn kind(&self) -> LabelKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn success_message(&self) -> &str {
        &self.success_message
    }

    pub fn form(&self) -> &LabelForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut LabelForm {
        &mut self.form
    }

    pub fn palette(&self) -> &Palette {
        &self.ctx.palette
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    pub fn is_submitting(&self) -> bool {
        self.state == ModalState::Submitting
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.state, ModalState::Closed(_))
    }

    /// True while any tracked request is in flight
    pub fn is_busy(&self) -> bool {
        self.ctx.tracker.is_busy()
    }

    /// Focus the name input once the host has rendered the dialog.
    pub fn on_mount(&self) -> FocusRequest {
        FocusRequest {
            target: FormField::Name,
            delay: self.ctx.focus_delay,
        }
    }

    /// Validate and sanitize the form, returning the request to run.
    ///
    /// `Ok(None)` means nothing happens: the dialog is not open or the
    /// form-level validation failed (its field errors are already shown).
    pub fn begin_submit(&mut self, form_valid: bool) -> Result<Option<PendingSave>, LabelModalError> {
        if self.state != ModalState::Open {
            debug!("Label modal: submit ignored in state {:?}", self.state);
            return Ok(None);
        }
        if !form_valid {
            debug!("Label modal: submit ignored, form invalid");
            return Ok(None);
        }

        let name = self.ctx.sanitizer.input(&self.form.name);
        let color = self.ctx.sanitizer.input(&self.form.color);

        // Input made only of markup sanitizes to nothing
        if name.is_empty() {
            self.form.name = name;
            let message = self.ctx.texts.invalid_name(self.kind).to_string();
            self.ctx.notifier.error(&message);
            return Err(LabelModalError::InvalidName(message));
        }

        let payload = LabelPayload {
            id: self.id.clone(),
            name,
            color,
            display: 1,
            exclusive: self.kind.exclusive(),
            notify: i32::from(self.form.notify),
        };

        self.state = ModalState::Submitting;
        debug!("Label modal: submitting {:?}", self.mode);

        Ok(Some(PendingSave {
            payload,
            labels: Arc::clone(&self.ctx.labels),
            events: Arc::clone(&self.ctx.events),
            _activity: self.ctx.tracker.begin(),
        }))
    }

    /// Apply the outcome of a [`PendingSave`].
    pub fn finish_submit(&mut self, result: Result<Label, ApiError>) -> Result<Label, LabelModalError> {
        match result {
            Ok(label) => {
                self.ctx.notifier.success(&self.success_message);
                if let Some(on_success) = self.on_success.take() {
                    on_success(&label);
                }
                self.close_with(Some(label.clone()));
                Ok(label)
            }
            Err(e) => {
                warn!("Label modal: save failed: {}", e);
                let message = e
                    .server_message()
                    .map_or_else(|| self.ctx.texts.error_message.clone(), str::to_string);
                self.ctx.notifier.error(&message);
                if self.state == ModalState::Submitting {
                    self.state = ModalState::Open;
                }
                Err(LabelModalError::Persistence(message))
            }
        }
    }

    /// Run the whole submit flow and wait for it.
    ///
    /// Returns `Ok(None)` when nothing was submitted.
    pub async fn submit(&mut self, form_valid: bool) -> Result<Option<Label>, LabelModalError> {
        let Some(pending) = self.begin_submit(form_valid)? else {
            return Ok(None);
        };
        let result = pending.execute().await;
        self.finish_submit(result).map(Some)
    }

    /// Submit using the form's own validation.
    pub async fn submit_form(&mut self) -> Result<Option<Label>, LabelModalError> {
        let valid = self.form.is_valid();
        self.submit(valid).await
    }

    /// Close without a result. Ignored while a save is in flight.
    pub fn cancel(&mut self) -> bool {
        if self.state != ModalState::Open {
            debug!("Label modal: cancel ignored in state {:?}", self.state);
            return false;
        }
        self.close_with(None);
        true
    }

    fn close_with(&mut self, result: Option<Label>) {
        if let Some(close) = self.close.take() {
            close(result.clone());
        }
        debug!("Label modal: closed (saved={})", result.is_some());
        self.state = ModalState::Closed(result);
    }
}
