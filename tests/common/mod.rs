//! Recording fakes for the services the label dialog talks to.
#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use mail_labels::backend::{ApiError, EventManager, LabelService};
use mail_labels::label::{Label, LabelPayload};
use mail_labels::modal::ModalContext;
use mail_labels::notification::Notifier;

/// Ordered record of everything the fakes saw
#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// How the fake label service answers
#[derive(Clone)]
pub enum Reply {
    Saved,
    Rejected(Option<String>),
    Offline,
}

pub struct FakeLabels {
    pub journal: Journal,
    pub reply: Mutex<Reply>,
    pub payloads: Mutex<Vec<(String, LabelPayload)>>,
}

impl FakeLabels {
    pub fn new(journal: Journal, reply: Reply) -> Self {
        Self {
            journal,
            reply: Mutex::new(reply),
            payloads: Mutex::new(Vec::new()),
        }
    }

    pub fn set_reply(&self, reply: Reply) {
        *self.reply.lock().unwrap() = reply;
    }

    pub fn calls(&self) -> Vec<(String, LabelPayload)> {
        self.payloads.lock().unwrap().clone()
    }

    fn answer(&self, action: &str, payload: &LabelPayload) -> Result<Label, ApiError> {
        self.journal.push(action);
        self.payloads
            .lock()
            .unwrap()
            .push((action.to_string(), payload.clone()));

        match self.reply.lock().unwrap().clone() {
            Reply::Saved => Ok(Label {
                id: payload.id.clone().unwrap_or_else(|| "new-label-id".to_string()),
                name: payload.name.clone(),
                color: payload.color.clone(),
                display: payload.display,
                exclusive: payload.exclusive,
                notify: payload.notify,
                order: Some(1),
                path: None,
            }),
            Reply::Rejected(message) => Err(ApiError::Rejected {
                status: 422,
                code: Some(2001),
                message,
            }),
            Reply::Offline => Err(ApiError::Decode("connection reset".to_string())),
        }
    }
}

#[async_trait]
impl LabelService for FakeLabels {
    async fn create(&self, payload: &LabelPayload) -> Result<Label, ApiError> {
        self.answer("create", payload)
    }

    async fn update(&self, payload: &LabelPayload) -> Result<Label, ApiError> {
        self.answer("update", payload)
    }
}

pub struct FakeEvents {
    pub journal: Journal,
    pub fail: bool,
}

#[async_trait]
impl EventManager for FakeEvents {
    async fn call(&self) -> Result<(), ApiError> {
        self.journal.push("refresh");
        if self.fail {
            Err(ApiError::Decode("events unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

pub struct FakeNotifier {
    pub journal: Journal,
}

impl Notifier for FakeNotifier {
    fn success(&self, message: &str) {
        self.journal.push(format!("success: {message}"));
    }

    fn error(&self, message: &str) {
        self.journal.push(format!("error: {message}"));
    }
}

pub struct Harness {
    pub journal: Journal,
    pub labels: Arc<FakeLabels>,
    pub ctx: ModalContext,
}

impl Harness {
    pub fn new(reply: Reply) -> Self {
        Self::with_refresh(reply, false)
    }

    pub fn with_refresh(reply: Reply, refresh_fails: bool) -> Self {
        let journal = Journal::default();
        let labels = Arc::new(FakeLabels::new(journal.clone(), reply));
        let events = Arc::new(FakeEvents {
            journal: journal.clone(),
            fail: refresh_fails,
        });
        let notifier = Arc::new(FakeNotifier {
            journal: journal.clone(),
        });
        let ctx = ModalContext::new(labels.clone(), events, notifier);
        Self { journal, labels, ctx }
    }
}

pub fn existing_label(exclusive: i32) -> Label {
    Label {
        id: "label-42".to_string(),
        name: "Receipts".to_string(),
        color: "#cf5858".to_string(),
        display: 1,
        exclusive,
        notify: 0,
        order: Some(4),
        path: None,
    }
}
