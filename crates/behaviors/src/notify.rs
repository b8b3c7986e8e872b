//! User-facing outcome notifications.

use crate::sequencer::SequenceOutcome;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Message shown after a correct sequence.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "✅ Sequência correta! Procedimento iniciado.";
/// Message shown after an incorrect sequence.
pub const DEFAULT_FAILURE_MESSAGE: &str = "❌ Ordem incorreta. Tente novamente.";

/// Literal messages for each outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    /// Shown on [`SequenceOutcome::Success`].
    pub success: String,
    /// Shown on [`SequenceOutcome::Failure`].
    pub failure: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            success: DEFAULT_SUCCESS_MESSAGE.to_string(),
            failure: DEFAULT_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl Messages {
    /// Message for the given outcome.
    pub fn for_outcome(&self, outcome: SequenceOutcome) -> &str {
        match outcome {
            SequenceOutcome::Success => &self.success,
            SequenceOutcome::Failure => &self.failure,
        }
    }
}

/// Shows an outcome to the user (a modal alert in a browser host).
pub trait Notifier {
    /// Present `message` for `outcome`.
    fn notify(&mut self, outcome: SequenceOutcome, message: &str);
}

/// Writes notifications to the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, outcome: SequenceOutcome, message: &str) {
        tracing::info!(?outcome, "{message}");
    }
}

/// A delivered notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Which outcome occurred.
    pub outcome: SequenceOutcome,
    /// Text that was shown.
    pub message: String,
}

/// Keeps every notification; clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    log: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn notifications(&self) -> Vec<Notification> {
        self.log.borrow().clone()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<Notification> {
        self.log.borrow_mut().drain(..).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, outcome: SequenceOutcome, message: &str) {
        self.log.borrow_mut().push(Notification {
            outcome,
            message: message.to_string(),
        });
    }
}
