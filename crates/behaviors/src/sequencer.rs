//! Ordered-selection validation.

use crate::host::{Behavior, SceneEvent};
use crate::notify::{Messages, Notifier};
use scenekit_core::Scene;
use serde::Serialize;
use thiserror::Error;

/// Result of a completed selection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceOutcome {
    /// Every id matched the expected order.
    Success,
    /// At least one id was out of place.
    Failure,
}

/// Errors raised when building a sequencer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    /// An empty expected sequence can never be completed.
    #[error("expected sequence must contain at least one id")]
    EmptySequence,
}

/// Accumulates selected ids and checks them against a fixed order.
///
/// Evaluation happens only once as many ids as expected have been
/// collected; a wrong early pick is not reported until then. The
/// accumulator is cleared after every evaluation so the user can retry.
#[derive(Debug, Clone)]
pub struct SelectionSequencer {
    expected: Vec<String>,
    accumulated: Vec<String>,
}

impl SelectionSequencer {
    /// Create a sequencer for the given order.
    pub fn new<I, S>(expected: I) -> Result<Self, SequenceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let expected: Vec<String> = expected.into_iter().map(Into::into).collect();
        if expected.is_empty() {
            return Err(SequenceError::EmptySequence);
        }
        let accumulated = Vec::with_capacity(expected.len());
        Ok(Self {
            expected,
            accumulated,
        })
    }

    /// Record a selection. Returns an outcome when the attempt is complete.
    pub fn select(&mut self, id: impl Into<String>) -> Option<SequenceOutcome> {
        self.accumulated.push(id.into());
        if self.accumulated.len() < self.expected.len() {
            return None;
        }

        let outcome = if self.accumulated == self.expected {
            SequenceOutcome::Success
        } else {
            SequenceOutcome::Failure
        };
        tracing::debug!(attempt = ?self.accumulated, ?outcome, "selection attempt evaluated");
        self.accumulated.clear();
        Some(outcome)
    }

    /// Discard a partial attempt.
    pub fn reset(&mut self) {
        self.accumulated.clear();
    }

    /// The required order.
    pub fn expected(&self) -> &[String] {
        &self.expected
    }

    /// Ids collected in the current attempt.
    pub fn accumulated(&self) -> &[String] {
        &self.accumulated
    }

    /// Selections still needed before the attempt is evaluated.
    pub fn remaining(&self) -> usize {
        self.expected.len() - self.accumulated.len()
    }
}

/// Behavior feeding clicked element ids into a [`SelectionSequencer`].
pub struct SelectionBehavior {
    sequencer: SelectionSequencer,
    messages: Messages,
    notifier: Box<dyn Notifier>,
}

impl SelectionBehavior {
    /// Wrap a sequencer, reporting outcomes through `notifier`.
    pub fn new(sequencer: SelectionSequencer, messages: Messages, notifier: Box<dyn Notifier>) -> Self {
        Self {
            sequencer,
            messages,
            notifier,
        }
    }
}

impl std::fmt::Debug for SelectionBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionBehavior")
            .field("sequencer", &self.sequencer)
            .field("messages", &self.messages)
            .finish_non_exhaustive()
    }
}

impl Behavior for SelectionBehavior {
    fn name(&self) -> &str {
        "selection"
    }

    fn handle(&mut self, scene: &mut Scene, event: &SceneEvent) {
        let SceneEvent::Click { target } = event else {
            return;
        };
        let Some(element) = scene.get(*target) else {
            tracing::warn!(element = target.0, "click on unknown element");
            return;
        };
        let Some(id) = element.id() else {
            tracing::warn!(element = element.name(), "clicked element has no selection id");
            return;
        };

        tracing::debug!(id, "selected");
        if let Some(outcome) = self.sequencer.select(id) {
            tracing::info!(?outcome, "selection sequence complete");
            self.notifier.notify(outcome, self.messages.for_outcome(outcome));
        }
    }

    fn teardown(&mut self, _scene: &mut Scene) {
        self.sequencer.reset();
    }
}
