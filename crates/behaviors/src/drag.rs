//! Drag-to-rotate controller.

use crate::host::{Behavior, SceneEvent};
use glam::{Vec2, Vec3};
use scenekit_core::{ElementHandle, RotationTarget, Scene};
use scenekit_input::PointerEvent;

/// Degrees of rotation per pixel of pointer travel.
pub const DEFAULT_SENSITIVITY: f32 = 0.5;

/// Gesture state of a [`DragRotationController`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No contact is held.
    #[default]
    Idle,
    /// A contact is held; `last` is the most recently processed position.
    Dragging {
        /// Pointer position of the previous event in this gesture.
        last: Vec2,
    },
}

/// Converts a stream of pointer positions into cumulative rotation.
///
/// Deltas are taken against the previous event of the gesture, not its
/// origin, so any number of moves compose without drift. Horizontal travel
/// yaws the target (`y += dx * s`); vertical travel pitches it
/// (`x -= dy * s`).
#[derive(Debug, Clone)]
pub struct DragRotationController {
    state: DragState,
    sensitivity: f32,
}

impl Default for DragRotationController {
    fn default() -> Self {
        Self::new(DEFAULT_SENSITIVITY)
    }
}

impl DragRotationController {
    /// Create an idle controller with the given degrees-per-pixel factor.
    pub fn new(sensitivity: f32) -> Self {
        Self {
            state: DragState::Idle,
            sensitivity,
        }
    }

    /// Current gesture state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Whether a gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Feed one pointer event. Returns `true` if the target was rotated.
    pub fn handle(&mut self, event: PointerEvent, target: &mut impl RotationTarget) -> bool {
        match (self.state, event) {
            (_, PointerEvent::Down { position }) => {
                self.state = DragState::Dragging { last: position };
                tracing::trace!(?position, "drag started");
                false
            }
            (DragState::Dragging { last }, PointerEvent::Move { position }) => {
                let delta = position - last;
                let mut rotation = target.rotation();
                rotation.accumulate(Vec3::new(
                    -delta.y * self.sensitivity,
                    delta.x * self.sensitivity,
                    0.0,
                ));
                target.set_rotation(rotation);
                self.state = DragState::Dragging { last: position };
                true
            }
            (DragState::Idle, PointerEvent::Move { .. }) => false,
            (_, PointerEvent::Up) => {
                self.state = DragState::Idle;
                false
            }
            (_, PointerEvent::Cancel) => {
                self.cancel();
                false
            }
        }
    }

    /// Abandon any in-flight gesture without touching the target.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            tracing::debug!("drag cancelled");
        }
        self.state = DragState::Idle;
    }
}

/// Scene-scoped behavior steering one element with a [`DragRotationController`].
#[derive(Debug)]
pub struct DragRotationBehavior {
    target: ElementHandle,
    controller: DragRotationController,
    target_lost: bool,
}

impl DragRotationBehavior {
    /// Bind a controller to `target`.
    pub fn new(target: ElementHandle, sensitivity: f32) -> Self {
        Self {
            target,
            controller: DragRotationController::new(sensitivity),
            target_lost: false,
        }
    }
}

impl Behavior for DragRotationBehavior {
    fn name(&self) -> &str {
        "drag-rotation"
    }

    fn handle(&mut self, scene: &mut Scene, event: &SceneEvent) {
        let SceneEvent::Pointer(sample) = event else {
            return;
        };
        let Some(element) = scene.get_mut(self.target) else {
            if !self.target_lost {
                tracing::warn!(
                    element = self.target.0,
                    "rotatable element is gone; ignoring pointer input"
                );
                self.target_lost = true;
            }
            self.controller.cancel();
            return;
        };
        if self.controller.handle(sample.event, &mut *element) {
            tracing::trace!(
                element = element.name(),
                rotation = ?element.rotation(),
                "rotated"
            );
        }
    }

    fn teardown(&mut self, _scene: &mut Scene) {
        self.controller.cancel();
    }
}
