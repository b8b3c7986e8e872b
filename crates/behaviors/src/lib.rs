#![warn(missing_docs)]
//! Scene behaviors for interactive 3D content.
//!
//! Two independent behaviors react to host input:
//!
//! - **Drag rotation**: mouse or touch drags anywhere on the scene rotate a
//!   bound element, with per-event deltas so rotation never drifts.
//! - **Ordered selection**: clicks on selectable elements are collected and
//!   checked against a fixed order once enough have been made.
//!
//! # Example
//!
//! ```rust
//! use scenekit_behaviors::{
//!     BehaviorHost, DragRotationBehavior, ListenerScope, SceneEvent, DEFAULT_SENSITIVITY,
//! };
//! use scenekit_core::{Element, Orientation, RotationTarget, Scene};
//! use scenekit_input::{PointerEvent, PointerSample, PointerSource};
//!
//! let mut scene = Scene::new();
//! let model = scene.spawn(Element::new("model")).unwrap();
//!
//! let mut host = BehaviorHost::new();
//! host.attach(
//!     ListenerScope::Scene,
//!     Box::new(DragRotationBehavior::new(model, DEFAULT_SENSITIVITY)),
//! );
//!
//! for event in [PointerEvent::down(0.0, 0.0), PointerEvent::move_to(10.0, 0.0), PointerEvent::Up] {
//!     let sample = PointerSample::new(PointerSource::Mouse, event);
//!     host.dispatch(&mut scene, &SceneEvent::Pointer(sample));
//! }
//!
//! assert_eq!(scene.get(model).unwrap().rotation(), Orientation::new(0.0, 5.0, 0.0));
//! ```

pub mod drag;
pub mod host;
pub mod notify;
pub mod sequencer;

// Re-export commonly used types
pub use drag::{DragRotationBehavior, DragRotationController, DragState, DEFAULT_SENSITIVITY};
pub use host::{Behavior, BehaviorHost, ListenerScope, SceneEvent, SubscriptionHandle};
pub use notify::{
    LogNotifier, Messages, Notification, Notifier, RecordingNotifier, DEFAULT_FAILURE_MESSAGE,
    DEFAULT_SUCCESS_MESSAGE,
};
pub use sequencer::{SelectionBehavior, SelectionSequencer, SequenceError, SequenceOutcome};
