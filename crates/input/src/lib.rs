#![warn(missing_docs)]
//! Pointer input for scene behaviors.
//!
//! Mouse and touch are both reduced to a single "pointer contact" with
//! down/move/up semantics. Each source has its own adapter that turns
//! `winit` window events into [`PointerSample`]s; consumers never need to
//! know which device produced a gesture.

mod mouse;
mod touch;

use glam::Vec2;
use serde::{Deserialize, Serialize};

pub use mouse::MouseAdapter;
pub use touch::TouchAdapter;

// Re-exported so hosts can drive the adapters without naming `winit` directly.
pub use winit::event::{ElementState, TouchPhase};

/// Device that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerSource {
    /// The system cursor.
    Mouse,
    /// A touch contact, identified by its platform finger id.
    Touch(u64),
}

/// Phase of a single-contact pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "phase")]
pub enum PointerEvent {
    /// Contact began at the given screen position.
    Down {
        /// Screen position in physical pixels.
        position: Vec2,
    },
    /// Contact moved to the given screen position.
    Move {
        /// Screen position in physical pixels.
        position: Vec2,
    },
    /// Contact ended normally.
    Up,
    /// Contact was lost without a matching up event.
    Cancel,
}

impl PointerEvent {
    /// Shorthand for a down event.
    pub fn down(x: f32, y: f32) -> Self {
        Self::Down {
            position: Vec2::new(x, y),
        }
    }

    /// Shorthand for a move event.
    pub fn move_to(x: f32, y: f32) -> Self {
        Self::Move {
            position: Vec2::new(x, y),
        }
    }

    /// Position carried by the event, if any.
    pub fn position(&self) -> Option<Vec2> {
        match self {
            Self::Down { position } | Self::Move { position } => Some(*position),
            Self::Up | Self::Cancel => None,
        }
    }
}

/// A pointer event tagged with the device that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    /// Producing device.
    pub source: PointerSource,
    /// The normalized event.
    pub event: PointerEvent,
}

impl PointerSample {
    /// Build a sample.
    pub fn new(source: PointerSource, event: PointerEvent) -> Self {
        Self { source, event }
    }
}

/// Convert a `winit` physical position to the `f32` screen space used by behaviors.
pub(crate) fn to_screen(position: winit::dpi::PhysicalPosition<f64>) -> Vec2 {
    Vec2::new(position.x as f32, position.y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_only_for_located_events() {
        assert_eq!(
            PointerEvent::down(1.0, 2.0).position(),
            Some(Vec2::new(1.0, 2.0))
        );
        assert_eq!(
            PointerEvent::move_to(3.0, 4.0).position(),
            Some(Vec2::new(3.0, 4.0))
        );
        assert_eq!(PointerEvent::Up.position(), None);
        assert_eq!(PointerEvent::Cancel.position(), None);
    }

    #[test]
    fn screen_conversion_keeps_fractional_pixels() {
        let screen = to_screen(winit::dpi::PhysicalPosition::new(12.5, -3.25));
        assert_eq!(screen, Vec2::new(12.5, -3.25));
    }
}
