//! Mouse adapter.

use crate::{to_screen, PointerEvent, PointerSample, PointerSource};
use glam::Vec2;
use winit::event::{ElementState, WindowEvent};

/// Turns cursor and button events into pointer samples.
///
/// `winit` reports button presses without a position, so the adapter keeps
/// the last cursor position and stamps it onto the down event. Any button
/// starts or ends the gesture.
#[derive(Debug, Default)]
pub struct MouseAdapter {
    cursor: Option<Vec2>,
    pressed: bool,
}

impl MouseAdapter {
    /// Create an adapter with no known cursor position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position.
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Whether a button is currently held.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Process a window event, returning a sample if it maps to one.
    pub fn handle_event(&mut self, event: &WindowEvent) -> Option<PointerSample> {
        match event {
            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(to_screen(*position)),
            WindowEvent::MouseInput { state, .. } => self.button(*state),
            WindowEvent::CursorLeft { .. } | WindowEvent::Focused(false) => self.cursor_lost(),
            _ => None,
        }
    }

    /// Record a cursor move.
    ///
    /// Moves are reported even with no button held; the controller decides
    /// whether they matter.
    pub fn cursor_moved(&mut self, position: Vec2) -> Option<PointerSample> {
        self.cursor = Some(position);
        Some(self.sample(PointerEvent::Move { position }))
    }

    /// Record a button press or release.
    pub fn button(&mut self, state: ElementState) -> Option<PointerSample> {
        match state {
            ElementState::Pressed => {
                let Some(position) = self.cursor else {
                    tracing::debug!("mouse press before any cursor position; ignoring");
                    return None;
                };
                self.pressed = true;
                Some(self.sample(PointerEvent::Down { position }))
            }
            ElementState::Released => {
                self.pressed = false;
                Some(self.sample(PointerEvent::Up))
            }
        }
    }

    /// The cursor left the window or the window lost focus.
    ///
    /// A release may never arrive in that case, so a held gesture is cancelled.
    pub fn cursor_lost(&mut self) -> Option<PointerSample> {
        if !self.pressed {
            return None;
        }
        self.pressed = false;
        tracing::debug!("mouse gesture cancelled: cursor lost");
        Some(self.sample(PointerEvent::Cancel))
    }

    fn sample(&self, event: PointerEvent) -> PointerSample {
        PointerSample::new(PointerSource::Mouse, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_uses_last_cursor_position() {
        let mut mouse = MouseAdapter::new();
        mouse.cursor_moved(Vec2::new(40.0, 25.0));

        let sample = mouse
            .button(ElementState::Pressed)
            .expect("press maps to down");
        assert_eq!(sample.source, PointerSource::Mouse);
        assert_eq!(sample.event, PointerEvent::down(40.0, 25.0));
        assert!(mouse.is_pressed());
    }

    #[test]
    fn press_without_cursor_is_dropped() {
        let mut mouse = MouseAdapter::new();
        assert!(mouse.button(ElementState::Pressed).is_none());
        assert!(!mouse.is_pressed());
    }

    #[test]
    fn release_ends_the_gesture() {
        let mut mouse = MouseAdapter::new();
        mouse.cursor_moved(Vec2::ZERO);
        mouse.button(ElementState::Pressed);

        let up = mouse.button(ElementState::Released);
        assert_eq!(up.map(|s| s.event), Some(PointerEvent::Up));
        assert!(!mouse.is_pressed());
    }

    #[test]
    fn cursor_lost_cancels_only_held_gestures() {
        let mut mouse = MouseAdapter::new();
        assert!(mouse.cursor_lost().is_none());

        mouse.cursor_moved(Vec2::new(5.0, 5.0));
        mouse.button(ElementState::Pressed);
        let cancel = mouse.cursor_lost();
        assert_eq!(cancel.map(|s| s.event), Some(PointerEvent::Cancel));
        assert!(!mouse.is_pressed());
        assert!(mouse.cursor_lost().is_none());
    }

    #[test]
    fn focus_loss_cancels() {
        let mut mouse = MouseAdapter::new();
        mouse.cursor_moved(Vec2::ZERO);
        mouse.button(ElementState::Pressed);
        let cancel = mouse.handle_event(&WindowEvent::Focused(false));
        assert_eq!(cancel.map(|s| s.event), Some(PointerEvent::Cancel));
        assert!(mouse.handle_event(&WindowEvent::Focused(true)).is_none());
    }

    #[test]
    fn moves_always_reported() {
        let mut mouse = MouseAdapter::new();
        let sample = mouse.cursor_moved(Vec2::new(1.5, 2.5));
        assert_eq!(sample.map(|s| s.event), Some(PointerEvent::move_to(1.5, 2.5)));
        assert_eq!(mouse.cursor(), Some(Vec2::new(1.5, 2.5)));
    }
}
