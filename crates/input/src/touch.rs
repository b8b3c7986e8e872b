//! Touch adapter.

use crate::{to_screen, PointerEvent, PointerSample, PointerSource};
use glam::Vec2;
use winit::event::{Touch, TouchPhase, WindowEvent};

/// Turns touch events into pointer samples for the first active contact.
///
/// Only one finger is tracked. Contacts that start while another is active
/// are ignored for their whole lifetime.
#[derive(Debug, Default)]
pub struct TouchAdapter {
    active: Option<u64>,
}

impl TouchAdapter {
    /// Create an adapter with no active contact.
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the contact currently driving the gesture.
    pub fn active_contact(&self) -> Option<u64> {
        self.active
    }

    /// Process a window event, returning a sample if it maps to one.
    pub fn handle_event(&mut self, event: &WindowEvent) -> Option<PointerSample> {
        match event {
            WindowEvent::Touch(Touch {
                id,
                phase,
                location,
                ..
            }) => self.contact(*id, *phase, to_screen(*location)),
            _ => None,
        }
    }

    /// Process one contact update.
    pub fn contact(&mut self, id: u64, phase: TouchPhase, position: Vec2) -> Option<PointerSample> {
        match phase {
            TouchPhase::Started => {
                if let Some(active) = self.active {
                    tracing::trace!(id, active, "ignoring secondary touch contact");
                    return None;
                }
                self.active = Some(id);
                Some(self.sample(id, PointerEvent::Down { position }))
            }
            TouchPhase::Moved => {
                if self.active != Some(id) {
                    return None;
                }
                Some(self.sample(id, PointerEvent::Move { position }))
            }
            TouchPhase::Ended => self.release(id, PointerEvent::Up),
            TouchPhase::Cancelled => self.release(id, PointerEvent::Cancel),
        }
    }

    fn release(&mut self, id: u64, event: PointerEvent) -> Option<PointerSample> {
        if self.active != Some(id) {
            return None;
        }
        self.active = None;
        Some(self.sample(id, event))
    }

    fn sample(&self, id: u64, event: PointerEvent) -> PointerSample {
        PointerSample::new(PointerSource::Touch(id), event)
    }
}
