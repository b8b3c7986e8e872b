//! Builders for scripted pointer gestures.

use glam::Vec2;
use scenekit_input::{PointerEvent, PointerSample, PointerSource};

/// A single-contact gesture expressed as pointer events.
///
/// ```
/// use scenekit_testkit::Gesture;
///
/// let events = Gesture::press(0.0, 0.0).to(10.0, 0.0).release().into_events();
/// assert_eq!(events.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    events: Vec<PointerEvent>,
}

impl Gesture {
    /// Start a gesture with a down event at `(x, y)`.
    pub fn press(x: f32, y: f32) -> Self {
        Self {
            events: vec![PointerEvent::down(x, y)],
        }
    }

    /// A gesture made only of moves, as sent before any press.
    pub fn hover(points: &[(f32, f32)]) -> Self {
        Self {
            events: points
                .iter()
                .map(|&(x, y)| PointerEvent::move_to(x, y))
                .collect(),
        }
    }

    /// Move to an absolute position.
    pub fn to(mut self, x: f32, y: f32) -> Self {
        self.events.push(PointerEvent::move_to(x, y));
        self
    }

    /// Move through `steps` evenly spaced points ending at `(x, y)`.
    pub fn glide(mut self, x: f32, y: f32, steps: usize) -> Self {
        let start = self.last_position().unwrap_or(Vec2::ZERO);
        let end = Vec2::new(x, y);
        let steps = steps.max(1);
        for step in 1..=steps {
            let point = start.lerp(end, step as f32 / steps as f32);
            self.events.push(PointerEvent::Move { position: point });
        }
        self
    }

    /// End with an up event.
    pub fn release(mut self) -> Self {
        self.events.push(PointerEvent::Up);
        self
    }

    /// End with a cancel event.
    pub fn cancel(mut self) -> Self {
        self.events.push(PointerEvent::Cancel);
        self
    }

    /// Append another gesture after this one.
    pub fn then(mut self, other: Gesture) -> Self {
        self.events.extend(other.events);
        self
    }

    /// Last position any event of this gesture carried.
    pub fn last_position(&self) -> Option<Vec2> {
        self.events.iter().rev().find_map(PointerEvent::position)
    }

    /// The raw events.
    pub fn into_events(self) -> Vec<PointerEvent> {
        self.events
    }

    /// The events tagged with `source`.
    pub fn samples(&self, source: PointerSource) -> Vec<PointerSample> {
        self.events
            .iter()
            .map(|event| PointerSample::new(source, *event))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glide_ends_at_target() {
        let gesture = Gesture::press(0.0, 0.0).glide(10.0, 20.0, 4);
        assert_eq!(gesture.last_position(), Some(Vec2::new(10.0, 20.0)));
        assert_eq!(gesture.into_events().len(), 5);
    }

    #[test]
    fn samples_tag_source() {
        let samples = Gesture::press(1.0, 1.0).release().samples(PointerSource::Touch(3));
        assert!(samples
            .iter()
            .all(|sample| sample.source == PointerSource::Touch(3)));
    }

    #[test]
    fn then_concatenates() {
        let events = Gesture::hover(&[(1.0, 1.0)])
            .then(Gesture::press(0.0, 0.0).release())
            .into_events();
        assert_eq!(
            events,
            vec![
                PointerEvent::move_to(1.0, 1.0),
                PointerEvent::down(0.0, 0.0),
                PointerEvent::Up
            ]
        );
    }
}
