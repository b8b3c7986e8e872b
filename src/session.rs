use crate::config::SceneConfig;
use crate::scenario::ScenarioEvent;
use anyhow::{Context, Result};
use glam::Vec2;
use scenekit_behaviors::{
    BehaviorHost, DragRotationBehavior, ListenerScope, LogNotifier, Notification, Notifier,
    RecordingNotifier, SceneEvent, SelectionBehavior, SelectionSequencer, SequenceOutcome,
};
use scenekit_core::{Element, Orientation, RotationTarget, Scene};
use scenekit_input::{ElementState, MouseAdapter, PointerSample, TouchAdapter, TouchPhase};
use serde::Serialize;

/// Forwards to the log and keeps a copy for the run summary.
struct TeeNotifier {
    log: LogNotifier,
    recorder: RecordingNotifier,
}

impl Notifier for TeeNotifier {
    fn notify(&mut self, outcome: SequenceOutcome, message: &str) {
        self.log.notify(outcome, message);
        self.recorder.notify(outcome, message);
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ElementRotation {
    pub name: String,
    pub rotation: Orientation,
}

/// A scene built from configuration with its behaviors attached.
pub struct SceneSession {
    scene: Scene,
    host: BehaviorHost,
    mouse: MouseAdapter,
    touch: TouchAdapter,
    notifications: RecordingNotifier,
}

impl SceneSession {
    pub fn from_config(config: &SceneConfig) -> Result<Self> {
        config.validate()?;

        let mut scene = Scene::new();
        let mut host = BehaviorHost::new();

        for selectable in &config.selectables {
            scene
                .spawn_selectable(&selectable.name, &selectable.id)
                .with_context(|| format!("failed to add selectable `{}`", selectable.name))?;
        }
        for rotatable in &config.rotatables {
            let element = Element::new(&rotatable.name)
                .with_rotation(Orientation::from(rotatable.rotation));
            let handle = scene
                .spawn(element)
                .with_context(|| format!("failed to add rotatable `{}`", rotatable.name))?;
            host.attach(
                ListenerScope::Scene,
                Box::new(DragRotationBehavior::new(handle, config.rotation.sensitivity)),
            );
        }

        let notifications = RecordingNotifier::new();
        let sequencer = SelectionSequencer::new(config.sequence.expected.iter().cloned())?;
        host.attach(
            ListenerScope::Scene,
            Box::new(SelectionBehavior::new(
                sequencer,
                config.sequence.messages(),
                Box::new(TeeNotifier {
                    log: LogNotifier,
                    recorder: notifications.clone(),
                }),
            )),
        );

        tracing::info!(
            elements = scene.len(),
            behaviors = host.len(),
            "scene session ready"
        );

        Ok(Self {
            scene,
            host,
            mouse: MouseAdapter::new(),
            touch: TouchAdapter::new(),
            notifications,
        })
    }

    /// Translate one host event and dispatch whatever it maps to.
    ///
    /// Returns the scene events that were dispatched.
    pub fn apply(&mut self, event: &ScenarioEvent) -> Result<Vec<SceneEvent>> {
        let mut samples: Vec<PointerSample> = Vec::with_capacity(2);
        match event {
            ScenarioEvent::MouseDown { x, y } => {
                samples.extend(self.mouse.cursor_moved(Vec2::new(*x, *y)));
                samples.extend(self.mouse.button(ElementState::Pressed));
            }
            ScenarioEvent::MouseMove { x, y } => {
                samples.extend(self.mouse.cursor_moved(Vec2::new(*x, *y)));
            }
            ScenarioEvent::MouseUp => samples.extend(self.mouse.button(ElementState::Released)),
            ScenarioEvent::CursorLeft => samples.extend(self.mouse.cursor_lost()),
            ScenarioEvent::TouchStart { id, x, y } => {
                samples.extend(self.touch.contact(*id, TouchPhase::Started, Vec2::new(*x, *y)));
            }
            ScenarioEvent::TouchMove { id, x, y } => {
                samples.extend(self.touch.contact(*id, TouchPhase::Moved, Vec2::new(*x, *y)));
            }
            ScenarioEvent::TouchEnd { id, x, y } => {
                samples.extend(self.touch.contact(*id, TouchPhase::Ended, Vec2::new(*x, *y)));
            }
            ScenarioEvent::TouchCancel { id } => {
                samples.extend(self.touch.contact(*id, TouchPhase::Cancelled, Vec2::ZERO));
            }
            ScenarioEvent::Click { name } => {
                let target = self.scene.require(name)?;
                let event = SceneEvent::Click { target };
                self.host.dispatch(&mut self.scene, &event);
                return Ok(vec![event]);
            }
        }

        let events: Vec<SceneEvent> = samples.into_iter().map(SceneEvent::Pointer).collect();
        for event in &events {
            self.host.dispatch(&mut self.scene, event);
        }
        Ok(events)
    }

    /// Notifications delivered since the last call.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }

    /// Current rotation of every element, in spawn order.
    pub fn rotations(&self) -> Vec<ElementRotation> {
        self.scene
            .iter()
            .map(|(_, element)| ElementRotation {
                name: element.name().to_string(),
                rotation: element.rotation(),
            })
            .collect()
    }

    /// Detach every behavior, cancelling any in-flight drag.
    pub fn shutdown(&mut self) {
        self.host.detach_all(&mut self.scene);
    }
}
