use crate::config::SceneConfig;
use crate::scenario::ScenarioPlayer;
use crate::session::{ElementRotation, SceneSession};
use anyhow::{Context, Result};
use scenekit_behaviors::Notification;
use scenekit_core::SimTick;
use scenekit_testkit::{EventRecord, JsonlSink};
use serde::Serialize;
use std::path::PathBuf;

pub struct HeadlessConfig {
    pub scene: SceneConfig,
    pub scenario: Option<PathBuf>,
    pub event_log: Option<PathBuf>,
    pub max_ticks: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub notifications: Vec<Notification>,
    pub elements: Vec<ElementRotation>,
}

pub fn run(cfg: HeadlessConfig) -> Result<RunSummary> {
    let mut session = SceneSession::from_config(&cfg.scene)?;

    let mut player = match cfg.scenario.as_deref() {
        Some(path) => Some(
            ScenarioPlayer::from_path(path)
                .with_context(|| format!("failed to load scenario {}", path.display()))?,
        ),
        None => None,
    };

    let mut sink = match cfg.event_log.as_deref() {
        Some(path) => Some(
            JsonlSink::create(path)
                .with_context(|| format!("failed to create event log {}", path.display()))?,
        ),
        None => None,
    };

    let final_tick = player.as_ref().map_or(0, |p| p.last_tick().0);
    let final_tick = match cfg.max_ticks {
        Some(max) if max < final_tick => {
            tracing::warn!(max, final_tick, "scenario truncated by --max-ticks");
            max
        }
        _ => final_tick,
    };

    let mut notifications = Vec::new();
    let mut tick = SimTick::ZERO;
    if let Some(player) = player.as_mut() {
        // Jump straight to each scheduled tick; empty ticks have nothing to dispatch.
        while let Some(next) = player.next_tick() {
            if next.0 > final_tick {
                tick = SimTick(final_tick);
                break;
            }
            tick = next;

            for event in player.drain_ready(tick) {
                let dispatched = session
                    .apply(&event)
                    .with_context(|| format!("scenario event at tick {} failed", tick.0))?;
                if let Some(sink) = sink.as_mut() {
                    for scene_event in &dispatched {
                        sink.write(&EventRecord {
                            tick,
                            kind: "input",
                            payload: scene_event,
                        })?;
                    }
                }
            }

            for notification in session.take_notifications() {
                if let Some(sink) = sink.as_mut() {
                    sink.write(&EventRecord {
                        tick,
                        kind: "notification",
                        payload: &notification,
                    })?;
                }
                notifications.push(notification);
            }
        }
    } else {
        tracing::warn!("no scenario given; reporting the initial scene");
    }

    session.shutdown();
    let summary = RunSummary {
        ticks: tick.0,
        notifications,
        elements: session.rotations(),
    };

    if let Some(sink) = sink.as_mut() {
        sink.write(&EventRecord {
            tick,
            kind: "summary",
            payload: &summary.elements,
        })?;
        sink.flush()?;
    }

    Ok(summary)
}
