use anyhow::{bail, Context, Result};
use scenekit_core::SimTick;
use serde::{Deserialize, Serialize};
use std::{collections::VecDeque, fs, path::Path};

#[derive(Debug, Deserialize)]
struct ScenarioFile {
    steps: Vec<ScenarioStepDef>,
}

#[derive(Debug, Clone, Deserialize)]
struct ScenarioStepDef {
    tick: u64,
    event: ScenarioEvent,
}

/// Host input expressed the way a window system would deliver it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioEvent {
    /// Cursor moves to `(x, y)`, then a button is pressed.
    MouseDown { x: f32, y: f32 },
    MouseMove { x: f32, y: f32 },
    MouseUp,
    /// Cursor leaves the window.
    CursorLeft,
    TouchStart { id: u64, x: f32, y: f32 },
    TouchMove { id: u64, x: f32, y: f32 },
    TouchEnd {
        id: u64,
        #[serde(default)]
        x: f32,
        #[serde(default)]
        y: f32,
    },
    TouchCancel { id: u64 },
    /// Click on the element with this name.
    Click { name: String },
}

#[derive(Debug, Clone)]
struct ScenarioStep {
    tick: SimTick,
    event: ScenarioEvent,
}

/// Deterministic input scenario runner.
///
/// Scenarios are a list of `{tick, event}` steps, delivered in file order.
#[derive(Debug)]
pub struct ScenarioPlayer {
    pending: VecDeque<ScenarioStep>,
    last_tick: SimTick,
}

impl ScenarioPlayer {
    /// Load a scenario from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load a scenario from an in-memory JSON string.
    pub fn from_json(contents: &str) -> Result<Self> {
        let file: ScenarioFile =
            serde_json::from_str(contents).context("scenario is not valid JSON")?;
        let Some(last) = file.steps.last() else {
            bail!("scenario contains no steps");
        };
        let last_tick = SimTick(last.tick);

        if let Some(pair) = file.steps.windows(2).find(|pair| pair[1].tick < pair[0].tick) {
            bail!(
                "scenario steps must be sorted by tick (tick {} follows tick {})",
                pair[1].tick,
                pair[0].tick
            );
        }
        let blank_click = file.steps.iter().find(|step| {
            matches!(&step.event, ScenarioEvent::Click { name } if name.trim().is_empty())
        });
        if let Some(step) = blank_click {
            bail!("click at tick {} names no element", step.tick);
        }

        let pending = file
            .steps
            .into_iter()
            .map(|step| ScenarioStep {
                tick: SimTick(step.tick),
                event: step.event,
            })
            .collect();
        Ok(Self { pending, last_tick })
    }

    /// Drain and return all events scheduled for ticks `<= tick`.
    pub fn drain_ready(&mut self, tick: SimTick) -> Vec<ScenarioEvent> {
        let mut events = Vec::new();
        while let Some(step) = self.pending.front() {
            if step.tick > tick {
                break;
            }
            if let Some(step) = self.pending.pop_front() {
                events.push(step.event);
            }
        }
        events
    }

    /// Tick of the earliest step not yet drained.
    pub fn next_tick(&self) -> Option<SimTick> {
        self.pending.front().map(|step| step.tick)
    }

    /// Tick of the final step.
    pub fn last_tick(&self) -> SimTick {
        self.last_tick
    }
}
