#![warn(missing_docs)]
//! Core primitives shared across the workspace.

pub mod orientation;
pub mod scene;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use orientation::{Orientation, RotationTarget};
pub use scene::{Element, ElementHandle, Scene, SceneError};

/// Fixed tick type used to order scripted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SimTick(pub u64);

impl SimTick {
    /// First tick in any deterministic timeline.
    pub const ZERO: Self = Self(0);

    /// Advance by `delta` ticks.
    pub fn advance(self, delta: u64) -> Self {
        Self(self.0 + delta)
    }
}
