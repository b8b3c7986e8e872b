//! Euler orientation expressed in degrees.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Rotation of a scene element as (x, y, z) angles in degrees.
///
/// Values are unbounded: repeated drags may push an axis past a full turn,
/// which is harmless because the renderer wraps angles visually.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Orientation(pub Vec3);

impl Orientation {
    /// No rotation on any axis.
    pub const ZERO: Self = Self(Vec3::ZERO);

    /// Create an orientation from per-axis degrees.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Rotation around the X axis (pitch) in degrees.
    pub fn x(&self) -> f32 {
        self.0.x
    }

    /// Rotation around the Y axis (yaw) in degrees.
    pub fn y(&self) -> f32 {
        self.0.y
    }

    /// Rotation around the Z axis (roll) in degrees.
    pub fn z(&self) -> f32 {
        self.0.z
    }

    /// Add per-axis degree offsets in place.
    pub fn accumulate(&mut self, delta: Vec3) {
        self.0 += delta;
    }
}

impl From<[f32; 3]> for Orientation {
    fn from(value: [f32; 3]) -> Self {
        Self(Vec3::from_array(value))
    }
}

/// Anything whose orientation can be read and written back.
///
/// Mirrors the host's `getAttribute("rotation")` / `setAttribute("rotation")`
/// pair: callers read the current value, modify it, and write the whole
/// value back.
pub trait RotationTarget {
    /// Current orientation.
    fn rotation(&self) -> Orientation;

    /// Replace the stored orientation.
    fn set_rotation(&mut self, rotation: Orientation);
}

impl RotationTarget for Orientation {
    fn rotation(&self) -> Orientation {
        *self
    }

    fn set_rotation(&mut self, rotation: Orientation) {
        *self = rotation;
    }
}
