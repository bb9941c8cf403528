//! Per-object animation, evaluated in closed form from elapsed seconds.

use serde::Serialize;

use crate::math::Vec3;
use crate::object::ObjectId;

/// Position, Euler rotation (radians) and uniform scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

impl Pose {
    pub fn at(position: Vec3) -> Self {
        Self { position, rotation: Vec3::ZERO, scale: 1.0 }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Behavior {
    Static,
    /// Tumble about x and y at `speed` rad/s.
    Spin { speed: f32 },
    /// Bob around the base height.
    Float { offset: f32 },
    /// Circle the room center in the xz plane.
    Orbit { angle: f32, speed: f32, radius: f32 },
    Pulse { offset: f32 },
    /// Copy another object's pose. Resolved after every other behavior.
    Follow { target: ObjectId },
}

impl Behavior {
    /// Pose at time `t` for an object resting at `base`. `Follow` returns
    /// `base`; the room substitutes the target's pose in a second pass.
    pub fn apply(&self, base: &Pose, t: f32) -> Pose {
        let mut pose = *base;
        match *self {
            Behavior::Static | Behavior::Follow { .. } => {}
            Behavior::Spin { speed } => {
                pose.rotation.x = base.rotation.x + speed * t;
                pose.rotation.y = base.rotation.y + speed * t;
            }
            Behavior::Float { offset } => {
                pose.position.y = base.position.y + 0.3 * (2.0 * t + offset).sin();
                pose.rotation.y = base.rotation.y + 0.3 * t;
            }
            Behavior::Orbit { angle, speed, radius } => {
                let a = angle + speed * t;
                pose.position.x = radius * a.cos();
                pose.position.z = radius * a.sin();
            }
            Behavior::Pulse { offset } => {
                pose.scale = 1.0 + 0.1 * (2.0 * t + offset).sin();
            }
        }
        pose
    }

    pub fn follow_target(&self) -> Option<ObjectId> {
        match *self {
            Behavior::Follow { target } => Some(target),
            _ => None,
        }
    }
}
