use std::f32::consts::TAU;

use serde::Serialize;

use crate::math::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointLight {
    pub position: Vec3,
    pub color: u32,
    pub intensity: f32,
    pub distance: f32,
}

/// Three cyan point lights circling above the camera's current room.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lights(pub [PointLight; 3]);

impl Lights {
    pub const RADIUS: f32 = 15.0;

    pub fn new() -> Self {
        let light = PointLight { position: Vec3::ZERO, color: 0x06b6d4, intensity: 2.0, distance: 50.0 };
        let mut lights = Self([light; 3]);
        lights.update(0.0, 0.0);
        lights
    }

    pub fn update(&mut self, t: f32, current_z: f32) {
        for (i, light) in self.0.iter_mut().enumerate() {
            let phase = i as f32;
            let angle = 0.3 * t + phase * TAU / 3.0;
            light.position = Vec3::new(
                Self::RADIUS * angle.cos(),
                10.0 + 3.0 * (t + phase).sin(),
                Self::RADIUS * angle.sin() + current_z,
            );
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointLight> {
        self.0.iter()
    }
}

impl Default for Lights {
    fn default() -> Self {
        Self::new()
    }
}
