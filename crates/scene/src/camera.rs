use serde::Serialize;

use crate::math::Vec3;
use crate::picking::Ray;
use crate::room::ROOM_SPACING;
use crate::section::SectionKind;

/// Fraction of the remaining distance covered per 60 Hz frame.
const EASE_PER_FRAME: f32 = 0.05;
const FRAME_RATE: f32 = 60.0;

/// Perspective camera that glides between rooms and leans with the pointer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub fov_y_degrees: f32,
    pub aspect: f32,
    current_z: f32,
    target_z: f32,
    pointer: (f32, f32),
    position: Vec3,
    look_at: Vec3,
}

impl Camera {
    pub const FOV_Y_DEGREES: f32 = 75.0;

    pub fn new(aspect: f32) -> Self {
        let mut cam = Self {
            fov_y_degrees: Self::FOV_Y_DEGREES,
            aspect,
            current_z: 0.0,
            target_z: 0.0,
            pointer: (0.0, 0.0),
            position: Vec3::ZERO,
            look_at: Vec3::ZERO,
        };
        cam.place();
        cam
    }

    pub fn set_target(&mut self, section: SectionKind) {
        self.target_z = -ROOM_SPACING * section.index() as f32;
    }

    /// Pointer in normalized device coordinates, `[-1, 1]` on both axes.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = (x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0));
        self.place();
    }

    /// Ease toward the target; frame-rate independent.
    pub fn update(&mut self, delta: f32) {
        let frames = delta.max(0.0) * FRAME_RATE;
        let k = 1.0 - (1.0 - EASE_PER_FRAME).powf(frames);
        self.current_z += (self.target_z - self.current_z) * k;
        self.place();
    }

    fn place(&mut self) {
        let (px, py) = self.pointer;
        self.position = Vec3::new(px * 3.0, 3.0 + py * 2.0, 12.0 + self.current_z);
        self.look_at = Vec3::new(0.0, 0.0, self.current_z - 5.0);
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    pub fn current_z(&self) -> f32 {
        self.current_z
    }

    pub fn target_z(&self) -> f32 {
        self.target_z
    }

    /// Ray from the eye through a point in normalized device coordinates.
    pub fn ray(&self, ndc_x: f32, ndc_y: f32) -> Ray {
        let forward = (self.look_at - self.position).normalize();
        let right = forward.cross(Vec3::UP).normalize();
        let up = right.cross(forward);
        let half = (self.fov_y_degrees.to_radians() * 0.5).tan();
        let dir = forward + right * (ndc_x * half * self.aspect) + up * (ndc_y * half);
        Ray { origin: self.position, dir: dir.normalize() }
    }

    /// Inverse of [`Camera::ray`]: normalized device coordinates of a world
    /// point, `None` when it is behind the eye.
    pub fn project(&self, point: Vec3) -> Option<(f32, f32)> {
        let forward = (self.look_at - self.position).normalize();
        let right = forward.cross(Vec3::UP).normalize();
        let up = right.cross(forward);
        let rel = point - self.position;
        let depth = rel.dot(forward);
        if depth <= 0.0 {
            return None;
        }
        let half = (self.fov_y_degrees.to_radians() * 0.5).tan();
        Some((rel.dot(right) / (depth * half * self.aspect), rel.dot(up) / (depth * half)))
    }
}
