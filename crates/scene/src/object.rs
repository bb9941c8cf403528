use serde::Serialize;

use crate::behavior::{Behavior, Pose};

/// Index of an object within its room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ObjectId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Box { width: f32, height: f32, depth: f32 },
    Sphere { radius: f32 },
    Torus { radius: f32, tube: f32 },
    /// `sides == 6` draws the skill hexagons.
    Cylinder { radius: f32, height: f32, sides: u8 },
}

impl Shape {
    /// Radius of a sphere enclosing the shape at unit scale.
    pub fn bounding_radius(&self) -> f32 {
        match *self {
            Shape::Box { width, height, depth } => 0.5 * (width * width + height * height + depth * depth).sqrt(),
            Shape::Sphere { radius } => radius,
            Shape::Torus { radius, tube } => radius + tube,
            Shape::Cylinder { radius, height, .. } => (radius * radius + 0.25 * height * height).sqrt(),
        }
    }
}

/// What a click on an object opens. Indices point into the scene's
/// content snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "camelCase")]
pub enum ClickAction {
    About,
    Contact,
    Project(usize),
    Experience(usize),
    Service(usize),
    Testimonial(usize),
    BlogPost(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneObject {
    pub shape: Shape,
    pub color: u32,
    pub wireframe: bool,
    pub label: Option<String>,
    /// Resting pose, room-local.
    pub base: Pose,
    /// Pose after the last tick, room-local.
    pub pose: Pose,
    pub behavior: Behavior,
    pub click: Option<ClickAction>,
}

impl SceneObject {
    pub fn new(shape: Shape, color: u32, base: Pose) -> Self {
        Self {
            shape,
            color,
            wireframe: false,
            label: None,
            base,
            pose: base,
            behavior: Behavior::Static,
            click: None,
        }
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn clickable(mut self, action: ClickAction) -> Self {
        self.click = Some(action);
        self
    }

    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn wireframe(mut self) -> Self {
        self.wireframe = true;
        self
    }

    pub fn bounding_radius(&self) -> f32 {
        self.shape.bounding_radius() * self.pose.scale
    }
}
