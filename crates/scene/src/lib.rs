//! Decorative 3D walk-through of the portfolio.
//!
//! Pure state: no renderer, no persistence. The caller feeds input and
//! elapsed time and reads back poses, camera and lights to draw.

pub mod behavior;
pub mod camera;
pub mod lights;
pub mod math;
pub mod object;
pub mod picking;
pub mod room;
pub mod scene;
pub mod section;

pub use behavior::{Behavior, Pose};
pub use camera::Camera;
pub use math::Vec3;
pub use object::{ClickAction, ObjectId, SceneObject, Shape};
pub use picking::{Overlay, Ray};
pub use room::{Room, SceneContent};
pub use scene::{Key, Scene, SceneCommand};
pub use section::{SectionKind, SceneError};
