//! Click handling: ray against bounding spheres, nearest hit wins.

use models::{blog_post, experience, offering, project, testimonial};
use serde::Serialize;

use crate::math::Vec3;
use crate::object::{ClickAction, ObjectId};
use crate::room::{Room, SceneContent};
use crate::section::SectionKind;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub dir: Vec3,
}

impl Ray {
    /// Distance to the first intersection with a sphere, if any lies ahead.
    pub fn hit_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = center - self.origin;
        let along = oc.dot(self.dir);
        let miss2 = oc.dot(oc) - along * along;
        let r2 = radius * radius;
        if miss2 > r2 {
            return None;
        }
        let half_chord = (r2 - miss2).sqrt();
        let near = along - half_chord;
        let far = along + half_chord;
        if near >= 0.0 {
            Some(near)
        } else if far >= 0.0 {
            Some(far)
        } else {
            None
        }
    }
}

/// Detail panel opened by a click.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "record", rename_all = "camelCase")]
pub enum Overlay {
    About,
    Contact,
    Project(project::Model),
    Experience(experience::Model),
    Service(offering::Model),
    Testimonial(testimonial::Model),
    BlogPost(blog_post::Model),
}

impl Overlay {
    /// `None` when the index has no record behind it (placeholder cards).
    pub fn resolve(action: ClickAction, content: &SceneContent) -> Option<Overlay> {
        match action {
            ClickAction::About => Some(Overlay::About),
            ClickAction::Contact => Some(Overlay::Contact),
            ClickAction::Project(i) => content.projects.get(i).cloned().map(Overlay::Project),
            ClickAction::Experience(i) => content.experiences.get(i).cloned().map(Overlay::Experience),
            ClickAction::Service(i) => content.services.get(i).cloned().map(Overlay::Service),
            ClickAction::Testimonial(i) => content.testimonials.get(i).cloned().map(Overlay::Testimonial),
            ClickAction::BlogPost(i) => content.blog.get(i).cloned().map(Overlay::BlogPost),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub section: SectionKind,
    pub object: ObjectId,
    pub action: ClickAction,
    pub distance: f32,
}

/// Nearest clickable object along `ray` across the given rooms.
pub fn pick<'a>(rooms: impl IntoIterator<Item = &'a Room>, ray: &Ray) -> Option<Hit> {
    let mut best: Option<Hit> = None;
    for room in rooms {
        for (id, obj) in room.clickable() {
            let Some(action) = obj.click else { continue };
            let center = room.origin + obj.pose.position;
            let Some(distance) = ray.hit_sphere(center, obj.bounding_radius()) else {
                continue;
            };
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(Hit { section: room.section, object: id, action, distance });
            }
        }
    }
    best
}
