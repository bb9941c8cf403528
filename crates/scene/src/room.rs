//! Room layout per section, built from a content snapshot.

use std::f32::consts::{PI, TAU};

use common::Collection;
use models::{blog_post, experience, offering, project, skill, testimonial};
use portal::{fetch_collection, ContentSource};
use tracing::{debug, info};

use crate::behavior::{Behavior, Pose};
use crate::math::Vec3;
use crate::object::{ClickAction, ObjectId, SceneObject, Shape};
use crate::section::SectionKind;

/// Distance between neighbouring rooms along -z.
pub const ROOM_SPACING: f32 = 30.0;

pub const SKILLS_SHOWN: usize = 8;
pub const PROJECTS_SHOWN: usize = 6;
pub const EXPERIENCES_SHOWN: usize = 5;
pub const SERVICES_SHOWN: usize = 6;
pub const TESTIMONIALS_SHOWN: usize = 5;
pub const POSTS_SHOWN: usize = 6;

/// Cards shown when no services are stored.
pub const PLACEHOLDER_SERVICES: [(&str, &str); 6] = [
    ("💻", "Web Dev"),
    ("📱", "Mobile"),
    ("🎨", "UI/UX"),
    ("🤖", "AI"),
    ("🔒", "Backend"),
    ("⚡", "Optimization"),
];

const HERO_STATS: [(&str, f32, f32); 3] = [("2+ Years", -5.0, -3.0), ("50+ Projects", 5.0, -3.0), ("100% Satisfaction", 0.0, 5.0)];
const CONTACT_METHODS: [(&str, u32); 4] = [("📧", 0x06b6d4), ("💬", 0x10b981), ("📞", 0x8b5cf6), ("📍", 0xf59e0b)];

/// Everything the scene shows, fetched once.
#[derive(Debug, Clone, Default)]
pub struct SceneContent {
    pub skills: Vec<skill::Model>,
    pub projects: Vec<project::Model>,
    pub experiences: Vec<experience::Model>,
    pub services: Vec<offering::Model>,
    pub testimonials: Vec<testimonial::Model>,
    pub blog: Vec<blog_post::Model>,
}

impl SceneContent {
    /// Fetch all six collections; a failed collection is empty.
    pub async fn load<S: ContentSource + ?Sized>(source: &S) -> Self {
        let (skills, projects, experiences, services, testimonials, blog) = tokio::join!(
            fetch_collection(source, Collection::Skills),
            fetch_collection(source, Collection::Projects),
            fetch_collection(source, Collection::Experiences),
            fetch_collection(source, Collection::Services),
            fetch_collection(source, Collection::Testimonials),
            fetch_collection(source, Collection::Blog),
        );
        let content = Self { skills, projects, experiences, services, testimonials, blog };
        info!(
            skills = content.skills.len(),
            projects = content.projects.len(),
            services = content.services.len(),
            "scene content loaded"
        );
        content
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub section: SectionKind,
    pub origin: Vec3,
    pub objects: Vec<SceneObject>,
}

/// `n` evenly spaced angles around a circle.
fn ring(n: usize) -> impl Iterator<Item = (usize, f32)> {
    (0..n).map(move |j| (j, j as f32 / n as f32 * TAU))
}

/// Three-column grid slot centred on x = 0.
fn grid(j: usize, dx: f32, dy: f32) -> Vec3 {
    let col = (j % 3) as f32;
    let row = (j / 3) as f32;
    Vec3::new((col - 1.0) * dx, 2.0 + row * dy, 0.0)
}

fn orbiter(shape: Shape, color: u32, angle: f32, radius: f32, y: f32, speed: f32) -> SceneObject {
    let at = Vec3::new(radius * angle.cos(), y, radius * angle.sin());
    SceneObject::new(shape, color, Pose::at(at)).with_behavior(Behavior::Orbit { angle, speed, radius })
}

impl Room {
    pub fn origin_for(section: SectionKind) -> Vec3 {
        Vec3::new(0.0, 0.0, -ROOM_SPACING * section.index() as f32)
    }

    pub fn build(section: SectionKind, content: &SceneContent) -> Self {
        let color = section.color();
        let mut objects = vec![SceneObject::new(
            Shape::Box { width: 20.0, height: 0.5, depth: 20.0 },
            color,
            Pose::at(Vec3::new(0.0, -1.5, 0.0)),
        )];

        match section {
            SectionKind::Hero => {
                objects.push(
                    SceneObject::new(Shape::Torus { radius: 2.5, tube: 0.6 }, 0x06b6d4, Pose::at(Vec3::new(0.0, 3.0, 0.0)))
                        .wireframe()
                        .with_behavior(Behavior::Spin { speed: 0.6 }),
                );
                for (j, (label, x, z)) in HERO_STATS.into_iter().enumerate() {
                    objects.push(
                        SceneObject::new(cube(2.0), 0x06b6d4, Pose::at(Vec3::new(x, 1.0, z)))
                            .labeled(label)
                            .with_behavior(Behavior::Float { offset: j as f32 * PI / 3.0 }),
                    );
                }
            }
            SectionKind::About => {
                objects.push(
                    SceneObject::new(Shape::Sphere { radius: 2.0 }, 0x10b981, Pose::at(Vec3::new(0.0, 3.0, 0.0)))
                        .wireframe()
                        .clickable(ClickAction::About),
                );
                for (_, angle) in ring(4) {
                    objects.push(orbiter(cube(1.5), 0x10b981, angle, 5.0, 3.0, 0.3));
                }
            }
            SectionKind::Skills => {
                let shown = &content.skills[..content.skills.len().min(SKILLS_SHOWN)];
                for (j, angle) in ring(shown.len()) {
                    let mut hex = orbiter(Shape::Cylinder { radius: 0.9, height: 0.3, sides: 6 }, 0x8b5cf6, angle, 6.0, 2.0, 0.2)
                        .labeled(shown[j].name.clone());
                    hex.base.rotation.x = PI / 2.0;
                    hex.pose = hex.base;
                    objects.push(hex);
                }
            }
            SectionKind::Projects => {
                for (j, p) in content.projects.iter().take(PROJECTS_SHOWN).enumerate() {
                    let screen = ObjectId(objects.len());
                    objects.push(
                        SceneObject::new(Shape::Box { width: 3.0, height: 2.5, depth: 0.2 }, 0x3b82f6, Pose::at(grid(j, 5.0, 3.5)))
                            .labeled(p.title.clone())
                            .with_behavior(Behavior::Float { offset: j as f32 * PI / 6.0 })
                            .clickable(ClickAction::Project(j)),
                    );
                    objects.push(
                        SceneObject::new(Shape::Box { width: 3.3, height: 2.8, depth: 0.3 }, 0x3b82f6, Pose::at(grid(j, 5.0, 3.5)))
                            .with_behavior(Behavior::Follow { target: screen }),
                    );
                }
            }
            SectionKind::Experience => {
                for (j, e) in content.experiences.iter().take(EXPERIENCES_SHOWN).enumerate() {
                    let x = (j as f32 - 2.0) * 4.0;
                    objects.push(
                        SceneObject::new(Shape::Sphere { radius: 0.8 }, 0xf59e0b, Pose::at(Vec3::new(x, 2.0, 0.0)))
                            .labeled(e.company.clone())
                            .with_behavior(Behavior::Pulse { offset: j as f32 * PI / 5.0 })
                            .clickable(ClickAction::Experience(j)),
                    );
                }
            }
            SectionKind::Services => {
                let labels: Vec<String> = if content.services.is_empty() {
                    PLACEHOLDER_SERVICES.iter().map(|(icon, title)| format!("{icon} {title}")).collect()
                } else {
                    content
                        .services
                        .iter()
                        .take(SERVICES_SHOWN)
                        .map(|s| format!("{} {}", s.icon.glyph(), s.title))
                        .collect()
                };
                for (j, label) in labels.into_iter().enumerate() {
                    objects.push(
                        SceneObject::new(Shape::Box { width: 2.5, height: 3.0, depth: 0.3 }, 0xec4899, Pose::at(grid(j, 4.5, 4.0)))
                            .labeled(label)
                            .with_behavior(Behavior::Float { offset: j as f32 * PI / 6.0 })
                            .clickable(ClickAction::Service(j)),
                    );
                }
            }
            SectionKind::Testimonials => {
                let shown = &content.testimonials[..content.testimonials.len().min(TESTIMONIALS_SHOWN)];
                for (j, angle) in ring(shown.len()) {
                    objects.push(
                        orbiter(Shape::Sphere { radius: 0.7 }, 0xeab308, angle, 5.0, 2.5, 0.25)
                            .labeled(shown[j].name.clone())
                            .clickable(ClickAction::Testimonial(j)),
                    );
                }
            }
            SectionKind::Blog => {
                for (j, post) in content.blog.iter().take(POSTS_SHOWN).enumerate() {
                    objects.push(
                        SceneObject::new(Shape::Box { width: 2.5, height: 3.5, depth: 0.3 }, 0x06b6d4, Pose::at(grid(j, 4.5, 4.5)))
                            .labeled(post.title.clone())
                            .with_behavior(Behavior::Float { offset: j as f32 * PI / 6.0 })
                            .clickable(ClickAction::BlogPost(j)),
                    );
                }
            }
            SectionKind::Contact => {
                for (j, angle) in ring(CONTACT_METHODS.len()) {
                    let (icon, tint) = CONTACT_METHODS[j];
                    objects.push(orbiter(Shape::Sphere { radius: 0.8 }, tint, angle, 5.0, 2.5, 0.4).labeled(icon));
                }
                objects.push(
                    SceneObject::new(
                        Shape::Cylinder { radius: 2.0, height: 1.0, sides: 32 },
                        0x10b981,
                        Pose::at(Vec3::new(0.0, 2.0, 0.0)),
                    )
                    .with_behavior(Behavior::Pulse { offset: 0.0 })
                    .clickable(ClickAction::Contact),
                );
            }
        }

        objects.push(
            SceneObject::new(Shape::Box { width: 20.0, height: 8.0, depth: 20.0 }, color, Pose::at(Vec3::new(0.0, 2.0, 0.0)))
                .wireframe(),
        );

        debug!(%section, objects = objects.len(), "room built");
        Self { section, origin: Self::origin_for(section), objects }
    }

    /// Advance every object to time `t`, then resolve followers.
    pub fn animate(&mut self, t: f32) {
        for o in &mut self.objects {
            o.pose = o.behavior.apply(&o.base, t);
        }
        for i in 0..self.objects.len() {
            let Some(ObjectId(target)) = self.objects[i].behavior.follow_target() else {
                continue;
            };
            if let Some(leader) = self.objects.get(target).map(|o| o.pose) {
                let follower = &mut self.objects[i].pose;
                follower.position = leader.position;
                follower.rotation = leader.rotation;
            }
        }
    }

    pub fn world_position(&self, id: ObjectId) -> Option<Vec3> {
        self.objects.get(id.0).map(|o| self.origin + o.pose.position)
    }

    pub fn clickable(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter().enumerate().filter(|(_, o)| o.click.is_some()).map(|(i, o)| (ObjectId(i), o))
    }
}

fn cube(side: f32) -> Shape {
    Shape::Box { width: side, height: side, depth: side }
}
