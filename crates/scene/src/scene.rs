use portal::ContentSource;
use tracing::{debug, info};

use crate::camera::Camera;
use crate::lights::Lights;
use crate::picking::{self, Overlay};
use crate::room::{Room, SceneContent};
use crate::section::SectionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    W,
    S,
    Escape,
}

/// Requests the scene makes of its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    /// Leave the 3D view; the owner drops the scene.
    Exit,
}

pub struct Scene {
    content: SceneContent,
    current: SectionKind,
    rooms: Vec<Option<Room>>,
    camera: Camera,
    lights: Lights,
    overlay: Option<Overlay>,
    elapsed: f32,
}

impl Scene {
    /// Wire a scene over an already fetched snapshot, standing in the hero room.
    pub fn new(content: SceneContent, aspect: f32) -> Self {
        let mut scene = Self {
            content,
            current: SectionKind::Hero,
            rooms: vec![None; SectionKind::ALL.len()],
            camera: Camera::new(aspect),
            lights: Lights::new(),
            overlay: None,
            elapsed: 0.0,
        };
        scene.enter(SectionKind::Hero);
        scene
    }

    /// Fetch every collection, then build. Nothing is suspended after this.
    pub async fn load<S: ContentSource + ?Sized>(source: &S, aspect: f32) -> Self {
        let content = SceneContent::load(source).await;
        info!("scene ready");
        Self::new(content, aspect)
    }

    pub fn current(&self) -> SectionKind {
        self.current
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn lights(&self) -> &Lights {
        &self.lights
    }

    pub fn content(&self) -> &SceneContent {
        &self.content
    }

    /// `None` until the section has been visited.
    pub fn room(&self, section: SectionKind) -> Option<&Room> {
        self.rooms.get(section.index()).and_then(Option::as_ref)
    }

    pub fn built_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().flatten()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn key(&mut self, key: Key) -> Option<SceneCommand> {
        match key {
            Key::Up | Key::W => {
                if let Some(prev) = self.current.prev() {
                    self.enter(prev);
                }
                None
            }
            Key::Down | Key::S => {
                if let Some(next) = self.current.next() {
                    self.enter(next);
                }
                None
            }
            Key::Escape => {
                if self.overlay.take().is_some() {
                    None
                } else {
                    Some(SceneCommand::Exit)
                }
            }
        }
    }

    /// Minimap navigation.
    pub fn jump_to(&mut self, section: SectionKind) {
        self.enter(section);
    }

    pub fn pointer_moved(&mut self, ndc_x: f32, ndc_y: f32) {
        self.camera.set_pointer(ndc_x, ndc_y);
    }

    /// Cast through the click point; the nearest clickable object opens its
    /// overlay. Placeholder cards absorb the click without opening anything.
    pub fn click(&mut self, ndc_x: f32, ndc_y: f32) -> Option<&Overlay> {
        let ray = self.camera.ray(ndc_x, ndc_y);
        let hit = picking::pick(self.rooms.iter().flatten(), &ray)?;
        debug!(section = %hit.section, object = hit.object.0, distance = hit.distance, "scene click");
        let overlay = Overlay::resolve(hit.action, &self.content)?;
        self.overlay = Some(overlay);
        self.overlay.as_ref()
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    /// Advance by `delta` seconds.
    pub fn tick(&mut self, delta: f32) {
        self.elapsed += delta.max(0.0);
        self.camera.update(delta);
        self.lights.update(self.elapsed, self.camera.current_z());
        for room in self.rooms.iter_mut().flatten() {
            room.animate(self.elapsed);
        }
    }

    fn enter(&mut self, section: SectionKind) {
        self.current = section;
        self.camera.set_target(section);
        let slot = &mut self.rooms[section.index()];
        if slot.is_none() {
            let mut room = Room::build(section, &self.content);
            room.animate(self.elapsed);
            *slot = Some(room);
        }
        debug!(%section, "scene section");
    }
}
