use async_trait::async_trait;
use common::Collection;
use portal::{ContentSource, FetchError};
use serde_json::{json, Value};

use scene::{Key, Overlay, Scene, SceneCommand, SectionKind};

const STAMP: &str = "2024-01-01T00:00:00Z";

fn id(n: usize) -> String {
    format!("00000000-0000-0000-0000-{n:012}")
}

struct Fixture {
    services: bool,
}

#[async_trait]
impl ContentSource for Fixture {
    async fn fetch_json(&self, collection: Collection) -> Result<Value, FetchError> {
        let rows: Vec<Value> = match collection {
            Collection::Projects => ["NextTalk", "U-Plus"]
                .iter()
                .enumerate()
                .map(|(i, title)| {
                    json!({
                        "id": id(i + 1), "title": title, "description": "d", "technologies": ["Rust"],
                        "featured": false, "order": i, "version": 1, "createdAt": STAMP, "updatedAt": STAMP
                    })
                })
                .collect(),
            Collection::Skills => (0..10)
                .map(|i| {
                    json!({
                        "id": id(100 + i), "name": format!("skill {i}"), "icon": "SiRust", "category": "Backend",
                        "level": 50, "order": i, "version": 1, "createdAt": STAMP, "updatedAt": STAMP
                    })
                })
                .collect(),
            Collection::Services if self.services => vec![json!({
                "id": id(200), "title": "Web", "description": "Sites", "icon": "web", "features": [],
                "order": 0, "version": 1, "createdAt": STAMP, "updatedAt": STAMP
            })],
            Collection::Services => Vec::new(),
            _ => return Err(FetchError::Status(500)),
        };
        Ok(Value::Array(rows))
    }
}

fn settle(scene: &mut Scene) {
    for _ in 0..600 {
        scene.tick(1.0 / 60.0);
    }
}

/// Click the centre of the first clickable object in the current room.
fn click_first(scene: &mut Scene) -> Option<Overlay> {
    let room = scene.room(scene.current()).expect("room built");
    let (id, _) = room.clickable().next().expect("clickable object");
    let at = room.world_position(id).expect("object exists");
    let (x, y) = scene.camera().project(at).expect("in front of camera");
    scene.click(x, y).cloned()
}

#[tokio::test]
async fn rooms_are_built_on_first_visit() {
    let mut scene = Scene::load(&Fixture { services: false }, 16.0 / 9.0).await;
    assert_eq!(scene.current(), SectionKind::Hero);
    assert_eq!(scene.built_rooms().count(), 1);

    assert_eq!(scene.key(Key::Up), None);
    assert_eq!(scene.current(), SectionKind::Hero);

    scene.key(Key::Down);
    scene.key(Key::S);
    assert_eq!(scene.current(), SectionKind::Skills);
    assert_eq!(scene.built_rooms().count(), 3);

    let skills = scene.room(SectionKind::Skills).unwrap();
    assert_eq!(skills.origin.z, -60.0);
    let labels = skills.objects.iter().filter(|o| o.label.is_some()).count();
    assert_eq!(labels, 8);

    scene.jump_to(SectionKind::Contact);
    assert!(scene.room(SectionKind::Projects).is_none());
    scene.key(Key::Down);
    assert_eq!(scene.current(), SectionKind::Contact);
    scene.key(Key::W);
    assert_eq!(scene.current(), SectionKind::Blog);
}

#[tokio::test]
async fn clicking_a_project_opens_it_and_escape_backs_out() {
    let mut scene = Scene::load(&Fixture { services: false }, 16.0 / 9.0).await;
    scene.jump_to(SectionKind::Projects);
    settle(&mut scene);

    match click_first(&mut scene) {
        Some(Overlay::Project(p)) => assert_eq!(p.title, "NextTalk"),
        other => panic!("expected project overlay, got {other:?}"),
    }
    assert!(scene.overlay().is_some());

    assert_eq!(scene.key(Key::Escape), None);
    assert!(scene.overlay().is_none());
    assert_eq!(scene.key(Key::Escape), Some(SceneCommand::Exit));
}

#[tokio::test]
async fn placeholder_services_open_nothing() {
    let mut scene = Scene::load(&Fixture { services: false }, 16.0 / 9.0).await;
    scene.jump_to(SectionKind::Services);
    settle(&mut scene);
    assert_eq!(scene.room(SectionKind::Services).unwrap().clickable().count(), 6);
    assert_eq!(click_first(&mut scene), None);
    assert!(scene.overlay().is_none());

    let mut scene = Scene::load(&Fixture { services: true }, 16.0 / 9.0).await;
    scene.jump_to(SectionKind::Services);
    settle(&mut scene);
    assert_eq!(scene.room(SectionKind::Services).unwrap().clickable().count(), 1);
    assert!(matches!(click_first(&mut scene), Some(Overlay::Service(s)) if s.title == "Web"));
}

#[tokio::test]
async fn failed_collections_leave_rooms_empty() {
    let mut scene = Scene::load(&Fixture { services: false }, 1.0).await;
    assert!(scene.content().blog.is_empty());
    scene.jump_to(SectionKind::Blog);
    assert_eq!(scene.room(SectionKind::Blog).unwrap().clickable().count(), 0);
    // clicking empty space does nothing
    assert_eq!(scene.click(0.95, 0.95), None);
}

#[test]
fn hero_logo_spins() {
    let mut room = scene::Room::build(SectionKind::Hero, &scene::SceneContent::default());
    room.animate(1.25);
    let logo = &room.objects[1];
    assert!((logo.pose.rotation.x - 0.75).abs() < 1e-4);
}

#[test]
fn glow_follows_its_screen() {
    let project: models::project::Model = serde_json::from_value(json!({
        "id": id(1), "title": "NextTalk", "description": "d", "technologies": [],
        "featured": true, "order": 0, "version": 1, "createdAt": STAMP, "updatedAt": STAMP
    }))
    .unwrap();
    let content = scene::SceneContent { projects: vec![project], ..Default::default() };
    let mut room = scene::Room::build(SectionKind::Projects, &content);
    room.animate(0.7);
    let (screen, glow) = (&room.objects[1], &room.objects[2]);
    assert_ne!(screen.pose.position, screen.base.position);
    assert_eq!(glow.pose.position, screen.pose.position);
    assert_eq!(glow.pose.rotation, screen.pose.rotation);
}
