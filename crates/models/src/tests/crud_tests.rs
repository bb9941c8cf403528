use anyhow::Result;
use chrono::NaiveDate;

use super::memory_db;
use crate::errors::ModelError;
use crate::icons::{ServiceIcon, SkillIcon};
use crate::{blog_post, experience, offering, project, skill, testimonial};

fn sample_project(title: &str, order: i32) -> project::NewProject {
    project::NewProject {
        title: title.to_string(),
        description: format!("{title} description"),
        technologies: vec!["Next.js".into(), " Socket.io ".into(), "".into()],
        live_url: Some("https://example.com".into()),
        github_url: Some("".into()),
        image_url: None,
        featured: true,
        sort_order: order,
    }
}

#[tokio::test]
async fn test_project_crud() -> Result<()> {
    let db = memory_db().await?;

    let created = project::create(&db, sample_project("NextTalk", 1)).await?;
    assert_eq!(created.version, 1);
    assert_eq!(created.technologies.0, vec!["Next.js", "Socket.io"]);
    assert_eq!(created.github_url, None);

    let listed = project::list(&db).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);

    let patch = project::ProjectPatch { title: Some("NextTalk v2".into()), ..Default::default() };
    let updated = project::update(&db, created.id, patch, None).await?;
    assert_eq!(updated.title, "NextTalk v2");
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.live_url, created.live_url);
    assert_eq!(updated.version, 2);

    assert!(project::delete(&db, created.id).await?);
    assert!(!project::delete(&db, created.id).await?);
    assert!(project::list(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_explicit_null_clears_optional_link() -> Result<()> {
    let db = memory_db().await?;
    let created = project::create(&db, sample_project("U-Plus", 2)).await?;
    let patch: project::ProjectPatch = serde_json::from_str(r#"{"liveUrl": null}"#)?;
    let updated = project::update(&db, created.id, patch, None).await?;
    assert_eq!(updated.live_url, None);
    assert!(updated.featured);
    Ok(())
}

#[tokio::test]
async fn test_skill_crud_and_level_bounds() -> Result<()> {
    let db = memory_db().await?;
    let input = skill::NewSkill {
        name: "Rust".into(),
        icon: SkillIcon::Rust,
        category: "Backend".into(),
        level: 80,
        sort_order: 1,
    };
    let created = skill::create(&db, input.clone()).await?;
    assert_eq!(created.icon, SkillIcon::Rust);

    let too_high = skill::NewSkill { level: 101, ..input };
    assert!(matches!(skill::create(&db, too_high).await, Err(ModelError::Validation(_))));

    let patch = skill::SkillPatch { level: Some(-1), ..Default::default() };
    assert!(matches!(skill::update(&db, created.id, patch, None).await, Err(ModelError::Validation(_))));

    let patch = skill::SkillPatch { level: Some(95), ..Default::default() };
    let updated = skill::update(&db, created.id, patch, None).await?;
    assert_eq!(updated.level, 95);
    assert_eq!(updated.name, "Rust");
    assert_eq!(skill::count(&db).await?, 1);
    Ok(())
}

#[tokio::test]
async fn test_experience_period_rules() -> Result<()> {
    let db = memory_db().await?;
    let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
    let input = experience::NewExperience {
        title: "Engineer".into(),
        company: "Acme".into(),
        location: "Remote".into(),
        start_date: start,
        end_date: NaiveDate::from_ymd_opt(2021, 1, 1),
        current: false,
        description: "Built things".into(),
        sort_order: 0,
    };
    assert!(matches!(experience::create(&db, input.clone()).await, Err(ModelError::Validation(_))));

    let current = experience::NewExperience { end_date: NaiveDate::from_ymd_opt(2023, 1, 1), current: true, ..input };
    let created = experience::create(&db, current).await?;
    assert_eq!(created.end_date, None);
    assert!(created.period().ends_with("Present"));

    let patch = experience::ExperiencePatch {
        current: Some(false),
        end_date: Some(NaiveDate::from_ymd_opt(2024, 6, 30)),
        ..Default::default()
    };
    let ended = experience::update(&db, created.id, patch, None).await?;
    assert!(!ended.current);
    assert_eq!(ended.period(), "Jan 2022 – Jun 2024");
    Ok(())
}

#[tokio::test]
async fn test_service_and_testimonial_crud() -> Result<()> {
    let db = memory_db().await?;
    let svc = offering::create(
        &db,
        offering::NewService {
            title: "Web Development".into(),
            description: "Sites".into(),
            icon: ServiceIcon::Web,
            features: vec!["SSR".into(), "SEO".into()],
            sort_order: 0,
        },
    )
    .await?;
    assert_eq!(svc.features.len(), 2);
    let patch = offering::ServicePatch { icon: Some(ServiceIcon::Performance), ..Default::default() };
    assert_eq!(offering::update(&db, svc.id, patch, None).await?.icon, ServiceIcon::Performance);

    let t = testimonial::create(
        &db,
        testimonial::NewTestimonial {
            name: "Ada".into(),
            role: "CTO".into(),
            company: "Engines".into(),
            content: "Great work".into(),
            rating: 4,
            image_url: None,
            sort_order: 0,
        },
    )
    .await?;
    assert_eq!(t.stars(), "★★★★☆");
    let patch = testimonial::TestimonialPatch { rating: Some(6), ..Default::default() };
    assert!(matches!(testimonial::update(&db, t.id, patch, None).await, Err(ModelError::Validation(_))));
    assert!(testimonial::delete(&db, t.id).await?);
    Ok(())
}

#[tokio::test]
async fn test_blog_post_slug_is_derived_and_deduplicated() -> Result<()> {
    let db = memory_db().await?;
    let input = blog_post::NewBlogPost {
        title: "Hello, World!".into(),
        excerpt: "First post".into(),
        published: true,
        ..Default::default()
    };
    let first = blog_post::create(&db, input.clone()).await?;
    assert_eq!(first.slug, "hello-world");
    let second = blog_post::create(&db, input).await?;
    assert_eq!(second.slug, "hello-world-2");

    let clash = blog_post::NewBlogPost {
        title: "Other".into(),
        slug: Some("Hello World".into()),
        excerpt: "x".into(),
        ..Default::default()
    };
    assert!(matches!(blog_post::create(&db, clash).await, Err(ModelError::Validation(_))));

    let patch = blog_post::BlogPostPatch { title: Some("Renamed".into()), ..Default::default() };
    let renamed = blog_post::update(&db, first.id, patch, None).await?;
    assert_eq!(renamed.slug, "hello-world");
    assert!(blog_post::find_by_slug(&db, "hello-world-2").await?.is_some());
    Ok(())
}
