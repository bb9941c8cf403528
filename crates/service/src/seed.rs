//! First-run content: the admin credential plus sample projects and skills.

use sea_orm::DatabaseConnection;
use tracing::{info, instrument};

use models::icons::SkillIcon;
use models::{project, skill};

use crate::auth::domain::AdminUser;
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;
use crate::auth::AuthService;
use crate::errors::ServiceError;

/// Rows inserted by [`seed_content`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub projects: usize,
    pub skills: usize,
}

pub fn sample_projects() -> Vec<project::NewProject> {
    let p = |title: &str, description: &str, tech: &[&str], url: &str, order: i32| project::NewProject {
        title: title.into(),
        description: description.into(),
        technologies: tech.iter().map(|t| t.to_string()).collect(),
        live_url: Some(url.into()),
        featured: true,
        sort_order: order,
        ..Default::default()
    };
    vec![
        p(
            "NextTalk",
            "A modern communication platform built with Next.js featuring real-time messaging, voice calls, and seamless collaboration.",
            &["Next.js", "TypeScript", "WebRTC", "Socket.io"],
            "https://nexttalk-web.vercel.app",
            1,
        ),
        p(
            "U-Plus",
            "An innovative educational platform designed to enhance learning experiences with interactive features and AI-powered recommendations.",
            &["React", "Node.js", "MongoDB", "AI"],
            "https://u-plus.vercel.app",
            2,
        ),
        p(
            "MSCakeHub",
            "A delightful e-commerce platform for custom cakes with order management, gallery, and delivery tracking.",
            &["Next.js", "Prisma", "PostgreSQL", "Stripe"],
            "https://mscakehub.vercel.app",
            3,
        ),
    ]
}

pub fn sample_skills() -> Vec<skill::NewSkill> {
    let s = |name: &str, icon: SkillIcon, category: &str, level: i32, order: i32| skill::NewSkill {
        name: name.into(),
        icon,
        category: category.into(),
        level,
        sort_order: order,
    };
    vec![
        s("JavaScript", SkillIcon::Javascript, "Language", 95, 1),
        s("TypeScript", SkillIcon::Typescript, "Language", 90, 2),
        s("React", SkillIcon::React, "Framework", 95, 3),
        s("Next.js", SkillIcon::Nextjs, "Framework", 95, 4),
        s("Node.js", SkillIcon::Nodejs, "Backend", 90, 5),
        s("MongoDB", SkillIcon::Mongodb, "Database", 85, 6),
        s("Flutter", SkillIcon::Flutter, "Mobile", 80, 7),
        s("PostgreSQL", SkillIcon::Postgresql, "Database", 85, 8),
        s("Prisma", SkillIcon::Prisma, "ORM", 90, 9),
        s("Tailwind CSS", SkillIcon::Tailwindcss, "Styling", 95, 10),
    ]
}

/// Insert the sample projects and skills into tables that are still empty.
/// Running it again is a no-op.
#[instrument(skip(db))]
pub async fn seed_content(db: &DatabaseConnection) -> Result<SeedReport, ServiceError> {
    let mut report = SeedReport::default();
    if project::count(db).await? == 0 {
        for p in sample_projects() {
            project::create(db, p).await?;
            report.projects += 1;
        }
    }
    if skill::count(db).await? == 0 {
        for s in sample_skills() {
            skill::create(db, s).await?;
            report.skills += 1;
        }
    }
    info!(projects = report.projects, skills = report.skills, "seed_content_done");
    Ok(report)
}

/// Create or reset the admin account. The password must come from the caller;
/// there is no built-in default.
pub async fn seed_admin<R: AuthRepository>(
    auth: &AuthService<R>,
    username: &str,
    password: Option<&str>,
) -> Result<AdminUser, AuthError> {
    let password = password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AuthError::Validation("ADMIN_PASSWORD must be set to seed the admin account".into()))?;
    auth.set_password(username, password).await
}
