//! Closed icon vocabularies for skills and services.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use sea_orm::Iterable;
use serde::{Deserialize, Serialize};

/// Brand icon identifiers understood by the public site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum SkillIcon {
    #[sea_orm(string_value = "SiJavascript")]
    #[serde(rename = "SiJavascript")]
    Javascript,
    #[sea_orm(string_value = "SiTypescript")]
    #[serde(rename = "SiTypescript")]
    Typescript,
    #[sea_orm(string_value = "SiReact")]
    #[serde(rename = "SiReact")]
    React,
    #[sea_orm(string_value = "SiNextdotjs")]
    #[serde(rename = "SiNextdotjs")]
    Nextjs,
    #[sea_orm(string_value = "SiNodedotjs")]
    #[serde(rename = "SiNodedotjs")]
    Nodejs,
    #[sea_orm(string_value = "SiMongodb")]
    #[serde(rename = "SiMongodb")]
    Mongodb,
    #[sea_orm(string_value = "SiFlutter")]
    #[serde(rename = "SiFlutter")]
    Flutter,
    #[sea_orm(string_value = "SiPostgresql")]
    #[serde(rename = "SiPostgresql")]
    Postgresql,
    #[sea_orm(string_value = "SiPrisma")]
    #[serde(rename = "SiPrisma")]
    Prisma,
    #[sea_orm(string_value = "SiTailwindcss")]
    #[serde(rename = "SiTailwindcss")]
    Tailwindcss,
    #[sea_orm(string_value = "SiPython")]
    #[serde(rename = "SiPython")]
    Python,
    #[sea_orm(string_value = "SiGo")]
    #[serde(rename = "SiGo")]
    Go,
    #[sea_orm(string_value = "SiRust")]
    #[serde(rename = "SiRust")]
    Rust,
    #[sea_orm(string_value = "SiDocker")]
    #[serde(rename = "SiDocker")]
    Docker,
    #[sea_orm(string_value = "SiKubernetes")]
    #[serde(rename = "SiKubernetes")]
    Kubernetes,
}

impl SkillIcon {
    pub fn key(self) -> &'static str {
        match self {
            SkillIcon::Javascript => "SiJavascript",
            SkillIcon::Typescript => "SiTypescript",
            SkillIcon::React => "SiReact",
            SkillIcon::Nextjs => "SiNextdotjs",
            SkillIcon::Nodejs => "SiNodedotjs",
            SkillIcon::Mongodb => "SiMongodb",
            SkillIcon::Flutter => "SiFlutter",
            SkillIcon::Postgresql => "SiPostgresql",
            SkillIcon::Prisma => "SiPrisma",
            SkillIcon::Tailwindcss => "SiTailwindcss",
            SkillIcon::Python => "SiPython",
            SkillIcon::Go => "SiGo",
            SkillIcon::Rust => "SiRust",
            SkillIcon::Docker => "SiDocker",
            SkillIcon::Kubernetes => "SiKubernetes",
        }
    }

    /// Human label shown next to the icon.
    pub fn label(self) -> &'static str {
        match self {
            SkillIcon::Javascript => "JavaScript",
            SkillIcon::Typescript => "TypeScript",
            SkillIcon::React => "React",
            SkillIcon::Nextjs => "Next.js",
            SkillIcon::Nodejs => "Node.js",
            SkillIcon::Mongodb => "MongoDB",
            SkillIcon::Flutter => "Flutter",
            SkillIcon::Postgresql => "PostgreSQL",
            SkillIcon::Prisma => "Prisma",
            SkillIcon::Tailwindcss => "Tailwind CSS",
            SkillIcon::Python => "Python",
            SkillIcon::Go => "Go",
            SkillIcon::Rust => "Rust",
            SkillIcon::Docker => "Docker",
            SkillIcon::Kubernetes => "Kubernetes",
        }
    }

    pub fn all() -> Vec<SkillIcon> {
        SkillIcon::iter().collect()
    }
}

/// Service categories. Older records stored the emoji itself, so the
/// glyph is accepted as an alias on input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum ServiceIcon {
    #[sea_orm(string_value = "web")]
    #[serde(rename = "web", alias = "💻")]
    Web,
    #[sea_orm(string_value = "mobile")]
    #[serde(rename = "mobile", alias = "📱")]
    Mobile,
    #[sea_orm(string_value = "design")]
    #[serde(rename = "design", alias = "🎨")]
    Design,
    #[sea_orm(string_value = "ai")]
    #[serde(rename = "ai", alias = "🤖")]
    Ai,
    #[sea_orm(string_value = "backend")]
    #[serde(rename = "backend", alias = "🔐")]
    Backend,
    #[sea_orm(string_value = "performance")]
    #[serde(rename = "performance", alias = "⚡")]
    Performance,
}

impl ServiceIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ServiceIcon::Web => "💻",
            ServiceIcon::Mobile => "📱",
            ServiceIcon::Design => "🎨",
            ServiceIcon::Ai => "🤖",
            ServiceIcon::Backend => "🔐",
            ServiceIcon::Performance => "⚡",
        }
    }

    pub fn all() -> Vec<ServiceIcon> {
        ServiceIcon::iter().collect()
    }
}
