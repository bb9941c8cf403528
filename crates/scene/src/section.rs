use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("unknown section: {0}")]
    UnknownSection(String),
}

/// One room per page section, in walk order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Hero,
    About,
    Skills,
    Projects,
    Experience,
    Services,
    Testimonials,
    Blog,
    Contact,
}

impl SectionKind {
    pub const ALL: [SectionKind; 9] = [
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::Experience,
        SectionKind::Services,
        SectionKind::Testimonials,
        SectionKind::Blog,
        SectionKind::Contact,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// `None` at the first section.
    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// `None` at the last section.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn key(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
            SectionKind::Experience => "experience",
            SectionKind::Services => "services",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Blog => "blog",
            SectionKind::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Hero => "Welcome to Hash Nova",
            SectionKind::About => "About Me",
            SectionKind::Skills => "Skills & Tech",
            SectionKind::Projects => "Projects",
            SectionKind::Experience => "Experience",
            SectionKind::Services => "Services",
            SectionKind::Testimonials => "Testimonials",
            SectionKind::Blog => "Blog",
            SectionKind::Contact => "Contact",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            SectionKind::Hero => "Full-Stack Developer",
            SectionKind::About => "My Story & Journey",
            SectionKind::Skills => "My Technical Arsenal",
            SectionKind::Projects => "My Work Portfolio",
            SectionKind::Experience => "Professional Timeline",
            SectionKind::Services => "What I Offer",
            SectionKind::Testimonials => "Client Feedback",
            SectionKind::Blog => "Articles & Insights",
            SectionKind::Contact => "Get In Touch",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SectionKind::Hero => "🚀",
            SectionKind::About => "👨‍💻",
            SectionKind::Skills => "⚡",
            SectionKind::Projects => "💻",
            SectionKind::Experience => "💼",
            SectionKind::Services => "🎨",
            SectionKind::Testimonials => "⭐",
            SectionKind::Blog => "📝",
            SectionKind::Contact => "📧",
        }
    }

    /// Platform and wall tint, `0xRRGGBB`.
    pub fn color(self) -> u32 {
        match self {
            SectionKind::Hero | SectionKind::Blog => 0x06b6d4,
            SectionKind::About | SectionKind::Contact => 0x10b981,
            SectionKind::Skills => 0x8b5cf6,
            SectionKind::Projects => 0x3b82f6,
            SectionKind::Experience => 0xf59e0b,
            SectionKind::Services => 0xec4899,
            SectionKind::Testimonials => 0xeab308,
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SectionKind {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.key() == s)
            .ok_or_else(|| SceneError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_order_has_ends() {
        assert_eq!(SectionKind::Hero.prev(), None);
        assert_eq!(SectionKind::Contact.next(), None);
        assert_eq!(SectionKind::Hero.next(), Some(SectionKind::About));
        assert_eq!(SectionKind::Contact.index(), 8);
    }

    #[test]
    fn parses_minimap_keys() {
        assert_eq!("blog".parse::<SectionKind>(), Ok(SectionKind::Blog));
        assert_eq!(
            "lobby".parse::<SectionKind>(),
            Err(SceneError::UnknownSection("lobby".into()))
        );
    }
}
