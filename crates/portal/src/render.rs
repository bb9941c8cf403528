//! Server-side HTML for the public page. Every interpolated value goes
//! through [`escape`].

use common::Collection;
use models::icons::ServiceIcon;
use models::{blog_post, experience, offering, project, skill, testimonial};

use crate::page::{PublicPage, SectionState};

pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Placeholder shown when a section has nothing to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub glyph: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
}

/// Services have no empty state; they fall back to [`default_services`].
pub fn empty_state(collection: Collection) -> Option<EmptyState> {
    let (glyph, heading, body) = match collection {
        Collection::Skills => ("🛠️", "No skills to show yet", "The toolbox is being restocked. Check back soon!"),
        Collection::Projects => ("🧪", "No projects to show yet", "New work is on the way."),
        Collection::Experiences => (
            "🚀",
            "Journey Just Beginning",
            "Building amazing projects since 2023. More milestones coming soon!",
        ),
        Collection::Testimonials => (
            "⭐",
            "Building Trust Daily",
            "Amazing testimonials coming soon from satisfied clients!",
        ),
        Collection::Blog => ("📝", "Coming Soon", "Exciting blog posts and tutorials are on the way!"),
        Collection::Services => return None,
    };
    Some(EmptyState { glyph, heading, body })
}

/// A built-in service card used when the services table is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultService {
    pub icon: ServiceIcon,
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
}

pub fn default_services() -> Vec<DefaultService> {
    vec![
        DefaultService {
            icon: ServiceIcon::Web,
            title: "Web Development",
            description: "Building responsive, fast, and modern websites using cutting-edge technologies.",
            features: ["React & Next.js", "Full-Stack Solutions", "SEO Optimization", "Performance Tuning"],
        },
        DefaultService {
            icon: ServiceIcon::Mobile,
            title: "Mobile Apps",
            description: "Creating beautiful cross-platform mobile applications with Flutter.",
            features: ["iOS & Android", "Native Performance", "Beautiful UI/UX", "Real-time Features"],
        },
        DefaultService {
            icon: ServiceIcon::Design,
            title: "UI/UX Design",
            description: "Designing intuitive and engaging user interfaces that users love.",
            features: ["Modern Design", "User Research", "Prototyping", "Brand Identity"],
        },
        DefaultService {
            icon: ServiceIcon::Ai,
            title: "AI Integration",
            description: "Implementing AI-powered features to make your apps smarter.",
            features: ["ChatGPT Integration", "Machine Learning", "Natural Language", "Automation"],
        },
        DefaultService {
            icon: ServiceIcon::Backend,
            title: "Backend Development",
            description: "Building secure and scalable server-side applications and APIs.",
            features: ["RESTful APIs", "Database Design", "Authentication", "Cloud Deployment"],
        },
        DefaultService {
            icon: ServiceIcon::Performance,
            title: "Performance Optimization",
            description: "Making your applications lightning-fast and highly efficient.",
            features: ["Speed Optimization", "Code Refactoring", "Caching Strategies", "Load Balancing"],
        },
    ]
}

const LOADING: &str = r#"<div class="loading" aria-busy="true">Loading…</div>"#;

fn section(id: &str, title: &str, subtitle: &str, body: &str) -> String {
    format!(
        r#"<section id="{id}"><h2>{}</h2><p class="subtitle">{}</p>{body}</section>"#,
        escape(title),
        escape(subtitle)
    )
}

fn empty(collection: Collection) -> String {
    match empty_state(collection) {
        Some(e) => format!(
            r#"<div class="empty"><div class="glyph">{}</div><h3>{}</h3><p>{}</p></div>"#,
            e.glyph,
            escape(e.heading),
            escape(e.body)
        ),
        None => String::new(),
    }
}

/// Loading indicator, empty-state copy, or the rendered items.
fn body<T>(state: &SectionState<T>, collection: Collection, item: impl Fn(&T) -> String) -> String {
    match state {
        SectionState::Loading => LOADING.to_string(),
        SectionState::Loaded(items) if items.is_empty() => empty(collection),
        SectionState::Loaded(items) => {
            let inner: String = items.iter().map(item).collect();
            format!(r#"<ul class="{}">{inner}</ul>"#, collection.slug())
        }
    }
}

fn tags<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.map(|t| format!(r#"<span class="tag">{}</span>"#, escape(t))).collect()
}

fn link(href: &str, label: &str) -> String {
    format!(r#"<a href="{}" rel="noopener" target="_blank">{}</a>"#, escape(href), escape(label))
}

pub fn skills(state: &SectionState<skill::Model>) -> String {
    let inner = body(state, Collection::Skills, |s| {
        format!(
            r#"<li class="skill" data-icon="{}"><span class="name">{}</span><span class="category">{}</span><meter min="0" max="100" value="{}">{}%</meter></li>"#,
            s.icon.key(),
            escape(&s.name),
            escape(&s.category),
            s.level,
            s.level
        )
    });
    section("skills", "Languages I Know", "Expertise across the full stack", &inner)
}

pub fn projects(state: &SectionState<project::Model>) -> String {
    let inner = body(state, Collection::Projects, |p| {
        let mut links = String::new();
        if let Some(u) = &p.live_url {
            links.push_str(&link(u, "Live"));
        }
        if let Some(u) = &p.github_url {
            links.push_str(&link(u, "Code"));
        }
        let image = p
            .image_url
            .as_deref()
            .map(|u| format!(r#"<img src="{}" alt="{}">"#, escape(u), escape(&p.title)))
            .unwrap_or_default();
        format!(
            r#"<li class="project{}">{image}<h3>{}</h3><p>{}</p><div class="tags">{}</div><div class="links">{links}</div></li>"#,
            if p.featured { " featured" } else { "" },
            escape(&p.title),
            escape(&p.description),
            tags(p.technologies.iter())
        )
    });
    section("projects", "Featured Projects", "Building the future, one project at a time", &inner)
}

pub fn experiences(state: &SectionState<experience::Model>) -> String {
    let inner = body(state, Collection::Experiences, |e| {
        format!(
            r#"<li class="experience"><h3>{}</h3><p class="company">{} · {}</p><p class="period">{}</p><p>{}</p></li>"#,
            escape(&e.title),
            escape(&e.company),
            escape(&e.location),
            escape(&e.period()),
            escape(&e.description)
        )
    });
    section("experience", "Experience Timeline", "My journey as a developer", &inner)
}

fn service_card(glyph: &str, title: &str, description: &str, features: String) -> String {
    format!(
        r#"<li class="service"><div class="glyph">{glyph}</div><h3>{}</h3><p>{}</p><ul class="features">{features}</ul></li>"#,
        escape(title),
        escape(description)
    )
}

fn feature_items<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.map(|f| format!("<li>{}</li>", escape(f))).collect()
}

pub fn services(state: &SectionState<offering::Model>) -> String {
    let inner = match state {
        SectionState::Loading => LOADING.to_string(),
        SectionState::Loaded(items) if items.is_empty() => {
            let cards: String = default_services()
                .iter()
                .map(|d| service_card(d.icon.glyph(), d.title, d.description, feature_items(d.features.iter().copied())))
                .collect();
            format!(r#"<ul class="services defaults">{cards}</ul>"#)
        }
        SectionState::Loaded(items) => {
            let cards: String = items
                .iter()
                .map(|s| service_card(s.icon.glyph(), &s.title, &s.description, feature_items(s.features.iter())))
                .collect();
            format!(r#"<ul class="services">{cards}</ul>"#)
        }
    };
    section("services", "Services I Offer", "Transforming ideas into digital reality", &inner)
}

pub fn testimonials(state: &SectionState<testimonial::Model>) -> String {
    let inner = body(state, Collection::Testimonials, |t| {
        let who = [t.role.as_str(), t.company.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            r#"<li class="testimonial"><div class="stars" aria-label="{} out of 5">{}</div><blockquote>{}</blockquote><p class="who"><strong>{}</strong> {}</p></li>"#,
            t.rating,
            t.stars(),
            escape(&t.content),
            escape(&t.name),
            escape(&who)
        )
    });
    section("testimonials", "What Clients Say", "Trusted by amazing people and companies", &inner)
}

pub fn blog(state: &SectionState<blog_post::Model>) -> String {
    let inner = body(state, Collection::Blog, |p| {
        let cover = p
            .cover_image
            .as_deref()
            .map(|u| format!(r#"<img src="{}" alt="{}">"#, escape(u), escape(&p.title)))
            .unwrap_or_default();
        format!(
            r#"<li class="post" id="post-{}">{cover}<h3>{}</h3><p>{}</p><div class="tags">{}</div><time datetime="{}">{}</time></li>"#,
            escape(&p.slug),
            escape(&p.title),
            escape(&p.excerpt),
            tags(p.tags.iter()),
            p.created_at.to_rfc3339(),
            p.created_at.format("%b %e, %Y")
        )
    });
    section("blog", "Latest Blog Posts", "Thoughts, tutorials, and insights", &inner)
}

/// The whole document.
pub fn page(p: &PublicPage) -> String {
    let mut html = String::from(
        r#"<!doctype html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>HASH NOVA | Portfolio</title><link rel="stylesheet" href="/static/site.css"></head><body>"#,
    );
    html.push_str(r#"<header id="hero"><h1>HASH NOVA</h1><p>Full-Stack Developer</p></header><main>"#);
    html.push_str(&section("about", "About Me", "Who I am", ""));
    html.push_str(&skills(&p.skills));
    html.push_str(&projects(&p.projects));
    html.push_str(&experiences(&p.experiences));
    html.push_str(&services(&p.services));
    html.push_str(&testimonials(&p.testimonials));
    html.push_str(&blog(&p.blog));
    html.push_str(&section("contact", "Get In Touch", "Let's build something amazing together", ""));
    html.push_str("</main></body></html>");
    html
}
