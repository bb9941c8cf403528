use common::Collection;
use models::{blog_post, experience, offering, project, skill, testimonial};

use crate::render;
use crate::source::{fetch_collection, ContentSource};

/// One section of the public page.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionState<T> {
    Loading,
    Loaded(Vec<T>),
}

impl<T> SectionState<T> {
    pub fn items(&self) -> &[T] {
        match self {
            SectionState::Loading => &[],
            SectionState::Loaded(items) => items,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SectionState::Loading)
    }
}

impl<T> Default for SectionState<T> {
    fn default() -> Self {
        SectionState::Loading
    }
}

#[derive(Debug, Clone, Default)]
pub struct PublicPage {
    pub skills: SectionState<skill::Model>,
    pub projects: SectionState<project::Model>,
    pub experiences: SectionState<experience::Model>,
    pub services: SectionState<offering::Model>,
    pub testimonials: SectionState<testimonial::Model>,
    pub blog: SectionState<blog_post::Model>,
}

impl PublicPage {
    /// Every section still loading.
    pub fn loading() -> Self {
        Self::default()
    }

    /// Fetch all six collections concurrently. A collection that fails to
    /// load shows up as an empty section.
    pub async fn load<S: ContentSource + ?Sized>(source: &S) -> Self {
        let (skills, projects, experiences, services, testimonials, blog) = tokio::join!(
            fetch_collection(source, Collection::Skills),
            fetch_collection(source, Collection::Projects),
            fetch_collection(source, Collection::Experiences),
            fetch_collection(source, Collection::Services),
            fetch_collection(source, Collection::Testimonials),
            fetch_collection(source, Collection::Blog),
        );
        Self {
            skills: SectionState::Loaded(skills),
            projects: SectionState::Loaded(projects),
            experiences: SectionState::Loaded(experiences),
            services: SectionState::Loaded(services),
            testimonials: SectionState::Loaded(testimonials),
            blog: SectionState::Loaded(blog),
        }
    }

    pub fn render(&self) -> String {
        render::page(self)
    }
}
