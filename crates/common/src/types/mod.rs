use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// JSON error envelope returned by every failing handler.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

/// The six content collections exposed under `/api/<slug>`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Projects,
    Skills,
    Experiences,
    Services,
    Testimonials,
    Blog,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Projects,
        Collection::Skills,
        Collection::Experiences,
        Collection::Services,
        Collection::Testimonials,
        Collection::Blog,
    ];

    /// Path segment under `/api`.
    pub fn slug(self) -> &'static str {
        match self {
            Collection::Projects => "projects",
            Collection::Skills => "skills",
            Collection::Experiences => "experiences",
            Collection::Services => "services",
            Collection::Testimonials => "testimonials",
            Collection::Blog => "blog",
        }
    }

    /// Singular noun used in error messages ("project not found").
    pub fn singular(self) -> &'static str {
        match self {
            Collection::Projects => "project",
            Collection::Skills => "skill",
            Collection::Experiences => "experience",
            Collection::Services => "service",
            Collection::Testimonials => "testimonial",
            Collection::Blog => "blog post",
        }
    }

    /// Plural noun used in fixed failure messages ("Failed to fetch projects").
    pub fn plural(self) -> &'static str {
        match self {
            Collection::Blog => "blog posts",
            other => other.slug(),
        }
    }

    pub fn api_path(self) -> String {
        format!("/api/{}", self.slug())
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Collection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| CoreError::UnknownCollection(s.to_string()))
    }
}
