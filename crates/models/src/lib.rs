pub mod errors;
pub mod db;
pub mod fields;
pub mod icons;
mod versioned;

pub mod project;
pub mod skill;
pub mod experience;
pub mod offering;
pub mod testimonial;
pub mod blog_post;
pub mod admin;

pub use errors::ModelError;
pub use fields::StringList;
pub use icons::{ServiceIcon, SkillIcon};

#[cfg(test)]
mod tests;
