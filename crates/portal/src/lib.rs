//! Client side of the portfolio: the public page renderer and the admin
//! editor, both talking to the content API through a [`ContentSource`].

pub mod source;
pub mod page;
pub mod render;
pub mod admin;

pub use admin::{split_list, AdminClient, AdminEditor, AdminError};
pub use page::{PublicPage, SectionState};
pub use source::{fetch_collection, try_fetch_collection, ContentSource, FetchError, HttpContentSource};
