use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{self, ModelError};
use crate::fields::{self, StringList};
use crate::versioned;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blog_post")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub excerpt: String,
    pub cover_image: Option<String>,
    pub published: bool,
    #[sea_orm(column_type = "Json")]
    pub tags: StringList,
    pub version: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPost {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub excerpt: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Backdates an imported post; defaults to now.
    #[serde(default)]
    pub created_at: Option<DateTimeWithTimeZone>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    #[serde(default, deserialize_with = "fields::nullable")]
    pub cover_image: Option<Option<String>>,
    pub published: Option<bool>,
    pub tags: Option<Vec<String>>,
}

fn normalize_slug(raw: &str) -> Result<String, ModelError> {
    let s = slug::slugify(raw);
    if s.is_empty() {
        return Err(ModelError::validation("slug must contain letters or digits"));
    }
    Ok(s)
}

fn slug_in_use(slug: &str) -> ModelError {
    ModelError::validation(format!("slug `{slug}` is already taken"))
}

/// The unique index still guards a slug that was claimed between the
/// availability check and the write.
fn unique_slug(slug: String) -> impl FnOnce(ModelError) -> ModelError {
    move |e| match e {
        ModelError::Validation(_) => slug_in_use(&slug),
        other => other,
    }
}

async fn slug_taken<C: ConnectionTrait>(db: &C, slug: &str, except: Option<Uuid>) -> Result<bool, ModelError> {
    let mut q = Entity::find().filter(Column::Slug.eq(slug));
    if let Some(id) = except {
        q = q.filter(Column::Id.ne(id));
    }
    Ok(q.one(db).await.map_err(errors::db)?.is_some())
}

/// An explicit slug must be free; a derived one gets a numeric suffix until it is.
async fn resolve_slug<C: ConnectionTrait>(db: &C, title: &str, explicit: Option<&str>) -> Result<String, ModelError> {
    if let Some(raw) = explicit.filter(|s| !s.trim().is_empty()) {
        let s = normalize_slug(raw)?;
        if slug_taken(db, &s, None).await? {
            return Err(slug_in_use(&s));
        }
        return Ok(s);
    }
    let base = normalize_slug(title)?;
    let mut candidate = base.clone();
    let mut n = 2;
    while slug_taken(db, &candidate, None).await? {
        candidate = format!("{base}-{n}");
        n += 1;
    }
    Ok(candidate)
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewBlogPost) -> Result<Model, ModelError> {
    let title = fields::required("title", &input.title)?;
    let slug = resolve_slug(db, &title, input.slug.as_deref()).await?;
    let now = Utc::now();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(title),
        slug: Set(slug.clone()),
        excerpt: Set(fields::required("excerpt", &input.excerpt)?),
        cover_image: Set(fields::optional_url("coverImage", input.cover_image)?),
        published: Set(input.published),
        tags: Set(StringList::cleaned(input.tags)),
        version: Set(1),
        created_at: Set(input.created_at.unwrap_or_else(|| now.into())),
        updated_at: Set(now.into()),
    };
    store(db, am, slug).await
}

pub(crate) async fn store<C: ConnectionTrait>(db: &C, am: ActiveModel, slug: String) -> Result<Model, ModelError> {
    am.insert(db).await.map_err(errors::db).map_err(unique_slug(slug))
}

/// Newest first. Drafts are hidden unless `include_drafts`.
pub async fn list<C: ConnectionTrait>(db: &C, include_drafts: bool) -> Result<Vec<Model>, ModelError> {
    let mut q = Entity::find();
    if !include_drafts {
        q = q.filter(Column::Published.eq(true));
    }
    q.order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
        .all(db)
        .await
        .map_err(errors::db)
}

pub async fn find_by_slug<C: ConnectionTrait>(db: &C, slug: &str) -> Result<Option<Model>, ModelError> {
    Entity::find().filter(Column::Slug.eq(slug)).one(db).await.map_err(errors::db)
}

/// Retitling keeps the slug so published links stay valid.
pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    patch: BlogPostPatch,
    expected_version: Option<i32>,
) -> Result<Model, ModelError> {
    let mut am = ActiveModel { updated_at: Set(Utc::now().into()), ..Default::default() };
    if let Some(t) = patch.title {
        am.title = Set(fields::required("title", &t)?);
    }
    let mut new_slug = None;
    if let Some(raw) = patch.slug {
        let s = normalize_slug(&raw)?;
        if slug_taken(db, &s, Some(id)).await? {
            return Err(slug_in_use(&s));
        }
        am.slug = Set(s.clone());
        new_slug = Some(s);
    }
    if let Some(e) = patch.excerpt {
        am.excerpt = Set(fields::required("excerpt", &e)?);
    }
    if let Some(c) = patch.cover_image {
        am.cover_image = Set(fields::optional_url("coverImage", c)?);
    }
    if let Some(p) = patch.published {
        am.published = Set(p);
    }
    if let Some(t) = patch.tags {
        am.tags = Set(StringList::cleaned(t));
    }
    let res = versioned::update::<Entity, _, _>(db, am, id, expected_version, Column::Id, Column::Version, "blog post").await;
    match new_slug {
        Some(s) => res.map_err(unique_slug(s)),
        None => res,
    }
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<bool, ModelError> {
    versioned::delete::<Entity, _>(db, id, Column::Id).await
}
