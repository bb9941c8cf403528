use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{self, ModelError};
use crate::fields;
use crate::versioned;

pub const RATING_MAX: i32 = 5;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "testimonial")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub company: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub rating: i32,
    pub image_url: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub version: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Filled stars followed by empty ones, always `RATING_MAX` wide.
    pub fn stars(&self) -> String {
        let filled = self.rating.clamp(0, RATING_MAX) as usize;
        format!("{}{}", "★".repeat(filled), "☆".repeat(RATING_MAX as usize - filled))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestimonial {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    pub content: String,
    #[serde(default = "default_rating")]
    pub rating: i32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, rename = "order")]
    pub sort_order: i32,
}

fn default_rating() -> i32 {
    RATING_MAX
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub company: Option<String>,
    pub content: Option<String>,
    pub rating: Option<i32>,
    #[serde(default, deserialize_with = "fields::nullable")]
    pub image_url: Option<Option<String>>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewTestimonial) -> Result<Model, ModelError> {
    let now = Utc::now();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(fields::required("name", &input.name)?),
        role: Set(input.role.trim().to_string()),
        company: Set(input.company.trim().to_string()),
        content: Set(fields::required("content", &input.content)?),
        rating: Set(fields::in_range("rating", input.rating, 0, RATING_MAX)?),
        image_url: Set(fields::optional_url("imageUrl", input.image_url)?),
        sort_order: Set(input.sort_order),
        version: Set(1),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    am.insert(db).await.map_err(errors::db)
}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .order_by_asc(Column::SortOrder)
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(errors::db)
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    patch: TestimonialPatch,
    expected_version: Option<i32>,
) -> Result<Model, ModelError> {
    let mut am = ActiveModel { updated_at: Set(Utc::now().into()), ..Default::default() };
    if let Some(n) = patch.name {
        am.name = Set(fields::required("name", &n)?);
    }
    if let Some(r) = patch.role {
        am.role = Set(r.trim().to_string());
    }
    if let Some(c) = patch.company {
        am.company = Set(c.trim().to_string());
    }
    if let Some(c) = patch.content {
        am.content = Set(fields::required("content", &c)?);
    }
    if let Some(r) = patch.rating {
        am.rating = Set(fields::in_range("rating", r, 0, RATING_MAX)?);
    }
    if let Some(u) = patch.image_url {
        am.image_url = Set(fields::optional_url("imageUrl", u)?);
    }
    if let Some(o) = patch.sort_order {
        am.sort_order = Set(o);
    }
    versioned::update::<Entity, _, _>(db, am, id, expected_version, Column::Id, Column::Version, "testimonial").await
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<bool, ModelError> {
    versioned::delete::<Entity, _>(db, id, Column::Id).await
}
