use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, PaginatorTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{self, ModelError};
use crate::fields::{self, StringList};
use crate::versioned;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Json")]
    pub technologies: StringList,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub version: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, rename = "order")]
    pub sort_order: i32,
}

/// Partial update; `null` on a link field clears it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    #[serde(default, deserialize_with = "fields::nullable")]
    pub live_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "fields::nullable")]
    pub github_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "fields::nullable")]
    pub image_url: Option<Option<String>>,
    pub featured: Option<bool>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewProject) -> Result<Model, ModelError> {
    let now = Utc::now();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(fields::required("title", &input.title)?),
        description: Set(fields::required("description", &input.description)?),
        technologies: Set(StringList::cleaned(input.technologies)),
        live_url: Set(fields::optional_url("liveUrl", input.live_url)?),
        github_url: Set(fields::optional_url("githubUrl", input.github_url)?),
        image_url: Set(fields::optional_url("imageUrl", input.image_url)?),
        featured: Set(input.featured),
        sort_order: Set(input.sort_order),
        version: Set(1),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    am.insert(db).await.map_err(errors::db)
}

/// Ascending display order, oldest first within equal order.
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
    patch: ProjectPatch,
    expected_version: Option<i32>,
) -> Result<Model, ModelError> {
    let mut am = ActiveModel { updated_at: Set(Utc::now().into()), ..Default::default() };
    if let Some(t) = patch.title {
        am.title = Set(fields::required("title", &t)?);
    }
    if let Some(d) = patch.description {
        am.description = Set(fields::required("description", &d)?);
    }
    if let Some(tech) = patch.technologies {
        am.technologies = Set(StringList::cleaned(tech));
    }
    if let Some(u) = patch.live_url {
        am.live_url = Set(fields::optional_url("liveUrl", u)?);
    }
    if let Some(u) = patch.github_url {
        am.github_url = Set(fields::optional_url("githubUrl", u)?);
    }
    if let Some(u) = patch.image_url {
        am.image_url = Set(fields::optional_url("imageUrl", u)?);
    }
    if let Some(f) = patch.featured {
        am.featured = Set(f);
    }
    if let Some(o) = patch.sort_order {
        am.sort_order = Set(o);
    }
    versioned::update::<Entity, _, _>(db, am, id, expected_version, Column::Id, Column::Version, "project").await
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<bool, ModelError> {
    versioned::delete::<Entity, _>(db, id, Column::Id).await
}

pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64, ModelError> {
    Entity::find().count(db).await.map_err(errors::db)
}
