use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, PaginatorTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{self, ModelError};
use crate::fields;
use crate::icons::SkillIcon;
use crate::versioned;

pub const LEVEL_MAX: i32 = 100;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skill")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub icon: SkillIcon,
    pub category: String,
    pub level: i32,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub version: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSkill {
    pub name: String,
    pub icon: SkillIcon,
    pub category: String,
    pub level: i32,
    #[serde(default, rename = "order")]
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillPatch {
    pub name: Option<String>,
    pub icon: Option<SkillIcon>,
    pub category: Option<String>,
    pub level: Option<i32>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewSkill) -> Result<Model, ModelError> {
    let now = Utc::now();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(fields::required("name", &input.name)?),
        icon: Set(input.icon),
        category: Set(fields::required("category", &input.category)?),
        level: Set(fields::in_range("level", input.level, 0, LEVEL_MAX)?),
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

pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64, ModelError> {
    Entity::find().count(db).await.map_err(errors::db)
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    patch: SkillPatch,
    expected_version: Option<i32>,
) -> Result<Model, ModelError> {
    let mut am = ActiveModel { updated_at: Set(Utc::now().into()), ..Default::default() };
    if let Some(n) = patch.name {
        am.name = Set(fields::required("name", &n)?);
    }
    if let Some(i) = patch.icon {
        am.icon = Set(i);
    }
    if let Some(c) = patch.category {
        am.category = Set(fields::required("category", &c)?);
    }
    if let Some(l) = patch.level {
        am.level = Set(fields::in_range("level", l, 0, LEVEL_MAX)?);
    }
    if let Some(o) = patch.sort_order {
        am.sort_order = Set(o);
    }
    versioned::update::<Entity, _, _>(db, am, id, expected_version, Column::Id, Column::Version, "skill").await
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<bool, ModelError> {
    versioned::delete::<Entity, _>(db, id, Column::Id).await
}
