//! The `service` table: offerings listed on the services section.

use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{self, ModelError};
use crate::fields::{self, StringList};
use crate::icons::ServiceIcon;
use crate::versioned;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub icon: ServiceIcon,
    #[sea_orm(column_type = "Json")]
    pub features: StringList,
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
pub struct NewService {
    pub title: String,
    pub description: String,
    pub icon: ServiceIcon,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, rename = "order")]
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<ServiceIcon>,
    pub features: Option<Vec<String>>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewService) -> Result<Model, ModelError> {
    let now = Utc::now();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(fields::required("title", &input.title)?),
        description: Set(fields::required("description", &input.description)?),
        icon: Set(input.icon),
        features: Set(StringList::cleaned(input.features)),
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
    patch: ServicePatch,
    expected_version: Option<i32>,
) -> Result<Model, ModelError> {
    let mut am = ActiveModel { updated_at: Set(Utc::now().into()), ..Default::default() };
    if let Some(t) = patch.title {
        am.title = Set(fields::required("title", &t)?);
    }
    if let Some(d) = patch.description {
        am.description = Set(fields::required("description", &d)?);
    }
    if let Some(i) = patch.icon {
        am.icon = Set(i);
    }
    if let Some(f) = patch.features {
        am.features = Set(StringList::cleaned(f));
    }
    if let Some(o) = patch.sort_order {
        am.sort_order = Set(o);
    }
    versioned::update::<Entity, _, _>(db, am, id, expected_version, Column::Id, Column::Version, "service").await
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<bool, ModelError> {
    versioned::delete::<Entity, _>(db, id, Column::Id).await
}
