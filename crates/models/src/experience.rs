use chrono::{NaiveDate, Utc};
use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{self, ModelError};
use crate::fields;
use crate::versioned;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experience")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub current: bool,
    #[sea_orm(column_type = "Text")]
    pub description: String,
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
    /// "Jan 2022 – Present" style range used by the renderers.
    pub fn period(&self) -> String {
        let end = match (self.current, self.end_date) {
            (true, _) | (false, None) => "Present".to_string(),
            (false, Some(d)) => d.format("%b %Y").to_string(),
        };
        format!("{} – {}", self.start_date.format("%b %Y"), end)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExperience {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(deserialize_with = "fields::date")]
    pub start_date: NaiveDate,
    #[serde(default, deserialize_with = "fields::optional_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: String,
    #[serde(default, rename = "order")]
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePatch {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "fields::nullable_date")]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "fields::nullable_date")]
    pub end_date: Option<Option<NaiveDate>>,
    pub current: Option<bool>,
    pub description: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

/// A current role has no end date; otherwise the end may not precede the start.
fn check_period(start: NaiveDate, end: Option<NaiveDate>, current: bool) -> Result<Option<NaiveDate>, ModelError> {
    if current {
        return Ok(None);
    }
    match end {
        Some(e) if e < start => Err(ModelError::validation("endDate must not be before startDate")),
        other => Ok(other),
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewExperience) -> Result<Model, ModelError> {
    let end_date = check_period(input.start_date, input.end_date, input.current)?;
    let now = Utc::now();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(fields::required("title", &input.title)?),
        company: Set(fields::required("company", &input.company)?),
        location: Set(input.location.trim().to_string()),
        start_date: Set(input.start_date),
        end_date: Set(end_date),
        current: Set(input.current),
        description: Set(fields::required("description", &input.description)?),
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
    patch: ExperiencePatch,
    expected_version: Option<i32>,
) -> Result<Model, ModelError> {
    let mut am = ActiveModel { updated_at: Set(Utc::now().into()), ..Default::default() };
    if let Some(t) = patch.title {
        am.title = Set(fields::required("title", &t)?);
    }
    if let Some(c) = patch.company {
        am.company = Set(fields::required("company", &c)?);
    }
    if let Some(l) = patch.location {
        am.location = Set(l.trim().to_string());
    }
    if let Some(d) = patch.description {
        am.description = Set(fields::required("description", &d)?);
    }
    if let Some(o) = patch.sort_order {
        am.sort_order = Set(o);
    }
    if patch.start_date.is_some() || patch.end_date.is_some() || patch.current.is_some() {
        // the period is validated against the stored row for fields the patch leaves out
        let existing = Entity::find_by_id(id)
            .one(db)
            .await
            .map_err(errors::db)?
            .ok_or_else(|| ModelError::NotFound("experience".into()))?;
        let start = match patch.start_date {
            Some(Some(d)) => d,
            Some(None) => return Err(ModelError::validation("startDate is required")),
            None => existing.start_date,
        };
        let end = patch.end_date.unwrap_or(existing.end_date);
        let current = patch.current.unwrap_or(existing.current);
        am.start_date = Set(start);
        am.end_date = Set(check_period(start, end, current)?);
        am.current = Set(current);
    }
    versioned::update::<Entity, _, _>(db, am, id, expected_version, Column::Id, Column::Version, "experience").await
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<bool, ModelError> {
    versioned::delete::<Entity, _>(db, id, Column::Id).await
}
