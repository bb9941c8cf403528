use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{self, ModelError};
use crate::fields;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "admin")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find_by_username<C: ConnectionTrait>(db: &C, username: &str) -> Result<Option<Model>, ModelError> {
    Entity::find()
        .filter(Column::Username.eq(username.trim()))
        .one(db)
        .await
        .map_err(errors::db)
}

/// Insert the admin, or replace the stored hash when the username exists.
pub async fn upsert<C: ConnectionTrait>(db: &C, username: &str, password_hash: &str) -> Result<Model, ModelError> {
    let username = fields::required("username", username)?;
    let now = Utc::now();
    match find_by_username(db, &username).await? {
        Some(existing) => {
            let mut am: ActiveModel = existing.into();
            am.password_hash = Set(password_hash.to_string());
            am.updated_at = Set(now.into());
            am.update(db).await.map_err(errors::db)
        }
        None => {
            let am = ActiveModel {
                id: Set(Uuid::new_v4()),
                username: Set(username),
                password_hash: Set(password_hash.to_string()),
                created_at: Set(now.into()),
                updated_at: Set(now.into()),
            };
            am.insert(db).await.map_err(errors::db)
        }
    }
}
