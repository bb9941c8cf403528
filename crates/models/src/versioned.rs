use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::errors::{self, ModelError};

/// Write `am` over row `id` and bump its `version` in one statement.
///
/// With `expected` set the write only lands when the stored version still
/// matches; a miss on an existing row is reported as a conflict.
pub(crate) async fn update<E, A, C>(
    db: &C,
    am: A,
    id: Uuid,
    expected: Option<i32>,
    id_col: E::Column,
    version_col: E::Column,
    noun: &str,
) -> Result<E::Model, ModelError>
where
    E: EntityTrait,
    A: ActiveModelTrait<Entity = E>,
    C: ConnectionTrait,
{
    let mut stmt = E::update_many()
        .set(am)
        .col_expr(version_col, Expr::col(version_col).add(1))
        .filter(id_col.eq(id));
    if let Some(v) = expected {
        stmt = stmt.filter(version_col.eq(v));
    }
    let res = stmt.exec(db).await.map_err(errors::db)?;
    let current = E::find().filter(id_col.eq(id)).one(db).await.map_err(errors::db)?;
    match current {
        None => Err(ModelError::NotFound(noun.to_string())),
        Some(_) if res.rows_affected == 0 => Err(ModelError::Conflict(noun.to_string())),
        Some(model) => Ok(model),
    }
}

pub(crate) async fn delete<E, C>(db: &C, id: Uuid, id_col: E::Column) -> Result<bool, ModelError>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let res = E::delete_many().filter(id_col.eq(id)).exec(db).await.map_err(errors::db)?;
    Ok(res.rows_affected > 0)
}
