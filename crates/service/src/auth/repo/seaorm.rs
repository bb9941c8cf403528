use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::domain::{AdminUser, Credentials};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_admin(&self, username: &str) -> Result<Option<AdminUser>, AuthError> {
        let res = models::admin::find_by_username(&self.db, username)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(res.map(|a| AdminUser { id: a.id, username: a.username }))
    }

    async fn get_credentials(&self, user_id: Uuid) -> Result<Option<Credentials>, AuthError> {
        use sea_orm::EntityTrait;
        let res = models::admin::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(res.map(|a| Credentials { user_id: a.id, password_hash: a.password_hash }))
    }

    async fn upsert_admin(&self, username: &str, password_hash: String) -> Result<AdminUser, AuthError> {
        let a = models::admin::upsert(&self.db, username, &password_hash)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(AdminUser { id: a.id, username: a.username })
    }
}
