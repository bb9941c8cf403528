use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{AdminUser, Credentials};
use super::errors::AuthError;

/// Repository abstraction for auth-related persistence.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn find_admin(&self, username: &str) -> Result<Option<AdminUser>, AuthError>;
    async fn get_credentials(&self, user_id: Uuid) -> Result<Option<Credentials>, AuthError>;
    async fn upsert_admin(&self, username: &str, password_hash: String) -> Result<AdminUser, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAuthRepository {
        admins: Mutex<HashMap<String, (AdminUser, Credentials)>>, // key: username
        fail: bool,
    }

    impl MockAuthRepository {
        /// A repository whose every call fails, for store-outage paths.
        pub fn failing() -> Self {
            Self { fail: true, ..Self::default() }
        }

        fn check(&self) -> Result<(), AuthError> {
            if self.fail {
                return Err(AuthError::Repository("store unavailable".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl AuthRepository for MockAuthRepository {
        async fn find_admin(&self, username: &str) -> Result<Option<AdminUser>, AuthError> {
            self.check()?;
            let admins = self.admins.lock().map_err(|e| AuthError::Repository(e.to_string()))?;
            Ok(admins.get(username).map(|(u, _)| u.clone()))
        }

        async fn get_credentials(&self, user_id: Uuid) -> Result<Option<Credentials>, AuthError> {
            self.check()?;
            let admins = self.admins.lock().map_err(|e| AuthError::Repository(e.to_string()))?;
            Ok(admins.values().find(|(u, _)| u.id == user_id).map(|(_, c)| c.clone()))
        }

        async fn upsert_admin(&self, username: &str, password_hash: String) -> Result<AdminUser, AuthError> {
            self.check()?;
            let mut admins = self.admins.lock().map_err(|e| AuthError::Repository(e.to_string()))?;
            let id = admins.get(username).map(|(u, _)| u.id).unwrap_or_else(Uuid::new_v4);
            let user = AdminUser { id, username: username.to_string() };
            admins.insert(username.to_string(), (user.clone(), Credentials { user_id: id, password_hash }));
            Ok(user)
        }
    }
}
