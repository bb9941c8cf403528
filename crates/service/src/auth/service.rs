use std::sync::Arc;

use argon2::{Argon2, password_hash::{PasswordHasher, PasswordVerifier, SaltString}, PasswordHash};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use once_cell::sync::Lazy;
use rand::rngs::OsRng;
use tracing::{debug, info, instrument, warn};

use super::domain::{AdminUser, AuthSession, Claims, LoginInput};
use super::errors::AuthError;
use super::repository::AuthRepository;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Verified in place of a real hash when the username is unknown, so both
/// failure paths do the same argon2 work.
static DUMMY_HASH: Lazy<Option<String>> = Lazy::new(|| {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(b"not-a-real-password", &salt)
        .map(|h| h.to_string())
        .ok()
});

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

impl From<&configs::AuthConfig> for AuthConfig {
    fn from(c: &configs::AuthConfig) -> Self {
        Self { jwt_secret: c.jwt_secret.clone(), token_ttl_hours: c.token_ttl_hours }
    }
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self { Self { repo, cfg } }

    /// Create the admin or replace its password.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo, AuthConfig { jwt_secret: "secret".into(), token_ttl_hours: 12 });
    /// let admin = tokio_test::block_on(svc.set_password("hashnova", "Secret123")).unwrap();
    /// assert_eq!(admin.username, "hashnova");
    /// ```
    #[instrument(skip(self, password))]
    pub async fn set_password(&self, username: &str, password: &str) -> Result<AdminUser, AuthError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AuthError::Validation("username required".into()));
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::Validation(format!("password too short (>={MIN_PASSWORD_LEN})")));
        }
        let password = password.to_owned();
        let hash = off_runtime(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|h| h.to_string())
                .map_err(|e| AuthError::HashError(e.to_string()))
        })
        .await?;
        let user = self.repo.upsert_admin(username, hash).await?;
        info!(user_id = %user.id, username = %user.username, "admin_password_set");
        Ok(user)
    }

    /// Check a username/password pair and issue a bearer token.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::LoginInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo, AuthConfig { jwt_secret: "secret".into(), token_ttl_hours: 12 });
    /// tokio_test::block_on(svc.set_password("hashnova", "Passw0rd!")).unwrap();
    /// let input = LoginInput { username: Some("hashnova".into()), password: Some("Passw0rd!".into()) };
    /// let session = tokio_test::block_on(svc.login(input)).unwrap();
    /// assert_eq!(session.user.username, "hashnova");
    /// assert!(svc.verify_token(&session.token).is_ok());
    /// ```
    #[instrument(skip(self, input), fields(username = input.username.as_deref().unwrap_or("")))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let (username, password) = match (input.username.as_deref().map(str::trim), input.password.as_deref()) {
            (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
            _ => return Err(AuthError::Validation("Username and password required".into())),
        };

        let password = password.to_owned();
        let Some(user) = self.repo.find_admin(username).await? else {
            if let Some(dummy) = DUMMY_HASH.clone() {
                let _ = off_runtime(move || verify(&password, &dummy)).await;
            }
            debug!("unknown admin");
            return Err(AuthError::Unauthorized);
        };

        let cred = self.repo
            .get_credentials(user.id)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        let stored = cred.password_hash;
        if !off_runtime(move || verify(&password, &stored)).await? {
            warn!(user_id = %user.id, "admin_login_rejected");
            return Err(AuthError::Unauthorized);
        }

        let token = self.issue_token(&user)?;
        info!(user_id = %user.id, "admin_logged_in");
        Ok(AuthSession { user, token })
    }

    pub fn issue_token(&self, user: &AdminUser) -> Result<String, AuthError> {
        let now = chrono::Utc::now();
        let exp = chrono::TimeDelta::try_hours(self.cfg.token_ttl_hours)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| AuthError::TokenError(format!("token ttl of {}h is out of range", self.cfg.token_ttl_hours)))?;
        let claims = Claims {
            sub: user.username.clone(),
            uid: user.id.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };
        encode(&JwtHeader::default(), &claims, &EncodingKey::from_secret(self.cfg.jwt_secret.as_bytes()))
            .map_err(|e| AuthError::TokenError(e.to_string()))
    }

    /// Validate signature and expiry of a bearer token.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(token, &DecodingKey::from_secret(self.cfg.jwt_secret.as_bytes()), &validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::TokenError(e.to_string()))
    }
}

/// Argon2 is CPU-bound; run it on the blocking pool so logins do not stall
/// the request workers.
async fn off_runtime<T, F>(work: F) -> Result<T, AuthError>
where
    F: FnOnce() -> Result<T, AuthError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AuthError::HashError(e.to_string()))?
}

/// `Ok(false)` on mismatch; `Err` only when the stored hash is unreadable.
fn verify(password: &str, stored: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(stored).map_err(|e| AuthError::HashError(e.to_string()))?;
    Ok(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repository::mock::MockAuthRepository;

    fn svc(repo: MockAuthRepository) -> AuthService<MockAuthRepository> {
        AuthService::new(Arc::new(repo), AuthConfig { jwt_secret: "test-secret".into(), token_ttl_hours: 1 })
    }

    fn input(u: Option<&str>, p: Option<&str>) -> LoginInput {
        LoginInput { username: u.map(Into::into), password: p.map(Into::into) }
    }

    #[tokio::test]
    async fn login_issues_verifiable_token() {
        let s = svc(MockAuthRepository::default());
        let admin = s.set_password("hashnova", "correct horse").await.unwrap();
        let session = s.login(input(Some(" hashnova "), Some("correct horse"))).await.unwrap();
        assert_eq!(session.user, admin);
        let claims = s.verify_token(&session.token).unwrap();
        assert_eq!(claims.sub, "hashnova");
        assert_eq!(claims.uid, admin.id.to_string());
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_look_the_same() {
        let s = svc(MockAuthRepository::default());
        s.set_password("hashnova", "correct horse").await.unwrap();
        let wrong = s.login(input(Some("hashnova"), Some("battery staple"))).await.unwrap_err();
        let unknown = s.login(input(Some("mallory"), Some("correct horse"))).await.unwrap_err();
        assert!(matches!(wrong, AuthError::Unauthorized));
        assert!(matches!(unknown, AuthError::Unauthorized));
        assert_eq!(wrong.to_string(), unknown.to_string());
    }

    #[tokio::test]
    async fn blank_fields_are_validation_errors() {
        let s = svc(MockAuthRepository::default());
        for (u, p) in [(None, Some("x")), (Some("a"), None), (Some("  "), Some("x")), (Some("a"), Some(""))] {
            let err = s.login(input(u, p)).await.unwrap_err();
            assert_eq!(err.to_string(), "validation failed: Username and password required");
        }
    }

    #[tokio::test]
    async fn store_failure_is_a_repository_error() {
        let s = svc(MockAuthRepository::failing());
        let err = s.login(input(Some("hashnova"), Some("pw"))).await.unwrap_err();
        assert_eq!(err.code(), 1200);
    }

    #[test]
    fn tampered_or_foreign_tokens_are_rejected() {
        let s = svc(MockAuthRepository::default());
        let user = AdminUser { id: uuid::Uuid::new_v4(), username: "hashnova".into() };
        let token = s.issue_token(&user).unwrap();
        let other = AuthService::new(
            Arc::new(MockAuthRepository::default()),
            AuthConfig { jwt_secret: "other".into(), token_ttl_hours: 1 },
        );
        assert!(other.verify_token(&token).is_err());
        assert!(s.verify_token("not.a.jwt").is_err());
    }

    #[tokio::test]
    async fn oversized_ttl_fails_the_login_instead_of_panicking() {
        let s = AuthService::new(
            Arc::new(MockAuthRepository::default()),
            AuthConfig { jwt_secret: "test-secret".into(), token_ttl_hours: 1_000_000_000_000 },
        );
        s.set_password("hashnova", "correct horse").await.unwrap();
        let err = s.login(input(Some("hashnova"), Some("correct horse"))).await.unwrap_err();
        assert!(matches!(err, AuthError::TokenError(_)));
        assert_eq!(err.code(), 1102);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn concurrent_logins_resolve_on_a_single_worker() {
        let s = Arc::new(svc(MockAuthRepository::default()));
        s.set_password("hashnova", "correct horse").await.unwrap();
        let logins: Vec<_> = (0..4)
            .map(|i| {
                let s = Arc::clone(&s);
                let name = if i % 2 == 0 { "hashnova" } else { "mallory" };
                tokio::spawn(async move { s.login(input(Some(name), Some("correct horse"))).await })
            })
            .collect();
        let mut ok = 0;
        for handle in logins {
            match handle.await.unwrap() {
                Ok(_) => ok += 1,
                Err(e) => assert!(matches!(e, AuthError::Unauthorized)),
            }
        }
        assert_eq!(ok, 2);
    }

    #[test]
    fn short_passwords_rejected() {
        let s = svc(MockAuthRepository::default());
        let err = tokio_test::block_on(s.set_password("hashnova", "short")).unwrap_err();
        assert_eq!(err.code(), 1001);
    }
}
