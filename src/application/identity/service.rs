//! Identity service - application-layer orchestration
//!
//! Registration and login. HTTP handlers are thin wrappers that delegate here.

use std::sync::Arc;

use bcrypt::DEFAULT_COST;
use tracing::info;

use crate::domain::{DomainError, DomainResult, RepositoryProvider, User, UserRole};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::{hash_password_with_cost, verify_password};

/// Authentication result returned after a successful login
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: User,
}

pub struct IdentityService {
    repos: Arc<dyn RepositoryProvider>,
    jwt_config: JwtConfig,
    hash_cost: u32,
}

impl IdentityService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, jwt_config: JwtConfig) -> Self {
        Self {
            repos,
            jwt_config,
            hash_cost: DEFAULT_COST,
        }
    }

    /// Override the bcrypt cost (tests use the minimum).
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }

    pub fn jwt_config(&self) -> &JwtConfig {
        &self.jwt_config
    }

    // ── Registration ────────────────────────────────────────────

    pub async fn register(&self, email: &str, password: &str, role: UserRole) -> DomainResult<User> {
        let email = email.trim().to_ascii_lowercase();

        if self.repos.users().find_by_email(&email).await?.is_some() {
            return Err(DomainError::Conflict("email already registered".into()));
        }

        let password_hash = hash_password_with_cost(password, self.hash_cost)
            .map_err(|e| DomainError::Database(format!("Failed to hash password: {}", e)))?;

        let user = User::new(email, password_hash, role);
        self.repos.users().create(&user).await?;

        info!(user_id = %user.id, role = %user.role, "New user registered");
        Ok(user)
    }

    // ── Authentication ──────────────────────────────────────────

    /// Authenticate by email + password and return a signed token.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResult> {
        let email = email.trim().to_ascii_lowercase();

        let Some(user) = self.repos.users().find_by_email(&email).await? else {
            return Err(DomainError::Unauthorized("invalid credentials".into()));
        };

        let valid = verify_password(password, &user.password_hash).unwrap_or(false);
        if !valid {
            return Err(DomainError::Unauthorized("invalid credentials".into()));
        }

        let token = create_token(&user.id, &user.email, user.role.as_str(), &self.jwt_config)
            .map_err(|e| DomainError::Database(format!("Failed to create token: {}", e)))?;

        info!(user_id = %user.id, "User logged in");
        Ok(AuthResult {
            token,
            token_type: "Bearer".into(),
            expires_in: self.jwt_config.expiration_hours * 3600,
            user,
        })
    }
}
