//! User repository interface

use async_trait::async_trait;

use super::{User, UserRole};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. A duplicate email is a `Conflict`.
    async fn create(&self, user: &User) -> DomainResult<()>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Find a user only if it carries the given role.
    async fn find_by_id_and_role(&self, id: &str, role: UserRole) -> DomainResult<Option<User>>;
}
