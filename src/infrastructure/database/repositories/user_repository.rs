use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::{db_err, is_unique_violation};
use crate::domain::{DomainError, DomainResult, User, UserRepository, UserRole};
use crate::infrastructure::database::entities::user;

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_role_to_domain(role: user::UserRole) -> UserRole {
    match role {
        user::UserRole::Client => UserRole::Client,
        user::UserRole::Stylist => UserRole::Stylist,
    }
}

fn domain_role_to_entity(role: UserRole) -> user::UserRole {
    match role {
        UserRole::Client => user::UserRole::Client,
        UserRole::Stylist => user::UserRole::Stylist,
    }
}

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        role: entity_role_to_domain(model.role),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, u: &User) -> DomainResult<()> {
        let model = user::ActiveModel {
            id: Set(u.id.clone()),
            email: Set(u.email.clone()),
            password_hash: Set(u.password_hash.clone()),
            role: Set(domain_role_to_entity(u.role)),
            created_at: Set(u.created_at),
            updated_at: Set(u.updated_at),
        };

        model.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::Conflict("email already registered".to_string())
            } else {
                db_err(e)
            }
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(user_model_to_domain))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(user_model_to_domain))
    }

    async fn find_by_id_and_role(&self, id: &str, role: UserRole) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id.to_string())
            .filter(user::Column::Role.eq(domain_role_to_entity(role)))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(user_model_to_domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::test_database;

    #[tokio::test]
    async fn create_and_find_by_email() {
        let repo = SeaOrmUserRepository::new(test_database().await);
        let user = User::new("ada@example.com", "hash", UserRole::Stylist);
        repo.create(&user).await.unwrap();

        let found = repo.find_by_email("ada@example.com").await.unwrap().unwrap();
        assert_eq!(found, user);
        assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_email_is_conflict() {
        let repo = SeaOrmUserRepository::new(test_database().await);
        repo.create(&User::new("ada@example.com", "a", UserRole::Client))
            .await
            .unwrap();

        let err = repo
            .create(&User::new("ada@example.com", "b", UserRole::Stylist))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn find_by_id_and_role_filters_on_role() {
        let repo = SeaOrmUserRepository::new(test_database().await);
        let user = User::new("client@example.com", "hash", UserRole::Client);
        repo.create(&user).await.unwrap();

        assert!(repo
            .find_by_id_and_role(&user.id, UserRole::Stylist)
            .await
            .unwrap()
            .is_none());
        assert!(repo
            .find_by_id_and_role(&user.id, UserRole::Client)
            .await
            .unwrap()
            .is_some());
    }
}
