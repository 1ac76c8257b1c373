use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::{db_err, is_unique_violation};
use crate::domain::{DomainError, DomainResult, Stylist, StylistRepository};
use crate::infrastructure::database::entities::stylist;

pub struct SeaOrmStylistRepository {
    db: DatabaseConnection,
}

impl SeaOrmStylistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn stylist_model_to_domain(model: stylist::Model) -> Stylist {
    Stylist {
        id: model.id,
        user_id: model.user_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl StylistRepository for SeaOrmStylistRepository {
    async fn insert(&self, s: &Stylist) -> DomainResult<()> {
        let model = stylist::ActiveModel {
            id: Set(s.id.clone()),
            user_id: Set(s.user_id.clone()),
            created_at: Set(s.created_at),
            updated_at: Set(s.updated_at),
        };

        // The unique index on user_id settles concurrent creates for one user.
        model.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::Conflict("stylist already exists".to_string())
            } else {
                db_err(e)
            }
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Stylist>> {
        let model = stylist::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(stylist_model_to_domain))
    }

    async fn find_by_user_id(&self, user_id: &str) -> DomainResult<Option<Stylist>> {
        let model = stylist::Entity::find()
            .filter(stylist::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(stylist_model_to_domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::test_database;

    #[tokio::test]
    async fn insert_then_lookup_both_ways() {
        let repo = SeaOrmStylistRepository::new(test_database().await);
        let stylist = Stylist::new("user-1");
        repo.insert(&stylist).await.unwrap();

        assert_eq!(repo.find_by_id(&stylist.id).await.unwrap(), Some(stylist.clone()));
        assert_eq!(repo.find_by_user_id("user-1").await.unwrap(), Some(stylist));
        assert_eq!(repo.find_by_user_id("user-2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn second_profile_for_same_user_is_conflict() {
        let repo = SeaOrmStylistRepository::new(test_database().await);
        repo.insert(&Stylist::new("user-1")).await.unwrap();

        let err = repo.insert(&Stylist::new("user-1")).await.unwrap_err();
        assert_eq!(err, DomainError::Conflict("stylist already exists".into()));
    }
}
