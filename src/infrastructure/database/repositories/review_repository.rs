use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::{db_err, is_unique_violation};
use crate::domain::{DomainError, DomainResult, Review, ReviewRepository};
use crate::infrastructure::database::entities::review;

pub struct SeaOrmReviewRepository {
    db: DatabaseConnection,
}

impl SeaOrmReviewRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn review_model_to_domain(model: review::Model) -> Review {
    Review {
        id: model.id,
        user_id: model.user_id,
        stylist_id: model.stylist_id,
        rating: model.rating,
        comment: model.comment,
        created_at: model.created_at,
    }
}

#[async_trait]
impl ReviewRepository for SeaOrmReviewRepository {
    async fn insert(&self, r: &Review) -> DomainResult<()> {
        let model = review::ActiveModel {
            id: Set(r.id.clone()),
            user_id: Set(r.user_id.clone()),
            stylist_id: Set(r.stylist_id.clone()),
            rating: Set(r.rating),
            comment: Set(r.comment.clone()),
            created_at: Set(r.created_at),
        };

        model.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::Conflict("user already made a review".to_string())
            } else {
                db_err(e)
            }
        })?;

        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &str) -> DomainResult<Option<Review>> {
        let model = review::Entity::find()
            .filter(review::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(review_model_to_domain))
    }
}
