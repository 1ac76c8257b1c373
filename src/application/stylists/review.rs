//! Review submitter

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainError, DomainResult, NewReview, RepositoryProvider, Stylist};

pub struct ReviewService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ReviewService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Record `review` for the authenticated `caller_id`. Returns the new review id.
    ///
    /// A reviewer gets one review in total, whichever stylist it targets.
    pub async fn submit_review(&self, caller_id: &str, review: NewReview) -> DomainResult<String> {
        if caller_id != review.user_id {
            return Err(DomainError::Unauthorized("unauthorized".into()));
        }

        let stylist_id = Stylist::decode_id(&review.stylist_id)?;
        let stylist = self
            .repos
            .stylists()
            .find_by_id(&stylist_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("invalid stylist".into()))?;

        if stylist.is_owned_by(&review.user_id) {
            return Err(DomainError::Validation(
                "you can't create a review for yourself".into(),
            ));
        }

        if self
            .repos
            .reviews()
            .find_by_user_id(&review.user_id)
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict("user already made a review".into()));
        }

        let review = review.into_review(stylist.id);
        self.repos.reviews().insert(&review).await?;
        metrics::counter!("reviews_created_total").increment(1);
        info!(review_id = %review.id, stylist_id = %review.stylist_id, "Review recorded");

        Ok(review.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::TestContext;
    use crate::domain::UserRole;

    fn review_of(user_id: &str, stylist_id: &str) -> NewReview {
        NewReview {
            user_id: user_id.into(),
            stylist_id: stylist_id.into(),
            rating: 5,
            comment: "Neat and on time".into(),
        }
    }

    #[tokio::test]
    async fn review_is_recorded() {
        let ctx = TestContext::new().await;
        let (_, stylist) = ctx.seed_stylist("stylist@example.com").await;
        let client = ctx.seed_user("client@example.com", UserRole::Client).await;

        let id = ctx
            .reviews()
            .submit_review(&client.id, review_of(&client.id, &stylist.id))
            .await
            .unwrap();

        let stored = ctx.repos.reviews().find_by_user_id(&client.id).await.unwrap().unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.stylist_id, stylist.id);
    }

    #[tokio::test]
    async fn self_review_is_rejected() {
        let ctx = TestContext::new().await;
        let (owner, stylist) = ctx.seed_stylist("stylist@example.com").await;

        let err = ctx
            .reviews()
            .submit_review(&owner.id, review_of(&owner.id, &stylist.id))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation("you can't create a review for yourself".into())
        );
    }

    #[tokio::test]
    async fn second_review_by_same_user_is_rejected_even_for_another_stylist() {
        let ctx = TestContext::new().await;
        let (_, first) = ctx.seed_stylist("one@example.com").await;
        let (_, second) = ctx.seed_stylist("two@example.com").await;
        let client = ctx.seed_user("client@example.com", UserRole::Client).await;

        ctx.reviews()
            .submit_review(&client.id, review_of(&client.id, &first.id))
            .await
            .unwrap();
        let err = ctx
            .reviews()
            .submit_review(&client.id, review_of(&client.id, &second.id))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::Conflict("user already made a review".into()));
    }

    #[tokio::test]
    async fn unknown_and_malformed_targets() {
        let ctx = TestContext::new().await;
        let client = ctx.seed_user("client@example.com", UserRole::Client).await;

        let missing = ctx
            .reviews()
            .submit_review(
                &client.id,
                review_of(&client.id, &uuid::Uuid::new_v4().to_string()),
            )
            .await
            .unwrap_err();
        assert_eq!(missing, DomainError::NotFound("invalid stylist".into()));

        let malformed = ctx
            .reviews()
            .submit_review(&client.id, review_of(&client.id, "xyz"))
            .await
            .unwrap_err();
        assert!(matches!(malformed, DomainError::InvalidId(_)));
    }

    #[tokio::test]
    async fn reviewing_as_someone_else_is_unauthorized() {
        let ctx = TestContext::new().await;
        let (_, stylist) = ctx.seed_stylist("stylist@example.com").await;

        let err = ctx
            .reviews()
            .submit_review("intruder", review_of("victim", &stylist.id))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::Unauthorized("unauthorized".into()));
    }
}
