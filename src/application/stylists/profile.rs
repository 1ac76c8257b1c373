//! Profile reader and creator

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::{
    DomainError, DomainResult, NewService, RepositoryProvider, Stylist, StylistProfile, UserRole,
};

pub struct ProfileService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ProfileService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Load a stylist and splice in its services and images.
    ///
    /// A `raw_id` that is not a valid id is an `InvalidId` (internal), not a
    /// caller error.
    pub async fn get_profile(&self, raw_id: &str) -> DomainResult<StylistProfile> {
        let id = Stylist::decode_id(raw_id)?;

        let stylist = self
            .repos
            .stylists()
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Stylist not found".into()))?;

        let services = self.repos.services().find_by_stylist(&stylist.id).await?;
        let images = self.repos.images().find_by_stylist(&stylist.id).await?;

        Ok(StylistProfile::assemble(stylist, services, images))
    }

    /// Register a profile for `owner_id` on behalf of the authenticated `caller_id`.
    ///
    /// The stylist row is committed before the services; a service insert
    /// failure is reported but leaves the profile in place.
    pub async fn create_profile(
        &self,
        caller_id: &str,
        owner_id: &str,
        services: Vec<NewService>,
    ) -> DomainResult<String> {
        if caller_id != owner_id {
            return Err(DomainError::Unauthorized("unauthorized".into()));
        }

        if self
            .repos
            .users()
            .find_by_id_and_role(owner_id, UserRole::Stylist)
            .await?
            .is_none()
        {
            return Err(DomainError::Validation("user is not a stylist".into()));
        }

        if self.repos.stylists().find_by_user_id(owner_id).await?.is_some() {
            return Err(DomainError::Conflict("stylist already exists".into()));
        }

        let stylist = Stylist::new(owner_id);
        self.repos.stylists().insert(&stylist).await?;
        metrics::counter!("stylists_created_total").increment(1);
        info!(stylist_id = %stylist.id, user_id = %owner_id, "Stylist profile created");

        if !services.is_empty() {
            let rows = services
                .into_iter()
                .map(|s| s.attach_to(&stylist.id))
                .collect();
            if let Err(e) = self.repos.services().insert_many_unordered(rows).await {
                error!(stylist_id = %stylist.id, error = %e, "Profile created without all of its services");
                return Err(e);
            }
        }

        Ok(stylist.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{FailingServices, TestContext};
    use crate::domain::{Image, Service};

    fn braids() -> NewService {
        NewService {
            name: "Box braids".into(),
            price: 120.0,
            currency_symbol: "$".into(),
            currency_name: "USD".into(),
        }
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let ctx = TestContext::new().await;
        let err = ctx
            .profiles()
            .get_profile(&uuid::Uuid::new_v4().to_string())
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound("Stylist not found".into()));
    }

    #[tokio::test]
    async fn malformed_id_is_internal() {
        let ctx = TestContext::new().await;
        let err = ctx.profiles().get_profile("not-an-id").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
        assert!(err.is_internal());
    }

    #[tokio::test]
    async fn profile_contains_exactly_its_own_children() {
        let ctx = TestContext::new().await;
        let (_, mine) = ctx.seed_stylist("mine@example.com").await;
        let (_, other) = ctx.seed_stylist("other@example.com").await;

        ctx.repos
            .services()
            .insert_many_unordered(vec![
                braids().attach_to(&mine.id),
                braids().attach_to(&other.id),
            ])
            .await
            .unwrap();
        ctx.repos
            .images()
            .insert_many(vec![
                Image::new_stylist_image("https://cdn/1.jpg", &mine.id),
                Image::new_stylist_image("https://cdn/2.jpg", &mine.id),
                Image::new_stylist_image("https://cdn/3.jpg", &other.id),
            ])
            .await
            .unwrap();

        let profile = ctx.profiles().get_profile(&mine.id).await.unwrap();
        assert_eq!(profile.stylist, mine);
        assert_eq!(profile.services.len(), 1);
        assert_eq!(profile.images.len(), 2);
        assert!(profile.services.iter().all(|s: &Service| s.stylist_id == mine.id));
        assert!(profile.images.iter().all(|i| i.stylist_id == mine.id));
    }

    #[tokio::test]
    async fn create_attaches_services_to_new_profile() {
        let ctx = TestContext::new().await;
        let user = ctx.seed_user("ada@example.com", UserRole::Stylist).await;

        let trim = NewService {
            name: "Trim".into(),
            price: 15.5,
            currency_symbol: "\u{20a6}".into(),
            currency_name: "NGN".into(),
        };

        let id = ctx
            .profiles()
            .create_profile(&user.id, &user.id, vec![braids(), trim.clone()])
            .await
            .unwrap();

        // Upper-case input decodes to the stored canonical id.
        let profile = ctx.profiles().get_profile(&id.to_uppercase()).await.unwrap();
        assert_eq!(profile.stylist.id, id);
        assert_eq!(profile.stylist.user_id, user.id);
        assert_eq!(profile.services.len(), 2);

        let mut submitted = vec![braids(), trim];
        submitted.sort_by(|a, b| a.name.cmp(&b.name));
        let mut stored: Vec<NewService> = profile
            .services
            .into_iter()
            .map(|s| {
                assert_eq!(s.stylist_id, id);
                NewService {
                    name: s.name,
                    price: s.price,
                    currency_symbol: s.currency_symbol,
                    currency_name: s.currency_name,
                }
            })
            .collect();
        stored.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(stored, submitted);
    }

    #[tokio::test]
    async fn failed_service_insert_keeps_the_profile() {
        let ctx = TestContext::new().await;
        let user = ctx.seed_user("ada@example.com", UserRole::Stylist).await;
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(FailingServices::wrap(ctx.repos.clone()));

        let err = ProfileService::new(repos)
            .create_profile(&user.id, &user.id, vec![braids()])
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Database(_)));
        assert!(err.is_internal());

        let kept = ctx
            .repos
            .stylists()
            .find_by_user_id(&user.id)
            .await
            .unwrap()
            .expect("stylist row stays committed");
        assert_eq!(kept.user_id, user.id);
        assert!(ctx.repos.services().find_by_stylist(&kept.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_for_someone_else_is_unauthorized() {
        let ctx = TestContext::new().await;
        let user = ctx.seed_user("ada@example.com", UserRole::Stylist).await;

        let err = ctx
            .profiles()
            .create_profile("someone-else", &user.id, vec![])
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::Unauthorized("unauthorized".into()));
    }

    #[tokio::test]
    async fn client_cannot_create_profile() {
        let ctx = TestContext::new().await;
        let user = ctx.seed_user("ada@example.com", UserRole::Client).await;

        let err = ctx
            .profiles()
            .create_profile(&user.id, &user.id, vec![])
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::Validation("user is not a stylist".into()));
    }

    #[tokio::test]
    async fn second_profile_is_rejected() {
        let ctx = TestContext::new().await;
        let (user, _) = ctx.seed_stylist("ada@example.com").await;

        let err = ctx
            .profiles()
            .create_profile(&user.id, &user.id, vec![braids()])
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::Conflict("stylist already exists".into()));
    }
}
