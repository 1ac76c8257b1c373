//! Shared fixtures for service and HTTP tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use sea_orm::DatabaseConnection;

use super::ports::{MediaError, MediaFile, MediaUploader};
use super::{IdentityService, ImageService, ProfileService, ReviewService};
use crate::domain::{
    DomainError, DomainResult, ImageRepository, RepositoryProvider, ReviewRepository, Service,
    ServiceRepository, Stylist, StylistRepository, User, UserRepository, UserRole,
};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
use crate::infrastructure::database::test_database;

/// Uploader that hands back `https://media.test/{n}/{file_name}` and can be
/// told to fail on the n-th call (0-based).
#[derive(Default)]
pub struct StubUploader {
    calls: AtomicUsize,
    fail_on: Option<usize>,
    pub uploaded: Mutex<Vec<String>>,
}

impl StubUploader {
    pub fn failing_on(call: usize) -> Self {
        Self {
            fail_on: Some(call),
            ..Self::default()
        }
    }

    pub fn uploaded(&self) -> Vec<String> {
        self.uploaded.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl MediaUploader for StubUploader {
    async fn upload(&self, file: MediaFile) -> Result<String, MediaError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_on == Some(n) {
            return Err(MediaError::Transport("stub refused".into()));
        }
        let url = format!("https://media.test/{}/{}", n, file.file_name);
        if let Ok(mut list) = self.uploaded.lock() {
            list.push(url.clone());
        }
        Ok(url)
    }
}

/// Provider whose service writes always fail; every other repository
/// delegates to `inner`.
pub struct FailingServices {
    inner: Arc<dyn RepositoryProvider>,
    services: RejectingServiceRepository,
}

impl FailingServices {
    pub fn wrap(inner: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            inner,
            services: RejectingServiceRepository,
        }
    }
}

pub struct RejectingServiceRepository;

#[async_trait]
impl ServiceRepository for RejectingServiceRepository {
    async fn insert_many_unordered(&self, services: Vec<Service>) -> DomainResult<usize> {
        Err(DomainError::Database(format!(
            "{n} of {n} services failed to insert: stub refused",
            n = services.len()
        )))
    }

    async fn find_by_stylist(&self, _stylist_id: &str) -> DomainResult<Vec<Service>> {
        Ok(Vec::new())
    }
}

impl RepositoryProvider for FailingServices {
    fn users(&self) -> &dyn UserRepository {
        self.inner.users()
    }
    fn stylists(&self) -> &dyn StylistRepository {
        self.inner.stylists()
    }
    fn services(&self) -> &dyn ServiceRepository {
        &self.services
    }
    fn images(&self) -> &dyn ImageRepository {
        self.inner.images()
    }
    fn reviews(&self) -> &dyn ReviewRepository {
        self.inner.reviews()
    }
}

pub fn jpeg(name: &str) -> MediaFile {
    MediaFile::new(name, Some("image/jpeg".into()), Bytes::from_static(b"\xff\xd8\xff\xe0"))
}

pub struct TestContext {
    pub db: DatabaseConnection,
    pub repos: Arc<dyn RepositoryProvider>,
    pub jwt: JwtConfig,
    pub uploader: Arc<StubUploader>,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with_uploader(StubUploader::default()).await
    }

    pub async fn with_uploader(uploader: StubUploader) -> Self {
        let db = test_database().await;
        let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        Self {
            db,
            repos,
            jwt: JwtConfig::new("test-secret", 1),
            uploader: Arc::new(uploader),
        }
    }

    pub fn identity(&self) -> IdentityService {
        IdentityService::new(self.repos.clone(), self.jwt.clone()).with_hash_cost(4)
    }

    pub fn profiles(&self) -> ProfileService {
        ProfileService::new(self.repos.clone())
    }

    pub fn reviews(&self) -> ReviewService {
        ReviewService::new(self.repos.clone())
    }

    pub fn images(&self) -> ImageService {
        ImageService::new(self.repos.clone(), self.uploader.clone())
    }

    /// Insert a user directly, bypassing password hashing.
    pub async fn seed_user(&self, email: &str, role: UserRole) -> User {
        let user = User::new(email, "not-a-real-hash", role);
        self.repos.users().create(&user).await.unwrap();
        user
    }

    /// A stylist user that already owns a profile.
    pub async fn seed_stylist(&self, email: &str) -> (User, Stylist) {
        let user = self.seed_user(email, UserRole::Stylist).await;
        let stylist = Stylist::new(&user.id);
        self.repos.stylists().insert(&stylist).await.unwrap();
        (user, stylist)
    }

    pub fn token_for(&self, user: &User) -> String {
        create_token(&user.id, &user.email, user.role.as_str(), &self.jwt).unwrap()
    }
}
