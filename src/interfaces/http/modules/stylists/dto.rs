//! Stylist DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Image, NewReview, NewService, Service, StylistProfile};

// ── Requests ────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ServiceRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(length(min = 1))]
    pub currency_symbol: String,
    #[validate(length(min = 1))]
    pub currency_name: String,
}

impl From<ServiceRequest> for NewService {
    fn from(r: ServiceRequest) -> Self {
        NewService {
            name: r.name,
            price: r.price,
            currency_symbol: r.currency_symbol,
            currency_name: r.currency_name,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStylistRequest {
    /// Must equal the caller's own user id
    #[validate(length(min = 1))]
    pub user_id: String,
    #[serde(default)]
    #[validate(nested)]
    pub services: Vec<ServiceRequest>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReviewRequest {
    /// Reviewer; must equal the caller's own user id
    #[validate(length(min = 1))]
    pub user_id: String,
    #[validate(length(min = 1))]
    pub stylist_id: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub comment: String,
}

impl From<CreateReviewRequest> for NewReview {
    fn from(r: CreateReviewRequest) -> Self {
        NewReview {
            user_id: r.user_id,
            stylist_id: r.stylist_id,
            rating: r.rating,
            comment: r.comment,
        }
    }
}

// ── Responses ───────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceDto {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub currency_symbol: String,
    pub currency_name: String,
    pub stylist_id: String,
}

impl From<Service> for ServiceDto {
    fn from(s: Service) -> Self {
        Self {
            id: s.id,
            name: s.name,
            price: s.price,
            currency_symbol: s.currency_symbol,
            currency_name: s.currency_name,
            stylist_id: s.stylist_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ImageDto {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub stylist_id: String,
    pub created_at: i64,
}

impl From<Image> for ImageDto {
    fn from(i: Image) -> Self {
        Self {
            id: i.id,
            kind: i.kind.as_str().to_string(),
            url: i.url,
            stylist_id: i.stylist_id,
            created_at: i.created_at,
        }
    }
}

/// The full profile: stylist record with its services and images.
#[derive(Debug, Serialize, ToSchema)]
pub struct StylistDto {
    pub id: String,
    pub user_id: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub services: Vec<ServiceDto>,
    pub images: Vec<ImageDto>,
}

impl From<StylistProfile> for StylistDto {
    fn from(p: StylistProfile) -> Self {
        Self {
            id: p.stylist.id,
            user_id: p.stylist.user_id,
            created_at: p.stylist.created_at,
            updated_at: p.stylist.updated_at,
            services: p.services.into_iter().map(ServiceDto::from).collect(),
            images: p.images.into_iter().map(ImageDto::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedStylist {
    pub stylist_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedReview {
    pub review_id: String,
}

/// An image as reported back after upload (no owner reference).
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadedImage {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub created_at: i64,
}

impl From<Image> for UploadedImage {
    fn from(i: Image) -> Self {
        Self {
            kind: i.kind.as_str().to_string(),
            url: i.url,
            created_at: i.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadedImages {
    pub images: Vec<UploadedImage>,
}

/// Multipart body for `POST /api/v1/stylist/images` (OpenAPI only)
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ImageUploadForm {
    /// One or more image files
    #[schema(value_type = Vec<String>, format = Binary)]
    pub images: Vec<Vec<u8>>,
}
