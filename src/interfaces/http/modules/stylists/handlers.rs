//! Stylist API handlers
//!
//! Thin wrappers over `ProfileService`, `ReviewService` and `ImageService`.

use std::sync::Arc;

use axum::{
    extract::{multipart::{MultipartError, MultipartRejection}, Multipart, Path, State},
    http::StatusCode,
    Extension,
};
use bytes::BytesMut;
use tracing::{debug, error};

use super::dto::{
    CreateReviewRequest, CreateStylistRequest, CreatedReview, CreatedStylist, ImageUploadForm,
    StylistDto, UploadedImage, UploadedImages,
};
use crate::application::{ImageService, MediaFile, ProfileService, ReviewService};
use crate::interfaces::http::common::{respond, ApiError, ApiResponse, ApiResult, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Multipart field carrying the image files
pub const IMAGES_FIELD: &str = "images";

/// Stylist handler state
#[derive(Clone)]
pub struct StylistHandlerState {
    pub profiles: Arc<ProfileService>,
    pub reviews: Arc<ReviewService>,
    pub images: Arc<ImageService>,
    /// Per-file upload limit
    pub max_file_size: usize,
}

#[utoipa::path(
    get,
    path = "/api/v1/stylist/{id}",
    tag = "Stylists",
    params(("id" = String, Path, description = "Stylist ID")),
    responses(
        (status = 200, description = "Stylist with services and images", body = ApiResponse<StylistDto>),
        (status = 404, description = "Stylist not found"),
        (status = 500, description = "Malformed id or storage failure")
    )
)]
pub async fn get_stylist(
    State(state): State<StylistHandlerState>,
    Path(id): Path<String>,
) -> ApiResult<StylistDto> {
    let profile = state.profiles.get_profile(&id).await?;
    respond(StatusCode::OK, "stylist fetched", StylistDto::from(profile))
}

#[utoipa::path(
    post,
    path = "/api/v1/stylist",
    tag = "Stylists",
    security(("bearer_auth" = [])),
    request_body = CreateStylistRequest,
    responses(
        (status = 201, description = "Stylist created", body = ApiResponse<CreatedStylist>),
        (status = 400, description = "Missing fields, not a stylist, or already exists"),
        (status = 401, description = "Session expired or user_id is not the caller")
    )
)]
pub async fn create_stylist(
    State(state): State<StylistHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateStylistRequest>,
) -> ApiResult<CreatedStylist> {
    let services = request.services.into_iter().map(Into::into).collect();
    let stylist_id = state
        .profiles
        .create_profile(&user.user_id, &request.user_id, services)
        .await?;

    respond(
        StatusCode::CREATED,
        "stylist created successfully",
        CreatedStylist { stylist_id },
    )
}

#[utoipa::path(
    post,
    path = "/api/v1/stylist/review",
    tag = "Stylists",
    security(("bearer_auth" = [])),
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review created", body = ApiResponse<CreatedReview>),
        (status = 400, description = "Missing fields, self-review, or already reviewed"),
        (status = 401, description = "Session expired or user_id is not the caller"),
        (status = 404, description = "Target stylist does not exist")
    )
)]
pub async fn review_stylist(
    State(state): State<StylistHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateReviewRequest>,
) -> ApiResult<CreatedReview> {
    let review_id = state
        .reviews
        .submit_review(&user.user_id, request.into())
        .await?;

    respond(
        StatusCode::CREATED,
        "review created successfully",
        CreatedReview { review_id },
    )
}

#[utoipa::path(
    post,
    path = "/api/v1/stylist/images",
    tag = "Stylists",
    security(("bearer_auth" = [])),
    request_body(content = ImageUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Images stored", body = ApiResponse<UploadedImages>),
        (status = 400, description = "Not a stylist, no profile, no images (including a non-multipart body), or file too large"),
        (status = 401, description = "Session expired"),
        (status = 500, description = "Upload or storage failure")
    )
)]
/// Upload portfolio images; a body that is not `multipart/form-data` counts as zero images.
pub async fn upload_stylist_images(
    State(state): State<StylistHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<UploadedImages> {
    // Role and profile are checked before any part is read.
    let stylist = state.images.resolve_upload_target(&user.user_id).await?;

    let files = match multipart {
        Ok(multipart) => read_image_parts(multipart, state.max_file_size).await?,
        Err(rejection) => {
            debug!(error = %rejection, "Upload request is not multipart");
            Vec::new()
        }
    };

    let images = state.images.attach_images(&stylist, files).await?;
    respond(
        StatusCode::CREATED,
        "stylist images uploaded",
        UploadedImages {
            images: images.into_iter().map(UploadedImage::from).collect(),
        },
    )
}

/// Collect every `images` part into memory, enforcing the per-file limit.
async fn read_image_parts(
    mut multipart: Multipart,
    max_file_size: usize,
) -> Result<Vec<MediaFile>, ApiError> {
    let mut files = Vec::new();

    while let Some(mut field) = multipart.next_field().await.map_err(part_error)? {
        if field.name() != Some(IMAGES_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(str::to_string);

        let mut buf = BytesMut::new();
        while let Some(chunk) = field.chunk().await.map_err(part_error)? {
            if buf.len() + chunk.len() > max_file_size {
                return Err(ApiError::bad_request("file too large"));
            }
            buf.extend_from_slice(&chunk);
        }

        files.push(MediaFile::new(file_name, content_type, buf.freeze()));
    }

    Ok(files)
}

fn part_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::bad_request("file too large");
    }
    error!(error = %e, "Failed to read multipart part");
    ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "select a file to upload")
}
