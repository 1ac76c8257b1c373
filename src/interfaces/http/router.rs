//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{IdentityService, ImageService, ProfileService, ReviewService};
use crate::config::{MediaBackend, MediaConfig};
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::middleware::{auth_middleware, AuthState};
use crate::interfaces::http::modules::metrics::{
    http_metrics_middleware, prometheus_metrics, MetricsState,
};
use crate::interfaces::http::modules::request_id::request_id_middleware;
use crate::interfaces::http::modules::{auth, health, stylists};

/// Upper bound on image parts per upload request, used to size the body limit.
pub const MAX_IMAGES_PER_REQUEST: usize = 10;

/// Everything the router needs, built once at startup.
#[derive(Clone)]
pub struct ApiContext {
    pub db: DatabaseConnection,
    pub jwt_config: JwtConfig,
    pub identity: Arc<IdentityService>,
    pub profiles: Arc<ProfileService>,
    pub reviews: Arc<ReviewService>,
    pub images: Arc<ImageService>,
    pub media: MediaConfig,
    /// `None` leaves `/metrics` unmounted
    pub metrics: Option<PrometheusHandle>,
    pub started_at: Arc<Instant>,
}

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "JWT Bearer token; the `token` cookie set at login is accepted too",
                        ))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::register,
        auth::login,
        stylists::get_stylist,
        stylists::create_stylist,
        stylists::review_stylist,
        stylists::upload_stylist_images,
    ),
    components(
        schemas(
            ApiResponse<String>,
            health::HealthResponse,
            health::ComponentHealth,
            auth::RoleParam,
            auth::RegisterRequest,
            auth::LoginRequest,
            auth::LoginResponse,
            auth::UserInfo,
            stylists::ServiceRequest,
            stylists::CreateStylistRequest,
            stylists::CreateReviewRequest,
            stylists::ServiceDto,
            stylists::ImageDto,
            stylists::StylistDto,
            stylists::CreatedStylist,
            stylists::CreatedReview,
            stylists::UploadedImage,
            stylists::UploadedImages,
            stylists::ImageUploadForm,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check"),
        (name = "Authentication", description = "Registration and login (JWT)"),
        (name = "Stylists", description = "Stylist profiles, services, reviews and portfolio images"),
    ),
    info(
        title = "Stylist Service API",
        version = "1.0.0",
        description = "REST API for stylist profiles, services, portfolio images and reviews",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(ctx: ApiContext) -> Router {
    let middleware_state = AuthState {
        jwt_config: ctx.jwt_config.clone(),
    };

    let stylist_state = stylists::StylistHandlerState {
        profiles: ctx.profiles.clone(),
        reviews: ctx.reviews.clone(),
        images: ctx.images.clone(),
        max_file_size: ctx.media.max_file_size_bytes,
    };

    let upload_limit = ctx
        .media
        .max_file_size_bytes
        .saturating_mul(MAX_IMAGES_PER_REQUEST)
        .saturating_add(64 * 1024);

    // Stylist routes (protected)
    let stylist_protected_routes = Router::new()
        .route("/api/v1/stylist", post(stylists::create_stylist))
        .route("/api/v1/stylist/review", post(stylists::review_stylist))
        .route(
            "/api/v1/stylist/images",
            post(stylists::upload_stylist_images).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state,
            auth_middleware,
        ))
        .with_state(stylist_state.clone());

    // Stylist routes (public)
    let stylist_public_routes = Router::new()
        .route("/api/v1/stylist/{id}", get(stylists::get_stylist))
        .with_state(stylist_state);

    // Auth routes (public)
    let auth_routes = Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .with_state(auth::AuthHandlerState {
            identity: ctx.identity.clone(),
        });

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState {
            db: ctx.db.clone(),
            started_at: ctx.started_at.clone(),
        });

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    let mut router = Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .nest("/api/v1/auth", auth_routes)
        .merge(stylist_public_routes)
        .merge(stylist_protected_routes);

    if let Some(handle) = ctx.metrics {
        router = router.merge(
            Router::new()
                .route("/metrics", get(prometheus_metrics))
                .with_state(MetricsState { handle }),
        );
    }

    if ctx.media.backend == MediaBackend::Local {
        router = router.nest_service("/media", ServeDir::new(&ctx.media.local_dir));
    }

    router
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
