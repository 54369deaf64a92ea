pub mod entities;
pub mod error;
pub mod parser;
pub mod profile;
pub mod resume;
pub mod routes;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use utoipa::OpenApi;
// Conditionally import SwaggerUi only when needed (not test)
#[cfg(not(test))]
use utoipa_swagger_ui::SwaggerUi;
// Conditionally import CORS only when needed (not test)
#[cfg(not(test))]
use tower_http::cors::{Any, CorsLayer};
// Conditionally import Governor only when needed (not test)
#[cfg(not(test))]
use std::num::NonZeroU32;
#[cfg(not(test))]
use std::sync::Arc;
#[cfg(not(test))]
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};

use crate::parser::ParserClient;

/// Shared state handed to every route handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub parser: ParserClient,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    )
)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Service is healthy")
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CVFOLIO API",
        version = "0.1.0",
        description = "Resume intake and candidate profile API"
    ),
    paths(
        health_check,
        routes::resumes::parse_resume,
        routes::resumes::list_resumes,
        routes::resumes::get_resume,
        routes::candidates::get_candidate
    ),
    components(schemas(
        routes::resumes::ResumeRecord,
        routes::resumes::ParseResumeResponse,
        resume::ParsedResume,
        resume::Contact,
        resume::EmploymentEntry,
        resume::EducationEntry,
        resume::Certificate,
        resume::DerivedFacts,
        profile::CandidateProfileResponse,
        profile::CandidateProfile,
        profile::Highlight,
        profile::TopSkill,
        profile::SoftwareSkill,
        profile::LanguageSkill,
        profile::PersonalData,
        profile::WorkExperience,
        profile::EducationView,
        profile::CertificateView,
        profile::NavigationItem,
        profile::AccountManager
    ))
)]
struct ApiDoc;

/// Create the application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // Build our API documentation (needed regardless for ApiDoc::openapi())
    let api_doc = ApiDoc::openapi();

    // --- Define API routes separately ---
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/resumes/parse", post(routes::resumes::parse_resume))
        .route("/resumes", get(routes::resumes::list_resumes))
        .route("/resumes/{public_id}", get(routes::resumes::get_resume))
        .route("/candidates/{public_id}", get(routes::candidates::get_candidate))
        // Uploads are capped at 10 MB in the handler; leave headroom for the
        // multipart framing.
        .layer(DefaultBodyLimit::max(12 * 1024 * 1024))
        .with_state(state);

    // --- Conditionally apply layers and Swagger UI only when NOT running tests ---
    #[cfg(not(test))]
    let (docs_router, rate_limited_api_routes) = {
        let docs_router = SwaggerUi::new("/docs").url("/api-doc/openapi.json", api_doc);

        let governor_conf = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(SmartIpKeyExtractor)
                .period(std::time::Duration::from_secs(60))
                .burst_size(NonZeroU32::new(10).unwrap().into())
                .finish()
                .unwrap(),
        );
        let rate_limited_api_routes = api_routes.layer(GovernorLayer {
            config: governor_conf,
        });

        (docs_router, rate_limited_api_routes)
    };

    // For test builds, use the original api_routes and an empty router for docs
    #[cfg(test)]
    let (docs_router, rate_limited_api_routes) = {
        let _ = api_doc;
        (Router::new(), api_routes)
    };

    // --- Build the final application router ---
    let mut app = Router::new()
        .merge(rate_limited_api_routes)
        .merge(docs_router);

    // --- Apply CORS to the whole app (both API and docs) if needed ---
    #[cfg(not(test))]
    {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    app
}
