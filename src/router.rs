//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at
//! `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// # Registered Endpoints
/// - `POST /api/timesheets` - Upload a timesheet CSV
/// - `GET /api/timesheets/{id}/status` - Poll an upload's processing status
/// - `GET /api/timesheets/{id}/summary` - Fetch the computed invoice summary
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and the
/// interactive documentation at `/api/docs`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Billhours", description = "Timesheet billing API"), tags(
        (name = controller::timesheet::TIMESHEET_TAG, description = "Timesheet API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::timesheet::upload_timesheet))
        .routes(routes!(controller::timesheet::get_status))
        .routes(routes!(controller::timesheet::get_summary))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
