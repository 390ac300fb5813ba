//! OpenAPI specification and Swagger UI

use axum::http::header;
use axum::response::{Html, IntoResponse, Json};
use utoipa::OpenApi;

use crate::api::routes::{analytics, dates, exercises, health, metrics, profile, workouts};
use crate::api::types::{CreatedResponse, MessageResponse};
use crate::domain::summary::DailySummary;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FitTrack API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Personal fitness tracker"
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "profile", description = "The single user profile and its goals"),
        (name = "dates", description = "Calendar day registry"),
        (name = "metrics", description = "Daily calories, water, and sleep"),
        (name = "exercises", description = "Exercise name catalog"),
        (name = "workouts", description = "Logged workout sets"),
        (name = "analytics", description = "Daily goal feedback")
    ),
    paths(
        // Health
        health::health,
        // Profile
        profile::create_profile,
        profile::get_profile,
        profile::update_profile,
        profile::delete_profile,
        // Dates
        dates::resolve_or_create_date,
        dates::lookup_date,
        dates::delete_date,
        // Metrics
        metrics::log_calories,
        metrics::get_calories,
        metrics::list_calories,
        metrics::list_calories_by_date,
        metrics::log_water,
        metrics::get_water,
        metrics::list_water,
        metrics::list_water_by_date,
        metrics::log_sleep,
        metrics::get_sleep,
        metrics::list_sleep,
        metrics::list_sleep_by_date,
        // Exercises
        exercises::create_exercise,
        exercises::list_exercises,
        exercises::rename_exercise,
        exercises::delete_exercise,
        // Workouts
        workouts::create_workout,
        workouts::list_workouts,
        workouts::list_workouts_by_date,
        workouts::update_workout,
        workouts::delete_workout,
        // Analytics
        analytics::get_daily_summary,
    ),
    components(schemas(
        // Shared
        MessageResponse,
        CreatedResponse,
        // Health
        health::HealthResponse,
        // Profile
        profile::types::ProfileDto,
        profile::types::CreateProfileRequest,
        profile::types::UpdateProfileRequest,
        profile::types::DeleteProfileRequest,
        // Dates
        dates::types::DateDto,
        dates::types::CreateDateRequest,
        // Metrics
        metrics::types::CalorieDto,
        metrics::types::WaterDto,
        metrics::types::SleepDto,
        metrics::types::LogCaloriesRequest,
        metrics::types::LogWaterRequest,
        metrics::types::LogSleepRequest,
        // Exercises
        exercises::types::ExerciseDto,
        exercises::types::ExerciseNameRequest,
        exercises::types::RenameExerciseResponse,
        // Workouts
        workouts::types::WorkoutDto,
        workouts::types::WorkoutByDateDto,
        workouts::types::CreateWorkoutRequest,
        workouts::types::UpdateWorkoutRequest,
        // Analytics
        DailySummary,
    ))
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
pub async fn openapi_json() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        Json(ApiDoc::openapi()),
    )
}

/// Serve Swagger UI from CDN
pub async fn swagger_ui_html() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>FitTrack API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
    <style>
        html { box-sizing: border-box; overflow-y: scroll; }
        *, *:before, *:after { box-sizing: inherit; }
        body { margin: 0; background: #fafafa; }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = () => {
            window.ui = SwaggerUIBundle({
                url: "/api/openapi.json",
                dom_id: '#swagger-ui',
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                layout: "StandaloneLayout",
                deepLinking: true
            });
        };
    </script>
</body>
</html>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_covers_the_resource_paths() {
        let spec = ApiDoc::openapi();
        for path in [
            "/api/health",
            "/api/usuario",
            "/api/dates",
            "/api/kcal",
            "/api/water",
            "/api/sleep",
            "/api/exercise_names",
            "/api/workouts",
            "/api/analytics/daily/{date_id}",
        ] {
            assert!(spec.paths.paths.contains_key(path), "missing path: {}", path);
        }
    }
}
