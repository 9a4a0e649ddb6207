use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};

use crate::{
    CATEGORY_RULES, CategoryRule, ExportFormat, PARALLEL_GROUPS, ScheduleError, ScheduleGenerator,
    ScheduleOptions, ScheduleRequest, ScheduleResult, export_schedule_data,
};

/// Server-wide default options. Requests override them field by field.
#[derive(Clone)]
pub struct AppState {
    defaults: Arc<RwLock<ScheduleOptions>>,
}

impl AppState {
    pub fn new(defaults: ScheduleOptions) -> Self {
        Self {
            defaults: Arc::new(RwLock::new(defaults)),
        }
    }

    fn defaults(&self) -> ScheduleOptions {
        self.defaults.read().clone()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ScheduleOptions::default())
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    Invalid(String),
    Internal(String),
}

impl From<ScheduleError> for ApiError {
    fn from(value: ScheduleError) -> Self {
        if value.is_input_error() {
            ApiError::Invalid(value.to_string())
        } else {
            ApiError::Internal(value.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Invalid(message) => {
                let body = Json(ErrorBody {
                    error: "invalid_request",
                    message,
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::Internal(message) => {
                error!(%message, "schedule request failed");
                let body = Json(ErrorBody {
                    error: "internal_error",
                    message,
                });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct ExportQuery {
    #[serde(default)]
    format: Option<String>,
}

#[derive(Debug, Serialize)]
struct CategoryCatalog {
    categories: &'static [CategoryRule],
    parallel_groups: &'static [&'static [&'static str]],
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/categories", get(list_categories))
        .route("/options", get(get_options).put(update_options))
        .route("/schedule", post(create_schedule))
        .route("/export", post(export_schedule))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, defaults: ScheduleOptions) -> std::io::Result<()> {
    let app = router(AppState::new(defaults));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "http api listening");
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn list_categories() -> Json<CategoryCatalog> {
    Json(CategoryCatalog {
        categories: CATEGORY_RULES,
        parallel_groups: PARALLEL_GROUPS,
    })
}

async fn get_options(State(state): State<AppState>) -> Json<ScheduleOptions> {
    Json(state.defaults())
}

async fn update_options(
    State(state): State<AppState>,
    Json(options): Json<ScheduleOptions>,
) -> Json<ScheduleOptions> {
    *state.defaults.write() = options.clone();
    Json(options)
}

fn run(state: &AppState, request: ScheduleRequest) -> Result<ScheduleResult, ApiError> {
    let (estimate, options) = request.into_parts(&state.defaults())?;
    Ok(ScheduleGenerator::new().generate(&estimate, &options)?)
}

async fn create_schedule(
    State(state): State<AppState>,
    Json(request): Json<ScheduleRequest>,
) -> Result<Json<ScheduleResult>, ApiError> {
    let result = run(&state, request)?;
    Ok(Json(result))
}

async fn export_schedule(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
    Json(request): Json<ScheduleRequest>,
) -> Result<Response, ApiError> {
    let format = ExportFormat::from_str(query.format.as_deref().unwrap_or("json"))?;
    let result = run(&state, request)?;
    let body = export_schedule_data(&result, format)?;
    Ok(([(header::CONTENT_TYPE, format.content_type())], body).into_response())
}
