// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use chrono::Utc;
use clap::Parser;
use mentora::AvailabilityResult;
use mentora_api::{
    AddBlockoutDateRequest, AddBlockoutDateResponse, ApiError, AvailabilityParams,
    BookSessionRequest, BookSessionResponse, CreateExpertRequest, ExpertResponse,
    InstantAvailabilityResponse, ReplaceAvailabilityRulesRequest,
    ReplaceAvailabilityRulesResponse, ReplaceDurationOptionsRequest,
    ReplaceDurationOptionsResponse,
};
use mentora_persistence::SqlitePersistence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Mentora Server - HTTP server for the Mentora Booking System
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for expert configuration and sessions.
    persistence: Arc<Mutex<SqlitePersistence>>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!("Internal error: {}", err);
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Query parameters for the instant-availability endpoint.
#[derive(Debug, Clone, Deserialize)]
struct InstantAvailabilityParams {
    /// Evaluate as if the session currently in progress did not exist.
    ignore_active_session: Option<bool>,
}

/// Handler for POST `/experts` endpoint.
///
/// Creates a new expert profile.
async fn handle_create_expert(
    AxumState(state): AxumState<AppState>,
    Json(request): Json<CreateExpertRequest>,
) -> Result<Json<ExpertResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response: ExpertResponse = mentora_api::create_expert(&mut persistence, &request)?;
    Ok(Json(response))
}

/// Handler for GET `/experts/{expert_id}` endpoint.
async fn handle_get_expert(
    AxumState(state): AxumState<AppState>,
    Path(expert_id): Path<i64>,
) -> Result<Json<ExpertResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response: ExpertResponse = mentora_api::get_expert(&mut persistence, expert_id)?;
    Ok(Json(response))
}

/// Handler for PUT `/experts/{expert_id}/availability_rules` endpoint.
///
/// Replaces the expert's weekly availability rules.
async fn handle_replace_availability_rules(
    AxumState(state): AxumState<AppState>,
    Path(expert_id): Path<i64>,
    Json(request): Json<ReplaceAvailabilityRulesRequest>,
) -> Result<Json<ReplaceAvailabilityRulesResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response: ReplaceAvailabilityRulesResponse =
        mentora_api::replace_availability_rules(&mut persistence, expert_id, &request)?;
    Ok(Json(response))
}

/// Handler for PUT `/experts/{expert_id}/duration_options` endpoint.
///
/// Replaces the expert's bookable session lengths and prices.
async fn handle_replace_duration_options(
    AxumState(state): AxumState<AppState>,
    Path(expert_id): Path<i64>,
    Json(request): Json<ReplaceDurationOptionsRequest>,
) -> Result<Json<ReplaceDurationOptionsResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response: ReplaceDurationOptionsResponse =
        mentora_api::replace_duration_options(&mut persistence, expert_id, &request)?;
    Ok(Json(response))
}

/// Handler for POST `/experts/{expert_id}/blockout_dates` endpoint.
async fn handle_add_blockout_date(
    AxumState(state): AxumState<AppState>,
    Path(expert_id): Path<i64>,
    Json(request): Json<AddBlockoutDateRequest>,
) -> Result<Json<AddBlockoutDateResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response: AddBlockoutDateResponse =
        mentora_api::add_blockout_date(&mut persistence, expert_id, &request)?;
    Ok(Json(response))
}

/// Handler for POST `/experts/{expert_id}/sessions` endpoint.
///
/// Books a session; overlapping commitments are rejected.
async fn handle_book_session(
    AxumState(state): AxumState<AppState>,
    Path(expert_id): Path<i64>,
    Json(request): Json<BookSessionRequest>,
) -> Result<Json<BookSessionResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response: BookSessionResponse =
        mentora_api::book_session(&mut persistence, expert_id, &request)?;
    Ok(Json(response))
}

/// Handler for GET `/experts/{expert_id}/availability` endpoint.
///
/// Computes the expert's availability over the queried window.
async fn handle_get_availability(
    AxumState(state): AxumState<AppState>,
    Path(expert_id): Path<i64>,
    Query(params): Query<AvailabilityParams>,
) -> Result<Json<AvailabilityResult>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let result: AvailabilityResult =
        mentora_api::get_availability(&mut persistence, expert_id, &params, Utc::now())?;
    Ok(Json(result))
}

/// Handler for GET `/experts/{expert_id}/availability/instant` endpoint.
async fn handle_get_instant_availability(
    AxumState(state): AxumState<AppState>,
    Path(expert_id): Path<i64>,
    Query(params): Query<InstantAvailabilityParams>,
) -> Result<Json<InstantAvailabilityResponse>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let response: InstantAvailabilityResponse = mentora_api::get_instant_availability(
        &mut persistence,
        expert_id,
        params.ignore_active_session.unwrap_or(false),
        Utc::now(),
    )?;
    Ok(Json(response))
}

/// Builds the application router.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/experts", post(handle_create_expert))
        .route("/experts/{expert_id}", get(handle_get_expert))
        .route(
            "/experts/{expert_id}/availability_rules",
            put(handle_replace_availability_rules),
        )
        .route(
            "/experts/{expert_id}/duration_options",
            put(handle_replace_duration_options),
        )
        .route(
            "/experts/{expert_id}/blockout_dates",
            post(handle_add_blockout_date),
        )
        .route("/experts/{expert_id}/sessions", post(handle_book_session))
        .route(
            "/experts/{expert_id}/availability",
            get(handle_get_availability),
        )
        .route(
            "/experts/{expert_id}/availability/instant",
            get(handle_get_instant_availability),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Mentora Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: SqlitePersistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqlitePersistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqlitePersistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
