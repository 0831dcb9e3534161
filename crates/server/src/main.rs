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

mod config;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;
use vote_dashboard_api::{
    ApiError, CompareResponse, DepartmentsResponse, MapQuery, MapResponse, compare_candidate,
    department_breakdown, map_data, parse_candidate_id,
};
use vote_dashboard_domain::{ReferenceData, non_blank};
use vote_dashboard_persistence::{Dataset, Persistence};

/// Vote Dashboard Server - read-only HTTP API over the vote store
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    bind: IpAddr,

    /// JSON file replacing the built-in departments and country coordinates
    #[arg(long)]
    reference_data: Option<PathBuf>,

    /// JSON dataset loaded into the store at startup (development only)
    #[arg(long)]
    seed: Option<PathBuf>,
}

/// Application state shared across handlers.
///
/// The persistence layer sits behind a Mutex because a Diesel connection
/// needs exclusive access. Reference data is immutable after startup.
#[derive(Clone)]
struct AppState {
    /// The vote store.
    persistence: Arc<Mutex<Persistence>>,
    /// Departments and country coordinates.
    reference: Arc<ReferenceData>,
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
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            // The cause was logged where the read failed.
            ApiError::Internal { message } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message,
            },
        }
    }
}

/// Handler for GET `/compare/{id}` endpoint.
///
/// Returns one candidate's total, share, and per-country breakdown.
async fn handle_compare(
    AxumState(app_state): AxumState<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<CompareResponse>, HttpError> {
    info!(id = %raw_id, "Handling compare request");

    let id = parse_candidate_id(&raw_id)?;

    let mut persistence = app_state.persistence.lock().await;
    let response: CompareResponse = compare_candidate(&mut *persistence, id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/map/data` endpoint.
///
/// Returns per-country totals, optionally for a single candidate.
async fn handle_map_data(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<MapQuery>,
) -> Result<Json<MapResponse>, HttpError> {
    let candidate: Option<String> = non_blank(query.candidate.as_deref());
    info!(candidate = ?candidate, "Handling map data request");

    let mut persistence = app_state.persistence.lock().await;
    let response: MapResponse = map_data(
        &mut *persistence,
        &app_state.reference,
        candidate.as_deref(),
    )?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/departments` endpoint.
async fn handle_departments(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<DepartmentsResponse>, HttpError> {
    info!("Handling departments request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DepartmentsResponse =
        department_breakdown(&mut *persistence, &app_state.reference)?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/compare/{id}", get(handle_compare))
        .route("/map/data", get(handle_map_data))
        .route("/departments", get(handle_departments))
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

    info!("Initializing Vote Dashboard Server");

    let reference: ReferenceData = config::load_reference_data(args.reference_data.as_deref())?;

    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    if let Some(seed_path) = &args.seed {
        info!("Seeding store from: {}", seed_path.display());
        let dataset: Dataset = config::load_seed(seed_path)?;
        persistence.load_dataset(&dataset)?;
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        reference: Arc::new(reference),
    };

    let app: Router = build_router(app_state);

    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
