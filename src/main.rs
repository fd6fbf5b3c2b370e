use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use cra_core::constants::{DEFAULT_PATIENT_DATA_BASE, DEFAULT_PATIENT_DATA_DIR};
use cra_core::{CoreConfig, FsStore, PatientDataService};
use cra_insight::{insight_or_fallback, HttpInsightClient, InsightClient, FALLBACK_INSIGHT};
use cra_types::{
    Assessment, AuditCategory, AuditDetailsData, AuditItem, AuditStatus, CategorySeverity,
    ClinicalCycle, DetailedAnswer, DetailedAuditCategory, DetailedAuditItem, ExecutiveSummaryData,
    MentalStatus, PatientDataComplete, PatientMetadata, PsychosocialStressors, ReviewStatus,
    RingScore, RingScores, TimelineEvent, TimelineGroup, TimelineStatus, TraumaHistory,
    URAnalysisData, UtilizationReview,
};

/// Application state shared across REST API handlers.
///
/// Holds the patient data service and the optional insight client. State is
/// threaded explicitly into every handler; nothing is ambient.
#[derive(Clone)]
struct AppState {
    patients: PatientDataService,
    insight: Option<Arc<dyn InsightClient>>,
}

/// Health check response.
#[derive(Debug, serde::Serialize, ToSchema)]
struct HealthRes {
    ok: bool,
    message: String,
}

/// Machine-readable error body.
///
/// `error` distinguishes the two non-fatal failure states the UI must
/// message differently: `unknown-patient` (not in the manifest) and
/// `incomplete-record` (listed, but one or more documents absent).
#[derive(Debug, serde::Serialize, ToSchema)]
struct ErrorRes {
    error: String,
    message: String,
}

/// Generated narrative response.
#[derive(Debug, serde::Serialize, ToSchema)]
struct InsightRes {
    text: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_patients, patient_data, patient_insight),
    components(schemas(
        HealthRes,
        ErrorRes,
        InsightRes,
        PatientMetadata,
        PatientDataComplete,
        ExecutiveSummaryData,
        AuditDetailsData,
        URAnalysisData,
        RingScores,
        RingScore,
        AuditCategory,
        AuditItem,
        AuditStatus,
        CategorySeverity,
        TimelineGroup,
        TimelineEvent,
        TimelineStatus,
        DetailedAuditCategory,
        DetailedAuditItem,
        DetailedAnswer,
        ClinicalCycle,
        UtilizationReview,
        ReviewStatus,
        Assessment,
        MentalStatus,
        TraumaHistory,
        PsychosocialStressors
    ))
)]
struct ApiDoc;

/// Main entry point for the CRA application.
///
/// Serves the audit dashboard REST API plus the static patient data tree
/// (JSON documents and casefile PDFs).
///
/// # Environment Variables
/// - `CRA_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `PATIENT_DATA_DIR`: Directory holding the patient data tree
///   (default: "patient-data")
/// - `CRA_INSIGHT_URL`: Narrative generation endpoint; when unset, the
///   fixed fallback narrative is served
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("cra=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("CRA_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let data_dir = std::env::var("PATIENT_DATA_DIR")
        .unwrap_or_else(|_| DEFAULT_PATIENT_DATA_DIR.into());

    let insight: Option<Arc<dyn InsightClient>> = match std::env::var("CRA_INSIGHT_URL") {
        Ok(url) => Some(Arc::new(HttpInsightClient::new(&url, 30)?)),
        Err(_) => {
            tracing::info!("CRA_INSIGHT_URL not set; serving fallback narratives");
            None
        }
    };

    let cfg = Arc::new(CoreConfig::new(DEFAULT_PATIENT_DATA_BASE)?);
    let store = Arc::new(FsStore::new(&data_dir));
    let patients = PatientDataService::new(cfg, store);

    tracing::info!("++ Starting CRA REST on {}", rest_addr);
    tracing::info!("++ Serving patient data from {}", data_dir);

    let app = Router::new()
        .route("/health", get(health))
        .route("/patients", get(list_patients))
        .route("/patients/:patient_id/data", get(patient_data))
        .route("/patients/:patient_id/insight", get(patient_insight))
        .nest_service(DEFAULT_PATIENT_DATA_BASE, ServeDir::new(&data_dir))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(AppState { patients, insight });

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API.
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "CRA is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/patients",
    responses(
        (status = 200, description = "All patients in the manifest, in manifest order", body = [PatientMetadata])
    )
)]
/// List all patients known to the manifest.
///
/// An empty corpus is a valid, non-fatal state: the response is an empty
/// list with status 200, never an error.
async fn list_patients(State(state): State<AppState>) -> Json<Vec<PatientMetadata>> {
    Json(state.patients.discover_patients().await)
}

#[utoipa::path(
    get,
    path = "/patients/{patient_id}/data",
    params(
        ("patient_id" = String, Path, description = "Patient identifier from the manifest")
    ),
    responses(
        (status = 200, description = "Complete patient record", body = PatientDataComplete),
        (status = 404, description = "Unknown patient or incomplete record", body = ErrorRes)
    )
)]
/// Load the complete record for one patient.
///
/// All three documents must be present; a partially available record is
/// reported as absent (`incomplete-record`), with the cause in the server
/// log only.
async fn patient_data(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Result<Json<PatientDataComplete>, (StatusCode, Json<ErrorRes>)> {
    let patient = find_patient(&state, &patient_id).await?;

    match state
        .patients
        .load_patient_data(&patient.patient_id, &patient.folder_path)
        .await
    {
        Some(data) => Ok(Json(data)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorRes {
                error: "incomplete-record".into(),
                message: format!("failed to load data for {}", patient.name),
            }),
        )),
    }
}

#[utoipa::path(
    get,
    path = "/patients/{patient_id}/insight",
    params(
        ("patient_id" = String, Path, description = "Patient identifier from the manifest")
    ),
    responses(
        (status = 200, description = "Generated or fallback narrative", body = InsightRes),
        (status = 404, description = "Unknown patient or incomplete record", body = ErrorRes)
    )
)]
/// Generate the executive narrative for one patient.
///
/// The generative service is an opaque collaborator; any failure yields the
/// fixed fallback narrative, so this endpoint never surfaces a generation
/// error.
async fn patient_insight(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Result<Json<InsightRes>, (StatusCode, Json<ErrorRes>)> {
    let patient = find_patient(&state, &patient_id).await?;

    let summary = state
        .patients
        .load_executive_summary(&patient.patient_id, &patient.folder_path)
        .await
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorRes {
                    error: "incomplete-record".into(),
                    message: format!("failed to load data for {}", patient.name),
                }),
            )
        })?;

    let text = match &state.insight {
        Some(client) => insight_or_fallback(client.as_ref(), &summary.rings).await,
        None => FALLBACK_INSIGHT.to_string(),
    };

    Ok(Json(InsightRes { text }))
}

/// Resolves a patient id against the manifest.
async fn find_patient(
    state: &AppState,
    patient_id: &str,
) -> Result<PatientMetadata, (StatusCode, Json<ErrorRes>)> {
    state
        .patients
        .discover_patients()
        .await
        .into_iter()
        .find(|p| p.patient_id == patient_id)
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorRes {
                    error: "unknown-patient".into(),
                    message: format!("no patient {} in manifest", patient_id),
                }),
            )
        })
}
