//! Router and handlers.
//!
//! Handlers read the requested text dump per request and run the
//! recovery engine on it; there is no shared mutable state. Lookup
//! misses are explicit error responses, never empty successes.

use std::path::PathBuf;

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;

use shiprec_core::pdf::{PdfExtractor, PdfProcessor, PdfType};
use shiprec_core::{FedexInvoiceParser, ShipmentRecord, UpsInvoiceParser, find_by_reference, references};

/// State shared with all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Directory the `file` query parameter is resolved against.
    pub data_dir: PathBuf,
}

/// Query selecting which invoice text dump to read.
#[derive(Debug, Deserialize)]
pub struct FileQuery {
    #[serde(default = "default_fedex_file")]
    file: String,
}

fn default_fedex_file() -> String {
    "fedex.txt".to_string()
}

/// Build the axum router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/fedex/refs", get(fedex_refs))
        .route("/fedex/by-ref/:reference", get(fedex_by_reference))
        .route("/fedex/upload", post(fedex_upload))
        .route("/ups/records", get(ups_records))
        .route("/ups/summary", get(ups_summary))
        .route("/ups/by-tracking/:tracking", get(ups_by_tracking))
        .route("/ups/by-reference", get(ups_by_reference))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn read_records(state: &AppState, file: &str) -> Result<Vec<ShipmentRecord>, Response> {
    let path = state.data_dir.join(file);
    let text = tokio::fs::read_to_string(&path).await.map_err(|e| {
        tracing::warn!(file = %path.display(), error = %e, "failed to read invoice dump");
        (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "file not found", "file": file})),
        )
            .into_response()
    })?;
    Ok(FedexInvoiceParser::new().parse(&text))
}

async fn fedex_refs(State(state): State<AppState>, Query(q): Query<FileQuery>) -> Response {
    match read_records(&state, &q.file).await {
        Ok(records) => Json(json!({"references": references(&records)})).into_response(),
        Err(resp) => resp,
    }
}

async fn fedex_by_reference(
    State(state): State<AppState>,
    Path(reference): Path<String>,
    Query(q): Query<FileQuery>,
) -> Response {
    let records = match read_records(&state, &q.file).await {
        Ok(records) => records,
        Err(resp) => return resp,
    };

    let matches = find_by_reference(&records, &reference);
    match matches.len() {
        0 => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "reference not found", "reference": reference})),
        )
            .into_response(),
        1 => Json(matches[0]).into_response(),
        _ => Json(matches).into_response(),
    }
}

/// Upload an invoice PDF and return all recovered records.
///
/// Only embedded text is used; scanned documents are rejected since OCR
/// happens outside this service.
async fn fedex_upload(mut multipart: Multipart) -> Response {
    let mut data: Option<Vec<u8>> = None;
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => match field.bytes().await {
                Ok(bytes) => {
                    data = Some(bytes.to_vec());
                    break;
                }
                Err(e) => {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(json!({"error": format!("failed to read upload: {e}")})),
                    )
                        .into_response();
                }
            },
            Ok(None) => break,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"error": format!("invalid multipart body: {e}")})),
                )
                    .into_response();
            }
        }
    }
    let Some(data) = data else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "missing file field"})),
        )
            .into_response();
    };

    let mut extractor = PdfExtractor::new();
    if let Err(e) = extractor.load(&data) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": e.to_string()})),
        )
            .into_response();
    }
    if extractor.analyze() == PdfType::Image {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": "no embedded text; scanned documents need OCR upstream"})),
        )
            .into_response();
    }

    let text = match extractor.extract_text() {
        Ok(text) => text,
        Err(e) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({"error": e.to_string()})),
            )
                .into_response();
        }
    };

    let records = FedexInvoiceParser::new().parse(&text);
    tracing::info!(count = records.len(), "parsed uploaded invoice");
    Json(json!({"records": records})).into_response()
}

async fn ups_records(State(state): State<AppState>, Query(q): Query<UpsFileQuery>) -> Response {
    let records = match read_text(&state, &q.file).await {
        Ok(text) => UpsInvoiceParser::new().parse(&text),
        Err(resp) => return resp,
    };
    Json(json!({"records": records})).into_response()
}

async fn ups_summary(State(state): State<AppState>, Query(q): Query<UpsFileQuery>) -> Response {
    match read_text(&state, &q.file).await {
        Ok(text) => Json(UpsInvoiceParser::new().summary(&text)).into_response(),
        Err(resp) => resp,
    }
}

async fn ups_by_tracking(Path(tracking): Path<String>) -> Response {
    match UpsInvoiceParser::new().by_tracking("", &tracking) {
        Ok(value) => Json(value).into_response(),
        Err(e) => (
            StatusCode::NOT_IMPLEMENTED,
            Json(json!({"error": e.to_string(), "tracking": tracking})),
        )
            .into_response(),
    }
}

#[derive(Debug, Deserialize)]
struct UpsReferenceQuery {
    ref2: String,
    ref1: Option<String>,
}

async fn ups_by_reference(Query(q): Query<UpsReferenceQuery>) -> Response {
    match UpsInvoiceParser::new().by_reference("", &q.ref2, q.ref1.as_deref()) {
        Ok(value) => Json(value).into_response(),
        Err(e) => (
            StatusCode::NOT_IMPLEMENTED,
            Json(json!({"error": e.to_string(), "ref2": q.ref2, "ref1": q.ref1})),
        )
            .into_response(),
    }
}

#[derive(Debug, Deserialize)]
struct UpsFileQuery {
    #[serde(default = "default_ups_file")]
    file: String,
}

fn default_ups_file() -> String {
    "ups.txt".to_string()
}

async fn read_text(state: &AppState, file: &str) -> Result<String, Response> {
    let path = state.data_dir.join(file);
    tokio::fs::read_to_string(&path).await.map_err(|_| {
        (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "file not found", "file": file})),
        )
            .into_response()
    })
}
