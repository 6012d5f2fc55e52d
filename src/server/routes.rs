use super::AppState;
use crate::orchestrator::Outcome;
use crate::Error;
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use bytes::Bytes;
use serde_json::{json, Value};
use std::collections::HashMap;

const NO_DETECTIONS_MESSAGE: &str =
    "No flowers were detected in the image. Try another image.";

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .with_state(state)
        .route("/health", get(health))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "floralens"
    }))
}

async fn predict(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    mut multipart: Multipart,
) -> Response {
    let threshold = match parse_threshold(&params, state.default_threshold) {
        Ok(t) => t,
        Err(e) => return error_response(e),
    };

    let image = match read_image_field(&mut multipart).await {
        Ok(bytes) => bytes,
        Err(e) => return error_response(e),
    };

    match state.orchestrator.handle(&image, threshold).await {
        Ok(Outcome::NothingDetected) => {
            Json(json!({ "message": NO_DETECTIONS_MESSAGE })).into_response()
        }
        Ok(Outcome::Detected(response)) => Json(response).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "predict request failed");
            error_response(e)
        }
    }
}

fn parse_threshold(params: &HashMap<String, String>, default: f32) -> Result<f32, Error> {
    let Some(raw) = params.get("threshold") else {
        return Ok(default);
    };
    let threshold: f32 = raw
        .parse()
        .map_err(|_| Error::input(format!("threshold is not a number: {raw}")))?;
    if !(0.0..=1.0).contains(&threshold) {
        return Err(Error::input(format!(
            "threshold must be in [0, 1], got {threshold}"
        )));
    }
    Ok(threshold)
}

async fn read_image_field(multipart: &mut Multipart) -> Result<Bytes, Error> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::input(format!("malformed multipart body: {e}")))?
    {
        if field.name() != Some("image") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        if !allowed_file(&filename) {
            return Err(Error::input(
                "unsupported file type, expected a JPG, JPEG or PNG image",
            ));
        }
        return field
            .bytes()
            .await
            .map_err(|e| Error::input(format!("could not read image field: {e}")));
    }
    Err(Error::input("no image field found in the upload"))
}

fn allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| matches!(ext.to_ascii_lowercase().as_str(), "jpg" | "jpeg" | "png"))
        .unwrap_or(false)
}

fn error_response(e: Error) -> Response {
    let status = match e {
        Error::Input(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": e.to_string() }))).into_response()
}
