use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::Value;

use models::document::Document;
use service::document_service::DocumentService;

use crate::errors::ApiError;

/// Wire shape of a stored document: assigned id plus the original payload.
#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub id: String,
    pub data: Value,
}

impl From<Document> for DocumentResponse {
    fn from(doc: Document) -> Self {
        Self {
            id: doc.id,
            data: doc.data,
        }
    }
}

/// `POST /api/v1/jsons`: store an arbitrary JSON payload and answer 201 with
/// the assigned identifier. A body that does not parse as JSON is answered
/// 400 before orchestration runs.
pub async fn store(
    State(service): State<DocumentService>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<DocumentResponse>), ApiError> {
    let Json(value) = payload.map_err(|e| ApiError::MalformedBody(e.body_text()))?;
    let doc = service.submit(value).await?;
    Ok((StatusCode::CREATED, Json(doc.into())))
}

/// `GET /api/v1/jsons/:id`: answer the stored payload itself, without the
/// document wrapper.
pub async fn get(
    State(service): State<DocumentService>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let doc = service.retrieve(&id).await?;
    Ok(Json(doc.data))
}
