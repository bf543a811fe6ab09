use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::extract::{DocumentMetadataRequest, ExtractError};
use crate::server::app::AppState;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ExtractError {
    fn into_response(self) -> Response {
        let status = match &self {
            ExtractError::IsADirectory(_)
            | ExtractError::NotFound(_)
            | ExtractError::UnsupportedType(_) => StatusCode::BAD_REQUEST,
            ExtractError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ExtractError::ContractViolation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Document metadata extraction endpoint
///
/// Takes a request body conforming to [`DocumentMetadataRequest`] and
/// returns the normalized extraction result. Structural validation failures
/// are handled by the JSON extractor before this handler runs.
pub async fn metadata_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<DocumentMetadataRequest>,
) -> Result<Json<Value>, ExtractError> {
    let result = state.service.extract(request).await?;
    Ok(Json(Value::Object(result)))
}
