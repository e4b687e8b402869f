use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

// ------------------------------------------ General Error API ------------------------------------------
// Every non-200 response carries at least the `error` field. `details`
// holds the full upstream body on passthrough errors, `message` the
// failure description on internal errors.
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            details: None,
            message: None,
        }
    }
}
