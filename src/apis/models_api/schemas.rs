use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_aspect_ratio() -> String {
    "9:16".to_string()
}

fn default_sample_count() -> u32 {
    1
}

// Define the request struct, corresponding to the request parameters of the /api/generate-image interface.
#[derive(Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageGenerationRequest {
    #[serde(default)]
    pub prompt: Option<String>,  // Required; absent, null and empty are all rejected at the boundary.
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: String,  // Optional, defaults to "9:16".
    #[serde(default = "default_sample_count")]
    pub sample_count: u32,     // Optional, number of images to generate, defaults to 1.
}
