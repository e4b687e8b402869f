use serde::{Deserialize, Serialize};

use crate::apis::models_api::schemas::ImageGenerationRequest;

// Request payload shape expected by the Imagen predict endpoint.
#[derive(Serialize, Deserialize, Debug)]
pub struct ImagenPayload {
    pub instances: Vec<ImagenInstance>,
    pub parameters: ImagenParameters,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ImagenInstance {
    pub prompt: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ImagenParameters {
    pub sample_count: u32,
    pub aspect_ratio: String,
}

impl From<&ImageGenerationRequest> for ImagenPayload {
    fn from(req_body: &ImageGenerationRequest) -> Self {
        ImagenPayload {
            instances: vec![ImagenInstance {
                prompt: req_body.prompt.clone().unwrap_or_default(),
            }],
            parameters: ImagenParameters {
                sample_count: req_body.sample_count,
                aspect_ratio: req_body.aspect_ratio.clone(),
            },
        }
    }
}
