use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde_json::Value;

use crate::apis::models_api::schemas::ImageGenerationRequest;
use crate::apis::schemas::ErrorResponse;
use crate::configs::settings::ImagenConfig;
use crate::cores::image_models::image_controller::ImageProvider;
use crate::cores::schemas::ImagenPayload;

pub struct Imagen;

#[async_trait]
impl ImageProvider for Imagen {
    async fn generate(&self, upstream: &ImagenConfig, req_body: &ImageGenerationRequest) -> HttpResponse {
        // 1. Construct the predict URL with the server-side API key
        let url = format!(
            "{}/models/{}:predict?key={}",
            upstream.endpoint, upstream.model, upstream.api_key
        );

        // 2. Build the request body for the Imagen API
        let payload = ImagenPayload::from(req_body);

        // 3. Send the POST request
        let client = Client::new();
        let response = match client.post(&url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await {
                Ok(resp) => resp,
                // The URL carries the key, so it is stripped from the error.
                Err(err) => return internal_error(&format!("Request failed: {}", err.without_url())),
            };

        // 4. Relay the upstream response, passing error statuses through
        let status = response.status();
        let data: Value = match response.json().await {
            Ok(data) => data,
            Err(err) => return internal_error(&format!("Failed to parse upstream response: {}", err.without_url())),
        };

        if status.is_success() {
            HttpResponse::Ok().json(data)
        } else {
            error!("Imagen API error ({}): {}", status, data);
            let message = data["error"]["message"]
                .as_str()
                .unwrap_or("Failed to generate image")
                .to_string();
            let status = StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
            HttpResponse::build(status).json(ErrorResponse {
                error: message,
                details: Some(data),
                message: None,
            })
        }
    }
}

fn internal_error(description: &str) -> HttpResponse {
    error!("Proxy error: {}", description);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: "Internal server error".to_string(),
        details: None,
        message: Some(description.to_string()),
    })
}
