use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use log::{error, info};

use crate::apis::models_api::schemas::ImageGenerationRequest;
use crate::apis::schemas::ErrorResponse;
use crate::configs::settings::Config;
use crate::cores::image_models::image_controller::ImageProvider;
use crate::cores::image_models::imagen::Imagen;
use crate::utils::log::log_request;

// Configure the actix_web service routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/generate-image")
            .route(web::post().to(generate_image))
            .route(web::route().to(method_not_allowed)),
    )
    .service(health);
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up"),
    )
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    "OK"
}

// define an interface layer that calls the image generation method of the upstream model
struct IMG {
    model: Box<dyn ImageProvider>,
}

impl IMG {
    fn new(model: Box<dyn ImageProvider>) -> Self {
        IMG { model }
    }

    async fn generate(&self, config: &Config, req_body: &ImageGenerationRequest) -> HttpResponse {
        self.model.generate(&config.imagen, req_body).await
    }
}

#[utoipa::path(
    post,
    path = "/api/generate-image",
    request_body = ImageGenerationRequest,
    responses(
        (status = 200, description = "Upstream response body, forwarded unmodified"),
        (status = 400, body = ErrorResponse),
        (status = 405, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    )
)]
// Handle the POST request for /api/generate-image.
pub async fn generate_image(
    req: HttpRequest,
    config: web::Data<Config>,
    body: web::Bytes,
) -> HttpResponse {
    let response = handle_generate(&config, &body).await;

    let status_code = response.status().as_u16();
    if let Ok(line) = log_request(req, status_code).await {
        if status_code < 400 {
            info!("{}", line);
        } else {
            error!("{}", line);
        }
    }
    response
}

async fn handle_generate(config: &Config, body: &web::Bytes) -> HttpResponse {
    // 1. The API key must be configured before anything is forwarded upstream.
    //    Its value never appears in any log line or response body.
    if config.imagen.api_key.is_empty() {
        error!("API key not configured");
        let error_response = ErrorResponse::new("Server configuration error: API key not set");
        return HttpResponse::InternalServerError().json(error_response);
    }

    // 2. Parse the client body. A body that is not valid JSON is an internal
    //    failure; a valid one without a prompt is a client error.
    let req_body: ImageGenerationRequest = match serde_json::from_slice(body) {
        Ok(req_body) => req_body,
        Err(err) => {
            error!("Failed to parse request body: {}", err);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Internal server error".to_string(),
                details: None,
                message: Some(format!("Failed to parse request body: {}", err)),
            });
        }
    };
    if req_body.prompt.as_deref().unwrap_or_default().is_empty() {
        let error_response = ErrorResponse::new("Prompt is required");
        return HttpResponse::BadRequest().json(error_response);
    }

    // 3. Send the request to the upstream image model
    let model: IMG = IMG::new(Box::new(Imagen {}));
    model.generate(config, &req_body).await
}

async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(ErrorResponse::new("Method not allowed"))
}
