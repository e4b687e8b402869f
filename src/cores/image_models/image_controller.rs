use actix_web::HttpResponse;
use async_trait::async_trait;

use crate::apis::models_api::schemas::ImageGenerationRequest;
use crate::configs::settings::ImagenConfig;

#[async_trait]
pub trait ImageProvider: Send + Sync {
    async fn generate(&self, upstream: &ImagenConfig, req_body: &ImageGenerationRequest) -> HttpResponse;
}
