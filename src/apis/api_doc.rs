use utoipa::OpenApi;

use crate::apis::models_api;
use crate::apis::models_api::schemas::ImageGenerationRequest;
use crate::apis::schemas::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        models_api::image::health,
        models_api::image::generate_image,
    ),
    components(
        schemas(ImageGenerationRequest, ErrorResponse)
    )
)]
pub struct ApiDoc;
