use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use log::warn;
use log4rs::init_file;
use std::fs::metadata;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod apis;
mod configs;
mod cores;
mod utils;

use crate::apis::api_doc::ApiDoc;
use crate::configs::settings::Config;


#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let log_config_path = if metadata("/etc/imagig/log4rs.yaml").is_ok() {
        "/etc/imagig/log4rs.yaml".to_string()
    } else {
        format!("{}/src/configs/log4rs.yaml", env!("CARGO_MANIFEST_DIR"))
    };
    init_file(&log_config_path, Default::default()).unwrap();

    let config = Config::load_config();
    if config.imagen.api_key.is_empty() {
        warn!("GOOGLE_IMAGEN_API_KEY is not set; generation requests will be rejected");
    }

    // Set the bind address
    let host = config.host.clone();
    let port = config.port;
    println!("Starting server on port {}", port);

    let app_config = web::Data::new(config);

    // Start the HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin() // cors
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Authorization", "User-Agent"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(app_config.clone())
            .configure(apis::models_api::image::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
