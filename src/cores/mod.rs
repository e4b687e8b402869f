pub mod image_models;
pub mod schemas;
