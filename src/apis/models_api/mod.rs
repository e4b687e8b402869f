pub mod image;
pub mod schemas;
