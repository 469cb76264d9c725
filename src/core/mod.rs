pub mod colour_mapping;
pub mod data;
pub mod escape;
pub mod mapping;
pub mod render;
