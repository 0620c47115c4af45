pub mod geometry;
pub mod view_model;
