pub mod fixture;
pub mod screen_model;
