pub mod assigner;
pub mod compose;
pub mod error;
