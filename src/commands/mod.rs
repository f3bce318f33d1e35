pub mod plan;
pub mod setup;
pub mod status;
