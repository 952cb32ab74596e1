pub mod api;
pub mod calendly;
pub mod cli;
pub mod core;
