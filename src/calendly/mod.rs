//! Calendly REST API client and the reshaping applied to its responses

pub mod availability;
pub mod booking;
mod client;
mod error;
pub mod models;

pub use client::CalendlyClient;
pub use error::CalendlyError;
