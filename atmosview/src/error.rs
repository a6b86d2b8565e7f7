//! Error types for the network side of the app
//!
//! `Display` output is user-facing: the reducer puts it in the alert.

use thiserror::Error;

/// Errors from the forecast chain (geocode -> forecast -> normalize)
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("location not found: {0}")]
    NotFound(String),

    #[error("coordinates out of range: {lat}, {lon}")]
    InvalidCoordinates { lat: f64, lon: f64 },

    #[error("forecast incomplete: expected {expected} hours, got {got}")]
    Incomplete { expected: usize, got: usize },
}

/// Errors from IP geolocation. Any of these means "use the fallback".
#[derive(Debug, Error)]
pub enum LocateError {
    #[error("geolocation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("geolocation unavailable: {0}")]
    Denied(String),
}
