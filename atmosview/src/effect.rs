//! Effects - side effects declared by the reducer
//!
//! The reducer stays pure; the effect handler in `main.rs` turns these into
//! keyed tasks whose results come back as `*Did*` actions.

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// One-shot geolocation lookup
    Locate,

    /// Resolve and fetch the forecast for a place name or "lat,lon"
    FetchWeather { location: String },
}
