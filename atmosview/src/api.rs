//! Open-Meteo forecast client and IP geolocation
//!
//! Everything here runs inside tasks spawned by the effect handler; the
//! reducer only ever sees the resulting `*Did*` actions.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{LocateError, WeatherError};
use crate::state::{FORECAST_HOURS, HourlyForecast, Source, WeatherCondition, WeatherData};

pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const GEOLOCATION_URL: &str = "http://ip-api.com/json/";

const HOURLY_FIELDS: &str = "temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m,is_day";

/// Label used when the search was given raw coordinates
pub const COORDINATES_LABEL: &str = "Current location";

/// Endpoints and transport settings
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub forecast_url: String,
    pub geocoding_url: String,
    pub geolocation_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            forecast_url: FORECAST_URL.into(),
            geocoding_url: GEOCODING_URL.into(),
            geolocation_url: GEOLOCATION_URL.into(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// A point on the globe
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Result<Self, WeatherError> {
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);
        if valid {
            Ok(Self { lat, lon })
        } else {
            Err(WeatherError::InvalidCoordinates { lat, lon })
        }
    }

    /// Parse a `"lat,lon"` search string.
    ///
    /// Returns `None` when the input is not two numbers (i.e. it is a place
    /// name), and `Some(Err(..))` when it is two numbers out of range.
    pub fn parse(input: &str) -> Option<Result<Self, WeatherError>> {
        let (lat, lon) = input.split_once(',')?;
        let lat = lat.trim().parse::<f64>().ok()?;
        let lon = lon.trim().parse::<f64>().ok()?;
        Some(Self::new(lat, lon))
    }
}

/// Formats as a search string accepted by [`Coordinates::parse`]
impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4},{:.4}", self.lat, self.lon)
    }
}

// ============================================================================
// Provider responses
// ============================================================================

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeolocationResponse {
    status: String,
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    hourly: HourlyColumns,
}

/// Open-Meteo returns hourly data column-wise
#[derive(Debug, Deserialize)]
struct HourlyColumns {
    time: Vec<String>,
    temperature_2m: Vec<f32>,
    relative_humidity_2m: Vec<f32>,
    weather_code: Vec<u8>,
    wind_speed_10m: Vec<f32>,
    is_day: Vec<u8>,
}

// ============================================================================
// Client
// ============================================================================

#[derive(Clone, Debug)]
pub struct WeatherClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl WeatherClient {
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    /// Resolve `location` (place name or `"lat,lon"`) and fetch its 24-hour forecast.
    pub async fn fetch_weather(&self, location: &str) -> Result<WeatherData, WeatherError> {
        let mut sources = vec![Source::new("Open-Meteo", "https://open-meteo.com/")];

        let (label, coords) = match Coordinates::parse(location) {
            Some(coords) => (COORDINATES_LABEL.to_string(), coords?),
            None => {
                let (label, coords) = self.geocode(location).await?;
                sources.push(Source::new(
                    "Open-Meteo Geocoding",
                    "https://open-meteo.com/en/docs/geocoding-api",
                ));
                (label, coords)
            }
        };

        let url = format!(
            "{}?latitude={}&longitude={}&hourly={}&forecast_hours={}&timezone=auto",
            self.config.forecast_url, coords.lat, coords.lon, HOURLY_FIELDS, FORECAST_HOURS
        );
        tracing::debug!(%url, "requesting forecast");

        let response: ForecastResponse = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        normalize_forecast(response, label, sources)
    }

    /// Resolve a place name with the Open-Meteo geocoding API
    async fn geocode(&self, name: &str) -> Result<(String, Coordinates), WeatherError> {
        let url = format!(
            "{}?name={}&count=1&language=en",
            self.config.geocoding_url,
            urlencoding::encode(name.trim())
        );
        tracing::debug!(%url, "geocoding");

        let data: GeocodingResponse = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let place = data
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| WeatherError::NotFound(name.trim().to_string()))?;

        let label = match &place.country {
            Some(country) => format!("{}, {}", place.name, country),
            None => place.name.clone(),
        };
        Ok((label, Coordinates::new(place.latitude, place.longitude)?))
    }

    /// One-shot IP geolocation
    pub async fn locate(&self) -> Result<Coordinates, LocateError> {
        let url = format!("{}?fields=status,message,lat,lon", self.config.geolocation_url);
        tracing::debug!(%url, "locating");

        let data: GeolocationResponse = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        coordinates_from_geolocation(data)
    }
}

fn coordinates_from_geolocation(data: GeolocationResponse) -> Result<Coordinates, LocateError> {
    if data.status != "success" {
        return Err(LocateError::Denied(
            data.message.unwrap_or_else(|| data.status.clone()),
        ));
    }
    match (data.lat, data.lon) {
        (Some(lat), Some(lon)) => {
            Coordinates::new(lat, lon).map_err(|e| LocateError::Denied(e.to_string()))
        }
        _ => Err(LocateError::Denied("response without coordinates".into())),
    }
}

/// Turn the column-wise provider response into 24 hourly rows.
fn normalize_forecast(
    response: ForecastResponse,
    location: String,
    sources: Vec<Source>,
) -> Result<WeatherData, WeatherError> {
    let cols = response.hourly;
    let rows = cols.time.len();
    let lens = [
        rows,
        cols.temperature_2m.len(),
        cols.relative_humidity_2m.len(),
        cols.weather_code.len(),
        cols.wind_speed_10m.len(),
        cols.is_day.len(),
    ];
    let got = lens.iter().copied().min().unwrap_or(0);

    // Every column must cover the same hours
    if got < FORECAST_HOURS || lens.iter().any(|&len| len != rows) {
        return Err(WeatherError::Incomplete {
            expected: FORECAST_HOURS.max(rows),
            got,
        });
    }

    let hourly: Vec<HourlyForecast> = (0..FORECAST_HOURS)
        .map(|i| {
            let code = cols.weather_code[i];
            HourlyForecast {
                time: clock_label(&cols.time[i]),
                temp: cols.temperature_2m[i],
                condition: WeatherCondition::from_wmo(code, cols.is_day[i] != 0),
                humidity: cols.relative_humidity_2m[i].clamp(0.0, 100.0).round() as u8,
                wind_speed: cols.wind_speed_10m[i],
                description: weather_description(code).to_string(),
            }
        })
        .collect();

    Ok(WeatherData {
        location,
        current: hourly[0].clone(),
        hourly,
        sources,
    })
}

/// "2024-07-15T14:00" -> "14:00"
fn clock_label(iso: &str) -> String {
    iso.split_once('T')
        .map(|(_, clock)| clock)
        .unwrap_or(iso)
        .chars()
        .take(5)
        .collect()
}

/// Convert WMO weather code to human-readable description
fn weather_description(code: u8) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 | 48 => "Fog",
        51 | 53 | 55 => "Drizzle",
        56 | 57 => "Freezing drizzle",
        61 | 63 | 65 => "Rain",
        66 | 67 => "Freezing rain",
        71 | 73 | 75 => "Snow",
        77 => "Snow grains",
        80..=82 => "Rain showers",
        85 | 86 => "Snow showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm with hail",
        _ => "Unknown",
    }
}
