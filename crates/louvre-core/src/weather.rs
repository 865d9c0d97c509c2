//! Client for the weather/geocoding service and the Nominatim reverse
//! geocoder. Results are cached per client for the lifetime of one form
//! session; failures are never cached, so callers keep last-known-good data.

use crate::error::LouvreError;
use crate::model::{Coordinates, RainClass, WeatherSnapshot};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(800);
const MIN_LOCATION_LEN: usize = 3;
const USER_AGENT: &str = concat!("louvre-selector/", env!("CARGO_PKG_VERSION"));

/// A location string resolved to an address, coordinates and climate data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub address: String,
    pub coordinates: Coordinates,
    pub weather: WeatherSnapshot,
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    error: Option<String>,
    location: Option<String>,
    coordinates: Option<Coordinates>,
    average_rainfall: Option<f64>,
    average_wind_speed: Option<f64>,
    average_wind_direction: Option<f64>,
    average_temperature: Option<f64>,
    recommended_rain_class: Option<RainClass>,
}

impl WeatherResponse {
    fn into_snapshot(self) -> WeatherSnapshot {
        WeatherSnapshot {
            average_rainfall: self.average_rainfall,
            average_wind_speed: self.average_wind_speed,
            average_wind_direction: self.average_wind_direction,
            average_temperature: self.average_temperature,
            recommended_rain_class: self.recommended_rain_class,
            coordinates: self.coordinates,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ValidateResponse {
    error: Option<String>,
    location: Option<String>,
    coordinates: Option<Coordinates>,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReverseGeocodeResponse {
    error: Option<String>,
    display_name: Option<String>,
}

/// Async client for location resolution.
///
/// A newer `resolve_debounced` call supersedes older pending ones via a
/// generation counter: a superseded call returns `Ok(None)` after its
/// debounce sleep without touching the network, so a stale response can
/// never overwrite newer state.
pub struct WeatherClient {
    base_url: String,
    nominatim_url: String,
    http: reqwest::Client,
    cache: Mutex<HashMap<String, ResolvedLocation>>,
    generation: AtomicU64,
    debounce: Duration,
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>) -> Result<WeatherClient, LouvreError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(WeatherClient {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            nominatim_url: NOMINATIM_BASE_URL.to_string(),
            http,
            cache: Mutex::new(HashMap::new()),
            generation: AtomicU64::new(0),
            debounce: DEFAULT_DEBOUNCE,
        })
    }

    /// Override the debounce interval (default 800 ms).
    pub fn with_debounce(mut self, debounce: Duration) -> WeatherClient {
        self.debounce = debounce;
        self
    }

    /// Override the reverse-geocoder base URL.
    pub fn with_nominatim_url(mut self, url: impl Into<String>) -> WeatherClient {
        self.nominatim_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Resolve a free-text location to address, coordinates and weather.
    /// Cached by normalised input string and by resolved address.
    pub async fn resolve(&self, location: &str) -> Result<ResolvedLocation, LouvreError> {
        let trimmed = location.trim();
        if trimmed.chars().count() < MIN_LOCATION_LEN {
            return Err(LouvreError::LocationTooShort(trimmed.to_string()));
        }

        let key = cache_key(trimmed);
        if let Some(hit) = self.cache_get(&key) {
            debug!(location = trimmed, "location cache hit");
            return Ok(hit);
        }

        info!(location = trimmed, "resolving location");
        let body = self
            .post_json(
                &format!("{}/weather", self.base_url),
                &serde_json::json!({ "location": trimmed }),
            )
            .await?;
        let response: WeatherResponse = serde_json::from_str(&body)?;

        if let Some(err) = response.error {
            return Err(LouvreError::Service(err));
        }
        let address = response
            .location
            .clone()
            .ok_or(LouvreError::MissingField("location"))?;
        let coordinates = response
            .coordinates
            .ok_or(LouvreError::MissingField("coordinates"))?;

        let resolved = ResolvedLocation {
            address: address.clone(),
            coordinates,
            weather: response.into_snapshot(),
        };

        self.cache_put(key, resolved.clone());
        self.cache_put(cache_key(&address), resolved.clone());
        Ok(resolved)
    }

    /// Keystroke-triggered resolution: waits out the debounce interval and
    /// resolves only if no newer call has started since. Returns `Ok(None)`
    /// when superseded.
    pub async fn resolve_debounced(
        &self,
        location: &str,
    ) -> Result<Option<ResolvedLocation>, LouvreError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.debounce).await;
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(location, "resolution superseded by a newer request");
            return Ok(None);
        }
        self.resolve(location).await.map(Some)
    }

    /// Fetch weather for explicit coordinates (the manual map-picker path).
    pub async fn weather_at(&self, coords: Coordinates) -> Result<WeatherSnapshot, LouvreError> {
        info!(%coords, "fetching weather for coordinates");
        let url = format!(
            "{}/weather?lat={}&lon={}",
            self.base_url, coords.lat, coords.lon
        );
        let body = self.get_text(&url).await?;
        let response: WeatherResponse = serde_json::from_str(&body)?;

        if let Some(err) = response.error {
            return Err(LouvreError::Service(err));
        }
        let mut snapshot = response.into_snapshot();
        if snapshot.coordinates.is_none() {
            snapshot.coordinates = Some(coords);
        }
        Ok(snapshot)
    }

    /// Fast liveness path: confirm a location geocodes without fetching
    /// climate data.
    pub async fn validate(&self, location: &str) -> Result<(String, Coordinates), LouvreError> {
        let trimmed = location.trim();
        if trimmed.chars().count() < MIN_LOCATION_LEN {
            return Err(LouvreError::LocationTooShort(trimmed.to_string()));
        }

        let body = self
            .post_json(
                &format!("{}/validate-location", self.base_url),
                &serde_json::json!({ "location": trimmed }),
            )
            .await?;
        let response: ValidateResponse = serde_json::from_str(&body)?;

        if let Some(err) = response.error {
            return Err(LouvreError::Service(err));
        }
        let address = response
            .location
            .ok_or(LouvreError::MissingField("location"))?;
        let coordinates = response
            .coordinates
            .ok_or(LouvreError::MissingField("coordinates"))?;
        Ok((address, coordinates))
    }

    /// Service liveness probe.
    pub async fn health(&self) -> Result<bool, LouvreError> {
        let body = self.get_text(&format!("{}/health", self.base_url)).await?;
        let response: HealthResponse = serde_json::from_str(&body)?;
        Ok(response.status.as_deref() == Some("ok"))
    }

    /// Convert picked coordinates back into a display address via the
    /// third-party reverse geocoder.
    pub async fn reverse_geocode(&self, coords: Coordinates) -> Result<String, LouvreError> {
        let url = format!(
            "{}/reverse?format=json&lat={}&lon={}",
            self.nominatim_url, coords.lat, coords.lon
        );
        let body = self.get_text(&url).await?;
        let response: ReverseGeocodeResponse = serde_json::from_str(&body)?;

        if let Some(err) = response.error {
            return Err(LouvreError::Service(err));
        }
        response
            .display_name
            .ok_or(LouvreError::MissingField("display_name"))
    }

    async fn post_json(
        &self,
        url: &str,
        payload: &serde_json::Value,
    ) -> Result<String, LouvreError> {
        let response = self.http.post(url).json(payload).send().await?;
        Self::read_body(response).await
    }

    async fn get_text(&self, url: &str) -> Result<String, LouvreError> {
        let response = self.http.get(url).send().await?;
        Self::read_body(response).await
    }

    /// Reads the body regardless of HTTP status: the service reports
    /// failures as a JSON `error` field with a non-2xx status, and that
    /// message is better than a bare status code.
    async fn read_body(response: reqwest::Response) -> Result<String, LouvreError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() && serde_json::from_str::<serde_json::Value>(&body).is_err() {
            return Err(LouvreError::Service(format!("HTTP {status}")));
        }
        Ok(body)
    }

    fn cache_get(&self, key: &str) -> Option<ResolvedLocation> {
        self.cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn cache_put(&self, key: String, value: ResolvedLocation) {
        self.cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key, value);
    }
}

fn cache_key(location: &str) -> String {
    location.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Unroutable port: connection attempts fail immediately.
    const DEAD_URL: &str = "http://127.0.0.1:9";

    #[test]
    fn test_cache_key_normalisation() {
        assert_eq!(cache_key("  Stockholm, Sweden "), "stockholm, sweden");
        assert_eq!(cache_key("OSLO"), cache_key("oslo"));
    }

    #[tokio::test]
    async fn test_too_short_location_rejected_locally() {
        let client = WeatherClient::new(DEAD_URL).unwrap();
        let err = client.resolve("ab").await.unwrap_err();
        assert!(matches!(err, LouvreError::LocationTooShort(_)));

        let err = client.validate("  x  ").await.unwrap_err();
        assert!(matches!(err, LouvreError::LocationTooShort(_)));
    }

    #[tokio::test]
    async fn test_superseded_resolution_returns_none_without_network() {
        let client = std::sync::Arc::new(
            WeatherClient::new(DEAD_URL)
                .unwrap()
                .with_debounce(Duration::from_millis(50)),
        );

        let first = tokio::spawn({
            let client = client.clone();
            async move { client.resolve_debounced("stockholm").await }
        });
        // Give the first call time to claim its generation before starting
        // the superseding one.
        tokio::time::sleep(Duration::from_millis(10)).await;
        let second = tokio::spawn({
            let client = client.clone();
            async move { client.resolve_debounced("stockholm, sweden").await }
        });

        // The superseded call bails out before touching the network.
        let first_result = first.await.unwrap().unwrap();
        assert!(first_result.is_none());

        // The current call proceeds to the network and fails against the
        // dead endpoint.
        let second_result = second.await.unwrap();
        assert!(matches!(second_result, Err(LouvreError::Http(_))));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_http_error() {
        let client = WeatherClient::new(DEAD_URL).unwrap();
        let err = client.resolve("stockholm").await.unwrap_err();
        assert!(matches!(err, LouvreError::Http(_)));
    }

    #[tokio::test]
    #[ignore] // Hits the real local weather service.
    async fn test_resolve_against_live_service() {
        let client = WeatherClient::new(DEFAULT_BASE_URL).unwrap();
        let resolved = client.resolve("Stockholm, Sweden").await.unwrap();
        assert!(!resolved.address.is_empty());

        // Second call must come from the cache (same value back).
        let again = client.resolve("stockholm, sweden").await.unwrap();
        assert_eq!(resolved, again);
    }

    #[tokio::test]
    #[ignore] // Hits the public Nominatim endpoint.
    async fn test_reverse_geocode_against_live_nominatim() {
        let client = WeatherClient::new(DEFAULT_BASE_URL).unwrap();
        let address = client
            .reverse_geocode(Coordinates {
                lat: 59.3293,
                lon: 18.0686,
            })
            .await
            .unwrap();
        assert!(address.to_lowercase().contains("stockholm"));
    }
}
