use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Optional geolocation attached to a punch by the clock-in client.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> AppResult<Self> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(AppError::InvalidQuery(format!(
                "Coordinates out of range: {lat}, {lon}"
            )));
        }
        Ok(Self { lat, lon })
    }

    /// Build from the two nullable DB columns; both must be present.
    pub fn from_columns(lat: Option<f64>, lon: Option<f64>) -> Option<Self> {
        match (lat, lon) {
            (Some(lat), Some(lon)) => Some(Self { lat, lon }),
            _ => None,
        }
    }

    /// CLI helper: `--lat` and `--lon` must be given together.
    pub fn from_args(lat: Option<f64>, lon: Option<f64>) -> AppResult<Option<Self>> {
        match (lat, lon) {
            (Some(lat), Some(lon)) => Self::new(lat, lon).map(Some),
            (None, None) => Ok(None),
            _ => Err(AppError::InvalidQuery(
                "--lat and --lon must be used together".into(),
            )),
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5},{:.5}", self.lat, self.lon)
    }
}
