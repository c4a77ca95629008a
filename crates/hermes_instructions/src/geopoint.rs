use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ele: Option<f64>,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        GeoPoint {
            lat,
            lon,
            ele: None,
        }
    }

    pub fn with_elevation(lat: f64, lon: f64, ele: f64) -> Self {
        GeoPoint {
            lat,
            lon,
            ele: Some(ele),
        }
    }

    /// Elevation in meters, NaN when the point is 2D.
    pub fn elevation(&self) -> f64 {
        self.ele.unwrap_or(f64::NAN)
    }
}

impl From<&GeoPoint> for geo_types::Point<f64> {
    fn from(point: &GeoPoint) -> Self {
        geo_types::Point::new(point.lon, point.lat)
    }
}

impl From<GeoPoint> for geo_types::Point<f64> {
    fn from(point: GeoPoint) -> Self {
        geo_types::Point::new(point.lon, point.lat)
    }
}
