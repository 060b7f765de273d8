//! WebMercator (EPSG:3857) to WGS84 (EPSG:4326) conversion for office
//! coordinates as delivered by the directory API.

use serde::{Deserialize, Serialize};

/// Half the equatorial circumference used by EPSG:3857, in metres.
pub const MERCATOR_HALF_EXTENT: f64 = 20_037_508.34;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

pub fn web_mercator_to_lat_lng(x: f64, y: f64) -> LatLng {
    let lng = x * 180.0 / MERCATOR_HALF_EXTENT;
    let lat = (y * std::f64::consts::PI / MERCATOR_HALF_EXTENT).exp().atan() * 360.0
        / std::f64::consts::PI
        - 90.0;
    LatLng { lat, lng }
}
