use geo::Point;

use std::f64::consts::PI;

/// Mean Earth radius used by every distance calculation in this crate.
pub const EARTH_RADIUS_METERS: f64 = 6_372_800.0;

const FEET_PER_METER: f64 = 3.28084;
const METERS_PER_MILE: f64 = 1609.34;
const MPH_PER_MPS: f64 = 2.2369362921;

pub fn to_radians(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Haversine distance between two points in meters. Points are
/// (x = longitude, y = latitude) in degrees.
pub fn distance_meters(a: Point, b: Point) -> f64 {
    let lat_delta = to_radians(b.y() - a.y());
    let lon_delta = to_radians(b.x() - a.x());
    let lat1 = to_radians(a.y());
    let lat2 = to_radians(b.y());
    let h = (lat_delta / 2.0).sin().powi(2)
        + (lon_delta / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    2.0 * EARTH_RADIUS_METERS * h.sqrt().atan2((1.0 - h).sqrt())
}

pub fn meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}

pub fn meters_to_km(meters: f64) -> f64 {
    meters / 1000.0
}

pub fn meters_to_miles(meters: f64) -> f64 {
    meters / METERS_PER_MILE
}

pub fn mps_to_mph(mps: f64) -> f64 {
    mps * MPH_PER_MPS
}

/// Formats a duration as H:MM:SS, or M:SS when it is under an hour.
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}
