use crate::config::Config;
use crate::geo_math::EARTH_RADIUS_METERS;
use crate::raw::{RawBounds, RawPoint};
use crate::summarizer::TrackPoint;

use geo::point;
use rstest::fixture;
use time::format_description::well_known::Iso8601;
use time::OffsetDateTime;

use std::f64::consts::PI;

#[fixture]
pub fn config() -> Config {
    Config::default()
}

pub fn time(input: &str) -> OffsetDateTime {
    OffsetDateTime::parse(input, &Iso8601::DEFAULT).unwrap()
}

/// Latitude delta in degrees that the haversine formula maps back to
/// exactly `meters` when moving along a meridian.
pub fn lat_degrees(meters: f64) -> f64 {
    meters * 180.0 / (PI * EARTH_RADIUS_METERS)
}

pub fn raw_point(lat: f64, lon: f64, ele: f64, time: &str) -> RawPoint {
    RawPoint {
        lat: Some(lat.into()),
        lon: Some(lon.into()),
        ele: Some(ele.into()),
        time: Some(time.to_string()),
    }
}

pub fn track_point(
    lat: f64,
    lon: f64,
    elevation: Option<f64>,
    timestamp: Option<&str>,
) -> TrackPoint {
    TrackPoint {
        point: Some(point! { x: lon, y: lat }),
        elevation,
        time: timestamp.map(time),
        speed: 0.0,
        distance_from_previous: 0.0,
    }
}

pub fn raw_bounds(
    min_lat: f64,
    min_lon: f64,
    max_lat: f64,
    max_lon: f64,
) -> RawBounds {
    RawBounds {
        minlat: Some(min_lat.into()),
        minlon: Some(min_lon.into()),
        maxlat: Some(max_lat.into()),
        maxlon: Some(max_lon.into()),
    }
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{} != {} (tolerance {})",
        actual,
        expected,
        tolerance
    );
}

#[macro_export]
macro_rules! assert_eq_pretty {
    ($left:expr, $right:expr) => {
        assert_eq!($left, $right, "\n{:#?}\n{:#?}", $left, $right);
    };
}

pub use assert_eq_pretty;
