use geo::{point, Point};
use serde::Serialize;
use time::format_description::well_known::Iso8601;
use time::OffsetDateTime;

use crate::raw::{RawField, RawPoint, RawWaypoint};
use crate::utils::option_time_ser;

/// One recorded position. Fields that failed to parse are `None`, so the
/// aggregation combinators can skip them instead of folding NaN.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct TrackPoint {
    pub point: Option<Point>,
    pub elevation: Option<f64>,
    #[serde(with = "option_time_ser")]
    pub time: Option<OffsetDateTime>,
    pub speed: f64,
    pub distance_from_previous: f64,
}

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Waypoint {
    pub point: Option<Point>,
    pub elevation: Option<f64>,
    #[serde(with = "option_time_ser")]
    pub time: Option<OffsetDateTime>,
    pub name: Option<String>,
    pub comment: Option<String>,
    pub description: Option<String>,
}

/// Parses a raw field as a finite number. An absent field is simply
/// unavailable; a present but unusable one additionally gets a diagnostic.
pub(crate) fn parse_number(
    field: Option<&RawField>,
    what: &str,
    errors: &mut Vec<String>,
) -> Option<f64> {
    match field? {
        RawField::Number(value) => {
            if value.is_finite() {
                Some(*value)
            } else {
                errors.push(format!("{} is not finite: {}", what, value));
                None
            }
        }
        RawField::Text(text) => match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(value),
            _ => {
                errors.push(format!("cannot parse {}: {:?}", what, text));
                None
            }
        },
    }
}

// Coordinates are mandatory, so unlike elevation and time their absence
// is reported too.
fn parse_coordinate(
    field: Option<&RawField>,
    what: &str,
    errors: &mut Vec<String>,
) -> Option<f64> {
    if field.is_none() {
        errors.push(format!("{} is missing", what));
    }
    parse_number(field, what, errors)
}

fn parse_coordinates(
    lat: Option<&RawField>,
    lon: Option<&RawField>,
    errors: &mut Vec<String>,
) -> Option<Point> {
    let lat = parse_coordinate(lat, "latitude", errors);
    let lon = parse_coordinate(lon, "longitude", errors);
    let (lat, lon) = (lat?, lon?);
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        errors.push(format!("coordinate out of range: ({}, {})", lat, lon));
        return None;
    }
    Some(point! { x: lon, y: lat })
}

fn parse_time(
    time: Option<&String>,
    errors: &mut Vec<String>,
) -> Option<OffsetDateTime> {
    let text = time?;
    match OffsetDateTime::parse(text, &Iso8601::DEFAULT) {
        Ok(time) => Some(time),
        Err(err) => {
            errors.push(format!("cannot parse time {:?}: {}", text, err));
            None
        }
    }
}

/// Never fails: a malformed point keeps its place in the stream with the
/// offending fields unavailable.
pub fn normalize_point(raw: &RawPoint, errors: &mut Vec<String>) -> TrackPoint {
    TrackPoint {
        point: parse_coordinates(raw.lat.as_ref(), raw.lon.as_ref(), errors),
        elevation: parse_number(raw.ele.as_ref(), "elevation", errors),
        time: parse_time(raw.time.as_ref(), errors),
        speed: 0.0,
        distance_from_previous: 0.0,
    }
}

pub fn normalize_waypoint(
    raw: &RawWaypoint,
    errors: &mut Vec<String>,
) -> Waypoint {
    Waypoint {
        point: parse_coordinates(raw.lat.as_ref(), raw.lon.as_ref(), errors),
        elevation: parse_number(raw.ele.as_ref(), "elevation", errors),
        time: parse_time(raw.time.as_ref(), errors),
        name: raw.name.clone(),
        comment: raw.cmt.clone(),
        description: raw.desc.clone(),
    }
}
