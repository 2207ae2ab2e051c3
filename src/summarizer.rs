use geo::{coord, Rect};
use serde::Serialize;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::config::Config;
use crate::error::{Error, ErrorType, Result};
use crate::geo_math::{format_duration, meters_to_feet, meters_to_miles};
use crate::raw::{RawBounds, RawDocument, RawSegment, RawTrack};

use point::parse_number;

mod aggregate;
mod point;
mod run;

#[cfg(test)]
mod aggregate_test;

pub use aggregate::{combine, roll_up, Aggregate};
pub use point::{normalize_point, normalize_waypoint, TrackPoint, Waypoint};
pub use run::{segment_runs, Run};

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Segment {
    pub runs: Vec<Run>,
    #[serde(flatten)]
    pub aggregate: Aggregate,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Track {
    pub name: Option<String>,
    pub description: Option<String>,
    pub segments: Vec<Segment>,
    #[serde(flatten)]
    pub aggregate: Aggregate,
    pub start_date: Option<String>,
}

/// Display-ready totals, only present when the document has tracks.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Summary {
    pub distance: String,
    pub duration: String,
    pub elevation_gain: String,
    pub elevation_loss: String,
    pub start_date: Option<String>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct TrackInfo {
    pub name: String,
    pub tracks: Vec<Track>,
    pub waypoints: Vec<Waypoint>,
    /// Bounds declared by the document itself; the computed extent lives in
    /// the aggregate.
    pub bounds: Option<Rect>,
    pub aggregate: Aggregate,
    pub summary: Option<Summary>,
}

const START_DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!(
    "[weekday repr:short] [month repr:short] [day] [year], \
     [hour repr:12 padding:none]:[minute]:[second] [period]"
);

fn format_start_date(time: OffsetDateTime) -> String {
    time.format(&START_DATE_FORMAT)
        .unwrap_or_else(|_| time.to_string())
}

fn parse_bounds(
    bounds: &RawBounds,
    errors: &mut Vec<String>,
) -> Option<Rect> {
    let min_lat = parse_number(bounds.minlat.as_ref(), "bounds minlat", errors);
    let min_lon = parse_number(bounds.minlon.as_ref(), "bounds minlon", errors);
    let max_lat = parse_number(bounds.maxlat.as_ref(), "bounds maxlat", errors);
    let max_lon = parse_number(bounds.maxlon.as_ref(), "bounds maxlon", errors);
    match (min_lat, min_lon, max_lat, max_lon) {
        (Some(min_lat), Some(min_lon), Some(max_lat), Some(max_lon)) => {
            Some(Rect::new(
                coord! { x: min_lon, y: min_lat },
                coord! { x: max_lon, y: max_lat },
            ))
        }
        _ => {
            errors.push("document bounds are incomplete".to_string());
            None
        }
    }
}

fn build_segment(
    raw: &RawSegment,
    config: &Config,
    errors: &mut Vec<String>,
) -> Segment {
    let points = raw
        .points
        .iter()
        .map(|point| normalize_point(point, errors))
        .collect();
    let runs = segment_runs(points, config);
    let aggregate = roll_up(runs.iter().map(|run| &run.aggregate));
    Segment { runs, aggregate }
}

fn build_track(
    raw: &RawTrack,
    config: &Config,
    errors: &mut Vec<String>,
) -> Track {
    let segments: Vec<Segment> = raw
        .segments
        .iter()
        .map(|segment| build_segment(segment, config, errors))
        .collect();
    let aggregate = roll_up(segments.iter().map(|segment| &segment.aggregate));
    let start_date = aggregate.min_time.map(format_start_date);
    Track {
        name: raw.name.clone(),
        description: raw.desc.clone(),
        segments,
        aggregate,
        start_date,
    }
}

fn build_summary(aggregate: &Aggregate, tracks: &[Track]) -> Summary {
    Summary {
        distance: format!("{:.2} mi", meters_to_miles(aggregate.distance)),
        duration: format_duration(aggregate.duration.round() as u64),
        elevation_gain: format!(
            "{:.0}",
            meters_to_feet(aggregate.elevation_gain)
        ),
        elevation_loss: format!(
            "{:.0}",
            meters_to_feet(aggregate.elevation_loss)
        ),
        start_date: tracks.first().and_then(|track| track.start_date.clone()),
    }
}

/// Summarizes one parsed document. Per-point anomalies only produce
/// diagnostics in `errors`; a document without a bounds element is the one
/// hard failure.
pub fn build_track_info(
    name: &str,
    document: &RawDocument,
    config: &Config,
    errors: &mut Vec<String>,
) -> Result<TrackInfo> {
    let raw_bounds = document.bounds.as_ref().ok_or_else(|| {
        Error::new_s(ErrorType::InputError, "document has no bounds element")
    })?;
    let bounds = parse_bounds(raw_bounds, errors);

    let tracks: Vec<Track> = document
        .tracks
        .iter()
        .map(|track| build_track(track, config, errors))
        .collect();
    if tracks.is_empty() {
        errors.push("document contains no tracks".to_string());
    }
    let waypoints = document
        .waypoints
        .iter()
        .map(|waypoint| normalize_waypoint(waypoint, errors))
        .collect();

    let aggregate = roll_up(tracks.iter().map(|track| &track.aggregate));
    let summary = if tracks.is_empty() {
        None
    } else {
        Some(build_summary(&aggregate, &tracks))
    };

    Ok(TrackInfo {
        name: name.to_string(),
        tracks,
        waypoints,
        bounds,
        aggregate,
        summary,
    })
}
