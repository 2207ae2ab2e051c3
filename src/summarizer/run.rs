use geo::Rect;
use serde::Serialize;
use time::OffsetDateTime;

use std::mem::take;

use super::aggregate::{max_time_if, min_time_if, Aggregate};
use super::point::TrackPoint;
use crate::config::Config;
use crate::geo_math::distance_meters;
use crate::utils::rect::expand_rect;

/// A maximal sub-sequence of points with no simultaneous time-and-distance
/// gap inside it. Immutable once built.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Run {
    pub points: Vec<TrackPoint>,
    #[serde(flatten)]
    pub aggregate: Aggregate,
}

/// Accumulator for the run under construction. A split finalizes the
/// builder into a `Run` and replaces it with a fresh one; nothing is reset
/// in place.
#[derive(Debug, Default)]
struct RunBuilder {
    points: Vec<TrackPoint>,
    distance: f64,
    elevation_gain: f64,
    elevation_loss: f64,
    bounds: Option<Rect>,
    min_time: Option<OffsetDateTime>,
    max_time: Option<OffsetDateTime>,
}

impl RunBuilder {
    /// Folds one point into the running aggregates. `counted_distance` is 0
    /// for the first point of a run; the point itself keeps its true
    /// `distance_from_previous`.
    fn push(&mut self, point: TrackPoint, counted_distance: f64) {
        self.distance += counted_distance;
        if let Some(p) = point.point {
            self.bounds = expand_rect(self.bounds, p);
        }
        self.min_time = min_time_if(self.min_time, point.time);
        self.max_time = max_time_if(self.max_time, point.time);
        self.points.push(point);
    }

    fn add_elevation_change(&mut self, change: f64) {
        if change > 0.0 {
            self.elevation_gain += change;
        } else {
            self.elevation_loss += -change;
        }
    }

    fn finish(self) -> Run {
        // Duration from the extent, not from summed gaps, so close but
        // unsorted timestamps cannot double count.
        let duration = match (self.min_time, self.max_time) {
            (Some(min), Some(max)) => (max - min).as_seconds_f64(),
            _ => 0.0,
        };
        Run {
            points: self.points,
            aggregate: Aggregate {
                distance: self.distance,
                duration,
                elevation_gain: self.elevation_gain,
                elevation_loss: self.elevation_loss,
                bounds: self.bounds,
                min_time: self.min_time,
                max_time: self.max_time,
            },
        }
    }
}

fn point_distance(previous: &TrackPoint, current: &TrackPoint) -> f64 {
    match (previous.point, current.point) {
        (Some(a), Some(b)) => distance_meters(a, b),
        _ => 0.0,
    }
}

fn time_gap_seconds(
    previous: Option<OffsetDateTime>,
    current: Option<OffsetDateTime>,
) -> f64 {
    match (previous, current) {
        (Some(a), Some(b)) => (b - a).as_seconds_f64().abs(),
        // A point without a timestamp never opens a gap.
        _ => 0.0,
    }
}

/// Average speed over the trailing window of up to `window` points ending
/// at `i`: the distance covered inside the window divided by the elapsed
/// time between its first and last point.
fn smoothed_speed(points: &[TrackPoint], i: usize, window: usize) -> f64 {
    let begin = (i + 1).saturating_sub(window.max(1));
    let window = &points[begin..=i];
    if window.len() < 2 {
        return 0.0;
    }
    let elapsed = match (window[0].time, window[window.len() - 1].time) {
        (Some(first), Some(last)) => (last - first).as_seconds_f64().abs(),
        _ => return 0.0,
    };
    if elapsed <= 0.0 {
        return 0.0;
    }
    let distance: f64 = window[1..]
        .iter()
        .map(|point| point.distance_from_previous)
        .sum();
    distance / elapsed
}

/// Computes `distance_from_previous` and the smoothed speed for every point
/// of a segment. The windows deliberately span run boundaries.
fn annotate(mut points: Vec<TrackPoint>, config: &Config) -> Vec<TrackPoint> {
    for i in 1..points.len() {
        points[i].distance_from_previous =
            point_distance(&points[i - 1], &points[i]);
        points[i].speed = smoothed_speed(&points, i, config.speed_window);
    }
    points
}

/// Partitions the points of one segment into runs, in order, covering every
/// input point exactly once. A new run starts where a point is separated
/// from its predecessor by more than `split_time_gap` seconds *and* more
/// than `split_distance` meters.
pub fn segment_runs(points: Vec<TrackPoint>, config: &Config) -> Vec<Run> {
    if points.is_empty() {
        return Vec::new();
    }
    let points = annotate(points, config);

    let mut runs = Vec::new();
    let mut builder = RunBuilder::default();
    let mut previous: Option<(Option<f64>, Option<OffsetDateTime>)> = None;
    for point in points {
        let elevation = point.elevation;
        let time = point.time;
        match previous {
            None => builder.push(point, 0.0),
            Some((previous_elevation, previous_time)) => {
                let gap = time_gap_seconds(previous_time, time);
                if gap > config.split_time_gap
                    && point.distance_from_previous > config.split_distance
                {
                    runs.push(take(&mut builder).finish());
                    // The jump between the runs belongs to neither of them.
                    builder.push(point, 0.0);
                } else {
                    if let (Some(e0), Some(e1)) = (previous_elevation, elevation)
                    {
                        builder.add_elevation_change(e1 - e0);
                    }
                    let counted = point.distance_from_previous;
                    builder.push(point, counted);
                }
            }
        }
        previous = Some((elevation, time));
    }
    runs.push(builder.finish());
    runs
}
