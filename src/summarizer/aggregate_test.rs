use super::aggregate::{combine, roll_up, Aggregate};
use crate::utils::test_util::time;

use geo::{coord, Rect};
use rstest::{fixture, rstest};

fn rect(x1: f64, y1: f64, x2: f64, y2: f64) -> Rect {
    Rect::new(coord! { x: x1, y: y1 }, coord! { x: x2, y: y2 })
}

#[fixture]
fn first() -> Aggregate {
    Aggregate {
        distance: 1200.0,
        duration: 600.0,
        elevation_gain: 80.0,
        elevation_loss: 20.0,
        bounds: Some(rect(6.5, 45.2, 6.6, 45.3)),
        min_time: Some(time("2018-01-01T09:15:00Z")),
        max_time: Some(time("2018-01-01T09:25:00Z")),
    }
}

#[fixture]
fn second() -> Aggregate {
    Aggregate {
        distance: 800.0,
        duration: 300.0,
        elevation_gain: 10.0,
        elevation_loss: 50.0,
        bounds: Some(rect(6.4, 45.25, 6.55, 45.4)),
        min_time: Some(time("2018-01-01T09:30:00Z")),
        max_time: Some(time("2018-01-01T09:35:00Z")),
    }
}

#[rstest]
fn combine_sums_and_folds_extents(first: Aggregate, second: Aggregate) {
    let combined = combine(first, &second);
    assert_eq!(combined.distance, 2000.0);
    assert_eq!(combined.duration, 900.0);
    assert_eq!(combined.elevation_gain, 90.0);
    assert_eq!(combined.elevation_loss, 70.0);
    assert_eq!(combined.bounds, Some(rect(6.4, 45.2, 6.6, 45.4)));
    assert_eq!(combined.min_time, Some(time("2018-01-01T09:15:00Z")));
    assert_eq!(combined.max_time, Some(time("2018-01-01T09:35:00Z")));
}

#[rstest]
fn default_is_the_identity(first: Aggregate) {
    let left = combine(Aggregate::default(), &first);
    assert_eq!(left, first);
    let right = combine(first.clone(), &Aggregate::default());
    assert_eq!(right, first);
}

#[rstest]
fn unset_extents_take_the_other_side(first: Aggregate) {
    let bare = Aggregate {
        distance: 100.0,
        duration: 10.0,
        ..Aggregate::default()
    };
    let combined = combine(bare, &first);
    assert_eq!(combined.bounds, first.bounds);
    assert_eq!(combined.min_time, first.min_time);
    assert_eq!(combined.max_time, first.max_time);
}

#[test]
fn roll_up_of_nothing_is_the_identity() {
    let none: [&Aggregate; 0] = [];
    assert_eq!(roll_up(none), Aggregate::default());
}

#[rstest]
fn roll_up_is_associative(first: Aggregate, second: Aggregate) {
    let third = Aggregate {
        distance: 50.0,
        duration: 5.0,
        elevation_gain: 3.0,
        elevation_loss: 0.0,
        bounds: Some(rect(6.7, 45.1, 6.8, 45.15)),
        min_time: Some(time("2018-01-01T09:00:00Z")),
        max_time: Some(time("2018-01-01T09:01:00Z")),
    };
    let pairwise =
        combine(combine(first.clone(), &second), &third);
    let nested = roll_up([
        &roll_up([&first, &second]),
        &roll_up([&third]),
    ]);
    assert_eq!(pairwise, nested);
}
