use geo::Rect;
use serde::Serialize;
use time::OffsetDateTime;

use crate::utils::option_time_ser;
use crate::utils::rect::union_rects_if;

/// Statistics shared by every level of the run → segment → track hierarchy.
/// `Default` is the identity of `combine`.
#[derive(Debug, Clone, Default, Serialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Aggregate {
    pub distance: f64,
    pub duration: f64,
    pub elevation_gain: f64,
    pub elevation_loss: f64,
    pub bounds: Option<Rect>,
    #[serde(with = "option_time_ser")]
    pub min_time: Option<OffsetDateTime>,
    #[serde(with = "option_time_ser")]
    pub max_time: Option<OffsetDateTime>,
}

pub fn min_time_if(
    t1: Option<OffsetDateTime>,
    t2: Option<OffsetDateTime>,
) -> Option<OffsetDateTime> {
    match (t1, t2) {
        (None, t) => t,
        (t, None) => t,
        (Some(t1), Some(t2)) => Some(t1.min(t2)),
    }
}

pub fn max_time_if(
    t1: Option<OffsetDateTime>,
    t2: Option<OffsetDateTime>,
) -> Option<OffsetDateTime> {
    match (t1, t2) {
        (None, t) => t,
        (t, None) => t,
        (Some(t1), Some(t2)) => Some(t1.max(t2)),
    }
}

/// The single combinator used at every level of the rollup. Sums the
/// cumulative quantities and folds the optional extents, where an unset
/// operand takes the other side's value.
pub fn combine(lhs: Aggregate, rhs: &Aggregate) -> Aggregate {
    Aggregate {
        distance: lhs.distance + rhs.distance,
        duration: lhs.duration + rhs.duration,
        elevation_gain: lhs.elevation_gain + rhs.elevation_gain,
        elevation_loss: lhs.elevation_loss + rhs.elevation_loss,
        bounds: union_rects_if(lhs.bounds, rhs.bounds),
        min_time: min_time_if(lhs.min_time, rhs.min_time),
        max_time: max_time_if(lhs.max_time, rhs.max_time),
    }
}

pub fn roll_up<'a, It>(children: It) -> Aggregate
where
    It: IntoIterator<Item = &'a Aggregate>,
{
    children
        .into_iter()
        .fold(Aggregate::default(), |acc, child| combine(acc, child))
}
