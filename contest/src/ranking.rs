//! Deterministic descending ranking of point lists.

use crate::points::{PointList, StatePoints};
use std::cmp::Ordering;

/// Highest score first; equal scores fall back to ascending state id.
pub fn compare(a: &StatePoints, b: &StatePoints) -> Ordering {
    b.points.cmp(&a.points).then_with(|| a.state.cmp(&b.state))
}

/// Sort `list` into final placing order.
pub fn rank(mut list: PointList) -> PointList {
    list.entries_mut().sort_by(compare);
    list
}
