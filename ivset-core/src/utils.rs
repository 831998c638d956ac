use crate::models::Interval;

/// Checks whether two half-open intervals share at least one point.
///
/// Touching intervals such as `[0,10)` and `[10,20)` do not overlap.
#[inline]
pub fn check_overlap(a: &Interval, b: &Interval) -> bool {
    a.start() < b.end() && b.start() < a.end()
}
