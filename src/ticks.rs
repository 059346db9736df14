/// Conceptual positions of ruler ticks along one axis.
///
/// Ticks sit at whole multiples of `step` counted out from the origin, and
/// only those strictly inside `(range_min, range_max)` are returned, in
/// ascending order. Positions are computed as `i * step` rather than by
/// repeated addition, so they do not drift across a long axis.
pub fn ruler_positions(range_min: f32, range_max: f32, step: f32) -> Vec<f32> {
    if step.is_nan() || step <= 0.0 || !range_min.is_finite() || !range_max.is_finite() {
        return Vec::new();
    }

    let (lo, hi) = if range_min < range_max {
        (range_min, range_max)
    } else {
        (range_max, range_min)
    };

    let first = (lo / step).floor() as i64;
    let last = (hi / step).ceil() as i64;

    (first..=last)
        .map(|i| i as f32 * step)
        .filter(|&v| v > lo && v < hi)
        .collect()
}
