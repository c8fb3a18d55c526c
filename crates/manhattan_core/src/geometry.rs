use crate::geopoint::GeoPoint;

/// Angle in degrees, in `[0, 45]`, between the line `a`-`b` and the closest of
/// 0°, 90°, 180° and 270°.
///
/// Works on raw coordinate deltas (longitude as x, latitude as y) folded into
/// the first octant, so a bearing just under 360° counts as near 0° and the
/// result is exactly the same for `a`-`b` and `b`-`a`.
pub fn cardinal_deviation(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let dx = (b.lng - a.lng).abs();
    let dy = (b.lat - a.lat).abs();

    dy.min(dx).atan2(dy.max(dx)).to_degrees()
}

/// Whether the straight line from `a` to `b` runs within `tolerance_degrees`
/// of one of the four cardinal directions.
///
/// Coincident points carry no direction and are always orthogonal.
pub fn is_orthogonal(a: &GeoPoint, b: &GeoPoint, tolerance_degrees: f64) -> bool {
    if a.is_near(b) {
        return true;
    }

    cardinal_deviation(a, b) <= tolerance_degrees
}

/// Applies [`is_orthogonal`] to every consecutive pair of `points`, stopping at
/// the first diagonal segment.
pub fn all_segments_orthogonal(points: &[GeoPoint], tolerance_degrees: f64) -> bool {
    points
        .windows(2)
        .all(|segment| is_orthogonal(&segment[0], &segment[1], tolerance_degrees))
}
