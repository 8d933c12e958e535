pub const MIN_SPHERE_RADIUS: f64 = 0.2;
pub const RADIUS_PER_SCORE_POINT: f64 = 0.03;
pub const REFERENCE_VIEWPORT_WIDTH: f64 = 1200.0;

const MIN_VIEWPORT_SCALE: f64 = 0.6;
const MAX_VIEWPORT_SCALE: f64 = 1.4;

/// Scale factor for a viewport `width` pixels wide. Unknown widths scale by 1.
pub fn viewport_scale(width: f64) -> f64 {
    if !width.is_finite() || width <= 0.0 {
        return 1.0;
    }
    (width / REFERENCE_VIEWPORT_WIDTH).clamp(MIN_VIEWPORT_SCALE, MAX_VIEWPORT_SCALE)
}

/// Rendered sphere radius of a track: grows with its listen score, never
/// smaller than [`MIN_SPHERE_RADIUS`] before viewport scaling.
pub fn sphere_radius(listen_score: u32, viewport_width: f64) -> f64 {
    let base = (f64::from(listen_score) * RADIUS_PER_SCORE_POINT).max(MIN_SPHERE_RADIUS);
    base * viewport_scale(viewport_width)
}
