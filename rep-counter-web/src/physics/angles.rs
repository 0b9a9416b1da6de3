//! Joint angle calculation using dot product
//!
//! Calculates the angle at a vertex joint from the two limb segments
//! meeting there, e.g. shoulder→elbow and elbow→wrist.

/// Segments shorter than this have no usable direction
pub const MIN_SEGMENT_LENGTH: f32 = 1e-6;

/// Calculate the angle ABC in degrees
///
/// Uses dot product formula: cos(θ) = (BA · BC) / (|BA| × |BC|)
///
/// Returns angle in degrees within [0, 180]:
/// - 90° = bent at a right angle
/// - 180° = fully straight
///
/// Returns `None` when either segment has zero length.
pub fn angle_at_vertex(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> Option<f32> {
    // Vector from vertex to proximal joint
    let v1 = (a.0 - b.0, a.1 - b.1);

    // Vector from vertex to distal joint
    let v2 = (c.0 - b.0, c.1 - b.1);

    let mag1 = (v1.0 * v1.0 + v1.1 * v1.1).sqrt();
    let mag2 = (v2.0 * v2.0 + v2.1 * v2.1).sqrt();

    if mag1 < MIN_SEGMENT_LENGTH || mag2 < MIN_SEGMENT_LENGTH {
        return None;
    }

    let dot = v1.0 * v2.0 + v1.1 * v2.1;

    // Rounding can push the ratio just outside acos' domain
    let cos_angle = (dot / (mag1 * mag2)).clamp(-1.0, 1.0);

    Some(cos_angle.acos().to_degrees())
}

/// Vertical offset of `point` from `reference` (positive = below, image y grows downward)
pub fn vertical_offset(point: (f32, f32), reference: (f32, f32)) -> f32 {
    point.1 - reference.1
}
