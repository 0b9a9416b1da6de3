//! Kalman Filter for landmark position smoothing
//!
//! State vector: [x, y, vx, vy]ᵀ (4 elements)
//! One predict + one update per observation, dt = 1 frame.

use nalgebra::{SMatrix, SVector};

/// 4-element state vector type
type State = SVector<f32, 4>;
/// 4x4 matrix type
type Matrix4 = SMatrix<f32, 4, 4>;
/// 2x4 matrix type (observation)
type Matrix2x4 = SMatrix<f32, 2, 4>;
/// 4x2 matrix type (Kalman gain)
type Matrix4x2 = SMatrix<f32, 4, 2>;
/// 2x2 matrix type
type Matrix2 = SMatrix<f32, 2, 2>;
/// 2-element vector type
type Vector2 = SVector<f32, 2>;

/// Initial covariance scale - we know nothing about velocity yet
pub const INITIAL_UNCERTAINTY: f32 = 1000.0;

/// Measurement noise - pose detector jitter
pub const MEASUREMENT_NOISE: f32 = 5.0;

/// Process noise - landmarks move smoothly between frames
pub const PROCESS_NOISE: f32 = 0.1;

/// Constant-velocity Kalman filter for one landmark
#[derive(Clone, Debug, PartialEq)]
pub struct KalmanFilter {
    /// State: [x, y, vx, vy]
    state: State,

    /// State covariance matrix (uncertainty)
    covariance: Matrix4,

    /// Process noise Q
    process_noise: Matrix4,

    /// Measurement noise covariance R
    measurement_noise: Matrix2,
}

impl KalmanFilter {
    /// Create a filter at rest on the first observed position
    pub fn new(x: f32, y: f32) -> Self {
        Self::with_noise(x, y, INITIAL_UNCERTAINTY, PROCESS_NOISE, MEASUREMENT_NOISE)
    }

    /// Create a filter with explicit noise parameters
    pub fn with_noise(
        x: f32,
        y: f32,
        initial_uncertainty: f32,
        process_noise: f32,
        measurement_noise: f32,
    ) -> Self {
        Self {
            state: State::new(x, y, 0.0, 0.0),
            covariance: Matrix4::identity() * initial_uncertainty,
            process_noise: Matrix4::identity() * process_noise,
            measurement_noise: Matrix2::identity() * measurement_noise,
        }
    }

    /// Transition matrix F (position += velocity each frame)
    ///
    /// ```text
    /// | 1  0  1  0 |
    /// | 0  1  0  1 |
    /// | 0  0  1  0 |
    /// | 0  0  0  1 |
    /// ```
    fn transition_matrix() -> Matrix4 {
        Matrix4::new(
            1.0, 0.0, 1.0, 0.0,
            0.0, 1.0, 0.0, 1.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Observation matrix H (we only measure x, y)
    fn observation_matrix() -> Matrix2x4 {
        Matrix2x4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
        )
    }

    /// Predict step - advance one frame under constant velocity
    pub fn predict(&mut self) {
        let f = Self::transition_matrix();

        // State prediction: x = F * x
        self.state = f * self.state;

        // Covariance prediction: P = F * P * Fᵀ + Q
        self.covariance = f * self.covariance * f.transpose() + self.process_noise;
    }

    /// Update step - correct the prediction with a detector measurement
    pub fn update(&mut self, measured_x: f32, measured_y: f32) {
        let h = Self::observation_matrix();
        let z = Vector2::new(measured_x, measured_y);

        // Innovation: y = z - H * x
        let innovation = z - h * self.state;

        // Innovation covariance: S = H * P * Hᵀ + R
        let s = h * self.covariance * h.transpose() + self.measurement_noise;

        // Kalman gain: K = P * Hᵀ * S⁻¹
        let s_inv = s.try_inverse().unwrap_or(Matrix2::identity());
        let k: Matrix4x2 = self.covariance * h.transpose() * s_inv;

        // State update: x = x + K * y
        self.state += k * innovation;

        // Covariance update: P = (I - K * H) * P
        self.covariance = (Matrix4::identity() - k * h) * self.covariance;
    }

    /// Predict then update; returns the filtered position
    pub fn step(&mut self, measured_x: f32, measured_y: f32) -> (f32, f32) {
        self.predict();
        self.update(measured_x, measured_y);
        self.position()
    }

    /// Get estimated position
    pub fn position(&self) -> (f32, f32) {
        (self.state[0], self.state[1])
    }

    /// Get estimated velocity (normalized units per frame)
    pub fn velocity(&self) -> (f32, f32) {
        (self.state[2], self.state[3])
    }

    /// Total remaining uncertainty
    pub fn covariance_trace(&self) -> f32 {
        self.covariance.trace()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_first_observation() {
        let kf = KalmanFilter::new(0.3, 0.7);
        assert_eq!(kf.position(), (0.3, 0.7));
        assert_eq!(kf.velocity(), (0.0, 0.0));
    }

    #[test]
    fn test_constant_input_holds_position() {
        let mut kf = KalmanFilter::new(0.5, 0.5);
        for _ in 0..20 {
            let (x, y) = kf.step(0.5, 0.5);
            assert!((x - 0.5).abs() < 1e-5);
            assert!((y - 0.5).abs() < 1e-5);
        }
    }

    #[test]
    fn test_step_response_settles() {
        let mut kf = KalmanFilter::new(0.2, 0.2);
        for _ in 0..5 {
            kf.step(0.2, 0.2);
        }
        for _ in 0..40 {
            kf.step(0.6, 0.4);
        }
        let (x, y) = kf.position();
        assert!((x - 0.6).abs() < 0.01, "x = {}", x);
        assert!((y - 0.4).abs() < 0.01, "y = {}", y);
    }

    #[test]
    fn test_converges_from_any_start() {
        // Wrong starting point, huge and tiny initial uncertainty
        for p0 in [1.0e6, 1000.0, 1.0] {
            let mut kf = KalmanFilter::with_noise(0.0, 1.0, p0, PROCESS_NOISE, MEASUREMENT_NOISE);
            for _ in 0..60 {
                kf.step(0.5, 0.5);
            }
            let (x, y) = kf.position();
            assert!((x - 0.5).abs() < 0.02, "p0 = {}: x = {}", p0, x);
            assert!((y - 0.5).abs() < 0.02, "p0 = {}: y = {}", p0, y);
        }
    }

    #[test]
    fn test_tracks_velocity() {
        let mut kf = KalmanFilter::new(0.0, 0.5);
        for i in 1..=60 {
            kf.step(i as f32 * 0.01, 0.5);
        }
        let (vx, vy) = kf.velocity();
        assert!((vx - 0.01).abs() < 0.002, "vx = {}", vx);
        assert!(vy.abs() < 1e-4);
    }

    #[test]
    fn test_uncertainty_shrinks() {
        let mut kf = KalmanFilter::new(0.5, 0.5);
        let before = kf.covariance_trace();
        kf.step(0.5, 0.5);
        assert!(kf.covariance_trace() < before);
    }
}
