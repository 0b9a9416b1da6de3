//! Landmark stabilizer - one Kalman filter per landmark id
//!
//! Filters are created the first time an id is observed and live for the
//! whole session. An id missing from a frame is simply not stepped; its
//! filter picks up again with the next observation. A landmark with a
//! non-finite coordinate is treated the same way as a missing one.

use std::collections::BTreeMap;

use super::kalman::KalmanFilter;
use crate::pose::{LandmarkFrame, LandmarkId};

/// Per-landmark jitter suppression
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LandmarkStabilizer {
    filters: BTreeMap<LandmarkId, KalmanFilter>,
}

impl LandmarkStabilizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter every landmark in the frame and return the smoothed frame
    ///
    /// Non-finite observations never reach a filter and are left out of the
    /// smoothed frame.
    pub fn stabilize(&mut self, raw: &LandmarkFrame) -> LandmarkFrame {
        raw.iter()
            .filter_map(|landmark| {
                let (x, y) = landmark.position();
                if !(x.is_finite() && y.is_finite()) {
                    log::warn!("landmark {:?} has non-finite position, skipped", landmark.id());
                    return None;
                }
                let filter = self.filters.entry(landmark.id()).or_insert_with(|| {
                    log::trace!("tracking landmark {:?}", landmark.id());
                    KalmanFilter::new(x, y)
                });
                let (fx, fy) = filter.step(x, y);
                Some(landmark.moved_to(fx, fy))
            })
            .collect()
    }

    /// Number of landmark ids with filter state
    pub fn tracked_count(&self) -> usize {
        self.filters.len()
    }

    /// Read-only access to one landmark's filter
    pub fn filter(&self, id: LandmarkId) -> Option<&KalmanFilter> {
        self.filters.get(&id)
    }
}
