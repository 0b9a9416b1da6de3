//! Landmark vocabulary and frame container
//!
//! Ids follow the MediaPipe Pose layout (33 landmarks). Ids outside that
//! range are still accepted so newer detector models keep working.

use std::collections::btree_map::{self, BTreeMap};

/// Number of landmarks emitted by MediaPipe Pose
pub const POSE_LANDMARK_COUNT: usize = 33;

// ============================================================================
// LANDMARK IDS (MediaPipe Pose - 33 total)
// ============================================================================

/// Stable landmark identifier, reused across frames for the same joint
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LandmarkId(pub u16);

impl LandmarkId {
    pub const NOSE: Self = Self(0);
    pub const LEFT_EYE_INNER: Self = Self(1);
    pub const LEFT_EYE: Self = Self(2);
    pub const LEFT_EYE_OUTER: Self = Self(3);
    pub const RIGHT_EYE_INNER: Self = Self(4);
    pub const RIGHT_EYE: Self = Self(5);
    pub const RIGHT_EYE_OUTER: Self = Self(6);
    pub const LEFT_EAR: Self = Self(7);
    pub const RIGHT_EAR: Self = Self(8);
    pub const MOUTH_LEFT: Self = Self(9);
    pub const MOUTH_RIGHT: Self = Self(10);
    pub const LEFT_SHOULDER: Self = Self(11);
    pub const RIGHT_SHOULDER: Self = Self(12);
    pub const LEFT_ELBOW: Self = Self(13);
    pub const RIGHT_ELBOW: Self = Self(14);
    pub const LEFT_WRIST: Self = Self(15);
    pub const RIGHT_WRIST: Self = Self(16);
    pub const LEFT_PINKY: Self = Self(17);
    pub const RIGHT_PINKY: Self = Self(18);
    pub const LEFT_INDEX: Self = Self(19);
    pub const RIGHT_INDEX: Self = Self(20);
    pub const LEFT_THUMB: Self = Self(21);
    pub const RIGHT_THUMB: Self = Self(22);
    pub const LEFT_HIP: Self = Self(23);
    pub const RIGHT_HIP: Self = Self(24);
    pub const LEFT_KNEE: Self = Self(25);
    pub const RIGHT_KNEE: Self = Self(26);
    pub const LEFT_ANKLE: Self = Self(27);
    pub const RIGHT_ANKLE: Self = Self(28);
    pub const LEFT_HEEL: Self = Self(29);
    pub const RIGHT_HEEL: Self = Self(30);
    pub const LEFT_FOOT_INDEX: Self = Self(31);
    pub const RIGHT_FOOT_INDEX: Self = Self(32);

    /// True for ids in the MediaPipe Pose vocabulary
    pub fn is_known(&self) -> bool {
        (self.0 as usize) < POSE_LANDMARK_COUNT
    }
}

impl From<u16> for LandmarkId {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

// ============================================================================
// BODY SIDE
// ============================================================================

/// Which limb chain represents the body for counting
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodySide {
    #[default]
    Left,
    Right,
}

/// The six joints of one body side used by the exercise analyses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LimbJoints {
    pub shoulder: LandmarkId,
    pub elbow: LandmarkId,
    pub wrist: LandmarkId,
    pub hip: LandmarkId,
    pub knee: LandmarkId,
    pub ankle: LandmarkId,
}

impl BodySide {
    pub fn joints(&self) -> LimbJoints {
        match self {
            BodySide::Left => LimbJoints {
                shoulder: LandmarkId::LEFT_SHOULDER,
                elbow: LandmarkId::LEFT_ELBOW,
                wrist: LandmarkId::LEFT_WRIST,
                hip: LandmarkId::LEFT_HIP,
                knee: LandmarkId::LEFT_KNEE,
                ankle: LandmarkId::LEFT_ANKLE,
            },
            BodySide::Right => LimbJoints {
                shoulder: LandmarkId::RIGHT_SHOULDER,
                elbow: LandmarkId::RIGHT_ELBOW,
                wrist: LandmarkId::RIGHT_WRIST,
                hip: LandmarkId::RIGHT_HIP,
                knee: LandmarkId::RIGHT_KNEE,
                ankle: LandmarkId::RIGHT_ANKLE,
            },
        }
    }
}

// ============================================================================
// LANDMARK DATA STRUCTURES
// ============================================================================

/// A single 2D landmark (normalized image coordinates)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Landmark {
    id: LandmarkId,
    x: f32, // 0-1 normalized
    y: f32, // 0-1 normalized, grows downward
}

impl Landmark {
    pub fn new(id: impl Into<LandmarkId>, x: f32, y: f32) -> Self {
        Self { id: id.into(), x, y }
    }

    pub fn id(&self) -> LandmarkId {
        self.id
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Same joint, new position
    pub fn moved_to(&self, x: f32, y: f32) -> Self {
        Self { id: self.id, x, y }
    }
}

/// All landmarks detected in one video frame, ordered by id
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LandmarkFrame {
    landmarks: BTreeMap<LandmarkId, Landmark>,
}

impl LandmarkFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from a flat detector array
    ///
    /// Layout is `[x0, y0, (z0, ...), x1, y1, ...]` with `stride` values per
    /// landmark; only x and y are read. The landmark id is the position in
    /// the array. Points with non-finite coordinates are dropped.
    ///
    /// Returns `None` when the array length does not fit the stride, or when
    /// it holds more landmarks than there are ids.
    pub fn from_flat(data: &[f32], stride: usize) -> Option<Self> {
        if stride < 2 || data.len() % stride != 0 {
            return None;
        }

        let mut frame = Self::new();
        for (i, point) in data.chunks_exact(stride).enumerate() {
            let id = u16::try_from(i).ok()?;
            if point[0].is_finite() && point[1].is_finite() {
                frame.insert(Landmark::new(id, point[0], point[1]));
            }
        }

        Some(frame)
    }

    /// Insert or replace the landmark for its id
    pub fn insert(&mut self, landmark: Landmark) -> Option<Landmark> {
        self.landmarks.insert(landmark.id(), landmark)
    }

    pub fn get(&self, id: LandmarkId) -> Option<&Landmark> {
        self.landmarks.get(&id)
    }

    /// Position of a landmark, if present
    pub fn position(&self, id: LandmarkId) -> Option<(f32, f32)> {
        self.get(id).map(Landmark::position)
    }

    pub fn contains(&self, id: LandmarkId) -> bool {
        self.landmarks.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn iter(&self) -> btree_map::Values<'_, LandmarkId, Landmark> {
        self.landmarks.values()
    }
}

impl FromIterator<Landmark> for LandmarkFrame {
    fn from_iter<I: IntoIterator<Item = Landmark>>(iter: I) -> Self {
        Self {
            landmarks: iter.into_iter().map(|lm| (lm.id(), lm)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LandmarkFrame {
    type Item = &'a Landmark;
    type IntoIter = btree_map::Values<'a, LandmarkId, Landmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
