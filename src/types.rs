use std::fmt;

use crate::error::FrameError;

/// Marks a coordinate of a joint the sensor did not track.
///
/// This is a legal `f32`, so it is a heuristic: a real joint sitting exactly at
/// `f32::MIN` would read as untracked.
pub const UNTRACKED_POSITION_VALUE: f32 = f32::MIN;

/// Joints reported by the depth sensor, numbered as the sensor SDK numbers them.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JointType {
    HipCenter = 0,
    Spine = 1,
    ShoulderCenter = 2,
    Head = 3,
    ShoulderLeft = 4,
    ElbowLeft = 5,
    WristLeft = 6,
    HandLeft = 7,
    ShoulderRight = 8,
    ElbowRight = 9,
    WristRight = 10,
    HandRight = 11,
    HipLeft = 12,
    KneeLeft = 13,
    AnkleLeft = 14,
    FootLeft = 15,
    HipRight = 16,
    KneeRight = 17,
    AnkleRight = 18,
    FootRight = 19,
}

impl JointType {
    pub const COUNT: usize = 20;

    /// Every joint, ordered by id.
    pub const ALL: [JointType; Self::COUNT] = [
        JointType::HipCenter,
        JointType::Spine,
        JointType::ShoulderCenter,
        JointType::Head,
        JointType::ShoulderLeft,
        JointType::ElbowLeft,
        JointType::WristLeft,
        JointType::HandLeft,
        JointType::ShoulderRight,
        JointType::ElbowRight,
        JointType::WristRight,
        JointType::HandRight,
        JointType::HipLeft,
        JointType::KneeLeft,
        JointType::AnkleLeft,
        JointType::FootLeft,
        JointType::HipRight,
        JointType::KneeRight,
        JointType::AnkleRight,
        JointType::FootRight,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    /// Slot of this joint in a frame's joint array.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            JointType::HipCenter => "HipCenter",
            JointType::Spine => "Spine",
            JointType::ShoulderCenter => "ShoulderCenter",
            JointType::Head => "Head",
            JointType::ShoulderLeft => "ShoulderLeft",
            JointType::ElbowLeft => "ElbowLeft",
            JointType::WristLeft => "WristLeft",
            JointType::HandLeft => "HandLeft",
            JointType::ShoulderRight => "ShoulderRight",
            JointType::ElbowRight => "ElbowRight",
            JointType::WristRight => "WristRight",
            JointType::HandRight => "HandRight",
            JointType::HipLeft => "HipLeft",
            JointType::KneeLeft => "KneeLeft",
            JointType::AnkleLeft => "AnkleLeft",
            JointType::FootLeft => "FootLeft",
            JointType::HipRight => "HipRight",
            JointType::KneeRight => "KneeRight",
            JointType::AnkleRight => "AnkleRight",
            JointType::FootRight => "FootRight",
        }
    }
}

impl fmt::Display for JointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<JointType> for u8 {
    fn from(joint: JointType) -> Self {
        joint.id()
    }
}

impl TryFrom<u8> for JointType {
    type Error = FrameError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(id as usize)
            .copied()
            .ok_or(FrameError::InvalidJointType(id))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkeletonPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl SkeletonPoint {
    pub const UNTRACKED: SkeletonPoint = SkeletonPoint {
        x: UNTRACKED_POSITION_VALUE,
        y: UNTRACKED_POSITION_VALUE,
        z: UNTRACKED_POSITION_VALUE,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// False only when every coordinate holds the untracked sentinel.
    pub fn is_tracked(&self) -> bool {
        !(self.x == UNTRACKED_POSITION_VALUE
            && self.y == UNTRACKED_POSITION_VALUE
            && self.z == UNTRACKED_POSITION_VALUE)
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Default for SkeletonPoint {
    fn default() -> Self {
        Self::UNTRACKED
    }
}

impl From<[f32; 3]> for SkeletonPoint {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn joint_ids_match_their_position_in_all() {
        for (idx, joint) in JointType::ALL.iter().enumerate() {
            assert_eq!(joint.index(), idx);
            assert_eq!(joint.id() as usize, idx);
            assert_eq!(u8::from(*joint), joint.id());
        }
        assert_eq!(JointType::Head.id(), 3);
        assert_eq!(JointType::FootRight.id(), 19);
    }

    #[test]
    fn joint_try_from_rejects_unknown_ids() {
        assert_eq!(JointType::try_from(13u8).unwrap(), JointType::KneeLeft);
        assert_matches!(
            JointType::try_from(20u8),
            Err(FrameError::InvalidJointType(20))
        );
        assert_matches!(
            JointType::try_from(u8::MAX),
            Err(FrameError::InvalidJointType(255))
        );
    }

    #[test]
    fn joint_display_uses_sdk_name() {
        assert_eq!(JointType::ShoulderCenter.to_string(), "ShoulderCenter");
    }

    #[test]
    fn untracked_point_is_not_tracked() {
        assert!(!SkeletonPoint::UNTRACKED.is_tracked());
        assert!(!SkeletonPoint::default().is_tracked());
        assert!(SkeletonPoint::new(0.0, 0.0, 0.0).is_tracked());
        // a single sentinel coordinate is still a measured position
        assert!(SkeletonPoint::new(UNTRACKED_POSITION_VALUE, 1.0, 2.0).is_tracked());
    }

    #[test]
    fn point_array_conversions() {
        let point = SkeletonPoint::from([0.5, -1.25, 2.0]);
        assert_eq!(point, SkeletonPoint::new(0.5, -1.25, 2.0));
        assert_eq!(point.to_array(), [0.5, -1.25, 2.0]);
    }
}
