//! One skeleton, seen by one camera, at one moment of a capture session.

use std::time::Instant;

use ndarray::Array2;

use crate::error::{FrameError, Result};
use crate::types::{JointType, SkeletonPoint};

/// Length of the flat `[x, y, z, x, y, z, ...]` joint array.
pub const FLAT_LEN: usize = JointType::COUNT * 3;

/// Two recordings closer than this many milliseconds belong to the same frame.
/// The sensor delivers skeletons at roughly 30 FPS (~33 ms apart).
pub const FRAME_TIME_THRESHOLD_MS: u32 = 24;

/// Milliseconds from `session_start` to `captured_at`, clamped to the `u32` range.
pub fn frame_offset_between(session_start: Instant, captured_at: Instant) -> u32 {
    let elapsed = captured_at.saturating_duration_since(session_start);
    u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX)
}

/// Joint positions of a single tracked skeleton for one camera frame.
///
/// The camera id, skeleton id and frame offset are fixed at construction. Joint
/// slots start out holding [`SkeletonPoint::UNTRACKED`] and can only be changed
/// through the update methods.
#[derive(Clone, Debug, PartialEq)]
pub struct SkeletonFrame {
    camera_id: i32,
    skeleton_id: i32,
    frame_offset: u32,
    joints: [SkeletonPoint; JointType::COUNT],
}

impl SkeletonFrame {
    /// `skeleton_id` is the camera's own tracking id. Other cameras may give the
    /// same person a different id.
    pub fn new(camera_id: i32, skeleton_id: i32, frame_offset: u32) -> Self {
        Self {
            camera_id,
            skeleton_id,
            frame_offset,
            joints: [SkeletonPoint::UNTRACKED; JointType::COUNT],
        }
    }

    pub fn captured_at(
        camera_id: i32,
        skeleton_id: i32,
        session_start: Instant,
        captured_at: Instant,
    ) -> Self {
        Self::new(
            camera_id,
            skeleton_id,
            frame_offset_between(session_start, captured_at),
        )
    }

    /// Rebuilds a frame from the layout produced by [`SkeletonFrame::to_array`].
    pub fn from_array(
        camera_id: i32,
        skeleton_id: i32,
        frame_offset: u32,
        values: &[f32],
    ) -> Result<Self> {
        if values.len() != FLAT_LEN {
            log::warn!(
                "rejecting joint buffer for camera {camera_id} skeleton {skeleton_id}: {} values",
                values.len()
            );
            return Err(FrameError::InvalidLength {
                expected: FLAT_LEN,
                actual: values.len(),
            });
        }

        let mut frame = Self::new(camera_id, skeleton_id, frame_offset);
        for (slot, xyz) in frame.joints.iter_mut().zip(values.chunks_exact(3)) {
            *slot = SkeletonPoint::new(xyz[0], xyz[1], xyz[2]);
        }
        log::debug!(
            "decoded frame @{frame_offset}ms camera {camera_id} skeleton {skeleton_id} ({} tracked joints)",
            frame.tracked_count()
        );

        Ok(frame)
    }

    pub fn camera_id(&self) -> i32 {
        self.camera_id
    }

    pub fn skeleton_id(&self) -> i32 {
        self.skeleton_id
    }

    /// Milliseconds since the start of the capture session.
    pub fn frame_offset(&self) -> u32 {
        self.frame_offset
    }

    pub fn joints(&self) -> &[SkeletonPoint; JointType::COUNT] {
        &self.joints
    }

    pub fn joint(&self, joint: JointType) -> SkeletonPoint {
        self.joints[joint.index()]
    }

    pub fn tracked_joint(&self, joint: JointType) -> Option<SkeletonPoint> {
        Some(self.joint(joint)).filter(SkeletonPoint::is_tracked)
    }

    /// Replaces the position of joint `joint_type`.
    ///
    /// # Panics
    ///
    /// Panics if `joint_type` is not a joint id (`0..=19`).
    pub fn update_joint(&mut self, joint_type: u8, pos: SkeletonPoint) {
        self.joints[joint_type as usize] = pos;
    }

    /// Overwrites the coordinates of joint `joint_type` in place.
    ///
    /// # Panics
    ///
    /// Panics if `joint_type` is not a joint id (`0..=19`).
    pub fn update_joint_coords(&mut self, joint_type: u8, x: f32, y: f32, z: f32) {
        let slot = &mut self.joints[joint_type as usize];
        slot.x = x;
        slot.y = y;
        slot.z = z;
    }

    pub fn set_joint(&mut self, joint: JointType, pos: SkeletonPoint) {
        self.joints[joint.index()] = pos;
    }

    pub fn clear_joint(&mut self, joint: JointType) {
        self.set_joint(joint, SkeletonPoint::UNTRACKED);
    }

    pub fn tracked_joints(&self) -> impl Iterator<Item = (JointType, SkeletonPoint)> + '_ {
        JointType::ALL
            .into_iter()
            .zip(self.joints.iter().copied())
            .filter(|(_, pos)| pos.is_tracked())
    }

    pub fn tracked_count(&self) -> usize {
        self.joints.iter().filter(|pos| pos.is_tracked()).count()
    }

    pub fn is_fully_untracked(&self) -> bool {
        self.tracked_count() == 0
    }

    /// Flattens the joints to `[x, y, z, x, y, z, ...]` in joint id order.
    ///
    /// This is the layout downstream consumers read, so the order must not change.
    pub fn to_array(&self) -> [f32; FLAT_LEN] {
        let mut vals = [0.0f32; FLAT_LEN];
        for (out, joint) in vals.chunks_exact_mut(3).zip(self.joints.iter()) {
            out[0] = joint.x;
            out[1] = joint.y;
            out[2] = joint.z;
        }
        vals
    }

    /// Joints as a `(20, 3)` matrix, one row per joint.
    pub fn joints_matrix(&self) -> Array2<f32> {
        Array2::from_shape_fn((JointType::COUNT, 3), |(row, col)| {
            self.joints[row].to_array()[col]
        })
    }

    pub fn same_frame(&self, other: &SkeletonFrame, threshold_ms: u32) -> bool {
        self.frame_offset.abs_diff(other.frame_offset) < threshold_ms
    }
}
