//! Per-camera skeleton joint frames and their flat `[x, y, z, ...]` wire layout.

pub mod error;
pub mod frame;
pub mod types;

pub use error::{FrameError, Result};
pub use frame::{FLAT_LEN, FRAME_TIME_THRESHOLD_MS, SkeletonFrame, frame_offset_between};
pub use types::{JointType, SkeletonPoint, UNTRACKED_POSITION_VALUE};
