use thiserror::Error;

pub type Result<T> = std::result::Result<T, FrameError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    #[error("invalid joint type id {0} (expected 0..=19)")]
    InvalidJointType(u8),

    #[error("flat joint buffer size mismatch: got {actual}, expected {expected}")]
    InvalidLength { expected: usize, actual: usize },
}
