//! The pyramid pipeline: the level-by-level orchestration of the axis kernels.

pub mod orchestrator;

pub use orchestrator::{forward_transform, inverse_transform, HaarPyramid};
