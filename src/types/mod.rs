//! This module defines the shared data types of the transform: the grid view
//! it mutates, the direction it runs in, and the subband layout it produces.

pub mod grid;
pub mod layout;

use serde::{Deserialize, Serialize};

pub use grid::SampleGrid;
pub use layout::{subband_layout, Subband, SubbandKind};

/// Which way a pass runs: analysis (`Forward`) or synthesis (`Inverse`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Inverse,
}
