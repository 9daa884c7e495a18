//! Core domain types for the tracker

mod level;
mod progress;
mod reward;

pub use level::{ABSENT_DISPLAY, Level, LevelKey, RewardValue, Rewards};
pub(crate) use level::{assign_keys, non_sentinel};
pub use progress::Progress;
pub use reward::RewardKind;
