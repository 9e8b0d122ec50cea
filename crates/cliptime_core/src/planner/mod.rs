//! Timeline planners.
//!
//! # Architecture
//!
//! - **insertion**: builds an `InsertionPlan` overlaying pooled audio on clips
//! - **magnet**: builds a `MagnetPlan` that closes gaps track by track
//! - **random**: the injectable random source used for audio selection
//!
//! Planners are pure: they read clips, allocate a fresh plan and never touch
//! their inputs. Executing a plan is the host's job.

mod insertion;
mod magnet;
mod random;

pub use insertion::{create_insertion_plan, DEFAULT_AUDIO_TRACK, VIDEO_CLIP_AUDIO_TRACK};
pub use magnet::create_magnet_plan;
pub use random::{RandomSource, RngSource, SequenceSource};
