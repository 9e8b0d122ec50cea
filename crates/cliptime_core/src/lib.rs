//! Clip Time Core - timeline planning engine
//!
//! Decides where sound goes on a multi-track timeline and how to compact a
//! timeline once clips are removed. Everything works on integer ticks and
//! produces plans; executing a plan against a live timeline is left to the
//! host integration.
//!
//! - [`time`]: tick-based `TimeCode` arithmetic and formatting
//! - [`ordering`]: deterministic clip ordering
//! - [`gaps`]: per-track gap detection
//! - [`planner`]: sound insertion and magnet (gap removal) planning
//! - [`orchestrator`]: validation, planning and host command assembly
//! - [`config`], [`logging`]: TOML settings and tracing setup

pub mod config;
pub mod gaps;
pub mod logging;
pub mod models;
pub mod orchestrator;
pub mod ordering;
pub mod planner;
pub mod time;

pub use gaps::analyze_clip_gaps;
pub use models::{
    ClipGap, ClipInfo, ClipInsertion, ClipMovement, ClipRecord, InsertionPlan, MagnetPlan,
    TrackType,
};
pub use ordering::sort_clips_by_time;
pub use planner::{create_insertion_plan, create_magnet_plan, RandomSource, RngSource};
pub use time::{TimeCode, TICKS_PER_SECOND};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
