//! Plan orchestration.
//!
//! The only caller of the planners. It validates host clip records, applies
//! the configured clip filters, runs a planner and wraps the result in a
//! [`HostCommand`] for the host to execute. Nothing here talks to the host;
//! transport, timeouts and retries belong to the caller.
//!
//! # Example
//!
//! ```
//! use cliptime_core::orchestrator::{prepare_magnet, EngineContext, PlanOutcome};
//! use cliptime_core::models::{ClipRecord, TimeRecord};
//!
//! let record = |id: &str, start: f64, end: f64| ClipRecord {
//!     id: Some(id.to_string()),
//!     start: Some(TimeRecord::from_seconds(start)),
//!     end: Some(TimeRecord::from_seconds(end)),
//!     track_index: Some(0),
//!     track_type: Some("video".to_string()),
//!     ..Default::default()
//! };
//!
//! let ctx = EngineContext::default();
//! let outcome = prepare_magnet(&ctx, &[record("a", 0.0, 5.0), record("b", 8.0, 10.0)]).unwrap();
//! match outcome {
//!     PlanOutcome::Ready(prepared) => assert_eq!(prepared.plan.total_moved, 1),
//!     PlanOutcome::Nothing(reason) => panic!("unexpected: {reason}"),
//! }
//! ```

mod command;
mod context;
mod errors;
mod prepare;

pub use command::{HostAction, HostCommand};
pub use context::EngineContext;
pub use errors::{OrchestrationError, OrchestrationResult};
pub use prepare::{prepare_magnet, prepare_sound_insertion, PlanOutcome, PreparedPlan, SkipReason};
