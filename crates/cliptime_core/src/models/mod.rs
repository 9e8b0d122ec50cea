//! Data models for the clip time engine.
//!
//! - Enums for track kinds and insertion semantics
//! - Clip records (host-supplied) and validated `ClipInfo`
//! - Derived results: gaps, insertion plans, magnet plans

mod clip;
mod enums;
mod plans;

pub use clip::{
    validate_clip_records, ClipInfo, ClipRecord, ClipValidationError, InvalidRecord, TimeRecord,
};
pub use enums::{InsertionType, TrackType};
pub use plans::{ClipGap, ClipInsertion, ClipMovement, InsertionPlan, MagnetPlan};
