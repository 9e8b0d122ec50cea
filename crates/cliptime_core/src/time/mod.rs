//! Fixed-resolution timeline time.
//!
//! All engine arithmetic happens on integer ticks at the host timeline's
//! internal resolution (`TICKS_PER_SECOND`). Seconds are derived from ticks
//! and are only used for display and estimates.
//!
//! # Example
//!
//! ```
//! use cliptime_core::time::{add_time, create_time_code, subtract_time, TICKS_PER_SECOND};
//!
//! let five = create_time_code(5.0);
//! let three = create_time_code(3.0);
//!
//! assert_eq!(add_time(five, three).ticks(), 8 * TICKS_PER_SECOND);
//! // Subtraction never goes below zero.
//! assert_eq!(subtract_time(three, five).ticks(), 0);
//! ```

mod format;
mod timecode;

pub use format::{format_timecode, TIMECODE_FPS};
pub use timecode::{
    add_time, create_time_code, subtract_time, ticks_to_time_code, TickValue, TimeCode,
    TICKS_PER_SECOND,
};
