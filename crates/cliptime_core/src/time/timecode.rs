//! Tick-based `TimeCode` and its arithmetic.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use super::format::format_timecode;

/// Ticks per second of the host timeline.
///
/// 254,016,000,000 is divisible by every common frame and sample rate, so
/// converted positions land exactly on the host's own grid.
pub const TICKS_PER_SECOND: i64 = 254_016_000_000;

/// A timeline position or duration.
///
/// `ticks` is authoritative; `seconds` is derived from it on construction.
/// Equality, ordering and hashing only look at ticks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "TimeCodeRepr", into = "TimeCodeRepr")]
pub struct TimeCode {
    ticks: i64,
    seconds: f64,
}

impl TimeCode {
    /// Zero ticks.
    pub const ZERO: TimeCode = TimeCode {
        ticks: 0,
        seconds: 0.0,
    };

    /// Raw tick count.
    pub fn ticks(&self) -> i64 {
        self.ticks
    }

    /// Position in seconds (derived, may not round-trip exactly).
    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Whether this is exactly zero ticks.
    pub fn is_zero(&self) -> bool {
        self.ticks == 0
    }

    /// `HH:MM:SS:FF` rendering at 30 fps.
    pub fn formatted(&self) -> String {
        format_timecode(self.seconds)
    }
}

/// Convert seconds to a `TimeCode`, flooring to whole ticks.
pub fn create_time_code(seconds: f64) -> TimeCode {
    let ticks = (seconds * TICKS_PER_SECOND as f64).floor() as i64;
    ticks_to_time_code(ticks)
}

/// Wrap a raw tick count.
pub fn ticks_to_time_code(ticks: i64) -> TimeCode {
    TimeCode {
        ticks,
        seconds: ticks as f64 / TICKS_PER_SECOND as f64,
    }
}

/// `a + b` in ticks.
pub fn add_time(a: TimeCode, b: TimeCode) -> TimeCode {
    ticks_to_time_code(a.ticks.saturating_add(b.ticks))
}

/// `a - b` in ticks, clamped at zero when `b > a`.
///
/// The result carries no sign. Compare ticks beforehand if ordering matters.
pub fn subtract_time(a: TimeCode, b: TimeCode) -> TimeCode {
    if b.ticks > a.ticks {
        return TimeCode::ZERO;
    }
    ticks_to_time_code(a.ticks.saturating_sub(b.ticks))
}

impl Default for TimeCode {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for TimeCode {
    fn eq(&self, other: &Self) -> bool {
        self.ticks == other.ticks
    }
}

impl Eq for TimeCode {}

impl PartialOrd for TimeCode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeCode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ticks.cmp(&other.ticks)
    }
}

impl Hash for TimeCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ticks.hash(state);
    }
}

impl Add for TimeCode {
    type Output = TimeCode;

    fn add(self, rhs: TimeCode) -> TimeCode {
        add_time(self, rhs)
    }
}

impl Sub for TimeCode {
    type Output = TimeCode;

    /// Clamping subtraction, see [`subtract_time`].
    fn sub(self, rhs: TimeCode) -> TimeCode {
        subtract_time(self, rhs)
    }
}

impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

/// Tick count as the host sends it: a decimal string or a plain integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TickValue {
    Int(i64),
    Text(String),
}

impl TickValue {
    /// Parse into ticks. Returns the offending text on failure.
    pub fn parse(&self) -> Result<i64, String> {
        match self {
            TickValue::Int(t) => Ok(*t),
            TickValue::Text(s) => s.trim().parse::<i64>().map_err(|_| s.clone()),
        }
    }
}

/// Wire form: ticks as a string so hosts with double-precision numbers keep
/// every digit. Seconds are informational and ignored when reading.
#[derive(Serialize, Deserialize)]
struct TimeCodeRepr {
    ticks: TickValue,
    #[serde(default)]
    seconds: f64,
}

impl From<TimeCode> for TimeCodeRepr {
    fn from(tc: TimeCode) -> Self {
        Self {
            ticks: TickValue::Text(tc.ticks.to_string()),
            seconds: tc.seconds,
        }
    }
}

impl TryFrom<TimeCodeRepr> for TimeCode {
    type Error = String;

    fn try_from(repr: TimeCodeRepr) -> Result<Self, Self::Error> {
        repr.ticks
            .parse()
            .map(ticks_to_time_code)
            .map_err(|bad| format!("invalid tick count: {bad:?}"))
    }
}
