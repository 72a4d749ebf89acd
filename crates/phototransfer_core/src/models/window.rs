//! Recency window newtype.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Number of days a file may be old and still show up in the source list.
///
/// Unsigned, so a constructed window is never negative. User text goes
/// through [`FromStr`], which rejects negative and non-numeric input.
///
/// ```
/// use phototransfer_core::models::RecencyWindow;
///
/// let window: RecencyWindow = " 3 ".parse().unwrap();
/// assert_eq!(window.days(), 3);
/// assert!("-1".parse::<RecencyWindow>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecencyWindow(u32);

impl RecencyWindow {
    pub const fn new(days: u32) -> Self {
        Self(days)
    }

    pub fn days(&self) -> u32 {
        self.0
    }

    /// Instant before which entries fall out of the window.
    ///
    /// Saturates at the epoch instead of underflowing.
    pub fn cutoff(&self, now: SystemTime) -> SystemTime {
        let span = Duration::from_secs(u64::from(self.0) * SECONDS_PER_DAY);
        now.checked_sub(span)
            .map_or(SystemTime::UNIX_EPOCH, |cutoff| cutoff.max(SystemTime::UNIX_EPOCH))
    }
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for RecencyWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rejected recency window input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowParseError {
    #[error("Recency window is empty")]
    Empty,

    #[error("Recency window cannot be negative: {0}")]
    Negative(String),

    #[error("Recency window must be a whole number of days: {0}")]
    NotANumber(String),
}

impl FromStr for RecencyWindow {
    type Err = WindowParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(WindowParseError::Empty);
        }
        if trimmed.starts_with('-') {
            return match trimmed[1..].parse::<u64>() {
                Ok(0) => Ok(Self(0)),
                Ok(_) => Err(WindowParseError::Negative(trimmed.to_string())),
                Err(_) => Err(WindowParseError::NotANumber(trimmed.to_string())),
            };
        }
        trimmed
            .parse::<u32>()
            .map(Self)
            .map_err(|_| WindowParseError::NotANumber(trimmed.to_string()))
    }
}

/// Keep only the characters a day-count field accepts.
///
/// Used by the window input so the user can never type a sign or letters.
pub fn sanitize_window_input(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).take(6).collect()
}
