//! Bounded interval settings.
//!
//! Interval knobs read from configuration are clamped into a closed range
//! rather than rejected, so an out-of-range value still yields a working
//! folder.

/// Longest permitted rescan interval: one year, in seconds.
pub const MAX_RESCAN_INTERVAL_S: i32 = 365 * 24 * 60 * 60;

/// Clamps an interval into `[0, max_seconds]`.
///
/// # Examples
///
/// ```
/// use stfolder::{IntervalPolicy, MAX_RESCAN_INTERVAL_S};
///
/// let policy = IntervalPolicy::RESCAN;
/// assert_eq!(policy.clamp(-5), 0);
/// assert_eq!(policy.clamp(60), 60);
/// assert_eq!(policy.clamp(i32::MAX), MAX_RESCAN_INTERVAL_S);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalPolicy {
    max_seconds: i32,
}

impl IntervalPolicy {
    /// The policy applied to `rescan_interval_s`.
    pub const RESCAN: Self = Self {
        max_seconds: MAX_RESCAN_INTERVAL_S,
    };

    /// Create a policy with the given upper bound.
    ///
    /// A negative bound is treated as zero.
    #[must_use]
    pub const fn new(max_seconds: i32) -> Self {
        Self {
            max_seconds: if max_seconds < 0 { 0 } else { max_seconds },
        }
    }

    /// The inclusive upper bound.
    #[must_use]
    pub const fn max_seconds(self) -> i32 {
        self.max_seconds
    }

    /// Clamp `seconds` into `[0, max_seconds]`.
    #[must_use]
    pub const fn clamp(self, seconds: i32) -> i32 {
        if seconds < 0 {
            0
        } else if seconds > self.max_seconds {
            self.max_seconds
        } else {
            seconds
        }
    }
}

impl Default for IntervalPolicy {
    fn default() -> Self {
        Self::RESCAN
    }
}
