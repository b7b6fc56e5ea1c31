//! Time abstraction traits for platform-agnostic timing.
//!
//! The debounce contract is specified in microseconds, so the traits here
//! work at microsecond resolution. Platform clocks that wrap (e.g. a 32-bit
//! hardware counter) must implement [`TimeInstant::duration_since`] so it
//! returns the true elapsed span across a wrap.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    ///
    /// Must be monotonic (modulo counter wrap) and safe to call from
    /// interrupt context.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to microseconds.
    fn as_micros(&self) -> u64;

    /// Creates duration from microseconds.
    fn from_micros(micros: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Wrap-aware: when the underlying counter has wrapped between
    /// `earlier` and `self`, the result is still the elapsed time.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}
