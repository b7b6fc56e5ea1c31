//! Shared state block bridging interrupt and main-loop contexts.
//!
//! [`SharedControls`] is the single point of contact between the
//! [`InputDispatcher`](crate::dispatcher::InputDispatcher) (interrupt
//! context) and the polling [`Coordinator`](crate::coordinator::Coordinator)
//! (main-loop context). Every field is one atomically-read-or-written unit,
//! so the reader always observes either the pre- or post-update value of a
//! field, never a torn one. On single-core targets without native
//! read-modify-write instructions, `portable-atomic` falls back to a
//! critical section for the RMW operations used here.

use crate::types::{ChannelId, MatrixError};
use portable_atomic::{AtomicBool, AtomicU8, Ordering};

/// Highest value the shared digit can hold.
pub const DIGIT_MAX: u8 = 9;

/// Per-channel toggles, the shared digit, and pending-event flags.
///
/// `const fn new()` so a `SharedControls` can live in a `static` shared
/// between the interrupt handler and the main loop.
pub struct SharedControls {
    toggles: [AtomicBool; 2],
    digit: AtomicU8,
    pending: [AtomicBool; 2],
}

impl SharedControls {
    /// Creates the zeroed state block: toggles off, digit 0, nothing pending.
    pub const fn new() -> Self {
        Self {
            toggles: [AtomicBool::new(false), AtomicBool::new(false)],
            digit: AtomicU8::new(0),
            pending: [AtomicBool::new(false), AtomicBool::new(false)],
        }
    }

    /// Flips the channel's toggle and returns the new value.
    pub fn toggle(&self, channel: ChannelId) -> bool {
        !self.toggles[channel.index()].fetch_xor(true, Ordering::Relaxed)
    }

    /// Current value of the channel's toggle.
    pub fn is_on(&self, channel: ChannelId) -> bool {
        self.toggles[channel.index()].load(Ordering::Relaxed)
    }

    /// Advances the digit, wrapping 9 -> 0. Returns the new value.
    pub fn increment_digit(&self) -> u8 {
        self.step_digit(|d| if d >= DIGIT_MAX { 0 } else { d + 1 })
    }

    /// Steps the digit back, wrapping 0 -> 9. Returns the new value.
    pub fn decrement_digit(&self) -> u8 {
        self.step_digit(|d| if d == 0 { DIGIT_MAX } else { d - 1 })
    }

    fn step_digit(&self, next: impl Fn(u8) -> u8) -> u8 {
        match self
            .digit
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |d| Some(next(d)))
        {
            Ok(previous) => next(previous),
            // Unreachable: the closure never returns None.
            Err(current) => current,
        }
    }

    /// Current digit value, always in 0-9.
    pub fn digit(&self) -> u8 {
        self.digit.load(Ordering::Relaxed)
    }

    /// Sets the digit directly (serial input path).
    ///
    /// # Errors
    /// Returns [`MatrixError::InvalidDigit`] for values above 9.
    pub fn set_digit(&self, digit: u8) -> Result<(), MatrixError> {
        if digit > DIGIT_MAX {
            return Err(MatrixError::InvalidDigit { digit });
        }
        self.digit.store(digit, Ordering::Relaxed);
        Ok(())
    }

    /// Marks the channel as having produced a debounced event.
    pub fn mark_pending(&self, channel: ChannelId) {
        self.pending[channel.index()].store(true, Ordering::Relaxed);
    }

    /// Reads and clears the channel's pending flag in one atomic step.
    ///
    /// Returns true when an event was waiting. The clear is atomic with the
    /// read, so an interrupt firing between poll cycles is never lost.
    pub fn take_pending(&self, channel: ChannelId) -> bool {
        self.pending[channel.index()].swap(false, Ordering::Relaxed)
    }
}

impl Default for SharedControls {
    fn default() -> Self {
        Self::new()
    }
}
