//! Debounced button input dispatcher.
//!
//! Provides [`InputDispatcher`], which turns raw falling-edge interrupts on
//! the two button lines into debounced logical events and publishes their
//! effects into [`SharedControls`]. The dispatcher is built once at setup,
//! holding only the references it needs, and is then owned by the interrupt
//! handler; nothing here blocks, allocates, or takes more than O(1) time.

use crate::state::SharedControls;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{ChannelEffect, ChannelId};

/// Default debounce window in microseconds (200 ms).
///
/// A single tunable: deployments with stiffer buttons have run it as low as
/// 50 ms, but 200 ms is the shipping default.
pub const DEFAULT_DEBOUNCE_MICROS: u64 = 200_000;

/// Per-channel debounce bookkeeping.
///
/// `last_accepted` starts as `None` so the very first edge on a channel is
/// always accepted; afterwards it records the timestamp of the last edge
/// that passed the window check.
struct ChannelState<I> {
    last_accepted: Option<I>,
    effect: ChannelEffect,
}

/// Converts raw edge interrupts into debounced events.
///
/// One dispatcher serves both button channels. Each accepted edge applies
/// the channel's configured [`ChannelEffect`] to the shared state block and
/// raises the channel's pending flag for the coordinator's next poll.
///
/// # Type Parameters
/// * `'a` - Lifetime of the shared state and time source references
/// * `I` - Time instant type
/// * `T` - Time source implementation type
pub struct InputDispatcher<'a, I: TimeInstant, T: TimeSource<I>> {
    controls: &'a SharedControls,
    time_source: &'a T,
    window: I::Duration,
    channels: [ChannelState<I>; 2],
}

impl<'a, I: TimeInstant, T: TimeSource<I>> InputDispatcher<'a, I, T> {
    /// Creates a dispatcher with the default 200 ms debounce window.
    ///
    /// `effects` gives the action for channel A and channel B in that order.
    pub fn new(
        controls: &'a SharedControls,
        time_source: &'a T,
        effects: [ChannelEffect; 2],
    ) -> Self {
        Self::with_debounce_window(
            controls,
            time_source,
            effects,
            <I::Duration as TimeDuration>::from_micros(DEFAULT_DEBOUNCE_MICROS),
        )
    }

    /// Creates a dispatcher with an explicit debounce window.
    pub fn with_debounce_window(
        controls: &'a SharedControls,
        time_source: &'a T,
        effects: [ChannelEffect; 2],
        window: I::Duration,
    ) -> Self {
        Self {
            controls,
            time_source,
            window,
            channels: [
                ChannelState {
                    last_accepted: None,
                    effect: effects[0],
                },
                ChannelState {
                    last_accepted: None,
                    effect: effects[1],
                },
            ],
        }
    }

    /// The configured debounce window.
    pub fn debounce_window(&self) -> I::Duration {
        self.window
    }

    /// The effect configured for a channel.
    pub fn effect(&self, channel: ChannelId) -> ChannelEffect {
        self.channels[channel.index()].effect
    }

    /// Handles a falling edge on `channel`, sampling the time source.
    ///
    /// Call this from the GPIO interrupt handler. Returns true when the
    /// edge was accepted and its effect applied.
    pub fn on_edge(&mut self, channel: ChannelId) -> bool {
        self.on_edge_at(channel, self.time_source.now())
    }

    /// Handles a falling edge on `channel` at an explicit timestamp.
    ///
    /// Edges closer than the debounce window to the last accepted edge are
    /// discarded with no state mutation at all. For an accepted edge the
    /// timestamp is recorded *before* the effect is applied, so a re-entrant
    /// trigger inside the window is a provable no-op.
    pub fn on_edge_at(&mut self, channel: ChannelId, now: I) -> bool {
        let state = &mut self.channels[channel.index()];

        if let Some(last) = state.last_accepted {
            if now.duration_since(last).as_micros() <= self.window.as_micros() {
                return false;
            }
        }

        let effect = state.effect;
        state.last_accepted = Some(now);

        match effect {
            ChannelEffect::ToggleLed => {
                self.controls.toggle(channel);
            }
            ChannelEffect::IncrementDigit => {
                self.controls.increment_digit();
            }
            ChannelEffect::DecrementDigit => {
                self.controls.decrement_digit();
            }
        }

        self.controls.mark_pending(channel);
        true
    }
}
