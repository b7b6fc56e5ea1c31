#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`InputDispatcher`**: Turns raw button edge interrupts into debounced logical events
//! - **`SharedControls`**: Atomic state block bridging interrupt and main-loop contexts
//! - **`MatrixRenderer`**: Owns the 5x5 framebuffer and flushes it over the WS2812B protocol
//! - **`Coordinator`**: Polls shared state and maps events to renderer and display calls
//! - **`WordSink`**: Trait to implement for your LED shift engine (PIO, SPI, bit-bang)
//! - **`TextDisplay`**: Trait to implement for your two-line text display
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! The dispatcher runs entirely in interrupt context and only flips atomic
//! state; rendering happens in the main loop, where `MatrixRenderer::write`
//! masks interrupts just long enough to push one uninterruptible frame.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod coordinator;
pub mod dispatcher;
pub mod framebuffer;
pub mod glyphs;
pub mod matrix;
pub mod protocol;
pub mod state;
pub mod time;
pub mod types;

pub use coordinator::{Coordinator, DisplayMessage, POLL_INTERVAL_MILLIS, TextDisplay};
pub use dispatcher::{DEFAULT_DEBOUNCE_MICROS, InputDispatcher};
pub use framebuffer::{COLS, Framebuffer, LED_COUNT, ROWS, map_index};
pub use matrix::{MatrixRenderer, WordSink};
pub use protocol::{LATCH_HOLD_MICROS, Pulse, pack_grb, pulses};
pub use state::{DIGIT_MAX, SharedControls};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{ChannelEffect, ChannelId, MatrixError};

/// Full white, the color digit glyphs are rendered in.
pub const COLOR_WHITE: Srgb<u8> = Srgb::new(255, 255, 255);

/// All channels dark.
pub const COLOR_OFF: Srgb<u8> = Srgb::new(0, 0, 0);
