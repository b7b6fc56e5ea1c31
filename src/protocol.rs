//! WS2812B wire protocol: word packing and bit timing.
//!
//! These constants are fixed properties of the LEDs being driven, taken
//! from the datasheet; they are not configuration. The shift engine (a PIO
//! state machine on the original board) consumes one 24-bit word per LED
//! and transmits it most-significant-bit first, green byte leading.

use palette::Srgb;

/// High time for a 0 bit, nanoseconds.
pub const T0H_NANOS: u32 = 400;
/// Low time for a 0 bit, nanoseconds.
pub const T0L_NANOS: u32 = 850;
/// High time for a 1 bit, nanoseconds.
pub const T1H_NANOS: u32 = 800;
/// Low time for a 1 bit, nanoseconds.
pub const T1L_NANOS: u32 = 450;
/// Datasheet tolerance on all of the above, nanoseconds.
pub const TIMING_TOLERANCE_NANOS: u32 = 150;
/// Minimum low period separating frames, microseconds.
pub const RESET_MICROS: u32 = 50;
/// Idle period held after pushing a full frame, microseconds.
///
/// Comfortably above [`RESET_MICROS`] so a following frame is always
/// interpreted as a new frame rather than a continuation.
pub const LATCH_HOLD_MICROS: u32 = 300;

/// Bits per LED on the wire.
pub const BITS_PER_LED: usize = 24;

/// Packs a cell color into the 24-bit wire word: green, red, blue.
#[inline]
pub const fn pack_grb(color: Srgb<u8>) -> u32 {
    ((color.green as u32) << 16) | ((color.red as u32) << 8) | (color.blue as u32)
}

/// One timed high/low pulse pair encoding a single bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pulse {
    /// High time in nanoseconds.
    pub high_nanos: u32,
    /// Low time in nanoseconds.
    pub low_nanos: u32,
}

impl Pulse {
    /// The pulse pair encoding a 0 bit.
    pub const ZERO: Pulse = Pulse {
        high_nanos: T0H_NANOS,
        low_nanos: T0L_NANOS,
    };

    /// The pulse pair encoding a 1 bit.
    pub const ONE: Pulse = Pulse {
        high_nanos: T1H_NANOS,
        low_nanos: T1L_NANOS,
    };
}

/// Expands a packed word into its 24 wire pulses, MSB first.
///
/// Bit-banged [`WordSink`](crate::matrix::WordSink) implementations can
/// drive a GPIO from this directly; tests use it to assert the wire
/// contract without hardware.
pub fn pulses(word: u32) -> impl Iterator<Item = Pulse> {
    (0..BITS_PER_LED).map(move |i| {
        if word & (1 << (BITS_PER_LED - 1 - i)) != 0 {
            Pulse::ONE
        } else {
            Pulse::ZERO
        }
    })
}
