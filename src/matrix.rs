//! LED matrix renderer with interrupt-safe frame transmission.
//!
//! Provides [`MatrixRenderer`], which owns the pixel framebuffer and
//! flushes it to the addressable-LED hardware, and the [`WordSink`] trait
//! for abstracting the shift/timing engine that puts bits on the wire.

use crate::COLOR_WHITE;
use crate::framebuffer::{Framebuffer, map_index};
use crate::glyphs;
use crate::protocol::{self, LATCH_HOLD_MICROS};
use crate::types::MatrixError;
use embedded_hal::delay::DelayNs;
use palette::Srgb;

/// Trait for abstracting the addressable-LED shift engine.
///
/// Implement this for your hardware (a PIO state machine FIFO, an SPI
/// peripheral abused at 800 kHz, or a bit-banged GPIO driven from
/// [`protocol::pulses`]). The renderer hands over one packed GRB word per
/// LED, in framebuffer order; the implementation transmits its 24 bits
/// MSB first with the datasheet pulse timing. Handle any hardware errors
/// internally - this method cannot fail.
pub trait WordSink {
    /// Queues one packed GRB word for transmission.
    ///
    /// May block for the per-word transmission time, never longer. Called
    /// with interrupts masked, so it must not allocate, log, or wait on
    /// anything other than the wire itself.
    fn push_word(&mut self, word: u32);
}

/// Owns the 5x5 framebuffer and transmits it to the LED hardware.
///
/// The framebuffer is exclusively owned: other components request changes
/// through the renderer's operations and never touch cells directly. There
/// is no double buffering; [`write`](Self::write) always transmits the
/// framebuffer's content at call time.
///
/// # Type Parameters
/// * `S` - Shift engine implementation
/// * `D` - Delay provider for the protocol latch gap
pub struct MatrixRenderer<S: WordSink, D: DelayNs> {
    frame: Framebuffer,
    sink: S,
    delay: D,
}

impl<S: WordSink, D: DelayNs> MatrixRenderer<S, D> {
    /// Creates a renderer with a dark framebuffer.
    ///
    /// Nothing is transmitted until the first [`write`](Self::write).
    pub fn new(sink: S, delay: D) -> Self {
        Self {
            frame: Framebuffer::new(),
            sink,
            delay,
        }
    }

    /// Writes one framebuffer cell.
    ///
    /// # Errors
    /// Returns [`MatrixError::PixelOutOfRange`] for `index >= 25`.
    pub fn set_pixel(&mut self, index: usize, r: u8, g: u8, b: u8) -> Result<(), MatrixError> {
        self.frame.set_pixel(index, r, g, b)
    }

    /// Writes one framebuffer cell, silently ignoring out-of-range indices.
    pub fn set_pixel_lossy(&mut self, index: usize, r: u8, g: u8, b: u8) {
        self.frame.set_pixel_lossy(index, r, g, b);
    }

    /// Sets every framebuffer cell to dark.
    pub fn clear(&mut self) {
        self.frame.clear();
    }

    /// Reads one framebuffer cell, `None` when out of range.
    pub fn pixel(&self, index: usize) -> Option<Srgb<u8>> {
        self.frame.pixel(index)
    }

    /// Renders a digit glyph full-white and transmits the frame.
    ///
    /// Clears the framebuffer, lights every cell the glyph marks, then
    /// flushes.
    ///
    /// # Errors
    /// Returns [`MatrixError::InvalidDigit`] for `digit > 9`; the
    /// framebuffer is untouched in that case.
    pub fn display_digit(&mut self, digit: u8) -> Result<(), MatrixError> {
        if digit > 9 {
            return Err(MatrixError::InvalidDigit { digit });
        }

        self.frame.clear();
        for row in 0..5 {
            for col in 0..5 {
                if glyphs::is_lit(digit, row, col) {
                    self.frame.set_pixel_lossy(
                        map_index(row, col),
                        COLOR_WHITE.red,
                        COLOR_WHITE.green,
                        COLOR_WHITE.blue,
                    );
                }
            }
        }
        self.write();
        Ok(())
    }

    /// Transmits the full framebuffer to the hardware.
    ///
    /// All 25 words are pushed inside a single critical section: the
    /// protocol is self-clocked with no mid-frame resync, so an interrupt
    /// between words would corrupt the shift register and light arbitrary
    /// LEDs with wrong colors. The scoped guard restores interrupts on
    /// every exit path. The latch gap is held *after* the critical section
    /// ends; it needs physical time, not interrupt suppression, and keeping
    /// the masked region to the word-push span bounds interrupt latency for
    /// the rest of the system.
    pub fn write(&mut self) {
        let frame = &self.frame;
        let sink = &mut self.sink;
        critical_section::with(|_| {
            for cell in frame.iter() {
                sink.push_word(protocol::pack_grb(*cell));
            }
        });
        // Bounded busy delay: a minimum physical idle period, never a
        // suspending wait.
        self.delay.delay_us(LATCH_HOLD_MICROS);
    }
}
