//! Main-loop coordinator bridging shared state, renderer, and display.
//!
//! The coordinator runs in the cooperative main-loop context: it polls the
//! shared state block at a fixed cadence, maps debounced button events and
//! received serial characters to renderer and display calls, and owns the
//! board's two discrete status LEDs. It never touches framebuffer cells or
//! dispatcher bookkeeping directly.

use core::fmt::Write;

use crate::matrix::{MatrixRenderer, WordSink};
use crate::state::SharedControls;
use crate::types::{ChannelEffect, ChannelId, MatrixError};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// Poll cadence the coordinator is designed for, milliseconds.
///
/// The main loop should call [`Coordinator::poll`] roughly this often and
/// may simply sleep for this duration in between. Pending flags latch, so a
/// slower cadence loses no events, only responsiveness.
pub const POLL_INTERVAL_MILLIS: u32 = 50;

/// A short line of display text, bounded for the two-line collaborator.
pub type DisplayMessage = heapless::String<32>;

/// Trait for abstracting the two-line text display collaborator.
///
/// Implement this for your display (an I2C OLED on the original board).
/// Assumed synchronous and serialized over its own transport; handle any
/// hardware errors internally - this method cannot fail.
pub trait TextDisplay {
    /// Replaces the display content with two lines of ASCII text.
    fn render_lines(&mut self, line1: &str, line2: &str);
}

/// Polls shared state and maps events to renderer and display calls.
///
/// # Type Parameters
/// * `'a` - Lifetime of the shared state reference
/// * `S` - Shift engine implementation
/// * `D` - Delay provider for the renderer's latch gap
/// * `T` - Text display implementation
/// * `LA`, `LB` - Status LED pins for channel A and B toggles
pub struct Coordinator<'a, S, D, T, LA, LB>
where
    S: WordSink,
    D: DelayNs,
    T: TextDisplay,
    LA: OutputPin,
    LB: OutputPin,
{
    controls: &'a SharedControls,
    renderer: MatrixRenderer<S, D>,
    display: T,
    led_a: LA,
    led_b: LB,
    effects: [ChannelEffect; 2],
}

impl<'a, S, D, T, LA, LB> Coordinator<'a, S, D, T, LA, LB>
where
    S: WordSink,
    D: DelayNs,
    T: TextDisplay,
    LA: OutputPin,
    LB: OutputPin,
{
    /// Creates a coordinator.
    ///
    /// `effects` must match the dispatcher's channel configuration so that
    /// a pending flag is interpreted the same way it was produced.
    pub fn new(
        controls: &'a SharedControls,
        renderer: MatrixRenderer<S, D>,
        display: T,
        led_a: LA,
        led_b: LB,
        effects: [ChannelEffect; 2],
    ) -> Self {
        Self {
            controls,
            renderer,
            display,
            led_a,
            led_b,
            effects,
        }
    }

    /// Runs one poll cycle over both channels.
    ///
    /// Reads and clears each pending flag; a set flag is handled with the
    /// state snapshot taken during this cycle. Toggle channels drive their
    /// status LED and report on the display, digit channels render the
    /// current digit on the matrix.
    pub fn poll(&mut self) -> Result<(), MatrixError> {
        for channel in ChannelId::ALL {
            if !self.controls.take_pending(channel) {
                continue;
            }
            match self.effects[channel.index()] {
                ChannelEffect::ToggleLed => {
                    let on = self.controls.is_on(channel);
                    self.drive_status_led(channel, on);
                    self.show_toggle(channel, on);
                }
                ChannelEffect::IncrementDigit | ChannelEffect::DecrementDigit => {
                    let digit = self.controls.digit();
                    self.renderer.display_digit(digit)?;
                    self.show_digit(channel, digit);
                }
            }
        }
        Ok(())
    }

    /// Handles one character received from the serial collaborator.
    ///
    /// Digits are stored in shared state and rendered on the matrix,
    /// letters are echoed to the display, everything else is ignored.
    pub fn on_serial_char(&mut self, ch: char) -> Result<(), MatrixError> {
        if let Some(digit) = ch.to_digit(10) {
            let digit = digit as u8;
            self.controls.set_digit(digit)?;
            self.renderer.display_digit(digit)?;

            let mut line2 = DisplayMessage::new();
            let _ = write!(line2, "Digit: {}", digit);
            self.display.render_lines("Serial input", &line2);
        } else if ch.is_ascii_alphabetic() {
            let mut line2 = DisplayMessage::new();
            let _ = write!(line2, "Letter: {}", ch);
            self.display.render_lines("Serial input", &line2);
        }
        Ok(())
    }

    /// Access to the renderer for direct frame operations.
    pub fn renderer(&mut self) -> &mut MatrixRenderer<S, D> {
        &mut self.renderer
    }

    fn drive_status_led(&mut self, channel: ChannelId, on: bool) {
        // Pin errors are the platform's to handle; mirrors the display
        // collaborators, which cannot fail either.
        match (channel, on) {
            (ChannelId::A, true) => {
                let _ = self.led_a.set_high();
            }
            (ChannelId::A, false) => {
                let _ = self.led_a.set_low();
            }
            (ChannelId::B, true) => {
                let _ = self.led_b.set_high();
            }
            (ChannelId::B, false) => {
                let _ = self.led_b.set_low();
            }
        }
    }

    fn show_toggle(&mut self, channel: ChannelId, on: bool) {
        let line1 = match channel {
            ChannelId::A => "Button A",
            ChannelId::B => "Button B",
        };
        let line2 = if on { "LED on" } else { "LED off" };
        self.display.render_lines(line1, line2);
    }

    fn show_digit(&mut self, channel: ChannelId, digit: u8) {
        let line1 = match channel {
            ChannelId::A => "Button A",
            ChannelId::B => "Button B",
        };
        let mut line2 = DisplayMessage::new();
        let _ = write!(line2, "Digit: {}", digit);
        self.display.render_lines(line1, &line2);
    }
}
