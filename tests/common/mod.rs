//! Shared test infrastructure for neogrid integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use neogrid::{TextDisplay, TimeDuration, TimeInstant, TimeSource, WordSink};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps microseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_micros(&self) -> u64 {
        self.0
    }

    fn from_micros(micros: u64) -> Self {
        TestDuration(micros)
    }
}

/// Mock instant type for testing (microseconds since boot)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.wrapping_sub(earlier.0))
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of microseconds
    pub fn advance_micros(&self, micros: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + micros));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Word Sink
// ============================================================================

/// Mock shift engine that records every transmitted word.
///
/// Holds a shared handle to the word log so tests can keep reading it after
/// the renderer has taken ownership of the sink.
#[derive(Clone)]
pub struct MockWordSink {
    words: Rc<RefCell<Vec<u32>>>,
}

impl MockWordSink {
    pub fn new() -> Self {
        Self {
            words: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// All words pushed so far, in transmission order
    pub fn words(&self) -> Vec<u32> {
        self.words.borrow().clone()
    }

    /// The most recently transmitted 25-word frame
    pub fn last_frame(&self) -> Vec<u32> {
        let words = self.words.borrow();
        assert!(
            words.len() >= neogrid::LED_COUNT,
            "no complete frame transmitted yet"
        );
        words[words.len() - neogrid::LED_COUNT..].to_vec()
    }

    pub fn clear_log(&self) {
        self.words.borrow_mut().clear();
    }
}

impl WordSink for MockWordSink {
    fn push_word(&mut self, word: u32) {
        self.words.borrow_mut().push(word);
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Mock delay provider that records every requested pause in nanoseconds
#[derive(Clone)]
pub struct MockDelay {
    pauses_nanos: Rc<RefCell<Vec<u64>>>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self {
            pauses_nanos: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn pauses_nanos(&self) -> Vec<u64> {
        self.pauses_nanos.borrow().clone()
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.pauses_nanos.borrow_mut().push(ns as u64);
    }
}

// ============================================================================
// Mock Text Display
// ============================================================================

/// Mock two-line display that records every rendered line pair
#[derive(Clone)]
pub struct MockTextDisplay {
    lines: Rc<RefCell<Vec<(String, String)>>>,
}

impl MockTextDisplay {
    pub fn new() -> Self {
        Self {
            lines: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn rendered(&self) -> Vec<(String, String)> {
        self.lines.borrow().clone()
    }

    pub fn last_lines(&self) -> Option<(String, String)> {
        self.lines.borrow().last().cloned()
    }
}

impl TextDisplay for MockTextDisplay {
    fn render_lines(&mut self, line1: &str, line2: &str) {
        self.lines
            .borrow_mut()
            .push((line1.to_string(), line2.to_string()));
    }
}

// ============================================================================
// Mock Status LED Pin
// ============================================================================

/// Mock output pin that records its current level
#[derive(Clone)]
pub struct MockPin {
    high: Rc<core::cell::Cell<bool>>,
}

impl MockPin {
    pub fn new() -> Self {
        Self {
            high: Rc::new(core::cell::Cell::new(false)),
        }
    }

    pub fn is_high(&self) -> bool {
        self.high.get()
    }
}

impl ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high.set(true);
        Ok(())
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// GRB wire word for an (r, g, b) triple
pub fn grb(r: u8, g: u8, b: u8) -> u32 {
    ((g as u32) << 16) | ((r as u32) << 8) | (b as u32)
}

/// Framebuffer indices a frame lights (any non-zero word)
pub fn lit_indices(frame: &[u32]) -> Vec<usize> {
    frame
        .iter()
        .enumerate()
        .filter(|(_, w)| **w != 0)
        .map(|(i, _)| i)
        .collect()
}
