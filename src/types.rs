//! Core types shared between the dispatcher and the renderer.

/// Identity of a physical button line.
///
/// The board has exactly two button inputs; an out-of-range channel is
/// unrepresentable by construction rather than checked at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelId {
    /// Button A.
    A,
    /// Button B.
    B,
}

impl ChannelId {
    /// Both channels, in index order.
    pub const ALL: [ChannelId; 2] = [ChannelId::A, ChannelId::B];

    /// Index into per-channel state arrays.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            ChannelId::A => 0,
            ChannelId::B => 1,
        }
    }
}

/// What a debounced press on a channel does to the shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelEffect {
    /// Flip the channel's boolean (status LED on/off).
    ToggleLed,

    /// Advance the shared digit, wrapping 9 -> 0.
    IncrementDigit,

    /// Step the shared digit back, wrapping 0 -> 9.
    DecrementDigit,
}

/// Errors reported by the matrix renderer and shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MatrixError {
    /// Framebuffer index past the last cell.
    PixelOutOfRange {
        /// The rejected index.
        index: usize,
    },

    /// Digit outside the glyph table's 0-9 range.
    InvalidDigit {
        /// The rejected value.
        digit: u8,
    },
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::PixelOutOfRange { index } => {
                write!(f, "pixel index {} out of range (matrix has 25 cells)", index)
            }
            MatrixError::InvalidDigit { digit } => {
                write!(f, "digit {} outside glyph table range 0-9", digit)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}
