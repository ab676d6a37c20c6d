//! Core types for monitor and display-mode queries

use std::fmt;

/// An exact rational number, used for refresh rates.
///
/// Refresh rates are carried as millihertz over 1000 so that fractional
/// rates such as 59.94 Hz survive without lossy rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    /// Numerator
    pub numerator: u32,
    /// Denominator
    pub denominator: u32,
}

impl Rational {
    /// Build a refresh-rate rational from a whole-hertz value as reported
    /// by the host (e.g. 60 becomes 60000/1000).
    ///
    /// Saturates instead of overflowing for host values above u32::MAX/1000;
    /// no real display reports such a rate.
    pub fn from_hertz(hz: u32) -> Self {
        Self {
            numerator: hz.saturating_mul(1000),
            denominator: 1000,
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Desktop-space bounding rectangle of a monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Width in pixels; 0 for a degenerate rect with `right < left`
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left).max(0) as u32
    }

    /// Height in pixels; 0 for a degenerate rect with `bottom < top`
    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top).max(0) as u32
    }
}

/// A display device name: exactly 32 UTF-16 code units, NUL-padded,
/// matching the fixed-size `szDevice` field of the host monitor info.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayName(pub [u16; 32]);

impl DisplayName {
    /// Build a name from a Rust string, truncating to 31 code units so the
    /// terminating NUL always fits.
    pub fn from_str_lossy(name: &str) -> Self {
        let mut buf = [0u16; 32];
        for (dst, src) in buf.iter_mut().zip(name.encode_utf16().take(31)) {
            *dst = src;
        }
        Self(buf)
    }

    /// The wide characters up to the first NUL
    pub fn as_wide(&self) -> &[u16] {
        let len = self.0.iter().position(|&c| c == 0).unwrap_or(self.0.len());
        &self.0[..len]
    }
}

impl Default for DisplayName {
    fn default() -> Self {
        Self([0u16; 32])
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf16_lossy(self.as_wide()))
    }
}

/// Interlaced bit of the host display-flags word (DM_INTERLACED)
pub(crate) const DISPLAY_FLAG_INTERLACED: u32 = 0x2;

/// One display mode supported by a monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WsiMode {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Refresh rate in millihertz over 1000
    pub refresh_rate: Rational,
    /// Bits per pixel
    pub bits_per_pixel: u32,
    /// Whether the mode is interlaced
    pub interlaced: bool,
}

impl WsiMode {
    /// Convert a raw host mode record into a `WsiMode`.
    ///
    /// Width, height and bit depth are copied verbatim; the refresh rate is
    /// widened to an exact millihertz rational; the interlace flag is a
    /// single bit of the host display-flags word.
    pub fn from_host(
        width: u32,
        height: u32,
        frequency_hz: u32,
        bits_per_pixel: u32,
        display_flags: u32,
    ) -> Self {
        Self {
            width,
            height,
            refresh_rate: Rational::from_hertz(frequency_hz),
            bits_per_pixel,
            interlaced: display_flags & DISPLAY_FLAG_INTERLACED != 0,
        }
    }
}

/// Selects which mode index a display-mode retrieval asks the host for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSelector {
    /// A specific numbered mode (0-based, host enumeration order)
    Numbered(u32),
    /// The monitor's currently active mode
    Current,
    /// The mode stored in persistent desktop configuration
    Registry,
}
