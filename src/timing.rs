//! Protocol timings and their conversion to ticks

use crate::error::Error;
use crate::symbol::{Level, MAX_DURATION, PulseSymbol};

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Pulse widths of a WS2812-class protocol, in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseTiming {
    /// High time of a 0 bit
    pub t0h_ns: u32,
    /// Low time of a 0 bit
    pub t0l_ns: u32,
    /// High time of a 1 bit
    pub t1h_ns: u32,
    /// Low time of a 1 bit
    pub t1l_ns: u32,
    /// Low time closing a frame
    pub reset_ns: u32,
}

impl PulseTiming {
    /// WS2812 timings used by the QuinLED boards.
    ///
    /// The 280 ns latch is far below the 50 us the datasheet asks for. It
    /// works on the boards it was tuned for; confirm against the target strip
    /// or use [`PulseTiming::WS2812_STRICT_LATCH`].
    pub const WS2812: Self = Self {
        t0h_ns: 350,
        t0l_ns: 1000,
        t1h_ns: 1000,
        t1l_ns: 350,
        reset_ns: 280,
    };

    /// [`PulseTiming::WS2812`] with the datasheet 50 us latch
    pub const WS2812_STRICT_LATCH: Self = Self {
        reset_ns: 50_000,
        ..Self::WS2812
    };
}

impl Default for PulseTiming {
    fn default() -> Self {
        Self::WS2812
    }
}

/// Convert nanoseconds to ticks, truncating.
///
/// Fails when the result does not fit a symbol half.
#[allow(clippy::cast_possible_truncation)]
pub fn ticks_from_nanos(resolution_hz: u32, nanos: u32) -> Result<u16, Error> {
    if resolution_hz == 0 {
        return Err(Error::InvalidResolution);
    }
    let ticks = u64::from(resolution_hz) * u64::from(nanos) / NANOS_PER_SECOND;
    if ticks > u64::from(MAX_DURATION) {
        return Err(Error::DurationOverflow { nanos });
    }
    Ok(ticks as u16)
}

/// The two bit templates of a pulse-width coded protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitShapes {
    pub bit0: PulseSymbol,
    pub bit1: PulseSymbol,
}

impl BitShapes {
    /// Compute both bit templates at the given resolution
    pub fn new(resolution_hz: u32, timing: &PulseTiming) -> Result<Self, Error> {
        Ok(Self {
            bit0: PulseSymbol::high_low(
                ticks_from_nanos(resolution_hz, timing.t0h_ns)?,
                ticks_from_nanos(resolution_hz, timing.t0l_ns)?,
            ),
            bit1: PulseSymbol::high_low(
                ticks_from_nanos(resolution_hz, timing.t1h_ns)?,
                ticks_from_nanos(resolution_hz, timing.t1l_ns)?,
            ),
        })
    }

    /// Template for a bit value
    pub const fn symbol(&self, bit: bool) -> PulseSymbol {
        if bit { self.bit1 } else { self.bit0 }
    }

    /// Read a symbol back as a bit.
    ///
    /// Exact template matches win; otherwise a high-then-low symbol is a 1
    /// when its high half is at least as long as its low half. Anything that
    /// does not start high is not a data bit.
    pub fn classify(&self, symbol: PulseSymbol) -> Option<bool> {
        if symbol == self.bit1 {
            return Some(true);
        }
        if symbol == self.bit0 {
            return Some(false);
        }
        if symbol.level0 != Level::High || symbol.level1 != Level::Low {
            return None;
        }
        Some(symbol.duration0 >= symbol.duration1)
    }
}

/// Low symbol closing a frame
///
/// A non-zero latch that truncates to zero ticks is rejected, the symbol
/// would end the transmission instead of latching.
pub fn reset_symbol(resolution_hz: u32, timing: &PulseTiming) -> Result<PulseSymbol, Error> {
    let ticks = ticks_from_nanos(resolution_hz, timing.reset_ns)?;
    if ticks == 0 && timing.reset_ns > 0 {
        return Err(Error::ZeroDuration);
    }
    Ok(PulseSymbol::new(Level::Low, ticks, Level::Low, 0))
}
