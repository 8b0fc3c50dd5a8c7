//! Pulse symbols as understood by the RMT peripheral
//!
//! A symbol is two `(level, duration)` pairs sent back to back. Durations are
//! expressed in ticks of the channel resolution and occupy 15 bits each.

/// Largest duration a symbol half can hold, in ticks.
pub const MAX_DURATION: u16 = 0x7FFF;

const LEVEL_BIT: u32 = 1 << 15;

/// Logic level of a symbol half
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    #[default]
    Low,
    High,
}

impl Level {
    const fn bit(self) -> u32 {
        match self {
            Self::Low => 0,
            Self::High => LEVEL_BIT,
        }
    }

    const fn from_bit(half: u32) -> Self {
        if half & LEVEL_BIT == 0 {
            Self::Low
        } else {
            Self::High
        }
    }
}

/// One hardware symbol: `level0` for `duration0` ticks, then `level1` for
/// `duration1` ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PulseSymbol {
    pub level0: Level,
    pub duration0: u16,
    pub level1: Level,
    pub duration1: u16,
}

impl PulseSymbol {
    /// Create a symbol, masking both durations to 15 bits
    pub const fn new(level0: Level, duration0: u16, level1: Level, duration1: u16) -> Self {
        Self {
            level0,
            duration0: duration0 & MAX_DURATION,
            level1,
            duration1: duration1 & MAX_DURATION,
        }
    }

    /// High for `high` ticks, then low for `low` ticks
    pub const fn high_low(high: u16, low: u16) -> Self {
        Self::new(Level::High, high, Level::Low, low)
    }

    /// Total length of the symbol in ticks
    #[allow(clippy::cast_lossless)]
    pub const fn ticks(self) -> u32 {
        self.duration0 as u32 + self.duration1 as u32
    }

    /// Pack into the 32-bit RMT memory word
    ///
    /// Layout: `duration0[0..15] | level0[15] | duration1[16..31] | level1[31]`.
    #[allow(clippy::cast_lossless)]
    pub const fn to_word(self) -> u32 {
        let low = self.duration0 as u32 | self.level0.bit();
        let high = self.duration1 as u32 | self.level1.bit();
        low | (high << 16)
    }

    /// Unpack a 32-bit RMT memory word
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_word(word: u32) -> Self {
        let low = word & 0xFFFF;
        let high = word >> 16;
        Self {
            level0: Level::from_bit(low),
            duration0: (low as u16) & MAX_DURATION,
            level1: Level::from_bit(high),
            duration1: (high as u16) & MAX_DURATION,
        }
    }
}
