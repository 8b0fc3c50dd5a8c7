//! Duty scaling for the analog (PWM dimmed) channels

/// Duty resolution of the PWM timer, in bits
pub const DEFAULT_DUTY_RESOLUTION_BITS: u32 = 13;

/// PWM carrier frequency
pub const DEFAULT_PWM_FREQUENCY_HZ: u32 = 5_000;

/// Number of analog channels
pub const PWM_CHANNELS: usize = 5;

/// Widest duty resolution of the LEDC timers, in bits
pub const MAX_DUTY_RESOLUTION_BITS: u32 = 20;

/// Scale an 8-bit level linearly to a duty of `resolution_bits` bits
///
/// 0 maps to 0 and 255 to full duty. Resolutions above
/// [`MAX_DUTY_RESOLUTION_BITS`] are clamped to it.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn duty(level: u8, resolution_bits: u32) -> u32 {
    let bits = if resolution_bits > MAX_DUTY_RESOLUTION_BITS {
        MAX_DUTY_RESOLUTION_BITS
    } else {
        resolution_bits
    };
    let max_duty = (1u64 << bits) - 1;
    (level as u64 * max_duty / 255) as u32
}

/// Analog channel identifiers, in assembly order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmChannel {
    CoolWhite,
    WarmWhite,
    Blue,
    Green,
    Red,
}

impl PwmChannel {
    pub const ALL: [Self; PWM_CHANNELS] = [
        Self::CoolWhite,
        Self::WarmWhite,
        Self::Blue,
        Self::Green,
        Self::Red,
    ];
}

/// Requested levels of the analog channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PwmLevels {
    pub cool_white: u8,
    pub warm_white: u8,
    pub blue: u8,
    pub green: u8,
    pub red: u8,
}

impl PwmLevels {
    pub const fn level(&self, channel: PwmChannel) -> u8 {
        match channel {
            PwmChannel::CoolWhite => self.cool_white,
            PwmChannel::WarmWhite => self.warm_white,
            PwmChannel::Blue => self.blue,
            PwmChannel::Green => self.green,
            PwmChannel::Red => self.red,
        }
    }

    /// Duties for every channel, in [`PwmChannel::ALL`] order
    pub fn duties(&self, resolution_bits: u32) -> [u32; PWM_CHANNELS] {
        PwmChannel::ALL.map(|channel| duty(self.level(channel), resolution_bits))
    }

    /// Push all duties to `writer`
    pub fn apply<P: PwmWriter>(&self, writer: &mut P, resolution_bits: u32) {
        for (channel, duty) in PwmChannel::ALL.into_iter().zip(self.duties(resolution_bits)) {
            writer.set_duty(channel, duty);
        }
    }
}

/// PWM driver boundary
pub trait PwmWriter {
    fn set_duty(&mut self, channel: PwmChannel, duty: u32);
}
