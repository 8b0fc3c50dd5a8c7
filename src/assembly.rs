//! Field-bus assembly layouts
//!
//! The network master writes the output assembly; the device answers with the
//! input assembly, which echoes the outputs and appends the digital inputs.

use crate::color::Rgb;
use crate::pwm::PwmLevels;

/// Instance number of the output (consumed) assembly
pub const OUTPUT_ASSEMBLY_INSTANCE: u32 = 150;
/// Instance number of the input (produced) assembly
pub const INPUT_ASSEMBLY_INSTANCE: u32 = 100;

pub const OUTPUT_ASSEMBLY_SIZE: usize = 11;
pub const INPUT_ASSEMBLY_SIZE: usize = 14;

/// Number of digital inputs reported
pub const DIGITAL_INPUTS: usize = 3;

const OFFSET_CW: usize = 0;
const OFFSET_WW: usize = 1;
const OFFSET_B: usize = 2;
const OFFSET_G: usize = 3;
const OFFSET_R: usize = 4;
const OFFSET_COUNT_LOW: usize = 5;
const OFFSET_COUNT_HIGH: usize = 6;
const OFFSET_ENABLE: usize = 7;
const OFFSET_STRIP_R: usize = 8;
const OFFSET_STRIP_G: usize = 9;
const OFFSET_STRIP_B: usize = 10;
const OFFSET_DIGITAL_INPUTS: usize = OUTPUT_ASSEMBLY_SIZE;

/// Requested state of the digital LED strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StripCommand {
    /// Number of LEDs to drive
    pub count: u16,
    /// Strip power relay and output enable
    pub enable: bool,
    /// Color applied to every LED
    pub color: Rgb,
}

impl StripCommand {
    /// Check if the command lights anything
    pub const fn is_active(&self) -> bool {
        self.enable && self.count > 0
    }
}

/// Decoded output assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputAssembly {
    pub pwm: PwmLevels,
    pub strip: StripCommand,
}

impl OutputAssembly {
    pub const fn parse(data: &[u8; OUTPUT_ASSEMBLY_SIZE]) -> Self {
        Self {
            pwm: PwmLevels {
                cool_white: data[OFFSET_CW],
                warm_white: data[OFFSET_WW],
                blue: data[OFFSET_B],
                green: data[OFFSET_G],
                red: data[OFFSET_R],
            },
            strip: StripCommand {
                count: u16::from_le_bytes([data[OFFSET_COUNT_LOW], data[OFFSET_COUNT_HIGH]]),
                enable: data[OFFSET_ENABLE] != 0,
                color: Rgb {
                    r: data[OFFSET_STRIP_R],
                    g: data[OFFSET_STRIP_G],
                    b: data[OFFSET_STRIP_B],
                },
            },
        }
    }

    pub const fn to_bytes(&self) -> [u8; OUTPUT_ASSEMBLY_SIZE] {
        let count = self.strip.count.to_le_bytes();
        [
            self.pwm.cool_white,
            self.pwm.warm_white,
            self.pwm.blue,
            self.pwm.green,
            self.pwm.red,
            count[0],
            count[1],
            self.strip.enable as u8,
            self.strip.color.r,
            self.strip.color.g,
            self.strip.color.b,
        ]
    }
}

/// Raw levels of the digital input pins, `true` meaning high
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputLevels(pub [bool; DIGITAL_INPUTS]);

impl InputLevels {
    /// Inputs are active low: a low pin reports 1
    pub fn to_bytes(self) -> [u8; DIGITAL_INPUTS] {
        self.0.map(|high| u8::from(!high))
    }
}

/// Input assembly as sent back to the master
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputAssembly {
    data: [u8; INPUT_ASSEMBLY_SIZE],
}

impl Default for InputAssembly {
    fn default() -> Self {
        Self {
            data: [0; INPUT_ASSEMBLY_SIZE],
        }
    }
}

impl InputAssembly {
    /// Copy the received outputs into the echo area
    pub fn echo_outputs(&mut self, outputs: &[u8; OUTPUT_ASSEMBLY_SIZE]) {
        self.data[..OUTPUT_ASSEMBLY_SIZE].copy_from_slice(outputs);
    }

    /// Refresh the digital input bytes
    pub fn set_inputs(&mut self, levels: InputLevels) {
        self.data[OFFSET_DIGITAL_INPUTS..].copy_from_slice(&levels.to_bytes());
    }

    pub const fn as_bytes(&self) -> &[u8; INPUT_ASSEMBLY_SIZE] {
        &self.data
    }
}
