//! Frame encoder for addressable LED strips
//!
//! A frame is the pixel bytes followed by a single low latch symbol. The
//! encoder walks two phases, data then latch, and only reports
//! [`EncodeState::Complete`] once the latch has been written.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{BitOrder, BytesEncoder, EncodeState, Encoder, RepeatEncoder};
use crate::error::Error;
use crate::sink::SymbolSink;
use crate::symbol::PulseSymbol;
use crate::timing::{BitShapes, PulseTiming, reset_symbol};

/// Number of latch symbols closing a frame
const LATCH_SYMBOLS: usize = 1;

/// Configuration for the LED strip encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedStripEncoderConfig {
    /// Channel tick resolution in Hz
    pub resolution_hz: u32,
    /// Protocol pulse widths
    pub timing: PulseTiming,
    /// Bit order within each byte
    pub bit_order: BitOrder,
}

impl LedStripEncoderConfig {
    /// WS2812 timings, MSB first, at the given resolution
    pub const fn ws2812(resolution_hz: u32) -> Self {
        Self {
            resolution_hz,
            timing: PulseTiming::WS2812,
            bit_order: BitOrder::MsbFirst,
        }
    }
}

/// Current sub-task of the frame encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Emitting pixel bits
    #[default]
    SendingData,
    /// Emitting the latch gap
    SendingReset,
}

/// Pixel data plus latch encoder
///
/// Drive it with the same pixel buffer until it returns
/// [`EncodeState::Complete`]. One call advances at most one phase, so the call
/// that finishes the pixel data always reports [`EncodeState::Partial`].
#[derive(Debug, Clone)]
pub struct LedStripEncoder<B = BytesEncoder, R = RepeatEncoder> {
    bytes: B,
    latch: R,
    reset_symbol: PulseSymbol,
    phase: Phase,
}

impl LedStripEncoder {
    /// Build the bit templates and latch symbol from `config`
    pub fn new(config: &LedStripEncoderConfig) -> Result<Self, Error> {
        let shapes = BitShapes::new(config.resolution_hz, &config.timing)?;
        let bytes = BytesEncoder::new(shapes, config.bit_order)?;
        let latch = RepeatEncoder::new(LATCH_SYMBOLS)?;
        let reset_symbol = reset_symbol(config.resolution_hz, &config.timing)?;

        #[cfg(feature = "esp32-log")]
        println!(
            "[LedStripEncoder.new] {} Hz, bit0 {:?}, bit1 {:?}, latch {:?}",
            config.resolution_hz, shapes.bit0, shapes.bit1, reset_symbol
        );

        Ok(Self::from_parts(bytes, latch, reset_symbol))
    }

    /// Bit templates used for pixel data
    pub const fn shapes(&self) -> &BitShapes {
        self.bytes.shapes()
    }
}

impl<B, R> LedStripEncoder<B, R>
where
    B: Encoder<Input = [u8]>,
    R: Encoder<Input = PulseSymbol>,
{
    /// Compose a frame encoder from already built sub-encoders
    pub const fn from_parts(bytes: B, latch: R, reset_symbol: PulseSymbol) -> Self {
        Self {
            bytes,
            latch,
            reset_symbol,
            phase: Phase::SendingData,
        }
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn reset_symbol(&self) -> PulseSymbol {
        self.reset_symbol
    }

    /// Pixel data encoder
    pub const fn bytes_encoder(&self) -> &B {
        &self.bytes
    }

    /// Latch encoder
    pub const fn latch_encoder(&self) -> &R {
        &self.latch
    }
}

impl<B, R> Encoder for LedStripEncoder<B, R>
where
    B: Encoder<Input = [u8]>,
    R: Encoder<Input = PulseSymbol>,
{
    type Input = [u8];

    fn encode(&mut self, sink: &mut dyn SymbolSink, pixels: &[u8]) -> (usize, EncodeState) {
        match self.phase {
            Phase::SendingData => {
                let (written, state) = self.bytes.encode(sink, pixels);
                if state.is_complete() {
                    self.phase = Phase::SendingReset;
                }
                (written, EncodeState::Partial)
            }
            Phase::SendingReset => {
                let (written, state) = self.latch.encode(sink, &self.reset_symbol);
                if state.is_complete() {
                    self.phase = Phase::SendingData;
                }
                (written, state)
            }
        }
    }

    fn reset(&mut self) -> Result<(), Error> {
        #[cfg(feature = "esp32-log")]
        println!("[LedStripEncoder.reset] aborting in {:?}", self.phase);

        self.bytes.reset()?;
        self.latch.reset()?;
        self.phase = Phase::SendingData;
        Ok(())
    }
}
