//! Transmission channel with a bounded symbol memory
//!
//! Mirrors how the RMT peripheral consumes an encoder: it owns one memory
//! block of `BLOCK` symbols, lets the encoder fill whatever room is left and
//! hands full blocks to the hardware through a [`SymbolWriter`].

use embassy_time::Duration;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::encoder::Encoder;
use crate::error::Error;
use crate::symbol::PulseSymbol;

/// Default memory block size, in symbols
pub const DEFAULT_BLOCK_SYMBOLS: usize = 64;

/// Encode calls in a row that may return nothing while the block has room.
///
/// A frame encoder can finish a phase without writing anything (empty pixel
/// buffer), so a single idle call is not a stall.
const MAX_IDLE_CALLS: usize = 2;

/// Hardware side of a transmission channel
pub trait SymbolWriter {
    /// Send a block of symbols
    fn write(&mut self, symbols: &[PulseSymbol]) -> Result<(), Error>;
}

/// Summary of one transmitted frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransmitReport {
    /// Symbols written
    pub symbols: usize,
    /// Blocks handed to the writer
    pub blocks: usize,
    /// Sum of all symbol durations
    pub ticks: u64,
}

impl TransmitReport {
    /// Time the frame occupies the wire at `resolution_hz`
    pub fn airtime(&self, resolution_hz: u32) -> Duration {
        if resolution_hz == 0 {
            return Duration::from_micros(0);
        }
        Duration::from_micros(self.ticks * 1_000_000 / u64::from(resolution_hz))
    }
}

/// Channel draining an encoder through a fixed-size symbol block
pub struct TxChannel<W: SymbolWriter, const BLOCK: usize = DEFAULT_BLOCK_SYMBOLS> {
    writer: W,
    block: Vec<PulseSymbol, BLOCK>,
}

impl<W: SymbolWriter, const BLOCK: usize> TxChannel<W, BLOCK> {
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            block: Vec::new(),
        }
    }

    /// Run `encoder` over `input` until the frame is complete.
    ///
    /// On error the encoder is reset and the pending block discarded, so the
    /// next call starts a clean frame.
    pub fn transmit<E: Encoder + ?Sized>(
        &mut self,
        encoder: &mut E,
        input: &E::Input,
    ) -> Result<TransmitReport, Error> {
        let result = self.drain(encoder, input);
        if result.is_err() {
            self.abort(encoder)?;
        }
        result
    }

    fn drain<E: Encoder + ?Sized>(
        &mut self,
        encoder: &mut E,
        input: &E::Input,
    ) -> Result<TransmitReport, Error> {
        let mut report = TransmitReport::default();
        let mut idle_calls = 0;

        loop {
            let (written, state) = encoder.encode(&mut self.block, input);
            report.symbols += written;

            if state.is_complete() {
                break;
            }
            if self.block.is_full() && !self.block.is_empty() {
                self.flush(&mut report)?;
                idle_calls = 0;
            } else if written == 0 {
                idle_calls += 1;
                if idle_calls >= MAX_IDLE_CALLS {
                    #[cfg(feature = "esp32-log")]
                    println!(
                        "[TxChannel.transmit] encoder stalled after {} symbols",
                        report.symbols
                    );
                    return Err(Error::Stalled);
                }
            } else {
                idle_calls = 0;
            }
        }

        if !self.block.is_empty() {
            self.flush(&mut report)?;
        }
        Ok(report)
    }

    fn flush(&mut self, report: &mut TransmitReport) -> Result<(), Error> {
        report.ticks += self
            .block
            .iter()
            .map(|symbol| u64::from(symbol.ticks()))
            .sum::<u64>();
        report.blocks += 1;
        let result = self.writer.write(&self.block);
        self.block.clear();
        result
    }

    /// Drop the pending block and rewind `encoder`
    pub fn abort<E: Encoder + ?Sized>(&mut self, encoder: &mut E) -> Result<(), Error> {
        self.block.clear();
        encoder.reset()
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }
}
