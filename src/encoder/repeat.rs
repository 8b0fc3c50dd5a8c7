//! Fixed symbol repeater

use super::{EncodeState, Encoder};
use crate::error::Error;
use crate::sink::SymbolSink;
use crate::symbol::PulseSymbol;

/// Copies one symbol into the sink a fixed number of times
#[derive(Debug, Clone)]
pub struct RepeatEncoder {
    repeat: usize,
    emitted: usize,
}

impl RepeatEncoder {
    pub fn new(repeat: usize) -> Result<Self, Error> {
        if repeat == 0 {
            return Err(Error::ZeroRepeat);
        }
        Ok(Self { repeat, emitted: 0 })
    }

    /// Copies emitted for the current input
    pub const fn emitted(&self) -> usize {
        self.emitted
    }
}

impl Encoder for RepeatEncoder {
    type Input = PulseSymbol;

    fn encode(&mut self, sink: &mut dyn SymbolSink, symbol: &PulseSymbol) -> (usize, EncodeState) {
        let mut written = 0;

        while self.emitted < self.repeat {
            if sink.push(*symbol).is_err() {
                return (written, EncodeState::Partial);
            }
            self.emitted += 1;
            written += 1;
        }

        self.emitted = 0;
        (written, EncodeState::Complete)
    }

    fn reset(&mut self) -> Result<(), Error> {
        self.emitted = 0;
        Ok(())
    }
}
