//! Byte to bit-symbol encoder

use super::{EncodeState, Encoder};
use crate::error::Error;
use crate::sink::SymbolSink;
use crate::symbol::PulseSymbol;
use crate::timing::BitShapes;

/// Order in which the bits of a byte go on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitOrder {
    #[default]
    MsbFirst,
    LsbFirst,
}

/// Emits one symbol per bit of a byte buffer.
///
/// The bit cursor survives across calls and returns to zero once the last
/// bit has been written, so consecutive frames never share state.
#[derive(Debug, Clone)]
pub struct BytesEncoder {
    shapes: BitShapes,
    order: BitOrder,
    /// Bits of the current buffer already emitted
    cursor: usize,
}

impl BytesEncoder {
    /// Create a bytes encoder from its bit templates.
    ///
    /// Every half of both templates must be non-zero: a zero duration ends
    /// the transmission on the peripheral.
    pub fn new(shapes: BitShapes, order: BitOrder) -> Result<Self, Error> {
        let halves = [
            shapes.bit0.duration0,
            shapes.bit0.duration1,
            shapes.bit1.duration0,
            shapes.bit1.duration1,
        ];
        if halves.contains(&0) {
            return Err(Error::ZeroDuration);
        }
        Ok(Self {
            shapes,
            order,
            cursor: 0,
        })
    }

    /// Bits of the current buffer already emitted
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub const fn shapes(&self) -> &BitShapes {
        &self.shapes
    }

    fn symbol_at(&self, bytes: &[u8], bit_index: usize) -> PulseSymbol {
        let byte = bytes[bit_index / 8];
        let shift = match self.order {
            BitOrder::MsbFirst => 7 - bit_index % 8,
            BitOrder::LsbFirst => bit_index % 8,
        };
        self.shapes.symbol((byte >> shift) & 1 == 1)
    }
}

impl Encoder for BytesEncoder {
    type Input = [u8];

    fn encode(&mut self, sink: &mut dyn SymbolSink, bytes: &[u8]) -> (usize, EncodeState) {
        let total = bytes.len() * 8;
        debug_assert!(
            self.cursor <= total,
            "buffer changed between calls of one frame"
        );
        let mut written = 0;

        while self.cursor < total {
            if sink.push(self.symbol_at(bytes, self.cursor)).is_err() {
                return (written, EncodeState::Partial);
            }
            self.cursor += 1;
            written += 1;
        }

        self.cursor = 0;
        (written, EncodeState::Complete)
    }

    fn reset(&mut self) -> Result<(), Error> {
        self.cursor = 0;
        Ok(())
    }
}
