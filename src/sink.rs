//! Destinations for encoded symbols
//!
//! A sink stands in for the free part of the peripheral's symbol memory. Its
//! remaining room is the capacity an encoder may fill in one call.

use heapless::Vec;

use crate::symbol::PulseSymbol;

/// Bounded destination for symbols
pub trait SymbolSink {
    /// Number of symbols that still fit
    fn remaining(&self) -> usize;

    /// Append a symbol
    ///
    /// Returns the symbol back if the sink is full.
    fn push(&mut self, symbol: PulseSymbol) -> Result<(), PulseSymbol>;

    /// Check if no more symbols fit
    fn is_full(&self) -> bool {
        self.remaining() == 0
    }
}

/// Sink writing into a borrowed slice
///
/// The slice length is the capacity.
#[derive(Debug)]
pub struct SymbolBuffer<'a> {
    symbols: &'a mut [PulseSymbol],
    position: usize,
}

impl<'a> SymbolBuffer<'a> {
    /// Create an empty buffer over `symbols`
    pub const fn new(symbols: &'a mut [PulseSymbol]) -> Self {
        Self {
            symbols,
            position: 0,
        }
    }

    /// Number of symbols written so far
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Symbols written so far
    pub fn written(&self) -> &[PulseSymbol] {
        &self.symbols[..self.position]
    }

    /// Forget written symbols, making the whole slice available again
    pub fn clear(&mut self) {
        self.position = 0;
    }
}

impl SymbolSink for SymbolBuffer<'_> {
    fn remaining(&self) -> usize {
        self.symbols.len() - self.position
    }

    fn push(&mut self, symbol: PulseSymbol) -> Result<(), PulseSymbol> {
        let Some(slot) = self.symbols.get_mut(self.position) else {
            return Err(symbol);
        };
        *slot = symbol;
        self.position += 1;
        Ok(())
    }
}

impl<const N: usize> SymbolSink for Vec<PulseSymbol, N> {
    fn remaining(&self) -> usize {
        self.capacity() - self.len()
    }

    fn push(&mut self, symbol: PulseSymbol) -> Result<(), PulseSymbol> {
        Vec::push(self, symbol)
    }
}
