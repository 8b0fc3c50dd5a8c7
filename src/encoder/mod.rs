//! Resumable symbol encoders
//!
//! Every encoder turns some input into [`PulseSymbol`](crate::PulseSymbol)s,
//! writing only as many as the sink accepts and picking up where it stopped
//! on the next call. Encoders compose: [`LedStripEncoder`] owns a
//! [`BytesEncoder`] for pixel data and a [`RepeatEncoder`] for the latch gap.

mod bytes;
mod led_strip;
mod repeat;

pub use bytes::{BitOrder, BytesEncoder};
pub use led_strip::{LedStripEncoder, LedStripEncoderConfig, Phase};
pub use repeat::RepeatEncoder;

use crate::error::Error;
use crate::sink::SymbolSink;

/// Progress reported by one encode call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeState {
    /// More symbols remain for this input
    Partial,
    /// The input has been fully encoded; the next call starts a new one
    Complete,
}

impl EncodeState {
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

pub trait Encoder {
    /// Data the encoder consumes
    type Input: ?Sized;

    /// Encode as much of `input` as fits into `sink`.
    ///
    /// Callers pass the same input on every call until [`EncodeState::Complete`]
    /// is returned. Returns the number of symbols written by this call.
    fn encode(&mut self, sink: &mut dyn SymbolSink, input: &Self::Input) -> (usize, EncodeState);

    /// Drop any progress so the next call starts from the beginning
    fn reset(&mut self) -> Result<(), Error>;
}
