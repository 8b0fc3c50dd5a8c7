#![no_std]

pub mod assembly;
pub mod channel;
pub mod color;
pub mod encoder;
pub mod error;
pub mod pwm;
pub mod shared;
pub mod sink;
pub mod symbol;
pub mod timing;
pub mod tx;

pub use channel::{LedChannel, LedChannelConfig, StripUpdate};
pub use color::{ColorOrder, Rgb};
pub use encoder::{
    BitOrder, BytesEncoder, EncodeState, Encoder, LedStripEncoder, LedStripEncoderConfig, Phase,
    RepeatEncoder,
};
pub use error::Error;
pub use shared::SharedEncoder;
pub use sink::{SymbolBuffer, SymbolSink};
pub use symbol::{Level, PulseSymbol};
pub use timing::{BitShapes, PulseTiming};
pub use tx::{SymbolWriter, TransmitReport, TxChannel};
pub use embassy_time::Duration;
