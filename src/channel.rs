//! Digital LED channel context
//!
//! Owns everything needed to drive one addressable strip: the frame encoder,
//! the transmission channel, a frame buffer and the last command sent. One
//! instance is created at startup and passed to whatever updates the outputs.

use heapless::Vec;
use smart_leds::SmartLedsWrite;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::assembly::StripCommand;
use crate::color::{BYTES_PER_PIXEL, ColorOrder, Rgb, frame_bytes};
use crate::encoder::{LedStripEncoder, LedStripEncoderConfig};
use crate::error::Error;
use crate::tx::{DEFAULT_BLOCK_SYMBOLS, SymbolWriter, TransmitReport, TxChannel};

/// Tick resolution of the digital LED channel (10 MHz, 0.1 us per tick)
pub const DEFAULT_RESOLUTION_HZ: u32 = 10_000_000;

/// Configuration for a digital LED channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedChannelConfig {
    pub encoder: LedStripEncoderConfig,
    pub color_order: ColorOrder,
}

impl Default for LedChannelConfig {
    fn default() -> Self {
        Self {
            encoder: LedStripEncoderConfig::ws2812(DEFAULT_RESOLUTION_HZ),
            color_order: ColorOrder::Grb,
        }
    }
}

/// Outcome of [`LedChannel::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripUpdate {
    /// Strip disabled or zero LEDs requested; nothing sent
    Off,
    /// Same command as the last frame sent
    Unchanged,
    /// A new frame went out
    Transmitted(TransmitReport),
}

/// One addressable LED output
///
/// `FRAME_BYTES` bounds the frame buffer, use [`frame_bytes`] to size it.
pub struct LedChannel<
    W: SymbolWriter,
    const FRAME_BYTES: usize,
    const BLOCK: usize = DEFAULT_BLOCK_SYMBOLS,
> {
    encoder: LedStripEncoder,
    tx: TxChannel<W, BLOCK>,
    frame: Vec<u8, FRAME_BYTES>,
    color_order: ColorOrder,
    resolution_hz: u32,
    led_count: u16,
    last_sent: Option<StripCommand>,
    relay: bool,
}

impl<W: SymbolWriter, const FRAME_BYTES: usize, const BLOCK: usize>
    LedChannel<W, FRAME_BYTES, BLOCK>
{
    /// Create the channel and its encoder
    pub fn new(writer: W, config: &LedChannelConfig) -> Result<Self, Error> {
        Ok(Self {
            encoder: LedStripEncoder::new(&config.encoder)?,
            tx: TxChannel::new(writer),
            frame: Vec::new(),
            color_order: config.color_order,
            resolution_hz: config.encoder.resolution_hz,
            led_count: 0,
            last_sent: None,
            relay: false,
        })
    }

    /// Apply a strip command from the output assembly.
    ///
    /// The relay follows `enable` immediately. A frame is only sent when the
    /// command differs from the last one that went out.
    pub fn update(&mut self, command: &StripCommand) -> Result<StripUpdate, Error> {
        self.relay = command.enable;

        if !command.is_active() {
            self.led_count = 0;
            self.last_sent = None;
            return Ok(StripUpdate::Off);
        }

        if self.last_sent.as_ref() == Some(command) {
            return Ok(StripUpdate::Unchanged);
        }

        let report = self.fill_and_send(command.color, usize::from(command.count))?;

        #[cfg(feature = "esp32-log")]
        println!(
            "[LedChannel.update] {} leds {:?}, {} symbols in {} blocks",
            command.count, command.color, report.symbols, report.blocks
        );

        self.led_count = command.count;
        self.last_sent = Some(*command);
        Ok(StripUpdate::Transmitted(report))
    }

    fn fill_and_send(&mut self, color: Rgb, count: usize) -> Result<TransmitReport, Error> {
        let requested = frame_bytes(count);
        if requested > FRAME_BYTES {
            return Err(Error::FrameTooLarge {
                requested,
                capacity: FRAME_BYTES,
            });
        }

        let pixel = self.color_order.bytes(color);
        self.frame.clear();
        self.frame
            .resize(requested, 0)
            .map_err(|()| Error::FrameTooLarge {
                requested,
                capacity: FRAME_BYTES,
            })?;
        for chunk in self.frame.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk.copy_from_slice(&pixel);
        }
        self.send_frame()
    }

    /// Encode pixels from any color source and send them
    pub fn write_pixels<I>(&mut self, pixels: I) -> Result<TransmitReport, Error>
    where
        I: IntoIterator<Item = Rgb>,
    {
        self.frame.clear();
        let mut pixels = pixels.into_iter();
        let mut requested = 0;
        while let Some(color) = pixels.next() {
            requested += 1;
            if self.frame.extend_from_slice(&self.color_order.bytes(color)).is_err() {
                requested += pixels.count();
                return Err(Error::FrameTooLarge {
                    requested: frame_bytes(requested),
                    capacity: FRAME_BYTES,
                });
            }
        }
        // Arbitrary pixel data invalidates the cached command
        self.last_sent = None;
        let report = self.send_frame()?;
        self.led_count = u16::try_from(requested).unwrap_or(u16::MAX);
        Ok(report)
    }

    fn send_frame(&mut self) -> Result<TransmitReport, Error> {
        self.tx.transmit(&mut self.encoder, self.frame.as_slice())
    }

    /// Abandon the frame in flight and rewind the encoder
    pub fn abort(&mut self) -> Result<(), Error> {
        self.last_sent = None;
        self.tx.abort(&mut self.encoder)
    }

    /// Number of LEDs driven by the last frame, 0 when off
    pub const fn led_count(&self) -> u16 {
        self.led_count
    }

    /// Requested state of the strip power relay
    pub const fn relay_enabled(&self) -> bool {
        self.relay
    }

    pub const fn last_sent(&self) -> Option<StripCommand> {
        self.last_sent
    }

    pub const fn resolution_hz(&self) -> u32 {
        self.resolution_hz
    }

    pub const fn encoder(&self) -> &LedStripEncoder {
        &self.encoder
    }

    pub fn writer(&self) -> &W {
        self.tx.writer()
    }

    pub fn writer_mut(&mut self) -> &mut W {
        self.tx.writer_mut()
    }
}

impl<W: SymbolWriter, const FRAME_BYTES: usize, const BLOCK: usize> SmartLedsWrite
    for LedChannel<W, FRAME_BYTES, BLOCK>
{
    type Error = Error;
    type Color = Rgb;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.write_pixels(iterator.into_iter().map(Into::into))
            .map(|_| ())
    }
}
