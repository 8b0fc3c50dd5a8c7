//! Pixel colors and their byte layout on the wire

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Bytes each pixel occupies in a frame
pub const BYTES_PER_PIXEL: usize = 3;

/// Frame buffer size needed for `leds` pixels
pub const fn frame_bytes(leds: usize) -> usize {
    leds * BYTES_PER_PIXEL
}

/// Order in which a strip expects the color channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorOrder {
    Rgb,
    /// WS2812 and most of its clones
    #[default]
    Grb,
    Brg,
}

impl ColorOrder {
    /// Channel bytes of `color` in wire order
    pub const fn bytes(self, color: Rgb) -> [u8; BYTES_PER_PIXEL] {
        match self {
            Self::Rgb => [color.r, color.g, color.b],
            Self::Grb => [color.g, color.r, color.b],
            Self::Brg => [color.b, color.r, color.g],
        }
    }
}
