//! Error type shared by the encoders and the transmission glue.

use core::fmt;

/// Errors reported while building encoders or pushing frames out.
///
/// Running out of sink capacity is never an error, it is reported as
/// [`EncodeState::Partial`](crate::encoder::EncodeState::Partial).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Tick resolution of 0 Hz
    InvalidResolution,
    /// Duration does not fit the 15-bit symbol field at the given resolution
    DurationOverflow {
        /// Offending duration in nanoseconds
        nanos: u32,
    },
    /// Bit template with a zero-length half, or a latch truncated to zero ticks
    ZeroDuration,
    /// Repeat encoder configured to emit nothing
    ZeroRepeat,
    /// Frame does not fit the channel's frame buffer
    FrameTooLarge {
        /// Bytes needed for the requested LED count
        requested: usize,
        /// Bytes available
        capacity: usize,
    },
    /// Encoder returned without progress although the sink had room
    Stalled,
    /// Symbol writer refused a block
    Writer,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidResolution => f.write_str("tick resolution must be non-zero"),
            Self::DurationOverflow { nanos } => {
                write!(f, "duration of {nanos} ns overflows the symbol duration field")
            }
            Self::ZeroDuration => f.write_str("bit template or latch truncates to zero ticks"),
            Self::ZeroRepeat => f.write_str("repeat count must be non-zero"),
            Self::FrameTooLarge {
                requested,
                capacity,
            } => write!(
                f,
                "frame of {requested} bytes exceeds buffer capacity of {capacity} bytes"
            ),
            Self::Stalled => f.write_str("encoder stopped making progress"),
            Self::Writer => f.write_str("symbol writer rejected the block"),
        }
    }
}

impl core::error::Error for Error {}
