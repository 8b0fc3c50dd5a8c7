//! Encoder shared between execution contexts
//!
//! Encoders are driven through `&mut self`, which already rules out
//! concurrent use within one context. When a thread and an interrupt both need
//! the same encoder (one draining, the other aborting), wrap it in a
//! [`SharedEncoder`]: every access runs inside a critical section.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::encoder::{EncodeState, Encoder};
use crate::error::Error;
use crate::sink::SymbolSink;

/// An encoder behind a `critical-section` mutex.
///
/// Re-entrant access (calling back into the same `SharedEncoder` from inside
/// [`SharedEncoder::with`]) panics instead of corrupting the encoder.
pub struct SharedEncoder<E> {
    inner: Mutex<RefCell<E>>,
}

impl<E: Encoder> SharedEncoder<E> {
    pub const fn new(encoder: E) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(encoder)),
        }
    }

    /// Run `f` with exclusive access to the encoder
    pub fn with<T>(&self, f: impl FnOnce(&mut E) -> T) -> T {
        critical_section::with(|cs| {
            let mut encoder = self.inner.borrow(cs).borrow_mut();
            f(&mut *encoder)
        })
    }

    /// Encode under the lock
    pub fn encode(&self, sink: &mut dyn SymbolSink, input: &E::Input) -> (usize, EncodeState) {
        self.with(|encoder| encoder.encode(sink, input))
    }

    /// Reset under the lock
    pub fn reset(&self) -> Result<(), Error> {
        self.with(Encoder::reset)
    }

    /// Take the encoder back out
    pub fn into_inner(self) -> E {
        self.inner.into_inner().into_inner()
    }
}
