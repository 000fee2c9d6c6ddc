//! Pixel sink abstraction.
//!
//! The physical LED transport lives behind [`PixelSink`]; the animation
//! core only ever writes through this trait. [`BufferSink`] is an
//! in-memory implementation used by the tests and the terminal preview.

use std::io;

use thiserror::Error;

use crate::color::Rgb;

/// Error raised by a pixel sink transport.
///
/// Sink failures are fatal to the running animation: a step never retries
/// a failed write, it surfaces the error and the background timeline
/// terminates with it.
#[derive(Debug, Error)]
#[error("pixel sink write failed: {0}")]
pub struct SinkError(#[from] pub io::Error);

/// Addressable pixel buffer abstraction.
///
/// Implement this trait to support different strip transports. The
/// animation core is generic over it and assumes `flush` is fast relative
/// to the frame period.
pub trait PixelSink {
    /// Number of pixels in the strip.
    fn len(&self) -> usize;

    /// Whether the strip has no pixels.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Set a single pixel. Out-of-range indexes are a transport error.
    fn set(&mut self, index: usize, color: Rgb) -> Result<(), SinkError>;

    /// Set every pixel to `color`.
    fn fill(&mut self, color: Rgb) -> Result<(), SinkError>;

    /// Push the buffer to the hardware.
    fn flush(&mut self) -> Result<(), SinkError>;
}

/// In-memory pixel sink.
///
/// Records every write so tests can observe frames and count sink
/// activity; `flush` only bumps a counter.
#[derive(Debug, Clone)]
pub struct BufferSink {
    pixels: Vec<Rgb>,
    writes: u64,
    flushes: u64,
}

impl BufferSink {
    pub fn new(len: usize) -> Self {
        Self {
            pixels: vec![crate::color::BLACK; len],
            writes: 0,
            flushes: 0,
        }
    }

    /// Current contents of the pixel buffer.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Total `set`/`fill` calls observed so far.
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Total `flush` calls observed so far.
    pub fn flushes(&self) -> u64 {
        self.flushes
    }
}

impl PixelSink for BufferSink {
    fn len(&self) -> usize {
        self.pixels.len()
    }

    fn set(&mut self, index: usize, color: Rgb) -> Result<(), SinkError> {
        let len = self.pixels.len();
        let pixel = self.pixels.get_mut(index).ok_or_else(|| {
            SinkError(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("pixel {index} out of range for strip of {len}"),
            ))
        })?;
        *pixel = color;
        self.writes += 1;
        Ok(())
    }

    fn fill(&mut self, color: Rgb) -> Result<(), SinkError> {
        self.pixels.fill(color);
        self.writes += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.flushes += 1;
        Ok(())
    }
}
