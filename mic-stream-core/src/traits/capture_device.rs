use crate::models::config::CaptureConfig;
use crate::models::error::CaptureError;

/// Outcome of one blocking read from an open input stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// `n` bytes of PCM data were written to the front of the buffer.
    Data(usize),

    /// Nothing usable was captured this cycle (empty read, recovered
    /// overrun, timeout). Not fatal; the capture loop retries.
    Transient,

    /// The device failed and cannot recover. Terminates the session.
    Lost(String),
}

/// An open hardware input stream.
///
/// Owned exclusively by the capture thread while a session runs. Dropping
/// the stream releases the underlying device; that drop is the one and
/// only release.
pub trait CaptureStream: Send {
    /// Smallest read-buffer size in bytes that guarantees glitch-free
    /// capture at the negotiated rate and format.
    fn min_buffer_len(&self) -> usize;

    /// Block until samples are available, then fill the front of `buf`.
    fn read(&mut self, buf: &mut [u8]) -> ReadOutcome;
}

/// Factory for platform input streams.
///
/// Implemented by platform backends (`AlsaMicDevice` on Linux) and by the
/// scripted fakes in the session tests. Opening the stream is the single
/// resource acquisition of a session.
pub trait CaptureDevice: Send + Sync {
    fn open(&self, config: &CaptureConfig) -> Result<Box<dyn CaptureStream>, CaptureError>;
}
