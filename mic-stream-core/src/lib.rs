//! # mic-stream-core
//!
//! Platform-agnostic continuous audio-capture-to-stream core.
//!
//! Owns the capture session state machine and the read-copy-deliver loop.
//! Platform backends (Linux ALSA, future Windows WASAPI / macOS Core Audio)
//! implement the `CaptureDevice`/`CaptureStream` traits and plug into the
//! generic `CaptureSession`.
//!
//! ## Architecture
//!
//! ```text
//! mic-stream-core (this crate)
//! ├── traits/     ← CaptureDevice, CaptureStream, FrameSink
//! ├── models/     ← CaptureConfig, AudioFrame, SessionState, CaptureError
//! ├── session/    ← CaptureSession (capture loop + start/stop control)
//! └── delivery/   ← ChannelSink (capture thread → subscriber handoff)
//! ```

pub mod delivery;
pub mod models;
pub mod session;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use delivery::channel::{ChannelSink, StreamEvent};
pub use models::config::CaptureConfig;
pub use models::error::CaptureError;
pub use models::frame::AudioFrame;
pub use models::state::SessionState;
pub use session::capture::CaptureSession;
pub use traits::capture_device::{CaptureDevice, CaptureStream, ReadOutcome};
pub use traits::frame_sink::FrameSink;
