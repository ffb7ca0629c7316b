//! # mic-stream-alsa
//!
//! Linux ALSA backend for mic-stream-kit.
//!
//! Provides `AlsaMicDevice`, a `mic_stream_core::CaptureDevice` that opens
//! a blocking ALSA capture PCM and feeds the generic `CaptureSession`.
//!
//! ## Usage
//! ```ignore
//! use mic_stream_alsa::AlsaMicDevice;
//! use mic_stream_core::{CaptureConfig, CaptureSession, ChannelSink};
//!
//! let session = CaptureSession::new(AlsaMicDevice::default_device());
//! let (sink, events) = ChannelSink::bounded(64);
//! session.start(CaptureConfig::default(), std::sync::Arc::new(sink))?;
//! ```

#[cfg(target_os = "linux")]
pub mod alsa_mic;

#[cfg(target_os = "linux")]
pub use alsa_mic::AlsaMicDevice;
