//! ALSA microphone capture device.
//!
//! Opens a capture PCM in blocking interleaved mode and reads signed
//! 16-bit frames. The negotiated period size is the smallest read buffer
//! the device guarantees glitch-free capture with, so it becomes the
//! stream's `min_buffer_len`.

use alsa::pcm::{Access, Format, HwParams, PCM};
use alsa::{Direction, ValueOr};

use mic_stream_core::models::config::CaptureConfig;
use mic_stream_core::models::error::CaptureError;
use mic_stream_core::traits::capture_device::{CaptureDevice, CaptureStream, ReadOutcome};

/// ALSA capture device, addressed by PCM name.
pub struct AlsaMicDevice {
    pcm_name: String,
}

impl AlsaMicDevice {
    /// Capture from the system default PCM.
    pub fn default_device() -> Self {
        Self {
            pcm_name: "default".into(),
        }
    }

    /// Capture from a specific PCM (e.g. `"hw:1,0"`).
    pub fn with_name(pcm_name: impl Into<String>) -> Self {
        Self {
            pcm_name: pcm_name.into(),
        }
    }
}

impl CaptureDevice for AlsaMicDevice {
    fn open(&self, config: &CaptureConfig) -> Result<Box<dyn CaptureStream>, CaptureError> {
        let pcm = PCM::new(&self.pcm_name, Direction::Capture, false).map_err(|e| {
            CaptureError::DeviceUnavailable(format!("failed to open {}: {}", self.pcm_name, e))
        })?;

        let unsupported =
            |e: alsa::Error| CaptureError::UnsupportedConfig(format!("hw params rejected: {}", e));

        let period_frames = {
            let hwp = HwParams::any(&pcm).map_err(unsupported)?;
            hwp.set_access(Access::RWInterleaved).map_err(unsupported)?;
            hwp.set_format(Format::s16()).map_err(unsupported)?;
            hwp.set_channels(u32::from(config.channel_count))
                .map_err(unsupported)?;
            hwp.set_rate(config.sample_rate_hz, ValueOr::Nearest)
                .map_err(unsupported)?;
            pcm.hw_params(&hwp).map_err(unsupported)?;
            hwp.get_period_size().map_err(unsupported)? as usize
        };

        pcm.start().map_err(|e| {
            CaptureError::DeviceUnavailable(format!("failed to start capture: {}", e))
        })?;

        let frame_size = config.frame_size();
        log::debug!(
            "opened {}: period {} frames, {} bytes per read",
            self.pcm_name,
            period_frames,
            period_frames * frame_size
        );

        Ok(Box::new(AlsaMicStream {
            pcm,
            samples: vec![0i16; period_frames * config.channel_count as usize],
            frame_size,
            min_len: period_frames * frame_size,
        }))
    }
}

/// An open ALSA capture stream. Closing the PCM on drop is the single
/// device release.
struct AlsaMicStream {
    pcm: PCM,
    samples: Vec<i16>,
    frame_size: usize,
    min_len: usize,
}

impl CaptureStream for AlsaMicStream {
    fn min_buffer_len(&self) -> usize {
        self.min_len
    }

    fn read(&mut self, buf: &mut [u8]) -> ReadOutcome {
        let io = match self.pcm.io_i16() {
            Ok(io) => io,
            Err(e) => return ReadOutcome::Lost(e.to_string()),
        };

        let want = (buf.len() / 2).min(self.samples.len());
        match io.readi(&mut self.samples[..want]) {
            Ok(0) => ReadOutcome::Transient,
            Ok(frames) => {
                let sample_count = frames * self.frame_size / 2;
                for (dst, sample) in buf
                    .chunks_exact_mut(2)
                    .zip(&self.samples[..sample_count])
                {
                    dst.copy_from_slice(&sample.to_le_bytes());
                }
                ReadOutcome::Data(sample_count * 2)
            }
            Err(e) => {
                // Overruns and suspends are recoverable; anything else
                // (device unplugged, handle gone) is fatal.
                let message = e.to_string();
                match self.pcm.try_recover(e, true) {
                    Ok(()) => {
                        log::warn!("recovered capture stream after {}", message);
                        ReadOutcome::Transient
                    }
                    Err(_) => ReadOutcome::Lost(message),
                }
            }
        }
    }
}
