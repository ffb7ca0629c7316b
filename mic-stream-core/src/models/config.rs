use serde::{Deserialize, Serialize};

/// Configuration for a capture session.
///
/// Immutable once a session has started; determines how the read buffer
/// is sized. Field names serialize in camelCase so a host bridge can pass
/// configuration through as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaptureConfig {
    /// Sample rate in Hz (default: 16000).
    pub sample_rate_hz: u32,

    /// Number of input channels. Only mono capture is supported.
    pub channel_count: u16,

    /// PCM bit depth. Only 16-bit signed samples are supported.
    pub bits_per_sample: u16,
}

impl CaptureConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.sample_rate_hz == 0 {
            return Err("sample rate must be positive".into());
        }
        if self.channel_count != 1 {
            return Err(format!("unsupported channel count: {}", self.channel_count));
        }
        if self.bits_per_sample != 16 {
            return Err(format!("unsupported bit depth: {}", self.bits_per_sample));
        }
        Ok(())
    }

    /// Size in bytes of one sample frame across all channels.
    pub fn frame_size(&self) -> usize {
        self.channel_count as usize * (self.bits_per_sample as usize / 8)
    }

    /// Bytes of PCM data produced per second at this configuration.
    pub fn byte_rate(&self) -> usize {
        self.sample_rate_hz as usize * self.frame_size()
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 16000,
            channel_count: 1,
            bits_per_sample: 16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(CaptureConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_sample_rate() {
        let config = CaptureConfig {
            sample_rate_hz: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_stereo() {
        let config = CaptureConfig {
            channel_count: 2,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_16_bit() {
        let config = CaptureConfig {
            bits_per_sample: 24,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn sizing_helpers() {
        let config = CaptureConfig::default();
        assert_eq!(config.frame_size(), 2);
        assert_eq!(config.byte_rate(), 32000);
    }

    #[test]
    fn serde_uses_camel_case_names() {
        let json = r#"{"sampleRateHz":44100}"#;
        let config: CaptureConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.sample_rate_hz, 44100);
        assert_eq!(config.channel_count, 1);

        let out = serde_json::to_string(&config).unwrap();
        assert!(out.contains("\"sampleRateHz\":44100"));
        assert!(out.contains("\"channelCount\":1"));
        assert!(out.contains("\"bitsPerSample\":16"));
    }
}
