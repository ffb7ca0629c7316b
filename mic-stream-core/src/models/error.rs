use thiserror::Error;

/// Errors that can occur during capture operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// The platform cannot produce a valid buffer for the requested
    /// configuration. Surfaced synchronously from `start`.
    #[error("unsupported configuration: {0}")]
    UnsupportedConfig(String),

    /// The input device could not be acquired or initialized (busy,
    /// denied, absent). Surfaced synchronously from `start`.
    #[error("device unavailable: {0}")]
    DeviceUnavailable(String),

    /// The input device failed after capture began. Surfaced through the
    /// subscriber's error callback; the session releases the device and
    /// returns to idle.
    #[error("device lost: {0}")]
    DeviceLost(String),
}

impl CaptureError {
    /// Stable identifier for the error kind, independent of the message.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedConfig(_) => "unsupported_config",
            Self::DeviceUnavailable(_) => "device_unavailable",
            Self::DeviceLost(_) => "device_lost",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = CaptureError::DeviceUnavailable("mic busy".into());
        assert_eq!(err.to_string(), "device unavailable: mic busy");
    }

    #[test]
    fn code_is_stable_across_messages() {
        assert_eq!(
            CaptureError::DeviceLost("a".into()).code(),
            CaptureError::DeviceLost("b".into()).code(),
        );
    }
}
