use crate::models::error::CaptureError;
use crate::models::frame::AudioFrame;

/// Subscriber interface for a capture session.
///
/// Both methods are called from the capture thread, not the caller's
/// thread. Implementations that need a different execution context should
/// hand the event off rather than process it inline — see
/// `delivery::ChannelSink`.
pub trait FrameSink: Send + Sync {
    /// Called once per captured frame, in capture order. Ownership of the
    /// frame transfers to the sink.
    fn on_frame(&self, frame: AudioFrame);

    /// Called at most once per session, when the device is lost
    /// mid-capture. After this the session is idle and must be started
    /// again to resume.
    fn on_error(&self, error: &CaptureError);
}
