use std::time::Duration;

use crossbeam_channel::{bounded, unbounded, Receiver, Sender, TrySendError};

use crate::models::error::CaptureError;
use crate::models::frame::AudioFrame;
use crate::traits::frame_sink::FrameSink;

/// Event emitted by a [`ChannelSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    Frame(AudioFrame),
    Error(CaptureError),
}

/// A `FrameSink` that forwards events into a channel.
///
/// This is the cross-context hop: the capture thread pushes, and the
/// receiving end is consumed on whatever execution context the caller
/// chooses (UI thread, bridge task, plain worker).
///
/// When a bounded channel is full, the frame is dropped rather than
/// blocking the capture thread. The terminal error event is given a
/// short grace period instead, since it is the last thing the session
/// will ever say.
pub struct ChannelSink {
    tx: Sender<StreamEvent>,
}

const ERROR_SEND_GRACE: Duration = Duration::from_secs(1);

impl ChannelSink {
    /// Create a sink and its receiving end with room for `capacity`
    /// in-flight events.
    pub fn bounded(capacity: usize) -> (Self, Receiver<StreamEvent>) {
        let (tx, rx) = bounded(capacity);
        (Self { tx }, rx)
    }

    /// Create an unbounded sink. The subscriber must keep up; nothing is
    /// ever dropped.
    pub fn unbounded() -> (Self, Receiver<StreamEvent>) {
        let (tx, rx) = unbounded();
        (Self { tx }, rx)
    }
}

impl FrameSink for ChannelSink {
    fn on_frame(&self, frame: AudioFrame) {
        match self.tx.try_send(StreamEvent::Frame(frame)) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                log::warn!("subscriber not keeping up, dropping one audio frame");
            }
            Err(TrySendError::Disconnected(_)) => {
                // Receiver is gone; nothing left to deliver to.
            }
        }
    }

    fn on_error(&self, error: &CaptureError) {
        if self
            .tx
            .send_timeout(StreamEvent::Error(error.clone()), ERROR_SEND_GRACE)
            .is_err()
        {
            log::error!("could not deliver terminal capture error: {}", error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_arrive_in_order() {
        let (sink, rx) = ChannelSink::unbounded();

        sink.on_frame(AudioFrame::copied_from(&[1]));
        sink.on_frame(AudioFrame::copied_from(&[2]));

        assert_eq!(rx.recv().unwrap(), StreamEvent::Frame(AudioFrame::copied_from(&[1])));
        assert_eq!(rx.recv().unwrap(), StreamEvent::Frame(AudioFrame::copied_from(&[2])));
    }

    #[test]
    fn full_bounded_channel_drops_frames_without_blocking() {
        let (sink, rx) = ChannelSink::bounded(1);

        sink.on_frame(AudioFrame::copied_from(&[1]));
        sink.on_frame(AudioFrame::copied_from(&[2])); // dropped

        assert_eq!(rx.recv().unwrap(), StreamEvent::Frame(AudioFrame::copied_from(&[1])));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn error_event_is_delivered() {
        let (sink, rx) = ChannelSink::bounded(4);
        let error = CaptureError::DeviceLost("gone".into());

        sink.on_error(&error);

        assert_eq!(rx.recv().unwrap(), StreamEvent::Error(error));
    }

    #[test]
    fn disconnected_receiver_is_tolerated() {
        let (sink, rx) = ChannelSink::bounded(1);
        drop(rx);

        // Neither call may panic or block.
        sink.on_frame(AudioFrame::copied_from(&[1]));
        sink.on_error(&CaptureError::DeviceLost("gone".into()));
    }
}
