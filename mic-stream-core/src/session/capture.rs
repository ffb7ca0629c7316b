use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;

use crate::models::config::CaptureConfig;
use crate::models::error::CaptureError;
use crate::models::frame::AudioFrame;
use crate::models::state::SessionState;
use crate::traits::capture_device::{CaptureDevice, CaptureStream, ReadOutcome};
use crate::traits::frame_sink::FrameSink;

/// Single-microphone capture session.
///
/// Owns the platform device, runs the read-copy-deliver loop on a
/// dedicated thread, and pushes each captured frame to one subscriber.
///
/// Mirrors the single-microphone hardware constraint: one session, one
/// active subscription. A `start` while running keeps the existing loop
/// and subscriber; replacing the subscriber requires a full `stop` first.
///
/// `start` and `stop` serialize through an internal mutex, so they are
/// safe to call from any thread, repeatedly and concurrently. The capture
/// thread never takes that lock; it synchronizes with the controls only
/// through the run flag and the shared state slot.
pub struct CaptureSession<D: CaptureDevice> {
    device: D,
    control: Mutex<ControlState>,
    state: Arc<Mutex<SessionState>>,
    running: Arc<AtomicBool>,
}

struct ControlState {
    capture_handle: Option<thread::JoinHandle<()>>,
}

impl<D: CaptureDevice> CaptureSession<D> {
    pub fn new(device: D) -> Self {
        Self {
            device,
            control: Mutex::new(ControlState {
                capture_handle: None,
            }),
            state: Arc::new(Mutex::new(SessionState::Idle)),
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        *self.state.lock()
    }

    /// Start capturing with `config`, delivering frames to `sink`.
    ///
    /// Returns once the capture loop is launched, not once the first frame
    /// arrives. Calling `start` while already running is a no-op returning
    /// success: no second device acquisition, no second loop.
    pub fn start(
        &self,
        config: CaptureConfig,
        sink: Arc<dyn FrameSink>,
    ) -> Result<(), CaptureError> {
        let mut control = self.control.lock();

        if self.state().is_running() {
            log::debug!("start requested while already running, ignoring");
            return Ok(());
        }

        // Reap a capture thread that already wound down (device loss).
        if let Some(handle) = control.capture_handle.take() {
            let _ = handle.join();
        }

        *self.state.lock() = SessionState::Starting;
        let result = self.launch(config, sink, &mut control);
        if result.is_err() {
            *self.state.lock() = SessionState::Idle;
        }
        result
    }

    fn launch(
        &self,
        config: CaptureConfig,
        sink: Arc<dyn FrameSink>,
        control: &mut ControlState,
    ) -> Result<(), CaptureError> {
        config.validate().map_err(CaptureError::UnsupportedConfig)?;

        let stream = self.device.open(&config)?;
        let buffer_len = stream.min_buffer_len();
        if buffer_len == 0 {
            // Stream is dropped here, releasing the device.
            return Err(CaptureError::UnsupportedConfig(
                "platform reported a zero minimum buffer size".into(),
            ));
        }

        self.running.store(true, Ordering::SeqCst);
        // Running must be visible before the loop starts: on immediate
        // device loss the loop transitions to idle, and that must not be
        // overwritten afterwards.
        *self.state.lock() = SessionState::Running;

        let running = Arc::clone(&self.running);
        let state = Arc::clone(&self.state);

        let handle = thread::Builder::new()
            .name("mic-capture".into())
            .spawn(move || capture_loop(stream, buffer_len, running, state, sink))
            .map_err(|e| {
                self.running.store(false, Ordering::SeqCst);
                CaptureError::DeviceUnavailable(format!("failed to spawn capture thread: {}", e))
            })?;

        control.capture_handle = Some(handle);
        log::info!(
            "capture started: {} Hz, {} channel(s), {}-bit",
            config.sample_rate_hz,
            config.channel_count,
            config.bits_per_sample
        );
        Ok(())
    }

    /// Stop capturing and release the device.
    ///
    /// Blocks until the capture thread has observed the stop signal and
    /// dropped the input stream — bounded by one read cycle. Calling
    /// `stop` while idle is a no-op returning success.
    pub fn stop(&self) -> Result<(), CaptureError> {
        let mut control = self.control.lock();

        if self.state().is_idle() {
            log::debug!("stop requested while idle, ignoring");
            return Ok(());
        }

        *self.state.lock() = SessionState::Stopping;
        self.running.store(false, Ordering::SeqCst);

        if let Some(handle) = control.capture_handle.take() {
            let _ = handle.join();
        }

        *self.state.lock() = SessionState::Idle;
        log::info!("capture stopped");
        Ok(())
    }
}

impl<D: CaptureDevice> Drop for CaptureSession<D> {
    /// Shutdown hook for whatever owns the session: a live capture loop
    /// must not outlive it.
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

/// Read-copy-deliver loop, run on the dedicated capture thread.
///
/// The thread is the sole owner of the input stream. The stop signal is
/// checked before each read, never mid-read. Each delivered frame is an
/// independent copy of the reusable read buffer; the buffer itself never
/// escapes this function.
fn capture_loop(
    mut stream: Box<dyn CaptureStream>,
    buffer_len: usize,
    running: Arc<AtomicBool>,
    state: Arc<Mutex<SessionState>>,
    sink: Arc<dyn FrameSink>,
) {
    let mut buf = vec![0u8; buffer_len];

    while running.load(Ordering::SeqCst) {
        match stream.read(&mut buf) {
            ReadOutcome::Data(n) if n > 0 => {
                sink.on_frame(AudioFrame::copied_from(&buf[..n]));
            }
            ReadOutcome::Data(_) | ReadOutcome::Transient => {}
            ReadOutcome::Lost(message) => {
                log::error!("input device lost: {}", message);
                // Release before going idle so a concurrent restart can
                // never observe two acquired streams.
                drop(stream);
                running.store(false, Ordering::SeqCst);
                *state.lock() = SessionState::Idle;
                sink.on_error(&CaptureError::DeviceLost(message));
                return;
            }
        }
    }
    // Normal stop: dropping the stream here releases the device, then
    // `stop` finishes its join and flips the state to idle.
}
