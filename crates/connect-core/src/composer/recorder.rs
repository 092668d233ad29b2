//! Voice recording lifecycle
//!
//! The recorder is a small state machine (`Idle -> Recording -> Idle`)
//! over an abstract capture device. Device acquisition can fail
//! (permission denied, no microphone); failures surface as
//! [`RecordingError`] so the owner can show feedback instead of the
//! historical console-only logging.
//!
//! Exclusive use: while a device handle is live, a second `start` is a
//! no-op. `stop` always releases the handle and emits whatever audio was
//! captured; there is no discard-without-emitting path.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors acquiring or running a capture device.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordingError {
    /// The user denied the microphone permission prompt
    #[error("Microphone permission denied")]
    PermissionDenied,

    /// No capture device is available on this machine
    #[error("No capture device available")]
    DeviceUnavailable,

    /// The device failed mid-session
    #[error("Capture device failed: {0}")]
    DeviceFailed(String),
}

/// A finalized voice recording, ready to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioClip {
    /// MIME type of the encoded audio
    pub mime: String,
    /// Concatenated audio data
    pub bytes: Vec<u8>,
}

impl AudioClip {
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Platform microphone seam.
///
/// The desktop shell supplies the concrete device; tests use scripted
/// implementations.
// TODO: add a cpal-backed implementation once a capture backend is chosen.
pub trait CaptureDevice: Send {
    /// Pull whatever audio has been buffered since the last call.
    /// `None` means nothing new is available right now.
    fn read_chunk(&mut self) -> Option<Vec<u8>>;

    /// MIME type of the chunks this device produces.
    fn mime_type(&self) -> &'static str {
        "audio/pcm"
    }

    /// Stop the underlying tracks and release the handle.
    fn release(&mut self);
}

/// Voice capture state machine: `Idle -> Recording -> Idle`.
#[derive(Default)]
pub struct VoiceRecorder {
    device: Option<Box<dyn CaptureDevice>>,
    chunks: Vec<Vec<u8>>,
}

impl VoiceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_recording(&self) -> bool {
        self.device.is_some()
    }

    /// Begin recording by acquiring a device through `open`.
    ///
    /// If a session is already live this is a no-op: the existing handle
    /// is kept and no second device is opened. Acquisition failure leaves
    /// the recorder idle and returns the error to the caller.
    pub fn start<F>(&mut self, open: F) -> Result<(), RecordingError>
    where
        F: FnOnce() -> Result<Box<dyn CaptureDevice>, RecordingError>,
    {
        if self.device.is_some() {
            tracing::debug!("start ignored: recording already in progress");
            return Ok(());
        }
        let device = open()?;
        self.chunks.clear();
        self.device = Some(device);
        tracing::debug!("recording started");
        Ok(())
    }

    /// Drain buffered chunks from the live device, if any.
    pub fn poll(&mut self) {
        if let Some(device) = self.device.as_mut() {
            while let Some(chunk) = device.read_chunk() {
                self.chunks.push(chunk);
            }
        }
    }

    /// Finalize the recording: drain remaining chunks, release the device
    /// unconditionally, and return the concatenated clip.
    ///
    /// Calling `stop` while idle is a silent no-op returning `None`.
    pub fn stop(&mut self) -> Option<AudioClip> {
        let mut device = self.device.take()?;
        while let Some(chunk) = device.read_chunk() {
            self.chunks.push(chunk);
        }
        let mime = device.mime_type().to_string();
        device.release();

        let bytes: Vec<u8> = self.chunks.drain(..).flatten().collect();
        tracing::debug!(bytes = bytes.len(), "recording stopped");
        Some(AudioClip { mime, bytes })
    }
}

/// Deterministic stand-in for a real microphone.
///
/// Synthesizes a low-amplitude sine tone at 8 kHz mono for however long
/// the session has been live. Used by the desktop shell until a platform
/// capture backend exists, and convenient in tests.
pub struct SyntheticMicrophone {
    started: Instant,
    emitted_samples: usize,
    released: bool,
}

impl SyntheticMicrophone {
    const SAMPLE_RATE: usize = 8_000;

    pub fn open() -> Result<Box<dyn CaptureDevice>, RecordingError> {
        Ok(Box::new(Self {
            started: Instant::now(),
            emitted_samples: 0,
            released: false,
        }))
    }
}

impl CaptureDevice for SyntheticMicrophone {
    fn read_chunk(&mut self) -> Option<Vec<u8>> {
        if self.released {
            return None;
        }
        let elapsed = self.started.elapsed().as_millis() as usize;
        let due = elapsed * Self::SAMPLE_RATE / 1000;
        if due <= self.emitted_samples {
            return None;
        }
        let chunk: Vec<u8> = (self.emitted_samples..due)
            .map(|i| {
                let t = i as f32 / Self::SAMPLE_RATE as f32;
                let sample = (t * 440.0 * std::f32::consts::TAU).sin();
                (128.0 + sample * 32.0) as u8
            })
            .collect();
        self.emitted_samples = due;
        Some(chunk)
    }

    fn release(&mut self) {
        self.released = true;
    }
}
