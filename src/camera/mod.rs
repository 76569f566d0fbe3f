// SPDX-License-Identifier: MPL-2.0
//! Capture-device domain for the QR scanner.
//!
//! The scanner never decodes real frames, so the device itself is provided by
//! a simulated backend: a capability flag, an asynchronous open that resolves
//! after a configurable latency, and an outcome that is either a live stream
//! or a classified [`CameraError`]. The handle types still mirror a real
//! capture stack (a stream owning tracks that must be stopped individually)
//! so the session teardown logic stays faithful.

use crate::config::{defaults, CameraConfig};
use crate::error::CameraError;
use std::time::Duration;

/// Facing preference for the requested stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    /// Front-facing ("user") camera.
    User,
    /// Rear-facing ("environment") camera, preferred for QR scanning.
    #[default]
    Environment,
}

impl Facing {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "user" => Some(Facing::User),
            "environment" => Some(Facing::Environment),
            _ => None,
        }
    }
}

/// Recognized options for a device access request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamRequest {
    pub facing: Facing,
    pub ideal_width: u32,
    pub ideal_height: u32,
    pub audio: bool,
}

impl Default for StreamRequest {
    fn default() -> Self {
        Self {
            facing: Facing::Environment,
            ideal_width: defaults::DEFAULT_IDEAL_WIDTH,
            ideal_height: defaults::DEFAULT_IDEAL_HEIGHT,
            audio: false,
        }
    }
}

impl StreamRequest {
    /// Builds the request from the `[camera]` config section, falling back
    /// to the rear-facing 1280×720 video-only defaults.
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            facing: config
                .facing
                .as_deref()
                .and_then(Facing::from_token)
                .unwrap_or_default(),
            ideal_width: config.ideal_width.unwrap_or(defaults::DEFAULT_IDEAL_WIDTH),
            ideal_height: config
                .ideal_height
                .unwrap_or(defaults::DEFAULT_IDEAL_HEIGHT),
            audio: false,
        }
    }
}

/// Kind of media carried by a [`Track`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    Video,
    Audio,
}

/// A single constituent track of a capture stream.
#[derive(Debug, Clone)]
pub struct Track {
    pub kind: TrackKind,
    live: bool,
}

impl Track {
    fn new(kind: TrackKind) -> Self {
        Self { kind, live: true }
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn stop(&mut self) {
        self.live = false;
    }
}

/// An owned handle to a live capture stream. Dropping the handle without
/// calling [`CameraStream::stop`] leaves the simulated device "held", which
/// the session layer treats as a bug; stop is always invoked on teardown.
#[derive(Debug, Clone)]
pub struct CameraStream {
    tracks: Vec<Track>,
}

impl CameraStream {
    fn new(request: &StreamRequest) -> Self {
        let mut tracks = vec![Track::new(TrackKind::Video)];
        if request.audio {
            tracks.push(Track::new(TrackKind::Audio));
        }
        Self { tracks }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Stops every constituent track.
    pub fn stop(&mut self) {
        for track in &mut self.tracks {
            track.stop();
        }
    }

    pub fn is_live(&self) -> bool {
        self.tracks.iter().any(Track::is_live)
    }
}

/// Simulated capture backend.
///
/// The capability flag and the request outcome come from the `[camera]`
/// config section (optionally overridden by the `--camera-failure` CLI flag),
/// so every branch of the error taxonomy is reachable in a demo.
#[derive(Debug, Clone, Default)]
pub struct Backend {
    supported: Option<bool>,
    forced_failure: Option<CameraError>,
    request_latency: Option<Duration>,
}

impl Backend {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            supported: config.supported,
            forced_failure: config.forced_failure(),
            request_latency: config.request_latency_ms.map(Duration::from_millis),
        }
    }

    /// Overrides the request outcome, used by the `--camera-failure` flag.
    pub fn with_forced_failure(mut self, failure: Option<CameraError>) -> Self {
        if failure.is_some() {
            self.forced_failure = failure;
        }
        self
    }

    /// Capability query. A forced `Unsupported` failure also reports the
    /// capability as absent, matching how a platform without a capture API
    /// behaves.
    pub fn is_supported(&self) -> bool {
        if self.forced_failure == Some(CameraError::Unsupported) {
            return false;
        }
        self.supported.unwrap_or(true)
    }

    /// Requests a capture device. Suspends for the simulated latency and
    /// resolves to a live stream or the configured failure.
    pub async fn open(&self, request: StreamRequest) -> Result<CameraStream, CameraError> {
        if !self.is_supported() {
            return Err(CameraError::Unsupported);
        }

        let latency = self
            .request_latency
            .unwrap_or(Duration::from_millis(defaults::DEFAULT_REQUEST_LATENCY_MS));
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }

        match &self.forced_failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(CameraStream::new(&request)),
        }
    }
}
