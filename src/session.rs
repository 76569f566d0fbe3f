// SPDX-License-Identifier: MPL-2.0
//! Scan-session state machine for the QR login flow.
//!
//! The session owns the capture stream handle and tracks where the flow is:
//! `Idle → Requesting → Active → Scanning → Redirecting → Idle`. Detection is
//! simulated: the third 1 s scan tick "detects" a QR code, and the redirect
//! fires after a fixed 1.5 s delay.
//!
//! Every transition out of `Idle` bumps a generation counter, and the tokens
//! handed out for the in-flight device request and the delayed redirect carry
//! the generation they were minted under. A completion that arrives after a
//! manual stop (or a restart) no longer matches the current generation and
//! is discarded, so the stale-redirect race of a naive timer implementation
//! cannot occur and navigation happens exactly once per detection.

use crate::camera::CameraStream;
use std::time::Duration;

/// Number of scan ticks before the simulated detection triggers.
pub const DETECTION_TICKS: u8 = 3;

/// Interval between scan ticks.
pub const SCAN_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Delay between detection and the redirect to the welcome screen.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Where the session currently is in the scan flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Requesting,
    Active,
    Scanning { attempts: u8 },
    Redirecting,
}

/// Token for an in-flight device access request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Token for a scheduled delayed redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedirectToken(u64);

/// Result of a scan tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still scanning; carries the attempt count so far.
    Continue { attempts: u8 },
    /// Detection fired; schedule the delayed redirect with this token.
    Detected(RedirectToken),
    /// The tick arrived outside `Scanning` and was dropped.
    Ignored,
}

/// Owns the capture handle and the flow state for one login screen.
#[derive(Debug, Default)]
pub struct Session {
    phase: Phase,
    stream: Option<CameraStream>,
    has_camera_access: bool,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn is_scanning(&self) -> bool {
        matches!(self.phase, Phase::Scanning { .. })
    }

    /// Whether a capture stream is currently held.
    pub fn has_stream(&self) -> bool {
        self.stream.is_some()
    }

    pub fn has_camera_access(&self) -> bool {
        self.has_camera_access
    }

    /// Begins a device access request. Tears down any previous stream first
    /// so a restart cannot leak a held device.
    pub fn begin_request(&mut self) -> RequestToken {
        self.release_stream();
        self.generation += 1;
        self.phase = Phase::Requesting;
        RequestToken(self.generation)
    }

    /// Stores the stream from a completed request. Returns false (and stops
    /// the stream) when the request was superseded by a stop or a restart.
    pub fn activate(&mut self, token: RequestToken, mut stream: CameraStream) -> bool {
        if token.0 != self.generation || self.phase != Phase::Requesting {
            stream.stop();
            return false;
        }
        self.stream = Some(stream);
        self.has_camera_access = true;
        self.phase = Phase::Active;
        true
    }

    /// Records a failed request. Returns false for a superseded request.
    pub fn fail_request(&mut self, token: RequestToken) -> bool {
        if token.0 != self.generation || self.phase != Phase::Requesting {
            return false;
        }
        self.phase = Phase::Idle;
        true
    }

    /// Enters the scanning sub-sequence. Only valid from `Active`.
    pub fn begin_scanning(&mut self) {
        if self.phase == Phase::Active {
            self.phase = Phase::Scanning { attempts: 0 };
        }
    }

    /// Counts one scan tick. On the detection tick the phase moves to
    /// `Redirecting` (which removes the tick subscription) and the returned
    /// token must be attached to the delayed redirect.
    pub fn record_tick(&mut self) -> TickOutcome {
        match self.phase {
            Phase::Scanning { attempts } => {
                let attempts = attempts + 1;
                if attempts >= DETECTION_TICKS {
                    self.phase = Phase::Redirecting;
                    TickOutcome::Detected(RedirectToken(self.generation))
                } else {
                    self.phase = Phase::Scanning { attempts };
                    TickOutcome::Continue { attempts }
                }
            }
            _ => TickOutcome::Ignored,
        }
    }

    /// Whether a delayed redirect that just fired is still current. A stop
    /// or restart in the meantime invalidates the token.
    pub fn redirect_due(&self, token: RedirectToken) -> bool {
        self.phase == Phase::Redirecting && token.0 == self.generation
    }

    /// Stops the session: every track of a held stream is stopped and the
    /// handle released, the phase returns to `Idle`, and the access flag is
    /// cleared. Idempotent; a stop while idle is a no-op.
    pub fn stop(&mut self) {
        self.release_stream();
        self.has_camera_access = false;
        if self.phase != Phase::Idle {
            self.generation += 1;
            self.phase = Phase::Idle;
        }
    }

    fn release_stream(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.stop();
        }
    }

    /// i18n key for the status line this phase shows. Failure statuses come
    /// from [`crate::error::CameraError::i18n_key`] instead.
    pub fn status_key(&self) -> &'static str {
        match self.phase {
            Phase::Idle => "scanner-status-idle",
            Phase::Requesting => "scanner-status-requesting",
            Phase::Active | Phase::Scanning { .. } => "scanner-status-active",
            Phase::Redirecting => "scanner-status-detected",
        }
    }
}
