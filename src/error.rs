// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Camera(CameraError),
}

/// Specific error types for camera access failures.
/// Used to provide user-friendly, localized scanner status messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    /// The platform has no capture capability at all.
    Unsupported,

    /// The user (or platform policy) refused access to the device.
    PermissionDenied,

    /// No capture device is present.
    NotFound,

    /// The device exists but is held by another application.
    Busy,

    /// Generic failure with raw message
    Other(String),
}

impl CameraError {
    /// Returns the i18n message key for the scanner status line shown for
    /// this error kind.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CameraError::Unsupported => "scanner-status-unsupported",
            CameraError::PermissionDenied => "scanner-status-denied",
            CameraError::NotFound => "scanner-status-not-found",
            CameraError::Busy => "scanner-status-busy",
            CameraError::Other(_) => "scanner-status-generic",
        }
    }

    /// Attempts to parse a raw backend error message into a specific
    /// `CameraError` kind. Backends that already classify their failures
    /// construct the variants directly; this is the fallback path.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("denied")
            || msg_lower.contains("not allowed")
            || msg_lower.contains("permission")
        {
            return CameraError::PermissionDenied;
        }

        if msg_lower.contains("no device")
            || msg_lower.contains("not found")
            || msg_lower.contains("no camera")
        {
            return CameraError::NotFound;
        }

        if msg_lower.contains("busy")
            || msg_lower.contains("in use")
            || msg_lower.contains("not readable")
        {
            return CameraError::Busy;
        }

        if msg_lower.contains("unsupported") || msg_lower.contains("no capture") {
            return CameraError::Unsupported;
        }

        CameraError::Other(msg.to_string())
    }
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::Unsupported => write!(f, "Capture is not supported on this platform"),
            CameraError::PermissionDenied => write!(f, "Camera access denied"),
            CameraError::NotFound => write!(f, "No camera device found"),
            CameraError::Busy => write!(f, "Camera device is busy"),
            CameraError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Camera(e) => write!(f, "Camera Error: {}", e),
        }
    }
}

impl From<CameraError> for Error {
    fn from(err: CameraError) -> Self {
        Error::Camera(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
