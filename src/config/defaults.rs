// SPDX-License-Identifier: MPL-2.0
//! Default values for settings not present in `settings.toml`.

/// Preferred capture width requested from the device.
pub const DEFAULT_IDEAL_WIDTH: u32 = 1280;

/// Preferred capture height requested from the device.
pub const DEFAULT_IDEAL_HEIGHT: u32 = 720;

/// Simulated latency of a device access request, in milliseconds.
pub const DEFAULT_REQUEST_LATENCY_MS: u64 = 400;
