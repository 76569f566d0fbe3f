// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`tabs`] - Authentication tab bar (email / QR)
//! - [`email_form`] - Email sign-in form with the agreement checkbox
//! - [`agreement`] - Terms-of-use modal
//! - [`scanner`] - QR scanner pane with viewfinder and permission panel
//! - [`collapsible`] - Collapsible informational panels
//! - [`welcome`] - Post-login screen
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, panels)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod agreement;
pub mod collapsible;
pub mod design_tokens;
pub mod email_form;
pub mod scanner;
pub mod styles;
pub mod tabs;
pub mod welcome;
