// SPDX-License-Identifier: MPL-2.0
//! `iced_entry` is a desktop sign-in screen built with the Iced GUI framework.
//!
//! It provides an email login form with a terms-of-use agreement flow and a
//! simulated camera-based QR login, and demonstrates internationalization
//! with Fluent, user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_entry/0.2.0")]

pub mod app;
pub mod camera;
pub mod config;
pub mod error;
pub mod i18n;
pub mod session;
pub mod ui;
