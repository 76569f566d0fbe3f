// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::session;
use iced::{event, time, Subscription};

/// Routes window close requests so the capture session can be torn down
/// before the window goes away. Active on every screen.
pub fn create_close_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }
        None
    })
}

/// The 1 s scan tick, present exactly while the session is scanning. The
/// subscription disappearing on stop is what guarantees no tick can arrive
/// after teardown.
pub fn create_scan_subscription(is_scanning: bool) -> Subscription<Message> {
    if is_scanning {
        time::every(session::SCAN_TICK_INTERVAL).map(|_| Message::ScanTick)
    } else {
        Subscription::none()
    }
}
