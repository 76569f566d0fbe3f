// SPDX-License-Identifier: MPL-2.0
//! Authentication tab bar.
//!
//! Exactly one tab is active at a time. Selecting a tab emits an event so
//! the parent can tear the capture session down when the QR pane is left,
//! and run the capability check when it is entered.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, Row, Text},
    Element, Length,
};

/// The authentication flows the user can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    Email,
    Qr,
}

impl AuthTab {
    /// All tabs in display order.
    pub const ALL: [AuthTab; 2] = [AuthTab::Email, AuthTab::Qr];

    fn label_key(self) -> &'static str {
        match self {
            AuthTab::Email => "tab-email",
            AuthTab::Qr => "tab-qr",
        }
    }
}

/// Messages emitted by the tab bar.
#[derive(Debug, Clone)]
pub enum Message {
    Select(AuthTab),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The QR pane was left; any live capture session must be stopped.
    LeftQr,
    /// The QR pane became active; the capability check should run.
    EnteredQr,
}

/// Process a tab message and return the corresponding event.
pub fn update(message: Message, active: &mut AuthTab) -> Event {
    match message {
        Message::Select(tab) => {
            let previous = *active;
            *active = tab;
            if previous == AuthTab::Qr && tab != AuthTab::Qr {
                Event::LeftQr
            } else if previous != AuthTab::Qr && tab == AuthTab::Qr {
                Event::EnteredQr
            } else {
                Event::None
            }
        }
    }
}

/// Render the tab bar.
pub fn view<'a>(i18n: &I18n, active: AuthTab) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);

    for tab in AuthTab::ALL {
        let label = Text::new(i18n.tr(tab.label_key())).size(typography::BODY);
        let style = if tab == active {
            styles::tab_active
        } else {
            styles::tab_inactive
        };
        row = row.push(
            button(label)
                .on_press(Message::Select(tab))
                .padding([spacing::SM, spacing::MD])
                .width(Length::Fill)
                .style(style),
        );
    }

    row.width(Length::Fill).into()
}
