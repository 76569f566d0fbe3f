// SPDX-License-Identifier: MPL-2.0
//! Post-login welcome screen, the destination of both sign-in flows.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Text},
    Element, Length,
};

/// Which flow signed the user in, reflected in the greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInMethod {
    Email,
    Qr,
}

impl SignInMethod {
    fn greeting_key(self) -> &'static str {
        match self {
            SignInMethod::Email => "welcome-greeting-email",
            SignInMethod::Qr => "welcome-greeting-qr",
        }
    }
}

/// Messages emitted by the welcome screen.
#[derive(Debug, Clone)]
pub enum Message {
    SignOut,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    /// Return to the login screen with a fresh session.
    SignedOut,
}

/// Process a welcome screen message.
pub fn update(message: Message) -> Event {
    match message {
        Message::SignOut => Event::SignedOut,
    }
}

/// Render the welcome screen.
pub fn view<'a>(i18n: &I18n, method: SignInMethod) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("welcome-title")).size(typography::TITLE_LG);
    let greeting = Text::new(i18n.tr(method.greeting_key())).size(typography::BODY);

    let sign_out = button(Text::new(i18n.tr("welcome-sign-out-button")).size(typography::BODY))
        .on_press(Message::SignOut)
        .style(styles::button_secondary)
        .padding([spacing::SM, spacing::LG]);

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(title)
        .push(greeting)
        .push(sign_out)
        .into()
}
