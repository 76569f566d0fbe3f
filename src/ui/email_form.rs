// SPDX-License-Identifier: MPL-2.0
//! Email sign-in form.
//!
//! The sign-in action is enabled if and only if the user agreement box is
//! checked. The checkbox keeps that invariant itself; the agreement modal
//! only ever checks the box through [`State::accept_agreement`].

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, checkbox, text_input, Column, Row, Text},
    Element, Length,
};

/// Form state: input values plus the agreement flag gating sign-in.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub email: String,
    pub password: String,
    agreed: bool,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_agreed(&self) -> bool {
        self.agreed
    }

    /// Marks the agreement as accepted, used by the modal's Agree action.
    pub fn accept_agreement(&mut self) {
        self.agreed = true;
    }
}

/// Messages emitted by the form.
#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    AgreementToggled(bool),
    ShowAgreement,
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Open the terms-of-use modal.
    ShowAgreement,
    /// The form was submitted with the agreement flag set.
    SignIn,
}

/// Process a form message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::EmailChanged(value) => {
            state.email = value;
            Event::None
        }
        Message::PasswordChanged(value) => {
            state.password = value;
            Event::None
        }
        Message::AgreementToggled(checked) => {
            state.agreed = checked;
            Event::None
        }
        Message::ShowAgreement => Event::ShowAgreement,
        Message::Submit => {
            // Enter from an input reaches here even though the button is
            // disabled, so the guard is repeated at submit time.
            if state.agreed {
                Event::SignIn
            } else {
                Event::None
            }
        }
    }
}

/// Render the email form.
pub fn view<'a>(i18n: &I18n, state: &'a State) -> Element<'a, Message> {
    let email_placeholder = i18n.tr("form-email-placeholder");
    let email_input = text_input(&email_placeholder, &state.email)
        .on_input(Message::EmailChanged)
        .on_submit(Message::Submit)
        .padding(spacing::SM)
        .size(typography::BODY);

    let password_placeholder = i18n.tr("form-password-placeholder");
    let password_input = text_input(&password_placeholder, &state.password)
        .on_input(Message::PasswordChanged)
        .on_submit(Message::Submit)
        .secure(true)
        .padding(spacing::SM)
        .size(typography::BODY);

    let agreement_box = checkbox(state.agreed)
        .label(i18n.tr("form-agreement-label"))
        .on_toggle(Message::AgreementToggled)
        .size(typography::BODY);

    let terms_button = button(Text::new(i18n.tr("form-view-terms-button")).size(typography::CAPTION))
        .on_press(Message::ShowAgreement)
        .style(styles::button_secondary)
        .padding([spacing::XXS, spacing::XS]);

    let agreement_row = Row::new()
        .spacing(spacing::SM)
        .push(agreement_box)
        .push(terms_button);

    let mut sign_in = button(Text::new(i18n.tr("form-sign-in-button")).size(typography::BODY))
        .padding([spacing::SM, spacing::LG])
        .width(Length::Fill)
        .style(styles::button_primary);
    if state.agreed {
        sign_in = sign_in.on_press(Message::Submit);
    }

    Column::new()
        .spacing(spacing::MD)
        .push(email_input)
        .push(password_input)
        .push(agreement_row)
        .push(sign_in)
        .into()
}
