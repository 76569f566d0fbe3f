// SPDX-License-Identifier: MPL-2.0
//! Terms-of-use agreement modal.
//!
//! Agree checks the agreement box through the parent and hides the modal;
//! Cancel, the close control, and a click on the backdrop all hide it
//! without touching the agreement state.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, center, container, mouse_area, opaque, scrollable, Column, Row, Text},
    Element, Length,
};

/// Modal visibility state.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    visible: bool,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Messages emitted by the modal and its open control.
#[derive(Debug, Clone)]
pub enum Message {
    Show,
    Agree,
    Cancel,
    Close,
    BackdropPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The user accepted the terms; the agreement box must be checked.
    Agreed,
}

/// Process a modal message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Show => {
            state.visible = true;
            Event::None
        }
        Message::Agree => {
            state.visible = false;
            Event::Agreed
        }
        Message::Cancel | Message::Close | Message::BackdropPressed => {
            state.visible = false;
            Event::None
        }
    }
}

/// Render the modal overlay. The caller stacks this on top of the base view
/// while the state is visible.
pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let close_button = button(Text::new("✕").size(typography::BODY))
        .on_press(Message::Close)
        .style(styles::button_secondary)
        .padding([spacing::XXS, spacing::SM]);

    let header = Row::new()
        .push(
            Text::new(i18n.tr("agreement-title"))
                .size(typography::TITLE_SM)
                .width(Length::Fill),
        )
        .push(close_button);

    let body = scrollable(
        Text::new(i18n.tr("agreement-body")).size(typography::BODY),
    )
    .height(Length::Fixed(sizing::MODAL_BODY_HEIGHT));

    let cancel_button = button(Text::new(i18n.tr("agreement-cancel-button")).size(typography::BODY))
        .on_press(Message::Cancel)
        .style(styles::button_secondary)
        .padding([spacing::SM, spacing::LG]);

    let agree_button = button(Text::new(i18n.tr("agreement-agree-button")).size(typography::BODY))
        .on_press(Message::Agree)
        .style(styles::button_primary)
        .padding([spacing::SM, spacing::LG]);

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(cancel_button)
        .push(agree_button);

    let card = container(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Right)
            .push(header)
            .push(body)
            .push(actions),
    )
    .padding(spacing::LG)
    .width(Length::Fixed(sizing::MODAL_WIDTH))
    .style(styles::card);

    // A press on the dimmed backdrop dismisses; the card itself is opaque so
    // clicks inside do not fall through to the backdrop.
    let backdrop = mouse_area(
        center(opaque(card)).style(styles::modal_backdrop),
    )
    .on_press(Message::BackdropPressed);

    opaque(backdrop)
}
