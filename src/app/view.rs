// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the current screen and stacks the agreement modal on top of the
//! login screen while it is visible.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::session::Session;
use crate::ui::agreement;
use crate::ui::collapsible;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::email_form;
use crate::ui::scanner;
use crate::ui::styles;
use crate::ui::tabs::{self, AuthTab};
use crate::ui::welcome;
use iced::{
    alignment::Horizontal,
    widget::{container, Column, Stack, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub active_tab: AuthTab,
    pub email_form: &'a email_form::State,
    pub agreement: &'a agreement::State,
    pub scanner: &'a scanner::State,
    pub collapsible: &'a collapsible::State,
    pub session: &'a Session,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.screen {
        Screen::Login => view_login(&ctx),
        Screen::Welcome(method) => welcome::view(ctx.i18n, method).map(Message::Welcome),
    }
}

fn view_login<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("login-title")).size(typography::TITLE_LG);

    let tab_bar = tabs::view(ctx.i18n, ctx.active_tab).map(Message::Tabs);

    let pane: Element<'a, Message> = match ctx.active_tab {
        AuthTab::Email => email_form::view(ctx.i18n, ctx.email_form).map(Message::EmailForm),
        AuthTab::Qr => scanner::view(scanner::ViewContext {
            i18n: ctx.i18n,
            state: ctx.scanner,
            camera_active: ctx.session.has_stream(),
            status_key: ctx.scanner.status_key(ctx.session.status_key()),
        })
        .map(Message::Scanner),
    };

    let card = container(
        Column::new()
            .spacing(spacing::MD)
            .push(tab_bar)
            .push(pane),
    )
    .padding(spacing::LG)
    .width(Length::Fixed(sizing::AUTH_CARD_WIDTH))
    .style(styles::card);

    let panels = container(collapsible::view(ctx.i18n, ctx.collapsible).map(Message::Collapsible))
        .width(Length::Fixed(sizing::AUTH_CARD_WIDTH));

    let base = container(
        Column::new()
            .spacing(spacing::LG)
            .align_x(Horizontal::Center)
            .push(title)
            .push(card)
            .push(panels),
    )
    .center_x(Length::Fill)
    .padding(spacing::XL);

    if ctx.agreement.is_visible() {
        Stack::new()
            .push(base)
            .push(agreement::view(ctx.i18n).map(Message::Agreement))
            .into()
    } else {
        base.into()
    }
}
