// SPDX-License-Identifier: MPL-2.0
//! Collapsible informational panels shown under the auth card.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, container, Column, Row, Text},
    Element, Length,
};
use std::collections::HashSet;

/// Sections that can be expanded/collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    AboutQr,
    Troubleshooting,
}

impl Section {
    /// All available sections in display order.
    pub const ALL: [Section; 2] = [Section::AboutQr, Section::Troubleshooting];

    fn title_key(self) -> &'static str {
        match self {
            Section::AboutQr => "collapsible-about-qr-title",
            Section::Troubleshooting => "collapsible-troubleshooting-title",
        }
    }

    fn body_key(self) -> &'static str {
        match self {
            Section::AboutQr => "collapsible-about-qr-body",
            Section::Troubleshooting => "collapsible-troubleshooting-body",
        }
    }
}

/// Tracks which sections are expanded. Nothing persists across restarts.
#[derive(Debug, Clone, Default)]
pub struct State {
    expanded: HashSet<Section>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, section: Section) -> bool {
        self.expanded.contains(&section)
    }

    pub fn toggle(&mut self, section: Section) {
        if self.expanded.contains(&section) {
            self.expanded.remove(&section);
        } else {
            self.expanded.insert(section);
        }
    }
}

/// Messages emitted by the panels.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleSection(Section),
}

/// Process a panel message.
pub fn update(state: &mut State, message: Message) {
    match message {
        Message::ToggleSection(section) => state.toggle(section),
    }
}

/// Render all panels.
pub fn view<'a>(i18n: &I18n, state: &'a State) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XS).width(Length::Fill);

    for section in Section::ALL {
        let is_expanded = state.is_expanded(section);
        let indicator = Text::new(if is_expanded { "▼" } else { "▶" }).size(typography::CAPTION);

        let header = button(
            Row::new()
                .spacing(spacing::SM)
                .push(indicator)
                .push(Text::new(i18n.tr(section.title_key())).size(typography::BODY)),
        )
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::button_secondary)
        .on_press(Message::ToggleSection(section));

        column = column.push(header);

        if is_expanded {
            let body = container(Text::new(i18n.tr(section.body_key())).size(typography::CAPTION))
                .padding(spacing::MD)
                .width(Length::Fill)
                .style(styles::card);
            column = column.push(body);
        }
    }

    column.into()
}
