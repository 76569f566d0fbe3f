// SPDX-License-Identifier: MPL-2.0
//! QR scanner pane: viewfinder, status line, and permission panel.
//!
//! The pane renders whatever the session reports; the only state owned here
//! is presentation: whether the permission panel is revealed and an error
//! status overriding the phase status after a failed request.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, container, Column, Text},
    Element, Length,
};

/// Presentation state for the scanner pane.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    permission_panel_visible: bool,
    error_status: Option<&'static str>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn permission_panel_visible(&self) -> bool {
        self.permission_panel_visible
    }

    pub fn show_permission_panel(&mut self) {
        self.permission_panel_visible = true;
    }

    pub fn hide_permission_panel(&mut self) {
        self.permission_panel_visible = false;
    }

    /// Pins a failure status (an i18n key) over the phase status.
    pub fn set_error_status(&mut self, key: &'static str) {
        self.error_status = Some(key);
    }

    pub fn clear_error_status(&mut self) {
        self.error_status = None;
    }

    /// The status line to show, preferring a pinned failure over the phase
    /// status supplied by the session.
    pub fn status_key(&self, phase_key: &'static str) -> &'static str {
        self.error_status.unwrap_or(phase_key)
    }
}

/// Messages emitted by the scanner pane.
#[derive(Debug, Clone)]
pub enum Message {
    /// The camera icon in the viewfinder was pressed.
    CameraIconPressed,
    /// The enable-camera button on the permission panel was pressed.
    EnableCameraPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    /// Start the session if idle, stop it otherwise.
    ToggleCamera,
    /// Start the session unconditionally.
    StartCamera,
}

/// Process a scanner message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::CameraIconPressed => Event::ToggleCamera,
        Message::EnableCameraPressed => Event::StartCamera,
    }
}

/// Contextual data needed to render the scanner pane.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Whether a capture stream is live (styles the viewfinder border).
    pub camera_active: bool,
    /// Status line key, already resolved via [`State::status_key`].
    pub status_key: &'static str,
}

/// Render the scanner pane.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let camera_icon = button(
        Text::new("📷")
            .size(typography::VIEWFINDER_ICON)
            .align_x(Horizontal::Center),
    )
    .on_press(Message::CameraIconPressed)
    .style(styles::button_secondary)
    .padding(spacing::MD);

    let viewfinder_caption = if ctx.camera_active {
        ctx.i18n.tr("scanner-viewfinder-live")
    } else {
        ctx.i18n.tr("scanner-viewfinder-idle")
    };

    let viewfinder = container(
        Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(camera_icon)
            .push(Text::new(viewfinder_caption).size(typography::CAPTION)),
    )
    .center_x(Length::Fixed(sizing::VIEWFINDER_SIDE))
    .center_y(Length::Fixed(sizing::VIEWFINDER_SIDE))
    .style(styles::viewfinder(ctx.camera_active));

    let status = Text::new(ctx.i18n.tr(ctx.status_key)).size(typography::BODY);

    let mut pane = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(viewfinder)
        .push(status);

    if ctx.state.permission_panel_visible() {
        let enable_button = button(
            Text::new(ctx.i18n.tr("permission-enable-button")).size(typography::BODY),
        )
        .on_press(Message::EnableCameraPressed)
        .style(styles::button_primary)
        .padding([spacing::SM, spacing::LG]);

        let panel = container(
            Column::new()
                .spacing(spacing::SM)
                .align_x(Horizontal::Center)
                .push(Text::new(ctx.i18n.tr("permission-panel-text")).size(typography::BODY))
                .push(enable_button),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::permission_panel);

        pane = pane.push(panel);
    }

    pane.width(Length::Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn camera_icon_toggles() {
        assert!(matches!(
            update(Message::CameraIconPressed),
            Event::ToggleCamera
        ));
    }

    #[test]
    fn enable_button_starts() {
        assert!(matches!(
            update(Message::EnableCameraPressed),
            Event::StartCamera
        ));
    }

    #[test]
    fn error_status_overrides_phase_status() {
        let mut state = State::new();
        assert_eq!(state.status_key("scanner-status-idle"), "scanner-status-idle");

        state.set_error_status("scanner-status-denied");
        assert_eq!(
            state.status_key("scanner-status-idle"),
            "scanner-status-denied"
        );

        state.clear_error_status();
        assert_eq!(state.status_key("scanner-status-idle"), "scanner-status-idle");
    }

    #[test]
    fn permission_panel_visibility_toggles() {
        let mut state = State::new();
        assert!(!state.permission_panel_visible());
        state.show_permission_panel();
        assert!(state.permission_panel_visible());
        state.hide_permission_panel();
        assert!(!state.permission_panel_visible());
    }

    #[test]
    fn pane_renders_with_and_without_permission_panel() {
        let i18n = I18n::default();
        let mut state = State::new();

        {
            let _element = view(ViewContext {
                i18n: &i18n,
                state: &state,
                camera_active: false,
                status_key: "scanner-status-idle",
            });
        }

        state.show_permission_panel();
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
            camera_active: true,
            status_key: "scanner-status-active",
        });
    }
}
