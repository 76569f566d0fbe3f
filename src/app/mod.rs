// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the login screen
//! components and the capture session.
//!
//! The `App` struct wires together the tab bar, the email form, the
//! agreement modal, the scanner, and the session state machine, and
//! translates messages into side effects like the async device request and
//! the delayed post-detection redirect. Policy decisions (window geometry,
//! who owns the session, teardown on close) stay close to the update loop
//! so user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::camera::{Backend, StreamRequest};
use crate::config;
use crate::i18n::fluent::I18n;
use crate::session::Session;
use crate::ui::agreement;
use crate::ui::collapsible;
use crate::ui::email_form;
use crate::ui::scanner;
use crate::ui::tabs::AuthTab;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;

pub const WINDOW_DEFAULT_WIDTH: u32 = 560;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Root Iced application state bridging UI components, localization, and
/// the capture session.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    active_tab: AuthTab,
    email_form: email_form::State,
    agreement: agreement::State,
    scanner: scanner::State,
    collapsible: collapsible::State,
    session: Session,
    backend: Backend,
    request: StreamRequest,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("active_tab", &self.active_tab)
            .field("session_phase", &self.session.phase())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        // The close request is intercepted so the session can be torn down
        // before the window goes away.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Login,
            active_tab: AuthTab::Email,
            email_form: email_form::State::new(),
            agreement: agreement::State::new(),
            scanner: scanner::State::new(),
            collapsible: collapsible::State::new(),
            session: Session::new(),
            backend: Backend::default(),
            request: StreamRequest::default(),
        }
    }
}

impl App {
    /// Initializes application state from `Flags` received from the
    /// launcher and the `settings.toml` configuration.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match &flags.config_dir {
            Some(dir) => config::load_from_path(&Path::new(dir).join("settings.toml"))
                .unwrap_or_default(),
            None => config::load().unwrap_or_default(),
        };

        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);
        let backend = Backend::from_config(&config.camera)
            .with_forced_failure(flags.camera_failure.as_deref().map(config::parse_failure));
        let request = StreamRequest::from_config(&config.camera);

        let app = App {
            i18n,
            backend,
            request,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let close_sub = subscription::create_close_subscription();
        let scan_sub = subscription::create_scan_subscription(self.session.is_scanning());
        Subscription::batch([close_sub, scan_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            active_tab: &mut self.active_tab,
            email_form: &mut self.email_form,
            agreement: &mut self.agreement,
            scanner: &mut self.scanner,
            collapsible: &mut self.collapsible,
            session: &mut self.session,
            backend: &self.backend,
            request: &self.request,
        };

        match message {
            Message::Tabs(tabs_message) => update::handle_tabs_message(&mut ctx, tabs_message),
            Message::EmailForm(form_message) => {
                update::handle_email_form_message(&mut ctx, form_message)
            }
            Message::Agreement(agreement_message) => {
                update::handle_agreement_message(&mut ctx, agreement_message)
            }
            Message::Scanner(scanner_message) => {
                update::handle_scanner_message(&mut ctx, scanner_message)
            }
            Message::Collapsible(collapsible_message) => {
                update::handle_collapsible_message(&mut ctx, collapsible_message)
            }
            Message::Welcome(welcome_message) => {
                update::handle_welcome_message(&mut ctx, welcome_message)
            }
            Message::CameraOpened { token, result } => {
                update::handle_camera_opened(&mut ctx, token, result)
            }
            Message::ScanTick => update::handle_scan_tick(&mut ctx),
            Message::RedirectDelayElapsed(token) => {
                update::handle_redirect_delay(&mut ctx, token)
            }
            Message::WindowCloseRequested(id) => {
                // Unconditional teardown before the window closes.
                self.session.stop();
                window::close(id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            active_tab: self.active_tab,
            email_form: &self.email_form,
            agreement: &self.agreement,
            scanner: &self.scanner,
            collapsible: &self.collapsible,
            session: &self.session,
        })
    }
}
