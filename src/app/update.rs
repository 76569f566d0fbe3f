// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers for the login and
//! welcome screens. The camera start/stop paths live here so the scanner
//! pane, the session, and the async device request stay in step.

use super::{Message, Screen};
use crate::camera::{Backend, CameraStream, StreamRequest};
use crate::error::CameraError;
use crate::session::{RedirectToken, RequestToken, Session, TickOutcome, REDIRECT_DELAY};
use crate::ui::agreement::{self, Event as AgreementEvent};
use crate::ui::collapsible;
use crate::ui::email_form::{self, Event as EmailFormEvent};
use crate::ui::scanner::{self, Event as ScannerEvent};
use crate::ui::tabs::{self, AuthTab, Event as TabsEvent};
use crate::ui::welcome::{self, Event as WelcomeEvent, SignInMethod};
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub active_tab: &'a mut AuthTab,
    pub email_form: &'a mut email_form::State,
    pub agreement: &'a mut agreement::State,
    pub scanner: &'a mut scanner::State,
    pub collapsible: &'a mut collapsible::State,
    pub session: &'a mut Session,
    pub backend: &'a Backend,
    pub request: &'a StreamRequest,
}

/// Handles tab bar messages, tearing the session down when the QR pane is
/// left and running the capability check when it is entered.
pub fn handle_tabs_message(ctx: &mut UpdateContext<'_>, message: tabs::Message) -> Task<Message> {
    match tabs::update(message, ctx.active_tab) {
        TabsEvent::None => {}
        TabsEvent::LeftQr => {
            stop_session(ctx);
        }
        TabsEvent::EnteredQr => {
            if !ctx.backend.is_supported() {
                ctx.scanner.set_error_status("scanner-status-unsupported-tab");
                ctx.scanner.show_permission_panel();
            }
        }
    }
    Task::none()
}

/// Handles email form messages.
pub fn handle_email_form_message(
    ctx: &mut UpdateContext<'_>,
    message: email_form::Message,
) -> Task<Message> {
    match email_form::update(ctx.email_form, message) {
        EmailFormEvent::None => {}
        EmailFormEvent::ShowAgreement => {
            agreement::update(ctx.agreement, agreement::Message::Show);
        }
        EmailFormEvent::SignIn => {
            *ctx.screen = Screen::Welcome(SignInMethod::Email);
        }
    }
    Task::none()
}

/// Handles agreement modal messages.
pub fn handle_agreement_message(
    ctx: &mut UpdateContext<'_>,
    message: agreement::Message,
) -> Task<Message> {
    match agreement::update(ctx.agreement, message) {
        AgreementEvent::None => {}
        AgreementEvent::Agreed => ctx.email_form.accept_agreement(),
    }
    Task::none()
}

/// Handles scanner pane messages.
pub fn handle_scanner_message(
    ctx: &mut UpdateContext<'_>,
    message: scanner::Message,
) -> Task<Message> {
    match scanner::update(message) {
        ScannerEvent::ToggleCamera => {
            if ctx.session.has_stream() {
                stop_session(ctx);
                Task::none()
            } else {
                start_camera(ctx)
            }
        }
        ScannerEvent::StartCamera => start_camera(ctx),
    }
}

/// Handles collapsible panel messages.
pub fn handle_collapsible_message(
    ctx: &mut UpdateContext<'_>,
    message: collapsible::Message,
) -> Task<Message> {
    collapsible::update(ctx.collapsible, message);
    Task::none()
}

/// Handles welcome screen messages.
pub fn handle_welcome_message(
    ctx: &mut UpdateContext<'_>,
    message: welcome::Message,
) -> Task<Message> {
    match welcome::update(message) {
        WelcomeEvent::SignedOut => {
            stop_session(ctx);
            *ctx.email_form = email_form::State::new();
            *ctx.agreement = agreement::State::new();
            *ctx.scanner = scanner::State::new();
            *ctx.active_tab = AuthTab::Email;
            *ctx.screen = Screen::Login;
        }
    }
    Task::none()
}

/// Starts the capture session: capability check first, then the async
/// device request carrying the generation token it was minted under.
pub fn start_camera(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.scanner.clear_error_status();
    ctx.scanner.hide_permission_panel();

    if !ctx.backend.is_supported() {
        ctx.scanner.set_error_status(CameraError::Unsupported.i18n_key());
        ctx.scanner.show_permission_panel();
        return Task::none();
    }

    let token = ctx.session.begin_request();
    let backend = ctx.backend.clone();
    let request = ctx.request.clone();
    Task::perform(
        async move { backend.open(request).await },
        move |result| Message::CameraOpened { token, result },
    )
}

/// Handles the completed device request. Completions for a superseded
/// request are discarded (their stream is stopped by the session).
pub fn handle_camera_opened(
    ctx: &mut UpdateContext<'_>,
    token: RequestToken,
    result: Result<CameraStream, CameraError>,
) -> Task<Message> {
    match result {
        Ok(stream) => {
            if ctx.session.activate(token, stream) {
                ctx.session.begin_scanning();
            }
        }
        Err(error) => {
            if ctx.session.fail_request(token) {
                eprintln!("Error accessing camera: {}", error);
                ctx.scanner.set_error_status(error.i18n_key());
                ctx.scanner.show_permission_panel();
            }
        }
    }
    Task::none()
}

/// Handles a scan tick. The detection tick schedules the delayed redirect.
pub fn handle_scan_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.session.record_tick() {
        TickOutcome::Continue { .. } | TickOutcome::Ignored => Task::none(),
        TickOutcome::Detected(token) => Task::perform(
            async move { tokio::time::sleep(REDIRECT_DELAY).await },
            move |()| Message::RedirectDelayElapsed(token),
        ),
    }
}

/// Handles the elapsed post-detection delay. A stale delay (the session was
/// stopped or restarted in the meantime) is discarded, so navigation happens
/// exactly once per detection.
pub fn handle_redirect_delay(
    ctx: &mut UpdateContext<'_>,
    token: RedirectToken,
) -> Task<Message> {
    if ctx.session.redirect_due(token) {
        stop_session(ctx);
        *ctx.screen = Screen::Welcome(SignInMethod::Qr);
    }
    Task::none()
}

/// Stops the session and resets the status line to the idle prompt. The
/// permission panel keeps its visibility, matching the scanner's behavior of
/// only revealing or hiding it on start attempts.
fn stop_session(ctx: &mut UpdateContext<'_>) {
    ctx.session.stop();
    ctx.scanner.clear_error_status();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CameraConfig;
    use crate::session::Phase;

    struct Harness {
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

    impl Harness {
        fn new(camera: CameraConfig) -> Self {
            let camera = CameraConfig {
                request_latency_ms: Some(0),
                ..camera
            };
            Self {
                screen: Screen::Login,
                active_tab: AuthTab::Email,
                email_form: email_form::State::new(),
                agreement: agreement::State::new(),
                scanner: scanner::State::new(),
                collapsible: collapsible::State::new(),
                session: Session::new(),
                backend: Backend::from_config(&camera),
                request: StreamRequest::from_config(&camera),
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                screen: &mut self.screen,
                active_tab: &mut self.active_tab,
                email_form: &mut self.email_form,
                agreement: &mut self.agreement,
                scanner: &mut self.scanner,
                collapsible: &mut self.collapsible,
                session: &mut self.session,
                backend: &self.backend,
                request: &self.request,
            }
        }

        /// Runs the start path and completes the device request inline.
        /// Tasks cannot be executed outside the Iced runtime, so the
        /// completion is driven by opening against the backend directly.
        fn start_and_complete(&mut self) {
            let _task = start_camera(&mut self.ctx());
            assert_eq!(self.session.phase(), Phase::Requesting);

            let token = self.session.begin_request();
            let backend = self.backend.clone();
            let request = self.request.clone();
            let result = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .expect("runtime")
                .block_on(backend.open(request));
            let _task = handle_camera_opened(&mut self.ctx(), token, result);
        }
    }

    #[test]
    fn unsupported_backend_blocks_start_without_request() {
        let mut harness = Harness::new(CameraConfig {
            supported: Some(false),
            ..CameraConfig::default()
        });

        let _task = start_camera(&mut harness.ctx());

        assert!(harness.session.is_idle());
        assert!(harness.scanner.permission_panel_visible());
        assert_eq!(
            harness.scanner.status_key(harness.session.status_key()),
            "scanner-status-unsupported"
        );
    }

    #[test]
    fn denied_request_pins_denied_status_and_panel() {
        let mut harness = Harness::new(CameraConfig {
            failure: Some("permission-denied".to_string()),
            ..CameraConfig::default()
        });

        harness.start_and_complete();

        assert!(harness.session.is_idle());
        assert!(!harness.session.has_stream());
        assert!(harness.scanner.permission_panel_visible());
        assert_eq!(
            harness.scanner.status_key(harness.session.status_key()),
            "scanner-status-denied"
        );
    }

    #[test]
    fn successful_start_enters_scanning() {
        let mut harness = Harness::new(CameraConfig::default());
        harness.start_and_complete();

        assert!(harness.session.is_scanning());
        assert!(harness.session.has_stream());
        assert_eq!(
            harness.scanner.status_key(harness.session.status_key()),
            "scanner-status-active"
        );
    }

    #[test]
    fn three_ticks_reach_detection() {
        let mut harness = Harness::new(CameraConfig::default());
        harness.start_and_complete();

        let _ = handle_scan_tick(&mut harness.ctx());
        let _ = handle_scan_tick(&mut harness.ctx());
        let _ = handle_scan_tick(&mut harness.ctx());

        assert_eq!(harness.session.phase(), Phase::Redirecting);
        assert_eq!(
            harness.scanner.status_key(harness.session.status_key()),
            "scanner-status-detected"
        );

        // A straggler tick after detection is dropped.
        assert_eq!(harness.session.record_tick(), TickOutcome::Ignored);
    }

    #[test]
    fn stale_redirect_does_not_navigate() {
        let mut harness = Harness::new(CameraConfig::default());
        harness.start_and_complete();

        harness.session.record_tick();
        harness.session.record_tick();
        let token = match harness.session.record_tick() {
            TickOutcome::Detected(token) => token,
            other => panic!("expected detection, got {:?}", other),
        };

        // Manual stop before the delay elapses.
        harness.session.stop();
        let _ = handle_redirect_delay(&mut harness.ctx(), token);

        assert_eq!(harness.screen, Screen::Login);
        assert!(harness.session.is_idle());
    }

    #[test]
    fn current_redirect_navigates_to_welcome() {
        let mut harness = Harness::new(CameraConfig::default());
        harness.start_and_complete();

        harness.session.record_tick();
        harness.session.record_tick();
        let token = match harness.session.record_tick() {
            TickOutcome::Detected(token) => token,
            other => panic!("expected detection, got {:?}", other),
        };

        let _ = handle_redirect_delay(&mut harness.ctx(), token);

        assert_eq!(harness.screen, Screen::Welcome(SignInMethod::Qr));
        assert!(harness.session.is_idle());
        assert!(!harness.session.has_stream());
    }

    #[test]
    fn leaving_qr_tab_tears_the_session_down() {
        let mut harness = Harness::new(CameraConfig::default());
        harness.active_tab = AuthTab::Qr;
        harness.start_and_complete();
        assert!(harness.session.has_stream());

        let _ = handle_tabs_message(
            &mut harness.ctx(),
            tabs::Message::Select(AuthTab::Email),
        );

        assert_eq!(harness.active_tab, AuthTab::Email);
        assert!(harness.session.is_idle());
        assert!(!harness.session.has_stream());
    }

    #[test]
    fn entering_qr_tab_on_unsupported_backend_warns() {
        let mut harness = Harness::new(CameraConfig {
            supported: Some(false),
            ..CameraConfig::default()
        });

        let _ = handle_tabs_message(&mut harness.ctx(), tabs::Message::Select(AuthTab::Qr));

        assert!(harness.scanner.permission_panel_visible());
        assert_eq!(
            harness.scanner.status_key(harness.session.status_key()),
            "scanner-status-unsupported-tab"
        );
    }

    #[test]
    fn camera_icon_toggles_stop_while_streaming() {
        let mut harness = Harness::new(CameraConfig::default());
        harness.start_and_complete();
        assert!(harness.session.has_stream());

        let _ = handle_scanner_message(&mut harness.ctx(), scanner::Message::CameraIconPressed);

        assert!(harness.session.is_idle());
        assert!(!harness.session.has_stream());
        assert_eq!(
            harness.scanner.status_key(harness.session.status_key()),
            "scanner-status-idle"
        );
    }

    #[test]
    fn email_sign_in_requires_agreement() {
        let mut harness = Harness::new(CameraConfig::default());

        let _ = handle_email_form_message(&mut harness.ctx(), email_form::Message::Submit);
        assert_eq!(harness.screen, Screen::Login);

        let _ = handle_email_form_message(
            &mut harness.ctx(),
            email_form::Message::AgreementToggled(true),
        );
        let _ = handle_email_form_message(&mut harness.ctx(), email_form::Message::Submit);
        assert_eq!(harness.screen, Screen::Welcome(SignInMethod::Email));
    }

    #[test]
    fn modal_agree_enables_sign_in() {
        let mut harness = Harness::new(CameraConfig::default());

        let _ = handle_email_form_message(
            &mut harness.ctx(),
            email_form::Message::ShowAgreement,
        );
        assert!(harness.agreement.is_visible());

        let _ = handle_agreement_message(&mut harness.ctx(), agreement::Message::Agree);
        assert!(!harness.agreement.is_visible());
        assert!(harness.email_form.has_agreed());
    }

    #[test]
    fn modal_cancel_leaves_agreement_unset() {
        let mut harness = Harness::new(CameraConfig::default());

        let _ = handle_email_form_message(
            &mut harness.ctx(),
            email_form::Message::ShowAgreement,
        );
        let _ = handle_agreement_message(&mut harness.ctx(), agreement::Message::Cancel);

        assert!(!harness.agreement.is_visible());
        assert!(!harness.email_form.has_agreed());
    }

    #[test]
    fn sign_out_returns_to_a_fresh_login_screen() {
        let mut harness = Harness::new(CameraConfig::default());
        harness.screen = Screen::Welcome(SignInMethod::Email);
        harness.email_form.accept_agreement();

        let _ = handle_welcome_message(&mut harness.ctx(), welcome::Message::SignOut);

        assert_eq!(harness.screen, Screen::Login);
        assert_eq!(harness.active_tab, AuthTab::Email);
        assert!(!harness.email_form.has_agreed());
        assert!(harness.session.is_idle());
    }
}
