// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::camera::CameraStream;
use crate::error::CameraError;
use crate::session::{RedirectToken, RequestToken};
use crate::ui::agreement;
use crate::ui::collapsible;
use crate::ui::email_form;
use crate::ui::scanner;
use crate::ui::tabs;
use crate::ui::welcome;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Tabs(tabs::Message),
    EmailForm(email_form::Message),
    Agreement(agreement::Message),
    Scanner(scanner::Message),
    Collapsible(collapsible::Message),
    Welcome(welcome::Message),
    /// The async device access request completed.
    CameraOpened {
        token: RequestToken,
        result: Result<CameraStream, CameraError>,
    },
    /// Periodic 1 s tick while the session is scanning.
    ScanTick,
    /// The fixed post-detection delay elapsed.
    RedirectDelayElapsed(RedirectToken),
    /// Window close was requested; the session is torn down first.
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory of `.ftl` files replacing the embedded ones.
    pub i18n_dir: Option<String>,
    /// Optional forced outcome for device access requests
    /// (`permission-denied`, `not-found`, `busy`, or free-form text).
    pub camera_failure: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
