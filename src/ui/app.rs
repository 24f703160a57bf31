//! Main application UI.

use std::sync::Arc;

use chrono::{DateTime, Local};
use eframe::egui::{self, Align, Color32, Layout, RichText};
use tracing::{error, info, warn};

use crate::checkin::{
    CameraPermission, CheckinKind, CheckinMachine, CheckinOutcome, FaceVerifier, PermissionGate, QrVerifier,
    SimulatedCamera,
};
use crate::config::AppConfig;
use crate::export::{self, ExportFormat};
use crate::mock;
use crate::models::{AttendanceRecord, Period, Role, StatusFilter};
use crate::profile::ProfileEditor;
use crate::routes::Route;
use crate::session::{LoginForm, Session};

use super::components::colors;
use super::{analytics_panel, attendance_panel, face_panel, home, login, placeholder_panel, profile_panel, scan_panel};

/// Login screen mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginMode {
    #[default]
    Login,
    Register,
}

/// Log level for UI messages.
#[derive(Clone, Copy, Debug)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Log entry for display in the UI.
#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub level: LogLevel,
}

/// What the alert's confirm button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertAction {
    Dismiss,
    GoBack,
    RetryScan(CheckinKind),
    BackToLogin,
}

/// Modal message box.
#[derive(Debug, Clone)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub button: &'static str,
    pub action: AlertAction,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            button: "OK",
            action: AlertAction::Dismiss,
        }
    }

    pub fn with_action(mut self, button: &'static str, action: AlertAction) -> Self {
        self.button = button;
        self.action = action;
        self
    }
}

/// State of the QR scan screen.
pub struct ScanScreen {
    pub gate: PermissionGate,
    pub machine: CheckinMachine,
    /// Text the simulated camera "sees".
    pub payload: String,
    pub torch_on: bool,
}

/// State of the face recognition screen.
pub struct FaceScreen {
    pub gate: PermissionGate,
    pub machine: CheckinMachine,
}

/// Main application state.
pub struct App {
    pub rt: tokio::runtime::Runtime,
    pub config: AppConfig,
    camera: Arc<dyn CameraPermission>,

    // Session and navigation
    pub session: Session,
    route: Route,
    back_stack: Vec<Route>,

    // Login
    pub login_form: LoginForm,
    pub login_mode: LoginMode,
    pub show_password: bool,

    // Data
    pub records: Vec<AttendanceRecord>,

    // Screen state
    pub history_filter: StatusFilter,
    pub analytics_period: Period,
    pub profile_editor: ProfileEditor,
    pub scan: ScanScreen,
    pub face: FaceScreen,

    // Log messages
    pub log_messages: Vec<LogEntry>,

    // Dialogs
    pub alert: Option<Alert>,
    pub confirm_logout: bool,
    pub config_warning: Option<String>,
}

impl App {
    pub fn new(config: AppConfig, rt: tokio::runtime::Runtime) -> Self {
        let camera: Arc<dyn CameraPermission> = Arc::new(SimulatedCamera {
            granted: config.camera.permission_granted,
        });
        let scan = ScanScreen {
            gate: PermissionGate::new(),
            machine: CheckinMachine::new(CheckinKind::Qr, &config.checkin),
            payload: "attendance:MATH101".to_string(),
            torch_on: false,
        };
        let face = FaceScreen {
            gate: PermissionGate::new(),
            machine: CheckinMachine::new(CheckinKind::Face, &config.checkin),
        };

        Self {
            rt,
            session: Session::new(config.session.default_name.clone()),
            config,
            camera,
            route: Route::Login,
            back_stack: Vec::new(),
            login_form: LoginForm::default(),
            login_mode: LoginMode::Login,
            show_password: false,
            records: mock::attendance_records(),
            history_filter: StatusFilter::All,
            analytics_period: Period::Week,
            profile_editor: ProfileEditor::new(),
            scan,
            face,
            log_messages: Vec::new(),
            alert: None,
            confirm_logout: false,
            config_warning: None,
        }
    }

    /// Show a config problem banner on first frame.
    pub fn with_config_warning(mut self, warning: Option<String>) -> Self {
        self.config_warning = warning;
        self
    }

    /// Log a message to the UI log.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.log_messages.push(LogEntry {
            timestamp: Local::now(),
            message: message.into(),
            level,
        });

        // Keep only last 100 messages
        if self.log_messages.len() > 100 {
            self.log_messages.remove(0);
        }
    }

    pub fn log_info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn log_success(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Success, message);
    }

    pub fn log_warning(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    pub fn log_error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Push a route onto the navigation stack.
    pub fn navigate(&mut self, route: Route) {
        let target = route.guard(self.session.is_authenticated());
        if target == self.route {
            return;
        }
        self.back_stack.push(self.route);
        self.enter(target);
    }

    /// Switch tab, dropping any pushed screens.
    pub fn switch_tab(&mut self, route: Route) {
        self.back_stack.clear();
        let target = route.guard(self.session.is_authenticated());
        if target != self.route {
            self.enter(target);
        }
    }

    /// Pop back to the previous screen (home if there is none).
    pub fn go_back(&mut self) {
        let previous = self.back_stack.pop().unwrap_or(Route::Home);
        let target = previous.guard(self.session.is_authenticated());
        self.enter(target);
    }

    fn enter(&mut self, target: Route) {
        self.leave(self.route);
        info!("Navigate {} -> {}", self.route, target);
        self.route = target;

        match target {
            Route::AttendanceScan => {
                self.scan.machine.reset();
                self.scan.torch_on = false;
                self.request_camera(CheckinKind::Qr);
            }
            Route::AttendanceFace => {
                self.face.machine.reset();
                self.request_camera(CheckinKind::Face);
            }
            _ => {}
        }
    }

    /// Tear down per-screen work when a screen is left.
    fn leave(&mut self, route: Route) {
        match route {
            Route::AttendanceScan => {
                self.scan.machine.cancel();
            }
            Route::AttendanceFace => {
                self.face.machine.cancel();
            }
            _ => {}
        }
    }

    /// Submit the login form.
    pub fn submit_login(&mut self) {
        match self.session.login(&self.login_form) {
            Ok(user) => {
                let message = format!("Signed in as {} ({})", user.name, user.role);
                self.log_success(message);
                self.login_form.reset();
                self.show_password = false;
                self.back_stack.clear();
                self.enter(Route::Home);
            }
            Err(e) => {
                warn!("Login rejected: {}", e);
                self.alert = Some(Alert::new("Error", "Please fill in all fields"));
            }
        }
    }

    /// Skip the login screen with a demo account.
    pub fn sign_in_demo(mut self, role: Role, email: Option<String>) -> Self {
        self.login_form = LoginForm {
            email: email.unwrap_or_else(|| format!("{}@demo.com", role.id())),
            password: "demo".to_string(),
            role,
            ..Default::default()
        };
        self.submit_login();
        self
    }

    /// Submit the register form.
    pub fn submit_register(&mut self) {
        match self.session.register(&self.login_form) {
            Ok(message) => {
                self.log_success(format!("Registered {}", self.login_form.email.trim()));
                self.alert = Some(Alert::new("Success", message).with_action("OK", AlertAction::BackToLogin));
            }
            Err(e) => {
                warn!("Registration rejected: {}", e);
                self.alert = Some(Alert::new("Error", "Please fill in all fields"));
            }
        }
    }

    /// Sign out and return to the login screen.
    pub fn logout(&mut self) {
        self.profile_editor.cancel();
        self.scan.machine.cancel();
        self.face.machine.cancel();
        self.session.logout();
        self.back_stack.clear();
        self.log_info("Signed out");
        self.enter(Route::Login);
    }

    /// Open the profile editor on the current user.
    pub fn begin_profile_edit(&mut self) {
        let result = match self.session.require_user() {
            Ok(user) => self.profile_editor.enter_edit(user),
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            error!("Cannot edit profile: {}", e);
            self.log_error(e.to_string());
        }
    }

    /// Commit the profile draft.
    pub fn save_profile(&mut self) {
        match self.profile_editor.save(&mut self.session) {
            Ok(()) => {
                self.log_success("Profile updated");
                self.alert = Some(Alert::new("Success", "Profile updated successfully!"));
            }
            Err(e) => {
                error!("Profile save failed: {}", e);
                self.log_error(format!("Profile save failed: {e}"));
                self.alert = Some(Alert::new("Error", e.to_string()));
            }
        }
    }

    /// Settings entries that have no screen yet.
    pub fn show_coming_soon(&mut self, title: &str) {
        self.alert = Some(Alert::new(title, format!("{title} will be available in a future update.")));
    }

    /// Ask for camera access again after a denial.
    pub fn request_camera(&mut self, kind: CheckinKind) {
        let handle = self.rt.handle().clone();
        let delay = self.config.camera.permission_delay();
        let gate = match kind {
            CheckinKind::Qr => &mut self.scan.gate,
            CheckinKind::Face => &mut self.face.gate,
        };
        gate.request(&handle, self.camera.clone(), delay);
    }

    /// Start the QR check-in with the current simulated payload.
    pub fn start_qr_scan(&mut self) {
        let handle = self.rt.handle().clone();
        let verifier = QrVerifier::new(self.scan.payload.clone());
        if let Err(e) = self.scan.machine.start(&handle, self.scan.gate.status(), verifier) {
            warn!("QR scan not started: {}", e);
            self.log_warning(e.to_string());
        }
    }

    /// Start the face check-in.
    pub fn start_face_scan(&mut self) {
        let handle = self.rt.handle().clone();
        if let Err(e) = self.face.machine.start(&handle, self.face.gate.status(), FaceVerifier) {
            warn!("Face scan not started: {}", e);
            self.log_warning(e.to_string());
        }
    }

    /// Export the filtered attendance history.
    pub fn export_history(&mut self, format: ExportFormat) {
        let records: Vec<AttendanceRecord> = crate::history::filter_records(&self.records, self.history_filter)
            .into_iter()
            .cloned()
            .collect();
        let default_name = export::generate_export_filename("attendance", format);

        let Some(path) = export::show_save_dialog(&default_name, format) else {
            return;
        };

        match export::export_attendance_history(&records, &path, format) {
            Ok(()) => {
                self.log_success(format!("Exported {} records to {}", records.len(), path.display()));
                self.alert = Some(Alert::new("Export Complete", format!("Saved to {}", path.display())));
            }
            Err(e) => {
                error!("Export failed: {}", e);
                self.log_error(format!("Export failed: {e}"));
                self.alert = Some(Alert::new("Export Failed", e.to_string()));
            }
        }
    }

    /// Poll async operation results.
    fn poll_async_results(&mut self) {
        self.scan.gate.poll();
        self.face.gate.poll();

        match self.scan.machine.poll() {
            Ok(Some(outcome)) => self.on_checkin_outcome(CheckinKind::Qr, outcome),
            Ok(None) => {}
            Err(e) => self.on_checkin_failure(e.to_string()),
        }

        match self.face.machine.poll() {
            Ok(Some(outcome)) => self.on_checkin_outcome(CheckinKind::Face, outcome),
            Ok(None) => {}
            Err(e) => self.on_checkin_failure(e.to_string()),
        }
    }

    fn on_checkin_outcome(&mut self, kind: CheckinKind, outcome: CheckinOutcome) {
        let alert = match (kind, outcome) {
            (CheckinKind::Qr, CheckinOutcome::Verified { subject }) => {
                self.log_success(format!("Marked present in {subject} (QR)"));
                Alert::new(
                    "Attendance Marked!",
                    format!("You have been successfully marked present for {subject} class."),
                )
                .with_action("OK", AlertAction::GoBack)
            }
            (CheckinKind::Face, CheckinOutcome::Verified { subject }) => {
                self.log_success(format!("Marked present in {subject} (face)"));
                Alert::new(
                    "Face Recognition Successful!",
                    format!("You have been successfully marked present for {subject} class."),
                )
                .with_action("OK", AlertAction::GoBack)
            }
            (CheckinKind::Qr, CheckinOutcome::NoMatch { reason }) => {
                self.log_warning("Invalid QR code scanned");
                Alert::new("Invalid QR Code", reason).with_action("Try Again", AlertAction::RetryScan(kind))
            }
            (CheckinKind::Face, CheckinOutcome::NoMatch { reason }) => {
                self.log_warning("Face not recognised");
                Alert::new("Face Not Recognized", reason).with_action("Try Again", AlertAction::RetryScan(kind))
            }
            (_, CheckinOutcome::TimedOut) => {
                self.log_warning("Check-in timed out");
                Alert::new("Timed Out", "Verification took too long. Please try again.")
                    .with_action("Try Again", AlertAction::RetryScan(kind))
            }
        };
        self.alert = Some(alert);
    }

    fn on_checkin_failure(&mut self, message: String) {
        error!("Check-in failed: {}", message);
        self.log_error(message.clone());
        self.alert = Some(Alert::new("Error", message));
    }

    fn apply_alert_action(&mut self, action: AlertAction) {
        match action {
            AlertAction::Dismiss => {}
            AlertAction::GoBack => self.go_back(),
            AlertAction::RetryScan(CheckinKind::Qr) => self.scan.machine.reset(),
            AlertAction::RetryScan(CheckinKind::Face) => self.face.machine.reset(),
            AlertAction::BackToLogin => self.login_mode = LoginMode::Login,
        }
    }

    /// Render the bottom tab bar.
    fn show_tab_bar(&mut self, ctx: &egui::Context) {
        use egui_phosphor::regular::{CALENDAR, CHART_BAR, HOUSE, USER};

        egui::TopBottomPanel::bottom("tab_bar")
            .min_height(56.0)
            .show(ctx, |ui| {
                ui.columns(Route::TABS.len(), |columns| {
                    for (column, tab) in columns.iter_mut().zip(Route::TABS) {
                        let icon = match tab {
                            Route::Home => HOUSE,
                            Route::Attendance => CALENDAR,
                            Route::Analytics => CHART_BAR,
                            _ => USER,
                        };
                        let color = if self.route == tab {
                            colors::PRIMARY
                        } else {
                            colors::NEUTRAL
                        };
                        column.vertical_centered(|ui| {
                            let text = RichText::new(format!("{icon}\n{}", tab.title())).size(12.0).color(color);
                            if ui.add(egui::Button::new(text).frame(false)).clicked() {
                                self.switch_tab(tab);
                            }
                        });
                    }
                });
            });
    }

    /// Render modal dialogs.
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(alert) = self.alert.clone() {
            let mut chosen = None;
            egui::Window::new(alert.title.as_str())
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.add_space(6.0);
                    ui.label(alert.message.as_str());
                    ui.add_space(12.0);
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button(alert.button).clicked() {
                            chosen = Some(alert.action);
                        }
                    });
                });
            if let Some(action) = chosen {
                self.alert = None;
                self.apply_alert_action(action);
            }
        }

        if self.confirm_logout {
            egui::Window::new("Logout")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label("Are you sure you want to logout?");
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        if ui.button("Cancel").clicked() {
                            self.confirm_logout = false;
                        }
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            if ui
                                .button(RichText::new("Logout").color(colors::ERROR))
                                .clicked()
                            {
                                self.confirm_logout = false;
                                self.logout();
                            }
                        });
                    });
                });
        }
    }

    /// Config problem banner.
    fn show_config_warning(&mut self, ctx: &egui::Context) {
        let Some(warning) = self.config_warning.clone() else {
            return;
        };
        egui::TopBottomPanel::top("config_warning").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::WARNING, format!("Config ignored: {warning}"));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.small_button("Dismiss").clicked() {
                        self.config_warning = None;
                    }
                });
            });
        });
    }

    fn needs_repaint(&self) -> bool {
        self.scan.gate.is_pending()
            || self.face.gate.is_pending()
            || self.scan.machine.is_scanning()
            || self.face.machine.is_scanning()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll async results
        self.poll_async_results();

        // Animate scan line and progress while work is pending
        if self.needs_repaint() || matches!(self.route, Route::AttendanceScan | Route::AttendanceFace) {
            ctx.request_repaint();
        }

        // A logout elsewhere must never leave a protected screen visible.
        let guarded = self.route.guard(self.session.is_authenticated());
        if guarded != self.route {
            self.back_stack.clear();
            self.enter(guarded);
        }

        self.show_config_warning(ctx);

        if self.route.is_tab() {
            self.show_tab_bar(ctx);
        }

        self.show_dialogs(ctx);

        let fill = if self.route.is_checkin() {
            Color32::BLACK
        } else {
            ctx.style().visuals.panel_fill
        };

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(fill))
            .show(ctx, |ui| match self.route {
                Route::Login => login::show(self, ui),
                Route::Home => {
                    if let Some(next) = home::show(self, ui) {
                        self.navigate(next);
                    }
                }
                Route::Attendance => {
                    if let Some(next) = attendance_panel::show(self, ui) {
                        self.navigate(next);
                    }
                }
                Route::Analytics => analytics_panel::show(self, ui),
                Route::Profile => profile_panel::show(self, ui),
                Route::Admin | Route::Faculty => {
                    if placeholder_panel::show(self.route, ui) {
                        self.go_back();
                    }
                }
                Route::AttendanceScan => {
                    if scan_panel::show(self, ui) {
                        self.go_back();
                    }
                }
                Route::AttendanceFace => {
                    if face_panel::show(self, ui) {
                        self.go_back();
                    }
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let rt = tokio::runtime::Runtime::new().unwrap();
        App::new(AppConfig::default(), rt)
    }

    /// App with check-in timings short enough to run for real.
    fn fast_app() -> App {
        let mut config = AppConfig::default();
        config.checkin.scan_duration_ms = 10;
        config.checkin.verify_timeout_ms = 50;
        config.camera.permission_delay_ms = 0;
        let rt = tokio::runtime::Runtime::new().unwrap();
        App::new(config, rt)
    }

    /// Poll the app like the frame loop does until `done` holds.
    fn pump(app: &mut App, done: impl Fn(&App) -> bool) {
        for _ in 0..400 {
            app.poll_async_results();
            if done(app) {
                return;
            }
            std::thread::sleep(std::time::Duration::from_millis(5));
        }
        panic!("app did not reach the expected state");
    }

    fn open_checkin(app: &mut App, route: Route) {
        login(app, Role::Student);
        app.switch_tab(Route::Attendance);
        app.navigate(route);
        let kind = if route == Route::AttendanceScan {
            CheckinKind::Qr
        } else {
            CheckinKind::Face
        };
        pump(app, |a| {
            let gate = match kind {
                CheckinKind::Qr => &a.scan.gate,
                CheckinKind::Face => &a.face.gate,
            };
            gate.status() == crate::checkin::PermissionStatus::Granted
        });
    }

    struct Stalled;

    impl crate::checkin::Verifier for Stalled {
        async fn verify(self) -> CheckinOutcome {
            std::future::pending().await
        }
    }

    fn login(app: &mut App, role: Role) {
        app.login_form = LoginForm {
            email: format!("{}@demo.com", role.id()),
            password: "password".to_string(),
            role,
            ..Default::default()
        };
        app.submit_login();
    }

    #[test]
    fn test_starts_on_login_and_guards_routes() {
        let mut app = app();
        assert_eq!(app.route(), Route::Login);
        app.navigate(Route::Profile);
        assert_eq!(app.route(), Route::Login);
    }

    #[test]
    fn test_login_goes_home() {
        let mut app = app();
        login(&mut app, Role::Faculty);
        assert_eq!(app.route(), Route::Home);
        assert_eq!(app.session.role(), Some(Role::Faculty));
        assert!(app.login_form.email.is_empty());
    }

    #[test]
    fn test_empty_login_shows_error() {
        let mut app = app();
        app.submit_login();
        assert_eq!(app.route(), Route::Login);
        assert_eq!(app.alert.as_ref().map(|a| a.title.as_str()), Some("Error"));
    }

    #[test]
    fn test_back_returns_to_previous_screen() {
        let mut app = app();
        login(&mut app, Role::Student);
        app.switch_tab(Route::Attendance);
        app.navigate(Route::AttendanceFace);
        assert_eq!(app.route(), Route::AttendanceFace);

        app.go_back();
        assert_eq!(app.route(), Route::Attendance);
        app.go_back();
        assert_eq!(app.route(), Route::Home);
    }

    #[test]
    fn test_leaving_checkin_cancels_scan() {
        let mut app = app();
        login(&mut app, Role::Student);
        app.navigate(Route::AttendanceFace);

        let handle = app.rt.handle().clone();
        app.face
            .machine
            .start(&handle, crate::checkin::PermissionStatus::Granted, FaceVerifier)
            .unwrap();
        assert!(app.face.machine.is_scanning());

        app.go_back();
        assert!(app.face.machine.is_idle());
    }

    #[test]
    fn test_logout_returns_to_login() {
        let mut app = app();
        login(&mut app, Role::Admin);
        app.switch_tab(Route::Profile);
        app.begin_profile_edit();
        assert!(app.profile_editor.is_editing());

        app.logout();
        assert_eq!(app.route(), Route::Login);
        assert!(!app.session.is_authenticated());
        assert!(!app.profile_editor.is_editing());
    }

    #[test]
    fn test_register_alert_returns_to_login_mode() {
        let mut app = app();
        app.login_mode = LoginMode::Register;
        app.login_form = LoginForm {
            email: "new@demo.com".to_string(),
            password: "password".to_string(),
            name: "New Student".to_string(),
            ..Default::default()
        };
        app.submit_register();
        let action = app.alert.as_ref().map(|a| a.action);
        assert_eq!(action, Some(AlertAction::BackToLogin));

        app.apply_alert_action(AlertAction::BackToLogin);
        assert_eq!(app.login_mode, LoginMode::Login);
        assert!(!app.session.is_authenticated());
    }

    #[test]
    fn test_idle_app_does_not_repaint_continuously() {
        let mut app = app();
        assert!(!app.needs_repaint());
        login(&mut app, Role::Student);
        app.switch_tab(Route::Analytics);
        assert!(!app.needs_repaint());
    }

    #[test]
    fn test_repaint_only_while_permission_in_flight() {
        let mut app = fast_app();
        login(&mut app, Role::Student);
        app.navigate(Route::AttendanceFace);
        assert!(app.needs_repaint());

        pump(&mut app, |a| !a.face.gate.is_pending());
        assert!(!app.needs_repaint());
    }

    #[test]
    fn test_qr_checkin_marks_attendance_and_goes_back() {
        let mut app = fast_app();
        open_checkin(&mut app, Route::AttendanceScan);

        app.scan.payload = "attendance:MATH101".to_string();
        app.start_qr_scan();
        assert!(app.scan.machine.is_scanning());
        pump(&mut app, |a| a.alert.is_some());

        let alert = app.alert.take().unwrap();
        assert_eq!(alert.title, "Attendance Marked!");
        assert!(alert.message.contains("Mathematics"));
        assert_eq!(alert.action, AlertAction::GoBack);

        app.apply_alert_action(alert.action);
        assert_eq!(app.route(), Route::Attendance);
    }

    #[test]
    fn test_rejected_qr_offers_retry_to_idle() {
        let mut app = fast_app();
        open_checkin(&mut app, Route::AttendanceScan);

        app.scan.payload = "menu:lunch".to_string();
        app.start_qr_scan();
        pump(&mut app, |a| a.alert.is_some());

        let alert = app.alert.take().unwrap();
        assert_eq!(alert.title, "Invalid QR Code");
        assert_eq!(alert.action, AlertAction::RetryScan(CheckinKind::Qr));
        assert!(matches!(
            app.scan.machine.outcome(),
            Some(CheckinOutcome::NoMatch { .. })
        ));

        app.apply_alert_action(alert.action);
        assert!(app.scan.machine.is_idle());
        assert_eq!(app.route(), Route::AttendanceScan);
    }

    #[test]
    fn test_face_checkin_marks_attendance() {
        let mut app = fast_app();
        open_checkin(&mut app, Route::AttendanceFace);

        app.start_face_scan();
        pump(&mut app, |a| a.alert.is_some());

        let alert = app.alert.take().unwrap();
        assert_eq!(alert.title, "Face Recognition Successful!");
        assert!(alert.message.contains("Physics"));
        assert_eq!(alert.action, AlertAction::GoBack);
    }

    #[test]
    fn test_stalled_verifier_times_out_with_retry() {
        let mut app = fast_app();
        open_checkin(&mut app, Route::AttendanceFace);

        let handle = app.rt.handle().clone();
        let status = app.face.gate.status();
        app.face.machine.start(&handle, status, Stalled).unwrap();
        pump(&mut app, |a| a.alert.is_some());

        let alert = app.alert.take().unwrap();
        assert_eq!(alert.title, "Timed Out");
        assert_eq!(alert.action, AlertAction::RetryScan(CheckinKind::Face));
        assert_eq!(app.face.machine.outcome(), Some(&CheckinOutcome::TimedOut));

        app.apply_alert_action(alert.action);
        assert!(app.face.machine.is_idle());
    }

    #[test]
    fn test_settings_entries_show_coming_soon() {
        let mut app = app();
        login(&mut app, Role::Faculty);
        for (_, label) in profile_panel::SETTINGS {
            app.show_coming_soon(label);
            let alert = app.alert.take().unwrap();
            assert_eq!(alert.title, label);
            assert_eq!(alert.action, AlertAction::Dismiss);
        }
    }
}
