//! Face recognition check-in screen.

use eframe::egui::{self, Color32, RichText, Sense, Stroke, Ui};
use egui_phosphor::regular::{CAMERA_SLASH, CHECK_CIRCLE, USER_FOCUS};

use crate::checkin::{CheckinKind, CheckinState, PermissionStatus};

use super::app::App;
use super::components::{back_button, colors, primary_button};

const INSTRUCTIONS: [&str; 3] = [
    "Look directly at the camera",
    "Keep your face inside the oval",
    "Make sure your face is well lit",
];

/// Show the face recognition screen.
///
/// Returns `true` if the back button was clicked.
pub fn show(app: &mut App, ui: &mut Ui) -> bool {
    let mut go_back = false;

    ui.horizontal(|ui| {
        if back_button(ui) {
            go_back = true;
        }
        ui.label(RichText::new("Face Recognition").size(18.0).strong().color(Color32::WHITE));
    });

    ui.add_space(12.0);

    match app.face.gate.status() {
        PermissionStatus::Pending => {
            ui.vertical_centered(|ui| {
                ui.add_space(80.0);
                ui.spinner();
                ui.label(RichText::new("Requesting camera permission...").color(Color32::WHITE));
            });
        }
        PermissionStatus::Denied => {
            ui.vertical_centered(|ui| {
                ui.add_space(80.0);
                ui.label(RichText::new(CAMERA_SLASH).size(56.0).color(Color32::GRAY));
                ui.label(RichText::new("Camera access required").size(18.0).color(Color32::WHITE));
                ui.label(
                    RichText::new("Please grant camera permission to use face recognition.").color(Color32::GRAY),
                );
                ui.add_space(16.0);
            });
            if primary_button(ui, "Grant Permission", colors::PRIMARY).clicked() {
                app.request_camera(CheckinKind::Face);
            }
        }
        PermissionStatus::Granted => show_camera(app, ui),
    }

    go_back
}

fn show_camera(app: &mut App, ui: &mut Ui) {
    let progress = app.face.machine.progress(tokio::time::Instant::now());

    let (accent, status) = match app.face.machine.state() {
        CheckinState::Idle => (Color32::WHITE, "Position your face in the oval"),
        CheckinState::Scanning { .. } => (colors::PRIMARY, "Scanning face..."),
        CheckinState::Complete(outcome) if outcome.is_verified() => (colors::SUCCESS, "Face recognized!"),
        CheckinState::Complete(_) => (colors::ERROR, "Face not recognized"),
    };

    // Oval guide
    let height = 300.0_f32.min(ui.available_height() * 0.5);
    let (outer, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), height + 20.0), Sense::hover());
    let painter = ui.painter_at(outer);
    let radius = egui::vec2(height * 0.36, height * 0.48);
    painter.add(egui::epaint::EllipseShape::stroke(outer.center(), radius, Stroke::new(3.0, accent)));

    let icon = if app.face.machine.outcome().is_some_and(|o| o.is_verified()) {
        CHECK_CIRCLE
    } else {
        USER_FOCUS
    };
    painter.text(
        outer.center(),
        egui::Align2::CENTER_CENTER,
        icon,
        egui::FontId::proportional(72.0),
        accent.gamma_multiply(0.5),
    );

    ui.vertical_centered(|ui| {
        ui.label(RichText::new(status).size(16.0).color(accent));
    });

    ui.add_space(12.0);
    for line in INSTRUCTIONS {
        ui.label(RichText::new(format!("\u{2022} {line}")).color(Color32::GRAY));
    }
    ui.add_space(16.0);

    match app.face.machine.state() {
        CheckinState::Idle => {
            if primary_button(ui, "Start Face Scan", colors::PRIMARY).clicked() {
                app.start_face_scan();
            }
        }
        CheckinState::Scanning { .. } => {
            ui.add(egui::ProgressBar::new(progress).fill(colors::PRIMARY).show_percentage());
            ui.add_space(8.0);
            if primary_button(ui, "Cancel", colors::NEUTRAL).clicked() {
                app.face.machine.cancel();
            }
        }
        CheckinState::Complete(_) => {
            if primary_button(ui, "Scan Again", colors::PRIMARY).clicked() {
                app.face.machine.reset();
            }
        }
    }
}
