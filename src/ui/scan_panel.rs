//! QR check-in screen with a simulated camera feed.

use eframe::egui::{self, Color32, RichText, Sense, Stroke, TextEdit, Ui};
use egui_phosphor::regular::{CAMERA_SLASH, FLASHLIGHT, LIGHTNING, QR_CODE};

use crate::checkin::{CheckinKind, CheckinState, PermissionStatus};

use super::app::App;
use super::components::{back_button, colors, primary_button};

/// Payloads the simulated camera can be pointed at.
const SAMPLE_PAYLOADS: [(&str, &str); 3] = [
    ("Math class", "attendance:MATH101"),
    ("Lecture hall", "class:HALL-B"),
    ("Cafeteria menu", "menu:lunch"),
];

/// Show the QR scan screen.
///
/// Returns `true` if the back button was clicked.
pub fn show(app: &mut App, ui: &mut Ui) -> bool {
    let mut go_back = false;

    ui.horizontal(|ui| {
        if back_button(ui) {
            go_back = true;
        }
        ui.label(RichText::new("Scan QR Code").size(18.0).strong().color(Color32::WHITE));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let icon = if app.scan.torch_on { LIGHTNING } else { FLASHLIGHT };
            let color = if app.scan.torch_on {
                colors::WARNING
            } else {
                Color32::WHITE
            };
            if ui
                .add(egui::Button::new(RichText::new(icon).size(20.0).color(color)).frame(false))
                .clicked()
            {
                app.scan.torch_on = !app.scan.torch_on;
            }
        });
    });

    ui.add_space(12.0);

    match app.scan.gate.status() {
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
                    RichText::new("Please grant camera permission to scan QR codes for attendance.")
                        .color(Color32::GRAY),
                );
                ui.add_space(16.0);
            });
            if primary_button(ui, "Grant Permission", colors::PRIMARY).clicked() {
                app.request_camera(CheckinKind::Qr);
            }
        }
        PermissionStatus::Granted => show_camera(app, ui),
    }

    go_back
}

fn show_camera(app: &mut App, ui: &mut Ui) {
    let progress = app.scan.machine.progress(tokio::time::Instant::now());
    let scanning = app.scan.machine.is_scanning();

    // Viewfinder
    let side = ui.available_width().min(280.0);
    let (outer, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), side + 20.0), Sense::hover());
    let frame = egui::Rect::from_center_size(outer.center(), egui::vec2(side, side));
    let painter = ui.painter_at(outer);

    if app.scan.torch_on {
        painter.rect_filled(frame, 8.0, Color32::from_white_alpha(24));
    }

    let corner = Stroke::new(4.0, colors::PRIMARY);
    let arm = side * 0.15;
    for (x, y, dx, dy) in [
        (frame.left(), frame.top(), arm, arm),
        (frame.right(), frame.top(), -arm, arm),
        (frame.left(), frame.bottom(), arm, -arm),
        (frame.right(), frame.bottom(), -arm, -arm),
    ] {
        painter.line_segment([egui::pos2(x, y), egui::pos2(x + dx, y)], corner);
        painter.line_segment([egui::pos2(x, y), egui::pos2(x, y + dy)], corner);
    }

    if scanning {
        // Sweep down and back up twice per scan
        let phase = (progress * 2.0).fract();
        let t = if phase < 0.5 { phase * 2.0 } else { 2.0 - phase * 2.0 };
        let y = frame.top() + frame.height() * t;
        painter.line_segment(
            [egui::pos2(frame.left() + 8.0, y), egui::pos2(frame.right() - 8.0, y)],
            Stroke::new(2.0, colors::SUCCESS),
        );
    } else {
        painter.text(
            frame.center(),
            egui::Align2::CENTER_CENTER,
            QR_CODE,
            egui::FontId::proportional(64.0),
            Color32::from_white_alpha(60),
        );
    }

    ui.vertical_centered(|ui| {
        let hint = if scanning {
            "Scanning..."
        } else {
            "Position the QR code within the frame"
        };
        ui.label(RichText::new(hint).color(Color32::WHITE));
    });

    ui.add_space(12.0);

    // Simulated camera input
    ui.add_enabled_ui(app.scan.machine.is_idle(), |ui| {
        ui.label(RichText::new("Camera sees").small().color(Color32::GRAY));
        ui.add(TextEdit::singleline(&mut app.scan.payload).desired_width(f32::INFINITY));
        ui.horizontal_wrapped(|ui| {
            for (label, payload) in SAMPLE_PAYLOADS {
                if ui.small_button(label).clicked() {
                    app.scan.payload = payload.to_string();
                }
            }
        });
    });

    ui.add_space(16.0);

    match app.scan.machine.state() {
        CheckinState::Idle => {
            if primary_button(ui, "Tap to Scan", colors::PRIMARY).clicked() {
                app.start_qr_scan();
            }
        }
        CheckinState::Scanning { .. } => {
            ui.add(egui::ProgressBar::new(progress).fill(colors::SUCCESS));
            ui.add_space(8.0);
            if primary_button(ui, "Cancel", colors::NEUTRAL).clicked() {
                app.scan.machine.cancel();
            }
        }
        CheckinState::Complete(_) => {
            if primary_button(ui, "Scan Again", colors::PRIMARY).clicked() {
                app.scan.machine.reset();
            }
        }
    }
}
