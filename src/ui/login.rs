//! Login and registration screen.

use eframe::egui::{self, RichText, TextEdit, Ui};
use egui_phosphor::regular::{EYE, EYE_SLASH, GRADUATION_CAP};

use crate::models::Role;

use super::app::{App, LoginMode};
use super::components::{card_frame, colors, primary_button};

/// Show the login screen.
pub fn show(app: &mut App, ui: &mut Ui) {
    let mut submit = false;

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(RichText::new(GRADUATION_CAP).size(56.0).color(colors::PRIMARY));
            ui.add_space(8.0);
            ui.label(RichText::new("Campus Attendance").size(28.0).strong());
            ui.label(RichText::new("Smart attendance for modern campuses").size(14.0).weak());
            ui.add_space(24.0);
        });

        card_frame(ui).show(ui, |ui| {
            ui.set_width(ui.available_width());

            // Login / Sign up toggle
            ui.columns(2, |columns| {
                let modes = [(LoginMode::Login, "Login"), (LoginMode::Register, "Sign Up")];
                for (column, (mode, text)) in columns.iter_mut().zip(modes) {
                    column.vertical_centered_justified(|ui| {
                        if ui.selectable_label(app.login_mode == mode, text).clicked() {
                            app.login_mode = mode;
                        }
                    });
                }
            });

            ui.add_space(16.0);

            // Role selector
            ui.label(RichText::new("I am a").strong());
            ui.horizontal(|ui| {
                for role in Role::ALL {
                    ui.selectable_value(&mut app.login_form.role, role, role.label());
                }
            });

            ui.add_space(12.0);

            if app.login_mode == LoginMode::Register {
                labeled_input(ui, "Full Name", &mut app.login_form.name, "Enter your full name");
                if app.login_form.role == Role::Student {
                    labeled_input(ui, "Student ID", &mut app.login_form.student_id, "Enter your student ID");
                }
            }

            labeled_input(ui, "Email", &mut app.login_form.email, "Enter your email");

            ui.label("Password");
            ui.horizontal(|ui| {
                let eye = if app.show_password { EYE_SLASH } else { EYE };
                let width = ui.available_width() - 36.0;
                let response = ui.add(
                    TextEdit::singleline(&mut app.login_form.password)
                        .password(!app.show_password)
                        .hint_text("Enter your password")
                        .desired_width(width),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
                if ui.button(eye).clicked() {
                    app.show_password = !app.show_password;
                }
            });

            ui.add_space(20.0);

            let label = match app.login_mode {
                LoginMode::Login => "Login",
                LoginMode::Register => "Create Account",
            };
            if primary_button(ui, label, colors::PRIMARY).clicked() {
                submit = true;
            }
        });

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Demo: any email and password signs in with the selected role.").small().weak());
        });
    });

    if submit {
        match app.login_mode {
            LoginMode::Login => app.submit_login(),
            LoginMode::Register => app.submit_register(),
        }
    }
}

fn labeled_input(ui: &mut Ui, label: &str, value: &mut String, hint: &str) {
    ui.label(label);
    ui.add(
        TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(8.0);
}
