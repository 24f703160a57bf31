//! Profile panel with inline editing and logout.

use eframe::egui::{self, RichText, ScrollArea, TextEdit, Ui};
use egui_phosphor::regular::{
    BELL, CARET_RIGHT, FLOPPY_DISK, GEAR, PENCIL_SIMPLE, SHIELD_CHECK, SIGN_OUT, USER_CIRCLE, X,
};

use crate::models::{ProfileField, ProfileSection};

use super::app::App;
use super::components::{colors, primary_button, screen_header, section, styled_button_with_icon};

/// Settings entries shown under the profile.
pub const SETTINGS: [(&str, &str); 3] = [
    (BELL, "Notifications"),
    (SHIELD_CHECK, "Privacy & Security"),
    (GEAR, "App Settings"),
];

enum Action {
    Edit,
    Save,
    Cancel,
    OpenSetting(&'static str),
    Logout,
}

/// Show the profile panel.
pub fn show(app: &mut App, ui: &mut Ui) {
    let Some(user) = app.session.user().cloned() else {
        return;
    };
    let mut action = None;

    ScrollArea::vertical().show(ui, |ui| {
        screen_header(ui, "Profile", "Manage your account settings", colors::PRIMARY);
        ui.add_space(12.0);

        ui.vertical_centered(|ui| {
            ui.label(RichText::new(USER_CIRCLE).size(64.0).color(colors::PRIMARY));
            ui.label(RichText::new(&user.name).size(20.0).strong());
            ui.label(RichText::new(user.role.label()).weak());
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if app.profile_editor.is_editing() {
                if styled_button_with_icon(ui, FLOPPY_DISK, "Save").clicked() {
                    action = Some(Action::Save);
                }
                if styled_button_with_icon(ui, X, "Cancel").clicked() {
                    action = Some(Action::Cancel);
                }
            } else if styled_button_with_icon(ui, PENCIL_SIMPLE, "Edit Profile").clicked() {
                action = Some(Action::Edit);
            }
        });

        for profile_section in [ProfileSection::Personal, ProfileSection::Academic] {
            section(ui, profile_section.title(), |ui| {
                egui::Grid::new(profile_section.title())
                    .num_columns(2)
                    .spacing([16.0, 10.0])
                    .show(ui, |ui| {
                        for &field in profile_section.fields() {
                            ui.label(RichText::new(field.label()).weak());
                            field_value(app, ui, field, user.field(field));
                            ui.end_row();
                        }
                    });
            });
        }

        section(ui, "Settings", |ui| {
            for (icon, label) in SETTINGS {
                let text = RichText::new(format!("{icon}  {label}")).size(15.0);
                ui.horizontal(|ui| {
                    if ui.add(egui::Button::new(text).frame(false)).clicked() {
                        action = Some(Action::OpenSetting(label));
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(CARET_RIGHT).weak());
                    });
                });
                ui.separator();
            }
        });

        ui.add_space(20.0);
        if primary_button(ui, &format!("{SIGN_OUT} Logout"), colors::ERROR).clicked() {
            action = Some(Action::Logout);
        }
        ui.add_space(12.0);
    });

    match action {
        Some(Action::Edit) => app.begin_profile_edit(),
        Some(Action::Save) => app.save_profile(),
        Some(Action::Cancel) => app.profile_editor.cancel(),
        Some(Action::OpenSetting(label)) => app.show_coming_soon(label),
        Some(Action::Logout) => app.confirm_logout = true,
        None => {}
    }
}

/// Text input while editing an editable field, plain label otherwise.
fn field_value(app: &mut App, ui: &mut Ui, field: ProfileField, current: &str) {
    match app.profile_editor.field_mut(field) {
        Some(value) => {
            ui.add(TextEdit::singleline(value).desired_width(f32::INFINITY));
        }
        None => {
            ui.label(current);
        }
    }
}
