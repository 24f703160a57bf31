//! Attendance panel: check-in shortcuts, subject stats, filtered history, and export.

use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{CALENDAR, CAMERA, CLOCK, FILE_CODE, FILE_XLS, MAP_PIN, QR_CODE, USER};

use crate::export::ExportFormat;
use crate::history;
use crate::mock;
use crate::models::StatusFilter;
use crate::routes::Route;

use super::app::App;
use super::components::{
    action_card, badge, card_frame, colors, screen_header, section, status_color, styled_button_with_icon,
};

/// Show the attendance panel.
///
/// Returns `Some(route)` if a check-in screen was opened.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<Route> {
    let mut next = None;
    let mut export = None;

    let counts = history::status_counts(&app.records);

    ScrollArea::vertical().show(ui, |ui| {
        screen_header(ui, "Attendance", "Mark attendance and view history", colors::PRIMARY);
        ui.add_space(12.0);

        // Check-in methods
        let width = (ui.available_width() - ui.spacing().item_spacing.x) / 2.0;
        let size = egui::vec2(width, 110.0);
        ui.horizontal(|ui| {
            if action_card(ui, "Scan QR Code", QR_CODE, colors::PRIMARY, size).clicked() {
                next = Some(Route::AttendanceScan);
            }
            if action_card(ui, "Face Recognition", CAMERA, colors::ACCENT, size).clicked() {
                next = Some(Route::AttendanceFace);
            }
        });

        section(ui, "Subject-wise Stats", |ui| {
            for stat in mock::subject_stats() {
                ui.horizontal(|ui| {
                    ui.label(stat.subject.as_str());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(format!("{}%", stat.percentage)).strong());
                        ui.label(
                            RichText::new(format!("{}/{} classes", stat.present, stat.total))
                                .small()
                                .weak(),
                        );
                    });
                });
                ui.add(
                    egui::ProgressBar::new(stat.percentage as f32 / 100.0)
                        .fill(colors::SUCCESS)
                        .desired_height(6.0),
                );
                ui.add_space(6.0);
            }
        });

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Attendance History").size(18.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("{:.0}% attended", counts.attendance_rate()))
                        .small()
                        .color(colors::SUCCESS),
                );
            });
        });
        ui.add_space(6.0);

        // Filter tabs
        ui.horizontal(|ui| {
            for filter in StatusFilter::ALL {
                let text = format!("{} ({})", filter.label(), counts.for_filter(filter));
                ui.selectable_value(&mut app.history_filter, filter, text);
            }
        });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if styled_button_with_icon(ui, FILE_XLS, "Export Excel").clicked() {
                export = Some(ExportFormat::Excel);
            }
            if styled_button_with_icon(ui, FILE_CODE, "Export JSON").clicked() {
                export = Some(ExportFormat::Json);
            }
        });
        ui.add_space(6.0);

        let records = history::filter_records(&app.records, app.history_filter);
        if records.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.label(RichText::new("No records for this filter").weak());
            });
        }

        for record in records {
            card_frame(ui).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&record.subject).size(16.0).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        badge(ui, record.status.label(), status_color(record.status));
                    });
                });
                ui.add_space(4.0);
                egui::Grid::new(("record", record.id))
                    .num_columns(2)
                    .spacing([16.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new(format!("{CALENDAR} {}", record.date.format("%Y-%m-%d"))).small());
                        ui.label(RichText::new(format!("{CLOCK} {}", record.time)).small());
                        ui.end_row();
                        ui.label(RichText::new(format!("{MAP_PIN} {}", record.room)).small());
                        ui.label(RichText::new(format!("{USER} {}", record.faculty)).small());
                        ui.end_row();
                    });
            });
        }

        ui.add_space(12.0);
    });

    if let Some(format) = export {
        app.export_history(format);
    }

    next
}
