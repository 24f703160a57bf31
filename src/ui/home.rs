//! Home dashboard with role stats, quick actions, and activity.

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_phosphor::regular::CIRCLE;

use crate::mock;
use crate::role_view::{self, Section};
use crate::routes::Route;

use super::app::{App, LogLevel};
use super::components::{
    action_card, badge, class_status_color, colors, feed_color, glyph_icon, screen_header, section, stat_card,
};

/// Show the home panel.
///
/// Returns `Some(route)` if navigation is requested.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<Route> {
    let mut next = None;

    let user = app.session.user()?;
    let name = user.name.clone();
    let role = user.role;
    let view = role_view::dashboard_for(role);

    ScrollArea::vertical().show(ui, |ui| {
        screen_header(ui, &format!("Welcome back, {name}!"), &format!("{} Dashboard", role.label()), colors::PRIMARY);

        ui.add_space(12.0);

        // Stat cards, two per row
        let card_width = (ui.available_width() - 40.0) / 2.0;
        for (row, pair) in view.stats.chunks(2).enumerate() {
            ui.horizontal(|ui| {
                for (col, stat) in pair.iter().enumerate() {
                    let accent = colors::CARD_CYCLE[(row * 2 + col) % colors::CARD_CYCLE.len()];
                    stat_card(ui, glyph_icon(stat.glyph), stat.value, stat.label, accent, card_width);
                }
            });
        }

        // Quick actions
        ui.add_space(12.0);
        ui.label(RichText::new("Quick Actions").size(18.0).strong());
        ui.add_space(6.0);

        let count = view.quick_actions.len().max(1) as f32;
        let spacing = ui.spacing().item_spacing.x;
        let width = ((ui.available_width() - spacing * (count - 1.0)) / count).max(80.0);
        let size = egui::vec2(width, width * 0.9);
        ui.horizontal(|ui| {
            for (i, action) in view.quick_actions.iter().enumerate() {
                let accent = colors::CARD_CYCLE[i % colors::CARD_CYCLE.len()];
                if action_card(ui, action.label, glyph_icon(action.glyph), accent, size).clicked() {
                    next = Some(action.route);
                }
            }
        });

        if view.shows(Section::RecentActivity) {
            section(ui, "Recent Activity", |ui| {
                for activity in mock::recent_activity() {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(CIRCLE).small().color(feed_color(activity.kind)));
                        ui.vertical(|ui| {
                            ui.label(activity.description.as_str());
                            ui.label(RichText::new(&activity.time).small().weak());
                        });
                    });
                    ui.add_space(4.0);
                }
            });
        }

        if view.shows(Section::TodaysSchedule) {
            section(ui, "Today's Schedule", |ui| {
                for entry in mock::todays_schedule() {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&entry.time).strong());
                        ui.vertical(|ui| {
                            ui.label(entry.subject.as_str());
                            ui.label(RichText::new(&entry.room).small().weak());
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            badge(ui, entry.status.label(), class_status_color(entry.status));
                        });
                    });
                    ui.separator();
                }
            });
        }

        // Session log
        section(ui, "Session Log", |ui| {
            if app.log_messages.is_empty() {
                ui.label(RichText::new("No activity yet").weak());
                return;
            }
            for entry in app.log_messages.iter().rev().take(8) {
                let color = match entry.level {
                    LogLevel::Info => ui.style().visuals.text_color(),
                    LogLevel::Success => colors::SUCCESS,
                    LogLevel::Warning => colors::WARNING,
                    LogLevel::Error => colors::ERROR,
                };
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(entry.timestamp.format("%H:%M:%S").to_string())
                            .small()
                            .color(Color32::GRAY),
                    );
                    ui.label(RichText::new(&entry.message).small().color(color));
                });
            }
        });

        ui.add_space(12.0);
    });

    next
}
