//! Shared UI components.

use eframe::egui::{self, Color32, CornerRadius, Margin, Response, RichText, Sense, StrokeKind, Ui};
use egui_phosphor::regular::{
    ARROW_LEFT, BOOK_OPEN, CALENDAR, CAMERA, CLOCK, GEAR, QR_CODE, TREND_DOWN, TREND_UP, USERS, WARNING,
};

use crate::models::{AttendanceStatus, ClassStatus, FeedKind, Trend};
use crate::role_view::Glyph;

/// Palette.
pub mod colors {
    use super::Color32;

    pub const PRIMARY: Color32 = Color32::from_rgb(0x3B, 0x82, 0xF6);
    pub const SUCCESS: Color32 = Color32::from_rgb(0x10, 0xB9, 0x81);
    pub const ERROR: Color32 = Color32::from_rgb(0xEF, 0x44, 0x44);
    pub const WARNING: Color32 = Color32::from_rgb(0xF5, 0x9E, 0x0B);
    pub const ACCENT: Color32 = Color32::from_rgb(0x8B, 0x5C, 0xF6);
    pub const NEUTRAL: Color32 = Color32::from_rgb(0x6B, 0x72, 0x80);

    /// Cycle used for stat cards and quick actions.
    pub const CARD_CYCLE: [Color32; 4] = [SUCCESS, PRIMARY, ACCENT, WARNING];
}

/// Map a content glyph to its icon.
pub fn glyph_icon(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::TrendUp => TREND_UP,
        Glyph::Calendar => CALENDAR,
        Glyph::BookOpen => BOOK_OPEN,
        Glyph::Alert => WARNING,
        Glyph::Users => USERS,
        Glyph::Clock => CLOCK,
        Glyph::QrCode => QR_CODE,
        Glyph::Camera => CAMERA,
        Glyph::Gear => GEAR,
    }
}

pub fn status_color(status: AttendanceStatus) -> Color32 {
    match status {
        AttendanceStatus::Present => colors::SUCCESS,
        AttendanceStatus::Absent => colors::ERROR,
        AttendanceStatus::Late => colors::WARNING,
    }
}

pub fn class_status_color(status: ClassStatus) -> Color32 {
    match status {
        ClassStatus::Completed => colors::SUCCESS,
        ClassStatus::Current => colors::PRIMARY,
        ClassStatus::Upcoming => colors::NEUTRAL,
    }
}

pub fn feed_color(kind: FeedKind) -> Color32 {
    match kind {
        FeedKind::Success => colors::SUCCESS,
        FeedKind::Warning => colors::WARNING,
    }
}

/// Arrow and color for a trend.
pub fn trend_icon(trend: Trend) -> (&'static str, Color32) {
    match trend {
        Trend::Up => (TREND_UP, colors::SUCCESS),
        Trend::Down => (TREND_DOWN, colors::ERROR),
    }
}

/// Render a clickable action card with an icon above its title.
///
/// Returns the response which can be checked for `.clicked()`.
pub fn action_card(ui: &mut Ui, title: &str, icon: &str, accent: Color32, size: egui::Vec2) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let visuals = ui.style().interact(&response);

        ui.painter().rect_filled(rect, 12.0, visuals.bg_fill);
        ui.painter()
            .rect_stroke(rect, 12.0, visuals.bg_stroke, StrokeKind::Outside);

        // Icon badge
        let badge_center = egui::pos2(rect.center().x, rect.top() + size.y * 0.38);
        ui.painter()
            .circle_filled(badge_center, size.y * 0.22, accent.gamma_multiply(0.15));
        ui.painter().text(
            badge_center,
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(22.0),
            accent,
        );

        ui.painter().text(
            egui::pos2(rect.center().x, rect.bottom() - size.y * 0.2),
            egui::Align2::CENTER_CENTER,
            title,
            egui::FontId::proportional(12.0),
            visuals.text_color(),
        );
    }

    response
}

/// Render a stat card with icon, value, and label.
pub fn stat_card(ui: &mut Ui, icon: &str, value: &str, label: &str, accent: Color32, width: f32) {
    card_frame(ui).show(ui, |ui| {
        ui.set_width(width);
        ui.horizontal(|ui| {
            ui.label(RichText::new(icon).size(20.0).color(accent));
            ui.vertical(|ui| {
                ui.label(RichText::new(value).heading().strong());
                ui.label(RichText::new(label).small().weak());
            });
        });
    });
}

/// Rounded card frame shared by sections.
pub fn card_frame(ui: &Ui) -> egui::Frame {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .outer_margin(Margin::same(4))
        .corner_radius(CornerRadius::same(12))
}

/// Titled card section.
pub fn section<R>(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    ui.add_space(12.0);
    ui.label(RichText::new(title).size(18.0).strong());
    ui.add_space(6.0);
    card_frame(ui)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

/// Colored screen header with title and subtitle.
pub fn screen_header(ui: &mut Ui, title: &str, subtitle: &str, fill: Color32) {
    egui::Frame::new()
        .fill(fill)
        .inner_margin(Margin::symmetric(20, 18))
        .corner_radius(CornerRadius {
            nw: 0,
            ne: 0,
            sw: 24,
            se: 24,
        })
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).size(24.0).strong().color(Color32::WHITE));
            ui.label(RichText::new(subtitle).size(14.0).color(Color32::from_white_alpha(200)));
        });
}

/// Render a back button that returns true when clicked.
pub fn back_button(ui: &mut Ui) -> bool {
    ui.button(RichText::new(format!("{ARROW_LEFT} Back")).size(14.0)).clicked()
}

/// Render a panel header with title.
pub fn panel_header(ui: &mut Ui, title: &str) {
    ui.heading(RichText::new(title).size(24.0));
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(20.0);
}

/// Full-width filled button.
pub fn primary_button(ui: &mut Ui, text: &str, fill: Color32) -> Response {
    ui.add_sized(
        [ui.available_width(), 44.0],
        egui::Button::new(RichText::new(text).size(16.0).strong().color(Color32::WHITE)).fill(fill),
    )
}

/// Button with a leading icon.
pub fn styled_button_with_icon(ui: &mut Ui, icon: &str, text: &str) -> Response {
    ui.button(RichText::new(format!("{icon} {text}")).size(14.0))
}

/// Small colored pill label.
pub fn badge(ui: &mut Ui, text: &str, color: Color32) {
    egui::Frame::new()
        .fill(color.gamma_multiply(0.15))
        .inner_margin(Margin::symmetric(8, 3))
        .corner_radius(CornerRadius::same(10))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().strong().color(color));
        });
}
