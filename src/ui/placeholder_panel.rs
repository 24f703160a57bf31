//! Admin and faculty panels (placeholder).

use eframe::egui::{RichText, Ui};

use crate::routes::Route;

use super::components::{back_button, panel_header};

/// Show the placeholder for a management route.
///
/// Returns `true` if the back button was clicked.
pub fn show(route: Route, ui: &mut Ui) -> bool {
    let mut go_back = false;

    if back_button(ui) {
        go_back = true;
    }

    panel_header(ui, route.title());

    let detail = match route {
        Route::Admin => "User, class and report management will be available here.",
        _ => "Class rosters and attendance sessions will be available here.",
    };

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(RichText::new("Coming soon").size(18.0).weak());
        ui.add_space(10.0);
        ui.label(detail);
    });

    go_back
}
