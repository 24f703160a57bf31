//! Analytics panel with trend graph, subject performance, and insights.

use eframe::egui::{self, Color32, Pos2, RichText, ScrollArea, Sense, Stroke, Ui};
use egui_extras::{Column, TableBuilder};
use egui_phosphor::regular::{CHECK_CIRCLE, WARNING_CIRCLE};

use crate::mock;
use crate::models::{FeedKind, Period, TrendPoint};
use crate::role_view;

use super::app::App;
use super::components::{card_frame, colors, feed_color, screen_header, section, trend_icon};

/// Show the analytics panel.
pub fn show(app: &mut App, ui: &mut Ui) {
    let Some(role) = app.session.role() else {
        return;
    };
    let view = role_view::analytics_for(role);

    ScrollArea::vertical().show(ui, |ui| {
        screen_header(ui, view.title, view.subtitle, colors::ACCENT);
        ui.add_space(12.0);

        // Period toggle
        ui.horizontal(|ui| {
            for period in [Period::Week, Period::Month] {
                ui.selectable_value(&mut app.analytics_period, period, period.label());
            }
        });
        ui.add_space(6.0);

        // Headline figures
        let card_width = (ui.available_width() - 40.0) / 2.0;
        for pair in view.stats.chunks(2) {
            ui.horizontal(|ui| {
                for stat in pair {
                    let (icon, color) = trend_icon(stat.trend);
                    card_frame(ui).show(ui, |ui| {
                        ui.set_width(card_width);
                        ui.label(RichText::new(stat.label).small().weak());
                        ui.label(RichText::new(stat.value).heading().strong());
                        ui.label(RichText::new(format!("{icon} {}", stat.change)).small().color(color));
                    });
                }
            });
        }

        section(ui, "Attendance Trend", |ui| {
            trend_graph(ui, &mock::trend(app.analytics_period));
        });

        if view.subject_performance {
            subject_performance(ui);
        }

        section(ui, "Weekly Summary", |ui| {
            weekly_summary(ui);
        });

        section(ui, "Insights", |ui| {
            for insight in mock::insights() {
                let icon = match insight.kind {
                    FeedKind::Success => CHECK_CIRCLE,
                    FeedKind::Warning => WARNING_CIRCLE,
                };
                ui.horizontal(|ui| {
                    ui.label(RichText::new(icon).size(20.0).color(feed_color(insight.kind)));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&insight.title).strong());
                        ui.label(RichText::new(&insight.description).small().weak());
                    });
                });
                ui.add_space(6.0);
            }
        });

        ui.add_space(12.0);
    });
}

fn subject_performance(ui: &mut Ui) {
    section(ui, "Subject Performance", |ui| {
        for subject in mock::subject_performance() {
            let (icon, color) = trend_icon(subject.trend);
            ui.horizontal(|ui| {
                ui.label(subject.subject.as_str());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(format!("{icon} {}", subject.change)).small().color(color));
                    ui.label(RichText::new(format!("{}%", subject.attendance)).strong());
                });
            });
            ui.add(
                egui::ProgressBar::new(subject.attendance as f32 / 100.0)
                    .fill(colors::PRIMARY)
                    .desired_height(6.0),
            );
            ui.add_space(6.0);
        }
    });
}

fn weekly_summary(ui: &mut Ui) {
    TableBuilder::new(ui)
        .id_salt("weekly_summary")
        .striped(true)
        .vscroll(false)
        .column(Column::remainder())
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(60.0))
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong("Day");
            });
            header.col(|ui| {
                ui.strong("Attended");
            });
            header.col(|ui| {
                ui.strong("Rate");
            });
        })
        .body(|mut body| {
            for day in mock::weekly_summary() {
                let color = if day.percentage == 100 {
                    colors::SUCCESS
                } else {
                    colors::WARNING
                };
                body.row(22.0, |mut row| {
                    row.col(|ui| {
                        ui.label(day.day.as_str());
                    });
                    row.col(|ui| {
                        ui.label(format!("{}/{}", day.attended, day.classes));
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(format!("{}%", day.percentage)).color(color));
                    });
                });
            }
        });
}

/// Value axis of the trend graph, in percent.
const GRAPH_MIN: f64 = 60.0;
const GRAPH_MAX: f64 = 100.0;

/// Map points onto a rect, oldest on the left.
fn graph_positions(points: &[TrendPoint], rect: egui::Rect) -> Vec<Pos2> {
    let step = if points.len() > 1 {
        rect.width() / (points.len() - 1) as f32
    } else {
        0.0
    };
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let t = ((p.value - GRAPH_MIN) / (GRAPH_MAX - GRAPH_MIN)).clamp(0.0, 1.0) as f32;
            egui::pos2(rect.left() + step * i as f32, rect.bottom() - t * rect.height())
        })
        .collect()
}

fn trend_graph(ui: &mut Ui, points: &[TrendPoint]) {
    let size = egui::vec2(ui.available_width(), 180.0);
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    if !ui.is_rect_visible(rect) || points.is_empty() {
        return;
    }

    let painter = ui.painter_at(rect);
    let plot = rect.shrink2(egui::vec2(12.0, 20.0));
    let grid = Stroke::new(1.0, ui.style().visuals.widgets.noninteractive.bg_stroke.color);

    for i in 0..=4 {
        let y = plot.top() + plot.height() * i as f32 / 4.0;
        painter.hline(plot.x_range(), y, grid);
    }

    let positions = graph_positions(points, plot);
    painter.add(egui::Shape::line(positions.clone(), Stroke::new(2.5, colors::PRIMARY)));

    let text_color = ui.style().visuals.weak_text_color();
    for (pos, point) in positions.iter().zip(points) {
        painter.circle_filled(*pos, 4.0, colors::PRIMARY);
        painter.circle_filled(*pos, 2.0, Color32::WHITE);
        painter.text(
            egui::pos2(pos.x, rect.bottom() - 4.0),
            egui::Align2::CENTER_BOTTOM,
            point.date.format("%-m/%-d").to_string(),
            egui::FontId::proportional(10.0),
            text_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_positions_span_rect() {
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(300.0, 100.0));
        let points = mock::trend(Period::Week);
        let positions = graph_positions(&points, rect);

        assert_eq!(positions.len(), points.len());
        assert_eq!(positions[0].x, 0.0);
        assert!((positions[positions.len() - 1].x - 300.0).abs() < 0.01);
        assert!(positions.iter().all(|p| rect.contains(*p)));
    }

    #[test]
    fn test_higher_value_plots_higher() {
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let points = mock::trend(Period::Week);
        let positions = graph_positions(&points, rect);
        // 78% on day three sits below 95% on day six
        assert!(positions[2].y > positions[5].y);
    }

    #[test]
    fn test_single_point_has_no_step() {
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 0.0), egui::vec2(100.0, 100.0));
        let points = &mock::trend(Period::Month)[..1];
        assert_eq!(graph_positions(points, rect)[0].x, 10.0);
    }
}
