/// Rating box plot, one box per app type.
use super::chart_frame::{chart_frame, empty_chart, tick_one_decimal, Axis, AxisLabels};
use crate::theme::ChartTheme;
use applens_core::analysis::BoxStats;
use applens_core::loader::{RATING_MAX, RATING_MIN};
use egui::{Align2, FontId, Pos2, Rect, Stroke, Ui};

const TITLE: &str = "Ratings by App Type";

/// Box width as a share of its slot.
const BOX_WIDTH: f32 = 0.4;

pub fn box_chart(ui: &mut Ui, stats: &[BoxStats], height: f32, theme: &ChartTheme) {
    if stats.is_empty() {
        empty_chart(ui, TITLE, height, theme);
        return;
    }

    let labels = AxisLabels {
        x_caption: "Type",
        x_ticks: None,
        y_ticks: tick_one_decimal,
    };
    let (response, painter, area) = chart_frame(
        ui,
        TITLE,
        height,
        Axis::linear(0.0, stats.len() as f64),
        Axis::linear(RATING_MIN, RATING_MAX),
        &labels,
        theme,
    );

    let slot = area.rect.width() / stats.len() as f32;
    let mut hovered: Option<&BoxStats> = None;

    for (i, s) in stats.iter().enumerate() {
        let center = area.rect.left() + slot * (i as f32 + 0.5);
        let half = slot * BOX_WIDTH / 2.0;
        let color = theme.type_color(s.app_type);
        let stroke = Stroke::new(1.5, color);

        let box_rect = Rect::from_min_max(
            Pos2::new(center - half, area.y_to_screen(s.q3)),
            Pos2::new(center + half, area.y_to_screen(s.q1)),
        );
        painter.rect_filled(box_rect, 2.0, color.gamma_multiply(0.35));
        painter.rect_stroke(box_rect, 2.0, stroke, egui::StrokeKind::Middle);

        let median_y = area.y_to_screen(s.median);
        painter.line_segment(
            [Pos2::new(center - half, median_y), Pos2::new(center + half, median_y)],
            Stroke::new(2.0, theme.median),
        );

        // Whiskers with end caps.
        let cap = half / 2.0;
        for (from, to) in [(s.q3, s.upper_whisker), (s.q1, s.lower_whisker)] {
            let y_to = area.y_to_screen(to);
            painter.line_segment(
                [Pos2::new(center, area.y_to_screen(from)), Pos2::new(center, y_to)],
                stroke,
            );
            painter.line_segment([Pos2::new(center - cap, y_to), Pos2::new(center + cap, y_to)], stroke);
        }

        for &o in &s.outliers {
            painter.circle_stroke(Pos2::new(center, area.y_to_screen(o)), 2.5, stroke);
        }

        painter.text(
            Pos2::new(center, area.rect.bottom() + 4.0),
            Align2::CENTER_TOP,
            s.app_type.label(),
            FontId::proportional(11.0),
            theme.axis_text,
        );

        let column = Rect::from_x_y_ranges(center - slot / 2.0..=center + slot / 2.0, area.rect.y_range());
        if response.hover_pos().is_some_and(|p| column.contains(p)) {
            hovered = Some(s);
        }
    }

    if let Some(s) = hovered {
        response.on_hover_ui_at_pointer(|ui| {
            ui.strong(format!("{} ({} apps)", s.app_type, s.count));
            ui.label(format!("Max: {:.2}", s.max));
            ui.label(format!("Q3: {:.2}", s.q3));
            ui.label(format!("Median: {:.2}", s.median));
            ui.label(format!("Q1: {:.2}", s.q1));
            ui.label(format!("Min: {:.2}", s.min));
            if !s.outliers.is_empty() {
                ui.label(format!("{} outliers", s.outliers.len()));
            }
        });
    }
}
