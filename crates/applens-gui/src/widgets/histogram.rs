/// Rating distribution bar chart.
use super::chart_frame::{
    chart_frame, empty_chart, tick_one_decimal, tick_whole, Axis, AxisLabels,
};
use crate::theme::ChartTheme;
use applens_core::analysis::Histogram;
use applens_core::loader::{RATING_MAX, RATING_MIN};
use applens_core::model::format::format_count;
use egui::{Rect, Ui};

const TITLE: &str = "Distribution of App Ratings";

/// Draw the histogram. Hovering a bar shows its range and count.
pub fn histogram_chart(ui: &mut Ui, hist: &Histogram, height: f32, theme: &ChartTheme) {
    if hist.total() == 0 {
        empty_chart(ui, TITLE, height, theme);
        return;
    }

    let labels = AxisLabels {
        x_caption: "Rating",
        x_ticks: Some(tick_one_decimal),
        y_ticks: tick_whole,
    };
    let y_max = hist.max_count().max(1) as f64;
    let (response, painter, area) = chart_frame(
        ui,
        TITLE,
        height,
        Axis::linear(RATING_MIN, RATING_MAX),
        Axis::linear(0.0, y_max),
        &labels,
        theme,
    );

    let hovered = response.hover_pos().and_then(|pos| {
        if !area.rect.contains(pos) {
            return None;
        }
        let x = area.x_from_screen(pos.x);
        hist.bins
            .iter()
            .position(|b| x >= b.lower && x <= b.upper)
    });

    for (i, bin) in hist.bins.iter().enumerate() {
        if bin.count == 0 {
            continue;
        }
        let bar = Rect::from_min_max(
            egui::pos2(area.x_to_screen(bin.lower) + 1.0, area.y_to_screen(bin.count as f64)),
            egui::pos2(area.x_to_screen(bin.upper) - 1.0, area.rect.bottom()),
        );
        let color = if hovered == Some(i) {
            theme.bar_hover
        } else {
            theme.bar
        };
        painter.rect_filled(bar, 1.0, color);
    }

    if let Some(bin) = hovered.map(|i| &hist.bins[i]) {
        response.on_hover_ui_at_pointer(|ui| {
            ui.label(format!("Rating {:.1} – {:.1}", bin.lower, bin.upper));
            ui.label(format!("{} apps", format_count(bin.count as u64)));
        });
    }
}
