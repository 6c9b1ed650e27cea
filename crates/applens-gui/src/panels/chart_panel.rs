/// Chart panel -- the visual breakdowns of the current filter result.
///
/// Reads the owned `DashboardData` held by `AppState`; nothing here runs
/// the engine, so drawing at 60 fps costs only the painting.
use crate::state::AppState;
use crate::theme::ChartTheme;
use crate::widgets::{bar_chart, box_plot, histogram, scatter_plot};
use egui::Ui;

const CHART_HEIGHT: f32 = 240.0;
const BAR_LIST_HEIGHT: f32 = 260.0;

/// Shown instead of charts when the filters match nothing.
pub const NO_DATA_MESSAGE: &str = "No data available for the selected filters.";

/// Draw all charts, or the no-data notice.
pub fn chart_panel(ui: &mut Ui, state: &AppState) {
    let theme = ChartTheme::for_visuals(ui.visuals());
    let data = state.dashboard();

    if data.is_empty() {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(format!("⚠ {NO_DATA_MESSAGE}"))
                    .size(14.0)
                    .color(theme.warning),
            );
        });
        return;
    }

    ui.columns(2, |cols| {
        histogram::histogram_chart(&mut cols[0], &data.rating_histogram, CHART_HEIGHT, &theme);
        box_plot::box_chart(&mut cols[1], &data.rating_by_type, CHART_HEIGHT, &theme);
    });
    ui.add_space(8.0);
    ui.columns(2, |cols| {
        scatter_plot::scatter_chart(&mut cols[0], &data.installs_vs_rating, CHART_HEIGHT, &theme);
        scatter_plot::scatter_chart(&mut cols[1], &data.price_vs_rating, CHART_HEIGHT, &theme);
    });
    ui.add_space(8.0);
    bar_chart::category_bar_chart(ui, &data.installs_by_category, BAR_LIST_HEIGHT, &theme);
}
