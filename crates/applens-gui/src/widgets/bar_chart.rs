/// Total installs per category as labelled horizontal bars.
///
/// One row per category: name, formatted total, and a bar scaled to the
/// largest category in the current view.
use super::share_bar::{percent_of, share_bar};
use crate::theme::ChartTheme;
use applens_core::analysis::category_totals::max_total;
use applens_core::analysis::CategoryTotal;
use applens_core::model::format::{format_compact, format_count};
use egui::Ui;

const ROW_BAR_HEIGHT: f32 = 6.0;

pub fn category_bar_chart(ui: &mut Ui, totals: &[CategoryTotal], max_height: f32, theme: &ChartTheme) {
    ui.label(
        egui::RichText::new("Total Installs by Category")
            .size(13.0)
            .color(theme.title),
    );
    ui.add_space(4.0);

    if totals.is_empty() {
        ui.label(
            egui::RichText::new("No values to plot")
                .size(12.0)
                .color(theme.axis_text),
        );
        return;
    }

    let max = max_total(totals);
    egui::ScrollArea::vertical()
        .id_salt("category_bars")
        .max_height(max_height)
        .show(ui, |ui| {
            for total in totals {
                let pct = percent_of(total.total_installs, max);
                let row = ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(total.category.as_str())
                            .size(12.0)
                            .color(theme.title),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format_compact(total.total_installs as f64))
                                .size(12.0)
                                .color(theme.axis_text),
                        );
                    });
                });

                let bar_width = ui.available_width() - 16.0;
                let bar = share_bar(ui, pct, bar_width, ROW_BAR_HEIGHT, theme);
                row.response.union(bar).on_hover_ui(|ui| {
                    ui.strong(total.category.as_str());
                    ui.label(format!("{} installs", format_count(total.total_installs)));
                    ui.label(format!("{} apps", format_count(total.app_count as u64)));
                });
                ui.add_space(2.0);
            }
        });
}
