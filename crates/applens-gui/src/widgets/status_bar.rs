/// Bottom status bar -- result summary and export outcome.
use crate::state::{AppState, ExportStatus};
use crate::theme::ChartTheme;
use applens_core::model::format::format_count;
use egui::Ui;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    // Extract theme-adaptive colours once for this frame.
    let theme = ChartTheme::for_visuals(ui.visuals());
    let color_accent = ui.visuals().hyperlink_color;
    let color_weak = ui.visuals().weak_text_color();

    let summary = &state.dashboard().summary;

    ui.horizontal(|ui| {
        let summary_color = if summary.count == 0 {
            theme.warning
        } else {
            color_accent
        };
        ui.label(
            egui::RichText::new(summary.to_string())
                .size(12.0)
                .color(summary_color),
        );

        ui.separator();

        ui.label(
            egui::RichText::new(format!(
                "{} of {} rows",
                format_count(summary.count as u64),
                format_count(state.dataset().len() as u64)
            ))
            .size(12.0)
            .color(color_weak),
        );

        if let Some(elapsed) = state.last_refresh {
            ui.separator();
            ui.label(
                egui::RichText::new(format!("{:.1} ms", elapsed.as_secs_f64() * 1_000.0))
                    .size(12.0)
                    .color(color_weak),
            );
        }

        match &state.last_export {
            Some(ExportStatus::Saved { csv, json, rows }) => {
                ui.separator();
                ui.label(
                    egui::RichText::new(format!(
                        "\u{2713} Exported {} rows to {} and {}",
                        format_count(*rows as u64),
                        file_name(csv),
                        file_name(json)
                    ))
                    .size(12.0)
                    .color(theme.success),
                );
            }
            Some(ExportStatus::Failed(message)) => {
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("Export failed: {}", message))
                        .size(12.0)
                        .color(theme.warning),
                );
            }
            None => {}
        }
    });
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
