/// Top action bar -- export, filter reset, theme toggle, and branding.
use crate::state::AppState;
use egui::Ui;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        // App title -- uses the egui accent/hyperlink colour so it adapts to
        // dark and light mode automatically.
        ui.label(
            egui::RichText::new("🔍 AppLens")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        if ui
            .add(egui::Button::new("📤 Export").min_size(egui::vec2(80.0, 28.0)))
            .on_hover_text(format!(
                "Save the filtered rows (CSV) and pivot table (JSON) to {}",
                state.export_dir.display()
            ))
            .clicked()
        {
            state.export();
        }

        if ui
            .add(egui::Button::new("↺ Reset filters").min_size(egui::vec2(80.0, 28.0)))
            .on_hover_text("Show every app with a rating")
            .clicked()
        {
            state.reset_filters();
        }

        // Right-aligned controls.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("ℹ").on_hover_text("About AppLens").clicked() {
                state.show_about = true;
            }

            // ── Theme toggle (☀ light / 🌙 dark) ──────────────────
            let theme_label = if state.dark_mode { "☀" } else { "🌙" };
            let theme_tip = if state.dark_mode {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.dark_mode = !state.dark_mode;
            }

            ui.separator();

            ui.label(
                egui::RichText::new(format!("📄 {}", state.source))
                    .size(11.0)
                    .color(ui.visuals().weak_text_color()),
            );
        });
    });
}
