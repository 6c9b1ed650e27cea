/// Filter panel -- category, type, rating range and name search widgets.
///
/// Widget values are copied out of `AppState`, edited, and written back
/// through the state's setters so every change marks the dashboard dirty.
use crate::state::{AppState, RATING_STEP};
use crate::widgets::category_list::category_list;
use applens_core::loader::{RATING_MAX, RATING_MIN};
use applens_core::model::AppType;
use egui::Ui;

/// Draw the filter panel.
pub fn filter_panel(ui: &mut Ui, state: &mut AppState) {
    let color_muted = ui.visuals().weak_text_color();

    ui.heading("Filters");
    ui.add_space(6.0);

    // ── Category ───────────────────────────────────────
    ui.horizontal(|ui| {
        ui.strong("Category");
        let n = state.selected_categories.len();
        if n > 0 && ui.small_button(format!("Clear ({n})")).clicked() {
            state.clear_categories();
        }
    });
    ui.add(
        egui::TextEdit::singleline(&mut state.category_query)
            .hint_text("Find category…")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(2.0);
    if let Some(category) = category_list(ui, state, 220.0) {
        state.toggle_category(&category);
    }
    if state.selected_categories.is_empty() {
        ui.label(
            egui::RichText::new("None selected: all categories")
                .size(11.0)
                .color(color_muted),
        );
    }

    ui.add_space(8.0);
    ui.separator();

    // ── Type ───────────────────────────────────────────
    ui.strong("Type");
    ui.horizontal(|ui| {
        for app_type in AppType::ALL {
            let mut checked = state.selected_types.contains(&app_type);
            if ui.checkbox(&mut checked, app_type.label()).changed() {
                state.toggle_type(app_type);
            }
        }
    });

    ui.add_space(8.0);
    ui.separator();

    // ── Rating ─────────────────────────────────────────
    ui.strong("Rating range");
    let mut lo = state.rating_min;
    let mut hi = state.rating_max;
    let lo_changed = ui
        .add(
            egui::Slider::new(&mut lo, RATING_MIN..=RATING_MAX)
                .step_by(RATING_STEP)
                .fixed_decimals(1)
                .text("Min"),
        )
        .changed();
    let hi_changed = ui
        .add(
            egui::Slider::new(&mut hi, RATING_MIN..=RATING_MAX)
                .step_by(RATING_STEP)
                .fixed_decimals(1)
                .text("Max"),
        )
        .changed();
    if lo_changed || hi_changed {
        state.set_rating_range(lo, hi);
    }

    ui.add_space(8.0);
    ui.separator();

    // ── Search ─────────────────────────────────────────
    ui.strong("Search by app name");
    let mut text = state.search_text.clone();
    if ui
        .add(
            egui::TextEdit::singleline(&mut text)
                .hint_text("Name contains…")
                .desired_width(f32::INFINITY),
        )
        .changed()
    {
        state.set_search(&text);
    }
    ui.label(
        egui::RichText::new("Case-insensitive")
            .size(11.0)
            .color(color_muted),
    );
}
