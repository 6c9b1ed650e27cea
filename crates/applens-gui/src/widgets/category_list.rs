/// Category multi-select list.
///
/// Each category is a clickable row with a check box; clicking toggles it.
/// Selection state is owned by `AppState`, this widget only reports clicks.
use crate::state::AppState;
use egui::{Align2, FontId, Pos2, Rect, Sense, Stroke, Ui, Vec2};

const ROW_HEIGHT: f32 = 22.0;
const BOX_SIZE: f32 = 12.0;

/// Draw the list and return the category that was clicked, if any.
pub fn category_list(ui: &mut Ui, state: &AppState, max_height: f32) -> Option<String> {
    let accent = ui.visuals().hyperlink_color;
    let text = ui.visuals().text_color();
    let hover_bg = ui.visuals().widgets.hovered.weak_bg_fill;
    let selected_bg = ui.visuals().selection.bg_fill.gamma_multiply(0.5);
    let border = ui.visuals().widgets.inactive.fg_stroke.color;

    let mut clicked = None;
    let categories = state.visible_categories();

    egui::ScrollArea::vertical()
        .id_salt("category_list")
        .max_height(max_height)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            if categories.is_empty() {
                ui.label(
                    egui::RichText::new("No matching categories")
                        .size(12.0)
                        .color(ui.visuals().weak_text_color()),
                );
            }

            for category in categories {
                let is_selected = state.selected_categories.contains(category.as_str());
                let (rect, response) =
                    ui.allocate_exact_size(Vec2::new(ui.available_width(), ROW_HEIGHT), Sense::click());
                if response.clicked() {
                    clicked = Some(category.to_string());
                }

                let painter = ui.painter_at(rect);
                if is_selected {
                    painter.rect_filled(rect, 3.0, selected_bg);
                } else if response.hovered() {
                    painter.rect_filled(rect, 3.0, hover_bg);
                }

                let box_rect = Rect::from_center_size(
                    Pos2::new(rect.left() + 6.0 + BOX_SIZE / 2.0, rect.center().y),
                    Vec2::splat(BOX_SIZE),
                );
                painter.rect_stroke(box_rect, 2.0, Stroke::new(1.0, border), egui::StrokeKind::Inside);
                if is_selected {
                    painter.rect_filled(box_rect.shrink(2.5), 1.0, accent);
                }

                painter.text(
                    Pos2::new(box_rect.right() + 8.0, rect.center().y),
                    Align2::LEFT_CENTER,
                    category.as_str(),
                    FontId::proportional(12.0),
                    text,
                );
            }
        });

    clicked
}
