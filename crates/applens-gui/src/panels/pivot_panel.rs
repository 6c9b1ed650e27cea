/// Pivot table panel -- average rating and total installs per
/// (Category, Type), with column sorting and filtering, paging and
/// single-row selection.
use crate::state::{AppState, PivotColumn, PIVOT_PAGE_SIZE};
use crate::theme::ChartTheme;
use crate::widgets::share_bar::{percent_of, share_bar};
use applens_core::engine::AggregationRow;
use applens_core::model::format::{format_count, format_rating};
use egui::Ui;
use egui_extras::{Column, TableBuilder};

const ROW_HEIGHT: f32 = 20.0;
const HEADER_HEIGHT: f32 = 46.0;

/// Draw the pivot table and its paging controls.
pub fn pivot_panel(ui: &mut Ui, state: &mut AppState) {
    let theme = ChartTheme::for_visuals(ui.visuals());
    let color_muted = ui.visuals().weak_text_color();

    ui.heading("Average Rating and Total Installs by Category and Type");
    ui.add_space(4.0);

    let total_groups = state.dashboard().pivot.len();
    if total_groups == 0 {
        ui.label(egui::RichText::new("No groups to show.").color(color_muted));
        return;
    }

    // Owned copy of at most one page, so the table closures can read it
    // while clicks are applied to `state` afterwards.
    let rows: Vec<AggregationRow> = state.pivot_page_rows().into_iter().cloned().collect();
    let max_installs = state
        .dashboard()
        .pivot
        .iter()
        .map(|r| r.total_installs)
        .max()
        .unwrap_or(0);
    let sort = state.pivot_sort;
    let shown_groups = state.filtered_pivot().len();

    // Edited in the header, applied to `state` after the table.
    let mut filters: [String; 4] = PivotColumn::ALL.map(|c| state.pivot_filter(c).to_string());
    let valid: [bool; 4] = PivotColumn::ALL.map(|c| state.pivot_filter_is_valid(c));

    let mut clear_filters = false;
    let mut sort_clicked: Option<PivotColumn> = None;
    let mut row_clicked: Option<AggregationRow> = None;

    ui.push_id("pivot_table", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .sense(egui::Sense::click())
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(160.0))
            .column(Column::auto().at_least(60.0))
            .column(Column::auto().at_least(110.0))
            .column(Column::remainder().at_least(160.0))
            .header(HEADER_HEIGHT, |mut header| {
                for column in PivotColumn::ALL {
                    header.col(|ui| {
                        ui.vertical(|ui| {
                            let arrow = match sort {
                                Some(s) if s.column == column && s.ascending => " ▲",
                                Some(s) if s.column == column => " ▼",
                                _ => "",
                            };
                            let label =
                                egui::RichText::new(format!("{}{}", column.label(), arrow)).strong();
                            if ui
                                .add(egui::Button::new(label).frame(false))
                                .on_hover_text("Sort by this column")
                                .clicked()
                            {
                                sort_clicked = Some(column);
                            }

                            let (hint, help) = if column.is_numeric() {
                                (">= 4", "Compare: = != > < >= <=  (a bare number means =)")
                            } else {
                                ("filter…", "Contains, ignoring case; start with = for an exact match")
                            };
                            let mut edit = egui::TextEdit::singleline(&mut filters[column.index()])
                                .id_salt(("pivot_filter", column.index()))
                                .hint_text(hint)
                                .desired_width(f32::INFINITY);
                            if !valid[column.index()] {
                                edit = edit.text_color(theme.warning);
                            }
                            ui.add(edit).on_hover_text(help);
                        });
                    });
                }
            })
            .body(|mut body| {
                for data in &rows {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.set_selected(state.is_pivot_selected(data));
                        row.col(|ui| {
                            ui.label(data.category.as_str());
                        });
                        row.col(|ui| {
                            ui.label(
                                egui::RichText::new(data.app_type.label())
                                    .color(theme.type_color(data.app_type)),
                            );
                        });
                        row.col(|ui| {
                            ui.label(format_rating(data.average_rating));
                        });
                        row.col(|ui| {
                            ui.label(format_count(data.total_installs));
                            share_bar(
                                ui,
                                percent_of(data.total_installs, max_installs),
                                60.0,
                                6.0,
                                &theme,
                            );
                        });
                        if row.response().clicked() {
                            row_clicked = Some(data.clone());
                        }
                    });
                }
            });
    });

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        let page = state.pivot_page;
        let pages = state.pivot_page_count();
        if ui.add_enabled(page > 0, egui::Button::new("◀ Prev")).clicked() {
            state.prev_pivot_page();
        }
        ui.label(format!("Page {} of {}", page + 1, pages));
        if ui
            .add_enabled(page + 1 < pages, egui::Button::new("Next ▶"))
            .clicked()
        {
            state.next_pivot_page();
        }
        ui.separator();
        let text = if shown_groups == 0 {
            "No groups match the column filters.".to_string()
        } else {
            let first = page * PIVOT_PAGE_SIZE + 1;
            let last = (first + rows.len()).saturating_sub(1);
            format!("Groups {first}–{last} of {shown_groups}")
        };
        ui.label(egui::RichText::new(text).size(12.0).color(color_muted));
        if shown_groups != total_groups {
            ui.label(
                egui::RichText::new(format!("(filtered from {total_groups})"))
                    .size(12.0)
                    .color(color_muted),
            );
            if ui.small_button("Clear column filters").clicked() {
                clear_filters = true;
            }
        }
    });

    if let Some(selected) = state.selected_pivot_row() {
        ui.add_space(2.0);
        ui.label(
            egui::RichText::new(format!(
                "Selected: {} · {} · average rating {} · {} installs",
                selected.category,
                selected.app_type,
                format_rating(selected.average_rating),
                format_count(selected.total_installs)
            ))
            .size(12.0),
        );
    }

    if clear_filters {
        state.clear_pivot_filters();
    } else {
        for column in PivotColumn::ALL {
            state.set_pivot_filter(column, &filters[column.index()]);
        }
    }
    if let Some(column) = sort_clicked {
        state.sort_pivot_by(column);
    }
    if let Some(row) = row_clicked {
        state.select_pivot_row(&row);
    }
}
