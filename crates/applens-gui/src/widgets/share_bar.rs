/// Proportional bar widget -- shows a value's share of the largest value.
use crate::theme::ChartTheme;
use egui::{Rect, Response, Ui, Vec2};

/// Draw a horizontal bar filled to `percent` (0–100).
pub fn share_bar(ui: &mut Ui, percent: f32, width: f32, height: f32, theme: &ChartTheme) -> Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::new(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    // Track.
    painter.rect_filled(rect, 2.0, theme.grid);

    let fill_w = width * (percent / 100.0).clamp(0.0, 1.0);
    if fill_w > 0.5 {
        let fill_rect = Rect::from_min_size(rect.min, Vec2::new(fill_w, height));
        painter.rect_filled(fill_rect, 2.0, theme.share_color(percent));
    }
    response
}

/// `value` as a percentage of `max`; 0 when `max` is 0.
pub fn percent_of(value: u64, max: u64) -> f32 {
    if max == 0 {
        0.0
    } else {
        (value as f64 / max as f64 * 100.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_handles_zero_max() {
        assert_eq!(percent_of(5, 0), 0.0);
        assert_eq!(percent_of(50, 200), 25.0);
        assert_eq!(percent_of(200, 200), 100.0);
    }
}
