/// Colour scheme for AppLens charts.
///
/// Provides both dark and light palettes. All chart colours are defined
/// here so widget code references semantically-named values rather than
/// raw hex codes.
use applens_core::model::AppType;
use egui::{Color32, Visuals};

/// Semantic colour palette for chart widgets.
pub struct ChartTheme {
    pub plot_bg: Color32,
    pub frame: Color32,
    pub grid: Color32,
    pub axis_text: Color32,
    pub title: Color32,
    pub bar: Color32,
    pub bar_hover: Color32,
    pub point: Color32,
    pub free: Color32,
    pub paid: Color32,
    pub median: Color32,
    pub warning: Color32,
    pub success: Color32,
    pub bar_small: Color32,
    pub bar_large: Color32,
}

impl ChartTheme {
    /// Dark palette (default).
    pub fn dark() -> Self {
        Self {
            plot_bg: Color32::from_rgb(0x1e, 0x1e, 0x2e),
            frame: Color32::from_rgb(0x3a, 0x3a, 0x50),
            grid: Color32::from_rgb(0x2a, 0x2a, 0x3c),
            axis_text: Color32::from_rgb(0x9a, 0x9e, 0xb4),
            title: Color32::from_rgb(0xe4, 0xe4, 0xe8),
            bar: Color32::from_rgb(0x89, 0xb4, 0xfa),
            bar_hover: Color32::from_rgb(0xb4, 0xbe, 0xfe),
            point: Color32::from_rgba_unmultiplied(0x89, 0xb4, 0xfa, 0xa0),
            free: Color32::from_rgb(0xa6, 0xe3, 0xa1),
            paid: Color32::from_rgb(0xf3, 0x8b, 0xa8),
            median: Color32::from_rgb(0xf9, 0xe2, 0xaf),
            warning: Color32::from_rgb(0xfa, 0xb3, 0x87),
            success: Color32::from_rgb(0xa6, 0xe3, 0xa1),
            bar_small: Color32::from_rgb(0xa6, 0xe3, 0xa1),
            bar_large: Color32::from_rgb(0xf3, 0x8b, 0xa8),
        }
    }

    /// Light palette.
    pub fn light() -> Self {
        Self {
            plot_bg: Color32::from_rgb(0xff, 0xff, 0xff),
            frame: Color32::from_rgb(0xd0, 0xd0, 0xd8),
            grid: Color32::from_rgb(0xec, 0xec, 0xf2),
            axis_text: Color32::from_rgb(0x5a, 0x5a, 0x6a),
            title: Color32::from_rgb(0x1e, 0x1e, 0x2e),
            bar: Color32::from_rgb(0x3a, 0x6f, 0xd8),
            bar_hover: Color32::from_rgb(0x2a, 0x5a, 0xc0),
            point: Color32::from_rgba_unmultiplied(0x3a, 0x6f, 0xd8, 0xa0),
            free: Color32::from_rgb(0x30, 0x98, 0x30),
            paid: Color32::from_rgb(0xd0, 0x40, 0x50),
            median: Color32::from_rgb(0xc0, 0x98, 0x20),
            warning: Color32::from_rgb(0xd0, 0x80, 0x20),
            success: Color32::from_rgb(0x30, 0x98, 0x30),
            bar_small: Color32::from_rgb(0x60, 0xb0, 0x60),
            bar_large: Color32::from_rgb(0xd0, 0x50, 0x60),
        }
    }

    /// Pick the palette matching the active egui visuals.
    pub fn for_visuals(visuals: &Visuals) -> Self {
        if visuals.dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Series colour for an app type.
    pub fn type_color(&self, app_type: AppType) -> Color32 {
        match app_type {
            AppType::Free => self.free,
            AppType::Paid => self.paid,
        }
    }

    /// Interpolate between `bar_small` and `bar_large` for a 0–100 share.
    pub fn share_color(&self, percent: f32) -> Color32 {
        let t = (percent / 100.0).clamp(0.0, 1.0);
        lerp_color(self.bar_small, self.bar_large, t)
    }
}

/// Linear interpolation between two colours.
fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    Color32::from_rgb(
        (a.r() as f32 * (1.0 - t) + b.r() as f32 * t) as u8,
        (a.g() as f32 * (1.0 - t) + b.g() as f32 * t) as u8,
        (a.b() as f32 * (1.0 - t) + b.b() as f32 * t) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_color_endpoints() {
        let t = ChartTheme::dark();
        assert_eq!(t.share_color(0.0), t.bar_small);
        assert_eq!(t.share_color(100.0), t.bar_large);
        assert_eq!(t.share_color(250.0), t.bar_large);
    }

    #[test]
    fn palette_follows_visuals() {
        assert_eq!(ChartTheme::for_visuals(&Visuals::dark()).plot_bg, ChartTheme::dark().plot_bg);
        assert_eq!(ChartTheme::for_visuals(&Visuals::light()).plot_bg, ChartTheme::light().plot_bg);
    }
}
