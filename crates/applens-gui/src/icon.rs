//! AppLens application icon generator.
//!
//! Draws a small bar chart seen through a magnifying glass: four rising
//! columns inside a round lens, a grey bezel, and a handle toward the
//! lower right. Rendered procedurally at any size as RGBA pixels.

/// Lens interior background.
const LENS_BG: [u8; 3] = [0x1e, 0x1e, 0x2e];

/// Column heights (fraction of the lens diameter) and colours, left to right.
const COLUMNS: [(f32, [u8; 3]); 4] = [
    (0.30, [0xa6, 0xe3, 0xa1]),
    (0.48, [0x89, 0xb4, 0xfa]),
    (0.62, [0xf9, 0xe2, 0xaf]),
    (0.80, [0xf3, 0x8b, 0xa8]),
];

/// Generate the AppLens icon as egui `IconData`.
pub fn generate_icon(size: u32) -> egui::IconData {
    egui::IconData {
        rgba: render_icon(size),
        width: size,
        height: size,
    }
}

/// Render the icon into an RGBA pixel buffer (top-to-bottom row order).
pub fn render_icon(size: u32) -> Vec<u8> {
    let s = size as f32;
    let lens = Lens {
        cx: s * 0.42,
        cy: s * 0.42,
        radius: s * 0.33,
        bezel: s * 0.05,
    };
    let handle = Handle {
        from: lens.rim_point(std::f32::consts::FRAC_PI_4),
        to: (s * 0.92, s * 0.92),
        half_width: s * 0.06,
    };

    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let p = (x as f32 + 0.5, y as f32 + 0.5);
            let mut px = Pixel::default();
            px.over(lens.interior(p), lens.coverage(p));
            px.over(lens.bezel_color(p), lens.bezel_coverage(p));
            px.over(handle.color(p), handle.coverage(p));
            pixels.extend_from_slice(&px.to_rgba());
        }
    }
    pixels
}

/// Straight-alpha accumulator for one output pixel.
#[derive(Default)]
struct Pixel {
    rgb: [f32; 3],
    alpha: f32,
}

impl Pixel {
    /// Composite `color` at `coverage` over what is already here.
    fn over(&mut self, color: [u8; 3], coverage: f32) {
        if coverage <= 0.0 {
            return;
        }
        for (c, &src) in self.rgb.iter_mut().zip(color.iter()) {
            *c = *c * (1.0 - coverage) + src as f32 * coverage;
        }
        self.alpha += (1.0 - self.alpha) * coverage;
    }

    fn to_rgba(&self) -> [u8; 4] {
        [
            self.rgb[0].clamp(0.0, 255.0) as u8,
            self.rgb[1].clamp(0.0, 255.0) as u8,
            self.rgb[2].clamp(0.0, 255.0) as u8,
            (self.alpha * 255.0).clamp(0.0, 255.0) as u8,
        ]
    }
}

struct Lens {
    cx: f32,
    cy: f32,
    radius: f32,
    bezel: f32,
}

impl Lens {
    fn dist(&self, (x, y): (f32, f32)) -> f32 {
        ((x - self.cx).powi(2) + (y - self.cy).powi(2)).sqrt()
    }

    fn rim_point(&self, angle: f32) -> (f32, f32) {
        let r = self.radius + self.bezel;
        (self.cx + r * angle.cos(), self.cy + r * angle.sin())
    }

    fn coverage(&self, p: (f32, f32)) -> f32 {
        fade_out(self.dist(p), self.radius)
    }

    /// Background or bar colour at `p`, with a soft highlight top-left.
    fn interior(&self, p: (f32, f32)) -> [u8; 3] {
        let d = self.radius * 2.0;
        let left = self.cx - self.radius * 0.62;
        let floor = self.cy + self.radius * 0.55;
        let slot = self.radius * 1.24 / COLUMNS.len() as f32;

        let mut color = LENS_BG;
        let col = ((p.0 - left) / slot).floor();
        if col >= 0.0 && (col as usize) < COLUMNS.len() {
            let (height, bar) = COLUMNS[col as usize];
            let within = (p.0 - left) - col * slot;
            let gap = slot * 0.16;
            if within > gap && within < slot - gap && p.1 <= floor && p.1 >= floor - height * d * 0.5 {
                color = bar;
            }
        }

        let hx = p.0 - (self.cx - self.radius * 0.35);
        let hy = p.1 - (self.cy - self.radius * 0.35);
        let glow = (1.0 - (hx * hx + hy * hy).sqrt() / (self.radius * 0.6)).max(0.0) * 0.15;
        color.map(|c| (c as f32 + glow * 255.0).min(255.0) as u8)
    }

    fn bezel_coverage(&self, p: (f32, f32)) -> f32 {
        let dist = self.dist(p);
        fade_in(dist, self.radius - 0.5) * fade_out(dist, self.radius + self.bezel)
    }

    /// Lighter at the top of the ring.
    fn bezel_color(&self, p: (f32, f32)) -> [u8; 3] {
        let t = 0.75 - 0.25 * ((p.1 - self.cy) / self.radius).clamp(-1.0, 1.0);
        [0x74, 0x7c, 0x8a].map(|c| (c as f32 * t) as u8)
    }
}

struct Handle {
    from: (f32, f32),
    to: (f32, f32),
    half_width: f32,
}

impl Handle {
    /// Position along the handle (0 at the lens) and distance from its axis.
    fn locate(&self, (x, y): (f32, f32)) -> (f32, f32) {
        let (ax, ay) = self.from;
        let (dx, dy) = (self.to.0 - ax, self.to.1 - ay);
        let len_sq = dx * dx + dy * dy;
        if len_sq < 1e-4 {
            return (0.0, ((x - ax).powi(2) + (y - ay).powi(2)).sqrt());
        }
        let t = (((x - ax) * dx + (y - ay) * dy) / len_sq).clamp(0.0, 1.0);
        let (qx, qy) = (ax + t * dx, ay + t * dy);
        (t, ((x - qx).powi(2) + (y - qy).powi(2)).sqrt())
    }

    fn coverage(&self, p: (f32, f32)) -> f32 {
        let (_, dist) = self.locate(p);
        fade_out(dist, self.half_width)
    }

    /// Darkens toward the grip end.
    fn color(&self, p: (f32, f32)) -> [u8; 3] {
        let (t, _) = self.locate(p);
        let near = [0x7a, 0x80, 0x8c];
        let far = [0x4e, 0x54, 0x60];
        [0, 1, 2].map(|i| (near[i] as f32 * (1.0 - t) + far[i] as f32 * t) as u8)
    }
}

/// Anti-aliased coverage falling from 1 to 0 across `edge`.
fn fade_out(dist: f32, edge: f32) -> f32 {
    (0.5 - (dist - edge) * 0.5).clamp(0.0, 1.0)
}

/// Anti-aliased coverage rising from 0 to 1 across `edge`.
fn fade_in(dist: f32, edge: f32) -> f32 {
    (0.5 + (dist - edge) * 0.5).clamp(0.0, 1.0)
}
