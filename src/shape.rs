use egui::{Pos2, Rect, Vec2, pos2, vec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shapes the stamp tool can place
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    #[default]
    Circle,
    Square,
    Triangle,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Circle, Shape::Square, Shape::Triangle];

    /// The filled region of this shape for a `size` x `size` box centered on `anchor`
    pub fn render(self, anchor: Pos2, size: f32) -> Region {
        let half = size / 2.0;
        match self {
            Shape::Circle => Region::Ellipse {
                center: anchor,
                radii: vec2(half, half),
            },
            Shape::Square => Region::Rect(Rect::from_center_size(anchor, vec2(size, size))),
            Shape::Triangle => Region::Triangle([
                pos2(anchor.x - half, anchor.y + half),
                pos2(anchor.x + half, anchor.y + half),
                pos2(anchor.x, anchor.y - half),
            ]),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Circle => "Circle",
            Shape::Square => "Square",
            Shape::Triangle => "Triangle",
        };
        f.write_str(name)
    }
}

/// A filled area in raster coordinates.
///
/// Pixel `(px, py)` is painted when its center `(px + 0.5, py + 0.5)` lies
/// inside the region. Rectangles are half-open on their max edges, every
/// other region includes its boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Region {
    Ellipse { center: Pos2, radii: Vec2 },
    Rect(Rect),
    Triangle([Pos2; 3]),
    /// A straight segment with round caps
    Capsule { from: Pos2, to: Pos2, radius: f32 },
}

impl Region {
    pub fn bounds(&self) -> Rect {
        match *self {
            Region::Ellipse { center, radii } => Rect::from_center_size(center, radii * 2.0),
            Region::Rect(rect) => rect,
            Region::Triangle(vertices) => Rect::from_points(&vertices),
            Region::Capsule { from, to, radius } => {
                Rect::from_two_pos(from, to).expand(radius)
            }
        }
    }

    pub fn contains(&self, p: Pos2) -> bool {
        match *self {
            Region::Ellipse { center, radii } => {
                if radii.x <= 0.0 || radii.y <= 0.0 {
                    return false;
                }
                let d = p - center;
                (d.x / radii.x).powi(2) + (d.y / radii.y).powi(2) <= 1.0
            }
            Region::Rect(rect) => {
                p.x >= rect.min.x && p.x < rect.max.x && p.y >= rect.min.y && p.y < rect.max.y
            }
            Region::Triangle([a, b, c]) => {
                let d1 = cross(a, b, p);
                let d2 = cross(b, c, p);
                let d3 = cross(c, a, p);
                let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
                let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
                !(has_neg && has_pos)
            }
            Region::Capsule { from, to, radius } => distance_to_segment(p, from, to) <= radius,
        }
    }

    /// Pixels of a `width` x `height` raster covered by this region, row by row
    pub fn covered_pixels(&self, width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> + '_ {
        let bounds = self.bounds();
        let x_range = clip_span(bounds.min.x, bounds.max.x, width);
        let y_range = clip_span(bounds.min.y, bounds.max.y, height);
        y_range
            .flat_map(move |y| x_range.clone().map(move |x| (x, y)))
            .filter(move |&(x, y)| self.contains(pixel_center(x, y)))
    }
}

/// Sample point of pixel `(x, y)`
pub fn pixel_center(x: u32, y: u32) -> Pos2 {
    pos2(x as f32 + 0.5, y as f32 + 0.5)
}

fn cross(a: Pos2, b: Pos2, p: Pos2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Pixel indices inside `0..limit` whose centers fall in `[min, max]`
fn clip_span(min: f32, max: f32, limit: u32) -> std::ops::Range<u32> {
    if !min.is_finite() || !max.is_finite() {
        return 0..0;
    }
    let start = ((min - 0.5).ceil() as i64).clamp(0, limit as i64) as u32;
    let end = ((max - 0.5).floor() as i64 + 1).clamp(0, limit as i64) as u32;
    start..end.max(start)
}
