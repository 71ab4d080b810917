use super::{Canvas, Category};
use crate::rng::XorShift64Star;
use narwhal_graphlib::Point;

#[derive(Debug, Clone)]
pub struct SeedOptions {
    pub random_seed: u64,
    /// Radius of the disk around the category anchor that initial positions are drawn from.
    pub radius: f64,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            random_seed: 0,
            radius: 150.0,
        }
    }
}

/// Anchor point for a category's cluster.
///
/// The first two categories sit on a row near the top; the remaining even codes stack down the
/// left edge, one short side apart. Odd codes from 3 upwards share the origin.
pub fn category_anchor(category: Category, canvas: &Canvas) -> Point {
    const PER_ROW: usize = 2;
    const DIVISOR: f64 = 5.0;

    let side = canvas.short_side();
    let code = category.code();
    if code < PER_ROW {
        Point::new(side * code as f64 + side / 3.0, side / DIVISOR)
    } else if code % PER_ROW == 0 {
        Point::new(side / DIVISOR, side * (code / PER_ROW) as f64 + side / DIVISOR)
    } else {
        Point::ORIGIN
    }
}

fn sample_disk(center: Point, radius: f64, rng: &mut XorShift64Star) -> Point {
    let theta = rng.next_f64_unit() * std::f64::consts::TAU;
    let r = radius * rng.next_f64_unit().sqrt();
    Point::new(center.x + r * theta.cos(), center.y + r * theta.sin())
}

/// Seeded initial placement. One generator is shared by every call, so successive vertices of
/// the same category land at different points of the category's disk.
#[derive(Debug, Clone)]
pub struct Placement {
    canvas: Canvas,
    radius: f64,
    rng: XorShift64Star,
}

impl Placement {
    pub fn new(canvas: &Canvas, opts: &SeedOptions) -> Self {
        Self {
            canvas: *canvas,
            radius: opts.radius,
            rng: XorShift64Star::new(opts.random_seed),
        }
    }

    /// Next position for a vertex of `category`, inside the disk around its anchor.
    pub fn next_position(&mut self, category: Category) -> Point {
        let anchor = category_anchor(category, &self.canvas);
        sample_disk(anchor, self.radius, &mut self.rng)
    }
}
