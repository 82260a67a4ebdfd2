//! Raster: Stroked segments and filled circles on a [`PixelBuffer`].
//!
//! Inputs are integer device coordinates. Shapes that extend past the
//! buffer are clipped, never wrapped.

use super::buffer::PixelBuffer;
use super::color::Rgb;
use bitflags::bitflags;

bitflags! {
    /// Cohen-Sutherland region code of a point relative to the buffer.
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    struct Outcode: u8 {
        const LEFT = 0b0001;
        const RIGHT = 0b0010;
        const TOP = 0b0100;
        const BOTTOM = 0b1000;
    }
}

/// Converges in at most four steps for well-formed input.
const MAX_CLIP_STEPS: u32 = 8;

impl PixelBuffer {
    /// Stroke a one-pixel segment from `from` to `to`, endpoints included.
    ///
    /// Uses Bresenham's algorithm after clipping the segment to the buffer.
    pub fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb) {
        let Some(((x0, y0), (x1, y1))) = self.clip_line(from, to) else {
            return;
        };

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.set(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Fill a circle of `radius` pixels centred on `center`.
    ///
    /// Midpoint circle algorithm emitting horizontal spans. A radius of zero
    /// draws a single pixel; a negative radius draws nothing.
    pub fn fill_circle(&mut self, center: (i32, i32), radius: i32, color: Rgb) {
        let (cx, cy) = center;
        if radius <= 0 {
            if radius == 0 {
                self.set(cx, cy, color);
            }
            return;
        }

        let mut x = radius;
        let mut y = 0;
        let mut err = 1 - radius;

        while x >= y {
            self.hline(cx.saturating_sub(x), cx.saturating_add(x), cy.saturating_add(y), color);
            if y != 0 {
                self.hline(cx.saturating_sub(x), cx.saturating_add(x), cy.saturating_sub(y), color);
            }
            if x != y {
                self.hline(cx.saturating_sub(y), cx.saturating_add(y), cy.saturating_add(x), color);
                if y != 0 {
                    self.hline(cx.saturating_sub(y), cx.saturating_add(y), cy.saturating_sub(x), color);
                }
            }

            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    fn outcode(&self, x: i64, y: i64) -> Outcode {
        let mut code = Outcode::empty();
        if x < 0 {
            code |= Outcode::LEFT;
        } else if x >= i64::from(self.width()) {
            code |= Outcode::RIGHT;
        }
        if y < 0 {
            code |= Outcode::TOP;
        } else if y >= i64::from(self.height()) {
            code |= Outcode::BOTTOM;
        }
        code
    }

    /// Cohen-Sutherland clipping. Returns `None` if nothing is visible.
    fn clip_line(&self, from: (i32, i32), to: (i32, i32)) -> Option<((i32, i32), (i32, i32))> {
        if self.is_empty() {
            return None;
        }

        let (mut x0, mut y0) = (i64::from(from.0), i64::from(from.1));
        let (mut x1, mut y1) = (i64::from(to.0), i64::from(to.1));
        let max_x = i64::from(self.width()) - 1;
        let max_y = i64::from(self.height()) - 1;

        // Products of two i32 spans can exceed i64.
        let lerp = |a0: i64, a1: i64, b0: i64, b1: i64, b: i64| -> i64 {
            let scaled = i128::from(a1 - a0) * i128::from(b - b0) / i128::from(b1 - b0);
            a0 + i64::try_from(scaled).unwrap_or(0)
        };

        let mut code0 = self.outcode(x0, y0);
        let mut code1 = self.outcode(x1, y1);

        for _ in 0..MAX_CLIP_STEPS {
            if (code0 | code1).is_empty() {
                let narrow = |v: i64| i32::try_from(v).unwrap_or_default();
                return Some(((narrow(x0), narrow(y0)), (narrow(x1), narrow(y1))));
            }
            if code0.intersects(code1) {
                return None;
            }

            let out = if code0.is_empty() { code1 } else { code0 };
            let (x, y) = if out.contains(Outcode::TOP) {
                (lerp(x0, x1, y0, y1, 0), 0)
            } else if out.contains(Outcode::BOTTOM) {
                (lerp(x0, x1, y0, y1, max_y), max_y)
            } else if out.contains(Outcode::RIGHT) {
                (max_x, lerp(y0, y1, x0, x1, max_x))
            } else {
                (0, lerp(y0, y1, x0, x1, 0))
            };

            if out == code0 {
                (x0, y0) = (x, y);
                code0 = self.outcode(x0, y0);
            } else {
                (x1, y1) = (x, y);
                code1 = self.outcode(x1, y1);
            }
        }

        None
    }
}
