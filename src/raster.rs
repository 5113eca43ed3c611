//! Shape drawing on top of single-pixel access.
//!
//! Every operation here is best-effort: pixels that fall outside the panel
//! are skipped individually and the operation keeps going, so a shape that
//! straddles the panel edge is drawn as far as it fits. The `bool` result is
//! only a summary — `true` when every constituent pixel landed, `false` when
//! any was out of range. Nothing is rolled back.
//!
//! Each operation suspends hardware redraw on entry and re-applies the
//! panel's auto-update setting on exit, batching all pixel writes of one
//! shape into a single visible update.

use crate::device::PixelDevice;
use crate::panel::Panel;

impl<D: PixelDevice> Panel<D> {
    /// Draw a horizontal line at row `y` between columns `x1` and `x2`
    /// inclusive, in either order.
    pub fn draw_hline(&mut self, y: u16, x1: u16, x2: u16, state: bool) -> bool {
        let mut all_in_range = true;
        self.suspend_updates();

        let (x1, x2) = if x1 > x2 { (x2, x1) } else { (x1, x2) };
        for x in x1..=x2 {
            all_in_range &= self.set_point(x, y, state);
        }

        self.resume_updates();
        all_in_range
    }

    /// Draw a vertical line at column `x` between rows `y1` and `y2`
    /// inclusive, in either order.
    pub fn draw_vline(&mut self, x: u16, y1: u16, y2: u16, state: bool) -> bool {
        let mut all_in_range = true;
        self.suspend_updates();

        let (y1, y2) = if y1 > y2 { (y2, y1) } else { (y1, y2) };
        for y in y1..=y2 {
            all_in_range &= self.set_point(x, y, state);
        }

        self.resume_updates();
        all_in_range
    }

    /// Draw an arbitrary line between two points with Bresenham's integer
    /// error algorithm.
    ///
    /// The walk is normalized to start at the lower-x endpoint, so swapping
    /// the two endpoints plots the identical pixel set.
    pub fn draw_line(&mut self, x1: u16, y1: u16, x2: u16, y2: u16, state: bool) -> bool {
        let mut all_in_range = true;
        self.suspend_updates();

        trace!("line ({}, {}) -> ({}, {})", x1, y1, x2, y2);

        let ((x1, y1), (x2, y2)) = if x1 > x2 {
            ((x2, y2), (x1, y1))
        } else {
            ((x1, y1), (x2, y2))
        };
        let (mut x, mut y) = (i32::from(x1), i32::from(y1));
        let (x_end, y_end) = (i32::from(x2), i32::from(y2));

        let dx = x_end - x;
        let dy = (y_end - y).abs();
        let sy = if y < y_end { 1 } else { -1 };
        let mut err = if dx > dy { dx } else { -dy } / 2;

        loop {
            all_in_range &= self.set_point_signed(x, y, state);
            if x == x_end && y == y_end {
                break;
            }
            let e2 = err;
            if e2 > -dx {
                err -= dy;
                x += 1;
            }
            if e2 < dy {
                err += dx;
                y += sy;
            }
        }

        self.resume_updates();
        all_in_range
    }

    /// Draw the axis-aligned rectangle whose diagonal runs between the two
    /// corners, as two horizontal plus two vertical lines.
    pub fn draw_rectangle(&mut self, x1: u16, y1: u16, x2: u16, y2: u16, state: bool) -> bool {
        let mut all_in_range = true;
        self.suspend_updates();

        all_in_range &= self.draw_hline(y1, x1, x2, state);
        all_in_range &= self.draw_hline(y2, x1, x2, state);
        all_in_range &= self.draw_vline(x1, y1, y2, state);
        all_in_range &= self.draw_vline(x2, y1, y2, state);

        self.resume_updates();
        all_in_range
    }

    /// Draw a triangle through the three vertices, in the order given.
    pub fn draw_triangle(
        &mut self,
        v1: (u16, u16),
        v2: (u16, u16),
        v3: (u16, u16),
        state: bool,
    ) -> bool {
        let mut all_in_range = true;
        self.suspend_updates();

        all_in_range &= self.draw_line(v1.0, v1.1, v2.0, v2.1, state);
        all_in_range &= self.draw_line(v2.0, v2.1, v3.0, v3.1, state);
        all_in_range &= self.draw_line(v3.0, v3.1, v1.0, v1.1, state);

        self.resume_updates();
        all_in_range
    }

    /// Draw a quadrilateral through the four vertices, in the order given.
    pub fn draw_quadrilateral(
        &mut self,
        v1: (u16, u16),
        v2: (u16, u16),
        v3: (u16, u16),
        v4: (u16, u16),
        state: bool,
    ) -> bool {
        let mut all_in_range = true;
        self.suspend_updates();

        all_in_range &= self.draw_line(v1.0, v1.1, v2.0, v2.1, state);
        all_in_range &= self.draw_line(v2.0, v2.1, v3.0, v3.1, state);
        all_in_range &= self.draw_line(v3.0, v3.1, v4.0, v4.1, state);
        all_in_range &= self.draw_line(v4.0, v4.1, v1.0, v1.1, state);

        self.resume_updates();
        all_in_range
    }

    /// Draw a circle of radius `r` around `(xc, yc)` with the midpoint
    /// algorithm, plotting all eight symmetric points at every step.
    pub fn draw_circle(&mut self, xc: u16, yc: u16, r: u16, state: bool) -> bool {
        let mut all_in_range = true;
        self.suspend_updates();

        trace!("circle center ({}, {}) radius {}", xc, yc, r);

        let (xc, yc) = (i32::from(xc), i32::from(yc));
        let mut x = 0;
        let mut y = i32::from(r);
        let mut pk = 3 - 2 * i32::from(r);

        all_in_range &= self.circle_points(xc, yc, x, y, state);
        while x < y {
            if pk <= 0 {
                pk += 4 * x + 6;
                x += 1;
            } else {
                pk += 4 * (x - y) + 10;
                x += 1;
                y -= 1;
            }
            all_in_range &= self.circle_points(xc, yc, x, y, state);
        }

        self.resume_updates();
        all_in_range
    }

    /// Plot the eight symmetric reflections of one circle step.
    fn circle_points(&mut self, xc: i32, yc: i32, x: i32, y: i32, state: bool) -> bool {
        let mut all_in_range = true;

        all_in_range &= self.set_point_signed(xc + x, yc + y, state);
        all_in_range &= self.set_point_signed(xc - x, yc + y, state);
        all_in_range &= self.set_point_signed(xc + x, yc - y, state);
        all_in_range &= self.set_point_signed(xc - x, yc - y, state);
        all_in_range &= self.set_point_signed(xc + y, yc + x, state);
        all_in_range &= self.set_point_signed(xc - y, yc + x, state);
        all_in_range &= self.set_point_signed(xc + y, yc - x, state);
        all_in_range &= self.set_point_signed(xc - y, yc - x, state);

        all_in_range
    }
}
