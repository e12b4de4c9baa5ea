//! Tine geometry and touch hit testing.
//!
//! Tines hang down from a horizontal bridge line. The center tine is the
//! longest one and every step away from it shortens a tine by `step_height`,
//! so the row tapers symmetrically to both sides.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub count: usize,
    pub center: usize,
    pub max_height: i32,
    pub step_height: i32,
    pub width: i32,
    pub gap: i32,
    pub start_x: i32,
    /// y coordinate of the bridge line, top edge of every tine
    pub bridge_y: i32,
}

impl Layout {
    /// Horizontal distance between the left edges of two neighbouring tines.
    pub const fn pitch(&self) -> i32 {
        self.width + self.gap
    }

    pub const fn height(&self, pos: usize) -> i32 {
        let distance = pos.abs_diff(self.center) as i32;
        self.max_height - self.step_height * distance
    }

    pub const fn x(&self, pos: usize) -> i32 {
        self.start_x + pos as i32 * self.pitch()
    }

    pub fn bounds(&self, pos: usize) -> Rectangle {
        Rectangle::new(
            Point::new(self.x(pos), self.bridge_y),
            Size::new(self.width.max(0) as u32, self.height(pos).max(0) as u32),
        )
    }

    /// Total horizontal span covered by the tines.
    pub fn span(&self) -> Rectangle {
        let width = self.count as i32 * self.pitch() - self.gap;
        Rectangle::new(
            Point::new(self.start_x, self.bridge_y),
            Size::new(width.max(0) as u32, self.max_height.max(0) as u32),
        )
    }

    /// Returns the tine under `point`, if any.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        if point.y < self.bridge_y {
            return None;
        }
        (0..self.count).find(|&pos| {
            let x = self.x(pos);
            point.x >= x
                && point.x < x + self.width
                && point.y < self.bridge_y + self.height(pos)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LAYOUT, NUM_TINES, SCREEN_HEIGHT, SCREEN_WIDTH};

    #[test]
    fn heights_taper_symmetrically() {
        for pos in 0..NUM_TINES {
            assert_eq!(LAYOUT.height(pos), LAYOUT.height(NUM_TINES - 1 - pos));
            assert!(LAYOUT.height(LAYOUT.center) >= LAYOUT.height(pos));
        }
    }

    #[test]
    fn reference_heights() {
        assert_eq!(LAYOUT.height(0), 152);
        assert_eq!(LAYOUT.height(16), 152);
        assert_eq!(LAYOUT.height(8), 200);
        assert_eq!(LAYOUT.height(7), 194);
    }

    #[test]
    fn tines_fit_on_screen() {
        let last = NUM_TINES - 1;
        assert!(LAYOUT.x(0) >= 0);
        assert!(LAYOUT.x(last) + LAYOUT.width <= SCREEN_WIDTH as i32);
        assert!(LAYOUT.bridge_y + LAYOUT.max_height <= SCREEN_HEIGHT as i32);
        assert_eq!(
            LAYOUT.span().bottom_right(),
            Some(Point::new(LAYOUT.x(last) + LAYOUT.width - 1, LAYOUT.bridge_y + 199))
        );
    }

    #[test]
    fn x_advances_by_pitch() {
        assert_eq!(LAYOUT.pitch(), 18);
        for pos in 1..NUM_TINES {
            assert_eq!(LAYOUT.x(pos) - LAYOUT.x(pos - 1), LAYOUT.pitch());
        }
    }

    #[test]
    fn hit_just_below_bridge() {
        for pos in 0..NUM_TINES {
            let p = Point::new(LAYOUT.x(pos) + 1, LAYOUT.bridge_y + 1);
            assert_eq!(LAYOUT.hit_test(p), Some(pos));
        }
    }

    #[test]
    fn above_bridge_is_no_hit() {
        for x in -5..(SCREEN_WIDTH as i32 + 5) {
            assert_eq!(LAYOUT.hit_test(Point::new(x, LAYOUT.bridge_y - 1)), None);
        }
    }

    #[test]
    fn gaps_and_tips() {
        // gap between tines 3 and 4
        let gap_x = LAYOUT.x(3) + LAYOUT.width;
        assert_eq!(LAYOUT.hit_test(Point::new(gap_x, LAYOUT.bridge_y + 10)), None);

        // last row of pixels of a tine hits, one below does not
        let bottom = LAYOUT.bridge_y + LAYOUT.height(0);
        assert_eq!(LAYOUT.hit_test(Point::new(LAYOUT.x(0), bottom - 1)), Some(0));
        assert_eq!(LAYOUT.hit_test(Point::new(LAYOUT.x(0), bottom)), None);

        // the center tine reaches further down than its neighbours
        let y = LAYOUT.bridge_y + LAYOUT.height(7) + 1;
        assert_eq!(LAYOUT.hit_test(Point::new(LAYOUT.x(8) + 2, y)), Some(8));
        assert_eq!(LAYOUT.hit_test(Point::new(LAYOUT.x(7) + 2, y)), None);
    }

    #[test]
    fn outside_the_row_is_no_hit() {
        let y = LAYOUT.bridge_y + 5;
        assert_eq!(LAYOUT.hit_test(Point::new(LAYOUT.x(0) - 1, y)), None);
        assert_eq!(LAYOUT.hit_test(Point::new(-40, y)), None);
        assert_eq!(LAYOUT.hit_test(Point::new(LAYOUT.x(16) + LAYOUT.width, y)), None);
    }

    #[test]
    fn bounds_match_hit_test() {
        for pos in 0..NUM_TINES {
            let b = LAYOUT.bounds(pos);
            assert_eq!(LAYOUT.hit_test(b.top_left), Some(pos));
            assert_eq!(LAYOUT.hit_test(b.bottom_right().unwrap()), Some(pos));
        }
    }
}
