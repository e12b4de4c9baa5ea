//! Kalimba drawing.
//!
//! The static art is drawn once; afterwards only tines whose pressed flag
//! differs from what is on screen get repainted.

use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_8X13_BOLD};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle,
};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use crate::config::*;
use crate::gesture::GestureMode;
use crate::layout::Layout;
use crate::tines::{Tine, TineBank};

const BRIDGE_THICKNESS: i32 = 8;
const LABEL_MARGIN: i32 = 3;

pub struct Renderer {
    layout: Layout,
    drawn: [bool; NUM_TINES],
}

impl Renderer {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            drawn: [false; NUM_TINES],
        }
    }

    pub fn draw_background<D>(
        &mut self,
        target: &mut D,
        tines: &TineBank,
        mode: GestureMode,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let screen = target.bounding_box();
        target.clear(BACKGROUND_COLOR)?;

        let body_style = PrimitiveStyleBuilder::new()
            .fill_color(BODY_COLOR)
            .stroke_color(BODY_EDGE_COLOR)
            .stroke_width(2)
            .build();
        RoundedRectangle::with_equal_corners(screen.offset(-2), Size::new(16, 16))
            .into_styled(body_style)
            .draw(target)?;

        let span = self.layout.span();
        let center_x = span.center().x;
        Circle::with_center(
            Point::new(center_x, span.top_left.y + span.size.height as i32 - 28),
            36,
        )
        .into_styled(PrimitiveStyle::with_fill(SOUND_HOLE_COLOR))
        .draw(target)?;

        let header = MonoTextStyle::new(&FONT_8X13_BOLD, HEADER_COLOR);
        let header_y = self.layout.bridge_y - BRIDGE_THICKNESS - 2;
        let left = TextStyleBuilder::new()
            .alignment(Alignment::Left)
            .baseline(Baseline::Bottom)
            .build();
        let right = TextStyleBuilder::new()
            .alignment(Alignment::Right)
            .baseline(Baseline::Bottom)
            .build();
        Text::with_text_style("KALIMBA", Point::new(span.top_left.x, header_y), header, left)
            .draw(target)?;
        Text::with_text_style(
            mode.name(),
            Point::new(span.top_left.x + span.size.width as i32 - 1, header_y),
            header,
            right,
        )
        .draw(target)?;

        let bridge = Rectangle::new(
            Point::new(span.top_left.x - 4, self.layout.bridge_y - BRIDGE_THICKNESS),
            Size::new(span.size.width + 8, BRIDGE_THICKNESS as u32),
        );
        target.fill_solid(&bridge, BRIDGE_COLOR)?;
        Line::new(
            bridge.top_left,
            bridge.top_left + Point::new(bridge.size.width as i32 - 1, 0),
        )
        .into_styled(PrimitiveStyle::with_stroke(BRIDGE_SHINE_COLOR, 1))
        .draw(target)?;

        for (pos, tine) in tines.iter().enumerate().take(NUM_TINES) {
            self.draw_tine(target, pos, tine, false)?;
            self.drawn[pos] = false;
        }
        Ok(())
    }

    /// Repaints tines whose pressed flag changed since they were last drawn.
    /// Returns the number of repainted tines.
    pub fn refresh<D>(&mut self, target: &mut D, tines: &TineBank) -> Result<usize, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let mut count = 0;
        for (pos, tine) in tines.iter().enumerate().take(NUM_TINES) {
            if self.drawn[pos] != tine.pressed {
                self.draw_tine(target, pos, tine, tine.pressed)?;
                self.drawn[pos] = tine.pressed;
                count += 1;
            }
        }
        Ok(count)
    }

    pub fn draw_tine<D>(
        &self,
        target: &mut D,
        pos: usize,
        tine: &Tine,
        pressed: bool,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let (fill, text) = if pressed {
            (TINE_PRESSED_COLOR, LABEL_PRESSED_COLOR)
        } else {
            (TINE_COLOR, LABEL_COLOR)
        };
        let bounds = self.layout.bounds(pos);
        target.fill_solid(&bounds, fill)?;

        let label_pos = Point::new(
            bounds.center().x,
            bounds.top_left.y + bounds.size.height as i32 - LABEL_MARGIN,
        );
        let style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Bottom)
            .build();
        Text::with_text_style(
            tine.label,
            label_pos,
            MonoTextStyle::new(&FONT_6X10, text),
            style,
        )
        .draw(target)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_graphics::Pixel;

    struct Frame {
        pixels: Vec<Rgb565>,
        writes: usize,
    }

    impl Frame {
        fn new() -> Self {
            Self {
                pixels: vec![Rgb565::BLACK; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
                writes: 0,
            }
        }

        fn at(&self, x: i32, y: i32) -> Rgb565 {
            self.pixels[(y * SCREEN_WIDTH as i32 + x) as usize]
        }

        fn count_in(&self, area: &Rectangle, color: Rgb565) -> usize {
            area.points().filter(|p| self.at(p.x, p.y) == color).count()
        }
    }

    impl OriginDimensions for Frame {
        fn size(&self) -> Size {
            Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
        }
    }

    impl DrawTarget for Frame {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            let area = self.bounding_box();
            for Pixel(p, color) in pixels {
                if area.contains(p) {
                    self.pixels[(p.y * SCREEN_WIDTH as i32 + p.x) as usize] = color;
                    self.writes += 1;
                }
            }
            Ok(())
        }
    }

    fn tine_top(pos: usize) -> (i32, i32) {
        (LAYOUT.x(pos) + 1, LAYOUT.bridge_y + 2)
    }

    fn drawn() -> (Frame, Renderer, TineBank) {
        let mut frame = Frame::new();
        let mut renderer = Renderer::new(LAYOUT);
        let tines = TineBank::default();
        renderer
            .draw_background(&mut frame, &tines, GestureMode::Shift)
            .unwrap();
        (frame, renderer, tines)
    }

    #[test]
    fn background_shows_resting_tines() {
        let (frame, _, _) = drawn();
        for pos in 0..NUM_TINES {
            let (x, y) = tine_top(pos);
            assert_eq!(frame.at(x, y), TINE_COLOR);
        }
        // gap between tines is body
        assert_eq!(frame.at(LAYOUT.x(3) + LAYOUT.width, LAYOUT.bridge_y + 2), BODY_COLOR);
        // bridge bar right above the tines
        assert_eq!(frame.at(LAYOUT.x(0), LAYOUT.bridge_y - 3), BRIDGE_COLOR);
        assert_eq!(frame.at(LAYOUT.x(0), LAYOUT.bridge_y - BRIDGE_THICKNESS), BRIDGE_SHINE_COLOR);
        // header text somewhere above the bridge
        let header = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, 20));
        assert!(frame.count_in(&header, HEADER_COLOR) > 0);
    }

    #[test]
    fn labels_are_drawn_on_tines() {
        let (frame, _, _) = drawn();
        for pos in 0..NUM_TINES {
            assert!(frame.count_in(&LAYOUT.bounds(pos), LABEL_COLOR) > 0);
        }
    }

    #[test]
    fn refresh_redraws_only_changed_tines() {
        let (mut frame, mut renderer, mut tines) = drawn();
        assert_eq!(renderer.refresh(&mut frame, &tines).unwrap(), 0);

        tines.set_pressed(5, true);
        assert_eq!(renderer.refresh(&mut frame, &tines).unwrap(), 1);
        let (x, y) = tine_top(5);
        assert_eq!(frame.at(x, y), TINE_PRESSED_COLOR);
        assert!(frame.count_in(&LAYOUT.bounds(5), LABEL_PRESSED_COLOR) > 0);
        let (x, y) = tine_top(4);
        assert_eq!(frame.at(x, y), TINE_COLOR);

        let writes = frame.writes;
        assert_eq!(renderer.refresh(&mut frame, &tines).unwrap(), 0);
        assert_eq!(frame.writes, writes);

        tines.set_pressed(5, false);
        tines.set_pressed(6, true);
        assert_eq!(renderer.refresh(&mut frame, &tines).unwrap(), 2);
        let (x, y) = tine_top(5);
        assert_eq!(frame.at(x, y), TINE_COLOR);
        assert_eq!(frame.count_in(&LAYOUT.bounds(5), LABEL_PRESSED_COLOR), 0);
        let (x, y) = tine_top(6);
        assert_eq!(frame.at(x, y), TINE_PRESSED_COLOR);
    }

    #[test]
    fn background_resets_pressed_state() {
        let (mut frame, mut renderer, mut tines) = drawn();
        tines.set_pressed(2, true);
        renderer.refresh(&mut frame, &tines).unwrap();

        renderer
            .draw_background(&mut frame, &tines, GestureMode::Slide)
            .unwrap();
        let (x, y) = tine_top(2);
        assert_eq!(frame.at(x, y), TINE_COLOR);
        // still pressed in the bank, so the next refresh paints it again
        assert_eq!(renderer.refresh(&mut frame, &tines).unwrap(), 1);
        assert_eq!(frame.at(x, y), TINE_PRESSED_COLOR);
    }
}
