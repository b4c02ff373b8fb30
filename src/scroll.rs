use std::time::Duration;

use crate::{
    border,
    color::RGB,
    config::Config,
    error::{check_size, Result},
    logger,
    pacer::Pacer,
    pixel_buffer::{Line, PixelBuffer, GRID_SIZE},
    surface::PixelSurface,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// New content comes in from the bottom, rows move towards row 0.
    Up,
    /// New content comes in from the top.
    Down,
    /// New content comes in from the right, columns move towards column 0.
    Left,
    /// New content comes in from the left.
    Right,
}

impl ScrollDirection {
    pub const ALL: [ScrollDirection; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Up and down move rows, left and right move columns.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Row or column where new content enters the surface.
    pub fn entry_index(self) -> usize {
        match self {
            Self::Up | Self::Left => GRID_SIZE - 1,
            Self::Down | Self::Right => 0,
        }
    }

    /// Rows or columns of `screen` in the order they are fed into the surface.
    pub fn incoming_lines(self, screen: &PixelBuffer) -> Vec<Line> {
        let mut lines = if self.is_vertical() {
            screen.rows()
        } else {
            screen.columns()
        };
        if self.entry_index() == 0 {
            lines.reverse();
        }
        lines
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderColors {
    /// Around the screen that is scrolled away.
    pub outgoing: RGB,
    /// Around the screen that comes in.
    pub incoming: RGB,
}

impl BorderColors {
    pub fn new(outgoing: RGB, incoming: RGB) -> Self {
        Self { outgoing, incoming }
    }

    pub fn uniform(color: RGB) -> Self {
        Self::new(color, color)
    }

    pub fn from_slice(colors: &[RGB]) -> Result<Self> {
        check_size("border colors", 2, colors.len())?;
        Ok(Self::new(colors[0], colors[1]))
    }
}

fn read_line<S: PixelSurface>(surface: &S, vertical: bool, index: usize) -> Line {
    std::array::from_fn(|i| {
        if vertical {
            surface.get_pixel(i, index)
        } else {
            surface.get_pixel(index, i)
        }
    })
}

fn write_line<S: PixelSurface>(surface: &mut S, vertical: bool, index: usize, line: &Line) {
    for (i, &color) in line.iter().enumerate() {
        if vertical {
            surface.set_pixel(i, index, color);
        } else {
            surface.set_pixel(index, i, color);
        }
    }
}

/// Moves every row (or column) one step away from the entry edge, dropping the one at
/// the opposite edge, and writes `line` at the entry edge.
pub fn shift_in_line<S: PixelSurface>(surface: &mut S, direction: ScrollDirection, line: &Line) {
    let vertical = direction.is_vertical();
    let entry = direction.entry_index();

    let targets: Vec<usize> = if entry == 0 {
        (1..GRID_SIZE).rev().collect()
    } else {
        (0..GRID_SIZE - 1).collect()
    };
    for target in targets {
        let source = if entry == 0 { target - 1 } else { target + 1 };
        let moved = read_line(surface, vertical, source);
        write_line(surface, vertical, target, &moved);
    }
    write_line(surface, vertical, entry, line);
}

/// Screen changes on a single LED panel, animated as a bordered wipe.
pub struct ScrollTransition<S: PixelSurface, P: Pacer> {
    surface: S,
    pacer: P,
    border_colors: BorderColors,
    step_delay: Duration,
    try_scroll_color: RGB,
    min_flash: Duration,
}

impl<S: PixelSurface, P: Pacer> ScrollTransition<S, P> {
    pub fn new(cfg: &Config, surface: S, pacer: P) -> Self {
        logger::init_from_config(cfg);

        Self {
            surface,
            pacer,
            border_colors: cfg.border_colors,
            step_delay: cfg.step_delay,
            try_scroll_color: cfg.try_scroll_color,
            min_flash: cfg.min_flash,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Replaces the displayed screen with `screen` (64 colors, row-major).
    ///
    /// `border_colors` must hold two colors: around the outgoing screen, then around the
    /// incoming one. Bad sizes are reported before anything is drawn.
    pub fn scroll(
        &mut self,
        direction: ScrollDirection,
        screen: &[RGB],
        border_colors: &[RGB],
        step_delay: Duration,
    ) -> Result<()> {
        let screen = PixelBuffer::from_slice(screen)?;
        let colors = BorderColors::from_slice(border_colors)?;

        self.scroll_to(direction, &screen, colors, step_delay);
        Ok(())
    }

    pub fn scroll_to(
        &mut self,
        direction: ScrollDirection,
        screen: &PixelBuffer,
        colors: BorderColors,
        step_delay: Duration,
    ) {
        info!(
            "scroll {:?} to screen {:08x}",
            direction,
            screen.checksum()
        );

        self.pacer.pause(step_delay);
        border::move_in(&mut self.surface, &mut self.pacer, colors.outgoing, step_delay);

        let framed = border::add_inner_border(screen, colors.incoming);

        self.pacer.pause(step_delay);
        for line in direction.incoming_lines(&framed) {
            shift_in_line(&mut self.surface, direction, &line);
            self.pacer.pause(step_delay);
        }

        border::move_out(
            &mut self.surface,
            &mut self.pacer,
            colors.incoming,
            step_delay,
            screen,
        );
        debug!("scroll {:?} done", direction);
    }

    pub fn scroll_up(&mut self, screen: &[RGB]) -> Result<()> {
        self.scroll_with_defaults(ScrollDirection::Up, screen)
    }

    pub fn scroll_down(&mut self, screen: &[RGB]) -> Result<()> {
        self.scroll_with_defaults(ScrollDirection::Down, screen)
    }

    pub fn scroll_left(&mut self, screen: &[RGB]) -> Result<()> {
        self.scroll_with_defaults(ScrollDirection::Left, screen)
    }

    pub fn scroll_right(&mut self, screen: &[RGB]) -> Result<()> {
        self.scroll_with_defaults(ScrollDirection::Right, screen)
    }

    fn scroll_with_defaults(&mut self, direction: ScrollDirection, screen: &[RGB]) -> Result<()> {
        let screen = PixelBuffer::from_slice(screen)?;
        self.scroll_to(direction, &screen, self.border_colors, self.step_delay);
        Ok(())
    }

    /// Shows that there is nothing to scroll to in `direction`: the border moves in, the
    /// edge new content would enter from lights up, then the border moves out again.
    ///
    /// The displayed screen is the same before and after the call.
    pub fn try_scroll(&mut self, direction: ScrollDirection, border_color: RGB, step_delay: Duration) {
        info!("try scroll {:?}: blocked", direction);
        let screen = self.surface.pixels();

        self.pacer.pause(step_delay);
        border::move_in(&mut self.surface, &mut self.pacer, border_color, step_delay);

        self.pacer.pause(step_delay);
        let edge = [border_color; GRID_SIZE];
        write_line(
            &mut self.surface,
            direction.is_vertical(),
            direction.entry_index(),
            &edge,
        );
        self.pacer.pause((step_delay * 2).max(self.min_flash));

        border::move_out(
            &mut self.surface,
            &mut self.pacer,
            border_color,
            step_delay,
            &screen,
        );
    }

    pub fn try_scroll_default(&mut self, direction: ScrollDirection) {
        self.try_scroll(direction, self.try_scroll_color, self.step_delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        color::{RGB_BLACK, RGB_BLUE, RGB_GREEN, RGB_RED, RGB_YELLOW},
        error::Error,
        pacer, surface,
    };

    fn numbered_screen() -> PixelBuffer {
        let mut screen = PixelBuffer::new();
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                screen[(x, y)] = (x as u8 * 10, y as u8 * 10, 1);
            }
        }
        screen
    }

    fn make_transition(screen: &PixelBuffer) -> ScrollTransition<surface::Fake, pacer::Fake> {
        ScrollTransition::new(
            &Config::default(),
            surface::Fake::new().with_pixels(screen),
            pacer::Fake,
        )
    }

    #[test]
    fn test_incoming_lines_order() {
        let screen = numbered_screen();

        assert_eq!(screen.row(0), ScrollDirection::Up.incoming_lines(&screen)[0]);
        assert_eq!(screen.row(7), ScrollDirection::Down.incoming_lines(&screen)[0]);
        assert_eq!(screen.column(0), ScrollDirection::Left.incoming_lines(&screen)[0]);
        assert_eq!(screen.column(7), ScrollDirection::Right.incoming_lines(&screen)[0]);
    }

    #[test]
    fn test_shift_in_line_up() {
        let screen = numbered_screen();
        let mut surface = surface::Fake::new().with_pixels(&screen);

        shift_in_line(&mut surface, ScrollDirection::Up, &[RGB_RED; GRID_SIZE]);

        let shifted = surface.pixels();
        for y in 0..GRID_SIZE - 1 {
            assert_eq!(screen.row(y + 1), shifted.row(y));
        }
        assert_eq!([RGB_RED; GRID_SIZE], shifted.row(7));
    }

    #[test]
    fn test_shift_in_line_right() {
        let screen = numbered_screen();
        let mut surface = surface::Fake::new().with_pixels(&screen);

        shift_in_line(&mut surface, ScrollDirection::Right, &[RGB_GREEN; GRID_SIZE]);

        let shifted = surface.pixels();
        assert_eq!([RGB_GREEN; GRID_SIZE], shifted.column(0));
        for x in 1..GRID_SIZE {
            assert_eq!(screen.column(x - 1), shifted.column(x));
        }
    }

    #[test]
    fn test_scroll_ends_on_new_screen() {
        let target = numbered_screen();
        for direction in ScrollDirection::ALL {
            let mut transition = make_transition(&PixelBuffer::filled(RGB_YELLOW));
            transition
                .scroll(
                    direction,
                    target.as_slice(),
                    &[RGB_RED, RGB_BLUE],
                    Duration::ZERO,
                )
                .unwrap();

            assert_eq!(target, transition.surface().pixels(), "{direction:?}");
        }
    }

    #[test]
    fn test_scroll_rejects_bad_input_before_drawing() {
        let mut transition = make_transition(&PixelBuffer::new());

        assert_eq!(
            Err(Error::DataSize {
                what: "screen",
                expected: 64,
                actual: 63
            }),
            transition.scroll(
                ScrollDirection::Up,
                &[RGB_RED; 63],
                &[RGB_RED, RGB_BLUE],
                Duration::ZERO
            )
        );
        assert_eq!(
            Err(Error::DataSize {
                what: "border colors",
                expected: 2,
                actual: 3
            }),
            transition.scroll(
                ScrollDirection::Left,
                &[RGB_RED; 64],
                &[RGB_RED, RGB_BLUE, RGB_GREEN],
                Duration::ZERO
            )
        );
        assert_eq!(0, transition.surface().writes());
    }

    #[test]
    fn test_try_scroll_keeps_screen() {
        let screen = numbered_screen();
        for direction in ScrollDirection::ALL {
            let mut transition = make_transition(&screen);
            transition.try_scroll(direction, RGB_RED, Duration::ZERO);

            assert_eq!(screen, transition.surface().pixels(), "{direction:?}");
            assert!(transition.surface().writes() > 0);
        }
    }

    #[test]
    fn test_try_scroll_on_black_screen() {
        let mut transition = make_transition(&PixelBuffer::new());
        transition.try_scroll_default(ScrollDirection::Down);

        assert!(!transition.surface().pixels().contains(RGB_RED));
        assert_eq!(PixelBuffer::filled(RGB_BLACK), transition.into_surface().pixels());
    }
}
