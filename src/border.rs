use std::time::Duration;

use crate::{
    color::{RGB, RGB_BLACK},
    pacer::Pacer,
    pixel_buffer::{PixelBuffer, GRID_SIZE},
    surface::PixelSurface,
};

/// Ring along the edges of the grid.
pub const OUTER_RING: usize = 0;
/// Ring one cell in from the edges.
pub const INNER_RING: usize = 1;

/// Cells `(x, y)` of the one pixel wide ring `offset` cells away from the edges.
///
/// The left and right columns come first, then the remaining cells of the top and bottom rows.
pub fn ring(offset: usize) -> Vec<(usize, usize)> {
    assert!(offset < GRID_SIZE / 2, "ring offset {offset} out of the grid");
    let near = offset;
    let far = GRID_SIZE - 1 - offset;

    let mut cells = Vec::with_capacity(4 * (far - near));
    for i in near..=far {
        cells.push((near, i));
        cells.push((far, i));
    }
    for i in (near + 1)..far {
        cells.push((i, near));
        cells.push((i, far));
    }
    cells
}

pub fn draw_ring<S: PixelSurface>(surface: &mut S, offset: usize, color: RGB) {
    for (x, y) in ring(offset) {
        surface.set_pixel(x, y, color);
    }
}

/// Puts the pixels of `screen` back on the ring.
pub fn restore_ring<S: PixelSurface>(surface: &mut S, offset: usize, screen: &PixelBuffer) {
    for (x, y) in ring(offset) {
        surface.set_pixel(x, y, screen[(x, y)]);
    }
}

pub fn paint_ring(buffer: &mut PixelBuffer, offset: usize, color: RGB) {
    for (x, y) in ring(offset) {
        buffer[(x, y)] = color;
    }
}

/// Copy of `screen` framed the way the surface looks after [`move_in`]:
/// black outer ring, `color` on the inner ring.
pub fn add_inner_border(screen: &PixelBuffer, color: RGB) -> PixelBuffer {
    let mut framed = screen.clone();
    paint_ring(&mut framed, OUTER_RING, RGB_BLACK);
    paint_ring(&mut framed, INNER_RING, color);
    framed
}

/// Draws a border along the edges, then shrinks it by one cell.
pub fn move_in<S: PixelSurface, P: Pacer>(
    surface: &mut S,
    pacer: &mut P,
    color: RGB,
    step_delay: Duration,
) {
    draw_ring(surface, OUTER_RING, color);
    pacer.pause(step_delay);
    draw_ring(surface, INNER_RING, color);
    draw_ring(surface, OUTER_RING, RGB_BLACK);
}

/// Grows the inner border back to the edges, then removes it, uncovering `screen`.
pub fn move_out<S: PixelSurface, P: Pacer>(
    surface: &mut S,
    pacer: &mut P,
    color: RGB,
    step_delay: Duration,
    screen: &PixelBuffer,
) {
    draw_ring(surface, OUTER_RING, color);
    restore_ring(surface, INNER_RING, screen);
    pacer.pause(step_delay);
    restore_ring(surface, OUTER_RING, screen);
}
