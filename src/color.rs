use crate::error::{check_range, Result};

pub type RGB = (u8, u8, u8);

pub const RGB_BLACK: RGB = (0, 0, 0);
pub const RGB_WHITE: RGB = (255, 255, 255);
pub const RGB_GRAY: RGB = (120, 120, 120);
pub const RGB_RED: RGB = (255, 0, 0);
pub const RGB_GREEN: RGB = (0, 255, 0);
pub const RGB_BLUE: RGB = (0, 0, 255);
pub const RGB_YELLOW: RGB = (255, 255, 0);
pub const RGB_ORANGE: RGB = (255, 153, 0);
pub const RGB_PINK: RGB = (255, 105, 180);

pub const ALPHABET_SIZE: usize = 4;

/// Colors shown for the Simon Says symbols 0..3.
pub const SYMBOL_COLORS: [RGB; ALPHABET_SIZE] = [RGB_BLUE, RGB_GREEN, RGB_YELLOW, RGB_RED];

pub fn symbol_color(symbol: u8) -> Result<RGB> {
    check_range("symbol", symbol as usize, ALPHABET_SIZE)?;
    Ok(SYMBOL_COLORS[symbol as usize])
}

/// Packs a color the way the panel stores it: 5 bits red, 6 bits green, 5 bits blue.
pub const fn to_rgb565((r, g, b): RGB) -> u16 {
    ((r as u16 >> 3) << 11) | ((g as u16 >> 2) << 5) | (b as u16 >> 3)
}

pub const fn from_rgb565(rgb565: u16) -> RGB {
    let r = ((rgb565 >> 11) & 0x1F) as u8;
    let g = ((rgb565 >> 5) & 0x3F) as u8;
    let b = (rgb565 & 0x1F) as u8;

    (r << 3, g << 2, b << 3)
}

/// The value a RGB565 panel returns after `color` has been written to it.
pub const fn quantize(color: RGB) -> RGB {
    from_rgb565(to_rgb565(color))
}

/// Linear interpolation between two colors, `t = 0` is `from` and `t = 255` is `to`.
pub fn blend(from: RGB, to: RGB, t: u8) -> RGB {
    let mix = |a: u8, b: u8| -> u8 {
        let (a, b, t) = (a as i32, b as i32, t as i32);
        (a + (b - a) * t / 255) as u8
    };

    (mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

/// Hue, lightness and saturation in `0.0..=1.0` to a 8 bits per channel color.
pub fn hls_to_rgb(hue: f32, lightness: f32, saturation: f32) -> RGB {
    let to_u8 = |v: f32| (v.clamp(0., 1.) * 255.) as u8;

    if saturation == 0. {
        let v = to_u8(lightness);
        return (v, v, v);
    }

    let m2 = if lightness <= 0.5 {
        lightness * (1. + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let m1 = 2. * lightness - m2;

    (
        to_u8(hue_channel(m1, m2, hue + 1. / 3.)),
        to_u8(hue_channel(m1, m2, hue)),
        to_u8(hue_channel(m1, m2, hue - 1. / 3.)),
    )
}

fn hue_channel(m1: f32, m2: f32, hue: f32) -> f32 {
    let hue = hue.rem_euclid(1.);
    if hue < 1. / 6. {
        m1 + (m2 - m1) * hue * 6.
    } else if hue < 0.5 {
        m2
    } else if hue < 2. / 3. {
        m1 + (m2 - m1) * (2. / 3. - hue) * 6.
    } else {
        m1
    }
}

/// `count` fully saturated colors walking once around the hue circle.
pub fn rainbow(count: usize) -> Vec<RGB> {
    (0..count)
        .map(|i| hls_to_rgb(i as f32 / count as f32, 0.5, 1.))
        .collect()
}
