use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color into a u32 value (0xRRGGBB format)
#[allow(clippy::cast_lossless)]
pub const fn u32_from_rgb(color: Rgb) -> u32 {
    (color.r as u32) << 16 | (color.g as u32) << 8 | color.b as u32
}

/// Convert a 16-bit hue plus 8-bit saturation and value into a packed
/// 0xRRGGBB color.
///
/// The whole `u16` range is one revolution of the color wheel, so hue
/// arithmetic can simply wrap in either direction. Pure red is centered
/// on the rollover point: values just above 0 and just below 65536 all
/// land on red, and 32768 is the midpoint of cyan.
///
/// The result is linear, not perceptual; pass it through
/// [`crate::gamma32`] when colors look washed out.
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn hsv16_to_rgb(hue: u16, sat: u8, val: u8) -> u32 {
    // Remap 0-65535 onto the 1530-step hexcone. Six 256-value slices
    // would suggest 1536 hues, but the last element of each slice equals
    // the first of the next; dropping the duplicates keeps the wheel
    // free of seams, hence constants that are not multiples of 256.
    let hue = ((hue as u32 * 1530 + 32768) / 65536) as u16;

    let (r, g, b) = if hue < 510 {
        // Red through yellow to green
        if hue < 255 {
            (255, hue as u8, 0)
        } else {
            ((510 - hue) as u8, 255, 0)
        }
    } else if hue < 1020 {
        // Green through cyan to blue
        if hue < 765 {
            (0, 255, (hue - 510) as u8)
        } else {
            (0, (1020 - hue) as u8, 255)
        }
    } else if hue < 1530 {
        // Blue through magenta to red
        if hue < 1275 {
            ((hue - 1020) as u8, 0, 255)
        } else {
            (255, 0, (1530 - hue) as u8)
        }
    } else {
        // The remap yields 0..=1530 inclusive; 1530 is the same red as 0.
        (255, 0, 0)
    };

    // Apply saturation and value in fixed point. The +1 offsets let the
    // divide-by-255 collapse to a shift: sat 255 reproduces the pure
    // hexcone color, sat 0 collapses to gray.
    let s1 = sat as u32 + 1;
    let s2 = (255 - sat) as u32;
    let v1 = val as u32 + 1;

    let r = (((r as u32 * s1) >> 8) + s2) * v1;
    let g = (((g as u32 * s1) >> 8) + s2) * v1;
    let b = (((b as u32 * s1) >> 8) + s2) * v1;

    ((r & 0xff00) << 8) | (g & 0xff00) | (b >> 8)
}
