//! Share image: the color as a full-bleed background with a white label card.

use crate::color::Color;
use anyhow::Context;
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

const GLYPH_W: u32 = 5;
const GLYPH_H: u32 = 7;
/// Glyph width plus one column of spacing.
const CELL_W: u32 = GLYPH_W + 1;

const MIN_SIZE: u32 = 64;
const MAX_SIZE: u32 = 4096;

const SUBTITLE: &str = "ColorPicker Pro";
const LABEL_INK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const SUBTITLE_INK: Rgba<u8> = Rgba([102, 102, 102, 255]);

/// Edge length actually rendered for a configured `size`.
pub fn clamp_size(size: u32) -> u32 {
    size.clamp(MIN_SIZE, MAX_SIZE)
}

/// Render the share raster for `color` at `size`×`size` pixels.
///
/// Layout scales with `size`; at 800 px the card sits at (100, 500) and is
/// 600×200 with a 20 px corner radius. The label is centered on y = 600 and
/// the grey subtitle on y = 650.
pub fn render_share_image(color: &Color, label: &str, size: u32) -> RgbaImage {
    let size = clamp_size(size);
    let background = color.over(Color::rgb(255, 255, 255)).to_rgba8();
    let mut img = RgbaImage::from_pixel(size, size, Rgba(background));

    let card_x = size / 8;
    let card_y = size * 5 / 8;
    let card_w = size * 3 / 4;
    let card_h = size / 4;
    let radius = size / 40;
    let shadow_offset = size / 80;

    fill_rounded_rect(
        &mut img,
        (card_x, card_y + shadow_offset),
        (card_w, card_h),
        radius,
        |px| darken(px, 0.2),
    );
    fill_rounded_rect(&mut img, (card_x, card_y), (card_w, card_h), radius, |px| {
        *px = Rgba([255, 255, 255, 255]);
    });

    let max_w = card_w * 9 / 10;
    let label_scale = fit_scale(label, max_w, card_h * 7 / 20);
    draw_centered(&mut img, label, (size / 2, card_y + card_h / 2), label_scale, LABEL_INK);

    let subtitle_scale = fit_scale(SUBTITLE, max_w, card_h / 8);
    draw_centered(
        &mut img,
        SUBTITLE,
        (size / 2, card_y + card_h * 3 / 4),
        subtitle_scale,
        SUBTITLE_INK,
    );

    img
}

/// Largest integer scale at which `text` fits in `max_w`×`max_h`, at least 1.
fn fit_scale(text: &str, max_w: u32, max_h: u32) -> u32 {
    let chars = text.chars().count().max(1) as u32;
    (max_w / (chars * CELL_W)).min(max_h / GLYPH_H).max(1)
}

/// Draw `text` upper-cased with its box centered on `(cx, cy)`.
fn draw_centered(
    img: &mut RgbaImage,
    text: &str,
    (cx, cy): (u32, u32),
    scale: u32,
    ink: Rgba<u8>,
) {
    let text = text.to_uppercase();
    let chars = text.chars().count().max(1) as u32;
    let text_w = chars * CELL_W * scale - scale;
    let text_h = GLYPH_H * scale;
    let origin = (cx.saturating_sub(text_w / 2), cy.saturating_sub(text_h / 2));
    draw_text(img, &text, origin, scale, ink);
}

pub fn encode_png(img: &RgbaImage) -> anyhow::Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .context("encode share image")?;
    Ok(buf.into_inner())
}

fn darken(px: &mut Rgba<u8>, amount: f32) {
    for c in px.0.iter_mut().take(3) {
        *c = (f32::from(*c) * (1.0 - amount)).round() as u8;
    }
}

fn fill_rounded_rect(
    img: &mut RgbaImage,
    (x0, y0): (u32, u32),
    (w, h): (u32, u32),
    radius: u32,
    mut paint: impl FnMut(&mut Rgba<u8>),
) {
    let r = i64::from(radius);
    for y in y0..(y0 + h).min(img.height()) {
        for x in x0..(x0 + w).min(img.width()) {
            let dx = corner_distance(i64::from(x - x0), i64::from(w), r);
            let dy = corner_distance(i64::from(y - y0), i64::from(h), r);
            if dx > 0 && dy > 0 && dx * dx + dy * dy > r * r {
                continue;
            }
            paint(img.get_pixel_mut(x, y));
        }
    }
}

/// Distance into the corner zone along one axis, 0 outside it.
fn corner_distance(pos: i64, len: i64, r: i64) -> i64 {
    if pos < r {
        r - pos
    } else if pos >= len - r {
        pos - (len - r) + 1
    } else {
        0
    }
}

fn draw_text(img: &mut RgbaImage, text: &str, (x0, y0): (u32, u32), scale: u32, ink: Rgba<u8>) {
    for (i, ch) in text.chars().enumerate() {
        let rows = glyph(ch);
        let gx = x0 + i as u32 * CELL_W * scale;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_W {
                if bits & (1 << (GLYPH_W - 1 - col)) == 0 {
                    continue;
                }
                let px = gx + col * scale;
                let py = y0 + row as u32 * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        if px + dx < img.width() && py + dy < img.height() {
                            img.put_pixel(px + dx, py + dy, ink);
                        }
                    }
                }
            }
        }
    }
}

/// 5×7 bitmap glyphs; bit 4 is the leftmost column. Unknown characters
/// render as blank cells.
fn glyph(ch: char) -> [u8; 7] {
    match ch {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '#' => [0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A],
        '(' => [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02],
        ')' => [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        '%' => [0x18, 0x19, 0x02, 0x04, 0x08, 0x13, 0x03],
        '/' => [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00],
        _ => [0; 7],
    }
}
