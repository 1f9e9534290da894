use super::geometry::Point;
use cairo::Context;
use palette::Srgba;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

const TICK_COUNT: usize = 48;
const MAJOR_TICK_EVERY: usize = 4;
const TICK_INSET: f64 = 5.0;
const TICK_LENGTH: f64 = 7.0;
const LABEL_INSET: f64 = 26.0;
const LABEL_FONT_SIZE: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub outer: Point,
    pub inner: Point,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub position: Point,
    pub text: String,
}

/// Tick marks just inside a face of radius `r`, relative to its center.
pub fn ticks(r: f64) -> Vec<Tick> {
    let outer_r = r - TICK_INSET;
    let inner_r = outer_r - TICK_LENGTH;

    (0..TICK_COUNT)
        .map(|i| {
            let angle = TAU / TICK_COUNT as f64 * i as f64;
            let (sin, cos) = angle.sin_cos();
            Tick {
                outer: Point::new(cos * outer_r, sin * outer_r),
                inner: Point::new(cos * inner_r, sin * inner_r),
                width: if i % MAJOR_TICK_EVERY == 0 { 3.0 } else { 1.0 },
            }
        })
        .collect()
}

/// Hour numerals 1 to 12, with "12" at the top.
pub fn labels(r: f64) -> Vec<Label> {
    let text_r = r - LABEL_INSET;

    (0..12)
        .map(|h| {
            let angle = TAU / 12.0 * h as f64 - FRAC_PI_2 + PI / 6.0;
            Label {
                position: Point::new(text_r * angle.cos(), text_r * angle.sin()),
                text: (h + 1).to_string(),
            }
        })
        .collect()
}

pub fn draw(cr: &Context, center: Point, r: f64, color: Srgba<f64>) -> Result<(), cairo::Error> {
    let (red, green, blue, alpha) = color.into_components();
    cr.save()?;
    cr.set_source_rgba(red, green, blue, alpha);

    for tick in ticks(r) {
        let (from, to) = (center.offset(tick.outer), center.offset(tick.inner));
        cr.set_line_width(tick.width);
        cr.move_to(from.x, from.y);
        cr.line_to(to.x, to.y);
        cr.stroke()?;
    }

    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
    cr.set_font_size(LABEL_FONT_SIZE);
    for label in labels(r) {
        let at = center.offset(label.position);
        let ext = cr.text_extents(&label.text)?;
        cr.move_to(
            at.x - ext.width() / 2.0 - ext.x_bearing(),
            at.y - ext.height() / 2.0 - ext.y_bearing(),
        );
        cr.show_text(&label.text)?;
    }

    cr.restore()
}
