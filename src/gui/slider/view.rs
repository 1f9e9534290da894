use super::color::{HexColor, calculate_arc_color};
use super::geometry::{ArcSegment, Point};
use super::model::State;
use super::{HANDLE_DOT_FACTOR, ICON_SIZE, SEAM_OVERLAP, TEXT_FONT_SIZE, clock_face};
use crate::config::SliderConfig;
use cairo::{Context, LinearGradient};
use gdk_pixbuf::Pixbuf;
use gdk4::prelude::*;
use palette::Srgba;
use std::f64::consts::{FRAC_PI_2, TAU};
use std::path::Path;

#[derive(Default)]
pub struct HandleIcons {
    pub start: Option<Pixbuf>,
    pub stop: Option<Pixbuf>,
}

impl HandleIcons {
    pub fn load(config: &SliderConfig) -> Self {
        Self {
            start: config.start_icon.as_deref().and_then(Self::load_icon),
            stop: config.stop_icon.as_deref().and_then(Self::load_icon),
        }
    }

    fn load_icon(path: &Path) -> Option<Pixbuf> {
        Pixbuf::from_file_at_scale(path, ICON_SIZE, ICON_SIZE, true)
            .map_err(|e| log::warn!("Failed to load handle icon {}: {}", path.display(), e))
            .ok()
    }
}

/// Colors the renderer reads, resolved once per frame.
pub struct Palette {
    pub background: Srgba<f64>,
    pub clock_face: Srgba<f64>,
    pub text: Srgba<f64>,
}

impl Palette {
    pub fn from_config(config: &SliderConfig, text: Srgba<f64>) -> Self {
        Self {
            background: config.bg_circle_color.to_srgba(1.0),
            clock_face: config.clock_face_color.to_srgba(1.0),
            text,
        }
    }
}

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

/// Cairo measures angles from +x; ours start at twelve o'clock.
fn cairo_angle(angle: f64) -> f64 {
    angle - FRAC_PI_2
}

struct SegmentRenderer<'a> {
    config: &'a SliderConfig,
    segment: ArcSegment,
    from_color: HexColor,
    to_color: HexColor,
}

impl<'a> SegmentRenderer<'a> {
    fn new(config: &'a SliderConfig, state: &State, index: usize) -> Self {
        let segments = config.segments.get();
        let segment = ArcSegment::for_range(index, segments, config.radius, state.range);
        let colors = calculate_arc_color(
            index,
            segments,
            config.gradient_color_from,
            config.gradient_color_to,
        );
        Self {
            config,
            segment,
            from_color: colors.from_color,
            to_color: colors.to_color,
        }
    }

    fn draw(&self, cr: &Context, center: Point) -> Result<(), cairo::Error> {
        let (from, to) = (
            center.offset(self.segment.from),
            center.offset(self.segment.to),
        );
        let gradient = LinearGradient::new(from.x, from.y, to.x, to.y);
        for (offset, color) in [(0.0, self.from_color), (1.0, self.to_color)] {
            let (r, g, b, a) = color.to_srgba(1.0).into_components();
            gradient.add_color_stop_rgba(offset, r, g, b, a);
        }

        cr.new_path();
        cr.arc(
            center.x,
            center.y,
            self.config.radius,
            cairo_angle(self.segment.from_angle),
            cairo_angle(self.segment.to_angle + SEAM_OVERLAP),
        );
        cr.set_source(&gradient)?;
        cr.set_line_width(self.config.stroke_width);
        cr.stroke()
    }
}

struct HandleRenderer<'a> {
    anchor: Point,
    icon: Option<&'a Pixbuf>,
    fill: HexColor,
    dot_radius: f64,
}

impl HandleRenderer<'_> {
    fn draw(&self, cr: &Context) -> Result<(), cairo::Error> {
        match self.icon {
            Some(pixbuf) => self.draw_icon(cr, pixbuf),
            None => self.draw_dot(cr),
        }
    }

    fn draw_icon(&self, cr: &Context, pixbuf: &Pixbuf) -> Result<(), cairo::Error> {
        // icon centered on the arc end
        let (iw, ih) = (pixbuf.width() as f64, pixbuf.height() as f64);
        cr.save()?;
        cr.translate(self.anchor.x - iw / 2.0, self.anchor.y - ih / 2.0);
        cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
        cr.paint()?;
        cr.restore()
    }

    fn draw_dot(&self, cr: &Context) -> Result<(), cairo::Error> {
        cr.new_path();
        set_source(cr, self.fill.to_srgba(1.0));
        cr.arc(self.anchor.x, self.anchor.y, self.dot_radius, 0.0, TAU);
        cr.fill()
    }
}

pub fn draw(cr: &Context, state: &State, palette: &Palette) -> Result<(), cairo::Error> {
    // nothing sensible to draw before the first layout
    let Some(center) = state.center else {
        return Ok(());
    };
    let config = &state.config;

    draw_background_ring(cr, center, config, palette)?;

    if config.show_clock_face {
        clock_face::draw(
            cr,
            center,
            config.radius - config.stroke_width / 2.0,
            palette.clock_face,
        )?;
    }

    for i in 0..config.segments.get() {
        SegmentRenderer::new(config, state, i).draw(cr, center)?;
    }

    let (start, stop) = state.handle_anchors();
    let dot_radius = config.stroke_width * HANDLE_DOT_FACTOR;
    HandleRenderer {
        anchor: center.offset(stop),
        icon: state.icons.stop.as_ref(),
        fill: config.gradient_color_to,
        dot_radius,
    }
    .draw(cr)?;
    HandleRenderer {
        anchor: center.offset(start),
        icon: state.icons.start.as_ref(),
        fill: config.gradient_color_from,
        dot_radius,
    }
    .draw(cr)?;

    draw_text(cr, center, &state.text, palette.text)
}

fn draw_background_ring(
    cr: &Context,
    center: Point,
    config: &SliderConfig,
    palette: &Palette,
) -> Result<(), cairo::Error> {
    cr.new_path();
    set_source(cr, palette.background);
    cr.set_line_width(config.stroke_width);
    cr.arc(center.x, center.y, config.radius, 0.0, TAU);
    cr.stroke()
}

fn draw_text(
    cr: &Context,
    center: Point,
    text: &str,
    color: Srgba<f64>,
) -> Result<(), cairo::Error> {
    if text.is_empty() {
        return Ok(());
    }
    set_source(cr, color);
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
    cr.set_font_size(TEXT_FONT_SIZE);
    let ext = cr.text_extents(text)?;
    cr.move_to(
        center.x - ext.width() / 2.0 - ext.x_bearing(),
        center.y - ext.height() / 2.0 - ext.y_bearing(),
    );
    cr.show_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::slider::AngleRange;
    use cairo::{Format, ImageSurface};
    use std::f64::consts::PI;

    fn render(state: &State) -> ImageSurface {
        let surface = ImageSurface::create(Format::ARgb32, 400, 400).unwrap();
        {
            let cr = Context::new(&surface).unwrap();
            let palette = Palette::from_config(&state.config, Srgba::new(1.0, 1.0, 1.0, 1.0));
            draw(&cr, state, &palette).unwrap();
        }
        surface
    }

    fn pixel(surface: &mut ImageSurface, x: usize, y: usize) -> [u8; 4] {
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        let i = y * stride + x * 4;
        [data[i], data[i + 1], data[i + 2], data[i + 3]]
    }

    #[test]
    fn test_nothing_drawn_before_layout() {
        let state = State::new(
            SliderConfig::default(),
            AngleRange::new(0.0, PI),
            HandleIcons::default(),
        );
        let mut surface = render(&state);
        assert_eq!(pixel(&mut surface, 200, 55), [0, 0, 0, 0]);
    }

    #[test]
    fn test_arc_covers_selected_half_only() {
        let mut state = State::new(
            SliderConfig::default(),
            AngleRange::new(0.0, PI),
            HandleIcons::default(),
        );
        state.layout_settled(400.0, 400.0);
        let mut surface = render(&state);

        // ARGB32 is stored little-endian as B, G, R, A
        let right = pixel(&mut surface, 345, 200);
        assert!(right[2] > 0xf0);
        assert!(right[1] > 0x90);

        let left = pixel(&mut surface, 55, 200);
        assert_eq!(left, [0x17, 0x17, 0x17, 0xff]);
    }

    fn inked_pixels(surface: &mut ImageSurface, x: std::ops::Range<usize>, y: usize) -> usize {
        x.filter(|&x| pixel(surface, x, y)[3] != 0).count()
    }

    #[test]
    fn test_text_drawn_in_the_middle() {
        let mut config = SliderConfig::default();
        config.show_clock_face = false;
        let mut state = State::new(config, AngleRange::new(0.0, PI), HandleIcons::default());
        state.layout_settled(400.0, 400.0);

        let mut blank = render(&state);
        assert_eq!(inked_pixels(&mut blank, 150..250, 200), 0);

        state.text = "7h 30m".to_string();
        let mut labelled = render(&state);
        assert!(inked_pixels(&mut labelled, 150..250, 200) > 0);
    }

    #[test]
    fn test_text_errors_reach_the_caller() {
        let surface = ImageSurface::create(Format::ARgb32, 10, 10).unwrap();
        let cr = Context::new(&surface).unwrap();
        // a singular matrix puts the context into an error state
        cr.scale(0.0, 0.0);
        let white = Srgba::new(1.0, 1.0, 1.0, 1.0);
        assert!(draw_text(&cr, Point::new(5.0, 5.0), "12:00", white).is_err());
        assert!(draw_text(&cr, Point::new(5.0, 5.0), "", white).is_ok());
    }
}
