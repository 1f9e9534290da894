use crate::config::SliderConfig;
use crate::gui::slider::view::Palette;
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

/// Slider palette with the centered text color taken from the loaded CSS.
#[allow(deprecated)]
pub fn palette(widget: &impl IsA<gtk::Widget>, config: &SliderConfig) -> Palette {
    let text = lookup_color(
        &widget.style_context(),
        "circular_slider_text_color",
        Srgba::new(1.0, 1.0, 1.0, 1.0),
    );
    Palette::from_config(config, text)
}

#[allow(deprecated)]
fn lookup_color(context: &gtk::StyleContext, name: &str, fallback: Srgba<f64>) -> Srgba<f64> {
    context
        .lookup_color(name)
        .map(|c| {
            Srgba::new(
                c.red() as f64,
                c.green() as f64,
                c.blue() as f64,
                c.alpha() as f64,
            )
        })
        .unwrap_or(fallback)
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
@define-color circular_slider_text_color #ffffff;

.circular-slider-window {
    background-color: #000000;
}
.circular-slider-summary {
    color: @circular_slider_text_color;
    font-size: 16px;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
