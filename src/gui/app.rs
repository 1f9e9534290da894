use crate::clock;
use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::component::{CircularSlider, SliderMsg};
use crate::gui::slider::AngleRange;
use crate::gui::theme;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::RelmWidgetExt;
use relm4::prelude::*;
use std::path::PathBuf;

/// Demo host owning the selected range and echoing it back into the slider.
pub struct AppModel {
    pub range: AngleRange,
    pub config: Config,
    pub config_path: PathBuf,
    pub slider: Controller<CircularSlider>,
}

#[derive(Debug)]
pub enum AppMsg {
    RangeChanged(AngleRange),
    ConfigReload,
    Quit,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

impl AppModel {
    fn center_text(&self) -> String {
        if self.config.slider.text.is_empty() {
            clock::format_duration(self.range.angle_length)
        } else {
            self.config.slider.text.clone()
        }
    }

    fn summary(&self) -> String {
        format!(
            "{} - {}",
            clock::time_from_angle(self.range.start_angle),
            clock::time_from_angle(self.range.end_angle())
        )
    }

    fn push_to_slider(&self) {
        self.slider.emit(SliderMsg::SetRange(self.range));
        self.slider.emit(SliderMsg::SetText(self.center_text()));
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, PathBuf, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Circular Slider"),
            add_css_class: "circular-slider-window",
            set_resizable: false,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Quit);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 12,
                set_margin_all: 20,

                append: model.slider.widget(),

                gtk::Label {
                    add_css_class: "circular-slider-summary",
                    #[watch]
                    set_label: &model.summary(),
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, config_path, rx) = init;

        theme::load_css();

        let range = config.initial.normalized();
        let slider = CircularSlider::builder()
            .launch((config.slider.clone(), range))
            .forward(sender.input_sender(), AppMsg::RangeChanged);

        let model = AppModel {
            range,
            config,
            config_path,
            slider,
        };
        model.push_to_slider();

        let widgets = view_output!();

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::RangeChanged(range) => {
                self.range = range;
                self.push_to_slider();
            }
            AppMsg::ConfigReload => match config::load_config(&self.config_path) {
                Ok(new_config) => {
                    self.slider
                        .emit(SliderMsg::Reconfigure(new_config.slider.clone()));
                    self.config = new_config;
                    self.push_to_slider();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
            AppMsg::Quit => relm4::main_application().quit(),
        }
    }
}
