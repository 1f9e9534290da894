use crate::config::SliderConfig;
use crate::gui::slider::view::HandleIcons;
use crate::gui::slider::{self, AngleRange, Point, PointerEvent, State};
use crate::gui::theme;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::RelmWidgetExt;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Two-handle ring slider. The owner keeps the range: every interaction is reported as an
/// output and only a `SetRange` moves the arc.
pub struct CircularSlider {
    state: Rc<RefCell<State>>,
    drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum SliderMsg {
    SetRange(AngleRange),
    SetText(String),
    Reconfigure(SliderConfig),
    LayoutSettled(i32, i32),
    Pointer(PointerEvent),
}

impl CircularSlider {
    fn apply_size(&self) {
        let state = self.state.borrow();
        let side = state.config.container_width().ceil() as i32;
        self.drawing_area.set_content_width(side);
        self.drawing_area.set_content_height(side);
        self.drawing_area.set_margin_all(state.config.container_style.margin);
    }
}

#[relm4::component(pub)]
impl SimpleComponent for CircularSlider {
    type Init = (SliderConfig, AngleRange);
    type Input = SliderMsg;
    type Output = AngleRange;

    view! {
        #[root]
        #[name = "drawing_area"]
        gtk::DrawingArea {
            add_css_class: "circular-slider",
            set_halign: gtk::Align::Center,
            set_valign: gtk::Align::Center,

            connect_resize[sender] => move |_, width, height| {
                sender.input(SliderMsg::LayoutSettled(width, height));
            },

            add_controller = gtk::GestureDrag {
                connect_drag_begin[sender] => move |_, x, y| {
                    sender.input(SliderMsg::Pointer(PointerEvent::Press(Point::new(x, y))));
                },
                connect_drag_update[sender] => move |gesture, dx, dy| {
                    if let Some((x, y)) = gesture.start_point() {
                        let to = Point::new(x + dx, y + dy);
                        sender.input(SliderMsg::Pointer(PointerEvent::Move(to)));
                    }
                },
                connect_drag_end[sender] => move |_, _, _| {
                    sender.input(SliderMsg::Pointer(PointerEvent::Release));
                },
            },
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, range) = init;
        let icons = HandleIcons::load(&config);
        let state = Rc::new(RefCell::new(State::new(config, range, icons)));

        let model = CircularSlider {
            state: state.clone(),
            drawing_area: root.clone(),
        };

        let widgets = view_output!();
        model.apply_size();

        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, _, _| {
                let state = state.borrow();
                let palette = theme::palette(drawing_area, &state.config);
                if let Err(e) = slider::draw(cr, &state, &palette) {
                    log::error!("Drawing error: {}", e);
                }
            });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        let updates = match msg {
            SliderMsg::SetRange(range) => {
                self.state.borrow_mut().set_range(range);
                Vec::new()
            }
            SliderMsg::SetText(text) => {
                self.state.borrow_mut().text = text;
                Vec::new()
            }
            SliderMsg::Reconfigure(config) => {
                let icons = HandleIcons::load(&config);
                self.state.borrow_mut().reconfigure(config, icons);
                self.apply_size();
                Vec::new()
            }
            SliderMsg::LayoutSettled(width, height) => self
                .state
                .borrow_mut()
                .layout_settled(width as f64, height as f64),
            SliderMsg::Pointer(event) => {
                self.state.borrow_mut().pointer(event).into_iter().collect()
            }
        };

        for range in updates {
            if sender.output(range).is_err() {
                log::warn!("Slider update dropped, nobody is listening");
            }
        }
        self.drawing_area.queue_draw();
    }
}
