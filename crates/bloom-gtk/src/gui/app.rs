use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::canvas::CairoSurface;
use crate::gui::frames::{self, FrameDriver};
use crate::gui::icons::IconCache;
use crate::gui::theme;
use bloom::{ChoiceButton, EventResponse, Insets, Label, Point, PointerEvent, PointerKind, Size};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

const PADDING: f64 = 24.0;
const IDLE_HINT: &str = "Press the button and drag onto an item";

pub struct AppInit {
    pub config_path: PathBuf,
    pub config: Config,
    pub rx: async_channel::Receiver<AppEvent>,
}

pub struct AppModel {
    pub button: Rc<RefCell<ChoiceButton>>,
    pub icons: Rc<RefCell<IconCache>>,
    pub config_path: PathBuf,
    pub last_choice: String,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Chosen(Label),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = AppInit;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Bloom"),
            set_default_width: 420,
            set_default_height: 560,
            add_css_class: "bloom-window",

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,
                    add_css_class: "bloom-drawing-area",
                },

                gtk::Label {
                    add_css_class: "bloom-choice",
                    set_margin_top: 12,
                    set_margin_bottom: 12,
                    #[watch]
                    set_label: &model.last_choice,
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let AppInit {
            config_path,
            config,
            rx,
        } = init;

        theme::load_css();

        let items = config.items();
        let icons = Rc::new(RefCell::new(IconCache::load(&items)));
        let mut button = ChoiceButton::new(config.style());
        button.set_items(items);

        let model = AppModel {
            button: Rc::new(RefCell::new(button)),
            icons,
            config_path,
            last_choice: IDLE_HINT.to_string(),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let frames = FrameDriver::new(model.drawing_area.clone(), model.button.clone());
        connect_drawing(&model);
        connect_pointer(&model, &frames, &sender);

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
            AppMsg::Chosen(label) => {
                log::info!("Chose '{}'", label);
                self.last_choice = format!("Chose {}", label);
            }
            AppMsg::ConfigReload => match config::reload_config(&self.config_path) {
                Ok(new_config) => {
                    self.apply_config(&new_config);
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}

impl AppModel {
    fn apply_config(&self, config: &Config) {
        let items = config.items();
        *self.icons.borrow_mut() = IconCache::load(&items);

        let mut button = self.button.borrow_mut();
        button.set_style(config.style());
        button.set_items(items);
        if button.take_redraw_request() {
            self.drawing_area.queue_draw();
        }
    }
}

fn connect_drawing(model: &AppModel) {
    let (button, icons) = (model.button.clone(), model.icons.clone());
    model.drawing_area.set_draw_func(move |_, cr, _, _| {
        let button = button.borrow();
        let icons = icons.borrow();
        let mut surface = CairoSurface::new(cr, &icons, button.center());
        if let Err(e) = button.render(&mut surface) {
            log::error!("Drawing error: {}", e);
        }
    });

    let button = model.button.clone();
    model
        .drawing_area
        .connect_resize(move |area, width, height| {
            let mut button = button.borrow_mut();
            button.measure(
                Size::new(width.into(), height.into()),
                Insets::uniform(PADDING),
            );
            if button.take_redraw_request() {
                area.queue_draw();
            }
        });
}

fn deliver(
    button: &Rc<RefCell<ChoiceButton>>,
    kind: PointerKind,
    x: f64,
    y: f64,
) -> EventResponse {
    button
        .borrow_mut()
        .handle_pointer(PointerEvent::new(kind, Point::new(x, y)), frames::now())
}

/// Wires a drag gesture to the button. A press outside the button denies
/// the gesture so GTK can offer the sequence to other handlers.
fn connect_pointer(model: &AppModel, frames: &FrameDriver, sender: &ComponentSender<AppModel>) {
    let area = model.drawing_area.clone();
    let drag = gtk::GestureDrag::new();

    let respond = {
        let (area, frames, button, sender) = (
            area.clone(),
            frames.clone(),
            model.button.clone(),
            sender.clone(),
        );
        Rc::new(move |response: EventResponse| {
            if response.consumed {
                frames.kick();
            }
            if response.should_redraw {
                area.queue_draw();
            }
            let chosen = response
                .chosen
                .and_then(|i| button.borrow().items().get(i).map(|item| item.text.clone()));
            if let Some(label) = chosen {
                sender.input(AppMsg::Chosen(label));
            }
        })
    };

    {
        let (button, respond) = (model.button.clone(), respond.clone());
        drag.connect_drag_begin(move |gesture, x, y| {
            let response = deliver(&button, PointerKind::Down, x, y);
            if response.consumed {
                gesture.set_state(gtk::EventSequenceState::Claimed);
            } else {
                gesture.set_state(gtk::EventSequenceState::Denied);
            }
            respond(response);
        });
    }

    {
        let (button, respond) = (model.button.clone(), respond.clone());
        drag.connect_drag_update(move |gesture, dx, dy| {
            if let Some((x, y)) = gesture.start_point() {
                respond(deliver(&button, PointerKind::Move, x + dx, y + dy));
            }
        });
    }

    {
        let (button, respond) = (model.button.clone(), respond.clone());
        drag.connect_drag_end(move |gesture, dx, dy| {
            let (x, y) = gesture.start_point().unwrap_or_default();
            respond(deliver(&button, PointerKind::Up, x + dx, y + dy));
        });
    }

    {
        let (button, respond) = (model.button.clone(), respond.clone());
        drag.connect_cancel(move |_, _| {
            let response = button
                .borrow_mut()
                .handle_pointer(PointerEvent::cancel(), frames::now());
            respond(response);
        });
    }

    area.add_controller(drag);

    let motion = gtk::EventControllerMotion::new();
    {
        let button = model.button.clone();
        motion.connect_enter(move |_, x, y| {
            deliver(&button, PointerKind::Enter, x, y);
        });
    }
    {
        let button = model.button.clone();
        motion.connect_motion(move |_, x, y| {
            deliver(&button, PointerKind::Hover, x, y);
        });
    }
    {
        let button = model.button.clone();
        motion.connect_leave(move |_| {
            let center = button.borrow().center();
            deliver(&button, PointerKind::Leave, center.x, center.y);
        });
    }
    area.add_controller(motion);
}
