use gtk4::glib;
use gtk4::prelude::*;
use gtk4::Box as GtkBox;
use gtk4::{
    Application, ApplicationWindow, DrawingArea, Frame, Orientation, ScrolledWindow, TextView,
};
use std::cell::RefCell;
use std::rc::Rc;

pub mod state;
pub mod rendering;
pub mod config;
pub mod geometry;
pub mod model;
pub mod session;
pub mod ui;
pub mod utils;

use session::ModelKind;
use state::AppState;
use ui::interactions::setup_interactions;
use ui::ModelPanel;

fn main() -> glib::ExitCode {
    // Bail out before building any widget when no display is available.
    if let Err(err) = gtk4::init() {
        eprintln!("Failed to initialize GTK: {err}");
        return glib::ExitCode::FAILURE;
    }

    let app = Application::builder()
        .application_id("com.example.bondview")
        .build();

    app.connect_activate(build_ui);
    app.run()
}

fn build_ui(app: &Application) {
    let state = Rc::new(RefCell::new(AppState::new()));

    let window = ApplicationWindow::builder()
        .application(app)
        .title("BondView - Chemical Structure Viewer")
        .default_width(1100)
        .default_height(780)
        .build();

    // 1. TOP LEVEL: Vertical Box (Menu on top, Main Content below)
    let root_vbox = GtkBox::new(Orientation::Vertical, 0);
    window.set_child(Some(&root_vbox));

    // 2. MAIN CONTENT: Horizontal Box (Model Panel | Canvas + Console)
    let main_hbox = GtkBox::new(Orientation::Horizontal, 0);

    let right_vbox = GtkBox::new(Orientation::Vertical, 0);
    right_vbox.set_hexpand(true);

    let drawing_area = DrawingArea::new();
    drawing_area.set_vexpand(true);

    // Console
    let info_frame = Frame::new(None);
    let console_view = TextView::builder()
        .editable(false)
        .cursor_visible(false)
        .monospace(true)
        .left_margin(10)
        .right_margin(10)
        .top_margin(10)
        .bottom_margin(10)
        .build();
    let scroll_win = ScrolledWindow::builder()
        .min_content_height(120)
        .child(&console_view)
        .build();
    info_frame.set_child(Some(&scroll_win));

    right_vbox.append(&drawing_area);
    right_vbox.append(&info_frame);

    let panel = ModelPanel::build();
    main_hbox.append(&panel.root);
    main_hbox.append(&right_vbox);

    // 3. Menu Bar
    let menu_bar = ui::build_menu_and_actions(app, &window, state.clone(), &drawing_area);

    // Assemble Root
    root_vbox.append(&menu_bar);
    root_vbox.append(&main_hbox);

    // Activation messages below land in the console view.
    if let Err(err) = utils::logger::init(&console_view) {
        eprintln!("Logger already installed: {err}");
    }

    setup_interactions(state.clone(), &drawing_area);

    // Model selector. The guard keeps programmatic selection moves from
    // rebuilding the scene that is already active.
    let s = state.clone();
    let da = drawing_area.clone();
    let p = panel.clone();
    panel.selector.connect_selected_notify(move |selector| {
        let Some(kind) = ModelKind::ALL.get(selector.selected() as usize).copied() else {
            return;
        };
        {
            let mut st = s.borrow_mut();
            if st.session.current() == Some(kind) {
                return;
            }
            st.activate(kind);
        }
        p.show_model(kind);
        da.queue_draw();
    });

    // Drawing Function
    let s = state.clone();
    drawing_area.set_draw_func(move |_, cr, w, h| {
        let mut st = s.borrow_mut();
        let AppState {
            scene,
            view,
            sprites,
            ..
        } = &mut *st;

        rendering::paint_background(cr);
        let (cylinders, spheres) = rendering::project(scene, view, w as f64, h as f64);
        rendering::draw_scene(cr, &cylinders, &spheres, sprites);
    });

    // Start on the lattice
    state.borrow_mut().activate(ModelKind::Lattice);
    panel.show_model(ModelKind::Lattice);

    window.present();
}
