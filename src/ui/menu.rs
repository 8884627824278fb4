// src/ui/menu.rs

use crate::state::AppState;
use gtk4::gio::SimpleAction;
use gtk4::prelude::*;
use gtk4::{AboutDialog, Application, ApplicationWindow, DrawingArea, License};
use std::cell::RefCell;
use std::rc::Rc;

/// Register the application actions, bind their shortcuts and build the
/// menu bar widget for the top of the window.
pub fn build_menu_and_actions(
    app: &Application,
    window: &ApplicationWindow,
    state: Rc<RefCell<AppState>>,
    drawing_area: &DrawingArea,
) -> gtk4::Box {
    // --- QUIT ---
    let act_quit = SimpleAction::new("quit", None);
    let app_weak = app.downgrade();
    act_quit.connect_activate(move |_, _| {
        if let Some(app) = app_weak.upgrade() {
            app.quit();
        }
    });
    app.add_action(&act_quit);

    // --- RESTORE VIEW ---
    // Puts rotation, zoom and pan back to the model's home framing without
    // touching the model itself.
    let act_reset = SimpleAction::new("view_reset", None);
    let s_reset = state.clone();
    let da_reset = drawing_area.clone();
    act_reset.connect_activate(move |_, _| {
        s_reset.borrow_mut().view.reset();
        da_reset.queue_draw();
    });
    app.add_action(&act_reset);

    // --- ABOUT ---
    let act_about = SimpleAction::new("about", None);
    let win_weak = window.downgrade();
    act_about.connect_activate(move |_, _| {
        if let Some(win) = win_weak.upgrade() {
            let dialog = AboutDialog::builder()
                .transient_for(&win)
                .modal(true)
                .program_name("BondView")
                .version("0.1.0")
                .comments(
                    "An interactive viewer for ionic lattices and molecular geometry, \
                     written in Rust and GTK4.",
                )
                .license_type(License::MitX11)
                .logo_icon_name("applications-science")
                .build();

            dialog.present();
        }
    });
    app.add_action(&act_about);

    // Keyboard Shortcuts
    app.set_accels_for_action("app.quit", &["<Primary>q"]);
    app.set_accels_for_action("app.view_reset", &["<Primary>r"]);

    // --- BUILD MENU BAR ---
    let menu_bar = gtk4::Box::new(gtk4::Orientation::Horizontal, 0);
    let root_model = gtk4::gio::Menu::new();

    let file_menu = gtk4::gio::Menu::new();
    file_menu.append(Some("Quit"), Some("app.quit"));
    root_model.append_submenu(Some("File"), &file_menu);

    let view_menu = gtk4::gio::Menu::new();
    view_menu.append(Some("Restore View"), Some("app.view_reset"));
    root_model.append_submenu(Some("View"), &view_menu);

    let help_menu = gtk4::gio::Menu::new();
    help_menu.append(Some("About"), Some("app.about"));
    root_model.append_submenu(Some("Help"), &help_menu);

    let popover_bar = gtk4::PopoverMenuBar::from_model(Some(&root_model));
    menu_bar.append(&popover_bar);

    menu_bar
}
