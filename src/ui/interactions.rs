// src/ui/interactions.rs

use crate::config;
use crate::state::AppState;
use gtk4::gdk;
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{DrawingArea, EventControllerScroll, EventControllerScrollFlags, GestureDrag};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Wire rotate, pan and zoom onto the canvas. GTK reports drag offsets
/// relative to the drag start, so each drag keeps its previous offset in a
/// `Cell` and applies only the per-event delta.
pub fn setup_interactions(state: Rc<RefCell<AppState>>, drawing_area: &DrawingArea) {
    // 1. PRIMARY DRAG (ROTATE)
    let rotate = GestureDrag::new();
    let rotate_last = Rc::new(Cell::new((0.0_f64, 0.0_f64)));

    let anchor = rotate_last.clone();
    rotate.connect_drag_begin(move |_, _, _| {
        anchor.set((0.0, 0.0));
    });

    let s = state.clone();
    let da = drawing_area.clone();
    let anchor = rotate_last.clone();
    rotate.connect_drag_update(move |_, x, y| {
        let (px, py) = anchor.replace((x, y));
        let mut st = s.borrow_mut();
        st.view.rot_y += (x - px) * config::ROTATE_STEP;
        st.view.rot_x += (y - py) * config::ROTATE_STEP;
        da.queue_draw();
    });
    drawing_area.add_controller(rotate);

    // 2. MIDDLE DRAG (PAN)
    let pan = GestureDrag::new();
    pan.set_button(gdk::BUTTON_MIDDLE);
    let pan_last = Rc::new(Cell::new((0.0_f64, 0.0_f64)));

    let anchor = pan_last.clone();
    pan.connect_drag_begin(move |_, _, _| {
        anchor.set((0.0, 0.0));
    });

    let s = state.clone();
    let da = drawing_area.clone();
    let anchor = pan_last.clone();
    pan.connect_drag_update(move |_, x, y| {
        let (px, py) = anchor.replace((x, y));
        let mut st = s.borrow_mut();
        st.view.pan_x += x - px;
        st.view.pan_y += y - py;
        da.queue_draw();
    });
    drawing_area.add_controller(pan);

    // 3. SCROLL (ZOOM)
    let scroll = EventControllerScroll::new(EventControllerScrollFlags::VERTICAL);
    let s = state.clone();
    let da = drawing_area.clone();
    scroll.connect_scroll(move |_, _, dy| {
        let mut st = s.borrow_mut();
        let factor = if dy > 0.0 {
            1.0 / config::ZOOM_STEP
        } else {
            config::ZOOM_STEP
        };
        st.view.zoom = (st.view.zoom * factor).clamp(config::ZOOM_MIN, config::ZOOM_MAX);
        da.queue_draw();
        glib::Propagation::Stop
    });
    drawing_area.add_controller(scroll);
}
