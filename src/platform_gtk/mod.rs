use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::ChartEngine;
use crate::render::{CairoContextRenderer, Renderer};

/// GTK4 front-end for a [`ChartEngine`].
///
/// Lays out a square `DrawingArea` (inside an `AspectFrame` with ratio 1)
/// above a "Fit to chart" check button. Hovering or dragging over the chart
/// selects the instant under the pointer; releasing a drag or leaving the
/// chart deselects. The engine lives on the GTK main thread only.
pub struct GtkChartAdapter<R: Renderer + CairoContextRenderer + 'static> {
    engine: Rc<RefCell<ChartEngine<R>>>,
    root: gtk::Box,
    drawing_area: gtk::DrawingArea,
    fit_to_chart_toggle: gtk::CheckButton,
}

impl<R: Renderer + CairoContextRenderer + 'static> GtkChartAdapter<R> {
    #[must_use]
    pub fn new(engine: ChartEngine<R>) -> Self {
        let fit_to_chart = engine.fit_to_chart();
        let engine = Rc::new(RefCell::new(engine));

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);

        let aspect_frame = gtk::AspectFrame::new(0.5, 0.5, 1.0, false);
        aspect_frame.set_hexpand(true);
        aspect_frame.set_vexpand(true);
        aspect_frame.set_child(Some(&drawing_area));

        let fit_to_chart_toggle = gtk::CheckButton::with_label("Fit to chart");
        fit_to_chart_toggle.set_active(fit_to_chart);

        let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
        root.set_margin_top(16);
        root.set_margin_bottom(16);
        root.set_margin_start(16);
        root.set_margin_end(16);
        root.append(&aspect_frame);
        root.append(&fit_to_chart_toggle);

        let adapter = Self {
            engine,
            root,
            drawing_area,
            fit_to_chart_toggle,
        };
        adapter.install_draw_func();
        adapter.install_pointer_controllers();
        adapter.install_toggle_handler();
        adapter
    }

    #[must_use]
    pub fn engine(&self) -> Rc<RefCell<ChartEngine<R>>> {
        Rc::clone(&self.engine)
    }

    /// Root widget to place into a window.
    #[must_use]
    pub fn widget(&self) -> &gtk::Box {
        &self.root
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn fit_to_chart_toggle(&self) -> &gtk::CheckButton {
        &self.fit_to_chart_toggle
    }

    fn install_draw_func(&self) {
        let engine = Rc::clone(&self.engine);
        self.drawing_area
            .set_draw_func(move |_area, context, width, height| {
                let mut engine = engine.borrow_mut();
                let width = u32::try_from(width).unwrap_or(0);
                let height = u32::try_from(height).unwrap_or(0);
                if let Err(err) = engine.set_container_size(width, height) {
                    warn!(%err, width, height, "skipping draw for unusable size");
                    return;
                }
                if let Err(err) = engine.render_on_cairo_context(context) {
                    warn!(%err, "failed to draw step chart");
                }
            });
    }

    fn install_pointer_controllers(&self) {
        let motion = gtk::EventControllerMotion::new();
        {
            let engine = Rc::clone(&self.engine);
            let area = self.drawing_area.clone();
            motion.connect_motion(move |_controller, x, _y| {
                report(engine.borrow_mut().pointer_move(x));
                area.queue_draw();
            });
        }
        {
            let engine = Rc::clone(&self.engine);
            let area = self.drawing_area.clone();
            motion.connect_leave(move |_controller| {
                engine.borrow_mut().pointer_leave();
                area.queue_draw();
            });
        }
        self.drawing_area.add_controller(motion);

        let drag = gtk::GestureDrag::new();
        {
            let engine = Rc::clone(&self.engine);
            let area = self.drawing_area.clone();
            drag.connect_drag_begin(move |_gesture, x, _y| {
                report(engine.borrow_mut().selection_drag_start(x));
                area.queue_draw();
            });
        }
        {
            let engine = Rc::clone(&self.engine);
            let area = self.drawing_area.clone();
            drag.connect_drag_update(move |gesture, offset_x, _offset_y| {
                if let Some((start_x, _start_y)) = gesture.start_point() {
                    report(engine.borrow_mut().selection_drag_move(start_x + offset_x));
                    area.queue_draw();
                }
            });
        }
        {
            let engine = Rc::clone(&self.engine);
            let area = self.drawing_area.clone();
            drag.connect_drag_end(move |_gesture, _offset_x, _offset_y| {
                engine.borrow_mut().selection_drag_end();
                area.queue_draw();
            });
        }
        self.drawing_area.add_controller(drag);
    }

    fn install_toggle_handler(&self) {
        let engine = Rc::clone(&self.engine);
        let area = self.drawing_area.clone();
        self.fit_to_chart_toggle.connect_toggled(move |button| {
            engine.borrow_mut().set_fit_to_chart(button.is_active());
            area.queue_draw();
        });
    }
}

fn report(result: crate::error::ChartResult<()>) {
    if let Err(err) = result {
        warn!(%err, "ignored chart pointer event");
    }
}
