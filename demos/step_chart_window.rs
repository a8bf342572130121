use gtk4 as gtk;
use gtk4::prelude::*;
use step_chart::api::{ChartEngine, ChartEngineConfig};
use step_chart::core::Viewport;
use step_chart::platform_gtk::GtkChartAdapter;
use step_chart::render::CairoRenderer;

fn main() {
    let _ = step_chart::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.stepchart.demos.step_chart_window")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &gtk::Application) {
    let renderer = match CairoRenderer::new(1, 1) {
        Ok(renderer) => renderer,
        Err(err) => {
            eprintln!("failed to create cairo renderer: {err}");
            return;
        }
    };
    let config = ChartEngineConfig::new(Viewport::new(480, 480));
    let mut engine = match ChartEngine::new(renderer, config) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("failed to initialize step chart engine: {err}");
            return;
        }
    };
    engine.generate_records();

    let adapter = GtkChartAdapter::new(engine);

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("Horizontal Overflow Resolution")
        .default_width(480)
        .default_height(560)
        .child(adapter.widget())
        .build();
    window.present();
}
