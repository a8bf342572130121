#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use step_chart::ChartError;
use step_chart::api::{ChartEngine, ChartEngineConfig};
use step_chart::core::Viewport;
use step_chart::render::{CairoRenderer, Color};

fn engine(side: i32) -> ChartEngine<CairoRenderer> {
    let renderer = CairoRenderer::new(side, side).expect("renderer");
    let side = u32::try_from(side).expect("positive side");
    let config = ChartEngineConfig::new(Viewport::new(side, side));
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");
    let today = NaiveDate::from_ymd_opt(2024, 11, 13).expect("date");
    engine.generate_records_with(today, &mut StdRng::seed_from_u64(11));
    engine.select(today.and_hms_opt(18, 0, 0));
    engine
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_validates_clear_color() {
    let mut renderer = CairoRenderer::new(64, 64).expect("renderer");
    assert_eq!(renderer.clear_color(), Color::rgb(1.0, 1.0, 1.0));

    let err = renderer
        .set_clear_color(Color::rgba(1.5, 0.0, 0.0, 1.0))
        .expect_err("out of range channel must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert_eq!(renderer.clear_color(), Color::rgb(1.0, 1.0, 1.0));

    let dark = Color::rgb(0.1, 0.1, 0.12);
    renderer.set_clear_color(dark).expect("valid color");
    assert_eq!(renderer.clear_color(), dark);
}

#[test]
fn cairo_renderer_draws_every_frame_primitive() {
    let mut engine = engine(400);
    let frame = engine.build_render_frame().expect("frame");

    engine.render().expect("render");
    let stats = engine.into_renderer().last_stats();

    assert_eq!(stats.lines_drawn, frame.line_count());
    assert_eq!(stats.rects_drawn, 17);
    assert_eq!(stats.texts_drawn, frame.text_count());
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let mut engine = engine(320);

    let surface = ImageSurface::create(Format::ARgb32, 320, 320).expect("surface");
    let context = Context::new(&surface).expect("context");
    engine
        .render_on_cairo_context(&context)
        .expect("render on context");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_stats().rects_drawn, 17);
}

#[test]
fn cairo_renderer_exports_png() {
    let mut engine = engine(240);
    engine.render().expect("render");

    let mut png = Vec::new();
    engine.renderer().write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}
