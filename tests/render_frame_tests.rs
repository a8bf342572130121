use approx::assert_abs_diff_eq;
use chrono::{Days, NaiveDate, NaiveDateTime};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;

use step_chart::api::{
    ChartEngine, ChartEngineConfig, LabelLocale, default_date_label, default_step_axis_label,
};
use step_chart::core::{STEP_RECORD_COUNT, Viewport};
use step_chart::render::{NullRenderer, Renderer};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, 13).expect("date")
}

fn at(day: NaiveDate, hour: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, 0, 0).expect("instant")
}

fn loaded_engine() -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(Viewport::new(400, 400));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.generate_records_with(today(), &mut StdRng::seed_from_u64(11));
    engine
}

#[test]
fn fresh_load_renders_only_bars() {
    let engine = loaded_engine();
    assert_eq!(engine.selected(), None);

    let frame = engine.build_render_frame().expect("frame");
    frame.validate().expect("valid frame");

    assert_eq!(frame.bars.len(), STEP_RECORD_COUNT);
    assert!(frame.rule.is_none());
    assert!(frame.annotation.is_none());
    assert_eq!(engine.annotation_placement().expect("placement"), None);
}

#[test]
fn empty_engine_renders_axis_without_bars() {
    let config = ChartEngineConfig::new(Viewport::new(400, 400));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.select(Some(at(today(), 9)));

    let frame = engine.build_render_frame().expect("frame");
    assert!(frame.bars.is_empty());
    assert!(frame.rule.is_none());
    assert!(frame.annotation.is_none());
    assert!(!frame.grid_lines.is_empty());
}

#[test]
fn selecting_today_places_rule_and_label_above_todays_bar() {
    let mut engine = loaded_engine();
    let selected = at(today(), 18);
    engine.select(Some(selected));

    let frame = engine.build_render_frame().expect("frame");
    let rule = frame.rule.expect("rule");
    let annotation = frame.annotation.expect("annotation");
    // records are most recent first, so the first bar is today
    let today_bar = frame.bars[0];

    assert_abs_diff_eq!(rule.x1, today_bar.x + today_bar.width * 0.5, epsilon = 1e-9);
    assert_abs_diff_eq!(rule.x1, rule.x2, epsilon = 1e-9);
    assert_abs_diff_eq!(rule.y1, frame.plot.top, epsilon = 1e-9);
    assert_abs_diff_eq!(rule.y2, frame.plot.bottom, epsilon = 1e-9);

    assert_eq!(annotation.label.text, default_date_label(selected, LabelLocale::EnUs));
    assert_eq!(annotation.label.text, "11/13/2024, 6:00 PM");
    assert!(annotation.background.bottom() <= frame.plot.top);
    assert!(annotation.background.bottom() <= today_bar.y);
}

#[test]
fn rule_uses_day_band_not_time_of_day() {
    let mut engine = loaded_engine();

    engine.select(Some(at(today(), 0)));
    let morning = engine.build_render_frame().expect("frame").rule.expect("rule");
    engine.select(Some(at(today(), 23)));
    let night = engine.build_render_frame().expect("frame").rule.expect("rule");

    assert_abs_diff_eq!(morning.x1, night.x1, epsilon = 1e-9);
}

#[test]
fn rebuilding_with_unchanged_state_is_identical() {
    let mut engine = loaded_engine();
    let first = engine.build_render_frame().expect("first");
    let second = engine.build_render_frame().expect("second");
    assert_eq!(first, second);

    engine.select(Some(at(today() - Days::new(4), 12)));
    engine.set_fit_to_chart(true);
    let third = engine.build_render_frame().expect("third");
    let fourth = engine.build_render_frame().expect("fourth");
    assert_eq!(third, fourth);
}

#[test]
fn selection_outside_batch_is_accepted() {
    let mut engine = loaded_engine();
    let oldest = engine.record_store().oldest_day().expect("oldest");
    let before_batch = at(oldest - Days::new(30), 8);
    engine.select(Some(before_batch));

    assert!(engine.record_store().record_for(before_batch.date()).is_none());
    let frame = engine.build_render_frame().expect("frame");
    frame.validate().expect("valid frame");

    let rule = frame.rule.expect("rule");
    assert!(rule.x1 < frame.plot.left);
    let annotation = frame.annotation.expect("annotation");
    assert_eq!(annotation.label.text, default_date_label(before_batch, LabelLocale::EnUs));
}

#[test]
fn custom_date_formatter_drives_annotation_text() {
    let mut engine = loaded_engine();
    engine.set_date_label_formatter(Arc::new(|instant: NaiveDateTime| {
        instant.format("%Y-%m-%d").to_string()
    }));
    engine.select(Some(at(today(), 7)));

    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.annotation.expect("annotation").label.text, "2024-11-13");
    assert_eq!(engine.selected_date_label().as_deref(), Some("2024-11-13"));

    engine.clear_date_label_formatter();
    assert_eq!(engine.selected_date_label().as_deref(), Some("11/13/2024, 7:00 AM"));
}

#[test]
fn blank_formatters_fall_back_to_locale_defaults() {
    let mut engine = loaded_engine();
    engine.set_date_label_formatter(Arc::new(|_| String::new()));
    engine.set_day_axis_label_formatter(Arc::new(|_| String::new()));
    engine.set_step_axis_label_formatter(Arc::new(|_| "  ".to_owned()));
    engine.select(Some(at(today(), 18)));

    let frame = engine.build_render_frame().expect("frame");
    frame.validate().expect("valid frame");
    let annotation = frame.annotation.as_ref().expect("annotation");
    assert_eq!(annotation.label.text, "11/13/2024, 6:00 PM");
    assert!(frame.axis_labels.iter().any(|label| label.text == "Nov 13"));
    let top = engine.value_scale().expect("scale").domain_max();
    let top_label = default_step_axis_label(top, LabelLocale::EnUs);
    assert!(frame.axis_labels.iter().any(|label| label.text == top_label));
    assert_eq!(engine.selected_date_label().as_deref(), Some("11/13/2024, 6:00 PM"));

    engine.render().expect("render");
    assert_eq!(engine.renderer().last_rect_count, STEP_RECORD_COUNT + 1);
}

#[test]
fn locale_selects_default_label_patterns() {
    let config = ChartEngineConfig::new(Viewport::new(400, 400)).with_locale(LabelLocale::DeDe);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.generate_records_with(today(), &mut StdRng::seed_from_u64(11));
    engine.select(Some(at(today(), 18)));

    let frame = engine.build_render_frame().expect("frame");
    let annotation = frame.annotation.as_ref().expect("annotation");
    assert_eq!(annotation.label.text, "13.11.2024, 18:00");
    assert!(frame.axis_labels.iter().any(|label| label.text == "13.11."));
    assert!(frame.axis_labels.iter().any(|label| label.text == "0"));

    engine.set_date_label_formatter(Arc::new(|_| "custom".to_owned()));
    engine.clear_date_label_formatter();
    assert_eq!(engine.selected_date_label().as_deref(), Some("13.11.2024, 18:00"));
}

#[test]
fn day_axis_always_labels_today() {
    let engine = loaded_engine();
    let frame = engine.build_render_frame().expect("frame");
    assert!(frame.axis_labels.iter().any(|label| label.text == "Nov 13"));
}

#[test]
fn null_renderer_receives_frame_counts() {
    let mut engine = loaded_engine();
    engine.select(Some(at(today(), 12)));
    let expected = engine.build_render_frame().expect("frame");

    engine.render().expect("render");
    let renderer = engine.into_renderer();

    assert_eq!(renderer.last_rect_count, STEP_RECORD_COUNT + 1);
    assert_eq!(renderer.last_line_count, expected.line_count());
    assert_eq!(renderer.last_text_count, expected.text_count());
    assert_eq!(renderer.last_frame.as_ref(), Some(&expected));
}

#[test]
fn null_renderer_rejects_invalid_frames() {
    let mut engine = loaded_engine();
    let mut frame = engine.build_render_frame().expect("frame");
    frame.bars[0].width = f64::NAN;

    let mut renderer = NullRenderer::default();
    assert!(renderer.render(&frame).is_err());
    assert!(engine.render().is_ok());
}
