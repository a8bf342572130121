use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use step_chart::api::{ChartEngine, ChartEngineConfig};
use step_chart::core::Viewport;
use step_chart::render::NullRenderer;

proptest! {
    #[test]
    fn fit_to_chart_never_overflows_more_than_automatic(
        seed in any::<u64>(),
        side in 200u32..1200u32,
        day_offset in -20i64..20i64,
        hour in 0u32..24u32,
    ) {
        let today = NaiveDate::from_ymd_opt(2024, 11, 13).expect("date");
        let config = ChartEngineConfig::new(Viewport::new(side, side));
        let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
        engine.generate_records_with(today, &mut StdRng::seed_from_u64(seed));

        let day = if day_offset >= 0 {
            today - Days::new(day_offset as u64)
        } else {
            today + Days::new(day_offset.unsigned_abs())
        };
        engine.select(day.and_hms_opt(hour, 0, 0));

        let automatic = engine.annotation_placement().expect("placement").expect("selected");
        engine.set_fit_to_chart(true);
        let fitted = engine.annotation_placement().expect("placement").expect("selected");

        let plot = engine.plot_bounds();
        prop_assert!(
            fitted.horizontal_overflow_px(plot) <= automatic.horizontal_overflow_px(plot) + 1e-9
        );
        if fitted.width <= plot.width() {
            prop_assert!(fitted.is_within(plot));
        }
        prop_assert_eq!(fitted.y, automatic.y);
        prop_assert_eq!(fitted.anchor_x, automatic.anchor_x);
    }

    #[test]
    fn frame_build_is_deterministic_and_finite(
        seed in any::<u64>(),
        pointer_x in -100.0f64..700.0f64,
        fit_to_chart in any::<bool>(),
    ) {
        let today = NaiveDate::from_ymd_opt(2024, 11, 13).expect("date");
        let config = ChartEngineConfig::new(Viewport::new(640, 480));
        let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
        engine.generate_records_with(today, &mut StdRng::seed_from_u64(seed));
        engine.set_fit_to_chart(fit_to_chart);
        engine.pointer_move(pointer_x).expect("pointer move");

        let first = engine.build_render_frame().expect("first frame");
        let second = engine.build_render_frame().expect("second frame");

        prop_assert_eq!(&first, &second);
        prop_assert!(first.validate().is_ok());
        prop_assert!(first.rule.is_some());
        prop_assert_eq!(first.bars.len(), 16);
    }
}
