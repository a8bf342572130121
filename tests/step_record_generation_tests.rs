use chrono::{Local, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use step_chart::api::{ChartEngine, ChartEngineConfig};
use step_chart::core::{STEP_COUNT_RANGE, STEP_RECORD_COUNT, StepRecord, StepRecordStore, Viewport};
use step_chart::render::NullRenderer;

fn engine() -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(Viewport::new(400, 400));
    ChartEngine::new(NullRenderer::default(), config).expect("engine init")
}

#[test]
fn generated_batch_has_sixteen_consecutive_descending_days() {
    let today = NaiveDate::from_ymd_opt(2024, 11, 13).expect("date");
    let store = StepRecordStore::generate(today, &mut StdRng::seed_from_u64(42));

    assert_eq!(store.len(), STEP_RECORD_COUNT);
    assert_eq!(store.newest_day(), Some(today));
    for pair in store.records().windows(2) {
        assert_eq!(pair[0].date().pred_opt(), Some(pair[1].date()));
    }
    assert!(
        store
            .records()
            .iter()
            .all(|record| STEP_COUNT_RANGE.contains(&record.steps()))
    );
}

#[test]
fn record_ids_are_unique() {
    let today = NaiveDate::from_ymd_opt(2024, 11, 13).expect("date");
    let store = StepRecordStore::generate(today, &mut StdRng::seed_from_u64(1));
    let mut ids: Vec<_> = store.records().iter().map(StepRecord::id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), STEP_RECORD_COUNT);
}

#[test]
fn engine_generation_ends_at_local_today() {
    let mut engine = engine();
    assert!(engine.records().is_empty());

    let before = Local::now().date_naive();
    engine.generate_records();
    let after = Local::now().date_naive();

    let newest = engine.record_store().newest_day().expect("newest day");
    assert!(newest == before || newest == after);
    assert_eq!(engine.records().len(), STEP_RECORD_COUNT);
}

#[test]
fn regeneration_replaces_prior_batch() {
    let mut engine = engine();
    let first_day = NaiveDate::from_ymd_opt(2024, 1, 31).expect("date");
    let second_day = NaiveDate::from_ymd_opt(2024, 6, 1).expect("date");

    engine.generate_records_with(first_day, &mut StdRng::seed_from_u64(5));
    let first_ids: Vec<_> = engine.records().iter().map(StepRecord::id).collect();
    engine.generate_records_with(second_day, &mut StdRng::seed_from_u64(5));

    assert_eq!(engine.records().len(), STEP_RECORD_COUNT);
    assert_eq!(engine.record_store().newest_day(), Some(second_day));
    assert!(
        engine
            .records()
            .iter()
            .all(|record| !first_ids.contains(&record.id()))
    );
}

#[test]
fn set_records_rejects_non_contiguous_batch() {
    let mut engine = engine();
    let newest = NaiveDate::from_ymd_opt(2024, 11, 13).expect("date");
    let older = NaiveDate::from_ymd_opt(2024, 11, 14).expect("date");

    let err = engine
        .set_records(vec![StepRecord::new(newest, 600), StepRecord::new(older, 700)])
        .expect_err("ascending order must be rejected");
    assert!(format!("{err}").contains("consecutive descending"));
    assert!(engine.records().is_empty());
}
