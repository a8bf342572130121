mod annotation_overflow_resolver;
mod data_controller;
mod engine;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod json_contract;
mod label_formatter;
mod label_formatter_controller;
mod layout_helpers;
mod render_frame_builder;
mod render_style;
mod selection_controller;

pub use annotation_overflow_resolver::{
    AnnotationLayoutRequest, AnnotationPlacement, AutomaticOverflowResolver,
    FitToChartOverflowResolver, HorizontalBounds, HorizontalOverflowResolver,
    HorizontalOverflowStrategy, resolve_annotation_placement,
};
pub use engine::ChartEngine;
pub use engine_config::{AnnotationLayoutConfig, ChartEngineConfig, PlotMargins};
pub use engine_snapshot::EngineSnapshot;
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use label_formatter::{
    DateLabelFormatterFn, DayAxisLabelFormatterFn, LabelLocale, StepAxisLabelFormatterFn,
    default_date_label, default_day_axis_label, default_step_axis_label,
};
pub use render_style::RenderStyle;
