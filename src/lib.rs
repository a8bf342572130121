//! step-chart: daily step-count bar chart with date selection.
//!
//! The crate keeps a headless core (records, scales, selection state, and the
//! annotation overflow resolver) separate from drawing backends. Hosts feed
//! pointer and toggle events into [`ChartEngine`] and render the resulting
//! [`render::RenderFrame`] with any [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
