use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    /// A press-and-drag selection gesture is in progress.
    Selecting,
}

/// Currently selected instant along the horizontal axis.
///
/// The value is continuous: it is not snapped to a record's day and may lie
/// outside the days covered by the record batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected: Option<NaiveDateTime>,
}

/// Toggle driving the horizontal annotation overflow strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnnotationStrategyToggle {
    pub fit_to_chart: bool,
}

/// View-local mutable state owned by the chart engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    selection: SelectionState,
    toggle: AnnotationStrategyToggle,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            selection: SelectionState::default(),
            toggle: AnnotationStrategyToggle::default(),
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn with_fit_to_chart(fit_to_chart: bool) -> Self {
        Self {
            toggle: AnnotationStrategyToggle { fit_to_chart },
            ..Self::default()
        }
    }

    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn selection(self) -> SelectionState {
        self.selection
    }

    #[must_use]
    pub fn selected(self) -> Option<NaiveDateTime> {
        self.selection.selected
    }

    #[must_use]
    pub fn toggle(self) -> AnnotationStrategyToggle {
        self.toggle
    }

    #[must_use]
    pub fn fit_to_chart(self) -> bool {
        self.toggle.fit_to_chart
    }

    /// Replaces the selection. Returns `true` when the value changed.
    pub fn select(&mut self, selected: Option<NaiveDateTime>) -> bool {
        let changed = self.selection.selected != selected;
        self.selection.selected = selected;
        changed
    }

    /// Sets the toggle. Selection is left untouched. Returns `true` on change.
    pub fn set_fit_to_chart(&mut self, fit_to_chart: bool) -> bool {
        let changed = self.toggle.fit_to_chart != fit_to_chart;
        self.toggle.fit_to_chart = fit_to_chart;
        changed
    }

    pub fn on_selection_start(&mut self) {
        self.mode = InteractionMode::Selecting;
    }

    pub fn on_selection_end(&mut self) {
        self.mode = InteractionMode::Idle;
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{InteractionMode, InteractionState};

    #[test]
    fn toggle_flip_keeps_selection() {
        let instant = NaiveDate::from_ymd_opt(2024, 11, 13)
            .and_then(|day| day.and_hms_opt(9, 30, 0))
            .expect("instant");
        let mut state = InteractionState::default();
        assert!(state.select(Some(instant)));
        assert!(state.set_fit_to_chart(true));
        assert_eq!(state.selected(), Some(instant));
        assert!(!state.set_fit_to_chart(true));
    }

    #[test]
    fn selection_gesture_tracks_mode() {
        let mut state = InteractionState::default();
        state.on_selection_start();
        assert_eq!(state.mode(), InteractionMode::Selecting);
        state.on_selection_end();
        assert_eq!(state.mode(), InteractionMode::Idle);
    }
}
