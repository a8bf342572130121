use chrono::NaiveDateTime;

use crate::core::{DayScale, StepValueScale};
use crate::error::ChartResult;
use crate::render::{
    AnnotationMark, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::layout_helpers::{day_label_stride, estimate_label_text_width_px};
use super::{
    AnnotationLayoutRequest, AnnotationPlacement, ChartEngine, HorizontalBounds,
    resolve_annotation_placement,
};

const AXIS_LABEL_GAP_PX: f64 = 6.0;

impl<R: Renderer> ChartEngine<R> {
    /// Materializes the current state into a deterministic frame.
    ///
    /// Building never mutates the engine: identical state yields identical
    /// frames.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.viewport, self.plot);

        let value_scale = self.value_scale()?;
        self.append_value_axis(&mut frame, value_scale)?;

        let Some(day_scale) = self.day_scale()? else {
            return Ok(frame);
        };

        for bar in self.project_bars()? {
            frame = frame.with_bar(
                RectPrimitive::new(
                    bar.x_left,
                    bar.y_top,
                    bar.x_right - bar.x_left,
                    bar.y_bottom - bar.y_top,
                    self.style.bar_color,
                )
                .with_corner_radius(self.style.bar_corner_radius_px),
            );
        }
        self.append_day_axis_labels(&mut frame, day_scale);

        let Some(selected) = self.interaction.selected() else {
            return Ok(frame);
        };
        let text = self.date_label_text(selected);
        let placement = self.resolve_placement(day_scale, selected, &text);
        let rule = LinePrimitive::new(
            placement.anchor_x,
            self.plot.top,
            placement.anchor_x,
            self.plot.bottom,
            self.style.rule_width,
            self.style.rule_color,
        );
        Ok(frame
            .with_rule(rule)
            .with_annotation(self.annotation_mark(placement, text)))
    }

    /// Annotation box for the current selection under the current strategy.
    ///
    /// `None` when nothing is selected or the batch is empty.
    pub fn annotation_placement(&self) -> ChartResult<Option<AnnotationPlacement>> {
        let Some(selected) = self.interaction.selected() else {
            return Ok(None);
        };
        let text = self.date_label_text(selected);
        Ok(self
            .day_scale()?
            .map(|day_scale| self.resolve_placement(day_scale, selected, &text)))
    }

    /// Horizontal extent of the plotting area.
    #[must_use]
    pub fn plot_bounds(&self) -> HorizontalBounds {
        HorizontalBounds::new(self.plot.left, self.plot.right)
    }

    /// Horizontal extent of the whole chart surface.
    #[must_use]
    pub fn chart_bounds(&self) -> HorizontalBounds {
        HorizontalBounds::new(0.0, f64::from(self.viewport.width))
    }

    fn resolve_placement(
        &self,
        day_scale: DayScale,
        selected: NaiveDateTime,
        text: &str,
    ) -> AnnotationPlacement {
        let layout = self.config.annotation;
        let request = AnnotationLayoutRequest {
            anchor_x: day_scale.day_center_x(selected.date(), self.plot),
            anchor_top_y: self.plot.top,
            box_width: estimate_label_text_width_px(text, layout.font_size_px)
                + 2.0 * layout.padding_x_px,
            box_height: layout.font_size_px + 2.0 * layout.padding_y_px,
            spacing_px: layout.spacing_px,
            plot_bounds: self.plot_bounds(),
            chart_bounds: self.chart_bounds(),
        };
        resolve_annotation_placement(&request, self.horizontal_overflow_strategy())
    }

    fn annotation_mark(&self, placement: AnnotationPlacement, text: String) -> AnnotationMark {
        let layout = self.config.annotation;
        AnnotationMark {
            background: RectPrimitive::new(
                placement.x,
                placement.y,
                placement.width,
                placement.height,
                self.style.annotation_fill_color,
            )
            .with_corner_radius(layout.corner_radius_px),
            label: TextPrimitive::new(
                text,
                placement.center_x(),
                placement.y + layout.padding_y_px,
                layout.font_size_px,
                self.style.annotation_text_color,
                TextHAlign::Center,
            ),
        }
    }

    fn append_value_axis(
        &self,
        frame: &mut RenderFrame,
        value_scale: StepValueScale,
    ) -> ChartResult<()> {
        let font_size_px = self.config.axis_font_size_px;
        for tick in value_scale.ticks() {
            let y = value_scale.value_to_pixel(tick, self.plot)?;
            frame.grid_lines.push(LinePrimitive::new(
                self.plot.left,
                y,
                self.plot.right,
                y,
                self.style.grid_line_width,
                self.style.grid_line_color,
            ));
            frame.axis_labels.push(TextPrimitive::new(
                self.step_axis_label_text(tick),
                self.plot.right + AXIS_LABEL_GAP_PX,
                y - font_size_px * 0.5,
                font_size_px,
                self.style.axis_label_color,
                TextHAlign::Left,
            ));
        }
        Ok(())
    }

    fn append_day_axis_labels(&self, frame: &mut RenderFrame, day_scale: DayScale) {
        let stride = day_label_stride(day_scale.day_count(), self.config.max_day_labels);
        let newest_index = day_scale.day_count() - 1;
        for record in self.store.records() {
            let Some(index) = day_scale.index_of(record.date()) else {
                continue;
            };
            // count back from the newest day so today always gets a label
            if (newest_index - index) % stride != 0 {
                continue;
            }
            frame.axis_labels.push(TextPrimitive::new(
                self.day_axis_label_text(record.date()),
                day_scale.day_center_x(record.date(), self.plot),
                self.plot.bottom + AXIS_LABEL_GAP_PX,
                self.config.axis_font_size_px,
                self.style.axis_label_color,
                TextHAlign::Center,
            ));
        }
    }
}
