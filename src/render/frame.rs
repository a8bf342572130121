use crate::core::{PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// Floating label attached to the selection rule: a rounded box plus its text.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationMark {
    pub background: RectPrimitive,
    pub label: TextPrimitive,
}

impl AnnotationMark {
    pub fn validate(&self) -> ChartResult<()> {
        self.background.validate()?;
        self.label.validate()
    }
}

/// Backend-agnostic view tree for one chart draw pass.
///
/// Backends draw the parts in field order: grid, bars, axis labels, rule,
/// annotation. The rule and annotation exist only while a date is selected.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub plot: PlotArea,
    pub grid_lines: Vec<LinePrimitive>,
    pub bars: Vec<RectPrimitive>,
    pub axis_labels: Vec<TextPrimitive>,
    pub rule: Option<LinePrimitive>,
    pub annotation: Option<AnnotationMark>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, plot: PlotArea) -> Self {
        Self {
            viewport,
            plot,
            grid_lines: Vec::new(),
            bars: Vec::new(),
            axis_labels: Vec::new(),
            rule: None,
            annotation: None,
        }
    }

    #[must_use]
    pub fn with_bar(mut self, bar: RectPrimitive) -> Self {
        self.bars.push(bar);
        self
    }

    #[must_use]
    pub fn with_rule(mut self, rule: LinePrimitive) -> Self {
        self.rule = Some(rule);
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: AnnotationMark) -> Self {
        self.annotation = Some(annotation);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in &self.grid_lines {
            line.validate()?;
        }
        for bar in &self.bars {
            bar.validate()?;
        }
        for text in &self.axis_labels {
            text.validate()?;
        }
        if let Some(rule) = self.rule {
            rule.validate()?;
        }
        if let Some(annotation) = &self.annotation {
            annotation.validate()?;
        }

        Ok(())
    }

    /// Counts every line the frame draws, including the rule.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.grid_lines.len() + usize::from(self.rule.is_some())
    }

    /// Counts every rectangle the frame draws, including the annotation box.
    #[must_use]
    pub fn rect_count(&self) -> usize {
        self.bars.len() + usize::from(self.annotation.is_some())
    }

    /// Counts every text the frame draws, including the annotation label.
    #[must_use]
    pub fn text_count(&self) -> usize {
        self.axis_labels.len() + usize::from(self.annotation.is_some())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line_count() == 0 && self.rect_count() == 0 && self.text_count() == 0
    }
}
