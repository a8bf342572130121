pub(super) fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    // Keep this estimate deterministic and backend-independent.
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' | '/' | ':' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            'M' | 'W' => 0.86,
            'A'..='Z' => 0.68,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

/// Band stride so at most `max_labels` day labels are drawn.
pub(super) fn day_label_stride(day_count: u32, max_labels: u32) -> u32 {
    day_count.div_ceil(max_labels.max(1)).max(1)
}
