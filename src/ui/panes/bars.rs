//! Bar chart pane rendering
//!
//! Values are scaled against the dataset maximum and drawn with eighth-block
//! glyphs, so a chart of height `h` resolves `8 * h` levels. When there are
//! more values than columns, each column shows the largest value of its
//! bucket and inherits a highlight from any index in that bucket.

use crate::engine::HighlightSet;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BLOCKS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarRole {
    Normal,
    /// Primary highlight
    Active,
    /// Secondary highlight
    Comparing,
}

/// One terminal column of the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarColumn {
    pub value: i32,
    pub role: BarRole,
}

/// Map `values` onto at most `width` columns; `None` entries are gaps between bars
pub fn layout_columns(
    values: &[i32],
    highlight: HighlightSet,
    width: usize,
) -> Vec<Option<BarColumn>> {
    let n = values.len();
    if n == 0 || width == 0 {
        return Vec::new();
    }

    let role_of = |index: usize| {
        if highlight.primary == Some(index) {
            BarRole::Active
        } else if highlight.secondary == Some(index) {
            BarRole::Comparing
        } else {
            BarRole::Normal
        }
    };

    if n <= width {
        let bar_width = width / n;
        // Leave a one-column gap once bars are wide enough to spare it
        let filled = if bar_width >= 3 { bar_width - 1 } else { bar_width };
        let mut columns = Vec::with_capacity(n * bar_width);
        for (index, &value) in values.iter().enumerate() {
            let column = BarColumn {
                value,
                role: role_of(index),
            };
            columns.extend(std::iter::repeat(Some(column)).take(filled));
            columns.extend(std::iter::repeat(None).take(bar_width - filled));
        }
        return columns;
    }

    (0..width)
        .map(|col| {
            let start = col * n / width;
            let end = ((col + 1) * n / width).max(start + 1);
            let bucket = start..end;
            let value = values[bucket.clone()].iter().copied().max().unwrap_or(0);
            let role = if highlight.primary.is_some_and(|i| bucket.contains(&i)) {
                BarRole::Active
            } else if highlight.secondary.is_some_and(|i| bucket.contains(&i)) {
                BarRole::Comparing
            } else {
                BarRole::Normal
            };
            Some(BarColumn { value, role })
        })
        .collect()
}

/// Height of a bar in eighths of a row
pub fn bar_eighths(value: i32, max_value: i32, height: usize) -> usize {
    if value <= 0 || max_value <= 0 {
        return 0;
    }
    let levels = (height * 8) as u64;
    let scaled = (value.min(max_value) as u64 * levels).div_ceil(max_value as u64);
    scaled as usize
}

/// Glyph for row `row_from_bottom` of a bar `eighths` tall
fn cell_glyph(eighths: usize, row_from_bottom: usize) -> char {
    let base = row_from_bottom * 8;
    if eighths <= base {
        BLOCKS[0]
    } else {
        BLOCKS[(eighths - base).min(8)]
    }
}

fn role_style(role: BarRole) -> Style {
    match role {
        BarRole::Normal => Style::default().fg(DEFAULT_THEME.bar),
        BarRole::Active => Style::default().fg(DEFAULT_THEME.highlight),
        BarRole::Comparing => Style::default().fg(DEFAULT_THEME.comparing),
    }
}

/// Build the chart rows top to bottom
pub fn bar_lines(columns: &[Option<BarColumn>], max_value: i32, height: usize) -> Vec<Line<'static>> {
    let heights: Vec<usize> = columns
        .iter()
        .map(|column| column.map_or(0, |c| bar_eighths(c.value, max_value, height)))
        .collect();

    (0..height)
        .map(|row| {
            let row_from_bottom = height - 1 - row;
            let spans: Vec<Span> = columns
                .iter()
                .zip(&heights)
                .map(|(column, &eighths)| match column {
                    Some(column) => Span::styled(
                        cell_glyph(eighths, row_from_bottom).to_string(),
                        role_style(column.role),
                    ),
                    None => Span::raw(" "),
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Render the bar chart pane
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    values: &[i32],
    max_value: i32,
    highlight: HighlightSet,
    title: &str,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if values.is_empty() {
        let paragraph = Paragraph::new("(no data)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let inner = block.inner(area);
    let columns = layout_columns(values, highlight, inner.width as usize);
    let lines = bar_lines(&columns, max_value, inner.height as usize);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(paragraph, area);
}
