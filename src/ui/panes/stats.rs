//! Run information panel: algorithm, status message and live counters

use crate::metrics::RunMetrics;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct StatsRenderData<'a> {
    pub algorithm_label: &'a str,
    pub status: &'a str,
    pub metrics: RunMetrics,
    pub is_running: bool,
    pub size: usize,
    pub quick_sort: String,
}

pub fn render_stats_pane(frame: &mut Frame, area: Rect, data: &StatsRenderData) {
    let block = Block::default()
        .title(" Algorithm Visualizer ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Algorithm: ", label_style),
            Span::styled(
                data.algorithm_label.to_string(),
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   ({} elements, quicksort: {})", data.size, data.quick_sort),
                label_style,
            ),
        ]),
        Line::from(Span::styled(
            data.status.to_string(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
    ];

    // Counters while a run is live, the key reminder otherwise
    if data.is_running {
        lines.push(Line::from(Span::styled(
            format!(
                "Comparisons: {} | Swaps: {}",
                data.metrics.comparisons, data.metrics.swaps
            ),
            Style::default().fg(DEFAULT_THEME.stats),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Controls: Space=Pause/Resume | R=Reset | ESC=Stop",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
