//! Controls sidebar rendering
//!
//! Lists every command with its key, marking the active algorithm, dataset
//! size and speed tier.

use crate::config::DATASET_SIZES;
use crate::engine::AlgorithmKind;
use crate::playback::DelayTier;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

/// Data needed to render the controls sidebar
pub struct ControlsRenderData {
    /// Algorithm of the running or paused run
    pub current_run: Option<AlgorithmKind>,
    pub is_running: bool,
    pub size: usize,
    pub delay: DelayTier,
}

/// Key bound to each algorithm, in display order
pub const ALGORITHM_KEYS: [(char, AlgorithmKind); 4] = [
    ('1', AlgorithmKind::BubbleSort),
    ('2', AlgorithmKind::SelectionSort),
    ('3', AlgorithmKind::InsertionSort),
    ('4', AlgorithmKind::QuickSort),
];

fn control_item(key: &str, label: String, active: bool, enabled: bool) -> ListItem<'static> {
    let label_style = if active {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else if enabled {
        Style::default().fg(DEFAULT_THEME.fg)
    } else {
        Style::default().fg(DEFAULT_THEME.comment)
    };

    ListItem::new(Line::from(vec![
        Span::styled(
            format!(" {:^5} ", key),
            Style::default().bg(DEFAULT_THEME.comment).fg(DEFAULT_THEME.bg),
        ),
        Span::raw(" "),
        Span::styled(label, label_style),
    ]))
}

fn section(title: &str) -> ListItem<'static> {
    ListItem::new(Span::styled(
        title.to_string(),
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Render the controls sidebar
pub fn render_controls_pane(frame: &mut Frame, area: Rect, data: &ControlsRenderData) {
    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let can_edit_data = !data.is_running;
    let has_run = data.current_run.is_some();
    let mut items = vec![section("Algorithms")];
    for (key, kind) in ALGORITHM_KEYS {
        items.push(control_item(
            &key.to_string(),
            kind.name().to_string(),
            data.current_run == Some(kind),
            !data.is_running,
        ));
    }

    items.push(ListItem::new(""));
    items.push(section("Data"));
    items.push(control_item("g", "Generate".to_string(), false, can_edit_data));
    items.push(control_item("r", "Reset".to_string(), false, can_edit_data));
    let sizes = DATASET_SIZES
        .iter()
        .map(|size| {
            if *size == data.size {
                format!("[{}]", size)
            } else {
                size.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    items.push(control_item("+/-", sizes, false, can_edit_data));

    items.push(ListItem::new(""));
    items.push(section("Playback"));
    items.push(control_item("space", "Pause/Resume".to_string(), false, has_run));
    items.push(control_item("esc", "Stop".to_string(), false, has_run));
    let speeds = [DelayTier::Slow, DelayTier::Medium, DelayTier::Fast]
        .iter()
        .map(|tier| {
            if *tier == data.delay {
                format!("[{}]", tier.label())
            } else {
                tier.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    items.push(control_item("tab", speeds, false, true));

    items.push(ListItem::new(""));
    items.push(control_item("q", "Quit".to_string(), false, true));

    frame.render_widget(List::new(items).block(block), area);
}
