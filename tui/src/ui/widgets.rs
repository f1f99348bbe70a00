use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Paragraph},
    Frame,
};

use screening::Label;

use crate::ui::layout::centered_rect;
use crate::ui::theme::Theme;

/// Bins per feature histogram panel.
pub const HIST_BINS: usize = 20;

/// The `Test Result: ...` banner line.
pub fn result_banner(label: Label) -> Line<'static> {
    let style = match label {
        Label::Positive => Theme::positive(),
        Label::Negative => Theme::negative(),
    };

    Line::from(vec![
        Span::styled("Test Result: ", Theme::text()),
        Span::styled(label.to_string(), style),
    ])
}

/// Bin counts for a histogram over the single submitted value.
///
/// One sample degenerates to one occupied bin, placed mid-range; the panels
/// echo the submitted vector rather than plot a distribution.
pub fn single_value_bins(value: f32, bins: usize) -> Vec<u64> {
    let mut counts = vec![0; bins];
    if !counts.is_empty() && value.is_finite() {
        counts[bins / 2] = 1;
    }
    counts
}

/// Renders one `Distribution of {feature}` panel.
pub fn feature_panel(f: &mut Frame, area: Rect, feature: &str, value: f32) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(format!(" Distribution of {feature} "))
        .title_style(Theme::dim());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let counts = single_value_bins(value, HIST_BINS);
    let data: Vec<(&str, u64)> = counts.iter().map(|&c| ("", c)).collect();

    let chart = BarChart::default()
        .data(&data)
        .max(1)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Theme::accent())
        .value_style(Theme::accent());
    f.render_widget(chart, rows[0]);

    f.render_widget(
        Paragraph::new(Span::styled(format!("= {value}"), Theme::dim())),
        rows[1],
    );
}

/// Renders the bottom error bar. No-op when `area` has no rows.
pub fn error_bar(f: &mut Frame, area: Rect, msg: &str) {
    if area.height == 0 {
        return;
    }
    let bar = Rect {
        x: area.x + 1,
        y: area.y + area.height - 1,
        width: area.width.saturating_sub(2),
        height: 1,
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" ✖ ", Theme::error()),
            Span::styled(msg, Theme::error()),
        ])),
        bar,
    );
}

/// Renders `[key] action` hint rows, centered.
pub fn render_hints(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let key_col_width = hints
        .iter()
        .map(|(k, _)| k.len() as u16 + 2)
        .max()
        .unwrap_or(8)
        + 2;

    let outer = centered_rect(40, 100, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            hints
                .iter()
                .map(|_| Constraint::Length(1))
                .chain(std::iter::once(Constraint::Min(0)))
                .collect::<Vec<_>>(),
        )
        .split(outer);

    for (i, (key, action)) in hints.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(key_col_width), Constraint::Min(0)])
            .split(rows[i]);

        f.render_widget(
            Paragraph::new(Span::styled(format!("[{key}]"), Theme::accent())),
            cols[0],
        );
        f.render_widget(Paragraph::new(Span::styled(*action, Theme::dim())), cols[1]);
    }
}
