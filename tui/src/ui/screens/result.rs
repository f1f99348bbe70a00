use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use screening::Label;

use crate::ui::layout::{centered_rect, grid};
use crate::ui::theme::Theme;
use crate::ui::widgets;

use super::{Action, Screen, exam::ExamState};

/// Cosmetic pause before the outcome is revealed. The label is already
/// computed when this screen is entered.
const REVEAL_DELAY: Duration = Duration::from_secs(2);

const HIST_COLS: u16 = 4;

pub struct ResultState {
    exam: ExamState,
    values: Vec<f32>,
    label: Label,
    started: Instant,
}

impl ResultState {
    pub fn new(exam: ExamState, values: Vec<f32>, label: Label) -> Self {
        Self {
            exam,
            values,
            label,
            started: Instant::now(),
        }
    }

    /// Progress through the reveal pause, 0..=100.
    fn progress(&self) -> u16 {
        let elapsed = self.started.elapsed().as_millis();
        let total = REVEAL_DELAY.as_millis().max(1);
        ((elapsed * 100) / total).min(100) as u16
    }

    fn revealed(&self) -> bool {
        self.progress() >= 100
    }
}

pub fn handle_key(state: &mut ResultState, _key: KeyCode) -> Action {
    if !state.revealed() {
        return Action::None;
    }

    Action::Transition(Screen::Exam(state.exam.clone()))
}

pub fn draw(f: &mut Frame, state: &ResultState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    if state.revealed() {
        draw_outcome(f, area, state);
    } else {
        draw_processing(f, area, state.progress());
    }
}

fn draw_processing(f: &mut Frame, area: Rect, percent: u16) {
    let outer = centered_rect(50, 30, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(outer);

    f.render_widget(
        Paragraph::new(Span::styled("Processing...", Theme::title()))
            .alignment(Alignment::Center),
        chunks[0],
    );

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        )
        .gauge_style(Theme::gauge())
        .percent(percent);
    f.render_widget(gauge, chunks[2]);
}

fn draw_outcome(f: &mut Frame, area: Rect, state: &ResultState) {
    let features = state.exam.task.features();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // banner
            Constraint::Length(1), // spacer
            Constraint::Min(4),    // feature panels
            Constraint::Length(1), // hint
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(
            format!("{} Test", state.exam.task.display_name()),
            Theme::title(),
        )),
        chunks[0],
    );

    f.render_widget(Paragraph::new(widgets::result_banner(state.label)), chunks[1]);

    let cells = grid(chunks[3], HIST_COLS, features.len());
    for ((feature, value), cell) in features.iter().zip(&state.values).zip(cells) {
        widgets::feature_panel(f, cell, feature, *value);
    }

    widgets::render_hints(f, chunks[4], &[("any key", "back to the form")]);
}
