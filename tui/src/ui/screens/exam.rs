use crossterm::event::KeyCode;
use log::warn;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use screening::{TaskKind, parse_vector};

use crate::app::AppContext;
use crate::ui::layout::centered_rect;
use crate::ui::theme::Theme;
use crate::ui::widgets;

use super::{Action, Screen};

/// One screening form: a numeric entry per feature plus a submit row.
#[derive(Clone)]
pub struct ExamState {
    pub task: TaskKind,
    /// One raw entry per feature; blank means the default 0.
    entries: Vec<String>,
    /// Selected row; `entries.len()` is the submit row.
    selected: usize,
    error: Option<String>,
}

impl ExamState {
    pub fn new(task: TaskKind) -> Self {
        Self {
            task,
            entries: vec![String::new(); task.features().len()],
            selected: 0,
            error: None,
        }
    }

    fn submit_row(&self) -> usize {
        self.entries.len()
    }
}

pub fn handle_key(state: &mut ExamState, key: KeyCode, ctx: &AppContext) -> Action {
    state.error = None;

    match key {
        KeyCode::Up | KeyCode::BackTab => {
            if state.selected > 0 {
                state.selected -= 1;
            }
            Action::None
        }
        KeyCode::Down | KeyCode::Tab => {
            if state.selected < state.submit_row() {
                state.selected += 1;
            }
            Action::None
        }
        KeyCode::Char(c) if state.selected < state.submit_row() => {
            state.entries[state.selected].push(c);
            Action::None
        }
        KeyCode::Backspace if state.selected < state.submit_row() => {
            state.entries[state.selected].pop();
            Action::None
        }
        KeyCode::Enter => {
            if state.selected < state.submit_row() {
                state.selected += 1;
                Action::None
            } else {
                submit(state, ctx)
            }
        }
        KeyCode::Esc => Action::Transition(Screen::Menu(super::menu::MenuState::new())),
        _ => Action::None,
    }
}

fn submit(state: &mut ExamState, ctx: &AppContext) -> Action {
    let vector = match parse_vector(state.task, &state.entries) {
        Ok(v) => v,
        Err(e) => {
            state.error = Some(e.to_string());
            return Action::None;
        }
    };

    match ctx.store.predict(state.task, &vector) {
        Ok(label) => Action::Transition(Screen::Result(super::result::ResultState::new(
            state.clone(),
            vector,
            label,
        ))),
        Err(e) => {
            warn!("{}: prediction failed: {e}", state.task.id());
            state.error = Some(format!("prediction failed: {e}"));
            Action::None
        }
    }
}

pub fn draw(f: &mut Frame, state: &ExamState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let outer = centered_rect(70, 90, area);
    let features = state.task.features();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                          // title
            Constraint::Length(1),                          // subtitle
            Constraint::Length(1),                          // spacer
            Constraint::Length(features.len() as u16 + 2),  // fields + submit
            Constraint::Min(0),
            Constraint::Length(3),                          // keybinds
        ])
        .split(outer);

    f.render_widget(
        Paragraph::new(Span::styled(
            format!("{} Test", state.task.display_name()),
            Theme::title(),
        )),
        chunks[0],
    );

    f.render_widget(
        Paragraph::new(Span::styled(
            "Enter the required details below:",
            Theme::muted(),
        )),
        chunks[1],
    );

    draw_form(f, chunks[3], state);

    widgets::render_hints(
        f,
        chunks[5],
        &[
            ("↑↓ / tab", "field"),
            ("enter", "next / predict"),
            ("esc", "back to menu"),
        ],
    );

    if let Some(err) = &state.error {
        widgets::error_bar(f, area, err);
    }
}

fn draw_form(f: &mut Frame, area: Rect, state: &ExamState) {
    let features = state.task.features();

    let mut constraints = vec![Constraint::Length(1); features.len()];
    constraints.push(Constraint::Length(1)); // gap
    constraints.push(Constraint::Length(1)); // submit row

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let label_width = features.iter().map(|n| n.len()).max().unwrap_or(0) as u16 + 4;

    for (i, feature) in features.iter().enumerate() {
        draw_field(
            f,
            rows[i],
            feature,
            &state.entries[i],
            i == state.selected,
            label_width,
        );
    }

    let on_submit = state.selected == state.submit_row();
    let (marker, style) = if on_submit {
        ("▶ ", Theme::accent())
    } else {
        ("  ", Theme::dim())
    };
    let mut submit = Paragraph::new(Line::from(vec![
        Span::styled(marker, style),
        Span::styled("[ Predict ]", style),
    ]));
    if on_submit {
        submit = submit.style(Theme::highlight_bg());
    }
    f.render_widget(submit, rows[features.len() + 1]);
}

fn draw_field(
    f: &mut Frame,
    area: Rect,
    feature: &str,
    entry: &str,
    selected: bool,
    label_width: u16,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(label_width), Constraint::Min(0)])
        .split(area);

    let (marker, label_style) = if selected {
        ("▶ ", Theme::title())
    } else {
        ("  ", Theme::dim())
    };

    let mut label = Paragraph::new(Line::from(vec![
        Span::styled(marker, label_style),
        Span::styled(feature, label_style),
    ]));

    let mut spans = if entry.is_empty() {
        vec![Span::styled("0", Theme::muted())]
    } else {
        vec![Span::styled(entry, Theme::text())]
    };
    if selected {
        spans.push(Span::styled("█", Theme::accent()));
    }
    let mut value = Paragraph::new(Line::from(spans));

    if selected {
        label = label.style(Theme::highlight_bg());
        value = value.style(Theme::highlight_bg());
    }

    f.render_widget(label, cols[0]);
    f.render_widget(value, cols[1]);
}
