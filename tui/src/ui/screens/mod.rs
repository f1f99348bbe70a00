pub mod exam;
pub mod menu;
pub mod result;

use crossterm::event::KeyCode;
use ratatui::Frame;

use crate::app::AppContext;

pub enum Action {
    None,
    Quit,
    Transition(Screen),
}

pub enum Screen {
    Menu(menu::MenuState),
    Exam(exam::ExamState),
    Result(result::ResultState),
}

impl Screen {
    pub fn draw(&self, f: &mut Frame) {
        match self {
            Screen::Menu(s) => menu::draw(f, s),
            Screen::Exam(s) => exam::draw(f, s),
            Screen::Result(s) => result::draw(f, s),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode, ctx: &AppContext) -> Action {
        match self {
            Screen::Menu(s) => menu::handle_key(s, key),
            Screen::Exam(s) => exam::handle_key(s, key, ctx),
            Screen::Result(s) => result::handle_key(s, key),
        }
    }
}
