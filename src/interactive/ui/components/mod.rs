pub mod autocomplete;
pub mod job_list;
pub mod saved_search_list;
pub mod text_input;

#[cfg(test)]
mod text_input_test;

use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}
