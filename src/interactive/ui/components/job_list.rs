use crate::interactive::domain::models::{JobPosting, ROLE_TAGS};
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Job postings for the committed filters. Read-only consumer of the
/// filter store; number keys apply the quick role tags.
pub struct JobList {
    postings: Vec<JobPosting>,
    selected_index: usize,
    is_loading: bool,
    focused: bool,
}

impl JobList {
    pub fn new() -> Self {
        Self {
            postings: Vec::new(),
            selected_index: 0,
            is_loading: false,
            focused: false,
        }
    }

    pub fn set_postings(&mut self, postings: Vec<JobPosting>) {
        self.postings = postings;
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index;
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn posting_line(posting: &JobPosting) -> String {
        let mut line = format!(
            "{} @ {} ({})",
            posting.title, posting.company, posting.location
        );
        if let Some(salary) = &posting.salary {
            line.push_str(&format!("  {salary}"));
        }
        line
    }
}

impl Default for JobList {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for JobList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // postings
                Constraint::Length(1), // tag row
            ])
            .split(area);

        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let title = if self.is_loading {
            "Jobs [loading...]"
        } else {
            "Jobs"
        };

        if self.postings.is_empty() && !self.is_loading {
            let empty = Paragraph::new("No jobs match the current filters").block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
            f.render_widget(empty, chunks[0]);
        } else {
            let items: Vec<ListItem> = self
                .postings
                .iter()
                .enumerate()
                .map(|(i, posting)| {
                    let style = if i == self.selected_index && self.focused {
                        Style::default().bg(Color::Cyan).fg(Color::Black)
                    } else {
                        Style::default()
                    };
                    ListItem::new(Line::from(Span::styled(Self::posting_line(posting), style)))
                })
                .collect();
            let list = List::new(items).block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
            f.render_widget(list, chunks[0]);
        }

        let tags: String = ROLE_TAGS
            .iter()
            .enumerate()
            .map(|(i, tag)| format!("{}:{tag} ", i + 1))
            .collect();
        let tag_row = Paragraph::new(Line::from(Span::styled(
            format!("Tags {tags}| r: refresh"),
            Style::default().add_modifier(Modifier::DIM),
        )));
        f.render_widget(tag_row, chunks[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => {
                if self.selected_index > 0 {
                    self.selected_index -= 1;
                    return Some(Message::JobHighlighted(self.selected_index));
                }
                None
            }
            KeyCode::Down => {
                if self.selected_index + 1 < self.postings.len() {
                    self.selected_index += 1;
                    return Some(Message::JobHighlighted(self.selected_index));
                }
                None
            }
            KeyCode::Char('r') => Some(Message::JobQueryRequested),
            KeyCode::Char(c) => {
                let digit = c.to_digit(10)? as usize;
                let tag = ROLE_TAGS.get(digit.checked_sub(1)?)?;
                Some(Message::TagApplied(tag.to_string()))
            }
            _ => None,
        }
    }
}
