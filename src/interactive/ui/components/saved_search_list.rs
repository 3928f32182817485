use crate::interactive::domain::models::SavedSearch;
use crate::interactive::ui::components::{text_input::TextInput, Component};
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// The saved-search panel: the user's searches, the selected search's
/// name (editable while in edit mode), and the edit/save/delete keys.
pub struct SavedSearchList {
    items: Vec<SavedSearch>,
    selected_index: usize,
    selected_search: SavedSearch,
    is_loading: bool,
    editing: bool,
    name_input: TextInput,
    focused: bool,
}

impl SavedSearchList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected_index: 0,
            selected_search: SavedSearch::sentinel(),
            is_loading: false,
            editing: false,
            name_input: TextInput::new(),
            focused: false,
        }
    }

    pub fn set_items(&mut self, items: Vec<SavedSearch>) {
        self.items = items;
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index;
    }

    pub fn set_selected_search(&mut self, search: SavedSearch) {
        self.selected_search = search;
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Sync edit mode and the name buffer from the state machine.
    pub fn set_editing(&mut self, name_buffer: Option<&str>) {
        match name_buffer {
            Some(name) => {
                if !self.editing || self.name_input.text() != name {
                    if self.name_input.text() != name {
                        self.name_input.set_text(name.to_string());
                    }
                    self.editing = true;
                }
            }
            None => self.editing = false,
        }
    }

    fn render_name_line(&self) -> Line<'_> {
        if self.editing {
            let mut spans = vec![Span::styled("Name: ", Style::default().fg(Color::Yellow))];
            spans.extend(self.name_input.cursor_spans());
            Line::from(spans)
        } else {
            Line::from(Span::styled(
                self.selected_search.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
        }
    }
}

impl Default for SavedSearchList {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SavedSearchList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // name / name editor
                Constraint::Min(0),    // list
            ])
            .split(area);

        let name = Paragraph::new(self.render_name_line())
            .block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(name, chunks[0]);

        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let title = if self.editing {
            "Saved Searches [editing: type name, Ctrl+S save]"
        } else {
            "Saved Searches [Enter select, e edit, d delete]"
        };

        if self.is_loading {
            let loading = Paragraph::new("Loading...")
                .style(Style::default().add_modifier(Modifier::DIM))
                .block(
                    Block::default()
                        .title(title)
                        .borders(Borders::ALL)
                        .border_style(border_style),
                );
            f.render_widget(loading, chunks[1]);
            return;
        }

        if self.items.is_empty() {
            let empty = Paragraph::new("No saved searches to show!").block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
            f.render_widget(empty, chunks[1]);
            return;
        }

        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, search)| {
                let mut style = Style::default();
                if search.id == self.selected_search.id {
                    style = style.add_modifier(Modifier::BOLD);
                }
                if i == self.selected_index && self.focused {
                    style = style.bg(Color::Cyan).fg(Color::Black);
                }
                ListItem::new(Line::from(Span::styled(search.name.clone(), style)))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        f.render_widget(list, chunks[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if self.editing {
            // While editing, keystrokes go to the name buffer; Ctrl+S
            // commits the edit.
            if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Some(Message::SaveRequested);
            }
            if self.name_input.handle_key(key) {
                return Some(Message::NameChanged(self.name_input.text().to_string()));
            }
            return None;
        }

        match key.code {
            KeyCode::Up => {
                if self.selected_index > 0 {
                    self.selected_index -= 1;
                    return Some(Message::SearchHighlighted(self.selected_index));
                }
                None
            }
            KeyCode::Down => {
                if self.selected_index + 1 < self.items.len() {
                    self.selected_index += 1;
                    return Some(Message::SearchHighlighted(self.selected_index));
                }
                None
            }
            KeyCode::Enter => self
                .items
                .get(self.selected_index)
                .cloned()
                .map(Message::SearchSelected),
            KeyCode::Char('e') => Some(Message::EditRequested),
            KeyCode::Char('d') => Some(Message::DeleteRequested(self.selected_search.clone())),
            _ => None,
        }
    }
}
