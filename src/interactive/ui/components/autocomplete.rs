use crate::interactive::domain::filter::CandidateFilter;
use crate::interactive::domain::models::{CandidateEntry, FilterField, Suggestion};
use crate::interactive::ui::components::{text_input::TextInput, Component};
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Combobox over one filter field: free-text query, client-side
/// filtering of the cached catalog, and an always-present "use this
/// text" row. The catalog is requested once and owned by this instance.
pub struct AutocompleteBox {
    field: FilterField,
    input: TextInput,
    catalog: Option<Vec<CandidateEntry>>,
    selected_index: usize,
    disabled: bool,
    focused: bool,
    display_value: String,
}

impl AutocompleteBox {
    pub fn new(field: FilterField) -> Self {
        Self {
            field,
            input: TextInput::new(),
            catalog: None,
            selected_index: 0,
            disabled: true,
            focused: false,
            display_value: String::new(),
        }
    }

    pub fn field(&self) -> FilterField {
        self.field
    }

    /// Sync the query text from the filter store. Keeps the cursor when
    /// the text is unchanged so typing does not jump to the end.
    pub fn set_value(&mut self, value: &str) {
        if self.input.text() != value {
            self.input.set_text(value.to_string());
            self.selected_index = 0;
        }
    }

    /// Value rendered while the input is disabled (the selected
    /// search's field, not the live query).
    pub fn set_display_value(&mut self, value: &str) {
        if self.display_value != value {
            self.display_value = value.to_string();
        }
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.selected_index = 0;
        }
    }

    /// First (and only) catalog delivery for this component's lifetime.
    pub fn set_catalog(&mut self, entries: Vec<CandidateEntry>) {
        self.catalog = Some(entries);
    }

    pub fn is_loading(&self) -> bool {
        self.catalog.is_none()
    }

    pub fn query_is_empty(&self) -> bool {
        self.input.text().is_empty()
    }

    fn suggestions(&self) -> Vec<Suggestion> {
        let catalog = self.catalog.as_deref().unwrap_or(&[]);
        CandidateFilter::suggestions(catalog, self.input.text())
    }

    fn render_dropdown(&self, f: &mut Frame, area: Rect) {
        let suggestions = self.suggestions();
        let nothing_found = suggestions.len() == 1 && !self.input.text().is_empty();

        let mut items: Vec<ListItem> = suggestions
            .iter()
            .enumerate()
            .map(|(i, suggestion)| {
                let style = if i == self.selected_index {
                    Style::default().bg(Color::Cyan).fg(Color::Black)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(Span::styled(suggestion.display_label(), style)))
            })
            .collect();
        if nothing_found {
            items.push(ListItem::new(Line::from(Span::styled(
                "Nothing found.",
                Style::default().fg(Color::DarkGray),
            ))));
        }

        let list = List::new(items).block(Block::default().borders(Borders::ALL));
        f.render_widget(list, area);
    }
}

impl Component for AutocompleteBox {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let title = self.field.prompt();

        if self.disabled {
            // View mode: show the selected search's value, read-only.
            let value = Paragraph::new(self.display_value.clone())
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().title(title).borders(Borders::ALL));
            f.render_widget(value, area);
            return;
        }

        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let input_line = if self.is_loading() {
            Line::from(Span::styled(
                "Loading...",
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else if self.focused {
            Line::from(self.input.cursor_spans())
        } else {
            Line::from(self.input.text().to_string())
        };

        let input = Paragraph::new(input_line).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        );

        if self.focused && !self.is_loading() {
            // Reserve space below the input for the dropdown.
            let input_area = Rect {
                height: area.height.min(3),
                ..area
            };
            let dropdown_area = Rect {
                y: area.y + input_area.height,
                height: area.height.saturating_sub(input_area.height),
                ..area
            };
            f.render_widget(input, input_area);
            if dropdown_area.height > 0 {
                self.render_dropdown(f, dropdown_area);
            }
        } else {
            let input_area = Rect {
                height: area.height.min(3),
                ..area
            };
            f.render_widget(input, input_area);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if self.disabled {
            return None;
        }

        match key.code {
            KeyCode::Up => {
                self.selected_index = self.selected_index.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                let max_index = self.suggestions().len().saturating_sub(1);
                self.selected_index = (self.selected_index + 1).min(max_index);
                None
            }
            KeyCode::Enter => {
                if self.query_is_empty() {
                    // Enter with an empty query clears the constraint
                    // immediately, same as blurring the field.
                    return Some(Message::InputCleared(self.field));
                }
                let suggestion = self.suggestions().get(self.selected_index).cloned()?;
                self.selected_index = 0;
                Some(Message::SuggestionCommitted(self.field, suggestion))
            }
            _ => {
                if self.input.handle_key(key) {
                    self.selected_index = 0;
                    Some(Message::QueryChanged(
                        self.field,
                        self.input.text().to_string(),
                    ))
                } else {
                    None
                }
            }
        }
    }
}
