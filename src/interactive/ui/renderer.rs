use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::interactive::domain::models::{FilterField, NoticeKind};
use crate::interactive::ui::app_state::{AppState, EditState, Focus};
use crate::interactive::ui::components::{
    autocomplete::AutocompleteBox, job_list::JobList, saved_search_list::SavedSearchList, Component,
};

/// Owns the widgets and pushes the relevant slice of `AppState` into
/// each of them every frame.
pub struct Renderer {
    saved_search_list: SavedSearchList,
    role_input: AutocompleteBox,
    location_input: AutocompleteBox,
    company_input: AutocompleteBox,
    job_list: JobList,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            saved_search_list: SavedSearchList::new(),
            role_input: AutocompleteBox::new(FilterField::Role),
            location_input: AutocompleteBox::new(FilterField::Location),
            company_input: AutocompleteBox::new(FilterField::Company),
            job_list: JobList::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // notice / status line
                Constraint::Min(0),    // content
            ])
            .split(f.area());

        self.render_status_line(f, state, chunks[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),    // saved searches
                Constraint::Length(9), // role input (+dropdown space)
                Constraint::Length(9), // location input
                Constraint::Length(9), // company input
            ])
            .split(columns[0]);

        // Saved-search panel
        self.saved_search_list.set_items(state.searches.items.clone());
        self.saved_search_list
            .set_selected_index(state.searches.selected_index);
        self.saved_search_list
            .set_selected_search(state.selected.clone());
        self.saved_search_list.set_loading(state.searches.is_loading);
        self.saved_search_list
            .set_focused(state.ui.focus == Focus::Searches);
        match &state.edit {
            EditState::Editing { name_buffer } => {
                self.saved_search_list.set_editing(Some(name_buffer))
            }
            EditState::Viewing => self.saved_search_list.set_editing(None),
        }
        self.saved_search_list.render(f, left[0]);

        // Autocomplete inputs
        let disabled = state.inputs_disabled();
        for (input, area) in [
            (&mut self.role_input, left[1]),
            (&mut self.location_input, left[2]),
            (&mut self.company_input, left[3]),
        ] {
            let field = input.field();
            input.set_value(state.filters.input(field));
            input.set_display_value(selected_field_value(state, field));
            input.set_disabled(disabled);
            input.set_focused(state.ui.focus == Focus::Input(field));
            input.render(f, area);
        }

        // Job list
        self.job_list.set_postings(state.jobs.postings.clone());
        self.job_list.set_selected_index(state.jobs.selected_index);
        self.job_list.set_loading(state.jobs.is_loading);
        self.job_list.set_focused(state.ui.focus == Focus::Jobs);
        self.job_list.render(f, columns[1]);
    }

    fn render_status_line(&self, f: &mut Frame, state: &AppState, area: ratatui::layout::Rect) {
        let line = match &state.ui.notice {
            Some(notice) => {
                let style = match notice.kind {
                    NoticeKind::Success => Style::default().fg(Color::Green),
                    NoticeKind::Error => Style::default().fg(Color::Red),
                };
                Line::from(Span::styled(notice.text.clone(), style))
            }
            None => Line::from(Span::styled(
                "Tab: switch pane | Ctrl+C Ctrl+C: exit",
                Style::default().fg(Color::DarkGray),
            )),
        };
        f.render_widget(Paragraph::new(line), area);
    }

    pub fn saved_search_list_mut(&mut self) -> &mut SavedSearchList {
        &mut self.saved_search_list
    }

    pub fn autocomplete_mut(&mut self, field: FilterField) -> &mut AutocompleteBox {
        match field {
            FilterField::Role => &mut self.role_input,
            FilterField::Location => &mut self.location_input,
            FilterField::Company => &mut self.company_input,
        }
    }

    pub fn job_list_mut(&mut self) -> &mut JobList {
        &mut self.job_list
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn selected_field_value(state: &AppState, field: FilterField) -> &str {
    match field {
        FilterField::Role => &state.selected.title,
        FilterField::Location => &state.selected.location,
        FilterField::Company => &state.selected.company,
    }
}
