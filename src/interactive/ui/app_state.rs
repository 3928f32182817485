use crate::interactive::constants::NOTICE_CLEAR_MS;
use crate::interactive::domain::models::{
    FilterField, JobPosting, JobQuery, MutationOutcome, MutationRequest, Notice, SavedSearch,
    UpdatePayload,
};
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;

/// The three committed filters plus the raw text each input is showing.
/// Committed values drive the job query; input values may lag or lead
/// them while the user is typing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterState {
    committed: [String; 3],
    inputs: [String; 3],
}

impl FilterState {
    pub fn committed(&self, field: FilterField) -> &str {
        &self.committed[field.index()]
    }

    pub fn set_committed(&mut self, field: FilterField, value: impl Into<String>) {
        self.committed[field.index()] = value.into();
    }

    pub fn input(&self, field: FilterField) -> &str {
        &self.inputs[field.index()]
    }

    pub fn set_input(&mut self, field: FilterField, value: impl Into<String>) {
        self.inputs[field.index()] = value.into();
    }

    /// Commits a value: display text and committed filter move together.
    pub fn commit(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        self.set_input(field, value.clone());
        self.set_committed(field, value);
    }

    /// Empty string means "no constraint" for both views of the field.
    pub fn clear(&mut self, field: FilterField) {
        self.commit(field, "");
    }

    /// Job-query parameters for the committed filters. This is the only
    /// surface the job list reads.
    pub fn job_query(&self, max_results: usize) -> JobQuery {
        JobQuery {
            title: self.committed(FilterField::Role).to_string(),
            location: self.committed(FilterField::Location).to_string(),
            company: self.committed(FilterField::Company).to_string(),
            max_results,
        }
    }

    /// Overwrites all six values from a saved search. Callers rely on
    /// this being a single synchronous step: no reader ever observes a
    /// partially applied search switch.
    pub fn apply_search(&mut self, search: &SavedSearch) {
        self.commit(FilterField::Role, search.title.clone());
        self.commit(FilterField::Location, search.location.clone());
        self.commit(FilterField::Company, search.company.clone());
    }
}

/// Edit/view mode for the saved-search panel. The editable name only
/// exists while editing, so a stale buffer cannot outlive edit mode.
#[derive(Clone, Debug, PartialEq)]
pub enum EditState {
    Viewing,
    Editing { name_buffer: String },
}

/// Which pane receives keyboard input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Searches,
    Input(FilterField),
    Jobs,
}

pub struct SearchListState {
    pub items: Vec<SavedSearch>,
    pub selected_index: usize,
    pub is_loading: bool,
}

pub struct JobListState {
    pub postings: Vec<JobPosting>,
    pub selected_index: usize,
    pub is_loading: bool,
    pub current_query_id: u64,
}

pub struct UiState {
    pub notice: Option<Notice>,
    pub focus: Focus,
}

pub struct AppState {
    pub filters: FilterState,
    pub selected: SavedSearch,
    pub edit: EditState,
    pub searches: SearchListState,
    pub jobs: JobListState,
    pub ui: UiState,
    pub max_results: usize,
}

impl AppState {
    pub fn new(max_results: usize) -> Self {
        Self {
            filters: FilterState::default(),
            selected: SavedSearch::sentinel(),
            edit: EditState::Viewing,
            searches: SearchListState {
                items: Vec::new(),
                selected_index: 0,
                is_loading: true,
            },
            jobs: JobListState {
                postings: Vec::new(),
                selected_index: 0,
                is_loading: false,
                current_query_id: 0,
            },
            ui: UiState {
                notice: None,
                focus: Focus::Searches,
            },
            max_results,
        }
    }

    /// True while viewing: the inputs render the selected search's
    /// values read-only instead of accepting edits.
    pub fn inputs_disabled(&self) -> bool {
        matches!(self.edit, EditState::Viewing)
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(field, text) => {
                if self.inputs_disabled() {
                    return Command::None;
                }
                self.filters.set_input(field, text);
                Command::None
            }
            Message::SuggestionCommitted(field, suggestion) => {
                if self.inputs_disabled() {
                    return Command::None;
                }
                self.filters.commit(field, suggestion.committed_value());
                Command::ExecuteJobQuery
            }
            Message::InputCleared(field) => {
                if self.inputs_disabled() {
                    return Command::None;
                }
                self.filters.clear(field);
                Command::ExecuteJobQuery
            }
            Message::InputBlurred(field) => {
                // Leaving an input with an empty query drops the field's
                // constraint; any other leftover text is kept as-is.
                if self.inputs_disabled() {
                    return Command::None;
                }
                if self.filters.input(field).is_empty()
                    && !self.filters.committed(field).is_empty()
                {
                    self.filters.clear(field);
                    return Command::ExecuteJobQuery;
                }
                Command::None
            }
            Message::SearchHighlighted(index) => {
                if index < self.searches.items.len() {
                    self.searches.selected_index = index;
                }
                Command::None
            }
            Message::SearchSelected(search) => {
                // An in-progress edit is discarded, no confirmation.
                self.edit = EditState::Viewing;
                self.selected = search;
                self.filters.apply_search(&self.selected);
                Command::ExecuteJobQuery
            }
            Message::EditRequested => {
                if matches!(self.edit, EditState::Viewing) {
                    self.edit = EditState::Editing {
                        name_buffer: self.selected.name.clone(),
                    };
                }
                Command::None
            }
            Message::NameChanged(text) => {
                if let EditState::Editing { name_buffer } = &mut self.edit {
                    *name_buffer = text;
                }
                Command::None
            }
            Message::SaveRequested => self.request_save(),
            Message::DeleteRequested(search) => {
                // The sentinel never reaches the delete endpoint.
                if search.is_sentinel() {
                    return Command::None;
                }
                Command::RunMutation(MutationRequest::Delete(search.id))
            }
            Message::MutationCompleted(outcome) => self.apply_mutation_outcome(outcome),
            Message::SearchesLoaded(result) => {
                self.searches.is_loading = false;
                match result {
                    Ok(items) => {
                        self.searches.items = items;
                        let max_index = self.searches.items.len().saturating_sub(1);
                        self.searches.selected_index =
                            self.searches.selected_index.min(max_index);
                        Command::None
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "saved-search list load failed");
                        self.ui.notice = Some(Notice::error("Failed to load saved searches"));
                        Command::ScheduleClearNotice(NOTICE_CLEAR_MS)
                    }
                }
            }
            Message::JobHighlighted(index) => {
                if index < self.jobs.postings.len() {
                    self.jobs.selected_index = index;
                }
                Command::None
            }
            Message::JobQueryRequested => Command::ExecuteJobQuery,
            Message::JobsCompleted(response) => {
                // A response for a superseded query must not overwrite
                // the newer one's results.
                if response.id != self.jobs.current_query_id {
                    tracing::debug!(
                        response_id = response.id,
                        current_id = self.jobs.current_query_id,
                        "dropping stale job query response"
                    );
                    return Command::None;
                }
                self.jobs.is_loading = false;
                match response.result {
                    Ok(postings) => {
                        self.jobs.postings = postings;
                        self.jobs.selected_index = 0;
                        Command::None
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "job query failed");
                        self.ui.notice = Some(Notice::error("Failed to load jobs"));
                        Command::ScheduleClearNotice(NOTICE_CLEAR_MS)
                    }
                }
            }
            Message::TagApplied(tag) => {
                self.filters.commit(FilterField::Role, tag);
                Command::ExecuteJobQuery
            }
            Message::SetNotice(notice) => {
                self.ui.notice = Some(notice);
                Command::ScheduleClearNotice(NOTICE_CLEAR_MS)
            }
            Message::ClearNotice => {
                self.ui.notice = None;
                Command::None
            }
            _ => Command::None,
        }
    }

    fn request_save(&mut self) -> Command {
        let name_buffer = match &self.edit {
            EditState::Editing { name_buffer } => name_buffer.clone(),
            EditState::Viewing => return Command::None,
        };
        // The sentinel never reaches the update endpoint.
        if self.selected.is_sentinel() {
            return Command::None;
        }
        let payload = UpdatePayload {
            id: self.selected.id,
            name: name_buffer,
            title: self.filters.committed(FilterField::Role).to_string(),
            location: self.filters.committed(FilterField::Location).to_string(),
            company: self.filters.committed(FilterField::Company).to_string(),
        };
        Command::RunMutation(MutationRequest::Update(payload))
    }

    fn apply_mutation_outcome(&mut self, outcome: MutationOutcome) -> Command {
        match outcome {
            MutationOutcome::Updated { search_id, result } => {
                // The user may have switched selections while the update
                // was in flight; the late outcome must not win.
                if search_id != self.selected.id {
                    tracing::debug!(search_id, "dropping stale update outcome");
                    return Command::None;
                }
                match result {
                    Ok(updated) => {
                        // Adopt the new values but keep the fields this
                        // subsystem never edits.
                        self.selected = SavedSearch {
                            job_description: self.selected.job_description.clone(),
                            salary: self.selected.salary.clone(),
                            created_at: self.selected.created_at,
                            ..updated
                        };
                        self.filters.apply_search(&self.selected);
                        self.edit = EditState::Viewing;
                        self.searches.is_loading = true;
                        self.ui.notice = Some(Notice::success("Search updated successfully"));
                        Command::Batch(vec![
                            Command::LoadSavedSearches,
                            Command::ScheduleClearNotice(NOTICE_CLEAR_MS),
                        ])
                    }
                    Err(_) => {
                        // Stay in edit mode; the in-progress edit remains
                        // visible and the user may retry.
                        self.ui.notice = Some(Notice::error("Error updating search"));
                        Command::ScheduleClearNotice(NOTICE_CLEAR_MS)
                    }
                }
            }
            MutationOutcome::Deleted { search_id, result } => {
                if search_id != self.selected.id {
                    tracing::debug!(search_id, "dropping stale delete outcome");
                    return Command::None;
                }
                match result {
                    Ok(()) => {
                        for field in FilterField::ALL {
                            self.filters.clear(field);
                        }
                        self.selected = SavedSearch::sentinel();
                        self.edit = EditState::Viewing;
                        self.searches.is_loading = true;
                        self.ui.notice = Some(Notice::success("Search deleted successfully"));
                        Command::Batch(vec![
                            Command::LoadSavedSearches,
                            Command::ExecuteJobQuery,
                            Command::ScheduleClearNotice(NOTICE_CLEAR_MS),
                        ])
                    }
                    Err(_) => {
                        self.ui.notice = Some(Notice::error("Error deleting search"));
                        Command::ScheduleClearNotice(NOTICE_CLEAR_MS)
                    }
                }
            }
        }
    }
}
