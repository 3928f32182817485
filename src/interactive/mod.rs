use anyhow::Result;
use crossterm::{
    event::{self, poll, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::api::{CatalogApi, JobsApi, SavedSearchApi};
use crate::ClientOptions;

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;

use self::application::{catalog_service::CatalogService, search_service::SavedSearchService};
use self::constants::{CTRL_C_EXIT_WINDOW_MS, NOTICE_CLEAR_MS, POLL_INTERVAL_MS};
use self::domain::models::{FilterField, JobsRequest, JobsResponse, MutationRequest, Notice};
use self::ui::{
    app_state::{AppState, EditState, Focus},
    commands::Command,
    components::Component,
    events::Message,
    renderer::Renderer,
};

/// Work items for the I/O worker thread. One worker serializes all
/// network calls, so at most one saved-search mutation is in flight.
enum IoRequest {
    LoadSearches,
    LoadCatalog(FilterField),
    Mutation(MutationRequest),
    Jobs(JobsRequest),
}

pub struct InteractiveClient {
    state: AppState,
    renderer: Renderer,
    io_sender: Option<Sender<IoRequest>>,
    io_receiver: Option<Receiver<Message>>,
    searches: Arc<SavedSearchService>,
    catalogs: Arc<CatalogService>,
    jobs_api: Arc<dyn JobsApi>,
    next_job_query_id: u64,
    notice_timer: Option<Instant>,
    notice_clear_delay: u64,
    last_ctrl_c_press: Option<Instant>,
}

impl InteractiveClient {
    pub fn new(
        options: &ClientOptions,
        saved_search_api: Arc<dyn SavedSearchApi>,
        catalog_api: Arc<dyn CatalogApi>,
        jobs_api: Arc<dyn JobsApi>,
    ) -> Self {
        Self {
            state: AppState::new(options.max_results),
            renderer: Renderer::new(),
            io_sender: None,
            io_receiver: None,
            searches: Arc::new(SavedSearchService::new(saved_search_api)),
            catalogs: Arc::new(CatalogService::new(catalog_api)),
            jobs_api,
            next_job_query_id: 0,
            notice_timer: None,
            notice_clear_delay: NOTICE_CLEAR_MS,
            last_ctrl_c_press: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        let (tx, rx) = self.start_io_worker();
        self.io_sender = Some(tx);
        self.io_receiver = Some(rx);

        // Initial loads: the saved-search list, one catalog per field,
        // and an unconstrained job query.
        self.execute_command(Command::LoadSavedSearches);
        for field in FilterField::ALL {
            self.execute_command(Command::LoadCatalog(field));
        }
        self.execute_command(Command::ExecuteJobQuery);

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            // Drain worker responses; stale ids are dropped inside the
            // state machine.
            loop {
                let message = match &self.io_receiver {
                    Some(receiver) => match receiver.try_recv() {
                        Ok(message) => message,
                        Err(_) => break,
                    },
                    None => break,
                };
                self.handle_message(message);
            }

            // Scheduled notice clear
            if let Some(timer) = self.notice_timer {
                if timer.elapsed() >= Duration::from_millis(self.notice_clear_delay) {
                    self.notice_timer = None;
                    self.handle_message(Message::ClearNotice);
                }
            }

            if poll(Duration::from_millis(POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if self.handle_input(key) {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Returns true when the application should exit.
    fn handle_input(&mut self, key: KeyEvent) -> bool {
        // Double Ctrl+C to exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_millis(CTRL_C_EXIT_WINDOW_MS) {
                    return true;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.state.ui.notice = Some(Notice::error("Press Ctrl+C again to exit"));
            self.notice_timer = Some(Instant::now());
            self.notice_clear_delay = NOTICE_CLEAR_MS;
            return false;
        }

        match key.code {
            KeyCode::Tab => {
                self.blur_current_input();
                self.state.ui.focus = next_focus(self.state.ui.focus);
                return false;
            }
            KeyCode::BackTab => {
                self.blur_current_input();
                self.state.ui.focus = prev_focus(self.state.ui.focus);
                return false;
            }
            KeyCode::Esc => {
                if self.state.ui.focus == Focus::Searches
                    && matches!(self.state.edit, EditState::Viewing)
                {
                    return true;
                }
            }
            _ => {}
        }

        let message = match self.state.ui.focus {
            Focus::Searches => self.renderer.saved_search_list_mut().handle_key(key),
            Focus::Input(field) => self.renderer.autocomplete_mut(field).handle_key(key),
            Focus::Jobs => self.renderer.job_list_mut().handle_key(key),
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }

        false
    }

    fn blur_current_input(&mut self) {
        if let Focus::Input(field) = self.state.ui.focus {
            self.handle_message(Message::InputBlurred(field));
        }
    }

    fn handle_message(&mut self, message: Message) {
        match message {
            // Catalogs are owned by the input components, not the store.
            Message::CatalogLoaded(field, result) => match result {
                Ok(entries) => self.renderer.autocomplete_mut(field).set_catalog(entries),
                Err(e) => {
                    tracing::warn!(?field, error = %e, "catalog load failed");
                    let command = self.state.update(Message::SetNotice(Notice::error(
                        "Failed to load suggestions",
                    )));
                    self.execute_command(command);
                }
            },
            message => {
                let command = self.state.update(message);
                self.execute_command(command);
            }
        }
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::Batch(commands) => {
                for command in commands {
                    self.execute_command(command);
                }
            }
            Command::LoadSavedSearches => {
                self.state.searches.is_loading = true;
                self.send_io(IoRequest::LoadSearches);
            }
            Command::LoadCatalog(field) => {
                self.send_io(IoRequest::LoadCatalog(field));
            }
            Command::RunMutation(request) => {
                self.send_io(IoRequest::Mutation(request));
            }
            Command::ExecuteJobQuery => {
                self.execute_job_query();
            }
            Command::ScheduleClearNotice(delay) => {
                self.notice_timer = Some(Instant::now());
                self.notice_clear_delay = delay;
            }
        }
    }

    fn execute_job_query(&mut self) {
        self.next_job_query_id += 1;
        self.state.jobs.current_query_id = self.next_job_query_id;
        self.state.jobs.is_loading = true;

        let request = JobsRequest {
            id: self.next_job_query_id,
            query: self.state.filters.job_query(self.state.max_results),
        };
        self.send_io(IoRequest::Jobs(request));
    }

    fn send_io(&self, request: IoRequest) {
        if let Some(sender) = &self.io_sender {
            let _ = sender.send(request);
        }
    }

    fn start_io_worker(&self) -> (Sender<IoRequest>, Receiver<Message>) {
        let (request_tx, request_rx) = mpsc::channel::<IoRequest>();
        let (message_tx, message_rx) = mpsc::channel::<Message>();
        let searches = self.searches.clone();
        let catalogs = self.catalogs.clone();
        let jobs_api = self.jobs_api.clone();

        thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                let message = match request {
                    IoRequest::LoadSearches => {
                        Message::SearchesLoaded(searches.list().map_err(|e| e.to_string()))
                    }
                    IoRequest::LoadCatalog(field) => Message::CatalogLoaded(
                        field,
                        catalogs.candidates(field).map_err(|e| e.to_string()),
                    ),
                    IoRequest::Mutation(mutation) => {
                        Message::MutationCompleted(searches.run(mutation))
                    }
                    IoRequest::Jobs(jobs_request) => {
                        let result = jobs_api
                            .search(&jobs_request.query)
                            .map_err(|e| e.to_string());
                        Message::JobsCompleted(JobsResponse {
                            id: jobs_request.id,
                            result,
                        })
                    }
                };
                if message_tx.send(message).is_err() {
                    break;
                }
            }
        });

        (request_tx, message_rx)
    }
}

fn next_focus(focus: Focus) -> Focus {
    match focus {
        Focus::Searches => Focus::Input(FilterField::Role),
        Focus::Input(FilterField::Role) => Focus::Input(FilterField::Location),
        Focus::Input(FilterField::Location) => Focus::Input(FilterField::Company),
        Focus::Input(FilterField::Company) => Focus::Jobs,
        Focus::Jobs => Focus::Searches,
    }
}

fn prev_focus(focus: Focus) -> Focus {
    match focus {
        Focus::Searches => Focus::Jobs,
        Focus::Input(FilterField::Role) => Focus::Searches,
        Focus::Input(FilterField::Location) => Focus::Input(FilterField::Role),
        Focus::Input(FilterField::Company) => Focus::Input(FilterField::Location),
        Focus::Jobs => Focus::Input(FilterField::Company),
    }
}
