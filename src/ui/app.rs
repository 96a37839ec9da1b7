use crate::api::{ApiError, UserRecord};
use crate::ui::directory::{
    DirectoryIntent, DirectoryReducer, DirectoryState, SortKey, GENDER_CHOICES, PAGE_SIZE,
};
use crate::ui::fetcher::{FetchCommand, FetchSender};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Directory view state (MVI pattern).
    directory: DirectoryState,
    /// Fetch dispatcher (resource, managed outside MVI).
    fetch_sender: Option<FetchSender>,
    next_request_id: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::new(1)
    }
}

impl App {
    /// `initial_page` is validated against the total once it arrives.
    pub fn new(initial_page: u32) -> Self {
        let mut app = Self {
            should_quit: false,
            directory: DirectoryState::default(),
            fetch_sender: None,
            next_request_id: 0,
        };
        dispatch_mvi!(
            app,
            directory,
            DirectoryReducer,
            DirectoryIntent::GoToPage { page: initial_page }
        );
        app
    }

    pub fn set_fetch_sender(&mut self, sender: FetchSender) {
        self.fetch_sender = Some(sender);
    }

    /// Initial load: one total-count fetch for the whole session, plus the
    /// first page.
    pub fn start(&mut self) {
        self.send_command(FetchCommand::Total);
        self.request_page();
    }

    pub fn directory(&self) -> &DirectoryState {
        &self.directory
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Dispatch an intent and re-request the current page if page, sort or
    /// filters changed.
    pub fn dispatch(&mut self, intent: DirectoryIntent) {
        let before = self.directory.fetch_trigger();
        dispatch_mvi!(self, directory, DirectoryReducer, intent);
        if self.directory.fetch_trigger() != before {
            self.request_page();
        }
    }

    pub fn on_page_fetched(&mut self, request_id: u64, result: Result<Vec<UserRecord>, ApiError>) {
        if request_id != self.directory.latest_request() {
            tracing::debug!(
                request_id,
                latest = self.directory.latest_request(),
                "dropping stale page response"
            );
        }
        let intent = match result {
            Ok(records) => DirectoryIntent::PageLoaded {
                request_id,
                records,
            },
            Err(err) => DirectoryIntent::PageFailed {
                request_id,
                message: err.user_message(),
            },
        };
        self.dispatch(intent);
    }

    /// A failed total is already logged by the client; the previous total
    /// (initially zero) stays.
    pub fn on_total_fetched(&mut self, result: Result<u64, ApiError>) {
        if let Ok(total) = result {
            self.dispatch(DirectoryIntent::TotalLoaded { total });
        }
    }

    pub fn go_to_page(&mut self, page: u32) {
        self.dispatch(DirectoryIntent::GoToPage { page });
    }

    pub fn next_page(&mut self) {
        let page = self.directory.current_page().saturating_add(1);
        self.go_to_page(page);
    }

    pub fn previous_page(&mut self) {
        let page = self.directory.current_page().saturating_sub(1);
        self.go_to_page(page);
    }

    pub fn first_page(&mut self) {
        self.go_to_page(1);
    }

    pub fn last_page(&mut self) {
        let last = self.directory.page_count();
        if last > 0 {
            self.go_to_page(last);
        }
    }

    pub fn sort_by(&mut self, key: SortKey) {
        self.dispatch(DirectoryIntent::Sort { key });
    }

    /// All → male → female → All.
    pub fn cycle_gender_filter(&mut self) {
        let current = self.directory.filters().gender.as_deref();
        let gender = next_choice(&GENDER_CHOICES, current).map(str::to_string);
        self.dispatch(DirectoryIntent::SetGenderFilter { gender });
    }

    /// All → each country on the current page → All.
    pub fn cycle_country_filter(&mut self) {
        let choices = self.directory.country_choices();
        let current = self.directory.filters().country.as_deref();
        let country = next_choice(&choices, current).map(str::to_string);
        self.dispatch(DirectoryIntent::SetCountryFilter { country });
    }

    pub fn clear_filters(&mut self) {
        self.dispatch(DirectoryIntent::ClearFilters);
    }

    fn request_page(&mut self) {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.dispatch_directory(DirectoryIntent::FetchStarted { request_id });

        let command = FetchCommand::Page {
            request_id,
            page: self.directory.current_page(),
            page_size: PAGE_SIZE,
        };
        if !self.send_command(command) {
            self.dispatch_directory(DirectoryIntent::PageFailed {
                request_id,
                message: "Fetch queue unavailable".to_string(),
            });
        }
    }

    fn dispatch_directory(&mut self, intent: DirectoryIntent) {
        dispatch_mvi!(self, directory, DirectoryReducer, intent);
    }

    fn send_command(&mut self, command: FetchCommand) -> bool {
        let Some(sender) = &self.fetch_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(error = %err, "failed to queue fetch");
                false
            }
        }
    }
}

/// Next entry after `current` in `choices`, wrapping to `None` ("All").
/// Matching is exact: choices may differ only by case ("USA", "usa").
/// A `current` not in `choices` restarts from the first entry.
fn next_choice<'a>(choices: &[&'a str], current: Option<&str>) -> Option<&'a str> {
    match current {
        None => choices.first().copied(),
        Some(current) => {
            let position = choices.iter().position(|choice| *choice == current);
            match position {
                Some(index) => choices.get(index + 1).copied(),
                None => choices.first().copied(),
            }
        }
    }
}
