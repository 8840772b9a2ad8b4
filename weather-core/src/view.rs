//! Render state for a search UI.
//!
//! Results and errors are mutually exclusive: a new search always clears the
//! previous outcome, and a late answer to a superseded search is dropped.

use crate::{error::ErrorResult, model::WeatherSnapshot};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Success(WeatherSnapshot),
    Failure(ErrorResult),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match self {
            ViewState::Success(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorResult> {
        match self {
            ViewState::Failure(err) => Some(err),
            _ => None,
        }
    }
}

/// Identifies one submitted search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

#[derive(Debug, Default)]
pub struct SearchSession {
    state: ViewState,
    generation: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Start a new search from any state.
    pub fn begin(&mut self) -> SearchTicket {
        self.generation += 1;
        self.state = ViewState::Loading;
        SearchTicket(self.generation)
    }

    /// Apply a finished search. Returns `false` if a newer search has
    /// started since `ticket` was issued, in which case nothing changes.
    pub fn settle(
        &mut self,
        ticket: SearchTicket,
        result: Result<WeatherSnapshot, ErrorResult>,
    ) -> bool {
        if ticket.0 != self.generation || !self.state.is_loading() {
            return false;
        }

        self.state = match result {
            Ok(snapshot) => ViewState::Success(snapshot),
            Err(err) => ViewState::Failure(err),
        };
        true
    }
}
