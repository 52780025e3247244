//! Repository list controller - the fetch lifecycle of one mounted list view
//!
//! `NotRequested -> Requested -> {Succeeded, Failed}`. The transition out of
//! `NotRequested` happens only through [`RepoListController::mount`], which the
//! app actor calls once when the view comes up. Building the render view is a
//! pure read and never issues a request.

use crate::messages::render::RepoListView;
use crate::messages::NetworkCommand;
use crate::models::{ListVariant, RepositoryRecord};
use crate::network::client::FetchError;

/// Fetch lifecycle of the repository list
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState {
    #[default]
    NotRequested,
    Requested,
    Succeeded(Vec<RepositoryRecord>),
    Failed(FetchError),
}

impl FetchState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, FetchState::Succeeded(_) | FetchState::Failed(_))
    }
}

pub struct RepoListController {
    address: String,
    variant: ListVariant,
    state: FetchState,
    /// Id of the request issued by the current mount
    request_id: Option<u64>,
    selected: usize,
}

impl RepoListController {
    pub fn new(address: impl Into<String>, variant: ListVariant) -> Self {
        RepoListController {
            address: address.into(),
            variant,
            state: FetchState::NotRequested,
            request_id: None,
            selected: 0,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::NotRequested | FetchState::Requested)
    }

    /// Mount hook. Issues the fetch on the first call of a mount; returns
    /// `None` on every later call until [`unmount`](Self::unmount).
    pub fn mount(&mut self, id: u64) -> Option<NetworkCommand> {
        if self.state != FetchState::NotRequested {
            return None;
        }
        self.state = FetchState::Requested;
        self.request_id = Some(id);
        Some(NetworkCommand::FetchRepositories {
            id,
            address: self.address.clone(),
            variant: self.variant,
        })
    }

    /// Dispose of the current mount. A response still in flight is dropped
    /// when it arrives.
    pub fn unmount(&mut self) {
        if let Some(id) = self.request_id.take() {
            tracing::debug!(id, "Unmounting repository list");
        }
        self.state = FetchState::NotRequested;
        self.selected = 0;
    }

    /// Apply a fetch result. Returns false when the result belongs to another
    /// (or a disposed) mount and was ignored.
    pub fn handle_result(
        &mut self,
        id: u64,
        result: Result<Vec<RepositoryRecord>, FetchError>,
    ) -> bool {
        if self.state != FetchState::Requested || self.request_id != Some(id) {
            tracing::debug!(id, "Ignoring stale repository response");
            return false;
        }
        self.state = match result {
            Ok(records) => FetchState::Succeeded(records),
            Err(e) => FetchState::Failed(e),
        };
        self.selected = 0;
        true
    }

    fn records(&self) -> &[RepositoryRecord] {
        match &self.state {
            FetchState::Succeeded(records) => records.as_slice(),
            _ => &[],
        }
    }

    pub fn select_next(&mut self) {
        let len = self.records().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_record(&self) -> Option<&RepositoryRecord> {
        self.records().get(self.selected)
    }

    pub fn view(&self) -> RepoListView {
        match &self.state {
            FetchState::NotRequested | FetchState::Requested => RepoListView::Loading,
            FetchState::Succeeded(records) if records.is_empty() => RepoListView::Empty,
            FetchState::Succeeded(records) => RepoListView::Rows {
                records: records.clone(),
                selected: self.selected,
            },
            FetchState::Failed(e) => RepoListView::Error(e.to_string()),
        }
    }
}
