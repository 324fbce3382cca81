use crate::{
    api::RecordApi,
    consts::consts::{
        RecordId, MARK_FOUND_COMMUNICATION_FAILURE, MARK_FOUND_PROMPT, MARK_FOUND_SUCCESS,
    },
    error::{ClientError, ClientResult},
    filter,
    model::record::MissingPersonRecord,
    render::card::{render_records, Panel},
    view::{View, ViewEvent},
};

/// Where the fetch path currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Rendered,
    ErrorDisplayed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    /// Backend accepted the change and the collection was reloaded
    Found,
    /// User declined the confirmation, nothing was sent
    Cancelled,
}

/// Owns the most recently fetched collection and the view it is rendered to.
///
/// The collection is only replaced by a successful [`RecordController::load_records`]. Filtering
/// reads it and never refetches; marking a record as found reloads it from the backend instead of
/// patching it locally.
pub struct RecordController<A, V> {
    api: A,
    view: V,
    records: Vec<MissingPersonRecord>,
    state: LoadState,
}

impl<A: RecordApi, V: View> RecordController<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            records: vec![],
            state: LoadState::Loading,
        }
    }

    pub fn records(&self) -> &[MissingPersonRecord] {
        &self.records
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn show(&mut self, panel: Panel) {
        self.state = match panel {
            Panel::Loading => LoadState::Loading,
            Panel::Error { .. } => LoadState::ErrorDisplayed,
            Panel::Empty | Panel::Cards(_) => LoadState::Rendered,
        };

        self.view.show(panel);
    }

    /// Fetches the collection, replaces the in-memory copy and renders all of it.
    ///
    /// On failure the error panel is shown and the previous collection is kept.
    pub async fn load_records(&mut self) -> ClientResult<usize> {
        self.show(Panel::Loading);

        match self.api.fetch_records().await {
            Ok(records) => {
                log::info!("Loaded {} records", records.len());

                self.records = records;

                let panel = render_records(&self.records);
                self.show(panel);

                Ok(self.records.len())
            }
            Err(err) => {
                log::error!("Failed to load records: {}", err);

                self.show(Panel::Error {
                    detail: err.to_string(),
                });

                Err(err)
            }
        }
    }

    /// Renders the records whose name, city, state or phone contains the query
    pub fn filter_records(&mut self, query: &str) -> Vec<&MissingPersonRecord> {
        let matches = filter::filter_records(&self.records, query);

        log::debug!(
            "Query {:?} matched {} of {} records",
            query,
            matches.len(),
            self.records.len()
        );

        let panel = render_records(matches.iter().copied());
        self.state = LoadState::Rendered;
        self.view.show(panel);

        matches
    }

    /// Confirms with the user, asks the backend to mark the record as found and reloads on success.
    ///
    /// Concurrent calls for the same id are not deduplicated.
    pub async fn mark_as_found(&mut self, id: &RecordId) -> ClientResult<MarkOutcome> {
        if !self.view.confirm(MARK_FOUND_PROMPT) {
            log::info!("Mark found cancelled for record {}", id);
            return Ok(MarkOutcome::Cancelled);
        }

        match self.api.mark_found(id).await {
            Ok(()) => {
                log::info!("Record {} marked as found", id);
                self.view.notify(MARK_FOUND_SUCCESS);

                // A failed reload already shows its own error panel
                if let Err(err) = self.load_records().await {
                    log::warn!("Reload after marking {} as found failed: {}", id, err);
                }

                Ok(MarkOutcome::Found)
            }
            Err(err) => {
                log::error!("Failed to mark record {} as found: {}", id, err);

                match &err {
                    ClientError::WriteNetworkFailure { .. } => {
                        self.view.notify(MARK_FOUND_COMMUNICATION_FAILURE)
                    }
                    _ => self.view.notify(&err.to_string()),
                }

                Err(err)
            }
        }
    }

    pub async fn handle(&mut self, event: ViewEvent) -> ClientResult<()> {
        match event {
            ViewEvent::QueryChanged(query) => {
                if !self.view.has_search_field() {
                    log::debug!("Ignoring query change, view has no search field");
                    return Ok(());
                }

                self.filter_records(&query);
                Ok(())
            }
            ViewEvent::MarkFound(id) => self.mark_as_found(&id).await.map(|_| ()),
            ViewEvent::Reload => self.load_records().await.map(|_| ()),
        }
    }
}
