// ABOUTME: MappingController drives the mapping modal lifecycle on a destination page.
// ABOUTME: Presents the modal, records choices, persists the mapping, fills fields and shows notices.

use reelcopy_scout::MovieRecord;

use crate::catalog::DestinationFieldCatalog;
use crate::error::MappingError;
use crate::fill::{fill_fields, FillReport};
use crate::mapping::{FieldMapping, SemanticKey};
use crate::modal::{self, MODAL_ID, STYLES_ID};
use crate::notify::{Dismissal, Notifier, Severity};
use crate::options::Options;
use crate::page::Page;
use crate::store::MappingStore;

const SAVED_NOTICE: &str = "Movie field mapping saved and form filled.";
const SAVE_FAILED_NOTICE: &str = "Could not save the field mapping.";

#[derive(Debug)]
enum ModalState {
    Closed,
    Open {
        record: MovieRecord,
        catalog: DestinationFieldCatalog,
    },
}

/// What a successful save produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub mapping: FieldMapping,
    pub report: FillReport,
}

/// Owns the modal state for one destination tab.
///
/// `Closed -> Open` on [`present`](Self::present); back to `Closed` on
/// [`cancel`](Self::cancel), [`close`](Self::close) or a successful
/// [`save`](Self::save).
pub struct MappingController<S> {
    store: S,
    opts: Options,
    notifier: Notifier,
    state: ModalState,
    styles_injected: bool,
    remembered: Option<FieldMapping>,
    pending: Vec<Dismissal>,
}

impl<S: MappingStore> MappingController<S> {
    pub fn new(store: S, opts: Options) -> Self {
        Self {
            store,
            notifier: Notifier::new(opts.notice_duration),
            opts,
            state: ModalState::Closed,
            styles_injected: false,
            remembered: None,
            pending: Vec::new(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    /// The record shown in the open modal.
    pub fn record(&self) -> Option<&MovieRecord> {
        match &self.state {
            ModalState::Open { record, .. } => Some(record),
            ModalState::Closed => None,
        }
    }

    /// Controls offered by the open modal.
    pub fn catalog(&self) -> Option<&DestinationFieldCatalog> {
        match &self.state {
            ModalState::Open { catalog, .. } => Some(catalog),
            ModalState::Closed => None,
        }
    }

    /// The mapping last loaded or saved, used to pre-select dropdowns.
    pub fn remembered(&self) -> Option<&FieldMapping> {
        self.remembered.as_ref()
    }

    /// Loads the stored mapping for `url` so the next modal starts from it.
    pub async fn load_saved(&mut self, url: &str) -> Result<Option<FieldMapping>, MappingError> {
        let key = self.opts.scope.key_for(url);
        match self.store.load(&key).await {
            Ok(found) => {
                self.remembered = found.clone();
                Ok(found)
            }
            Err(e) => {
                self.remembered = None;
                tracing::warn!(key = %key, error = %e, "could not load saved mapping");
                Err(MappingError::persistence_failed(
                    url,
                    "load",
                    Some(anyhow::Error::new(e)),
                ))
            }
        }
    }

    /// Shows the mapping modal for `record`, replacing any modal already open.
    pub fn present(&mut self, page: &mut Page, record: MovieRecord) -> Result<(), MappingError> {
        if !self.opts.admin.matches(page.url()) {
            return Err(MappingError::wrong_page(page.url(), "present"));
        }

        page.remove_element(MODAL_ID);
        let catalog = DestinationFieldCatalog::scan(page);
        self.ensure_styles(page);
        page.append_to_body(&modal::render_modal(
            &record,
            &catalog,
            self.remembered.as_ref(),
        ));

        tracing::info!(
            url = page.url(),
            title = %record.title,
            controls = catalog.len(),
            "mapping modal opened"
        );
        self.state = ModalState::Open { record, catalog };
        Ok(())
    }

    /// Picks `identifier` as the destination of `key`. An empty identifier
    /// clears the choice.
    pub fn choose(
        &mut self,
        page: &mut Page,
        key: SemanticKey,
        identifier: &str,
    ) -> Result<(), MappingError> {
        let catalog = match &self.state {
            ModalState::Open { catalog, .. } if page.element_exists(MODAL_ID) => catalog,
            _ => return Err(MappingError::not_open(page.url(), "choose")),
        };
        if !identifier.is_empty() && !catalog.contains(identifier) {
            return Err(MappingError::unknown_field(page.url(), "choose", identifier));
        }
        if !modal::choose(page, key, identifier) {
            return Err(MappingError::unknown_field(page.url(), "choose", identifier));
        }
        tracing::debug!(key = key.as_str(), identifier, "mapping choice");
        Ok(())
    }

    /// Current dropdown selections of the open modal.
    pub fn current_mapping(&self, page: &Page) -> Result<FieldMapping, MappingError> {
        if !self.is_open() || !page.element_exists(MODAL_ID) {
            return Err(MappingError::not_open(page.url(), "current_mapping"));
        }
        Ok(modal::read_mapping(page))
    }

    /// Cancel button.
    pub fn cancel(&mut self, page: &mut Page) {
        self.dismiss_modal(page, "cancelled");
    }

    /// Close (x) button.
    pub fn close(&mut self, page: &mut Page) {
        self.dismiss_modal(page, "closed");
    }

    /// Persists the chosen mapping and fills the destination form.
    ///
    /// On a storage failure nothing is filled, the modal stays open and an
    /// error notice is shown.
    pub async fn save(&mut self, page: &mut Page) -> Result<SaveOutcome, MappingError> {
        let record = match &self.state {
            ModalState::Open { record, .. } if page.element_exists(MODAL_ID) => record.clone(),
            _ => return Err(MappingError::not_open(page.url(), "save")),
        };
        let mapping = modal::read_mapping(page);
        let key = self.opts.scope.key_for(page.url());

        if let Err(e) = self.store.save(&key, &mapping).await {
            tracing::warn!(key = %key, error = %e, "failed to persist mapping");
            let dismissal = self.notifier.show(page, SAVE_FAILED_NOTICE, Severity::Error);
            self.pending.push(dismissal);
            return Err(MappingError::persistence_failed(
                page.url(),
                "save",
                Some(anyhow::Error::new(e)),
            ));
        }
        self.remembered = Some(mapping.clone());

        // The modal's own dropdowns would otherwise match `[id*=...]` lookups.
        page.remove_element(MODAL_ID);
        self.state = ModalState::Closed;

        let report = fill_fields(page, &record, &mapping);
        tracing::info!(
            url = page.url(),
            key = %key,
            filled = report.filled.len(),
            skipped = report.skipped.len(),
            "mapping saved"
        );

        let dismissal = self.notifier.show(page, SAVED_NOTICE, Severity::Success);
        self.pending.push(dismissal);
        Ok(SaveOutcome { mapping, report })
    }

    /// Number of notices waiting for dismissal.
    pub fn pending_notices(&self) -> usize {
        self.pending.len()
    }

    /// Waits out every pending notice, removing each at its deadline.
    pub async fn settle(&mut self, page: &mut Page) {
        let pending = std::mem::take(&mut self.pending);
        for dismissal in pending {
            dismissal.run(page).await;
        }
    }

    /// Removes every pending notice immediately.
    pub fn flush_notices(&mut self, page: &mut Page) {
        for dismissal in self.pending.drain(..) {
            dismissal.fire(page);
        }
    }

    /// Injects the stylesheet once per controller. The DOM check only guards
    /// against a page that already carries it.
    fn ensure_styles(&mut self, page: &mut Page) {
        if self.styles_injected {
            return;
        }
        if !page.element_exists(STYLES_ID) {
            page.append_to_head(&modal::render_styles());
        }
        self.styles_injected = true;
    }

    fn dismiss_modal(&mut self, page: &mut Page, how: &str) {
        page.remove_element(MODAL_ID);
        if self.is_open() {
            tracing::info!(url = page.url(), how, "mapping modal dismissed");
        }
        self.state = ModalState::Closed;
    }

    /// Returns true once this controller has put its stylesheet on a page.
    pub fn styles_injected(&self) -> bool {
        self.styles_injected
    }
}
