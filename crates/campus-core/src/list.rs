// ── List controller ──
//
// Owns everything one list screen needs: the loaded items, the search
// query, pagination, row selection, and the bulk-operation pipeline.
// It is generic over a [`ListSource`] so every resource screen shares
// the exact same behavior.
//
// Operating mode is decided per response, not per screen: a paginated
// payload switches the controller to server mode (the backend filters
// and pages, the controller holds one page), a bare array switches it
// to client mode (the controller holds the full list and derives the
// visible slice itself).

use campus_api::{Error as ApiError, ItemId, ListPayload, ListQuery};
use tracing::{debug, warn};

use crate::bulk::{self, BulkAction, BulkOutcome, BulkReport};
use crate::error::CoreError;
use crate::filter::{self, SearchMode, SearchQuery};
use crate::model::{ListEntry, Searchable};
use crate::notify::{DEFAULT_TTL, Severity, ToastQueue};
use crate::pagination::Paginator;
use crate::selection::{Modifiers, SelectionSet};

/// Backend access for one resource list.
#[allow(async_fn_in_trait)]
pub trait ListSource {
    type Item: ListEntry + Searchable + Clone + Send + Sync + 'static;

    /// Fetch a page (or the full list, for non-paginated endpoints).
    async fn fetch(&self, query: &ListQuery) -> Result<ListPayload<Self::Item>, ApiError>;

    /// Apply one bulk action to one item.
    async fn apply(&self, id: &ItemId, action: &BulkAction) -> Result<(), ApiError>;
}

/// State machine for one managed list screen.
pub struct ListController<S: ListSource> {
    source: S,
    toasts: ToastQueue,
    query: SearchQuery,
    /// Full loaded snapshot: one page in server mode, everything in
    /// client mode.
    items: Vec<S::Item>,
    /// `items` with the client-side filter applied. Equal to `items`
    /// in server mode, where the backend already filtered.
    view: Vec<S::Item>,
    server_mode: bool,
    pager: Paginator,
    selection: SelectionSet,
    loading: bool,
    last_error: Option<String>,
    /// Fetch generation. A response is applied only if no newer fetch
    /// has started since it was issued.
    generation: u64,
}

impl<S: ListSource> ListController<S> {
    pub fn new(source: S, toasts: ToastQueue, page_size: usize) -> Self {
        Self {
            source,
            toasts,
            query: SearchQuery::default(),
            items: Vec::new(),
            view: Vec::new(),
            server_mode: false,
            pager: Paginator::new(page_size),
            selection: SelectionSet::new(),
            loading: false,
            last_error: None,
            generation: 0,
        }
    }

    // ── Fetch pipeline ──────────────────────────────────────────────

    /// Start a fetch: invalidates every response issued before this
    /// call. Returns the token [`finish_fetch`](Self::finish_fetch)
    /// must present.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Apply a fetch result, unless a newer fetch has started since
    /// `generation` was issued; stale responses are discarded whole.
    pub fn finish_fetch(
        &mut self,
        generation: u64,
        result: Result<ListPayload<S::Item>, ApiError>,
    ) -> Result<(), CoreError> {
        if generation != self.generation {
            debug!(generation, current = self.generation, "discarding stale response");
            return Ok(());
        }
        self.loading = false;
        match result {
            Ok(payload) => {
                self.server_mode = payload.page.is_some();
                self.items = payload.items;
                if let Some(info) = &payload.page {
                    self.pager.apply_server(info);
                }
                self.rebuild_view();
                let loaded: Vec<ItemId> = self.items.iter().map(ListEntry::id).collect();
                self.selection.retain(&loaded);
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                // Previously loaded items stay on screen alongside the
                // error notice.
                let message = user_message(&err);
                self.last_error = Some(message.clone());
                self.toasts.error(message);
                Err(err.into())
            }
        }
    }

    /// Query parameters for the current search and page position.
    pub fn build_query(&self) -> ListQuery {
        ListQuery {
            page: self.server_mode.then(|| self.pager.current_page()),
            page_size: self.server_mode.then(|| self.pager.page_size()),
            search: (!self.query.is_blank()).then(|| self.query.text.trim().to_owned()),
            field: self.query.field_param(),
        }
    }

    /// Reload the current page / list.
    pub async fn refresh(&mut self) -> Result<(), CoreError> {
        let generation = self.begin_fetch();
        let query = self.build_query();
        let result = self.source.fetch(&query).await;
        self.finish_fetch(generation, result)
    }

    // ── Search ──────────────────────────────────────────────────────

    /// Submit a search: reset to page 1 and refetch with the query as
    /// request parameters.
    pub async fn search(
        &mut self,
        text: impl Into<String>,
        mode: SearchMode,
    ) -> Result<(), CoreError> {
        self.query = SearchQuery::new(text, mode);
        self.pager.reset();
        self.refresh().await
    }

    /// Update the filter text without a network round trip. Only
    /// meaningful in client mode, where the full list is already
    /// loaded; server-mode screens go through [`search`](Self::search).
    pub fn live_filter(&mut self, text: impl Into<String>) {
        self.query.text = text.into();
        self.pager.reset();
        self.rebuild_view();
    }

    // ── Pagination ──────────────────────────────────────────────────

    /// Advance one page. At the last page this is a no-op: no fetch is
    /// issued and no error raised.
    pub async fn next_page(&mut self) -> Result<(), CoreError> {
        match self.pager.next() {
            Some(page) => self.move_to(page).await,
            None => Ok(()),
        }
    }

    /// Go back one page. No-op at page 1.
    pub async fn prev_page(&mut self) -> Result<(), CoreError> {
        match self.pager.prev() {
            Some(page) => self.move_to(page).await,
            None => Ok(()),
        }
    }

    /// Jump to a page, clamped into range.
    pub async fn go_to_page(&mut self, page: usize) -> Result<(), CoreError> {
        self.move_to(page).await
    }

    /// Change the page size, keeping the first visible item in view.
    pub async fn set_page_size(&mut self, page_size: usize) -> Result<(), CoreError> {
        self.pager.set_page_size(page_size, true);
        if self.server_mode {
            return self.refresh().await;
        }
        Ok(())
    }

    async fn move_to(&mut self, page: usize) -> Result<(), CoreError> {
        self.pager.go_to(page);
        if self.server_mode {
            return self.refresh().await;
        }
        Ok(())
    }

    // ── Selection ───────────────────────────────────────────────────

    /// Handle a row click with modifiers, resolved against the rows
    /// currently visible.
    pub fn select(&mut self, id: &ItemId, modifiers: Modifiers) {
        let ordered = self.visible_ids();
        self.selection.select(id, modifiers, &ordered);
    }

    /// Replace the selection with exactly the given ids, dropping any
    /// that are not currently loaded.
    pub fn select_exact(&mut self, ids: &[ItemId]) {
        self.selection.clear();
        let loaded: Vec<ItemId> = self.items.iter().map(ListEntry::id).collect();
        for id in ids {
            if loaded.contains(id) && !self.selection.is_selected(id) {
                self.selection.select(id, Modifiers::CTRL, &loaded);
            }
        }
    }

    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.selection.is_selected(id)
    }

    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Selected items in loaded order.
    pub fn selected_items(&self) -> Vec<S::Item> {
        self.items
            .iter()
            .filter(|item| self.selection.is_selected(&item.id()))
            .cloned()
            .collect()
    }

    // ── Views ───────────────────────────────────────────────────────

    /// The rows to render: the loaded page in server mode, the current
    /// slice of the filtered list in client mode.
    pub fn visible(&self) -> &[S::Item] {
        if self.server_mode {
            &self.view
        } else {
            self.pager.slice(&self.view)
        }
    }

    pub fn visible_ids(&self) -> Vec<ItemId> {
        self.visible().iter().map(ListEntry::id).collect()
    }

    /// Every loaded item, before filtering and slicing.
    pub fn items(&self) -> &[S::Item] {
        &self.items
    }

    pub fn pager(&self) -> &Paginator {
        &self.pager
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_server_mode(&self) -> bool {
        self.server_mode
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    fn rebuild_view(&mut self) {
        if self.server_mode {
            self.view = self.items.clone();
        } else {
            self.view = filter::filter(&self.items, &self.query)
                .into_iter()
                .cloned()
                .collect();
            self.pager.set_total_count(self.view.len());
        }
    }

    // ── Bulk operations ─────────────────────────────────────────────

    /// Run one action across the current selection.
    ///
    /// Validation failures return before any request is issued. The
    /// action fans out concurrently and never short-circuits; after
    /// the fan-out the list is refetched so the screen reflects what
    /// actually happened on the server. The selection is cleared only
    /// once that refetch lands; if it fails, the stale list keeps its
    /// selection.
    pub async fn bulk(&mut self, action: BulkAction) -> Result<BulkReport, CoreError> {
        if self.loading {
            return Err(CoreError::Busy);
        }
        let loaded: Vec<ItemId> = self.items.iter().map(ListEntry::id).collect();
        let ids = self.selection.selected_in_order(&loaded);
        action.validate(ids.len())?;

        self.loading = true;
        let report = {
            let source = &self.source;
            let action = &action;
            bulk::fan_out(ids, move |id| async move { source.apply(&id, action).await }).await
        };
        self.loading = false;

        match report.outcome() {
            BulkOutcome::Success { count } => {
                self.toasts
                    .success(format!("{}: {count} item(s) updated", action.describe()));
            }
            BulkOutcome::Partial { succeeded, failed } => {
                for (id, err) in report.failures() {
                    warn!(%id, error = %err, "bulk item failed");
                }
                self.toasts.enqueue(
                    Severity::Warning,
                    format!(
                        "{}: {succeeded} item(s) updated, {failed} failed",
                        action.describe()
                    ),
                    Some(failure_detail(&report)),
                    DEFAULT_TTL,
                );
            }
            BulkOutcome::Failure { failed } => {
                for (id, err) in report.failures() {
                    warn!(%id, error = %err, "bulk item failed");
                }
                self.toasts.enqueue(
                    Severity::Error,
                    format!("{}: all {failed} item(s) failed", action.describe()),
                    Some(failure_detail(&report)),
                    DEFAULT_TTL,
                );
            }
        }

        // Reconcile with the server regardless of outcome. A refetch
        // failure is already surfaced as a toast and via last_error.
        match self.refresh().await {
            Ok(()) => self.selection.clear(),
            Err(err) => warn!(error = %err, "refetch after bulk operation failed"),
        }

        Ok(report)
    }
}

/// Message to put in front of the user: the backend's own words where
/// it spoke, the error's display form otherwise.
fn user_message(err: &ApiError) -> String {
    match err {
        ApiError::Api { message }
        | ApiError::Authentication { message }
        | ApiError::PermissionDenied { message } => message.clone(),
        other => other.to_string(),
    }
}

/// One-line summary of the failed items in a bulk report.
fn failure_detail(report: &BulkReport) -> String {
    report
        .failures()
        .map(|(id, err)| format!("{id}: {err}"))
        .collect::<Vec<_>>()
        .join("; ")
}
