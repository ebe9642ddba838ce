//! Filtered, paginated, searchable resource listing.
//!
//! A [`ListController`] belongs to one page instance. It owns the filters, the
//! page currently on screen, the delete confirmation dialog and the scheduled
//! debounce task. Keyword edits are debounced; pagination and deletes fetch
//! immediately. Every fetch takes a sequence number and only the latest issued
//! fetch may replace the page on screen.

use std::fmt::{Debug, Display};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::controller::dialog::{ConfirmationDialog, DialogState};
use crate::domain::filter::{DEFAULT_PAGE_SIZE, FilterState};
use crate::notifications::{DELETE_FAIL, DELETE_SUCCESS, Notifier};
use crate::pagination::PagedResult;
use crate::repository::errors::ApiResult;

pub mod dialog;

/// Quiet period after the last keyword edit before a fetch is issued.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Resource a [`ListController`] lists and deletes from.
#[async_trait]
pub trait ListSource: Send + Sync + 'static {
    type Item: Clone + Send + Sync + 'static;
    type Id: Copy + Display + Debug + Send + Sync + 'static;

    /// Resource name used in navigation routes and log lines.
    const RESOURCE: &'static str;

    async fn fetch(&self, filters: &FilterState) -> ApiResult<PagedResult<Self::Item>>;
    async fn remove(&self, id: Self::Id) -> ApiResult<()>;
}

#[async_trait]
impl<S: ListSource> ListSource for Arc<S> {
    type Item = S::Item;
    type Id = S::Id;

    const RESOURCE: &'static str = S::RESOURCE;

    async fn fetch(&self, filters: &FilterState) -> ApiResult<PagedResult<Self::Item>> {
        (**self).fetch(filters).await
    }

    async fn remove(&self, id: Self::Id) -> ApiResult<()> {
        (**self).remove(id).await
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ListConfig {
    pub page_size: usize,
    pub debounce: Duration,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

struct State<S: ListSource> {
    filters: FilterState,
    result: PagedResult<S::Item>,
    dialog: ConfirmationDialog<S::Id>,
    timer: Option<JoinHandle<()>>,
}

impl<S: ListSource> State<S> {
    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

struct Inner<S: ListSource> {
    source: S,
    notifier: Notifier,
    debounce: Duration,
    issued: AtomicU64,
    state: Mutex<State<S>>,
}

impl<S: ListSource> Inner<S> {
    /// Fetches with the filters current at call time.
    async fn fetch(&self) -> ApiResult<()> {
        let sequence = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let filters = self.state.lock().filters.clone();
        log::debug!("Fetching {} #{sequence} with {filters:?}", S::RESOURCE);

        let result = self.source.fetch(&filters).await?;

        let mut state = self.state.lock();
        if self.issued.load(Ordering::SeqCst) != sequence {
            log::debug!("Discarding stale {} response #{sequence}", S::RESOURCE);
            return Ok(());
        }
        state.result = result;
        Ok(())
    }

    async fn fetch_logged(&self) {
        if let Err(err) = self.fetch().await {
            log::error!("Failed to load {} list: {err}", S::RESOURCE);
        }
    }
}

pub struct ListController<S: ListSource> {
    inner: Arc<Inner<S>>,
}

impl<S: ListSource> Clone for ListController<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: ListSource> ListController<S> {
    pub fn new(source: S, config: ListConfig, notifier: Notifier) -> Self {
        let filters = FilterState::new(config.page_size);
        let result = PagedResult {
            page_size: filters.page_size(),
            ..PagedResult::default()
        };

        Self {
            inner: Arc::new(Inner {
                source,
                notifier,
                debounce: config.debounce,
                issued: AtomicU64::new(0),
                state: Mutex::new(State {
                    filters,
                    result,
                    dialog: ConfirmationDialog::new(),
                    timer: None,
                }),
            }),
        }
    }

    /// Schedules the initial load. Must be called inside a tokio runtime.
    pub fn mount(&self) {
        self.schedule_fetch();
    }

    /// Cancels a scheduled load. Fetches already issued still complete.
    pub fn unmount(&self) {
        self.inner.state.lock().cancel_timer();
    }

    /// Stores the keyword right away and restarts the debounce window.
    pub fn set_keyword(&self, keyword: impl Into<String>) {
        self.inner.state.lock().filters.set_keyword(keyword);
        self.schedule_fetch();
    }

    /// Moves to a page of the (0-based) pagination control and fetches it.
    pub async fn change_page(&self, display_page: usize) -> ApiResult<()> {
        {
            let mut state = self.inner.state.lock();
            state.filters.set_display_page(display_page);
            state.cancel_timer();
        }
        self.inner.fetch().await
    }

    pub async fn change_page_size(&self, page_size: usize) -> ApiResult<()> {
        {
            let mut state = self.inner.state.lock();
            state.filters.set_page_size(page_size);
            state.cancel_timer();
        }
        self.inner.fetch().await
    }

    pub async fn refresh(&self) -> ApiResult<()> {
        self.inner.state.lock().cancel_timer();
        self.inner.fetch().await
    }

    /// Opens the confirmation dialog holding `id`.
    pub fn request_delete(&self, id: S::Id) -> bool {
        self.inner.state.lock().dialog.open(id)
    }

    pub fn cancel_delete(&self) {
        self.inner.state.lock().dialog.cancel();
    }

    /// Removes the record held by the dialog.
    ///
    /// Returns `Ok(None)` when nothing was awaiting confirmation. On success the
    /// list goes back to the first page and is reloaded. On failure the list is
    /// untouched and the dialog stays open on the same record.
    pub async fn confirm_delete(&self) -> ApiResult<Option<S::Id>> {
        let Some(target) = self.inner.state.lock().dialog.begin_confirm() else {
            return Ok(None);
        };

        match self.inner.source.remove(target).await {
            Ok(()) => {
                {
                    let mut state = self.inner.state.lock();
                    state.dialog.resolve(true);
                    state.filters.reset_page();
                    state.cancel_timer();
                }
                self.inner.notifier.success(DELETE_SUCCESS);
                self.inner.fetch_logged().await;
                Ok(Some(target))
            }
            Err(err) => {
                log::error!("Failed to delete {} {target}: {err}", S::RESOURCE);
                self.inner.state.lock().dialog.resolve(false);
                self.inner.notifier.error(DELETE_FAIL);
                Err(err)
            }
        }
    }

    pub fn filters(&self) -> FilterState {
        self.inner.state.lock().filters.clone()
    }

    pub fn result(&self) -> PagedResult<S::Item> {
        self.inner.state.lock().result.clone()
    }

    pub fn dialog(&self) -> DialogState<S::Id> {
        self.inner.state.lock().dialog.state()
    }

    pub fn add_route(&self) -> String {
        format!("/add-{}", S::RESOURCE)
    }

    pub fn edit_route(&self, id: S::Id) -> String {
        format!("/edit-{}/{id}", S::RESOURCE)
    }

    /// Replaces any scheduled fetch with one `debounce` from now.
    ///
    /// The timer only spawns the fetch, so aborting a timer never cancels a
    /// request that is already in flight.
    fn schedule_fetch(&self) {
        let inner = Arc::clone(&self.inner);
        let timer = tokio::spawn(async move {
            tokio::time::sleep(inner.debounce).await;
            tokio::spawn(async move { inner.fetch_logged().await });
        });

        if let Some(previous) = self.inner.state.lock().timer.replace(timer) {
            previous.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use tokio::time::sleep;

    use super::*;
    use crate::notifications::{Level, Notification};
    use crate::repository::errors::ApiError;
    use tokio::sync::mpsc::UnboundedReceiver;

    #[derive(Default)]
    struct RecordingSource {
        calls: Mutex<Vec<FilterState>>,
        delays: Mutex<VecDeque<Duration>>,
        removed: Mutex<Vec<i32>>,
        total_items: usize,
        fail_fetch: Mutex<bool>,
        fail_remove: bool,
    }

    impl RecordingSource {
        fn with_total(total_items: usize) -> Self {
            Self {
                total_items,
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<FilterState> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl ListSource for RecordingSource {
        type Item = String;
        type Id = i32;

        const RESOURCE: &'static str = "book";

        async fn fetch(&self, filters: &FilterState) -> ApiResult<PagedResult<String>> {
            let call = {
                let mut calls = self.calls.lock();
                calls.push(filters.clone());
                calls.len()
            };
            let delay = self.delays.lock().pop_front();
            if let Some(delay) = delay {
                sleep(delay).await;
            }
            if *self.fail_fetch.lock() {
                return Err(ApiError::Network("connection refused".to_string()));
            }
            Ok(PagedResult {
                items: vec![format!("call {call}")],
                total_items: self.total_items,
                page_index: filters.page_index(),
                page_size: filters.page_size(),
                total_pages: self.total_items.div_ceil(filters.page_size()),
            })
        }

        async fn remove(&self, id: i32) -> ApiResult<()> {
            if self.fail_remove {
                return Err(ApiError::Rejected {
                    status: 409,
                    message: "book is in a cart".to_string(),
                });
            }
            self.removed.lock().push(id);
            Ok(())
        }
    }

    fn controller(
        source: RecordingSource,
    ) -> (
        ListController<Arc<RecordingSource>>,
        Arc<RecordingSource>,
        UnboundedReceiver<Notification>,
    ) {
        let source = Arc::new(source);
        let (notifier, receiver) = Notifier::channel();
        let controller = ListController::new(Arc::clone(&source), ListConfig::default(), notifier);
        (controller, source, receiver)
    }

    #[tokio::test(start_paused = true)]
    async fn mount_loads_first_page_after_debounce() {
        let (controller, source, _rx) = controller(RecordingSource::with_total(3));
        controller.mount();

        sleep(Duration::from_millis(499)).await;
        assert!(source.calls().is_empty());

        sleep(Duration::from_millis(2)).await;
        assert_eq!(source.calls(), vec![FilterState::default()]);
        assert_eq!(controller.result().total_items, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_keyword_edits_issue_one_fetch_with_final_keyword() {
        let (controller, source, _rx) = controller(RecordingSource::default());

        for keyword in ["h", "ha", "har", "harry"] {
            controller.set_keyword(keyword);
            assert_eq!(controller.filters().keyword(), Some(keyword));
            sleep(Duration::from_millis(100)).await;
        }
        assert!(source.calls().is_empty());

        sleep(Duration::from_millis(1000)).await;

        let calls = source.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].keyword(), Some("harry"));
    }

    #[tokio::test(start_paused = true)]
    async fn keyword_edit_resets_page_before_fetch() {
        let (controller, source, _rx) = controller(RecordingSource::with_total(40));
        controller.change_page(3).await.unwrap();

        controller.set_keyword("tolkien");
        assert_eq!(controller.filters().page_index(), 1);

        sleep(Duration::from_millis(600)).await;
        assert_eq!(source.calls().last().unwrap().page_index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cleared_keyword_is_omitted() {
        let (controller, source, _rx) = controller(RecordingSource::default());
        controller.set_keyword("dune");
        controller.set_keyword("");

        sleep(Duration::from_millis(600)).await;

        let calls = source.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].keyword(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn pagination_fetches_immediately_and_cancels_pending_search() {
        let (controller, source, _rx) = controller(RecordingSource::with_total(50));
        controller.set_keyword("x");

        controller.change_page(1).await.unwrap();

        let calls = source.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].page_index(), 2);
        assert_eq!(calls[0].keyword(), Some("x"));
        assert_eq!(controller.filters().display_page(), 1);

        sleep(Duration::from_secs(2)).await;
        assert_eq!(source.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn page_size_change_returns_to_first_page() {
        let (controller, source, _rx) = controller(RecordingSource::with_total(50));
        controller.change_page(4).await.unwrap();

        controller.change_page_size(25).await.unwrap();

        let last = source.calls().pop().unwrap();
        assert_eq!(last.page_index(), 1);
        assert_eq!(last.page_size(), 25);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_fetch_keeps_previous_page() {
        let (controller, source, _rx) = controller(RecordingSource::with_total(5));
        controller.refresh().await.unwrap();
        let before = controller.result();

        *source.fail_fetch.lock() = true;
        let err = controller.change_page(1).await.unwrap_err();

        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(controller.result(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn delete_on_last_page_returns_to_first_page() {
        let (controller, source, mut rx) = controller(RecordingSource::with_total(21));
        controller.change_page(2).await.unwrap();
        assert_eq!(controller.filters().page_index(), 3);

        assert!(controller.request_delete(21));
        assert_eq!(controller.dialog(), DialogState::Open { target: 21 });

        let deleted = controller.confirm_delete().await.unwrap();

        assert_eq!(deleted, Some(21));
        assert_eq!(*source.removed.lock(), vec![21]);
        assert_eq!(controller.filters().page_index(), 1);
        assert_eq!(source.calls().last().unwrap().page_index(), 1);
        assert_eq!(controller.dialog(), DialogState::Closed);
        assert_eq!(rx.try_recv().unwrap().level, Level::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_delete_leaves_list_untouched() {
        let source = RecordingSource {
            total_items: 4,
            fail_remove: true,
            ..RecordingSource::default()
        };
        let (controller, source, mut rx) = controller(source);
        controller.change_page(0).await.unwrap();
        let before = controller.result();

        controller.request_delete(2);
        let err = controller.confirm_delete().await.unwrap_err();

        assert!(err.is_rejection());
        assert_eq!(controller.result(), before);
        assert_eq!(source.calls().len(), 1);
        assert_eq!(controller.dialog(), DialogState::Open { target: 2 });
        assert_eq!(
            rx.try_recv().unwrap(),
            Notification {
                level: Level::Error,
                message: DELETE_FAIL.to_string()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn delete_requires_confirmation_dialog() {
        let (controller, source, mut rx) = controller(RecordingSource::default());

        assert_eq!(controller.confirm_delete().await.unwrap(), None);

        controller.request_delete(5);
        controller.cancel_delete();
        assert_eq!(controller.confirm_delete().await.unwrap(), None);

        assert!(source.removed.lock().is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn latest_issued_fetch_wins_over_late_response() {
        let source = RecordingSource::default();
        source
            .delays
            .lock()
            .extend([Duration::from_millis(200), Duration::from_millis(50)]);
        let (controller, source, _rx) = controller(source);

        let slow = tokio::spawn({
            let controller = controller.clone();
            async move { controller.refresh().await }
        });
        while source.calls().is_empty() {
            tokio::task::yield_now().await;
        }
        let fast = tokio::spawn({
            let controller = controller.clone();
            async move { controller.refresh().await }
        });

        slow.await.unwrap().unwrap();
        fast.await.unwrap().unwrap();

        assert_eq!(controller.result().items, vec!["call 2".to_string()]);
    }

    #[test]
    fn routes_follow_resource_name() {
        let (notifier, _rx) = Notifier::channel();
        let controller = ListController::new(
            RecordingSource::default(),
            ListConfig::default(),
            notifier,
        );

        assert_eq!(controller.add_route(), "/add-book");
        assert_eq!(controller.edit_route(9), "/edit-book/9");
    }
}
