use crate::filter_records;
use crate::join_latest_posts;
use crate::CancellationToken;
use crate::Client;
use crate::DisplayRecord;
use crate::FilterMode;
use crate::LoadOutcome;
use crate::LoadState;
use crate::Loader;
use std::sync::Arc;
use tokio::sync::watch;

/// A snapshot of what should be rendered
#[derive(Debug, Clone, Default)]
pub struct View {
    /// The records that pass the current filter, in user order
    pub records: Arc<[DisplayRecord]>,

    /// The load state of the users
    pub users_state: LoadState,

    /// The load state of the posts
    pub posts_state: LoadState,
}

impl View {
    /// Check if any collection failed to load.
    ///
    /// Renderers should show a fallback message in this case.
    pub fn has_error(&self) -> bool {
        self.users_state.error().is_some() || self.posts_state.error().is_some()
    }

    /// Check if any collection has not been fetched yet.
    pub fn is_pending(&self) -> bool {
        matches!(self.users_state, LoadState::Pending)
            || matches!(self.posts_state, LoadState::Pending)
    }
}

/// A searchable list of users, each paired with their latest post.
///
/// Creating this activates the list; dropping it deactivates it.
/// All state is owned here and is gone after deactivation.
/// Every state change is published to subscribers as a new [`View`].
#[derive(Debug)]
pub struct UserList {
    client: Client,
    loader: Loader,

    filter_term: String,
    filter_mode: FilterMode,

    /// One record per user
    records: Vec<DisplayRecord>,

    /// The records that pass the filter
    visible: Arc<[DisplayRecord]>,

    /// Cancelled on deactivation
    cancel: CancellationToken,

    view: watch::Sender<View>,
}

impl UserList {
    /// Activate a new list with the default filter mode.
    pub fn new(client: Client) -> Self {
        Self::with_filter_mode(client, FilterMode::default())
    }

    /// Activate a new list with the given filter mode.
    pub fn with_filter_mode(client: Client, filter_mode: FilterMode) -> Self {
        let (view, _) = watch::channel(View::default());

        Self {
            client,
            loader: Loader::new(),
            filter_term: String::new(),
            filter_mode,
            records: Vec::new(),
            visible: Vec::new().into(),
            cancel: CancellationToken::new(),
            view,
        }
    }

    /// Fetch the users and posts that have not been loaded yet.
    ///
    /// Returns early with [`LoadOutcome::Cancelled`] if the list is deactivated through its
    /// cancel token, in which case no state changes.
    pub async fn load(&mut self) -> LoadOutcome {
        let outcome = self.loader.load(&self.client, &self.cancel).await;
        if outcome == LoadOutcome::Updated {
            self.rejoin();
        }
        outcome
    }

    /// Replace the filter term.
    pub fn set_filter(&mut self, term: impl Into<String>) {
        self.filter_term = term.into();
        self.refilter();
    }

    /// The current filter term.
    pub fn filter_term(&self) -> &str {
        &self.filter_term
    }

    /// The filter mode.
    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    /// Every record, ignoring the filter.
    pub fn records(&self) -> &[DisplayRecord] {
        &self.records
    }

    /// The records that pass the filter.
    pub fn visible(&self) -> &[DisplayRecord] {
        &self.visible
    }

    /// The raw collections.
    pub fn loader(&self) -> &Loader {
        &self.loader
    }

    /// Check if any collection failed to load.
    pub fn has_error(&self) -> bool {
        self.view.borrow().has_error()
    }

    /// Get the current view.
    pub fn view(&self) -> View {
        self.view.borrow().clone()
    }

    /// Watch for new views.
    pub fn subscribe(&self) -> watch::Receiver<View> {
        self.view.subscribe()
    }

    /// Get a token that deactivates this list when cancelled.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    fn rejoin(&mut self) {
        self.records = join_latest_posts(self.loader.users(), self.loader.posts());
        self.refilter();
    }

    fn refilter(&mut self) {
        self.visible = filter_records(&self.records, &self.filter_term, self.filter_mode).into();
        self.publish();
    }

    fn publish(&self) {
        self.view.send_replace(View {
            records: self.visible.clone(),
            users_state: self.loader.users_state().clone(),
            posts_state: self.loader.posts_state().clone(),
        });
    }
}

impl Drop for UserList {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
