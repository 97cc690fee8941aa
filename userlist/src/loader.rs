use crate::CancellationToken;
use crate::Client;
use crate::Error;
use crate::Post;
use crate::Resource;
use crate::User;
use std::future::Future;
use std::sync::Arc;

/// Failed to load a collection
#[derive(Debug, thiserror::Error)]
#[error("failed to load {resource}")]
pub struct LoadError {
    /// The collection that failed to load
    pub resource: Resource,

    /// The cause
    #[source]
    pub error: Error,
}

/// The load state of a single collection
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    /// Not fetched yet
    #[default]
    Pending,

    /// Fetched successfully.
    ///
    /// A loaded collection is never fetched again, even if it is empty.
    Loaded,

    /// The last fetch failed.
    ///
    /// The collection keeps its previous value.
    Failed(Arc<LoadError>),
}

impl LoadState {
    /// Check if the collection was fetched successfully.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }

    /// Get the load error, if the last fetch failed.
    pub fn error(&self) -> Option<&LoadError> {
        match self {
            Self::Failed(error) => Some(error.as_ref()),
            Self::Pending | Self::Loaded => None,
        }
    }
}

/// The result of a call to [`Loader::load`]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum LoadOutcome {
    /// Everything was already loaded, so nothing was fetched.
    Unchanged,

    /// At least one collection was fetched, successfully or not.
    Updated,

    /// The token was cancelled before the fetches finished.
    ///
    /// No state was touched.
    Cancelled,
}

/// Owns the raw user and post collections
#[derive(Debug, Default)]
pub struct Loader {
    users: Vec<User>,
    users_state: LoadState,

    posts: Vec<Post>,
    posts_state: LoadState,
}

impl Loader {
    /// Make an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// The users loaded so far.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The posts loaded so far.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// The load state of the users.
    pub fn users_state(&self) -> &LoadState {
        &self.users_state
    }

    /// The load state of the posts.
    pub fn posts_state(&self) -> &LoadState {
        &self.posts_state
    }

    /// Fetch every collection that has not been loaded yet.
    ///
    /// Both fetches run concurrently.
    /// Failures are recorded in the load state of the collection, not returned.
    pub async fn load(&mut self, client: &Client, cancel: &CancellationToken) -> LoadOutcome {
        let fetch_users = !self.users_state.is_loaded();
        let fetch_posts = !self.posts_state.is_loaded();
        if !fetch_users && !fetch_posts {
            return LoadOutcome::Unchanged;
        }

        let fetches = async {
            tokio::join!(
                fetch_if(fetch_users, client.get_users()),
                fetch_if(fetch_posts, client.get_posts()),
            )
        };
        let (users, posts) = tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                tracing::debug!("load cancelled");
                return LoadOutcome::Cancelled;
            }
            results = fetches => results,
        };

        if let Some(result) = users {
            apply(&mut self.users, &mut self.users_state, Resource::Users, result);
        }
        if let Some(result) = posts {
            apply(&mut self.posts, &mut self.posts_state, Resource::Posts, result);
        }

        LoadOutcome::Updated
    }
}

async fn fetch_if<F, T>(enabled: bool, fetch: F) -> Option<Result<Vec<T>, Error>>
where
    F: Future<Output = Result<Vec<T>, Error>>,
{
    if enabled {
        Some(fetch.await)
    } else {
        None
    }
}

fn apply<T>(
    collection: &mut Vec<T>,
    state: &mut LoadState,
    resource: Resource,
    result: Result<Vec<T>, Error>,
) {
    match result {
        Ok(records) => {
            tracing::info!("loaded {} {resource}", records.len());
            *collection = records;
            *state = LoadState::Loaded;
        }
        Err(error) => {
            tracing::warn!("failed to load {resource}: {error}");
            *state = LoadState::Failed(Arc::new(LoadError { resource, error }));
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_util::Reply;
    use crate::test_util::TestServer;
    use crate::test_util::POSTS_JSON;
    use crate::test_util::USERS_JSON;
    use axum::http::StatusCode;
    use std::time::Duration;

    #[tokio::test]
    async fn load_both_once() {
        let server = TestServer::spawn(Reply::Json(USERS_JSON), Reply::Json(POSTS_JSON)).await;
        let client = Client::with_config(server.config.clone());
        let cancel = CancellationToken::new();
        let mut loader = Loader::new();

        assert!(loader.load(&client, &cancel).await == LoadOutcome::Updated);
        assert!(loader.users_state().is_loaded());
        assert!(loader.posts_state().is_loaded());
        assert!(loader.users().len() == 3);
        assert!(loader.posts().len() == 3);

        assert!(loader.load(&client, &cancel).await == LoadOutcome::Unchanged);
        assert!(server.hits() == (1, 1));
    }

    #[tokio::test]
    async fn empty_collection_is_not_refetched() {
        let server = TestServer::spawn(Reply::Json("[]"), Reply::Json("[]")).await;
        let client = Client::with_config(server.config.clone());
        let cancel = CancellationToken::new();
        let mut loader = Loader::new();

        loader.load(&client, &cancel).await;
        loader.load(&client, &cancel).await;

        assert!(loader.users().is_empty());
        assert!(loader.users_state().is_loaded());
        assert!(server.hits() == (1, 1));
    }

    #[tokio::test]
    async fn failed_fetch_is_recorded_and_retried() {
        let server = TestServer::spawn(
            Reply::Json(USERS_JSON),
            Reply::Status(StatusCode::INTERNAL_SERVER_ERROR),
        )
        .await;
        let client = Client::with_config(server.config.clone());
        let cancel = CancellationToken::new();
        let mut loader = Loader::new();

        assert!(loader.load(&client, &cancel).await == LoadOutcome::Updated);
        assert!(loader.users().len() == 3);
        assert!(loader.posts().is_empty());

        let error = loader.posts_state().error().expect("missing load error");
        assert!(error.resource == Resource::Posts);
        assert!(matches!(error.error, Error::Reqwest(_)));

        // Only the failed collection is fetched again.
        assert!(loader.load(&client, &cancel).await == LoadOutcome::Updated);
        assert!(server.hits() == (1, 2));
    }

    #[tokio::test]
    async fn malformed_body_is_a_load_error() {
        let server = TestServer::spawn(Reply::Json("{\"oops\""), Reply::Json("{}")).await;
        let client = Client::with_config(server.config.clone());
        let cancel = CancellationToken::new();
        let mut loader = Loader::new();

        loader.load(&client, &cancel).await;

        let users_error = loader.users_state().error().expect("missing users error");
        assert!(matches!(users_error.error, Error::Json(_)));

        let posts_error = loader.posts_state().error().expect("missing posts error");
        assert!(matches!(posts_error.error, Error::NotAnArray));
    }

    #[tokio::test]
    async fn cancelled_load_changes_nothing() {
        let server = TestServer::spawn(Reply::Json(USERS_JSON), Reply::Hang).await;
        let client = Client::with_config(server.config.clone());
        let cancel = CancellationToken::new();
        let mut loader = Loader::new();

        let canceller = {
            let cancel = cancel.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(100)).await;
                cancel.cancel();
            })
        };

        assert!(loader.load(&client, &cancel).await == LoadOutcome::Cancelled);
        canceller.await.expect("failed to join canceller");

        // The users fetch finished, but was not applied.
        assert!(loader.users().is_empty());
        assert!(matches!(loader.users_state(), LoadState::Pending));
        assert!(matches!(loader.posts_state(), LoadState::Pending));
    }
}
