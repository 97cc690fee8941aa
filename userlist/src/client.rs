use crate::parse_posts;
use crate::parse_users;
use crate::Config;
use crate::Error;
use crate::Post;
use crate::User;
use url::Url;

/// The client
#[derive(Debug, Clone)]
pub struct Client {
    /// The inner http client
    pub client: reqwest::Client,

    /// The endpoints to fetch from
    config: Config,
}

impl Client {
    /// Make a new client for the default endpoints.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Make a new client for the given endpoints.
    pub fn with_config(config: Config) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("failed to build client");

        Self { client, config }
    }

    /// Get the endpoints this client fetches from.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get all users.
    ///
    /// Records without a valid id or name are skipped.
    pub async fn get_users(&self) -> Result<Vec<User>, Error> {
        self.get_collection(&self.config.users_url, parse_users).await
    }

    /// Get all posts.
    ///
    /// Records without a valid id or user id are skipped.
    pub async fn get_posts(&self) -> Result<Vec<Post>, Error> {
        self.get_collection(&self.config.posts_url, parse_posts).await
    }

    async fn get_collection<T>(
        &self,
        url: &Url,
        parse: fn(&[u8]) -> Result<Vec<T>, Error>,
    ) -> Result<Vec<T>, Error> {
        tracing::debug!("GET {url}");
        let body = self
            .client
            .get(url.as_str())
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        parse(&body)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
