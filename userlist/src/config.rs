use url::Url;

/// The env var that overrides the users endpoint
pub const USERS_URL_VAR: &str = "USERLIST_USERS_URL";

/// The env var that overrides the posts endpoint
pub const POSTS_URL_VAR: &str = "USERLIST_POSTS_URL";

const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";
const DEFAULT_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// An error that may occur while loading the config
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid url in {key}")]
    InvalidUrl {
        key: &'static str,

        #[source]
        error: url::ParseError,
    },
}

/// The endpoints to load data from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The url that returns the array of users
    pub users_url: Url,

    /// The url that returns the array of posts
    pub posts_url: Url,
}

impl Config {
    /// Make a config from two urls.
    pub fn new(users_url: Url, posts_url: Url) -> Self {
        Self {
            users_url,
            posts_url,
        }
    }

    /// Load the config from the environment, using defaults for unset vars.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(mut lookup: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        Ok(Self {
            users_url: load_url(&mut lookup, USERS_URL_VAR, DEFAULT_USERS_URL)?,
            posts_url: load_url(&mut lookup, POSTS_URL_VAR, DEFAULT_POSTS_URL)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            users_url: Url::parse(DEFAULT_USERS_URL).expect("invalid default users url"),
            posts_url: Url::parse(DEFAULT_POSTS_URL).expect("invalid default posts url"),
        }
    }
}

fn load_url<F>(lookup: &mut F, key: &'static str, default: &str) -> Result<Url, ConfigError>
where
    F: FnMut(&str) -> Option<String>,
{
    let value = lookup(key).unwrap_or_else(|| {
        tracing::info!("{key} not set, using default: {default}");
        default.to_string()
    });

    Url::parse(&value).map_err(|error| {
        tracing::warn!("invalid {key} value \"{value}\": {error}");
        ConfigError::InvalidUrl { key, error }
    })
}
