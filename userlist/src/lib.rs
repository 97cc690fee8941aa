mod client;
mod config;
mod filter;
mod join;
mod loader;
mod model;
#[cfg(test)]
mod test_util;
mod view_model;

pub use self::client::Client;
pub use self::config::Config;
pub use self::config::ConfigError;
pub use self::config::POSTS_URL_VAR;
pub use self::config::USERS_URL_VAR;
pub use self::filter::filter_records;
pub use self::filter::matches;
pub use self::filter::FilterMode;
pub use self::join::join_latest_posts;
pub use self::loader::LoadError;
pub use self::loader::LoadOutcome;
pub use self::loader::LoadState;
pub use self::loader::Loader;
pub use self::model::parse_posts;
pub use self::model::parse_users;
pub use self::model::DisplayRecord;
pub use self::model::Post;
pub use self::model::Resource;
pub use self::model::User;
pub use self::model::ValidationError;
pub use self::view_model::UserList;
pub use self::view_model::View;
pub use tokio_util::sync::CancellationToken;

/// The error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reqwest error
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    /// The response body was not valid json
    #[error("invalid json")]
    Json(#[from] serde_json::Error),

    /// The response body was json, but not an array
    #[error("expected a json array")]
    NotAnArray,
}
