use super::RawRecord;
use super::Resource;

/// A post
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// The post id.
    ///
    /// Ids grow over time, so the largest id is treated as the most recent post.
    pub id: i64,

    /// The id of the user that wrote this post
    pub user_id: i64,

    /// The post title
    pub title: Option<Box<str>>,

    /// The post body
    pub body: Option<Box<str>>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawPost {
    #[serde(default, with = "super::lenient")]
    id: Option<i64>,

    #[serde(default, with = "super::lenient")]
    user_id: Option<i64>,

    #[serde(default, with = "super::lenient")]
    title: Option<Box<str>>,

    #[serde(default, with = "super::lenient")]
    body: Option<Box<str>>,
}

impl RawRecord for RawPost {
    type Record = Post;

    const RESOURCE: Resource = Resource::Posts;

    fn validate(self) -> Result<Post, &'static str> {
        Ok(Post {
            id: self.id.ok_or("id")?,
            user_id: self.user_id.ok_or("userId")?,
            title: self.title,
            body: self.body,
        })
    }
}
