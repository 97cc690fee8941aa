/// A user paired with their most recent post, ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    /// The user id
    pub id: i64,

    /// The user's name
    pub name: Box<str>,

    /// The title of the user's latest post.
    ///
    /// Absent if the user has no posts, or the post has no title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_post_title: Option<Box<str>>,

    /// The body of the user's latest post
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_post_body: Option<Box<str>>,
}
