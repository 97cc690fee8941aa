use super::RawRecord;
use super::Resource;

/// A user
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    /// The user id
    pub id: i64,

    /// The user's full name
    pub name: Box<str>,
}

/// A user as returned by the api.
///
/// Every field is optional here so that a bad record can be skipped with a reason.
/// Fields other than these are ignored.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct RawUser {
    #[serde(default, with = "super::lenient")]
    id: Option<i64>,

    #[serde(default, with = "super::lenient")]
    name: Option<Box<str>>,
}

impl RawRecord for RawUser {
    type Record = User;

    const RESOURCE: Resource = Resource::Users;

    fn validate(self) -> Result<User, &'static str> {
        Ok(User {
            id: self.id.ok_or("id")?,
            name: self.name.ok_or("name")?,
        })
    }
}
