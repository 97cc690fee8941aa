mod display_record;
mod post;
mod user;

pub use self::display_record::DisplayRecord;
pub use self::post::Post;
pub use self::user::User;
use crate::Error;
use serde::de::DeserializeOwned;

/// The remote collection a record came from
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Resource {
    Users,
    Posts,
}

impl Resource {
    /// Get this as a str.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Posts => "posts",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record that was dropped at the parse boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{resource} record {index} is missing a valid `{field}`")]
pub struct ValidationError {
    /// The collection the record belonged to
    pub resource: Resource,

    /// The position of the record in the response array
    pub index: usize,

    /// The offending field
    pub field: &'static str,
}

/// A record as it arrives over the wire, before validation.
pub(crate) trait RawRecord: DeserializeOwned {
    type Record;

    const RESOURCE: Resource;

    /// Turn this into a valid record or name the first bad field.
    fn validate(self) -> Result<Self::Record, &'static str>;
}

/// Parse a users response body.
///
/// Invalid elements are logged and skipped.
pub fn parse_users(body: &[u8]) -> Result<Vec<User>, Error> {
    parse_collection::<self::user::RawUser>(body)
}

/// Parse a posts response body.
///
/// Invalid elements are logged and skipped.
pub fn parse_posts(body: &[u8]) -> Result<Vec<Post>, Error> {
    parse_collection::<self::post::RawPost>(body)
}

fn parse_collection<R>(body: &[u8]) -> Result<Vec<R::Record>, Error>
where
    R: RawRecord,
{
    let value: serde_json::Value = serde_json::from_slice(body)?;
    let serde_json::Value::Array(elements) = value else {
        return Err(Error::NotAnArray);
    };

    let mut records = Vec::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        // A non-object element has no fields at all, so report the identity field.
        let result = serde_json::from_value::<R>(element)
            .map_err(|_error| "id")
            .and_then(R::validate);

        match result {
            Ok(record) => records.push(record),
            Err(field) => {
                let error = ValidationError {
                    resource: R::RESOURCE,
                    index,
                    field,
                };
                tracing::warn!("skipping record: {error}");
            }
        }
    }

    Ok(records)
}

/// Accept any json value, keeping it only if it has the expected type.
///
/// This lets a single bad field be reported by name instead of failing the whole record.
pub(crate) mod lenient {
    use serde::de::DeserializeOwned;

    pub(crate) fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: serde::Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value: serde_json::Value = serde::Deserialize::deserialize(deserializer)?;
        Ok(serde_json::from_value(value).ok())
    }
}
