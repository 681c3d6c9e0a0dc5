//! Request and response bodies for users and cards.

pub mod card;
pub mod user;

pub use card::*;
pub use user::*;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Read a request field the way the store will receive it: absent or `null`
/// becomes `None`, strings pass through, any other JSON value becomes its text.
pub(crate) fn field_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
