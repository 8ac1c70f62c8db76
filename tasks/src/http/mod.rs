pub mod task_lists;
pub mod task_lists_client;
pub mod tasks;
pub mod tasks_client;

pub use google_cloud_gax::call::{Call, ConditionalCall};
pub use google_cloud_gax::error;
pub use google_cloud_gax::http::{Empty, ServerResponse};
pub use google_cloud_gax::nullable::Nullable;
pub use google_cloud_gax::paging::Paginated;

pub const SCOPES: [&str; 1] = ["https://www.googleapis.com/auth/tasks"];

/// RFC 3339 timestamps that a PATCH can clear by sending `null`.
pub(crate) mod nullable_rfc3339 {
    use google_cloud_gax::nullable::Nullable;
    use serde::{Deserializer, Serializer};
    use time::OffsetDateTime;

    pub fn serialize<S>(value: &Nullable<OffsetDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Nullable::Value(v) => time::serde::rfc3339::serialize(v, serializer),
            Nullable::Unset | Nullable::Null => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Nullable<OffsetDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match time::serde::rfc3339::option::deserialize(deserializer)? {
            Some(v) => Nullable::Value(v),
            None => Nullable::Null,
        })
    }
}
