pub mod files;
pub mod files_client;
pub mod report_files;
pub mod report_files_client;
pub mod reports;
pub mod reports_client;
pub mod user_profiles;
pub mod user_profiles_client;

pub use google_cloud_gax::call::{Call, ConditionalCall};
pub use google_cloud_gax::error;
pub use google_cloud_gax::http::{Empty, ServerResponse};
pub use google_cloud_gax::paging::Paginated;

pub const SCOPES: [&str; 1] = ["https://www.googleapis.com/auth/dfareporting"];

/// `yyyy-MM-dd` dates.
pub(crate) mod date_option {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::macros::format_description;
    use time::Date;

    pub fn serialize<S>(value: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => {
                let formatted = date
                    .format(format_description!("[year]-[month]-[day]"))
                    .map_err(serde::ser::Error::custom)?;
                serializer.serialize_str(&formatted)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        value
            .map(|v| Date::parse(&v, format_description!("[year]-[month]-[day]")).map_err(serde::de::Error::custom))
            .transpose()
    }
}

/// Which reports or files a list call returns.
#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Scope {
    All,
    #[default]
    Mine,
    /// Files only.
    SharedWithMe,
}

#[derive(Clone, PartialEq, Eq, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortField {
    Id,
    #[default]
    LastModifiedTime,
    /// Reports only.
    Name,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}
