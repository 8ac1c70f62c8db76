pub mod delete;
pub mod get;
pub mod insert;
pub mod list;
pub mod patch;
pub mod run;
pub mod update;

use google_cloud_gax::http::ServerResponse;
use google_cloud_gax::impl_response_meta;
use time::Date;

use crate::http::SortOrder;

/// Represents a Report resource.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Report {
    /// The account ID to which this report belongs.
    #[serde(
        default,
        deserialize_with = "google_cloud_gax::http::from_str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub account_id: Option<i64>,
    /// The report criteria for a report of type "STANDARD".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria: Option<ReportCriteria>,
    /// The report's email delivery settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Delivery>,
    /// The eTag of this response for caching purposes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// The filename used when generating report files for this report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// The output format of the report. If not specified, default format is "CSV".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ReportFormat>,
    /// The unique ID identifying this report resource.
    #[serde(
        default,
        deserialize_with = "google_cloud_gax::http::from_str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,
    /// The kind of resource this is, in this case dfareporting#report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// The timestamp (in milliseconds since epoch) of when this report was last modified.
    #[serde(
        default,
        deserialize_with = "google_cloud_gax::http::from_str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_time: Option<u64>,
    /// The name of the report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The user profile id of the owner of this report.
    #[serde(
        default,
        deserialize_with = "google_cloud_gax::http::from_str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub owner_profile_id: Option<i64>,
    /// The report's schedule. Can only be set if the report's 'dateRange' is a relative date range and
    /// the relative date range is not "TODAY".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ReportSchedule>,
    /// The subaccount ID to which this report belongs if applicable.
    #[serde(
        default,
        deserialize_with = "google_cloud_gax::http::from_str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub sub_account_id: Option<i64>,
    /// The type of the report.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ReportType>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(Report);

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportFormat {
    #[default]
    Csv,
    Excel,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportType {
    #[default]
    Standard,
    Reach,
    PathToConversion,
    Floodlight,
    CrossMediaReach,
    #[serde(other)]
    Unknown,
}

/// The report criteria for a report of type "STANDARD".
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportCriteria {
    /// The date range for which this report should be run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    /// The list of filters on which dimensions are filtered. Filters for different dimensions are ANDed,
    /// filters for the same dimension are grouped together and ORed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dimension_filters: Vec<DimensionValue>,
    /// The list of standard dimensions the report should include.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<SortedDimension>,
    /// The list of names of metrics the report should include.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metric_names: Vec<String>,
}

/// Represents a date range.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct DateRange {
    #[serde(default, with = "crate::http::date_option", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
    /// The kind of resource this is, in this case dfareporting#dateRange.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// The date range relative to the date of when the report is run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_date_range: Option<RelativeDateRange>,
    #[serde(default, with = "crate::http::date_option", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelativeDateRange {
    #[default]
    Today,
    Yesterday,
    WeekToDate,
    MonthToDate,
    QuarterToDate,
    YearToDate,
    PreviousWeek,
    PreviousMonth,
    PreviousQuarter,
    PreviousYear,
    #[serde(rename = "LAST_7_DAYS")]
    Last7Days,
    #[serde(rename = "LAST_30_DAYS")]
    Last30Days,
    #[serde(rename = "LAST_90_DAYS")]
    Last90Days,
    #[serde(rename = "LAST_365_DAYS")]
    Last365Days,
    #[serde(rename = "LAST_24_MONTHS")]
    Last24Months,
    #[serde(rename = "LAST_14_DAYS")]
    Last14Days,
    #[serde(rename = "LAST_60_DAYS")]
    Last60Days,
    #[serde(other)]
    Unknown,
}

/// Represents a sorted dimension.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SortedDimension {
    /// The kind of resource this is, in this case dfareporting#sortedDimension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// The name of the dimension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// An optional sort order for the dimension column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

/// Represents a DimensionValue resource.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct DimensionValue {
    /// The name of the dimension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_name: Option<String>,
    /// The eTag of this response for caching purposes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// The ID associated with the value if available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The kind of resource this is, in this case dfareporting#dimensionValue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Determines how the 'value' field is matched when filtering. If not specified, defaults to EXACT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_type: Option<MatchType>,
    /// The value of the dimension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchType {
    #[default]
    Exact,
    BeginsWith,
    Contains,
    WildcardExpression,
    #[serde(other)]
    Unknown,
}

/// The report's schedule.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportSchedule {
    /// Whether the schedule is active or not. Must be set to either true or false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Defines every how many days, weeks or months the report should be run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub every: Option<i32>,
    #[serde(default, with = "crate::http::date_option", skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<Date>,
    /// The interval for which the report is repeated. `DAILY`, `WEEKLY` or `MONTHLY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeats: Option<String>,
    /// List of week days "WEEKLY" on which scheduled reports should run.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub repeats_on_week_days: Vec<String>,
    /// Enum to define for "MONTHLY" scheduled reports whether reports should be repeated on the same
    /// day of the month as "startDate" or the same day of the week of the month.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runs_on_day_of_month: Option<String>,
    #[serde(default, with = "crate::http::date_option", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,
    /// The timezone when the report will run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// The report's email delivery settings.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Delivery {
    /// Whether the report should be emailed to the report owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_owner: Option<bool>,
    /// The type of delivery for the owner to receive, if enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_owner_delivery_type: Option<DeliveryType>,
    /// The message to be sent with each email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The list of recipients to which to email the report.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recipients: Vec<Recipient>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryType {
    #[default]
    Link,
    Attachment,
    #[serde(other)]
    Unknown,
}

/// Represents a recipient.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Recipient {
    /// The delivery type for the recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_type: Option<DeliveryType>,
    /// The email address of the recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// The kind of resource this is, in this case dfareporting#recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}
