pub mod get;
pub mod list;

use google_cloud_gax::http::ServerResponse;
use google_cloud_gax::impl_response_meta;

/// A UserProfile resource lets you list all DFA user profiles that are associated with a Google user account.
/// The profile_id needs to be specified in other API requests.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    /// The account ID to which this profile belongs.
    #[serde(
        default,
        deserialize_with = "google_cloud_gax::http::from_str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub account_id: Option<i64>,
    /// The account name this profile belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Identifies what kind of resource this is. Value: the fixed string "dfareporting#userProfile".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// The unique ID of the user profile.
    #[serde(
        default,
        deserialize_with = "google_cloud_gax::http::from_str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_id: Option<i64>,
    /// The sub account ID this profile belongs to if applicable.
    #[serde(
        default,
        deserialize_with = "google_cloud_gax::http::from_str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub sub_account_id: Option<i64>,
    /// The sub account name this profile belongs to if applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_account_name: Option<String>,
    /// The user name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(UserProfile);

/// Represents the list of user profiles.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfileList {
    /// Etag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// The user profiles returned in this response.
    pub items: Vec<UserProfile>,
    /// Identifies what kind of resource this is. Value: the fixed string "dfareporting#userProfileList".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(UserProfileList);
