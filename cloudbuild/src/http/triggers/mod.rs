pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod patch;
pub mod run;

use std::collections::HashMap;

use google_cloud_gax::http::ServerResponse;
use google_cloud_gax::impl_response_meta;
use time::OffsetDateTime;

use crate::http::builds::{Build, RepoSource};

/// Configuration for an automated build in response to source repository changes.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildTrigger {
    /// Output only. Unique identifier of the trigger.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Human-readable description of this trigger.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// User-assigned name of the trigger. Must be unique within the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Tags for annotation of a `BuildTrigger`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Template describing the types of source changes to trigger a build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_template: Option<RepoSource>,
    /// GitHubEventsConfig describes the configuration of a trigger that creates a build whenever a GitHub event is received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<GitHubEventsConfig>,
    /// Contents of the build template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<Build>,
    /// Path, from the source root, to a build configuration file (i.e. cloudbuild.yaml).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Output only. Time when the trigger was created.
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub create_time: Option<OffsetDateTime>,
    /// If true, the trigger will never automatically execute a build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Substitutions for Build resource. The keys must match the following regular expression: `^_[A-Z0-9_]+$`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub substitutions: HashMap<String, String>,
    /// If any of the files altered in the commit pass the ignored_files filter and included_files is empty,
    /// then as far as this filter is concerned, we should not trigger the build.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored_files: Vec<String>,
    /// If any of the files altered in the commit pass the included_files filter, we should trigger the build.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub included_files: Vec<String>,
    /// A Common Expression Language string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// The service account used for all user-controlled operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account: Option<String>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(BuildTrigger);

/// GitHubEventsConfig describes the configuration of a trigger that creates a build whenever a GitHub event is received.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct GitHubEventsConfig {
    /// The installationID that emits the GitHub event.
    #[serde(
        default,
        deserialize_with = "google_cloud_gax::http::from_str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub installation_id: Option<i64>,
    /// Owner of the repository. For example: The owner for `https://github.com/googlecloudplatform/cloud-builders`
    /// is "googlecloudplatform".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Name of the repository. For example: The name for `https://github.com/googlecloudplatform/cloud-builders`
    /// is "cloud-builders".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// filter to match changes in pull requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequestFilter>,
    /// filter to match changes in refs like branches, tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push: Option<PushFilter>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommentControl {
    /// Do not require comments on Pull Requests before builds are triggered.
    #[default]
    CommentsDisabled,
    /// Enforce that repository owners or collaborators must comment on Pull Requests before builds are triggered.
    CommentsEnabled,
    /// Enforce that repository owners or collaborators must comment on external contributors' Pull Requests
    /// before builds are triggered.
    CommentsEnabledForExternalContributorsOnly,
    /// A value not known to this version of the client.
    #[serde(other)]
    Unknown,
}

/// PullRequestFilter contains filter properties for matching GitHub Pull Requests.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct PullRequestFilter {
    /// Regex of branches to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Configure builds to run whether a repository owner or collaborator need to comment `/gcbrun`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_control: Option<CommentControl>,
    /// If true, branches that do NOT match the git_ref will trigger a build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invert_regex: Option<bool>,
}

/// Push contains filter properties for matching GitHub git pushes.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct PushFilter {
    /// Regexes matching branches to build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Regexes matching tags to build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// When true, only trigger a build if the revision regex does NOT match the git_ref regex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invert_regex: Option<bool>,
}
