pub mod list;

use std::collections::HashMap;

use crate::http::breakpoints::StatusMessage;

/// Represents the debugged application. The application may include one or more replicated processes
/// executing the same code. Each of these processes is attached with a debugger agent, carrying out
/// the debugging commands. Agents attached to the same debuggee identify themselves as such by using
/// exactly the same Debuggee message value when registering.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Debuggee {
    /// Unique identifier for the debuggee generated by the controller service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Project the debuggee is associated with. Use project number or id when registering a Google Cloud Platform project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Uniquifier to further distinguish the application.
    /// It is possible that different applications might have identical values in the debuggee message,
    /// thus, incorrectly identified as a single application by the Controller service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uniquifier: Option<String>,
    /// Human readable description of the debuggee. Including a human-readable project name,
    /// environment name and version information is recommended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// If set to `true`, indicates that Controller service does not detect any activity from the debuggee
    /// agents and the application is possibly stopped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_inactive: Option<bool>,
    /// Version ID of the agent. Schema: `domain/language-platform/vmajor.minor` (for example
    /// `google.com/java-gcp/v1.1`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_version: Option<String>,
    /// If set to `true`, indicates that the agent should disable itself and detach from the debuggee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,
    /// Human readable message to be displayed to the user about this debuggee.
    /// Absence of this field indicates no status. The message can be either informational or an error status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusMessage>,
    /// References to the locations and revisions of the source code used in the deployed application.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub source_contexts: Vec<SourceContext>,
    /// References to the locations and revisions of the source code used in the deployed application.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ext_source_contexts: Vec<ExtendedSourceContext>,
    /// A set of custom debuggee properties, populated by the agent, to be displayed to the user.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
    /// Used when setting breakpoint canary for this debuggee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canary_mode: Option<CanaryMode>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CanaryMode {
    #[default]
    CanaryModeUnspecified,
    /// Always enable breakpoint canary regardless of the value of breakpoint's canary option.
    CanaryModeAlwaysEnabled,
    /// Always disable breakpoint canary regardless of the value of breakpoint's canary option.
    CanaryModeAlwaysDisabled,
    /// Depends on the breakpoint's canary option. Enable canary by default if the breakpoint's canary option is not specified.
    CanaryModeDefaultEnabled,
    /// Depends on the breakpoint's canary option. Disable canary by default if the breakpoint's canary option is not specified.
    CanaryModeDefaultDisabled,
    /// A value not known to this version of the client.
    #[serde(other)]
    Unknown,
}

/// A SourceContext is a reference to a tree of files. A SourceContext together with a path point to a unique
/// revision of a single file or directory.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceContext {
    /// A SourceContext referring to a revision in a cloud repo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_repo: Option<CloudRepoSourceContext>,
    /// A SourceContext referring to a snapshot in a cloud workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_workspace: Option<CloudWorkspaceSourceContext>,
    /// A SourceContext referring to a Gerrit project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gerrit: Option<GerritSourceContext>,
    /// A SourceContext referring to any third party Git repo (e.g. GitHub).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git: Option<GitSourceContext>,
}

/// An ExtendedSourceContext is a SourceContext combined with additional details describing the context.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtendedSourceContext {
    /// Any source context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<SourceContext>,
    /// Labels with user defined metadata.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

/// A CloudRepoSourceContext denotes a particular revision in a cloud repo (a repo hosted by the Google Cloud Platform).
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CloudRepoSourceContext {
    /// The ID of the repo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_id: Option<RepoId>,
    /// A revision ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_id: Option<String>,
    /// The name of an alias (branch, tag, etc.).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_name: Option<String>,
    /// An alias, which may be a branch or tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_context: Option<AliasContext>,
}

/// A CloudWorkspaceSourceContext denotes a workspace at a particular snapshot.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CloudWorkspaceSourceContext {
    /// The ID of the workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<CloudWorkspaceId>,
    /// The ID of the snapshot. An empty snapshot_id refers to the most recent snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
}

/// A CloudWorkspaceId is a unique identifier for a cloud workspace. A cloud workspace is a place associated
/// with a repo where modified files can be stored before they are committed.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CloudWorkspaceId {
    /// The ID of the repo containing the workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_id: Option<RepoId>,
    /// The unique name of the workspace within the repo. This is the name chosen by the client in the
    /// Source API's CreateWorkspace method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A unique identifier for a cloud repo.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RepoId {
    /// A combination of a project ID and a repo name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_repo_id: Option<ProjectRepoId>,
    /// A server-assigned, globally unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

/// Selects a repo using a Google Cloud Platform project ID (e.g. winged-cargo-31) and a repo name within that project.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectRepoId {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_name: Option<String>,
}

/// An alias to a repo revision.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct AliasContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<AliasKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AliasKind {
    #[default]
    Any,
    /// Git tag
    Fixed,
    /// Git branch
    Movable,
    /// OTHER is used to specify non-standard aliases, those not of the kinds above.
    Other,
    /// A value not known to this version of the client.
    #[serde(other)]
    Unknown,
}

/// A SourceContext referring to a Gerrit project.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct GerritSourceContext {
    /// The URI of a running Gerrit instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_uri: Option<String>,
    /// The full project name within the host. Projects may be nested, so "project/subproject" is a valid project name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gerrit_project: Option<String>,
    /// A revision (commit) ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_id: Option<String>,
    /// The name of an alias (branch, tag, etc.).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_name: Option<String>,
    /// An alias, which may be a branch or tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_context: Option<AliasContext>,
}

/// A GitSourceContext denotes a particular revision in a third party Git repository (e.g. GitHub).
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct GitSourceContext {
    /// Git repository URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Git commit hash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_id: Option<String>,
}
