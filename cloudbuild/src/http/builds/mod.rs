pub mod cancel;
pub mod create;
pub mod get;
pub mod list;
pub mod retry;

use std::collections::HashMap;

use google_cloud_gax::http::ServerResponse;
use google_cloud_gax::impl_response_meta;
use time::OffsetDateTime;

/// A build resource in the Cloud Build API.
///
/// At a high level, a `Build` describes where to find source code, how to build it (for example, the
/// builder image to run on the source), and where to store the built artifacts.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Build {
    /// Output only. Unique identifier of the build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Output only. ID of the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Output only. Status of the build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BuildStatus>,
    /// Output only. Customer-readable message about the current status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_detail: Option<String>,
    /// The location of the source files to build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// Required. The operations to be performed on the workspace.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<BuildStep>,
    /// Output only. Results of the build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Results>,
    /// Output only. Time at which the request to create the build was received.
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub create_time: Option<OffsetDateTime>,
    /// Output only. Time at which execution of the build was started.
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<OffsetDateTime>,
    /// Output only. Time at which execution of the build was finished.
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub finish_time: Option<OffsetDateTime>,
    /// Amount of time that this build should be allowed to run, to second granularity, for example `"600s"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    /// A list of images to be pushed upon the successful completion of all build steps.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    /// TTL in queue for this build. If provided and the build is enqueued longer than this value,
    /// the build will expire and the build status will be `EXPIRED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_ttl: Option<String>,
    /// Artifacts produced by the build that should be uploaded upon successful completion of all build steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Artifacts>,
    /// Google Cloud Storage bucket where logs should be written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logs_bucket: Option<String>,
    /// Output only. A permanent fixed identifier for source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_provenance: Option<SourceProvenance>,
    /// Output only. The ID of the `BuildTrigger` that triggered this build, if it was triggered automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_trigger_id: Option<String>,
    /// Special options for this build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<BuildOptions>,
    /// Output only. URL to logs for this build in Google Cloud Console.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_url: Option<String>,
    /// Substitutions data for `Build` resource.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub substitutions: HashMap<String, String>,
    /// Tags for annotation of a `Build`. These are not docker tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Secrets to decrypt using Cloud Key Management Service.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub secrets: Vec<Secret>,
    /// Output only. Stores timing information for phases of the build.
    /// Valid keys are `BUILD`, `FETCHSOURCE` and `PUSH`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub timing: HashMap<String, TimeSpan>,
    /// IAM service account whose credentials will be used at build runtime.
    /// Must be of the format `projects/{PROJECT_ID}/serviceAccounts/{ACCOUNT}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account: Option<String>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(Build);

/// Possible status of a build or build step.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildStatus {
    /// Status of the build is unknown.
    #[default]
    StatusUnknown,
    /// Build has been created and is pending execution and queuing.
    Pending,
    /// Build or step is queued; work has not yet begun.
    Queued,
    /// Build or step is being executed.
    Working,
    /// Build or step finished successfully.
    Success,
    /// Build or step failed to complete successfully.
    Failure,
    /// Build or step failed due to an internal cause.
    InternalError,
    /// Build or step took longer than was allowed.
    Timeout,
    /// Build or step was canceled by a user.
    Cancelled,
    /// Build was enqueued for longer than the value of `queue_ttl`.
    Expired,
    /// A value not known to this version of the client.
    #[serde(other)]
    Unknown,
}

impl BuildStatus {
    /// Returns `true` when the build will not change its status anymore.
    pub fn is_final(&self) -> bool {
        !matches!(
            self,
            BuildStatus::StatusUnknown
                | BuildStatus::Pending
                | BuildStatus::Queued
                | BuildStatus::Working
                | BuildStatus::Unknown
        )
    }
}

/// A step in the build pipeline.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildStep {
    /// Required. The name of the container image that will run this particular build step.
    pub name: String,
    /// A list of environment variable definitions to be used when running a step, in the form `KEY=VALUE`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<String>,
    /// A list of arguments that will be presented to the step when it is started.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    /// Working directory to use when running this step's container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    /// Unique identifier for this build step, used in `wait_for` to reference this build step as a dependency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The ID(s) of the step(s) that this build step depends on.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub wait_for: Vec<String>,
    /// Entrypoint to be used instead of the build step image's default entrypoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrypoint: Option<String>,
    /// A list of environment variables which are encrypted using a Cloud Key Management Service crypto key.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub secret_env: Vec<String>,
    /// List of volumes to mount into the build step.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<Volume>,
    /// Output only. Stores timing information for executing this build step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<TimeSpan>,
    /// Output only. Stores timing information for pulling this build step's builder image only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_timing: Option<TimeSpan>,
    /// Time limit for executing this build step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    /// Output only. Status of the build step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BuildStatus>,
}

/// Location of the source in a supported storage service.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Source {
    /// If provided, get the source from this location in Google Cloud Storage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_source: Option<StorageSource>,
    /// If provided, get the source from this location in a Cloud Source Repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_source: Option<RepoSource>,
}

/// Location of the source in an archive file in Google Cloud Storage.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageSource {
    /// Google Cloud Storage bucket containing the source.
    pub bucket: String,
    /// Google Cloud Storage object containing the source. This object must be a gzipped archive file (`.tar.gz`).
    pub object: String,
    /// Google Cloud Storage generation for the object. If the generation is omitted, the latest generation will be used.
    #[serde(
        default,
        deserialize_with = "google_cloud_gax::http::from_str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub generation: Option<i64>,
}

/// Location of the source in a Google Cloud Source Repository.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RepoSource {
    /// ID of the project that owns the Cloud Source Repository.
    /// If omitted, the project ID requesting the build is assumed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Name of the Cloud Source Repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_name: Option<String>,
    /// Regex matching branches to build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
    /// Regex matching tags to build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,
    /// Explicit commit SHA to build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_sha: Option<String>,
    /// Directory, relative to the source root, in which to run the build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    /// Only trigger a build if the revision regex does NOT match the revision regex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invert_regex: Option<bool>,
    /// Substitutions to use in a triggered build. Should only be used with `RunBuildTrigger`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub substitutions: HashMap<String, String>,
}

/// Provenance of the source.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceProvenance {
    /// A copy of the build's `source.storage_source`, if exists, with any generations resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_storage_source: Option<StorageSource>,
    /// A copy of the build's `source.repo_source`, if exists, with any revisions resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_repo_source: Option<RepoSource>,
}

/// Artifacts created by the build pipeline.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Results {
    /// Container images that were built as a part of the build.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<BuiltImage>,
    /// List of build step digests, in the order corresponding to build step indices.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub build_step_images: Vec<String>,
    /// Path to the artifact manifest. Only populated when artifacts are uploaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_manifest: Option<String>,
    /// Number of artifacts uploaded. Only populated when artifacts are uploaded.
    #[serde(
        default,
        deserialize_with = "google_cloud_gax::http::from_str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub num_artifacts: Option<i64>,
    /// List of build step outputs, produced by builder images, in the order corresponding to build step indices.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub build_step_outputs: Vec<String>,
    /// Time to push all non-container artifacts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_timing: Option<TimeSpan>,
}

/// An image built by the pipeline.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct BuiltImage {
    /// Name used to push the container image to Google Container Registry, as presented to `docker push`.
    pub name: String,
    /// Docker Registry 2.0 digest.
    pub digest: String,
    /// Output only. Stores timing information for pushing the specified image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_timing: Option<TimeSpan>,
}

/// Start and end times for a build execution phase.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeSpan {
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<OffsetDateTime>,
}

/// Optional arguments to enable specific features of builds.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildOptions {
    /// Requested hash for SourceProvenance.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub source_provenance_hash: Vec<String>,
    /// Requested verifiability options: `NOT_VERIFIED` or `VERIFIED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_verify_option: Option<String>,
    /// Compute Engine machine type on which to run the build, for example `E2_HIGHCPU_8`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_type: Option<String>,
    /// Requested disk size for the VM that runs the build.
    #[serde(
        default,
        deserialize_with = "google_cloud_gax::http::from_str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub disk_size_gb: Option<i64>,
    /// Option to specify behavior when there is an error in the substitution checks:
    /// `MUST_MATCH` or `ALLOW_LOOSE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substitution_option: Option<String>,
    /// Option to specify whether or not to apply bash style string operations to the substitutions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_substitutions: Option<bool>,
    /// Option to define build log streaming behavior to Google Cloud Storage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_streaming_option: Option<String>,
    /// Option to specify the logging mode, for example `CLOUD_LOGGING_ONLY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<String>,
    /// A list of global environment variable definitions that will exist for all build steps.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<String>,
    /// A list of global environment variables, which are encrypted using a Cloud Key Management Service crypto key.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub secret_env: Vec<String>,
    /// Global list of volumes to mount for all build steps.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<Volume>,
}

/// Volume describes a Docker container volume which is mounted into build steps.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Volume {
    /// Name of the volume to mount.
    pub name: String,
    /// Path at which to mount the volume. Paths must be absolute.
    pub path: String,
}

/// Artifacts produced by a build that should be uploaded upon successful completion of all build steps.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Artifacts {
    /// A list of images to be pushed upon the successful completion of all build steps.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    /// A list of objects to be uploaded to Cloud Storage upon successful completion of all build steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objects: Option<ArtifactObjects>,
}

/// Files in the workspace to upload to Cloud Storage upon successful completion of all build steps.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ArtifactObjects {
    /// Cloud Storage bucket and optional object path, in the form `gs://bucket/path/to/somewhere/`.
    pub location: String,
    /// Path globs used to match files in the build's workspace.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<String>,
    /// Output only. Stores timing information for pushing all artifact objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<TimeSpan>,
}

/// Pairs a set of secret environment variables containing encrypted values with the Cloud KMS key to use to
/// decrypt the value.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Secret {
    /// Cloud KMS key name to use to decrypt these envs.
    pub kms_key_name: String,
    /// Map of environment variable name to its base64 encrypted value.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub secret_env: HashMap<String, String>,
}

/// Metadata of a build operation. Decode it with `Operation::metadata_as`.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildOperationMetadata {
    /// The build that the operation is tracking.
    pub build: Build,
}
