pub mod create;
pub mod delete;
pub mod get;
pub mod patch;
pub mod search;

use std::collections::HashMap;

use google_cloud_gax::http::ServerResponse;
use google_cloud_gax::impl_response_meta;
use serde_json::Value;

/// A variant represents a change in DNA sequence relative to a reference sequence.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Variant {
    /// The ID of the variant set this variant belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_set_id: Option<String>,
    /// The server-generated variant ID, unique across all variants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Names for the variant, for example a RefSNP ID.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,
    /// The date this variant was created, in milliseconds from the epoch.
    #[serde(
        default,
        deserialize_with = "google_cloud_gax::http::from_str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<i64>,
    /// The reference on which this variant occurs. (such as `chr20` or `X`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_name: Option<String>,
    /// The position at which this variant occurs (0-based).
    #[serde(
        default,
        deserialize_with = "google_cloud_gax::http::from_str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start: Option<i64>,
    /// The end position (0-based) of this variant. This corresponds to the first base after the last base in the reference allele.
    #[serde(
        default,
        deserialize_with = "google_cloud_gax::http::from_str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end: Option<i64>,
    /// The reference bases for this variant. They start at the given position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_bases: Option<String>,
    /// The bases that appear instead of the reference bases.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternate_bases: Vec<String>,
    /// A measure of how likely this variant is to be real. A higher value is better.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<f64>,
    /// A list of filters (normally quality filters) this variant has failed. `PASS` indicates this variant has passed all filters.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter: Vec<String>,
    /// A map of additional variant information. This must be of the form map<string, string[]> (string key mapping to a list of string values).
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub info: HashMap<String, Vec<Value>>,
    /// The variant calls for this particular variant. Each one represents the determination of genotype
    /// with respect to this variant.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub calls: Vec<VariantCall>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(Variant);

/// A call represents the determination of genotype with respect to a particular variant.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct VariantCall {
    /// The ID of the call set this variant call belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_set_id: Option<String>,
    /// The name of the call set this variant call belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_set_name: Option<String>,
    /// The genotype of this variant call. Each value represents either the value of the `referenceBases`
    /// field or a 1-based index into `alternateBases`. If a variant had a `referenceBases` value of `T`
    /// and an `alternateBases` value of `["A", "C"]`, and the `genotype` was `[2, 1]`, that would mean
    /// the call represented the heterozygous value `CA` for this variant. A `-1` means no call.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genotype: Vec<i32>,
    /// If this field is present, this variant call's genotype ordering implies the phase of the bases
    /// and is consistent with any other variant calls in the same reference sequence which have the same
    /// phaseset value. If the genotype data was phased but no phase set was specified this field will be set to `*`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phaseset: Option<String>,
    /// The genotype likelihoods for this variant call. Each array entry represents how likely a specific
    /// genotype is for this call.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genotype_likelihood: Vec<f64>,
    /// A map of additional variant call information.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub info: HashMap<String, Vec<Value>>,
}
