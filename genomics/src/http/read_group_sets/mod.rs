pub mod delete;
pub mod get;
pub mod search;

use std::collections::HashMap;

use google_cloud_gax::http::ServerResponse;
use google_cloud_gax::impl_response_meta;
use serde_json::Value;

/// A read group set is a logical collection of read groups, which are collections of reads produced
/// by a sequencer. A read group set typically models reads corresponding to one sample, sequenced one
/// way, and aligned one way.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ReadGroupSet {
    /// The server-generated read group set ID, unique for all read group sets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The dataset to which this read group set belongs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<String>,
    /// The reference set to which the reads in this read group set are aligned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_set_id: Option<String>,
    /// The read group set name. By default this will be initialized to the sample name of the sequenced
    /// data contained in this set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The filename of the original source file for this read group set, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// The read groups in this set.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub read_groups: Vec<ReadGroup>,
    /// A map of additional read group set information.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub info: HashMap<String, Vec<Value>>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(ReadGroupSet);

/// A read group is all the data that's processed the same way by the sequencer.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ReadGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<String>,
    /// The read group name. This corresponds to the @RG ID field in the SAM spec.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// A client-supplied sample identifier for the reads in this read group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiment: Option<Experiment>,
    /// The predicted insert size of this read group. The insert size is the length the sequenced DNA
    /// fragment from end-to-end, not including the adapters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_insert_size: Option<i32>,
    /// The programs used to generate this read group. Programs are always identical for all read groups
    /// within a read group set.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub programs: Vec<Program>,
    /// The reference set the reads in this read group are aligned to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_set_id: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub info: HashMap<String, Vec<Value>>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Experiment {
    /// A client-supplied library identifier; a library is a collection of DNA fragments which have been
    /// prepared for sequencing from a sample.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library_id: Option<String>,
    /// The platform unit used as part of this experiment, for example flowcell-barcode.lane for Illumina
    /// or slide for SOLiD. Corresponds to the @RG PU field in the SAM spec.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_unit: Option<String>,
    /// The sequencing center used as part of this experiment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequencing_center: Option<String>,
    /// The instrument model used as part of this experiment. This maps to sequencing technology in the SAM spec.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument_model: Option<String>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Program {
    /// The command line used to run this program.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_line: Option<String>,
    /// The user specified locally unique ID of the program. Used along with `prevProgramId` to define an
    /// ordering between programs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The display name of the program. This is typically the colloquial name of the tool used, for
    /// example 'bwa' or 'picard'.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The ID of the program run before this one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_program_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
