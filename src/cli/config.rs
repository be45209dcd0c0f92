mod getters;
mod mk_config;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Value written for cold_storage when no mount points are given
pub const COLD_STORAGE_NONE: &str = "None";

/// Cold storage mount points
///
/// When no mount points are given the pipeline expects the literal string `None`
/// rather than an empty list, so this is what gets written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColdStorage {
    None,
    Mounts(Vec<String>),
}

impl Serialize for ColdStorage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::None => serializer.serialize_str(COLD_STORAGE_NONE),
            Self::Mounts(v) => v.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ColdStorage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Sentinel(String),
            Mounts(Vec<String>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Sentinel(s) if s == COLD_STORAGE_NONE => Ok(Self::None),
            Repr::Sentinel(s) => Err(serde::de::Error::custom(format!(
                "unexpected value for cold_storage: {}",
                s
            ))),
            Repr::Mounts(v) => Ok(Self::Mounts(v)),
        }
    }
}

/// Extra command line parameters passed on to the individual pipeline tools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolParams {
    pub copy_extra: String,
    pub bwa_index_extra: String,
    pub samtools_fixmate_extra: String,
    pub bwa_map_extra: String,
    pub picard_sort_sam_extra: String,
    pub picard_group_extra: String,
    pub picard_dedup_extra: String,
    pub picard_isize_extra: String,
    pub gatk_bqsr_extra: String,
    pub picard_summary_extra: String,
}

#[derive(Debug)]
pub struct Config {
    fasta: String,
    known_vcf: Vec<String>,
    design: String,
    workdir: String,
    threads: u64,
    singularity: String,
    cold_storage: ColdStorage,
    no_quality_control: bool,
    no_gatk: bool,
    tool_params: ToolParams,
}
