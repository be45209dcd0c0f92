use serde::{Deserialize, Serialize};

use crate::cli::{ColdStorage, Config, ToolParams};

/// Reference genome and known variant sites
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefFiles {
    pub fasta: String,
    pub known: Vec<String>,
}

/// Optional pipeline stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    pub fastqc: bool,
    pub multiqc: bool,
    pub picard: bool,
    pub gatk: bool,
}

impl Workflow {
    /// FastQC and MultiQC follow the quality control switch.  Picard is needed
    /// by both the quality control and the GATK recalibration stages
    pub fn new(quality_control: bool, gatk: bool) -> Self {
        Self {
            fastqc: quality_control,
            multiqc: quality_control,
            picard: quality_control || gatk,
            gatk,
        }
    }
}

/// The configuration document read by the mapping pipeline.
///
/// Field order here is the order of the keys in the output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRecord {
    pub design: String,
    pub workdir: String,
    pub threads: u64,
    pub singularity_docker_image: String,
    pub cold_storage: ColdStorage,
    #[serde(rename = "ref")]
    pub reference: RefFiles,
    pub workflow: Workflow,
    pub params: ToolParams,
}

impl ConfigRecord {
    pub fn from_config(cfg: &Config) -> Self {
        let workflow = Workflow::new(cfg.quality_control(), cfg.gatk());
        debug!(
            "Workflow: fastqc={}, multiqc={}, picard={}, gatk={}",
            workflow.fastqc, workflow.multiqc, workflow.picard, workflow.gatk
        );
        Self {
            design: cfg.design().to_owned(),
            workdir: cfg.workdir().to_owned(),
            threads: cfg.threads(),
            singularity_docker_image: cfg.singularity().to_owned(),
            cold_storage: cfg.cold_storage().clone(),
            reference: RefFiles {
                fasta: cfg.fasta().to_owned(),
                known: cfg.known_vcf().to_vec(),
            },
            workflow,
            params: cfg.tool_params().clone(),
        }
    }
}
