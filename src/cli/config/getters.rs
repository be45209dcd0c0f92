use super::{ColdStorage, Config, ToolParams};

impl Config {
    pub fn fasta(&self) -> &str {
        &self.fasta
    }

    pub fn known_vcf(&self) -> &[String] {
        &self.known_vcf
    }

    pub fn design(&self) -> &str {
        &self.design
    }

    pub fn workdir(&self) -> &str {
        &self.workdir
    }

    pub fn threads(&self) -> u64 {
        self.threads
    }

    pub fn singularity(&self) -> &str {
        &self.singularity
    }

    pub fn cold_storage(&self) -> &ColdStorage {
        &self.cold_storage
    }

    pub fn quality_control(&self) -> bool {
        !self.no_quality_control
    }

    pub fn gatk(&self) -> bool {
        !self.no_gatk
    }

    pub fn tool_params(&self) -> &ToolParams {
        &self.tool_params
    }
}
