use clap::ArgMatches;

use super::{ColdStorage, Config, ToolParams};

impl Config {
    pub fn from_matches(m: &ArgMatches) -> anyhow::Result<Self> {
        let fasta = m
            .get_one::<String>("fasta")
            .expect("Missing fasta") // Should be enforced by clap
            .to_owned();

        let known_vcf: Vec<_> = m
            .get_many::<String>("known_vcf")
            .expect("Missing known vcf files")
            .map(|s| s.to_owned())
            .collect();

        let design = m
            .get_one::<String>("design")
            .expect("Missing default for design")
            .to_owned();
        let workdir = m
            .get_one::<String>("workdir")
            .expect("Missing default for workdir")
            .to_owned();
        let threads = *m.try_get_one::<u64>("threads")?.expect("Missing default for threads");
        let singularity = m
            .get_one::<String>("singularity")
            .expect("Missing default for singularity")
            .to_owned();

        let cold_storage = match m.get_many::<String>("cold_storage") {
            Some(v) => ColdStorage::Mounts(v.map(|s| s.to_owned()).collect()),
            None => ColdStorage::None,
        };

        let no_quality_control = m.get_flag("no_quality_control");
        let no_gatk = m.get_flag("no_gatk");

        let tool_params = tool_params_from_matches(m)?;

        Ok(Self {
            fasta,
            known_vcf,
            design,
            workdir,
            threads,
            singularity,
            cold_storage,
            no_quality_control,
            no_gatk,
            tool_params,
        })
    }
}

fn tool_params_from_matches(m: &ArgMatches) -> anyhow::Result<ToolParams> {
    // Options with an empty default have no default registered with clap
    let extra = |id: &str| -> anyhow::Result<String> {
        Ok(m.try_get_one::<String>(id)?.cloned().unwrap_or_default())
    };

    Ok(ToolParams {
        copy_extra: extra("copy_extra")?,
        bwa_index_extra: extra("bwa_index_extra")?,
        samtools_fixmate_extra: extra("samtools_fixmate_extra")?,
        bwa_map_extra: extra("bwa_map_extra")?,
        picard_sort_sam_extra: extra("picard_sort_sam_extra")?,
        picard_group_extra: extra("picard_group_extra")?,
        picard_dedup_extra: extra("picard_dedup_extra")?,
        picard_isize_extra: extra("picard_isize_extra")?,
        gatk_bqsr_extra: extra("gatk_bqsr_extra")?,
        picard_summary_extra: extra("picard_summary_extra")?,
    })
}
