use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::record::ConfigRecord;

pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Write the configuration record to `config.yaml` in `dir`, replacing any existing file.
/// The directory must already exist.
pub fn write_config<P: AsRef<Path>>(rec: &ConfigRecord, dir: P) -> anyhow::Result<PathBuf> {
    let path = dir.as_ref().join(CONFIG_FILE_NAME);
    info!("Writing configuration to {}", path.display());

    let mut wrt = BufWriter::new(
        File::create(&path)
            .with_context(|| format!("Could not open {} for output", path.display()))?,
    );
    serde_yaml::to_writer(&mut wrt, rec)
        .with_context(|| format!("Error writing configuration to {}", path.display()))?;
    wrt.flush()
        .with_context(|| format!("Error writing configuration to {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{config_from_args, try_matches, ColdStorage};
    use rstest::rstest;
    use serde_yaml::Value;
    use std::io::BufReader;
    use tempfile::tempdir;

    fn read_config<P: AsRef<Path>>(path: P) -> anyhow::Result<ConfigRecord> {
        let path = path.as_ref();
        let rdr = BufReader::new(File::open(path)?);
        serde_yaml::from_reader(rdr)
            .with_context(|| format!("Could not parse configuration from {}", path.display()))
    }

    fn build(args: &[&str]) -> ConfigRecord {
        let cfg = config_from_args(args.iter().copied()).unwrap();
        ConfigRecord::from_config(&cfg)
    }

    #[rstest]
    fn written_file_reads_back() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let rec = build(&[
            "wes-config",
            "--cold_storage",
            "/mnt/cold1",
            "/mnt/cold2",
            "--no_gatk",
            "--",
            "genome.fa",
            "a.vcf",
            "b.vcf",
        ]);

        let path = write_config(&rec, dir.path()).unwrap();
        assert_eq!(path, dir.path().join("config.yaml"));

        let rec1 = read_config(&path).unwrap();
        assert_eq!(rec, rec1);
    }

    #[rstest]
    fn default_record_reads_back() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let rec = build(&["wes-config", "genome.fa", "sites.vcf"]);
        let path = write_config(&rec, dir.path()).unwrap();
        assert_eq!(read_config(path).unwrap(), rec);
    }

    #[rstest]
    fn output_layout() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let rec = build(&["wes-config", "genome.fa", "sites.vcf", "indels.vcf"]);
        let path = write_config(&rec, dir.path()).unwrap();
        let s = std::fs::read_to_string(path).unwrap();

        // Block style only
        assert!(!s.contains('['), "unexpected flow sequence in:\n{}", s);
        assert!(!s.contains("{ "), "unexpected flow mapping in:\n{}", s);
        assert!(s.contains("ref:\n  fasta: genome.fa\n  known:\n"));
        assert!(s.contains("- sites.vcf\n"));
        assert!(s.contains("- indels.vcf\n"));

        let keys: Vec<_> = s
            .lines()
            .filter(|l| !l.starts_with(' ') && !l.starts_with('-'))
            .filter_map(|l| l.split(':').next())
            .collect();
        assert_eq!(
            keys,
            vec![
                "design",
                "workdir",
                "threads",
                "singularity_docker_image",
                "cold_storage",
                "ref",
                "workflow",
                "params"
            ]
        );

        let v: Value = serde_yaml::from_str(&s).unwrap();
        assert_eq!(v["cold_storage"], Value::String("None".to_string()));
        assert_eq!(v["threads"], Value::from(1u64));
        assert_eq!(v["workflow"]["picard"], Value::Bool(true));
        assert_eq!(
            v["params"]["copy_extra"],
            Value::String("--verbose".to_string())
        );
        assert_eq!(v["params"]["bwa_index_extra"], Value::String(String::new()));
    }

    #[rstest]
    fn cold_storage_written_as_sequence() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let rec = build(&[
            "wes-config",
            "genome.fa",
            "sites.vcf",
            "--cold_storage",
            "/mnt/archive",
        ]);
        assert_eq!(
            rec.cold_storage,
            ColdStorage::Mounts(vec!["/mnt/archive".to_string()])
        );
        let path = write_config(&rec, dir.path()).unwrap();
        let v: Value = serde_yaml::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        let seq = v["cold_storage"].as_sequence().expect("Expected a sequence");
        assert_eq!(seq.len(), 1);
        assert_eq!(seq[0], Value::String("/mnt/archive".to_string()));
    }

    #[rstest]
    fn explicit_none_cold_storage_is_a_mount() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let rec = build(&["wes-config", "--cold_storage", "None", "--", "genome.fa", "sites.vcf"]);
        assert_eq!(rec.cold_storage, ColdStorage::Mounts(vec!["None".to_string()]));

        let path = write_config(&rec, dir.path()).unwrap();
        let s = std::fs::read_to_string(&path).unwrap();
        assert!(s.contains("cold_storage:\n- None\n"), "unexpected layout:\n{}", s);
        assert_eq!(read_config(&path).unwrap(), rec);
    }

    #[rstest]
    fn existing_file_is_replaced() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "stale: true\nlots of old content that should vanish\n").unwrap();

        let rec = build(&["wes-config", "-t", "4", "genome.fa", "sites.vcf"]);
        write_config(&rec, dir.path()).unwrap();
        let rec1 = read_config(&path).unwrap();
        assert_eq!(rec1.threads, 4);
        assert!(!std::fs::read_to_string(&path).unwrap().contains("stale"));
    }

    #[rstest]
    fn missing_workdir_is_an_error() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let missing = dir.path().join("does_not_exist");
        let rec = build(&["wes-config", "genome.fa", "sites.vcf"]);

        let e = write_config(&rec, &missing).unwrap_err();
        assert!(format!("{:#}", e).contains("does_not_exist"));
        assert!(!missing.exists());
    }

    #[rstest]
    fn missing_fasta_writes_nothing() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let workdir = dir.path().to_str().unwrap();

        let e = try_matches(["wes-config", "-w", workdir]).unwrap_err();
        assert_eq!(e.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        assert!(!dir.path().join(CONFIG_FILE_NAME).exists());
    }
}
