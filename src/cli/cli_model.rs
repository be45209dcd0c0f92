use std::ffi::OsStr;

use clap::{
    Arg, ArgAction, Command, command,
    builder::{StringValueParser, TypedValueParser},
    error::ErrorKind,
    value_parser,
};

use crate::log_utils::LogLevel;

const DEFAULT_SINGULARITY: &str = "docker://continuumio/miniconda3:4.4.10";

/// Extra parameter options for the individual pipeline tools as (id, default, help).
/// The id is used both as the long option name and as the key in the params section
pub(super) const TOOL_EXTRAS: [(&str, &str, &str); 10] = [
    ("copy_extra", "--verbose", "Extra parameters for bash copy"),
    ("bwa_index_extra", "", "Extra parameters for bwa index"),
    ("samtools_fixmate_extra", "-c -m", "Extra parameters for samtools fixmate"),
    ("bwa_map_extra", "-T 20 -M", "Extra parameters for bwa mem"),
    ("picard_sort_sam_extra", "", "Extra parameters for picard sort sam"),
    (
        "picard_group_extra",
        "RGLB=standard RGPL=novaseq RGPU={sample} RGSM={sample}",
        "Extra parameters for picard read groups",
    ),
    (
        "picard_dedup_extra",
        "REMOVE_DUPLICATES=true",
        "Extra parameters for Picard deduplicate",
    ),
    (
        "picard_isize_extra",
        "METRIC_ACCUMULATION_LEVEL=SAMPLE",
        "Extra parameters for Picard insert size stats",
    ),
    ("gatk_bqsr_extra", "", "Extra parameters for GATK BQSR"),
    ("picard_summary_extra", "", "Extra parameters for Picard summary"),
];

/// Parser for the tool parameter options.
///
/// These options take values starting with a hyphen, so a value that is one of our own
/// options (e.g. `--copy_extra --no_gatk`) is rejected rather than silently swallowed
#[derive(Clone)]
struct ToolParamsParser;

impl TypedValueParser for ToolParamsParser {
    type Value = String;

    fn parse_ref(
        &self,
        cmd: &Command,
        arg: Option<&Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, clap::Error> {
        let s = StringValueParser::new().parse_ref(cmd, arg, value)?;
        if names_own_option(cmd, &s) {
            let name = arg
                .and_then(|a| a.get_long())
                .unwrap_or("tool parameter");
            return Err(clap::Error::raw(
                ErrorKind::InvalidValue,
                format!(
                    "value '{}' for '--{}' is an option of this command; \
                     did you forget the parameters for '--{}'?\n",
                    s, name, name
                ),
            )
            .with_cmd(cmd));
        }
        Ok(s)
    }
}

/// Single tokens (no whitespace) matching one of the long or short options of `cmd`
fn names_own_option(cmd: &Command, s: &str) -> bool {
    if s.contains(char::is_whitespace) {
        false
    } else if let Some(long) = s.strip_prefix("--") {
        let name = long.split('=').next().unwrap_or(long);
        cmd.get_arguments().any(|a| a.get_long() == Some(name))
    } else if let Some(short) = s.strip_prefix('-') {
        short
            .chars()
            .next()
            .is_some_and(|c| cmd.get_arguments().any(|a| a.get_short() == Some(c)))
    } else {
        false
    }
}

fn tool_extra_arg(id: &'static str, default: &'static str, help: &'static str) -> Arg {
    let a = Arg::new(id)
        .long(id)
        .value_parser(ToolParamsParser)
        .allow_hyphen_values(true)
        .value_name("PARAMS")
        .help(help);
    // Empty defaults are filled in by Config::from_matches
    if default.is_empty() {
        a
    } else {
        a.default_value(default)
    }
}

pub(super) fn cli_model() -> Command {
    let cmd = command!()
    .about("Build your config file with this script")
    .after_help("This script does not perform any magic. Check the config file.")
    .arg(
        Arg::new("timestamp")
            .short('X')
            .long("timestamp")
            .value_parser(value_parser!(stderrlog::Timestamp))
            .value_name("GRANULARITY")
            .default_value("none")
            .help("Prepend log entries with a timestamp"),
    )
    .arg(
        Arg::new("loglevel")
            .short('l')
            .long("loglevel")
            .value_name("LOGLEVEL")
            .value_parser(value_parser!(LogLevel))
            .ignore_case(true)
            .default_value("warn")
            .help("Set log level"),
    )
    .arg(
        Arg::new("quiet")
            .action(ArgAction::SetTrue)
            .long("quiet")
            .conflicts_with("loglevel")
            .help("Silence all output"),
    )
    .arg(
        Arg::new("fasta")
            .value_parser(value_parser!(String))
            .required(true)
            .value_name("FASTA")
            .help("Path to the genome sequence file"),
    )
    .arg(
        Arg::new("known_vcf")
            .value_parser(value_parser!(String))
            .required(true)
            .num_args(1..)
            .value_name("KNOWN_VCF")
            .help("Space separated list of paths to known vcf files"),
    )
    .next_help_heading("Input/Output")
    .arg(
        Arg::new("design")
            .short('d')
            .long("design")
            .value_parser(value_parser!(String))
            .value_name("PATH")
            .default_value("design.tsv")
            .help("Path to the design file"),
    )
    .arg(
        Arg::new("workdir")
            .short('w')
            .long("workdir")
            .value_parser(value_parser!(String))
            .value_name("PATH")
            .default_value(".")
            .help("Path to raw data directory"),
    )
    .arg(
        Arg::new("threads")
            .short('t')
            .long("threads")
            .value_parser(value_parser!(u64).range(1..))
            .value_name("INT")
            .default_value("1")
            .help("Maximum number of threads used"),
    )
    .arg(
        Arg::new("singularity")
            .short('s')
            .long("singularity")
            .value_parser(value_parser!(String))
            .value_name("IMAGE")
            .default_value(DEFAULT_SINGULARITY)
            .help("Name of the docker/singularity image"),
    )
    .arg(
        Arg::new("cold_storage")
            .long("cold_storage")
            .value_parser(value_parser!(String))
            .num_args(1..)
            .value_name("PATH")
            .help("Path to cold storage mount points [default: None]"),
    )
    .next_help_heading("Workflow")
    .arg(
        Arg::new("no_quality_control")
            .long("no_quality_control")
            .action(ArgAction::SetTrue)
            .help("Do not perform any additional quality controls"),
    )
    .arg(
        Arg::new("no_gatk")
            .long("no_gatk")
            .action(ArgAction::SetTrue)
            .help("Do not perform any GATK recalibration"),
    )
    .next_help_heading("Tool parameters");

    TOOL_EXTRAS
        .into_iter()
        .fold(cmd, |c, (id, default, help)| c.arg(tool_extra_arg(id, default, help)))
}
