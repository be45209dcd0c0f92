mod cli_model;
mod config;

pub use config::{ColdStorage, Config, ToolParams};

pub fn handle_cli() -> anyhow::Result<Config> {
    let m = cli_model::cli_model().get_matches();
    super::log_utils::init_log(&m)?;
    trace!("Command line: {:?}", m);
    Config::from_matches(&m)
}

#[cfg(test)]
pub(crate) fn config_from_args<I, T>(args: I) -> anyhow::Result<Config>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let m = cli_model::cli_model().try_get_matches_from(args)?;
    Config::from_matches(&m)
}

#[cfg(test)]
pub(crate) fn try_matches<I, T>(args: I) -> Result<clap::ArgMatches, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    cli_model::cli_model().try_get_matches_from(args)
}
