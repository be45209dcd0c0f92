#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;

mod cli;
mod log_utils;
mod record;
mod write_config;

use record::ConfigRecord;

fn main() -> anyhow::Result<()> {
    let cfg = cli::handle_cli()?;
    debug!("Options read in - building configuration");
    let rec = ConfigRecord::from_config(&cfg);
    write_config::write_config(&rec, cfg.workdir())?;
    Ok(())
}
