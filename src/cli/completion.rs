use std::path::PathBuf;

use clap::CommandFactory;

use crate::clap_model;
use crate::config::Config;

use super::Cli;

pub(super) fn generate_self(config: &Config, output_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    let root = clap_model::from_command(&cmd);

    super::emit(config, &root, &bin_name, output_dir.as_deref())
}
