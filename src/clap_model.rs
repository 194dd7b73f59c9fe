//! Derive a `CommandNode` tree from a `clap::Command` definition.

use clap::{Arg, Command};

use crate::spec::{CommandNode, Flag};

/// Convert a clap command (and all its subcommands) into a command tree.
///
/// The command is built first so clap's generated `--help`/`--version` flags
/// and `help` subcommand show up the same way they do at runtime.
pub fn from_command(cmd: &Command) -> CommandNode {
    let mut cmd = cmd.clone();
    cmd.build();
    convert(&cmd)
}

fn convert(cmd: &Command) -> CommandNode {
    let help = cmd
        .get_about()
        .or_else(|| cmd.get_long_about())
        .map(|s| s.to_string())
        .unwrap_or_default();

    CommandNode {
        name: cmd.get_name().to_string(),
        help,
        hidden: cmd.is_hide_set(),
        flags: cmd.get_arguments().filter_map(convert_arg).collect(),
        children: cmd.get_subcommands().map(convert).collect(),
    }
}

fn convert_arg(arg: &Arg) -> Option<Flag> {
    // Positionals and short-only switches have no `--name` spelling.
    let long = arg.get_long()?;

    let help = arg
        .get_help()
        .or_else(|| arg.get_long_help())
        .map(|s| s.to_string())
        .unwrap_or_default();

    let is_bool = !arg.get_action().takes_values();
    let enum_values = if is_bool {
        Vec::new()
    } else {
        arg.get_possible_values()
            .into_iter()
            .filter(|v| !v.is_hide_set())
            .map(|v| v.get_name().to_string())
            .collect()
    };

    Some(Flag {
        name: long.to_string(),
        short: arg.get_short(),
        help,
        is_bool,
        hidden: arg.is_hide_set(),
        enum_values,
    })
}
