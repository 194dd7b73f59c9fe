//! Render a `CommandNode` tree as a zsh `_arguments`-style completion script.
//!
//! One shell function is emitted per visible command, children before their
//! parent, so every dispatch branch calls a function defined earlier in the
//! file.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::spec::CommandNode;

mod filesystem;
pub mod fpath;
mod format;

/// Tool name written into the `# generated by` header line.
pub const DEFAULT_TOOL: &str = "zsh-compgen";

#[derive(Debug, Clone)]
pub struct Generator {
    tool: String,
}

impl Default for Generator {
    fn default() -> Self {
        Self::with_tool(DEFAULT_TOOL)
    }
}

impl Generator {
    pub fn with_tool(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }

    /// Build the whole script in memory.
    pub fn render(&self, root: &CommandNode, program_name: &str) -> String {
        let mut buf = String::new();
        buf.push_str(&format!(
            "#compdef {program_name}\n# zsh completion for {program_name}\n# generated by {}\n\n",
            self.tool
        ));
        self.write_command(&mut buf, root, None);
        buf
    }

    /// Render the script and write it to `out` in one go. Write errors are
    /// returned as-is; anything already written is left in the sink.
    pub fn generate<W: Write + ?Sized>(
        &self,
        root: &CommandNode,
        program_name: &str,
        out: &mut W,
    ) -> io::Result<()> {
        let script = self.render(root, program_name);
        out.write_all(script.as_bytes())?;
        out.flush()
    }

    pub fn write_completion_file(
        &self,
        root: &CommandNode,
        program_name: &str,
        dir: &Path,
    ) -> io::Result<PathBuf> {
        filesystem::write_completion_file(self, root, program_name, dir)
    }

    fn write_command(&self, buf: &mut String, cmd: &CommandNode, parent: Option<&str>) {
        let name = function_name(parent, &cmd.name);

        for child in &cmd.children {
            if child.hidden {
                tracing::trace!("Skipping hidden command {name} {}", child.name);
                continue;
            }
            self.write_command(buf, child, Some(name.as_str()));
        }

        let has_commands = cmd.has_visible_children();

        buf.push_str(&format!("_{name}() {{\n"));
        if has_commands {
            buf.push_str("    local line state\n");
        }

        buf.push_str("    _arguments -C \\\n");
        let mut entries = Vec::new();
        for flag in &cmd.flags {
            if flag.hidden {
                tracing::trace!("Skipping hidden flag --{} of {name}", flag.name);
                continue;
            }
            entries.push(format::format_flag(flag));
        }
        if has_commands {
            entries.push("\"1: :->cmds\"".to_string());
            entries.push("\"*::arg:->args\"".to_string());
        }
        let entries: Vec<String> = entries.iter().map(|e| format!("        {e}")).collect();
        buf.push_str(&entries.join(" \\\n"));
        buf.push('\n');

        if has_commands {
            write_dispatch(buf, cmd, &name);
            buf.push('\n');
        }

        buf.push_str("}\n\n");
        tracing::debug!("Generated _{name} ({} entries)", entries.len());
    }
}

fn write_dispatch(buf: &mut String, cmd: &CommandNode, name: &str) {
    buf.push_str("    case \"$state\" in\n");
    buf.push_str("        cmds)\n");
    buf.push_str(&format!("            _values \"{name} command\" \\\n"));
    let values: Vec<String> = cmd
        .visible_children()
        .map(|c| format!("                {}", format::format_command_value(c)))
        .collect();
    buf.push_str(&values.join(" \\\n"));
    buf.push('\n');
    buf.push_str("            ;;\n");
    buf.push_str("        args)\n");
    buf.push_str("            case \"$line[1]\" in\n");
    for child in cmd.visible_children() {
        buf.push_str(&format!("                {})\n", child.name));
        buf.push_str(&format!(
            "                    _{}\n",
            function_name(Some(name), &child.name)
        ));
        buf.push_str("                    ;;\n");
    }
    buf.push_str("            esac\n");
    buf.push_str("            ;;\n");
    buf.push_str("    esac\n");
}

/// Join the command path with `_`: `gum`, `gum_choose`, ...
fn function_name(parent: Option<&str>, name: &str) -> String {
    match parent {
        Some(parent) => format!("{parent}_{name}"),
        None => name.to_string(),
    }
}

/// Write a completion script for `root` to `out` using the default tool name.
pub fn generate<W: Write + ?Sized>(
    root: &CommandNode,
    program_name: &str,
    out: &mut W,
) -> io::Result<()> {
    Generator::default().generate(root, program_name, out)
}

pub fn generate_to_string(root: &CommandNode, program_name: &str) -> String {
    Generator::default().render(root, program_name)
}

pub fn write_completion_file(
    root: &CommandNode,
    program_name: &str,
    dir: &Path,
) -> io::Result<PathBuf> {
    Generator::default().write_completion_file(root, program_name, dir)
}
