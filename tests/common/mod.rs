#![allow(dead_code)]

use std::io::{self, Write};

use zsh_compgen::{CommandNode, Flag};

pub const GUM_TOML: &str = r#"
name = "gum"
help = "A tool for glamorous shell scripts"

[[children]]
name = "choose"
help = "Choose an option"

[[children.flags]]
name = "limit"
short = "l"
help = "Limit"
bool = true

[[children]]
name = "debug"
hidden = true
"#;

pub fn gum() -> CommandNode {
    CommandNode::new("gum").child(
        CommandNode::new("choose")
            .help("Choose an option")
            .flag(Flag::new("limit").short('l').help("Limit").boolean()),
    )
}

/// Lines that open a function definition, in file order.
pub fn function_names(script: &str) -> Vec<String> {
    script
        .lines()
        .filter_map(|line| line.strip_suffix("() {"))
        .filter_map(|name| name.strip_prefix('_'))
        .map(String::from)
        .collect()
}

/// A sink that rejects every write.
pub struct ClosedSink;

impl Write for ClosedSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
