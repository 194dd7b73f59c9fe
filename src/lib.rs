pub mod clap_model;
pub mod cli;
pub mod config;
pub mod error;
pub mod spec;
pub mod spec_file;
pub mod zsh;

pub use error::{Error, Result};
pub use spec::{CommandNode, Flag};
pub use zsh::{generate, generate_to_string, Generator};
