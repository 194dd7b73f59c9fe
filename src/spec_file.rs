//! Load and save command trees described in TOML or JSON files.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::spec::CommandNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Toml,
    Json,
}

impl SpecFormat {
    /// `.json` files are JSON, everything else is read as TOML.
    pub fn from_path(path: &Path) -> Self {
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        {
            SpecFormat::Json
        } else {
            SpecFormat::Toml
        }
    }
}

pub fn load(path: &Path) -> Result<CommandNode> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let node = parse_at(&content, SpecFormat::from_path(path), path.to_path_buf())?;
    tracing::debug!(
        "Loaded spec for {} ({} commands) from {}",
        node.name,
        node.count(),
        path.display()
    );
    Ok(node)
}

pub fn parse(content: &str, format: SpecFormat) -> Result<CommandNode> {
    parse_at(content, format, PathBuf::from("<memory>"))
}

fn parse_at(content: &str, format: SpecFormat, path: PathBuf) -> Result<CommandNode> {
    match format {
        SpecFormat::Toml => toml::from_str(content).map_err(|source| Error::Toml { path, source }),
        SpecFormat::Json => {
            serde_json::from_str(content).map_err(|source| Error::Json { path, source })
        }
    }
}

pub fn to_string(node: &CommandNode, format: SpecFormat) -> Result<String> {
    match format {
        SpecFormat::Toml => Ok(toml::to_string_pretty(node)?),
        SpecFormat::Json => serde_json::to_string_pretty(node).map_err(|source| Error::Json {
            path: PathBuf::from("<memory>"),
            source,
        }),
    }
}

pub fn save(node: &CommandNode, path: &Path) -> Result<()> {
    let content = to_string(node, SpecFormat::from_path(path))?;
    std::fs::write(path, content).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Saved spec for {} to {}", node.name, path.display());
    Ok(())
}
