use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::Config;
use crate::spec_file;

pub(super) fn generate_from_spec(
    config: &Config,
    spec: &Path,
    program_name: Option<String>,
    output_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let root = spec_file::load(spec)
        .with_context(|| format!("Failed to load command spec {}", spec.display()))?;

    if root.name.is_empty() && program_name.is_none() {
        anyhow::bail!(
            "{} has no root `name`; pass --program-name",
            spec.display()
        );
    }

    let program_name = program_name.unwrap_or_else(|| root.name.clone());
    tracing::info!(
        "Generating zsh completion for {program_name} ({} commands)",
        root.count()
    );

    super::emit(config, &root, &program_name, output_dir.as_deref())
}
