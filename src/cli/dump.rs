use std::path::Path;

use anyhow::Context;

use crate::spec_file::{self, SpecFormat};

use super::DumpFormat;

pub(super) fn dump_spec(
    spec: &Path,
    format: DumpFormat,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let root = spec_file::load(spec)
        .with_context(|| format!("Failed to load command spec {}", spec.display()))?;

    if let Some(output) = output {
        spec_file::save(&root, output)
            .with_context(|| format!("Failed to save command spec {}", output.display()))?;
        println!("Wrote {}", output.display());
        return Ok(());
    }

    let format = match format {
        DumpFormat::Toml => SpecFormat::Toml,
        DumpFormat::Json => SpecFormat::Json,
    };
    let content = spec_file::to_string(&root, format)?;
    println!("{}", content.trim_end());

    Ok(())
}
