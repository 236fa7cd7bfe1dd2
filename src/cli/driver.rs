use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use scimitar_binder::TypeHierarchy;
use scimitar_emitter::{IRPrinter, InitializerSpec, SynthesisError, build_initializer};

use crate::cli::args::{CliArgs, OutputFormat};
use crate::manifest::{Collected, Manifest};

/// Synthesis result for one target type.
#[derive(Debug)]
pub struct TargetOutcome {
    pub target: String,
    pub result: Result<InitializerSpec, SynthesisError>,
}

/// One rendered `<Target>_Binding` unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedUnit {
    pub target: String,
    /// Path relative to the output root, following the package layout.
    pub relative_path: PathBuf,
    pub text: String,
}

#[derive(Debug)]
pub struct GenerationResult {
    pub outcomes: Vec<TargetOutcome>,
    pub units: Vec<RenderedUnit>,
}

impl GenerationResult {
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.result.is_err())
            .count()
    }
}

/// Build every target's initializer. Targets are independent: they run in
/// parallel and one failure never stops the others. Output order follows
/// manifest order.
pub fn synthesize_all(collected: &Collected) -> Vec<TargetOutcome> {
    let types = &collected.types;
    collected
        .sets
        .par_iter()
        .map(|set| TargetOutcome {
            target: types.name_of(set.target()).to_string(),
            result: build_initializer(set, types),
        })
        .collect()
}

pub fn render(spec: &InitializerSpec, format: OutputFormat) -> Result<RenderedUnit> {
    let text = match format {
        OutputFormat::Java => IRPrinter::emit_to_string(&spec.to_class_ir()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(spec).context("failed to serialize initializer")?
        }
    };
    let mut relative_path: PathBuf = spec
        .target_type
        .package()
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect();
    relative_path.push(format!(
        "{}.{}",
        spec.binding_class_name(),
        format.extension()
    ));
    Ok(RenderedUnit {
        target: spec.target_type.qualified_name.clone(),
        relative_path,
        text,
    })
}

/// Load, collect, synthesize, and render everything the arguments name.
pub fn generate(args: &CliArgs) -> Result<GenerationResult> {
    let manifest = Manifest::from_path(&args.manifest)
        .with_context(|| format!("failed to load {}", args.manifest.display()))?;
    let config = args.resolve_config(&manifest.config);
    debug!(?config, "resolved binding config");

    let collected = manifest
        .collect(&config)
        .context("failed to collect bindings")?;
    let outcomes = synthesize_all(&collected);

    let mut units = Vec::new();
    for outcome in &outcomes {
        if let Ok(spec) = &outcome.result {
            units.push(render(spec, args.format)?);
        }
    }
    info!(
        targets = outcomes.len(),
        rendered = units.len(),
        "generation finished"
    );
    Ok(GenerationResult { outcomes, units })
}

/// Write units under `out_dir`, creating package directories as needed.
pub fn write_units(out_dir: &Path, units: &[RenderedUnit]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(units.len());
    for unit in units {
        let path = out_dir.join(&unit.relative_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(&path, &unit.text)
            .with_context(|| format!("failed to write {}", path.display()))?;
        debug!(path = %path.display(), "wrote binding unit");
        written.push(path);
    }
    Ok(written)
}
