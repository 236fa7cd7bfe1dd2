use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use scimitar_binder::{AmbiguityPolicy, BindingConfig, ProviderFlavor};

/// CLI arguments for the scimitar binary.
#[derive(Parser, Debug)]
#[command(
    name = "scimitar",
    version,
    about = "Generate view-model and state-observer bindings from a binding manifest"
)]
pub struct CliArgs {
    /// Binding manifest produced by the collection phase.
    pub manifest: PathBuf,

    /// Target androidx.lifecycle instead of android.arch.lifecycle.
    #[arg(long)]
    pub androidx: bool,

    /// Fail a target type when its view model has several candidate factories.
    #[arg(long = "deny-ambiguous")]
    pub deny_ambiguous: bool,

    /// Member that receives synthesized state observers.
    #[arg(long = "observer-slot")]
    pub observer_slot: Option<String>,

    /// Output format for generated units.
    #[arg(long, value_enum, default_value_t = OutputFormat::Java)]
    pub format: OutputFormat,

    /// Write generated units under this directory instead of stdout.
    #[arg(short = 'o', long = "out")]
    pub out_dir: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Java source, one `<Target>_Binding` class per target type.
    Java,
    /// The initializer IR as JSON.
    Json,
}

impl OutputFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Json => "json",
        }
    }
}

impl CliArgs {
    /// Manifest configuration with command-line overrides applied.
    pub fn resolve_config(&self, manifest: &BindingConfig) -> BindingConfig {
        let mut config = manifest.clone();
        if self.androidx {
            config.provider = ProviderFlavor::AndroidX;
        }
        if self.deny_ambiguous {
            config.ambiguity = AmbiguityPolicy::Deny;
        }
        if let Some(slot) = &self.observer_slot {
            config.observer_slot.clone_from(slot);
        }
        config
    }
}
