use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paylink::application::checkout::Checkout;
use paylink::application::registry::ProviderRegistry;
use paylink::config::AppConfig;
use paylink::domain::ports::RegistrationSourceBox;
use paylink::domain::selection::SelectionPolicy;
use paylink::infrastructure::builtin;
use paylink::interfaces::manifest::ManifestDirectory;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory of provider manifests. Uses the built-in registrations when omitted.
    #[arg(long)]
    manifest_dir: Option<PathBuf>,

    /// Provider selection policy
    #[arg(long, value_enum)]
    selection: Option<SelectionPolicy>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path).into_diagnostic()?,
        None => AppConfig::default(),
    };
    if let Some(dir) = cli.manifest_dir {
        config.manifest_dir = Some(dir);
    }
    if let Some(selection) = cli.selection {
        config.selection = selection;
    }

    let source: RegistrationSourceBox = match &config.manifest_dir {
        Some(dir) => {
            info!(manifest_dir = %dir.display(), "using manifest registrations");
            Box::new(ManifestDirectory::new(dir))
        }
        None => Box::new(builtin::registrations()),
    };

    let registry = ProviderRegistry::new(builtin::catalog().into_diagnostic()?, source);
    let checkout = Checkout::new(registry, config.selection);

    let stdout = io::stdout();
    checkout
        .run(&config.order.to_request(), &mut stdout.lock())
        .into_diagnostic()?;

    Ok(())
}
