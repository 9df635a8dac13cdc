use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio::config::Config;
use folio::export::write_bundle;
use folio::models::profile::Profile;
use folio::models::variant::Variant;
use folio::templates::compile;

/// folio <profile.json> [variant-id]
///
/// Loads a collected profile from JSON, compiles the selected template
/// variant (argument overrides the profile's own selection, unknown ids
/// fall back to modern), and exports the bundle to the configured
/// output directory.
fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting folio v{}", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let profile_path: PathBuf = match args.next() {
        Some(path) => path.into(),
        None => bail!("usage: folio <profile.json> [variant-id]"),
    };
    let variant_arg = args.next();

    let raw = std::fs::read_to_string(&profile_path)
        .with_context(|| format!("Failed to read {}", profile_path.display()))?;
    let profile: Profile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", profile_path.display()))?;

    let variant = match variant_arg {
        Some(id) => Variant::from_id(&id),
        None => profile.selected_variant.unwrap_or_default(),
    };
    info!(
        "Compiling {} with variant {}",
        profile_path.display(),
        variant.id()
    );

    let bundle = compile(&profile, variant);
    write_bundle(&config.output_dir, &bundle, &profile)?;
    info!("Done: {}", config.output_dir.display());

    Ok(())
}
