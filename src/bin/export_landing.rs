use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use pricing_page::catalog;
use pricing_page::web::{render_pricing_page, PageSettings, ViewState};
use pricing_page::ExportArgs;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let args = ExportArgs::parse();
    catalog::validate_all().context("plan catalog failed validation")?;

    let html = render_pricing_page(ViewState::default(), &PageSettings::default());
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;
    let path = args.out_dir.join("index.html");
    fs::write(&path, html).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "exported pricing page");
    println!("Wrote {}", path.display());

    Ok(())
}
