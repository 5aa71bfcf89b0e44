//! Terminal storefront entry point.

use std::io;

use anyhow::Context;
use clap::Parser;

use printmart_storefront::{Args, Storefront, StorefrontConfig, View, run};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Keep the screen readable: only warnings unless RUST_LOG says otherwise.
    printmart_observability::init_with_default("warn");

    let config = StorefrontConfig::from_env().with_args(&args);
    let catalog = config.load_catalog()?;

    let view = View::new(config.currency.clone(), config.plain);
    let mut storefront = Storefront::new(catalog);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(&mut storefront, &view, stdin.lock(), &mut stdout).context("storefront session failed")?;

    Ok(())
}
