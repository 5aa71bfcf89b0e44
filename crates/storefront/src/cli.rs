use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "printmart")]
#[command(about = "Order banners, photo prints and merchandise from the terminal")]
#[command(version)]
pub struct Args {
    /// Catalog JSON file to sell from instead of the built-in range
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Currency label printed in front of amounts
    #[arg(long, value_name = "LABEL")]
    pub currency: Option<String>,

    /// Disable colors and box-drawing characters
    #[arg(long)]
    pub plain: bool,
}
