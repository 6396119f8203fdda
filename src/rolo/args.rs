use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolo")]
#[command(about = "Interactive command-line contact manager", long_about = None)]
pub struct Cli {
    /// Path to the address book snapshot (defaults to the user data dir)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Records per page for `show pages` (overrides the config file)
    #[arg(long)]
    pub page_size: Option<usize>,
}
