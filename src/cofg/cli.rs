//! CLI argument parsing for overriding config
//!
//! WHY: Allow quick overrides (content root / marker) without editing the
//! config file. Keep the surface small and explicit to avoid accidental
//! drift from file-based defaults.

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub(crate) struct Args {
    /// Content root to serve (overrides public_path)
    #[arg(long)]
    pub(crate) root: Option<String>,
    /// Substring the homepage body must contain (overrides marker)
    #[arg(long)]
    pub(crate) marker: Option<String>,
}
