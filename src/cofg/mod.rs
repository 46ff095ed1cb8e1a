pub(crate) mod cli;
pub(crate) mod config;

use crate::error::AppResult;

/// Merge CLI overrides into loaded config.
///
/// WHY: Preserve file-based config as baseline; explicit CLI flags have higher precedence.
pub(crate) fn build_config_from_cli(mut s: config::Cofg, cli: &cli::Args) -> config::Cofg {
    if let Some(root) = &cli.root {
        s.public_path = root.to_string();
    }
    if let Some(marker) = &cli.marker {
        s.marker = marker.to_string();
    }
    s
}

/// Full precedence chain: built-in baseline → ./cofg.yaml → CLI flags.
pub(crate) fn load(cli: &cli::Args) -> AppResult<config::Cofg> {
    Ok(build_config_from_cli(config::Cofg::load_from_disk()?, cli))
}
