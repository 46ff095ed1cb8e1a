//! Configuration (Cofg)
//!
//! WHY: The built-in `cofg.yaml` is compiled in as the baseline so the binary
//! runs with zero setup (serve the working directory, expect "LlamaSim");
//! an optional `./cofg.yaml` on disk is layered over it for local tweaks.

use serde::Deserialize;

use crate::error::AppResult;

pub(crate) const BUILD_COFG: &str = include_str!("cofg.yaml");

#[derive(PartialEq, Clone, Debug, Deserialize)]
pub(crate) struct Cofg {
    /// Directory served as the site root
    pub(crate) public_path: String,
    /// Substring the homepage body must contain
    pub(crate) marker: String,
    /// Serve a generated listing when the root has no index.html
    pub(crate) directory_listing: bool,
    pub(crate) fetch: CofgFetch,
}

#[derive(PartialEq, Clone, Debug, Deserialize)]
pub(crate) struct CofgFetch {
    /// Whole-request timeout for the homepage GET, in seconds
    pub(crate) timeout_secs: u64,
    /// How long to poll for the listener before giving up, in milliseconds
    pub(crate) ready_timeout_millis: u64,
}

impl Default for Cofg {
    fn default() -> Self {
        Self::new_from_str(BUILD_COFG).expect("embedded cofg.yaml must parse")
    }
}

impl Cofg {
    /// Load configuration: built-in baseline plus `./cofg.yaml` if present.
    pub(crate) fn load_from_disk() -> AppResult<Self> {
        Self::new_from_source(config::File::with_name("./cofg.yaml").required(false))
    }

    // Accept any owned source type that implements `config::Source`; the
    // builder's `add_source` bound rejects trait-object references.
    pub(crate) fn new_from_source<T>(source: T) -> AppResult<Self>
    where
        T: config::Source + Send + Sync + 'static,
    {
        Ok(config::Config::builder()
            .add_source(config::File::from_str(BUILD_COFG, config::FileFormat::Yaml))
            .add_source(source)
            .build()?
            .try_deserialize::<Self>()?)
    }

    pub(crate) fn new_from_str(data_str: &str) -> AppResult<Self> {
        Self::new_from_source(config::File::from_str(data_str, config::FileFormat::Yaml))
    }
}
