//! Test module - Central organization for all test submodules
//!
//! Organized per functional area, mirroring the src layout:
//! - Port allocation
//! - Server lifecycle (spawn / ready / stop / drop)
//! - Fetch + marker validation
//! - Whole-run orchestration
//! - Config loading and CLI precedence
//! - Error display contract

pub(crate) mod fetch;
pub(crate) mod port;
