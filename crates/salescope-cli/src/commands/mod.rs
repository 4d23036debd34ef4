//! Command implementations.

pub mod report;
pub mod run;

use std::path::PathBuf;

use salescope::ReportConfig;

/// Resolve the effective configuration.
///
/// An explicit `--config` path must load; otherwise `./config.json` is used
/// when present, and defaults apply when it is not.
pub(crate) fn load_config(
    path: Option<PathBuf>,
) -> Result<ReportConfig, Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            log::debug!("loading configuration from {}", p.display());
            Ok(ReportConfig::load(p)?)
        }
        None => {
            let default = PathBuf::from("config.json");
            if default.exists() {
                log::debug!("loading configuration from {}", default.display());
                Ok(ReportConfig::load(default)?)
            } else {
                log::debug!("no configuration file, using defaults");
                Ok(ReportConfig::default())
            }
        }
    }
}
