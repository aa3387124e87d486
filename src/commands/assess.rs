//! The `assess` command: scan a tree, build the inventory, write the
//! report in the requested format.

use crate::config;
use crate::extract;
use crate::io::output::{create_writer, ReportFormat};
use crate::report::AssessmentReport;
use anyhow::Result;
use std::path::PathBuf;

pub struct AssessConfig {
    pub path: PathBuf,
    pub format: ReportFormat,
    pub output: Option<PathBuf>,
}

pub fn handle_assess(config: AssessConfig) -> Result<()> {
    config::validate_input_path(&config.path)?;

    let inventory = extract::build_inventory(&config.path)?;
    log::info!(
        "assessed {}: {} controllers, {} models, {} views",
        config.path.display(),
        inventory.controllers.len(),
        inventory.entities.len(),
        inventory.views.len()
    );

    let report = AssessmentReport::from_inventory(inventory);
    let mut writer = create_writer(config.format, config.output.as_deref())?;
    writer.write_report(&report)?;
    Ok(())
}
