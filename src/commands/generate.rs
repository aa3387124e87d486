//! The `generate` command: extract entities and write the ORM model
//! module plus its migration guide.

use crate::config;
use crate::core::errors::Error;
use crate::extract;
use crate::generate::{guide, render_models, DbFlavor, TargetProfile};
use anyhow::Result;
use std::fs;
use std::path::PathBuf;

pub struct GenerateConfig {
    pub path: PathBuf,
    pub profile: TargetProfile,
    pub flavor: DbFlavor,
    pub output: PathBuf,
}

pub fn handle_generate(config: GenerateConfig) -> Result<()> {
    config::validate_input_path(&config.path)?;
    config::ensure_output_dir(&config.output)?;

    let entities = extract::scan_entities(&config.path)?;
    if entities.is_empty() {
        log::warn!("no entity classes found under {}", config.path.display());
    }

    let models = render_models(config.profile, &entities);
    let models_path = config.output.join("models.py");
    fs::write(&models_path, models)
        .map_err(|e| Error::file_system("failed to write models module", models_path.clone(), e))?;

    let guide_text = guide::migration_guide(config.profile, config.flavor, &entities);
    let guide_path = config.output.join("MIGRATION_GUIDE.md");
    fs::write(&guide_path, guide_text)
        .map_err(|e| Error::file_system("failed to write migration guide", guide_path.clone(), e))?;

    log::info!(
        "generated {} model(s) for {} into {}",
        entities.len(),
        config.profile,
        config.output.display()
    );
    println!(
        "Generated {} model(s): {} and {}",
        entities.len(),
        models_path.display(),
        guide_path.display()
    );
    Ok(())
}
