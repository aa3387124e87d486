//! The `convert` command: turn every Razor view under a tree into a JSX
//! component and write the conversion report beside them.

use crate::config;
use crate::core::errors::Error;
use crate::generate::component::{convert_unit, ConversionOutcome};
use crate::generate::guide;
use crate::io::{read_source, SourceTree};
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub struct ConvertConfig {
    /// A directory to scan, or a single .cshtml file.
    pub path: PathBuf,
    pub output: PathBuf,
}

pub fn handle_convert(config: ConvertConfig) -> Result<()> {
    config::validate_convert_input(&config.path)?;
    config::ensure_output_dir(&config.output)?;

    let base = if config.path.is_file() {
        config.path.parent().unwrap_or(Path::new("")).to_path_buf()
    } else {
        config.path.clone()
    };
    let tree = SourceTree::scan(&config.path)?;
    let mut outcomes: Vec<(String, ConversionOutcome)> = Vec::new();

    for view in tree.razor_files() {
        let unit = read_source(&view);
        if unit.is_empty() {
            continue;
        }
        let outcome = convert_unit(&unit);
        // Mirror the view's directory layout so same-named views from
        // different controllers cannot collide.
        let relative = view.strip_prefix(&base).unwrap_or(&view);
        let component_dir = match relative.parent() {
            Some(parent) => config.output.join(parent),
            None => config.output.clone(),
        };
        config::ensure_output_dir(&component_dir)?;
        let component_path = component_dir.join(format!("{}.jsx", outcome.component_name));
        fs::write(&component_path, &outcome.code).map_err(|e| {
            Error::file_system("failed to write component", component_path.clone(), e)
        })?;

        let source = relative.display().to_string();
        log::debug!("converted {source} -> {}", component_path.display());
        outcomes.push((source, outcome));
    }

    let report = guide::conversion_report(&outcomes);
    let report_path = config.output.join("CONVERSION_REPORT.md");
    fs::write(&report_path, report)
        .map_err(|e| Error::file_system("failed to write conversion report", report_path.clone(), e))?;

    let total_todos: usize = outcomes.iter().map(|(_, o)| o.todo_count).sum();
    println!(
        "Converted {} view(s) into {} ({} TODO markers); see {}",
        outcomes.len(),
        config.output.display(),
        total_todos,
        report_path.display()
    );
    Ok(())
}
