//! Heuristic pattern extraction.
//!
//! Each submodule is a set of independent, stateless rule functions over
//! raw text; this module runs them over a scanned tree and assembles the
//! immutable [`Inventory`] that the downstream stages consume.

pub mod auth;
pub mod entities;
pub mod packages;
pub mod routes;

use crate::core::{
    AuthScheme, DbContextInfo, EntitySet, Inventory, ServiceInfo, SourceUnit, StructuralEntity,
    ViewInfo,
};
use crate::io::reader::read_source;
use crate::io::walker::SourceTree;
use anyhow::Result;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static DBCONTEXT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"class\s+(\w+)\s*:\s*DbContext").unwrap());

static DBSET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"DbSet<(\w+)>\s+(\w+)").unwrap());

static INTERFACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"interface\s+(I\w+)").unwrap());

static SERVICE_CLASS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"class\s+(\w+Service)").unwrap());

/// Build the full inventory for a source tree in one pass.
///
/// Each candidate file is read exactly once; a skipped file contributes
/// zero constructs and exactly one diagnostic. Per-file problems never
/// abort the scan.
pub fn build_inventory(root: &Path) -> Result<Inventory> {
    let tree = SourceTree::scan(root)?;

    let mut skipped = 0usize;
    let mut project_type = None;
    let mut controllers = Vec::new();
    let mut entities = Vec::new();
    let mut views = Vec::new();
    let mut services = Vec::new();
    let mut contexts = Vec::new();
    let mut packages = Vec::new();
    let mut authentication = AuthScheme::NotDetected;

    for path in tree.all_files() {
        if tree.is_view_file(path) {
            // Views are inventoried by path alone; their content is only
            // consulted later, by the converter.
            views.push(view_info(path));
            continue;
        }

        let unit = read_source(path);
        if unit.is_empty() {
            skipped += 1;
            continue;
        }

        if tree.is_project_file(path) {
            if project_type.is_none() {
                project_type = Some(packages::detect_project_type(&unit.text));
            }
            packages.extend(packages::extract_packages(&unit));
            continue;
        }

        if tree.is_controller_file(path) {
            if let Some(controller) = routes::extract_controller(&unit) {
                controllers.push(controller);
            }
        }
        if tree.is_model_file(path) {
            if let Some(entity) = entities::extract_entity(&unit) {
                entities.push(entity);
            }
        }
        if tree.is_service_file(path) {
            if let Some(service) = extract_service(&unit) {
                services.push(service);
            }
        }
        if let Some(ctx) = extract_dbcontext(&unit) {
            contexts.push(ctx);
        }
        if authentication == AuthScheme::NotDetected {
            if let Some(scheme) = auth::detect_in_text(&unit.text) {
                authentication = scheme;
            }
        }
    }

    info!(
        "Extracted {} controllers, {} entities, {} views, {} services, {} contexts",
        controllers.len(),
        entities.len(),
        views.len(),
        services.len(),
        contexts.len()
    );

    Ok(Inventory {
        project_type: project_type.unwrap_or(crate::core::ProjectType::Unknown),
        controllers,
        entities,
        views,
        services,
        contexts,
        packages,
        authentication,
        skipped_files: skipped,
    })
}

/// Scan every C# file that looks like a model and extract its entity.
/// Used by the generator, which is not restricted to Models/ directories.
pub fn scan_entities(root: &Path) -> Result<Vec<StructuralEntity>> {
    let tree = SourceTree::scan(root)?;
    let mut found = Vec::new();

    for path in tree.cs_files() {
        let unit = read_source(&path);
        if unit.is_empty() || !entities::is_model_file(&unit.text) {
            continue;
        }
        match entities::extract_entity(&unit) {
            Some(entity) => found.push(entity),
            None => debug!("No entity recognized in {}", path.display()),
        }
    }

    info!("Found {} models to migrate", found.len());
    Ok(found)
}

/// Views carry no parsed content at assessment time; the name comes from
/// the file stem and the controller from the parent directory.
fn view_info(path: &Path) -> ViewInfo {
    ViewInfo {
        name: path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
        controller: path
            .parent()
            .and_then(|p| p.file_name())
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
        file: path.to_path_buf(),
    }
}

fn extract_service(unit: &SourceUnit) -> Option<ServiceInfo> {
    let name = SERVICE_CLASS_RE.captures(&unit.text)?[1].to_string();
    let interfaces = INTERFACE_RE
        .captures_iter(&unit.text)
        .map(|c| c[1].to_string())
        .collect();

    Some(ServiceInfo {
        name,
        interfaces,
        file: unit.path.clone(),
    })
}

fn extract_dbcontext(unit: &SourceUnit) -> Option<DbContextInfo> {
    if !unit.text.contains("DbContext") {
        return None;
    }
    let name = DBCONTEXT_RE.captures(&unit.text)?[1].to_string();
    let entity_sets = DBSET_RE
        .captures_iter(&unit.text)
        .map(|c| EntitySet {
            entity_type: c[1].to_string(),
            property: c[2].to_string(),
        })
        .collect();

    Some(DbContextInfo {
        name,
        file: unit.path.clone(),
        entity_sets,
    })
}
