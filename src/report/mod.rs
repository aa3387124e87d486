//! Assessment report assembly.
//!
//! The report is a plain serializable value built from an [`Inventory`];
//! rendering to JSON, markdown, or the terminal lives in the writers.

use crate::core::{AuthScheme, Inventory, ProjectType};
use crate::extract::packages::UNMAPPED_SUGGESTION;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub generated_at: DateTime<Utc>,
    pub summary: Summary,
    pub recommendations: Vec<Recommendation>,
    pub manual_review: Vec<String>,
    pub details: Inventory,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Summary {
    pub project_type: ProjectType,
    pub total_controllers: usize,
    pub total_routes: usize,
    pub total_models: usize,
    pub total_views: usize,
    pub total_services: usize,
    pub authentication: AuthScheme,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub category: String,
    pub recommendation: String,
    pub reason: String,
}

impl AssessmentReport {
    /// Build the report. Entities are sorted by (namespace, name) so the
    /// output is stable regardless of discovery order.
    pub fn from_inventory(mut inventory: Inventory) -> Self {
        inventory
            .entities
            .sort_by(|a, b| (&a.namespace, &a.name).cmp(&(&b.namespace, &b.name)));

        let summary = Summary {
            project_type: inventory.project_type,
            total_controllers: inventory.controllers.len(),
            total_routes: inventory.route_count(),
            total_models: inventory.entities.len(),
            total_views: inventory.views.len(),
            total_services: inventory.services.len(),
            authentication: inventory.authentication,
        };
        let recommendations = build_recommendations(&inventory);
        let manual_review = build_manual_review(&inventory);

        AssessmentReport {
            generated_at: Utc::now(),
            summary,
            recommendations,
            manual_review,
            details: inventory,
        }
    }
}

fn recommend(category: &str, recommendation: &str, reason: String) -> Recommendation {
    Recommendation {
        category: category.to_string(),
        recommendation: recommendation.to_string(),
        reason,
    }
}

/// Threshold-based stack suggestions. The cutoffs are coarse by intent;
/// they pick a starting point, not a verdict.
fn build_recommendations(inventory: &Inventory) -> Vec<Recommendation> {
    let mut out = Vec::new();

    let controllers = inventory.controllers.len();
    if controllers > 20 {
        out.push(recommend(
            "backend",
            "Django REST Framework",
            format!("{controllers} controllers; a batteries-included framework keeps a large API surface uniform"),
        ));
    } else {
        out.push(recommend(
            "backend",
            "FastAPI",
            format!("{controllers} controllers; a lightweight framework ports a small API surface quickly"),
        ));
    }

    if !inventory.contexts.is_empty() {
        out.push(recommend(
            "data-access",
            "SQLAlchemy",
            format!(
                "{} DbContext class(es) found; SQLAlchemy maps Entity Framework patterns most directly",
                inventory.contexts.len()
            ),
        ));
    }

    let views = inventory.views.len();
    if views > 15 {
        out.push(recommend(
            "frontend-state",
            "Redux Toolkit or Zustand",
            format!("{views} views; shared state across this many screens needs a dedicated store"),
        ));
    } else {
        out.push(recommend(
            "frontend-state",
            "React Context + useReducer or Zustand",
            format!("{views} views; built-in state management is enough at this size"),
        ));
    }

    match inventory.authentication {
        AuthScheme::Identity | AuthScheme::JwtBearer => out.push(recommend(
            "authentication",
            "JWT token-based auth",
            format!(
                "{} detected; a token flow replaces it cleanly across the API boundary",
                inventory.authentication
            ),
        )),
        AuthScheme::Cookie | AuthScheme::NotDetected => {}
    }

    out
}

fn build_manual_review(inventory: &Inventory) -> Vec<String> {
    let mut out = Vec::new();

    let relationships = inventory.relationship_count();
    if relationships > 0 {
        out.push(format!(
            "{relationships} inferred relationship(s); inference favors recall, so verify each against the original navigation properties"
        ));
    }
    if inventory.skipped_files > 0 {
        out.push(format!(
            "{} file(s) skipped (oversized or unreadable); inventory them by hand",
            inventory.skipped_files
        ));
    }
    let unmapped: Vec<&str> = inventory
        .packages
        .iter()
        .filter(|p| p.python_equivalent == UNMAPPED_SUGGESTION)
        .map(|p| p.name.as_str())
        .collect();
    if !unmapped.is_empty() {
        out.push(format!(
            "No Python equivalent known for: {}",
            unmapped.join(", ")
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ControllerInfo, PackageReference, StructuralEntity};
    use std::path::PathBuf;

    fn inventory() -> Inventory {
        Inventory {
            project_type: ProjectType::AspNetMvc,
            controllers: vec![],
            entities: vec![],
            views: vec![],
            services: vec![],
            contexts: vec![],
            packages: vec![],
            authentication: AuthScheme::NotDetected,
            skipped_files: 0,
        }
    }

    fn entity(namespace: &str, name: &str) -> StructuralEntity {
        StructuralEntity {
            name: name.to_string(),
            namespace: namespace.to_string(),
            fields: vec![],
            base_class: None,
            table_name: None,
            relationships: vec![],
            file: PathBuf::from(format!("{name}.cs")),
        }
    }

    #[test]
    fn entities_sort_by_namespace_then_name() {
        let mut inv = inventory();
        inv.entities = vec![
            entity("Shop.Models", "Order"),
            entity("Admin.Models", "User"),
            entity("Shop.Models", "Customer"),
        ];
        let report = AssessmentReport::from_inventory(inv);
        let names: Vec<&str> = report.details.entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["User", "Customer", "Order"]);
    }

    #[test]
    fn small_project_gets_fastapi_and_context_state() {
        let report = AssessmentReport::from_inventory(inventory());
        let recs: Vec<&str> = report.recommendations.iter().map(|r| r.recommendation.as_str()).collect();
        assert!(recs.contains(&"FastAPI"));
        assert!(recs.contains(&"React Context + useReducer or Zustand"));
        assert!(!recs.iter().any(|r| r.contains("JWT")));
    }

    #[test]
    fn large_controller_count_switches_backend_recommendation() {
        let mut inv = inventory();
        inv.controllers = (0..21)
            .map(|i| ControllerInfo {
                name: format!("C{i}Controller"),
                file: PathBuf::from(format!("C{i}Controller.cs")),
                routes: vec![],
            })
            .collect();
        let report = AssessmentReport::from_inventory(inv);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.recommendation == "Django REST Framework"));
    }

    #[test]
    fn identity_auth_yields_jwt_recommendation() {
        let mut inv = inventory();
        inv.authentication = AuthScheme::Identity;
        let report = AssessmentReport::from_inventory(inv);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.recommendation == "JWT token-based auth"));
    }

    #[test]
    fn manual_review_lists_skips_and_unmapped_packages() {
        let mut inv = inventory();
        inv.skipped_files = 2;
        inv.packages = vec![PackageReference {
            name: "Acme.Widgets".into(),
            version: "1.0.0".into(),
            python_equivalent: UNMAPPED_SUGGESTION.into(),
        }];
        let report = AssessmentReport::from_inventory(inv);
        assert!(report.manual_review.iter().any(|m| m.contains("2 file(s) skipped")));
        assert!(report.manual_review.iter().any(|m| m.contains("Acme.Widgets")));
    }
}
