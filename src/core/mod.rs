pub mod errors;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One source file as acquired by the reader.
///
/// The text is empty iff the file was unreadable or exceeded the size
/// ceiling; a unit is never partially loaded.
#[derive(Clone, Debug)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub text: String,
    pub bytes: u64,
}

impl SourceUnit {
    pub fn new(path: PathBuf, text: String, bytes: u64) -> Self {
        Self { path, text, bytes }
    }

    /// True when the file contributed no text (skipped or unreadable).
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A property captured from a C# entity class.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FieldInfo {
    pub name: String,
    /// Source type token with the nullability marker stripped.
    pub source_type: String,
    pub nullable: bool,
    pub is_key: bool,
    pub is_required: bool,
    pub is_foreign_key: bool,
    pub foreign_table: Option<String>,
    pub max_length: Option<u32>,
    pub annotations: Vec<String>,
}

/// A recognized data-model class with its fields in discovery order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StructuralEntity {
    pub name: String,
    pub namespace: String,
    pub fields: Vec<FieldInfo>,
    pub base_class: Option<String>,
    /// Declared `[Table("...")]` name, when present.
    pub table_name: Option<String>,
    pub relationships: Vec<Relationship>,
    pub file: PathBuf,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    OneToMany,
    ManyToOne,
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RelationKind::OneToMany => "one-to-many",
            RelationKind::ManyToOne => "many-to-one",
        };
        write!(f, "{s}")
    }
}

/// An inferred navigation relationship. Inferred, not declared: may be a
/// false positive, so downstream consumers surface these for manual review.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Relationship {
    pub kind: RelationKind,
    pub owner: String,
    pub related: String,
    pub field: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Delete => "DELETE",
        };
        write!(f, "{s}")
    }
}

/// One controller action. The verb defaults to GET when no explicit
/// attribute is found near the action.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RouteDescriptor {
    pub controller: String,
    pub action: String,
    pub verb: HttpVerb,
    pub return_type: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ControllerInfo {
    pub name: String,
    pub file: PathBuf,
    pub routes: Vec<RouteDescriptor>,
}

/// A NuGet package reference with a suggested PyPI equivalent.
/// The suggestion is "research required" when no mapping rule matched.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PackageReference {
    pub name: String,
    pub version: String,
    pub python_equivalent: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EntitySet {
    pub entity_type: String,
    pub property: String,
}

/// An Entity Framework DbContext and the DbSet properties it declares.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DbContextInfo {
    pub name: String,
    pub file: PathBuf,
    pub entity_sets: Vec<EntitySet>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub interfaces: Vec<String>,
    pub file: PathBuf,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ViewInfo {
    pub name: String,
    pub controller: String,
    pub file: PathBuf,
}

/// Authentication scheme detected in the source tree. Closed set; the
/// first indicator found anywhere wins.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuthScheme {
    Identity,
    JwtBearer,
    Cookie,
    NotDetected,
}

impl std::fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AuthScheme::Identity => "ASP.NET Identity",
            AuthScheme::JwtBearer => "JWT Bearer",
            AuthScheme::Cookie => "Cookie Authentication",
            AuthScheme::NotDetected => "Not detected",
        };
        write!(f, "{s}")
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProjectType {
    AspNetMvc,
    Blazor,
    AspNetWebApi,
    WindowsDesktop,
    AspNetCore,
    Unknown,
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProjectType::AspNetMvc => "ASP.NET MVC",
            ProjectType::Blazor => "Blazor",
            ProjectType::AspNetWebApi => "ASP.NET Web API",
            ProjectType::WindowsDesktop => "Windows Forms / WPF",
            ProjectType::AspNetCore => "ASP.NET Core",
            ProjectType::Unknown => "Unknown",
        };
        write!(f, "{s}")
    }
}

/// The complete extraction result for one source tree.
///
/// Built in a single pass and immutable afterwards; downstream stages
/// only read from it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Inventory {
    pub project_type: ProjectType,
    pub controllers: Vec<ControllerInfo>,
    pub entities: Vec<StructuralEntity>,
    pub views: Vec<ViewInfo>,
    pub services: Vec<ServiceInfo>,
    pub contexts: Vec<DbContextInfo>,
    pub packages: Vec<PackageReference>,
    pub authentication: AuthScheme,
    /// Files skipped by the reader (oversized or unreadable).
    pub skipped_files: usize,
}

impl Inventory {
    pub fn route_count(&self) -> usize {
        self.controllers.iter().map(|c| c.routes.len()).sum()
    }

    pub fn relationship_count(&self) -> usize {
        self.entities.iter().map(|e| e.relationships.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_unit_empty_iff_no_text() {
        let full = SourceUnit::new(PathBuf::from("a.cs"), "class A {}".into(), 10);
        let skipped = SourceUnit::new(PathBuf::from("b.cs"), String::new(), 2_000_000);
        assert!(!full.is_empty());
        assert!(skipped.is_empty());
    }

    #[test]
    fn display_strings_match_report_vocabulary() {
        assert_eq!(AuthScheme::Identity.to_string(), "ASP.NET Identity");
        assert_eq!(AuthScheme::NotDetected.to_string(), "Not detected");
        assert_eq!(ProjectType::AspNetMvc.to_string(), "ASP.NET MVC");
        assert_eq!(HttpVerb::Delete.to_string(), "DELETE");
        assert_eq!(RelationKind::OneToMany.to_string(), "one-to-many");
    }

    #[test]
    fn inventory_counts_routes_across_controllers() {
        let route = |c: &str, a: &str| RouteDescriptor {
            controller: c.to_string(),
            action: a.to_string(),
            verb: HttpVerb::Get,
            return_type: "IActionResult".to_string(),
        };
        let inv = Inventory {
            project_type: ProjectType::AspNetCore,
            controllers: vec![
                ControllerInfo {
                    name: "OrdersController".into(),
                    file: PathBuf::from("OrdersController.cs"),
                    routes: vec![route("OrdersController", "Get"), route("OrdersController", "Create")],
                },
                ControllerInfo {
                    name: "UsersController".into(),
                    file: PathBuf::from("UsersController.cs"),
                    routes: vec![route("UsersController", "Get")],
                },
            ],
            entities: vec![],
            views: vec![],
            services: vec![],
            contexts: vec![],
            packages: vec![],
            authentication: AuthScheme::NotDetected,
            skipped_files: 0,
        };
        assert_eq!(inv.route_count(), 3);
    }
}
