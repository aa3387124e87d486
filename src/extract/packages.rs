//! Dependency-manifest extraction and project-type detection.

use crate::core::{PackageReference, ProjectType, SourceUnit};
use once_cell::sync::Lazy;
use regex::Regex;

static PACKAGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<PackageReference\s+Include="([^"]+)"\s+Version="([^"]+)""#).unwrap()
});

/// NuGet package name fragments and their suggested PyPI equivalents.
/// Matched case-insensitively; unmatched names get "research required".
static PACKAGE_EQUIVALENTS: &[(&str, &str)] = &[
    ("newtonsoft.json", "json (built-in) or pydantic"),
    ("entityframeworkcore", "SQLAlchemy or Django ORM"),
    ("serilog", "loguru or structlog"),
    ("automapper", "pydantic or dataclasses"),
    ("fluentvalidation", "pydantic validators"),
    ("mediatr", "python-mediator"),
    ("swashbuckle", "FastAPI (automatic) or flask-swagger"),
    ("identityserver4", "python-jose or authlib"),
    ("hangfire", "celery or rq"),
    ("signalr", "python-socketio or channels"),
    ("dapper", "psycopg2 or pymysql"),
];

/// Fallback suggestion; never left empty.
pub const UNMAPPED_SUGGESTION: &str = "research required";

/// Extract package references from one project file, with a suggested
/// equivalent attached to each.
pub fn extract_packages(unit: &SourceUnit) -> Vec<PackageReference> {
    PACKAGE_RE
        .captures_iter(&unit.text)
        .map(|caps| PackageReference {
            name: caps[1].to_string(),
            version: caps[2].to_string(),
            python_equivalent: suggest_equivalent(&caps[1]).to_string(),
        })
        .collect()
}

/// Ordered table lookup; first matching fragment wins.
pub fn suggest_equivalent(package_name: &str) -> &'static str {
    let lowered = package_name.to_lowercase();
    PACKAGE_EQUIVALENTS
        .iter()
        .find(|(fragment, _)| lowered.contains(fragment))
        .map(|(_, suggestion)| *suggestion)
        .unwrap_or(UNMAPPED_SUGGESTION)
}

/// Classify the project from its first csproj.
pub fn detect_project_type(csproj_text: &str) -> ProjectType {
    if csproj_text.is_empty() {
        return ProjectType::Unknown;
    }
    if csproj_text.contains("Microsoft.NET.Sdk.Web") {
        if csproj_text.contains("Microsoft.AspNetCore.Mvc") {
            ProjectType::AspNetMvc
        } else if csproj_text.contains("Microsoft.AspNetCore.Components") {
            ProjectType::Blazor
        } else {
            ProjectType::AspNetWebApi
        }
    } else if csproj_text.contains("Microsoft.NET.Sdk.WindowsDesktop") {
        ProjectType::WindowsDesktop
    } else {
        ProjectType::AspNetCore
    }
}
