//! Entity and property recognition.
//!
//! These are regex heuristics over raw text, applied in a fixed order:
//! class scope, then field enumeration, then annotation capture. They are
//! deliberately tolerant of partial matches; a construct with no name
//! match is skipped, never an error.

use crate::core::{FieldInfo, SourceUnit, StructuralEntity};
use crate::mapping::relationships::resolve_relationships;
use once_cell::sync::Lazy;
use regex::Regex;

static NAMESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"namespace\s+([\w\.]+)").unwrap());

static CLASS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"public\s+class\s+(\w+)(?:\s*:\s*(\w+))?").unwrap());

static TABLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"\[Table\("(\w+)"\)\]"#).unwrap());

/// Auto-property with an optional run of attribute blocks in front.
static PROPERTY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"((?:\[[^\]]+\]\s*)*)public\s+(?:virtual\s+)?([\w\[\]<>?]+)\s+(\w+)\s*\{\s*get;\s*set;\s*\}")
        .unwrap()
});

static ANNOTATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]").unwrap());

static FOREIGN_KEY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"ForeignKey\("(\w+)"\)"#).unwrap());

static MAX_LENGTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:MaxLength|StringLength)\((\d+)\)").unwrap());

/// Indicators that a file declares an entity model worth parsing.
static MODEL_INDICATORS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"public class \w+",
        r"\[Table\(",
        r": DbContext",
        r"DbSet<",
        r"\[Key\]",
        r"\[Required\]",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

pub fn is_model_file(text: &str) -> bool {
    MODEL_INDICATORS.iter().any(|re| re.is_match(text))
}

/// Parse the entity declared in one source unit.
///
/// Returns `None` when no public class is found or the class is a
/// DbContext; either way the file is skipped silently and the scan
/// continues.
pub fn extract_entity(unit: &SourceUnit) -> Option<StructuralEntity> {
    let text = &unit.text;

    let class_caps = CLASS_RE.captures(text)?;
    let name = class_caps[1].to_string();
    let base_class = class_caps.get(2).map(|m| m.as_str().to_string());

    if base_class.as_deref().is_some_and(|b| b.contains("DbContext")) {
        return None;
    }

    let namespace = NAMESPACE_RE
        .captures(text)
        .map(|c| c[1].to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    let table_name = TABLE_RE.captures(text).map(|c| c[1].to_string());

    let fields = parse_fields(text);
    let relationships = resolve_relationships(&name, &fields);

    Some(StructuralEntity {
        name,
        namespace,
        fields,
        base_class,
        table_name,
        relationships,
        file: unit.path.clone(),
    })
}

/// Enumerate auto-properties in declaration order, then capture each
/// property's annotation tokens.
pub fn parse_fields(text: &str) -> Vec<FieldInfo> {
    PROPERTY_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let annotations_block = caps.get(1).map_or("", |m| m.as_str());
            let type_token = caps.get(2)?.as_str();
            let name = caps.get(3)?.as_str();
            if type_token.is_empty() {
                return None;
            }
            Some(build_field(name, type_token, annotations_block))
        })
        .collect()
}

fn build_field(name: &str, type_token: &str, annotations_block: &str) -> FieldInfo {
    let annotations: Vec<String> = ANNOTATION_RE
        .captures_iter(annotations_block)
        .map(|c| c[1].trim().to_string())
        .collect();

    // Nullability comes purely from the `?` marker in the type token.
    let nullable = type_token.contains('?');
    let source_type = type_token.replace('?', "");

    let is_key = annotations.iter().any(|a| a == "Key");
    let is_required = annotations.iter().any(|a| a == "Required");

    let foreign_table = FOREIGN_KEY_RE
        .captures(annotations_block)
        .map(|c| c[1].to_string());

    let max_length = MAX_LENGTH_RE
        .captures(annotations_block)
        .and_then(|c| c[1].parse().ok());

    FieldInfo {
        name: name.to_string(),
        source_type,
        nullable,
        is_key,
        is_required,
        is_foreign_key: foreign_table.is_some(),
        foreign_table,
        max_length,
        annotations,
    }
}
