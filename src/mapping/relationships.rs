//! Relationship inference over entity fields.
//!
//! Classification is recall-biased: a field that merely looks like a
//! navigation property produces a record, and the report flags every
//! inferred relationship for manual review.

use crate::core::{FieldInfo, RelationKind, Relationship};
use once_cell::sync::Lazy;
use regex::Regex;

/// Collection wrappers that mark a one-to-many navigation.
static COLLECTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:ICollection|List)<(\w+)>$").unwrap());

/// Primitive tokens that can never be the target of a navigation.
const SCALAR_TYPES: &[&str] = &[
    "string", "int", "bool", "DateTime", "decimal", "float", "double",
];

/// Field names with this suffix are backing key columns, not navigations.
const FOREIGN_KEY_SUFFIX: &str = "Id";

/// Classify the fields of one entity into relationship records.
///
/// A `Customer Customer` field infers many-to-one; `ICollection<Order>`
/// infers one-to-many; `CustomerId` infers nothing, so a paired
/// navigation/key property never produces two records.
pub fn resolve_relationships(owner: &str, fields: &[FieldInfo]) -> Vec<Relationship> {
    fields
        .iter()
        .filter_map(|f| classify_field(owner, f))
        .collect()
}

fn classify_field(owner: &str, field: &FieldInfo) -> Option<Relationship> {
    if let Some(caps) = COLLECTION_RE.captures(&field.source_type) {
        return Some(Relationship {
            kind: RelationKind::OneToMany,
            owner: owner.to_string(),
            related: caps[1].to_string(),
            field: field.name.clone(),
        });
    }

    if is_navigation_candidate(&field.source_type) && !field.name.ends_with(FOREIGN_KEY_SUFFIX) {
        return Some(Relationship {
            kind: RelationKind::ManyToOne,
            owner: owner.to_string(),
            related: field.source_type.clone(),
            field: field.name.clone(),
        });
    }

    None
}

/// A bare identifier that is not a known scalar token.
fn is_navigation_candidate(source_type: &str) -> bool {
    !source_type.is_empty()
        && source_type.chars().all(|c| c.is_alphanumeric() || c == '_')
        && !SCALAR_TYPES.contains(&source_type)
}
