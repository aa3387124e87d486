//! Deterministic type translation from C# tokens to Python/SQLAlchemy
//! representations.
//!
//! The table is ordered: specific tokens are checked before the generic
//! ones they contain (`long` before `int`, `byte[]` before `byte`), so a
//! generic token never masks a specific one. Lookup is a total function;
//! anything unmatched falls back to the string mapping.

pub mod relationships;

use serde::{Deserialize, Serialize};

/// One row of the type-mapping table.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeMapping {
    pub source: &'static str,
    pub python: &'static str,
    pub storage: &'static str,
}

/// Ordered C# to (Python, SQLAlchemy) mappings. Matched by
/// case-insensitive substring.
pub static TYPE_MAPPINGS: &[TypeMapping] = &[
    TypeMapping { source: "string", python: "str", storage: "String" },
    TypeMapping { source: "long", python: "int", storage: "BigInteger" },
    TypeMapping { source: "bool", python: "bool", storage: "Boolean" },
    TypeMapping { source: "datetime", python: "datetime", storage: "DateTime" },
    TypeMapping { source: "decimal", python: "Decimal", storage: "Numeric" },
    TypeMapping { source: "double", python: "float", storage: "Float" },
    TypeMapping { source: "float", python: "float", storage: "Float" },
    TypeMapping { source: "guid", python: "str", storage: "String(36)" },
    TypeMapping { source: "byte[]", python: "bytes", storage: "LargeBinary" },
    TypeMapping { source: "short", python: "int", storage: "SmallInteger" },
    TypeMapping { source: "byte", python: "int", storage: "SmallInteger" },
    TypeMapping { source: "int", python: "int", storage: "Integer" },
];

/// The fallback used when no table entry matches.
pub const DEFAULT_MAPPING: (&str, &str) = ("str", "String");

/// Map a C# type token to its (Python type, SQLAlchemy type) pair.
///
/// Total over all inputs: unknown tokens resolve to the default rather
/// than failing. Nullability and max-length are applied by the caller.
pub fn map_type(source_type: &str) -> (&'static str, &'static str) {
    let lowered = source_type.to_lowercase();
    TYPE_MAPPINGS
        .iter()
        .find(|m| lowered.contains(m.source))
        .map(|m| (m.python, m.storage))
        .unwrap_or(DEFAULT_MAPPING)
}

/// Django field name for a mapped Python type. Unknown types get a
/// CharField, matching the string fallback of [`map_type`].
pub fn django_field(python_type: &str) -> &'static str {
    static FIELD_MAPPINGS: &[(&str, &str)] = &[
        ("str", "CharField"),
        ("int", "IntegerField"),
        ("bool", "BooleanField"),
        ("datetime", "DateTimeField"),
        ("Decimal", "DecimalField"),
        ("float", "FloatField"),
        ("bytes", "BinaryField"),
    ];

    FIELD_MAPPINGS
        .iter()
        .find(|(py, _)| *py == python_type)
        .map(|(_, dj)| *dj)
        .unwrap_or("CharField")
}
