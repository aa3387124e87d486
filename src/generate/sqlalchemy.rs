//! Declarative SQLAlchemy model rendering.

use crate::core::{FieldInfo, RelationKind, Relationship, StructuralEntity};
use crate::generate::case::to_snake_case;
use crate::generate::table_name;
use crate::mapping::map_type;
use std::fmt::Write;

const HEADER: &str = r#""""SQLAlchemy models generated from Entity Framework models."""

from datetime import datetime
from decimal import Decimal
from sqlalchemy import Column, Integer, String, Boolean, DateTime, Numeric, Float, ForeignKey, Text, LargeBinary, BigInteger, SmallInteger
from sqlalchemy.ext.declarative import declarative_base
from sqlalchemy.orm import relationship

Base = declarative_base()
"#;

/// Render all entities into one module, preserving the given order.
pub fn render(entities: &[StructuralEntity]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for entity in entities {
        out.push('\n');
        render_entity(&mut out, entity);
    }
    out
}

fn render_entity(out: &mut String, entity: &StructuralEntity) {
    let _ = writeln!(out, "class {}(Base):", entity.name);
    let _ = writeln!(
        out,
        "    \"\"\"Migrated from {}.{}\"\"\"",
        entity.namespace, entity.name
    );
    let _ = writeln!(out, "    __tablename__ = \"{}\"", table_name(entity));
    out.push('\n');

    for field in &entity.fields {
        let _ = writeln!(
            out,
            "    {} = {}",
            to_snake_case(&field.name),
            render_column(field)
        );
    }

    if !entity.relationships.is_empty() {
        out.push('\n');
        for rel in &entity.relationships {
            let _ = writeln!(
                out,
                "    {} = {}",
                to_snake_case(&rel.field),
                render_relationship(rel)
            );
        }
    }
    out.push('\n');
}

/// Compose the mapped storage type with the field's modifiers.
pub fn render_column(field: &FieldInfo) -> String {
    let (_, storage) = map_type(&field.source_type);

    let mut parts: Vec<String> = vec![storage.to_string()];
    if let Some(len) = field.max_length {
        parts[0] = format!("String({len})");
    }
    if let (true, Some(table)) = (field.is_foreign_key, field.foreign_table.as_deref()) {
        parts.insert(0, format!("ForeignKey(\"{}.id\")", to_snake_case(table)));
    }

    let mut args: Vec<&str> = Vec::new();
    if field.is_key {
        args.push("primary_key=True");
    }
    if !field.nullable && !field.is_key {
        args.push("nullable=False");
    }

    if args.is_empty() {
        format!("Column({})", parts.join(", "))
    } else {
        format!("Column({}, {})", parts.join(", "), args.join(", "))
    }
}

pub fn render_relationship(rel: &Relationship) -> String {
    match rel.kind {
        RelationKind::OneToMany => format!(
            "relationship(\"{}\", back_populates=\"{}\")",
            rel.related,
            to_snake_case(&rel.field)
        ),
        RelationKind::ManyToOne => format!("relationship(\"{}\")", rel.related),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RelationKind;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn field(name: &str, source_type: &str) -> FieldInfo {
        FieldInfo {
            name: name.to_string(),
            source_type: source_type.to_string(),
            nullable: false,
            is_key: false,
            is_required: false,
            is_foreign_key: false,
            foreign_table: None,
            max_length: None,
            annotations: vec![],
        }
    }

    #[test]
    fn key_column_gets_primary_key_only() {
        let mut id = field("Id", "int");
        id.is_key = true;
        assert_eq!(render_column(&id), "Column(Integer, primary_key=True)");
    }

    #[test]
    fn non_nullable_column_gets_nullable_false() {
        assert_eq!(render_column(&field("Total", "decimal")), "Column(Numeric, nullable=False)");
    }

    #[test]
    fn nullable_column_has_no_constraint_args() {
        let mut shipped = field("ShippedAt", "DateTime");
        shipped.nullable = true;
        assert_eq!(render_column(&shipped), "Column(DateTime)");
    }

    #[test]
    fn max_length_overrides_storage_type() {
        let mut name = field("Name", "string");
        name.max_length = Some(80);
        assert_eq!(render_column(&name), "Column(String(80), nullable=False)");
    }

    #[test]
    fn foreign_key_wraps_the_column() {
        let mut fk = field("CustomerId", "int");
        fk.is_foreign_key = true;
        fk.foreign_table = Some("Customer".into());
        assert_eq!(
            render_column(&fk),
            "Column(ForeignKey(\"customer.id\"), Integer, nullable=False)"
        );
    }

    #[test]
    fn relationship_rendering_by_kind() {
        let one_to_many = Relationship {
            kind: RelationKind::OneToMany,
            owner: "Customer".into(),
            related: "Order".into(),
            field: "Orders".into(),
        };
        assert_eq!(
            render_relationship(&one_to_many),
            "relationship(\"Order\", back_populates=\"orders\")"
        );

        let many_to_one = Relationship {
            kind: RelationKind::ManyToOne,
            owner: "Order".into(),
            related: "Customer".into(),
            field: "Customer".into(),
        };
        assert_eq!(render_relationship(&many_to_one), "relationship(\"Customer\")");
    }

    #[test]
    fn fields_render_in_discovery_order_then_relationships() {
        let entity = StructuralEntity {
            name: "Order".into(),
            namespace: "Shop.Models".into(),
            fields: vec![field("Id", "int"), field("Total", "decimal"), field("Customer", "Customer")],
            base_class: None,
            table_name: None,
            relationships: vec![Relationship {
                kind: RelationKind::ManyToOne,
                owner: "Order".into(),
                related: "Customer".into(),
                field: "Customer".into(),
            }],
            file: PathBuf::from("Order.cs"),
        };

        let rendered = render(&[entity]);
        let id_pos = rendered.find("    id = ").unwrap();
        let total_pos = rendered.find("    total = ").unwrap();
        let customer_col_pos = rendered.find("    customer = Column").unwrap();
        let rel_pos = rendered.find("    customer = relationship").unwrap();
        assert!(id_pos < total_pos);
        assert!(total_pos < customer_col_pos);
        assert!(customer_col_pos < rel_pos);
        assert!(rendered.contains("__tablename__ = \"order\""));
    }
}
