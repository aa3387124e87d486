//! Django model rendering.

use crate::core::{FieldInfo, RelationKind, Relationship, StructuralEntity};
use crate::generate::case::to_snake_case;
use crate::mapping::{django_field, map_type};
use std::fmt::Write;

const HEADER: &str = r#""""Django models generated from Entity Framework models."""

from django.db import models
"#;

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
    let _ = writeln!(out, "class {}(models.Model):", entity.name);
    let _ = writeln!(
        out,
        "    \"\"\"Migrated from {}.{}\"\"\"",
        entity.namespace, entity.name
    );
    out.push('\n');

    for field in &entity.fields {
        // Django provides the integer `id` primary key automatically.
        if field.is_key && field.name.eq_ignore_ascii_case("id") {
            continue;
        }
        let _ = writeln!(
            out,
            "    {} = {}",
            to_snake_case(&field.name),
            render_field(field)
        );
    }

    for rel in &entity.relationships {
        let _ = writeln!(
            out,
            "    # {}: {}",
            to_snake_case(&rel.field),
            render_relationship(rel)
        );
    }

    if let Some(table) = &entity.table_name {
        out.push('\n');
        let _ = writeln!(out, "    class Meta:");
        let _ = writeln!(out, "        db_table = \"{table}\"");
    }
    out.push('\n');
}

/// Compose the Django field type with the property's modifiers.
pub fn render_field(field: &FieldInfo) -> String {
    let (python, _) = map_type(&field.source_type);
    let mut django_type = django_field(python);
    let mut args: Vec<String> = Vec::new();

    if django_type == "CharField" {
        args.push(format!("max_length={}", field.max_length.unwrap_or(255)));
    }
    if python == "Decimal" {
        args.push("max_digits=18".to_string());
        args.push("decimal_places=2".to_string());
    }
    if field.nullable {
        args.push("null=True".to_string());
        args.push("blank=True".to_string());
    }
    if let (true, Some(table)) = (field.is_foreign_key, field.foreign_table.as_deref()) {
        django_type = "ForeignKey";
        args.insert(0, format!("\"{table}\""));
        args.push("on_delete=models.CASCADE".to_string());
    }

    format!("models.{}({})", django_type, args.join(", "))
}

/// Advisory line for an inferred relationship. The many side owns the
/// ForeignKey in Django, so these are emitted as guidance comments
/// rather than fields.
pub fn render_relationship(rel: &Relationship) -> String {
    match rel.kind {
        RelationKind::ManyToOne => format!(
            "consider models.ForeignKey(\"{}\", on_delete=models.CASCADE)",
            rel.related
        ),
        RelationKind::OneToMany => format!("reverse accessor for {}", rel.related),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn char_field_defaults_to_255() {
        assert_eq!(render_field(&field("Name", "string")), "models.CharField(max_length=255)");
    }

    #[test]
    fn declared_max_length_is_used() {
        let mut name = field("Name", "string");
        name.max_length = Some(80);
        assert_eq!(render_field(&name), "models.CharField(max_length=80)");
    }

    #[test]
    fn decimal_fields_carry_digits_and_places() {
        assert_eq!(
            render_field(&field("Total", "decimal")),
            "models.DecimalField(max_digits=18, decimal_places=2)"
        );
    }

    #[test]
    fn nullable_fields_get_null_and_blank() {
        let mut shipped = field("ShippedAt", "DateTime");
        shipped.nullable = true;
        assert_eq!(
            render_field(&shipped),
            "models.DateTimeField(null=True, blank=True)"
        );
    }

    #[test]
    fn foreign_keys_become_django_foreign_keys() {
        let mut fk = field("CustomerId", "int");
        fk.is_foreign_key = true;
        fk.foreign_table = Some("Customer".into());
        assert_eq!(
            render_field(&fk),
            "models.ForeignKey(\"Customer\", on_delete=models.CASCADE)"
        );
    }

    #[test]
    fn auto_id_is_suppressed_and_meta_emitted() {
        let mut id = field("Id", "int");
        id.is_key = true;
        let entity = StructuralEntity {
            name: "Order".into(),
            namespace: "Shop.Models".into(),
            fields: vec![id, field("Total", "decimal")],
            base_class: None,
            table_name: Some("orders".into()),
            relationships: vec![],
            file: PathBuf::from("Order.cs"),
        };

        let rendered = render(&[entity]);
        assert!(!rendered.contains("    id ="));
        assert!(rendered.contains("    total = models.DecimalField"));
        assert!(rendered.contains("db_table = \"orders\""));
    }
}
