//! Pure case-conversion helpers shared by the renderers.

/// Convert PascalCase or camelCase to snake_case.
///
/// A separator is inserted at each lower-to-upper transition and before
/// the final capital of an upper-case run followed by a lower-case run
/// (`HTMLParser` becomes `html_parser`). Already-snake input is returned
/// unchanged, so the function is idempotent.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let boundary = match chars.get(i.wrapping_sub(1)) {
                Some(prev) if i > 0 => {
                    prev.is_lowercase()
                        || prev.is_ascii_digit()
                        || (prev.is_uppercase()
                            && chars.get(i + 1).is_some_and(|n| n.is_lowercase()))
                }
                _ => false,
            };
            if boundary {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert a file stem or identifier to PascalCase, splitting on
/// underscores, hyphens, and whitespace.
pub fn to_pascal_case(name: &str) -> String {
    name.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pascal_to_snake() {
        assert_eq!(to_snake_case("OrderItem"), "order_item");
        assert_eq!(to_snake_case("Customer"), "customer");
        assert_eq!(to_snake_case("customerId"), "customer_id");
    }

    #[test]
    fn upper_runs_keep_one_separator() {
        assert_eq!(to_snake_case("HTMLParser"), "html_parser");
        assert_eq!(to_snake_case("OrderID"), "order_id");
    }

    #[test]
    fn digits_form_boundaries() {
        assert_eq!(to_snake_case("Address2Line"), "address2_line");
    }

    #[test]
    fn snake_case_is_idempotent() {
        for name in ["OrderItem", "HTMLParser", "customerId", "already_snake", "x"] {
            let once = to_snake_case(name);
            assert_eq!(to_snake_case(&once), once);
        }
    }

    #[test]
    fn stems_become_pascal_components() {
        assert_eq!(to_pascal_case("order_details"), "OrderDetails");
        assert_eq!(to_pascal_case("my-view name"), "MyViewName");
        assert_eq!(to_pascal_case("Index"), "Index");
    }
}
