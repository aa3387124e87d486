//! Razor to JSX conversion.
//!
//! The transformation is a fixed, ordered sequence of independent text
//! substitution rules applied left-to-right over the whole view. Each
//! rule is local and non-recursive: nested blocks of the same kind do
//! not match the brace-naive patterns and pass through as literal text,
//! where the residual scan picks them up for the report. Anything the
//! rules cannot convert safely is replaced with an explicit marker
//! comment so no construct is ever silently dropped.

use crate::core::SourceUnit;
use crate::generate::case::to_pascal_case;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Marker prefix for unconvertible constructs; also what the report
/// scans for when listing manual-review items.
pub const TODO_MARKER: &str = "{/* TODO:";

/// The result of converting one view.
#[derive(Clone, Debug)]
pub struct ConversionOutcome {
    pub component_name: String,
    pub code: String,
    /// Model/ViewBag members the view referenced, for the props contract.
    pub props: Vec<String>,
    /// Marker comments inserted for unconvertible constructs.
    pub todo_count: usize,
    /// Razor constructs left as literal passthrough (nested blocks,
    /// unknown helpers); each needs manual completion.
    pub residual: Vec<String>,
}

/// Convert one Razor view into a complete React component.
pub fn convert_unit(unit: &SourceUnit) -> ConversionOutcome {
    let component_name = component_name_for(&unit.path);
    let props = extract_props(&unit.text);
    let jsx = convert_markup(&unit.text);
    let todo_count = jsx.matches(TODO_MARKER).count();
    let residual = residual_constructs(&jsx);
    let code = render_component(&component_name, &jsx, &props);

    ConversionOutcome {
        component_name,
        code,
        props,
        todo_count,
        residual,
    }
}

/// Component name from the file stem, PascalCased.
pub fn component_name_for(path: &std::path::Path) -> String {
    path.file_stem()
        .map(|s| to_pascal_case(&s.to_string_lossy()))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Component".to_string())
}

/// The ordered rule pipeline. Order matters and is fixed: directives,
/// sections, comments, conditionals, loops, code blocks, helper calls,
/// tag helpers, model expressions, bare expressions, attribute renames,
/// whitespace.
pub fn convert_markup(text: &str) -> String {
    let mut jsx = text.to_string();
    jsx = strip_directives(&jsx);
    jsx = rewrite_sections(&jsx);
    jsx = rewrite_comments(&jsx);
    jsx = rewrite_conditionals(&jsx);
    jsx = rewrite_loops(&jsx);
    jsx = rewrite_code_blocks(&jsx);
    jsx = rewrite_html_helpers(&jsx);
    jsx = rewrite_tag_helpers(&jsx);
    jsx = rewrite_model_expressions(&jsx);
    jsx = rewrite_bare_expressions(&jsx);
    jsx = fix_attributes(&jsx);
    clean_whitespace(&jsx)
}

static PAGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"@page\s+"[^"]*""#).unwrap());
static MODEL_DIRECTIVE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@model\s+[\w\.]+").unwrap());
static USING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@using\s+[\w\.]+").unwrap());
static INJECT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@inject\s+[\w\.]+\s+\w+").unwrap());

fn strip_directives(text: &str) -> String {
    let mut out = PAGE_RE.replace_all(text, "").into_owned();
    out = MODEL_DIRECTIVE_RE.replace_all(&out, "").into_owned();
    out = INJECT_RE.replace_all(&out, "").into_owned();
    // Plain import directives only; `@using (Html.BeginForm...)` is a
    // statement and is handled by the helper rules.
    out = USING_RE.replace_all(&out, "").into_owned();
    out
}

static SECTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@section\s+(\w+)\s*\{").unwrap());

fn rewrite_sections(text: &str) -> String {
    SECTION_RE
        .replace_all(text, "{/* TODO: Handle section $1 */}")
        .into_owned()
}

static COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)@\*(.*?)\*@").unwrap());

fn rewrite_comments(text: &str) -> String {
    COMMENT_RE.replace_all(text, "{/*$1*/}").into_owned()
}

static IF_ELSE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)@if\s*\(([^)]+)\)\s*\{([^{}]+)\}\s*@?else\s*\{([^{}]+)\}").unwrap()
});
static IF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)@if\s*\(([^)]+)\)\s*\{([^{}]+)\}").unwrap());

fn rewrite_conditionals(text: &str) -> String {
    // if/else first, so the plain-if rule cannot strand the else arm.
    let out = IF_ELSE_RE.replace_all(text, |caps: &Captures| {
        format!(
            "{{({}) ? (\n  {}\n) : (\n  {}\n)}}",
            js_condition(&caps[1]),
            caps[2].trim(),
            caps[3].trim()
        )
    });
    IF_RE
        .replace_all(&out, |caps: &Captures| {
            format!("{{({}) && (\n  {}\n)}}", js_condition(&caps[1]), caps[2].trim())
        })
        .into_owned()
}

/// C# comparison operators to strict JavaScript equivalents.
fn js_condition(condition: &str) -> String {
    condition.trim().replace("==", "===").replace("!=", "!==")
}

static FOREACH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)@foreach\s*\(\s*(?:var\s+)?(\w+)\s+in\s+([^)]+)\)\s*\{([^{}]+)\}").unwrap()
});
static FOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)@for\s*\([^)]+\)\s*\{[^{}]+\}").unwrap());

fn rewrite_loops(text: &str) -> String {
    let out = FOREACH_RE.replace_all(text, |caps: &Captures| {
        format!(
            "{{({} || []).map(({}, index) => (\n  <div key={{index}}>\n    {}\n  </div>\n))}}",
            caps[2].trim(),
            &caps[1],
            caps[3].trim()
        )
    });
    FOR_RE
        .replace_all(&out, "{/* TODO: Convert @for loop to JSX */}")
        .into_owned()
}

static CODE_BLOCK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)@\{([^{}]+)\}").unwrap());
static ASSIGNMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:var|string|int)\s+(\w+)\s*=\s*([^;]+);").unwrap());

fn rewrite_code_blocks(text: &str) -> String {
    CODE_BLOCK_RE
        .replace_all(text, |caps: &Captures| {
            let code = caps[1].trim();
            let assignments: Vec<String> = ASSIGNMENT_RE
                .captures_iter(code)
                .map(|a| format!("const {} = {};", &a[1], a[2].trim()))
                .collect();
            if assignments.is_empty() {
                format!("{{/* TODO: Convert code block: {code} */}}")
            } else {
                // Statements cannot live inside JSX; hoisting them is left
                // to the developer, so the conversion rides in a marker.
                format!(
                    "{{/* TODO: hoist into component scope:\n  {} */}}",
                    assignments.join("\n  ")
                )
            }
        })
        .into_owned()
}

static HTML_HELPER_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (
            r#"@Html\.ActionLink\("([^"]*)",\s*"([^"]*)",\s*"([^"]*)"\)"#,
            r#"<a href="/$3/$2">$1</a>"#,
        ),
        (r"@using\s*\(Html\.BeginForm\([^)]*\)\)\s*\{", "<form>"),
        (
            r"@Html\.LabelFor\(m\s*=>\s*m\.(\w+)\)",
            r#"<label htmlFor="$1">$1</label>"#,
        ),
        (
            r"@Html\.TextBoxFor\(m\s*=>\s*m\.(\w+)\)",
            r#"<input type="text" name="$1" value={props.$1 || ""} onChange={handleChange} />"#,
        ),
        (
            r"@Html\.PasswordFor\(m\s*=>\s*m\.(\w+)\)",
            r#"<input type="password" name="$1" value={props.$1 || ""} onChange={handleChange} />"#,
        ),
        (
            r"@Html\.TextAreaFor\(m\s*=>\s*m\.(\w+)\)",
            r#"<textarea name="$1" value={props.$1 || ""} onChange={handleChange}></textarea>"#,
        ),
        (
            r"@Html\.CheckBoxFor\(m\s*=>\s*m\.(\w+)\)",
            r#"<input type="checkbox" name="$1" checked={props.$1} onChange={handleChange} />"#,
        ),
        (
            r"@Html\.DropDownListFor\(m\s*=>\s*m\.(\w+),\s*([^)]+)\)",
            "<select name=\"$1\" value={props.$1} onChange={handleChange}>\n  {/* TODO: Add options from $2 */}\n</select>",
        ),
        (
            r"@Html\.ValidationMessageFor\(m\s*=>\s*m\.(\w+)\)",
            r#"{errors.$1 && <span className="error">{errors.$1}</span>}"#,
        ),
        (r"@Html\.AntiForgeryToken\(\)", "{/* TODO: Add CSRF token */}"),
        (
            r"@Html\.Raw\(([^)]+)\)",
            r"<div dangerouslySetInnerHTML={{__html: $1}} />",
        ),
    ]
    .iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), *replacement))
    .collect()
});

static PARTIAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"@Html\.Partial\("([^"]*)"(?:,\s*([^)]+))?\)"#).unwrap());

fn rewrite_html_helpers(text: &str) -> String {
    let mut out = text.to_string();
    for (re, replacement) in HTML_HELPER_RULES.iter() {
        out = re.replace_all(&out, *replacement).into_owned();
    }
    out = PARTIAL_RE
        .replace_all(&out, |caps: &Captures| {
            let name = to_pascal_case(&caps[1]);
            match caps.get(2) {
                Some(model) => format!("<{name}Component {{...({})}} />", model.as_str().trim()),
                None => format!("<{name}Component />"),
            }
        })
        .into_owned();
    out
}

static TAG_HELPER_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (
            r#"<a\s+asp-action="([^"]*)"\s+asp-controller="([^"]*)">"#,
            r#"<a href="/$2/$1">"#,
        ),
        (
            r#"<form\s+asp-action="([^"]*)"\s+asp-controller="([^"]*)">"#,
            "<form onSubmit={handleSubmit}>",
        ),
        (
            r#"<input\s+asp-for="(\w+)""#,
            r#"<input name="$1" value={props.$1 || ""} onChange={handleChange}"#,
        ),
        (r#"<label\s+asp-for="(\w+)">"#, r#"<label htmlFor="$1">"#),
        (
            r#"<span\s+asp-validation-for="(\w+)"></span>"#,
            r#"{errors.$1 && <span className="error">{errors.$1}</span>}"#,
        ),
    ]
    .iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), *replacement))
    .collect()
});

fn rewrite_tag_helpers(text: &str) -> String {
    let mut out = text.to_string();
    for (re, replacement) in TAG_HELPER_RULES.iter() {
        out = re.replace_all(&out, *replacement).into_owned();
    }
    out
}

static MODEL_EXPR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@Model\.(\w+)").unwrap());

fn rewrite_model_expressions(text: &str) -> String {
    MODEL_EXPR_RE.replace_all(text, "{props.$1}").into_owned()
}

static BARE_EXPR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@(\w+)").unwrap());

/// Razor keywords and roots that must stay literal: either the dedicated
/// rules already had their chance (and an unmatched occurrence means a
/// nested or unknown construct) or the token is not an expression.
const EXPRESSION_GUARD: &[&str] = &[
    "if", "else", "foreach", "for", "section", "using", "model", "page", "inject", "Html",
    "Model", "ViewBag", "functions", "code",
];

fn rewrite_bare_expressions(text: &str) -> String {
    BARE_EXPR_RE
        .replace_all(text, |caps: &Captures| {
            let word = &caps[1];
            let end = caps.get(0).map(|m| m.end()).unwrap_or(0);
            let next = text[end..].chars().next();
            if EXPRESSION_GUARD.contains(&word) || matches!(next, Some('{') | Some('(')) {
                caps[0].to_string()
            } else {
                format!("{{{word}}}")
            }
        })
        .into_owned()
}

static CLASS_ATTR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"\bclass=""#).unwrap());
static FOR_ATTR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"\bfor=""#).unwrap());
static STYLE_ATTR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"style="([^"]*)""#).unwrap());

fn fix_attributes(text: &str) -> String {
    let mut out = CLASS_ATTR_RE.replace_all(text, "className=\"").into_owned();
    out = FOR_ATTR_RE.replace_all(&out, "htmlFor=\"").into_owned();
    out = out.replace("checked=\"checked\"", "checked={true}");
    out = out.replace("disabled=\"disabled\"", "disabled={true}");
    out = out.replace("readonly=\"readonly\"", "readOnly={true}");
    STYLE_ATTR_RE
        .replace_all(&out, |caps: &Captures| convert_inline_style(&caps[1]))
        .into_owned()
}

/// Inline CSS to a JSX style object with camelCased keys.
fn convert_inline_style(style: &str) -> String {
    let pairs: Vec<String> = style
        .split(';')
        .filter_map(|decl| {
            let (key, value) = decl.split_once(':')?;
            let camel = css_key_to_camel(key.trim());
            Some(format!("{camel}: \"{}\"", value.trim()))
        })
        .collect();

    if pairs.is_empty() {
        String::new()
    } else {
        format!("style={{{{{}}}}}", pairs.join(", "))
    }
}

fn css_key_to_camel(key: &str) -> String {
    let mut parts = key.split('-');
    let mut out = parts.next().unwrap_or_default().to_string();
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

static BLANK_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n\s*\n").unwrap());

fn clean_whitespace(text: &str) -> String {
    let collapsed = BLANK_RUN_RE.replace_all(text, "\n\n").into_owned();
    let trimmed: Vec<&str> = collapsed.lines().map(|l| l.trim_end()).collect();
    trimmed.join("\n").trim().to_string()
}

static RESIDUAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@(?:if\b|else\b|foreach\b|for\b|section\b|\{|Html\.\w+|ViewBag\.\w+)").unwrap());

/// Razor constructs still present after the pipeline ran. These are the
/// nested or unknown constructs left as literal passthrough.
pub fn residual_constructs(jsx: &str) -> Vec<String> {
    RESIDUAL_RE
        .find_iter(jsx)
        .map(|m| m.as_str().to_string())
        .collect()
}

static MODEL_REF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@Model\.(\w+)").unwrap());
static VIEWBAG_REF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@ViewBag\.(\w+)").unwrap());

/// Collect the props the component will need, from `@Model.X` and
/// `@ViewBag.X` references in the original view text.
pub fn extract_props(text: &str) -> Vec<String> {
    let mut props: Vec<String> = MODEL_REF_RE
        .captures_iter(text)
        .map(|c| c[1].to_string())
        .chain(
            VIEWBAG_REF_RE
                .captures_iter(text)
                .map(|c| format!("{} (from ViewBag)", &c[1])),
        )
        .collect();
    props.sort();
    props.dedup();
    props
}

/// Wrap converted JSX in a full function component, adding form-handling
/// and error-state hooks only when the markup references them.
pub fn render_component(name: &str, jsx: &str, props: &[String]) -> String {
    let needs_form = jsx.contains("handleChange") || jsx.contains("handleSubmit");
    let needs_errors = jsx.contains("errors.");

    let mut out = String::from("import React from 'react';\n\n");
    if !props.is_empty() {
        out.push_str(&format!("// Props: {}\n", props.join(", ")));
    }
    out.push_str(&format!("const {name} = (props) => {{\n"));

    if needs_form {
        out.push_str(
            "  const [formData, setFormData] = React.useState({});\n\n  \
             const handleChange = (e) => {\n    \
             const { name, value, type, checked } = e.target;\n    \
             setFormData(prev => ({\n      \
             ...prev,\n      \
             [name]: type === 'checkbox' ? checked : value\n    \
             }));\n  };\n\n  \
             const handleSubmit = (e) => {\n    \
             e.preventDefault();\n    \
             console.log('Form data:', formData);\n  };\n\n",
        );
    }
    if needs_errors {
        out.push_str("  const [errors, setErrors] = React.useState({});\n\n");
    }

    out.push_str("  return (\n    <>\n");
    for line in jsx.lines() {
        out.push_str("      ");
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("    </>\n  );\n};\n\n");
    out.push_str(&format!("export default {name};\n"));
    out
}
