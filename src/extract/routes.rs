//! Controller and route recognition.
//!
//! Verb detection is a proximity heuristic, not a parse: for each action
//! the whole controller text is searched for an `[HttpX]` attribute
//! followed (anywhere) by that action's declaration, trying POST, PUT,
//! DELETE in that order and defaulting to GET. On controllers with many
//! closely-spaced actions this can misattribute a verb; that is a known
//! limitation of the approximation, kept deliberately.

use crate::core::{ControllerInfo, HttpVerb, RouteDescriptor, SourceUnit};
use once_cell::sync::Lazy;
use regex::Regex;

static CONTROLLER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"class\s+(\w+Controller)").unwrap());

/// Public action method, optionally async and Task-wrapped.
static ACTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"public\s+(?:async\s+)?(?:Task<)?(\w+)>?\s+(\w+)\s*\(").unwrap());

/// Verb attributes in fixed priority order; first match wins.
const VERB_MARKERS: &[(&str, HttpVerb)] = &[
    ("HttpPost", HttpVerb::Post),
    ("HttpPut", HttpVerb::Put),
    ("HttpDelete", HttpVerb::Delete),
];

/// Parse one controller file. Returns `None` when no `*Controller` class
/// name is found; the file is then skipped without affecting the run.
pub fn extract_controller(unit: &SourceUnit) -> Option<ControllerInfo> {
    let text = &unit.text;
    let name = CONTROLLER_RE.captures(text)?[1].to_string();
    let routes = extract_routes(text, &name);

    Some(ControllerInfo {
        name,
        file: unit.path.clone(),
        routes,
    })
}

/// Enumerate actions in declaration order and attach a verb to each.
pub fn extract_routes(text: &str, controller: &str) -> Vec<RouteDescriptor> {
    ACTION_RE
        .captures_iter(text)
        .map(|caps| RouteDescriptor {
            controller: controller.to_string(),
            action: caps[2].to_string(),
            verb: detect_verb(text, &caps[2]),
            return_type: caps[1].to_string(),
        })
        .collect()
}

/// Whole-scope proximity search for the verb attribute of one action.
fn detect_verb(scope: &str, action: &str) -> HttpVerb {
    for (marker, verb) in VERB_MARKERS {
        let pattern = format!(r"(?s)\[{}.*?\]\s*public.*?{}", marker, regex::escape(action));
        if Regex::new(&pattern).map(|re| re.is_match(scope)).unwrap_or(false) {
            return *verb;
        }
    }
    HttpVerb::Get
}
