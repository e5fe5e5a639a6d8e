//! Local script-hook validation.
//!
//! Entity bodies may embed script hooks: objects carrying a script media
//! `type` plus a `source` (inline script text) or `file` (script path)
//! field. Import with validation enabled checks every hook before any store
//! call is made for that id.

use ent_core::Entity;
use serde_json::Value;

/// Script media types the validator recognizes as hooks.
const SCRIPT_TYPES: &[&str] = &["text/javascript", "groovy"];

/// One invalid hook, located by a JSON-pointer-style path into the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookViolation {
    pub path: String,
    pub reason: String,
}

impl std::fmt::Display for HookViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

/// Check every script hook embedded in `entity`.
///
/// # Errors
///
/// Returns the list of violations when at least one hook is invalid.
pub fn validate_script_hooks(entity: &Entity) -> Result<(), Vec<HookViolation>> {
    let mut violations = Vec::new();
    for (key, value) in entity.fields() {
        walk(value, &format!("/{key}"), &mut violations);
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Render violations as one message for error aggregation.
#[must_use]
pub fn render_violations(violations: &[HookViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn walk(value: &Value, path: &str, out: &mut Vec<HookViolation>) {
    match value {
        Value::Object(map) => {
            if is_script_hook(map) {
                check_hook(map, path, out);
            }
            for (key, child) in map {
                walk(child, &format!("{path}/{key}"), out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                walk(child, &format!("{path}/{index}"), out);
            }
        }
        _ => {}
    }
}

fn is_script_hook(map: &serde_json::Map<String, Value>) -> bool {
    map.get("type")
        .and_then(Value::as_str)
        .is_some_and(|ty| SCRIPT_TYPES.contains(&ty))
}

fn check_hook(map: &serde_json::Map<String, Value>, path: &str, out: &mut Vec<HookViolation>) {
    match map.get("source") {
        Some(Value::String(source)) if !source.trim().is_empty() => {}
        Some(Value::String(_)) => out.push(HookViolation {
            path: path.to_string(),
            reason: "script hook has an empty source".to_string(),
        }),
        Some(_) => out.push(HookViolation {
            path: path.to_string(),
            reason: "script hook source is not a string".to_string(),
        }),
        None if map.contains_key("file") => {}
        None => out.push(HookViolation {
            path: path.to_string(),
            reason: "script hook has neither source nor file".to_string(),
        }),
    }
}
