//! Template variables: `{{expr}}` placeholders evaluated against JSON data.

use serde_json::Value;

/// Layered variable scope. Inner layers shadow outer ones without
/// modifying them; the document's own properties sit in the outermost
/// layer under `doc`.
#[derive(Clone, Debug, Default)]
pub struct Scope<'a> {
    layers: Vec<&'a Value>,
}

impl<'a> Scope<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new scope with `layer` shadowing everything in `self`.
    pub fn with_layer(&self, layer: &'a Value) -> Scope<'a> {
        let mut layers = self.layers.clone();
        layers.push(layer);
        Scope { layers }
    }

    pub fn lookup(&self, name: &str) -> Option<&'a Value> {
        self.layers
            .iter()
            .rev()
            .find_map(|&layer| layer.as_object().and_then(|o| o.get(name)))
    }
}

/// Evaluates the expression inside `{{ }}`. `None` means the variable is
/// undefined and renders as an empty string.
pub trait VariableEvaluator: Sync {
    fn evaluate(&self, expr: &str, scope: &Scope) -> Option<String>;
}

/// Dotted paths into the data: `customer.name`, `items.0.price`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathEvaluator;

impl VariableEvaluator for PathEvaluator {
    fn evaluate(&self, expr: &str, scope: &Scope) -> Option<String> {
        let mut segments = expr.trim().split('.').map(str::trim);
        let mut value = scope.lookup(segments.next()?)?;
        for segment in segments {
            value = match value {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(display(value))
    }
}

pub fn display(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn inner_layers_shadow_outer() {
        let doc = json!({"doc": {"title": "Report"}, "name": "outer"});
        let data = json!({"name": "inner"});
        let scope = Scope::new().with_layer(&doc).with_layer(&data);
        assert_eq!(PathEvaluator.evaluate("name", &scope).as_deref(), Some("inner"));
        assert_eq!(PathEvaluator.evaluate("doc.title", &scope).as_deref(), Some("Report"));
        let outer_only = Scope::new().with_layer(&doc);
        assert_eq!(PathEvaluator.evaluate("name", &outer_only).as_deref(), Some("outer"));
    }

    #[test]
    fn paths_index_arrays_and_format_scalars() {
        let data = json!({"items": [{"price": 9.5}, {"price": 3}], "paid": true, "note": null});
        let scope = Scope::new().with_layer(&data);
        assert_eq!(PathEvaluator.evaluate(" items.1.price ", &scope).as_deref(), Some("3"));
        assert_eq!(PathEvaluator.evaluate("items.0.price", &scope).as_deref(), Some("9.5"));
        assert_eq!(PathEvaluator.evaluate("paid", &scope).as_deref(), Some("true"));
        assert_eq!(PathEvaluator.evaluate("note", &scope).as_deref(), Some(""));
        assert_eq!(PathEvaluator.evaluate("items.7.price", &scope), None);
        assert_eq!(PathEvaluator.evaluate("missing", &scope), None);
    }
}
