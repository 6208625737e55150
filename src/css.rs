use indexmap::IndexMap;

/// CSS property map, kept in insertion order so generated markup is stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Css(IndexMap<String, String>);

impl Css {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: &str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        self.0.insert(property.to_string(), value);
    }

    pub fn set_opt(&mut self, property: &str, value: Option<String>) {
        if let Some(v) = value {
            self.set(property, v);
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        self.0.shift_remove(property)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.0.contains_key(property)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay `other` onto `self`; `other` wins on conflicts.
    pub fn extend(&mut self, other: &Css) {
        for (k, v) in other.iter() {
            self.0.insert(k.to_string(), v.to_string());
        }
    }

    /// Copy only the properties `self` does not define yet.
    pub fn fill_from(&mut self, other: &Css) {
        for (k, v) in other.iter() {
            if !self.0.contains_key(k) {
                self.0.insert(k.to_string(), v.to_string());
            }
        }
    }

    pub fn to_inline(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn to_rule(&self, selector: &str) -> String {
        let body: String = self.0.iter().map(|(k, v)| format!("  {k}: {v};\n")).collect();
        format!("{selector} {{\n{body}}}\n")
    }
}
