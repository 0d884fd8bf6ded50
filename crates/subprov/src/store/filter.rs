use core::fmt;
use serde_json::{Map, Value};

/// A stored document: a JSON object.
pub type Document = Map<String, Value>;

/// A conjunction of field-equality conditions addressing documents within a
/// collection.
///
/// Fields keep their insertion order so filters render the same way in logs
/// every time. Matching compares whole JSON values, so nested objects (a slice
/// identifier, for instance) must be equal in full.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filter {
    fields: Vec<(String, Value)>,
}

impl Filter {
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Adds `field == value`, replacing an earlier condition on the same
    /// field.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        let field = field.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((field, value)),
        }
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `true` if every condition holds for `document`. An empty filter
    /// matches everything.
    pub fn matches(&self, document: &Document) -> bool {
        self.fields
            .iter()
            .all(|(name, value)| document.get(name) == Some(value))
    }

    /// Writes the filter's fields into `document`, the way an upsert seeds a
    /// newly inserted document with its query.
    pub fn overlay(&self, document: &mut Document) {
        for (name, value) in &self.fields {
            document.insert(name.clone(), value.clone());
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        f.write_str("}")
    }
}
