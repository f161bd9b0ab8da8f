use serde::{Deserialize, Serialize};

/// Data type of an externally defined custom field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Number,
    Boolean,
    Date,
    Array,
    SingleSelect,
    MultiSelect,
}

/// One entry of the custom-field catalog supplied by the caller. The core
/// only reads these; it never defines or validates the catalog itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Stable identifier used as the key in every yearly record.
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    /// Numeric bounds, honored for `Number` fields.
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Choice list for select fields; also the token pool for `Array`.
    pub options: Vec<String>,
}

impl FieldDef {
    /// Shorthand constructor for a field without bounds or options.
    pub fn new(id: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind,
            min: None,
            max: None,
            options: Vec::new(),
        }
    }

    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|s| s.to_string()).collect();
        self
    }
}
