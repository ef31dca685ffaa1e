/// One row of the debug table.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugField {
    pub label: String,
    pub value: String,
}

/// A labeled section holding an ordered key -> field mapping, shaped for a
/// debug-information renderer.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugSection {
    pub label: String,
    pub fields: Vec<(String, DebugField)>,
}

impl DebugSection {
    pub(crate) fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            fields: Vec::new(),
        }
    }

    pub(crate) fn push(
        &mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.fields.push((
            key.into(),
            DebugField {
                label: label.into(),
                value: value.into(),
            },
        ));
    }

    /// Field lookup by key, insertion order preserved elsewhere.
    pub fn get(&self, key: &str) -> Option<&DebugField> {
        self.fields
            .iter()
            .find_map(|(k, field)| (k == key).then_some(field))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }
}
