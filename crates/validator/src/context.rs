//! Read-only view over one extraction result.

use gridlint_value::Scalar;
use indexmap::{IndexMap, IndexSet};

static ABSENT: Scalar = Scalar::Absent;

/// Immutable snapshot of field values and their source locations for one
/// validation run.
///
/// Lookups never fail: a field the extractor did not produce reads back as
/// [`Scalar::Absent`], and a field with no known location reads back as
/// `None`. The location map may legitimately contain entries with no
/// corresponding value (mapped cells that were empty at extraction time).
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    values: IndexMap<String, Scalar>,
    locations: IndexMap<String, String>,
}

impl ValidationContext {
    /// Build a context from extracted values and the field-to-location map.
    pub fn new(values: IndexMap<String, Scalar>, locations: IndexMap<String, String>) -> Self {
        Self { values, locations }
    }

    /// The value of a field, or `Absent` if the field is unknown.
    pub fn value(&self, field: &str) -> &Scalar {
        self.values.get(field).unwrap_or(&ABSENT)
    }

    /// The source location of a field (e.g. `Sheet1!B2`), if known.
    pub fn location(&self, field: &str) -> Option<&str> {
        self.locations.get(field).map(String::as_str)
    }

    /// Resolve a list of field names to their locations, de-duplicated, in
    /// first-encounter order. Fields with no known location are omitted.
    pub fn locations_for<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut seen: IndexSet<&str> = IndexSet::new();
        for field in fields {
            if let Some(location) = self.location(field) {
                seen.insert(location);
            }
        }
        seen.into_iter().map(str::to_owned).collect()
    }

    /// Number of extracted values in this context.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the context holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
