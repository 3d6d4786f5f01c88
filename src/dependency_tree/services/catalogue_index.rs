use crate::dependency_tree::domain::{ComponentRecord, RawComponent};
use std::collections::HashMap;

/// CatalogueIndex - lookup table from component id to normalized record
///
/// Only top-level records with an id are addressable. Records without one stay
/// out of the table; they still show up through the nested-components path of
/// the forest builder.
#[derive(Debug, Clone, Default)]
pub struct CatalogueIndex {
    records: HashMap<String, ComponentRecord>,
    unaddressable: usize,
}

impl CatalogueIndex {
    /// Builds the index from the raw catalogue
    ///
    /// When an id occurs more than once the later record replaces the earlier
    /// one. This keeps the result deterministic for a given input order; it
    /// does not try to decide which duplicate is "right".
    pub fn build(records: &[RawComponent]) -> Self {
        let mut index = Self::default();

        for raw in records {
            match raw.id.as_deref() {
                Some(id) => {
                    if index
                        .records
                        .insert(id.to_string(), ComponentRecord::from_raw(raw))
                        .is_some()
                    {
                        tracing::debug!("Duplicate component id '{}', keeping the later entry", id);
                    }
                }
                None => index.unaddressable += 1,
            }
        }

        if index.unaddressable > 0 {
            tracing::debug!(
                "{} component(s) without an id cannot be referenced by dependency edges",
                index.unaddressable
            );
        }

        index
    }

    pub fn resolve(&self, id: &str) -> Option<&ComponentRecord> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of input records skipped because they had no id
    pub fn unaddressable_count(&self) -> usize {
        self.unaddressable
    }
}
