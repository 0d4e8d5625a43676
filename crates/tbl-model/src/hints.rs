//! Requested field types and the per-import conversion plan.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::value::FieldType;

/// Field types requested through header annotations or override lists.
///
/// A name holds at most one hint; inserting again replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldHints {
    hints: BTreeMap<String, FieldType>,
}

impl FieldHints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, field_type: FieldType) {
        self.hints.insert(name.into(), field_type);
    }

    pub fn get(&self, name: &str) -> Option<FieldType> {
        self.hints.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.hints.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.hints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FieldType)> {
        self.hints.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, FieldType)> for FieldHints {
    fn from_iter<I: IntoIterator<Item = (K, FieldType)>>(iter: I) -> Self {
        let mut hints = Self::new();
        for (name, field_type) in iter {
            hints.insert(name, field_type);
        }
        hints
    }
}

/// Fields that need converting, in sample-record order.
///
/// Fields not listed are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionPlan {
    targets: IndexMap<String, FieldType>,
}

impl ConversionPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, target: FieldType) {
        self.targets.insert(field.into(), target);
    }

    pub fn get(&self, field: &str) -> Option<FieldType> {
        self.targets.get(field).copied()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FieldType)> {
        self.targets.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn into_inner(self) -> IndexMap<String, FieldType> {
        self.targets
    }
}

impl<K: Into<String>> FromIterator<(K, FieldType)> for ConversionPlan {
    fn from_iter<I: IntoIterator<Item = (K, FieldType)>>(iter: I) -> Self {
        let mut plan = Self::new();
        for (field, target) in iter {
            plan.insert(field, target);
        }
        plan
    }
}
