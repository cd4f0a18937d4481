//! Automobile type map.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::AutomobileId;

/// Maps each automobile id to its type label.
///
/// Established once per run and immutable thereafter; the planner only ever
/// reads it. Type labels are free-form strings matched exactly against the
/// labels used in the constraint set.
///
/// # Examples
///
/// ```
/// use u_loading::models::TypeMap;
///
/// let types: TypeMap = [(1, "T1"), (2, "T2")].into_iter().collect();
/// assert_eq!(types.get(1), Some("T1"));
/// assert_eq!(types.get(9), None);
/// assert_eq!(types.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMap {
    types: FxHashMap<AutomobileId, String>,
}

impl TypeMap {
    /// Creates an empty type map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the type label of an automobile.
    pub fn insert(&mut self, automobile: AutomobileId, auto_type: impl Into<String>) {
        self.types.insert(automobile, auto_type.into());
    }

    /// Type label of `automobile`, if registered.
    pub fn get(&self, automobile: AutomobileId) -> Option<&str> {
        self.types.get(&automobile).map(String::as_str)
    }

    /// Returns `true` if `automobile` has a registered type.
    pub fn contains(&self, automobile: AutomobileId) -> bool {
        self.types.contains_key(&automobile)
    }

    /// Number of registered automobiles.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no automobile is registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Registered automobile ids, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = AutomobileId> + '_ {
        self.types.keys().copied()
    }

    /// A new map holding only the given automobiles.
    ///
    /// Ids without a registered type are skipped.
    pub fn subset(&self, automobiles: impl IntoIterator<Item = AutomobileId>) -> TypeMap {
        let mut out = TypeMap::new();
        for id in automobiles {
            if let Some(label) = self.types.get(&id) {
                out.types.insert(id, label.clone());
            }
        }
        out
    }
}

impl<I: Into<String>> FromIterator<(AutomobileId, I)> for TypeMap {
    fn from_iter<T: IntoIterator<Item = (AutomobileId, I)>>(iter: T) -> Self {
        let mut out = TypeMap::new();
        for (id, label) in iter {
            out.insert(id, label);
        }
        out
    }
}
