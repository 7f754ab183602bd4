use super::error::GenError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Client operation a descriptor is generated for
///
/// Variants are declared in verb order so the derived `Ord` sorts
/// `Delete < Get < Update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Delete,
    Get,
    Update,
}

impl Operation {
    /// All operations in sort order
    pub const ALL: [Operation; 3] = [Operation::Delete, Operation::Get, Operation::Update];

    /// Verb used as the method name prefix (`Get`, `Update`, `Delete`)
    pub fn verb(&self) -> &'static str {
        match self {
            Operation::Delete => "Delete",
            Operation::Get => "Get",
            Operation::Update => "Update",
        }
    }

    /// Lowercase method tag carried on descriptors
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Delete => "delete",
            Operation::Get => "get",
            Operation::Update => "update",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "delete" => Ok(Operation::Delete),
            "get" => Ok(Operation::Get),
            "update" => Ok(Operation::Update),
            other => Err(format!(
                "unknown operation '{other}' (expected get, update or delete)"
            )),
        }
    }
}

/// Ordered, non-empty set of requested operations
///
/// Iterates in [`Operation`] order regardless of the order it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Operation>", into = "Vec<Operation>")]
pub struct OperationSet(BTreeSet<Operation>);

impl OperationSet {
    /// Build a set from any collection of operations; duplicates collapse.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::EmptyOperationSet`] when no operation is given.
    pub fn new(ops: impl IntoIterator<Item = Operation>) -> Result<Self, GenError> {
        let set: BTreeSet<Operation> = ops.into_iter().collect();
        if set.is_empty() {
            return Err(GenError::EmptyOperationSet);
        }
        Ok(OperationSet(set))
    }

    /// Set containing only [`Operation::Get`]
    pub fn read_only() -> Self {
        OperationSet(BTreeSet::from([Operation::Get]))
    }

    pub fn iter(&self) -> impl Iterator<Item = Operation> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set holds no operations
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, op: Operation) -> bool {
        self.0.contains(&op)
    }
}

impl Default for OperationSet {
    fn default() -> Self {
        OperationSet(Operation::ALL.into_iter().collect())
    }
}

impl TryFrom<Vec<Operation>> for OperationSet {
    type Error = GenError;

    fn try_from(ops: Vec<Operation>) -> Result<Self, Self::Error> {
        OperationSet::new(ops)
    }
}

impl From<OperationSet> for Vec<Operation> {
    fn from(set: OperationSet) -> Self {
        set.0.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_default_contains_all_in_order() {
        let ops: Vec<_> = OperationSet::default().iter().collect();
        assert_eq!(ops, vec![Operation::Delete, Operation::Get, Operation::Update]);
    }

    #[test]
    fn test_new_sorts_and_dedups() {
        let set = OperationSet::new([Operation::Update, Operation::Get, Operation::Update]).unwrap();
        let ops: Vec<_> = set.iter().collect();
        assert_eq!(ops, vec![Operation::Get, Operation::Update]);
    }

    #[test]
    fn test_empty_set_rejected() {
        assert_eq!(OperationSet::new([]), Err(GenError::EmptyOperationSet));
    }

    #[test]
    fn test_read_only_set() {
        let set = OperationSet::read_only();
        assert!(!set.is_empty());
        assert_eq!(set.len(), 1);
        assert!(set.contains(Operation::Get));
        assert!(!set.contains(Operation::Delete));
    }

    #[test]
    fn test_parse_operation() {
        assert_eq!("GET".parse::<Operation>(), Ok(Operation::Get));
        assert_eq!(" delete ".parse::<Operation>(), Ok(Operation::Delete));
        assert!("patch".parse::<Operation>().is_err());
    }

    #[test]
    fn test_verbs() {
        assert_eq!(Operation::Get.verb(), "Get");
        assert_eq!(Operation::Update.as_str(), "update");
    }
}
