//! ItemSet value object - ordered, duplicate-free list of names.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// An ordered sequence of unique item names (criteria or alternatives).
///
/// Identity is by name. Order is kept for display and for the row/column
/// layout of the comparison matrix that belongs to the set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ItemSet {
    names: Vec<String>,
}

impl ItemSet {
    /// Creates an empty item set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates an item set, rejecting blank and duplicate names.
    ///
    /// Names are trimmed before comparison.
    pub fn try_new<I, S>(names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .try_fold(Self::empty(), |set, name| set.with_item(name))
    }

    /// Returns a new set with `name` appended.
    pub fn with_item(&self, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("item name"));
        }
        if self.contains(&name) {
            return Err(ValidationError::duplicate_item("item set", name));
        }

        let mut names = self.names.clone();
        names.push(name);
        Ok(Self { names })
    }

    /// Returns a new set without `name`, together with the index it occupied.
    pub fn without_item(&self, name: &str) -> Result<(Self, usize), ValidationError> {
        let index = self
            .index_of(name)
            .ok_or_else(|| ValidationError::unknown_item("item set", name))?;

        let mut names = self.names.clone();
        names.remove(index);
        Ok((Self { names }, index))
    }

    /// Returns the position of `name`, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name.trim())
    }

    /// Returns true if `name` is in the set.
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Returns the name at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the set has no items.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns the names as a slice.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl TryFrom<Vec<String>> for ItemSet {
    type Error = ValidationError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::try_new(names)
    }
}

impl From<ItemSet> for Vec<String> {
    fn from(set: ItemSet) -> Self {
        set.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_preserves_order() {
        let set = ItemSet::try_new(["Cost", "Quality", "Speed"]).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.get(0), Some("Cost"));
        assert_eq!(set.get(2), Some("Speed"));
    }

    #[test]
    fn try_new_rejects_duplicates() {
        let result = ItemSet::try_new(["Cost", "Quality", "Cost"]);
        assert_eq!(
            result,
            Err(ValidationError::duplicate_item("item set", "Cost"))
        );
    }

    #[test]
    fn try_new_rejects_blank_names() {
        assert!(ItemSet::try_new(["Cost", "   "]).is_err());
    }

    #[test]
    fn names_are_trimmed() {
        let set = ItemSet::try_new(["  Cost "]).unwrap();
        assert_eq!(set.get(0), Some("Cost"));
        assert_eq!(set.index_of(" Cost"), Some(0));
    }

    #[test]
    fn with_item_leaves_original_untouched() {
        let original = ItemSet::try_new(["A"]).unwrap();
        let extended = original.with_item("B").unwrap();

        assert_eq!(original.len(), 1);
        assert_eq!(extended.len(), 2);
    }

    #[test]
    fn without_item_reports_removed_index() {
        let set = ItemSet::try_new(["A", "B", "C"]).unwrap();
        let (remaining, index) = set.without_item("B").unwrap();

        assert_eq!(index, 1);
        assert_eq!(remaining.names(), &["A".to_string(), "C".to_string()]);
    }

    #[test]
    fn without_unknown_item_fails() {
        let set = ItemSet::try_new(["A"]).unwrap();
        assert!(set.without_item("Z").is_err());
    }

    #[test]
    fn deserializes_from_json_array() {
        let set: ItemSet = serde_json::from_str(r#"["A", "B"]"#).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn deserialization_rejects_duplicates() {
        let result: Result<ItemSet, _> = serde_json::from_str(r#"["A", "A"]"#);
        assert!(result.is_err());
    }
}
